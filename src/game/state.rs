//! Round state types.

/// Phase of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundPhase {
    /// Taking the ante and dealing the opening cards.
    #[default]
    Deal,
    /// Player and dealer take turns.
    Alternate,
    /// Dealer turns the hidden card over.
    Reveal,
    /// Hands are compared.
    Evaluate,
    /// The outcome has been applied to the bankroll.
    Settle,
}

/// What the controller should do after one alternation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    /// Ask both participants again.
    Continue,
    /// Stop alternating and move on to the reveal.
    Over,
}
