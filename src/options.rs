//! Table configuration options.

/// Configuration options for a table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjtable::TableOptions;
///
/// let options = TableOptions::default()
///     .with_dealer_stands_on(17)
///     .with_min_bet(5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableOptions {
    /// The dealer hits while the hand total is below this value.
    pub dealer_stands_on: u8,
    /// Smallest accepted ante.
    pub min_bet: u64,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            dealer_stands_on: 17,
            min_bet: 1,
        }
    }
}

impl TableOptions {
    /// Sets the total at which the dealer stands.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_dealer_stands_on(18);
    /// assert_eq!(options.dealer_stands_on, 18);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_on(mut self, total: u8) -> Self {
        self.dealer_stands_on = total;
        self
    }

    /// Sets the minimum ante.
    ///
    /// A minimum of zero is treated as one.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_min_bet(10);
    /// assert_eq!(options.min_bet, 10);
    ///
    /// let options = TableOptions::default().with_min_bet(0);
    /// assert_eq!(options.min_bet, 1);
    /// ```
    #[must_use]
    pub const fn with_min_bet(mut self, min_bet: u64) -> Self {
        self.min_bet = if min_bet == 0 { 1 } else { min_bet };
        self
    }
}
