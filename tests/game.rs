//! Game integration tests.

use bjtable::{
    Card, DECK_SIZE, Deck, Game, Move, Outcome, Participant, Player, RoundError, RoundPhase,
    RoundStatus, ScriptedConsole, Suit, TableOptions, TurnState, Value,
};

const fn card(suit: Suit, value: Value) -> Card {
    Card::new(suit, value)
}

/// Builds a game whose deck yields `draws` in order.
///
/// Opening cards are dealt player, dealer, player, dealer.
fn game_with_draws(draws: &[Card]) -> Game {
    let mut game = Game::new(TableOptions::default(), 1);
    game.set_deck(Deck::from_cards(draws.to_vec()));
    game
}

#[test]
fn deal_alternates_and_hides_dealer_first_card() {
    let mut game = game_with_draws(&[
        card(Suit::Hearts, Value::Ten),   // player
        card(Suit::Clubs, Value::Nine),   // dealer (hidden)
        card(Suit::Spades, Value::Six),   // player
        card(Suit::Diamonds, Value::Two), // dealer
    ]);
    let mut player = Player::new("Player 1", 100);
    let mut console = ScriptedConsole::new(["25"]);
    assert_eq!(game.deck().peek(), Some(&card(Suit::Hearts, Value::Ten)));

    game.deal(&mut player, &mut console).unwrap();
    assert_eq!(game.deck().peek(), None);

    assert_eq!(player.bet(), 25);
    assert_eq!(player.hand().len(), 2);
    assert_eq!(player.hand().total(), 16);
    assert_eq!(player.hand().to_string(), "6♠\n10♥");

    let dealer = game.dealer().hand();
    assert_eq!(dealer.len(), 2);
    assert_eq!(dealer.total(), 11);
    assert_eq!(dealer.to_string(), "2♦\n##");

    assert!(game.deck().is_empty());
    assert!(game.can_player_move());
    assert_eq!(game.phase(), RoundPhase::Alternate);
    assert_eq!(game.player_state(), TurnState::Waiting);
}

#[test]
fn deal_resets_previous_hands() {
    let mut game = game_with_draws(&[
        card(Suit::Hearts, Value::Ten),
        card(Suit::Clubs, Value::Ten),
        card(Suit::Spades, Value::Eight),
        card(Suit::Diamonds, Value::Eight),
        card(Suit::Hearts, Value::Two),
        card(Suit::Clubs, Value::Three),
        card(Suit::Spades, Value::Four),
        card(Suit::Diamonds, Value::Five),
    ]);
    let mut player = Player::new("Player 1", 100);
    let mut console = ScriptedConsole::new(["10", "10"]);

    game.deal(&mut player, &mut console).unwrap();
    game.deal(&mut player, &mut console).unwrap();

    assert_eq!(player.hand().len(), 2);
    assert_eq!(player.hand().total(), 6);
    assert_eq!(game.dealer().hand().len(), 2);
    assert_eq!(game.dealer().hand().total(), 8);
}

#[test]
fn play_round_player_bust_ends_round_before_dealer_moves() {
    let mut game = game_with_draws(&[
        card(Suit::Hearts, Value::Ten),
        card(Suit::Clubs, Value::Nine),
        card(Suit::Spades, Value::Six),
        card(Suit::Diamonds, Value::Two),
        card(Suit::Hearts, Value::King), // player hit
        card(Suit::Clubs, Value::Five),  // would be the dealer's draw
    ]);
    let mut player = Player::new("Player 1", 100);
    let mut console = ScriptedConsole::new(["100", "hit"]);

    game.deal(&mut player, &mut console).unwrap();
    assert!(game.can_player_move());

    let status = game.play_round(&mut player, &mut console).unwrap();
    assert_eq!(status, RoundStatus::Over);
    assert!(!game.can_player_move());
    assert!(player.has_busted());
    assert_eq!(game.dealer().hand().len(), 2);
    assert_eq!(game.deck().len(), 1);
    assert_eq!(game.dealer_state(), TurnState::Waiting);
}

#[test]
fn play_round_hit_continues() {
    let mut game = game_with_draws(&[
        card(Suit::Hearts, Value::Five),
        card(Suit::Clubs, Value::Ten),
        card(Suit::Spades, Value::Six),
        card(Suit::Diamonds, Value::Seven),
        card(Suit::Clubs, Value::Two), // player hit
    ]);
    let mut player = Player::new("Player 1", 100);
    let mut console = ScriptedConsole::new(["10", "Hit"]);

    game.deal(&mut player, &mut console).unwrap();
    let status = game.play_round(&mut player, &mut console).unwrap();

    assert_eq!(status, RoundStatus::Continue);
    assert!(game.can_player_move());
    assert_eq!(player.hand().total(), 13);
    assert_eq!(game.player_state(), TurnState::Acting);
    // The dealer stood on 17 but will be asked again next step.
    assert_eq!(game.dealer_state(), TurnState::Acting);
}

#[test]
fn play_round_stand_lets_dealer_keep_drawing() {
    let mut game = game_with_draws(&[
        card(Suit::Hearts, Value::Ten),
        card(Suit::Clubs, Value::Ten),
        card(Suit::Spades, Value::Eight),
        card(Suit::Diamonds, Value::Six),
        card(Suit::Clubs, Value::Five), // dealer hit
    ]);
    let mut player = Player::new("Player 1", 100);
    let mut console = ScriptedConsole::new(["10", "stand"]);

    game.deal(&mut player, &mut console).unwrap();

    let status = game.play_round(&mut player, &mut console).unwrap();
    assert_eq!(status, RoundStatus::Continue);
    assert!(!game.can_player_move());
    assert_eq!(game.dealer().hand().total(), 21);
    assert!(game.deck().is_empty());
    assert_eq!(game.player_state(), TurnState::Done);
    assert_eq!(game.dealer_state(), TurnState::Acting);

    // The player is not asked again; the dealer now stands.
    let prompts_before = console.prompts.len();
    let status = game.play_round(&mut player, &mut console).unwrap();
    assert_eq!(status, RoundStatus::Over);
    assert_eq!(console.prompts.len(), prompts_before);
    assert_eq!(game.phase(), RoundPhase::Reveal);
    assert_eq!(game.dealer_state(), TurnState::Done);
}

#[test]
fn play_round_dealer_bust_ends_round() {
    let mut game = game_with_draws(&[
        card(Suit::Hearts, Value::Five),
        card(Suit::Clubs, Value::Ten),
        card(Suit::Spades, Value::Four),
        card(Suit::Diamonds, Value::Six),
        card(Suit::Clubs, Value::Two),   // player hit
        card(Suit::Spades, Value::King), // dealer hit
    ]);
    let mut player = Player::new("Player 1", 100);
    let mut console = ScriptedConsole::new(["10", "hit"]);

    game.deal(&mut player, &mut console).unwrap();
    let status = game.play_round(&mut player, &mut console).unwrap();

    assert_eq!(status, RoundStatus::Over);
    assert!(game.can_player_move());
    assert!(game.dealer().has_busted());
    assert_eq!(game.dealer_state(), TurnState::Done);
    assert_eq!(game.evaluate(&player), Outcome::Victory);
}

#[test]
fn play_round_double_down_freezes_player() {
    let mut game = game_with_draws(&[
        card(Suit::Hearts, Value::Five),
        card(Suit::Clubs, Value::Ten),
        card(Suit::Spades, Value::Six),
        card(Suit::Diamonds, Value::Seven),
        card(Suit::Spades, Value::Ten), // double down draw
    ]);
    let mut player = Player::new("Player 1", 100);
    let mut console = ScriptedConsole::new(["10", "double down"]);

    game.deal(&mut player, &mut console).unwrap();
    let status = game.play_round(&mut player, &mut console).unwrap();

    assert_eq!(status, RoundStatus::Over);
    assert!(!game.can_player_move());
    assert_eq!(player.bet(), 20);
    assert_eq!(player.hand().len(), 3);
    assert_eq!(player.hand().total(), 21);
}

#[test]
fn full_round_bust_loses_bet() {
    let mut game = game_with_draws(&[
        card(Suit::Hearts, Value::Ten),
        card(Suit::Clubs, Value::Nine),
        card(Suit::Spades, Value::Six),
        card(Suit::Diamonds, Value::Eight),
        card(Suit::Hearts, Value::King),
    ]);
    let mut player = Player::new("Player 1", 100);
    let mut console = ScriptedConsole::new(["100", "Hit"]);

    let settlement = game.play_hand(&mut player, &mut console).unwrap();

    assert_eq!(settlement.outcome, Outcome::Defeat);
    assert_eq!(settlement.net, -100);
    assert_eq!(player.bankroll(), 0);
    assert_eq!(player.record().losses, 1);
    assert_eq!(game.phase(), RoundPhase::Settle);
}

#[test]
fn full_round_double_down_pays_doubled_bet() {
    let mut game = game_with_draws(&[
        card(Suit::Hearts, Value::Five),
        card(Suit::Clubs, Value::Ten),
        card(Suit::Spades, Value::Six),
        card(Suit::Diamonds, Value::Seven),
        card(Suit::Spades, Value::Ten),
    ]);
    let mut player = Player::new("Player 1", 100);
    let mut console = ScriptedConsole::new(["10", "double down"]);

    let settlement = game.play_hand(&mut player, &mut console).unwrap();

    assert_eq!(settlement.outcome, Outcome::Victory);
    assert_eq!(settlement.bet, 20);
    assert_eq!(settlement.net, 20);
    assert_eq!(settlement.player_total, 21);
    assert_eq!(settlement.dealer_total, 17);
    assert_eq!(player.bankroll(), 120);
    assert_eq!(player.record().wins, 1);
}

#[test]
fn natural_beats_dealer_multi_card_21() {
    let mut game = game_with_draws(&[
        card(Suit::Spades, Value::Ace),
        card(Suit::Clubs, Value::Ten),
        card(Suit::Hearts, Value::King),
        card(Suit::Diamonds, Value::Six),
        card(Suit::Clubs, Value::Five), // dealer hit
    ]);
    let mut player = Player::new("Player 1", 100);
    let mut console = ScriptedConsole::new(["10", "stand"]);

    let settlement = game.play_hand(&mut player, &mut console).unwrap();

    assert_eq!(settlement.player_total, 21);
    assert_eq!(settlement.dealer_total, 21);
    assert_eq!(game.dealer().hand().len(), 3);
    assert_eq!(settlement.outcome, Outcome::Victory);
    assert_eq!(player.bankroll(), 110);
}

#[test]
fn dealer_natural_beats_player_multi_card_21() {
    let mut game = game_with_draws(&[
        card(Suit::Hearts, Value::Ten),
        card(Suit::Clubs, Value::Ace),
        card(Suit::Spades, Value::Five),
        card(Suit::Diamonds, Value::King),
        card(Suit::Clubs, Value::Six), // player hit
    ]);
    let mut player = Player::new("Player 1", 100);
    let mut console = ScriptedConsole::new(["10", "hit", "stand"]);

    let settlement = game.play_hand(&mut player, &mut console).unwrap();

    assert_eq!(settlement.player_total, 21);
    assert_eq!(settlement.dealer_total, 21);
    assert_eq!(settlement.outcome, Outcome::Defeat);
    assert_eq!(player.bankroll(), 90);
}

#[test]
fn equal_totals_push_without_bankroll_change() {
    let mut game = game_with_draws(&[
        card(Suit::Hearts, Value::Ten),
        card(Suit::Clubs, Value::Ten),
        card(Suit::Spades, Value::Eight),
        card(Suit::Diamonds, Value::Eight),
    ]);
    let mut player = Player::new("Player 1", 100);
    let mut console = ScriptedConsole::new(["40", "stand"]);

    let settlement = game.play_hand(&mut player, &mut console).unwrap();

    assert_eq!(settlement.outcome, Outcome::Push);
    assert_eq!(settlement.net, 0);
    assert_eq!(player.bankroll(), 100);
    assert_eq!(player.record().pushes, 1);
}

#[test]
fn reveal_turns_hidden_card_face_up() {
    let mut game = game_with_draws(&[
        card(Suit::Hearts, Value::Ten),
        card(Suit::Clubs, Value::Ten),
        card(Suit::Spades, Value::Nine),
        card(Suit::Diamonds, Value::Seven),
    ]);
    let mut player = Player::new("Player 1", 100);
    let mut console = ScriptedConsole::new(["10", "stand"]);

    game.play_hand(&mut player, &mut console).unwrap();

    let dealer = game.dealer().hand();
    assert!(dealer.iter().all(|card| !card.is_face_down()));
    assert_eq!(dealer.to_string(), "7♦\n10♣");
    assert!(console.saw("Dealer's hand:\n7♦\n10♣"));
    // Before the reveal the player only ever saw the mask.
    assert!(console.saw("Dealer's hand:\n7♦\n##"));
}

#[test]
fn ante_without_funds_aborts_round() {
    let mut game = Game::new(TableOptions::default(), 3);
    let mut player = Player::new("Broke", 0);
    let mut console = ScriptedConsole::new(["10"]);

    assert_eq!(
        game.new_hand(&mut player, &mut console).unwrap_err(),
        RoundError::OutOfFunds
    );
    assert!(console.prompts.is_empty());
}

#[test]
fn min_bet_above_bankroll_is_out_of_funds() {
    let options = TableOptions::default().with_min_bet(50);
    let mut game = Game::new(options, 3);
    let mut player = Player::new("Short", 40);
    let mut console = ScriptedConsole::new(["40"]);

    assert_eq!(
        game.new_hand(&mut player, &mut console).unwrap_err(),
        RoundError::OutOfFunds
    );
}

#[test]
fn drawing_past_the_deck_is_an_error() {
    let mut game = game_with_draws(&[
        card(Suit::Hearts, Value::Ten),
        card(Suit::Clubs, Value::Nine),
        card(Suit::Spades, Value::Six),
    ]);
    let mut player = Player::new("Player 1", 100);
    let mut console = ScriptedConsole::new(["10"]);

    assert_eq!(
        game.play_hand(&mut player, &mut console).unwrap_err(),
        RoundError::DeckExhausted
    );
}

#[test]
fn closed_input_ends_round_with_error() {
    let mut game = game_with_draws(&[
        card(Suit::Hearts, Value::Ten),
        card(Suit::Clubs, Value::Nine),
        card(Suit::Spades, Value::Six),
        card(Suit::Diamonds, Value::Two),
    ]);
    let mut player = Player::new("Player 1", 100);
    let mut console = ScriptedConsole::new(["10"]);

    assert_eq!(
        game.play_hand(&mut player, &mut console).unwrap_err(),
        RoundError::InputClosed
    );
    assert_eq!(player.bankroll(), 100);
}

#[test]
fn new_hand_uses_a_fresh_full_deck() {
    let mut game = Game::new(TableOptions::default(), 42);
    let mut player = Player::new("Player 1", 100);
    let mut console = ScriptedConsole::new(["10", "stand"]);

    let settlement = game.new_hand(&mut player, &mut console).unwrap();

    let used = player.hand().len() + game.dealer().hand().len();
    assert_eq!(game.deck().len() + used, DECK_SIZE);
    let expected = match settlement.outcome {
        Outcome::Victory => 110,
        Outcome::Defeat => 90,
        Outcome::Push => 100,
    };
    assert_eq!(player.bankroll(), expected);
    assert_eq!(player.record().rounds(), 1);
}

#[test]
fn same_seed_deals_same_cards() {
    let mut first = Game::new(TableOptions::default(), 7);
    let mut second = Game::new(TableOptions::default(), 7);
    let mut a = Player::new("A", 100);
    let mut b = Player::new("B", 100);

    first
        .new_hand(&mut a, &mut ScriptedConsole::new(["10", "stand"]))
        .unwrap();
    second
        .new_hand(&mut b, &mut ScriptedConsole::new(["10", "stand"]))
        .unwrap();

    assert_eq!(a.hand(), b.hand());
    assert_eq!(first.dealer().hand(), second.dealer().hand());
}

#[test]
fn dealer_stand_total_is_configurable() {
    let options = TableOptions::default().with_dealer_stands_on(18);
    let mut game = Game::new(options, 1);
    game.set_deck(Deck::from_cards(vec![
        card(Suit::Hearts, Value::Ten),
        card(Suit::Clubs, Value::Ten),
        card(Suit::Spades, Value::Nine),
        card(Suit::Diamonds, Value::Seven),
        card(Suit::Clubs, Value::Two), // dealer hits on 17
    ]));
    let mut player = Player::new("Player 1", 100);
    let mut console = ScriptedConsole::new(["10", "stand"]);

    let settlement = game.play_hand(&mut player, &mut console).unwrap();

    assert_eq!(game.dealer().stands_on(), 18);
    assert_eq!(settlement.dealer_total, 19);
    assert_eq!(settlement.outcome, Outcome::Push);
}

#[test]
fn turn_state_follows_moves() {
    assert_eq!(TurnState::after(Move::Hit, false), TurnState::Acting);
    assert_eq!(TurnState::after(Move::Hit, true), TurnState::Done);
    assert_eq!(TurnState::after(Move::Stand, false), TurnState::Done);
    assert_eq!(TurnState::after(Move::DoubleDown, false), TurnState::Done);
    assert_eq!(TurnState::default(), TurnState::Waiting);
}
