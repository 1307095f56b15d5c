//! The main menu: play a hand, create a player, or show statistics.

use tracing::{debug, info};

use crate::console::{Console, prompt_until};
use crate::error::{ConsoleError, MenuError, RoundError, StorageError};
use crate::game::Game;
use crate::participant::Player;
use crate::result::{Outcome, Settlement};
use crate::storage::Storage;

/// A main menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Play one hand with a saved player.
    Play,
    /// Create and save a new player.
    NewPlayer,
    /// Show a saved player's statistics.
    Stats,
    /// Leave the menu.
    Exit,
}

impl MenuChoice {
    /// Parses a menu answer.
    ///
    /// # Errors
    ///
    /// Returns the message to show for an unknown choice.
    pub fn parse(answer: &str) -> Result<Self, String> {
        match answer.trim().to_lowercase().as_str() {
            "1" => Ok(Self::Play),
            "2" => Ok(Self::NewPlayer),
            "3" => Ok(Self::Stats),
            "exit" | "quit" => Ok(Self::Exit),
            _ => Err("Please choose 1, 2, 3, or exit.".to_owned()),
        }
    }
}

const MENU: &str = "1) Play a hand\n2) New player\n3) Show stats\nexit) Quit";

/// Names double as save file names.
fn parse_name(answer: &str) -> Result<String, String> {
    let name = answer.trim();
    if name.is_empty() {
        return Err("Name cannot be empty.".to_owned());
    }
    if name.contains(['/', '\\'])
        || name.contains("..")
        || name.chars().any(char::is_control)
    {
        return Err("Name cannot contain '/', '\\', '..', or control characters.".to_owned());
    }
    Ok(name.to_owned())
}

/// Runs the menu until the player exits or input ends.
///
/// # Errors
///
/// Returns an error if the console fails mid-action, a round fails with a
/// deck error, or a player cannot be saved.
pub fn main_menu<C, S>(game: &mut Game, storage: &mut S, console: &mut C) -> Result<(), MenuError>
where
    C: Console + ?Sized,
    S: Storage + ?Sized,
{
    loop {
        console.display(MENU);
        let choice = match prompt_until(console, "> ", MenuChoice::parse) {
            Ok(choice) => choice,
            Err(ConsoleError::Closed) => return Ok(()),
            Err(err) => return Err(err.into()),
        };
        debug!(?choice, "menu choice");

        match choice {
            MenuChoice::Play => play_hand(game, storage, console)?,
            MenuChoice::NewPlayer => {
                new_player(storage, console)?;
            }
            MenuChoice::Stats => show_stats(storage, console)?,
            MenuChoice::Exit => return Ok(()),
        }
    }
}

/// Loads `name`, reporting a missing or unreadable record on the console.
fn load_player<C, S>(storage: &S, console: &mut C, name: &str) -> Option<Player>
where
    C: Console + ?Sized,
    S: Storage + ?Sized,
{
    match storage.load(name) {
        Ok(record) => Some(Player::from_record(record)),
        Err(StorageError::NotFound(_)) => {
            console.display(&format!("No player named {name}."));
            None
        }
        Err(err) => {
            console.display(&format!("Could not load {name}: {err}"));
            None
        }
    }
}

fn describe(settlement: &Settlement) -> String {
    let totals = format!(
        "You: {} Dealer: {}",
        settlement.player_total, settlement.dealer_total
    );
    match settlement.outcome {
        Outcome::Victory => format!("Victory! {totals}. You won {}.", settlement.net),
        Outcome::Defeat => format!(
            "Defeat. {totals}. You lost {}.",
            settlement.net.unsigned_abs()
        ),
        Outcome::Push => format!("Push. {totals}. Your bet is returned."),
    }
}

/// Plays one hand with a saved player and saves the result.
///
/// # Errors
///
/// Returns an error if the console fails, the deck runs out, or the player
/// cannot be saved.
pub fn play_hand<C, S>(game: &mut Game, storage: &mut S, console: &mut C) -> Result<(), MenuError>
where
    C: Console + ?Sized,
    S: Storage + ?Sized,
{
    let name = prompt_until(console, "Player name: ", parse_name)?;
    let Some(mut player) = load_player(storage, console, &name) else {
        return Ok(());
    };

    match game.new_hand(&mut player, console) {
        Ok(settlement) => {
            console.display(&describe(&settlement));
            console.display(&format!("Bankroll: {}", player.bankroll()));
        }
        Err(RoundError::OutOfFunds) => {
            console.display("You are out of money.");
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    }

    storage.save(player.record()).map_err(MenuError::Save)?;
    Ok(())
}

/// Asks for a name and starting bankroll, then saves the new player.
///
/// # Errors
///
/// Returns an error if the console fails or the player cannot be saved.
pub fn new_player<C, S>(storage: &mut S, console: &mut C) -> Result<Player, MenuError>
where
    C: Console + ?Sized,
    S: Storage + ?Sized,
{
    let name = prompt_until(console, "Player name: ", |answer| {
        let name = parse_name(answer)?;
        match storage.load(&name) {
            Ok(_) => Err(format!("A player named {name} already exists.")),
            Err(StorageError::NotFound(_)) => Ok(name),
            Err(err) => Err(format!("Could not read saved player {name}: {err}")),
        }
    })?;

    let bankroll = prompt_until(console, "Starting bankroll: ", |answer| {
        answer
            .trim()
            .parse::<u64>()
            .map_err(|_| "Bankroll must be a whole number.".to_owned())
    })?;

    let player = Player::new(name, bankroll);
    storage.save(player.record()).map_err(MenuError::Save)?;
    info!(player = %player.name(), bankroll, "created player");
    console.display(&format!(
        "Created {} with a bankroll of {bankroll}.",
        player.name()
    ));
    Ok(player)
}

/// Shows a saved player's statistics.
///
/// # Errors
///
/// Returns an error if the console fails.
pub fn show_stats<C, S>(storage: &S, console: &mut C) -> Result<(), MenuError>
where
    C: Console + ?Sized,
    S: Storage + ?Sized,
{
    let name = prompt_until(console, "Player name: ", parse_name)?;
    if let Some(player) = load_player(storage, console, &name) {
        console.display(&player.stats_report());
    }
    Ok(())
}
