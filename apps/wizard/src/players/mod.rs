//! Players - seats at the table and the strategies that decide for them.
//!
//! This module provides:
//! - `Player`: name, hand, and the validated `make_bid` / `make_turn` / `take_card` capability
//! - `PlayerStrategy`: the decision trait behind every player
//! - `HumanPlayer`: decisions collected by the front-end over a channel
//! - `ComputerPlayer` and `RandomPlayer`: computed decisions
//! - a registry of computer strategies by name

mod computer;
mod human;
mod player;
mod random;
pub mod registry;
mod trait_def;

pub use computer::ComputerPlayer;
pub use human::{HumanPlayer, HumanPrompt};
pub use player::Player;
pub use random::RandomPlayer;
pub use trait_def::{PlayerKind, PlayerStrategy, StrategyError};

/// Build a computer-controlled player from a registered strategy name.
///
/// Returns None if the strategy name is unrecognized.
pub fn create_computer(name: impl Into<String>, strategy: &str, seed: Option<u64>) -> Option<Player> {
    registry::by_name(strategy).map(|factory| Player::new(name, (factory.make)(seed)))
}
