//! Domain layer: pure game logic types and helpers.

pub mod bidding;
pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_types;
pub mod deck;
pub mod game_context;
pub mod player_view;
pub mod rules;
pub mod scoring;
pub mod seed_derivation;
pub mod tricks;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod tests_props_deck;
#[cfg(test)]
mod tests_props_legality;
#[cfg(test)]
mod tests_props_trick_winner;

// Re-exports for ergonomics
pub use cards_logic::{calc_winning_card, hand_has_suit, leading_suit, winning_play_index};
pub use cards_types::{Card, Rank, Suit};
pub use deck::Deck;
pub use game_context::{GameContext, Play, PlayerInfo, RoundContext, Seat, TrickContext};
pub use player_view::TurnView;
pub use rules::round_count;
pub use seed_derivation::{derive_dealing_seed, derive_strategy_seed};
