//! Player decision strategy trait definition.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{Card, TurnView};

/// Errors that can occur while a strategy makes a decision.
#[derive(Debug, Error)]
pub enum StrategyError {
    /// The party answering for this player went away (closed channel)
    #[error("player input disconnected")]
    Disconnected,
    /// Asked to decide with nothing legal to choose from
    #[error("no legal move: {0}")]
    NoLegalMove(String),
    /// Strategy encountered an internal error
    #[error("strategy internal error: {0}")]
    Internal(String),
}

/// Whether decisions come from a person or are computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerKind {
    Human,
    Computer,
}

/// Decision capability behind a [`Player`](super::Player).
///
/// Implementations receive the view visible to their player and should pick
/// from `view.legal_bids()` / `view.legal_plays()`. The owning `Player`
/// validates every answer, so a misbehaving strategy is reported rather than
/// trusted.
#[async_trait]
pub trait PlayerStrategy: Send + Sync {
    /// Choose a bid in `0..=round_no`.
    async fn choose_bid(&self, view: &TurnView<'_>) -> Result<u8, StrategyError>;

    /// Choose a card from the hand that respects follow-suit.
    async fn choose_card(&self, view: &TurnView<'_>) -> Result<Card, StrategyError>;

    fn kind(&self) -> PlayerKind;
}
