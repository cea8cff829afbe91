//! The presentation boundary between the engine and whatever shows the game.
//!
//! Every notification is awaited by the engine before it continues, so a
//! front-end controls pacing simply by not returning early. Display methods
//! default to doing nothing; only player creation must be provided.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{Card, GameContext, PlayerInfo};
use crate::players::Player;

#[derive(Debug, Error)]
pub enum FrontendError {
    /// The user or the output went away before the game finished
    #[error("front-end closed")]
    Closed,
    #[error("front-end I/O failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("front-end failure: {0}")]
    Other(String),
}

#[async_trait]
pub trait Frontend: Send + Sync {
    /// Build the seats for a new game. The result is validated by the engine.
    async fn prompt_player_creation(&self) -> Result<Vec<Player>, FrontendError>;

    async fn display_start_game(&self) -> Result<(), FrontendError> {
        Ok(())
    }

    async fn display_start_round(&self, _round_no: u8) -> Result<(), FrontendError> {
        Ok(())
    }

    /// Shown before cards go out; `pause` is the configured deal delay.
    async fn display_deal_in_progress(&self, _pause: Duration) -> Result<(), FrontendError> {
        Ok(())
    }

    async fn display_deal_done(
        &self,
        _dealer: &PlayerInfo,
        _trump_card: Option<Card>,
    ) -> Result<(), FrontendError> {
        Ok(())
    }

    async fn display_player_bid(&self, _player: &PlayerInfo, _bid: u8) -> Result<(), FrontendError> {
        Ok(())
    }

    async fn display_bid_outcome(&self, _round_no: u8, _total_bids: u32) -> Result<(), FrontendError> {
        Ok(())
    }

    async fn display_start_trick(&self, _trick_no: u8) -> Result<(), FrontendError> {
        Ok(())
    }

    async fn display_turn_taken(&self, _card: Card, _player: &PlayerInfo) -> Result<(), FrontendError> {
        Ok(())
    }

    async fn display_trick_winner(
        &self,
        _winner: &PlayerInfo,
        _winning_card: Card,
    ) -> Result<(), FrontendError> {
        Ok(())
    }

    /// Scores are final for the round just played; per-round deltas live on
    /// `ctx.current_round()`.
    async fn display_round_scores(&self, _ctx: &GameContext) -> Result<(), FrontendError> {
        Ok(())
    }

    async fn display_game_over(&self, _ctx: &GameContext) -> Result<(), FrontendError> {
        Ok(())
    }
}
