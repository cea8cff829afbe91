//! A seat at the table: identity, hand and decision strategy.

use std::fmt;

use tracing::warn;

use super::trait_def::{PlayerKind, PlayerStrategy};
use crate::domain::bidding::validate_bid;
use crate::domain::tricks::check_play;
use crate::domain::{Card, GameContext, Seat, TurnView};
use crate::error::EngineError;

pub struct Player {
    name: String,
    hand: Vec<Card>,
    strategy: Box<dyn PlayerStrategy>,
}

impl Player {
    /// Surrounding whitespace is dropped from the name.
    pub fn new(name: impl Into<String>, strategy: Box<dyn PlayerStrategy>) -> Self {
        let name: String = name.into();
        Self {
            name: name.trim().to_string(),
            hand: Vec::new(),
            strategy,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    pub fn kind(&self) -> PlayerKind {
        self.strategy.kind()
    }

    /// Used only while dealing.
    pub fn take_card(&mut self, card: Card) {
        self.hand.push(card);
        self.hand.sort();
    }

    /// Ask the strategy for a bid and check it lies in `0..=round_no`.
    pub async fn make_bid(&self, seat: Seat, ctx: &GameContext) -> Result<u8, EngineError> {
        let view = TurnView::new(seat, &self.hand, ctx);
        let bid = self.strategy.choose_bid(&view).await?;
        validate_bid(view.round_no(), bid).map_err(|e| {
            warn!(player = %self.name, seat, bid, "strategy produced an out-of-range bid");
            EngineError::from(e)
        })
    }

    /// Ask the strategy for a card, enforce follow-suit, and remove the card
    /// from the hand exactly once.
    pub async fn make_turn(&mut self, seat: Seat, ctx: &GameContext) -> Result<Card, EngineError> {
        let view = TurnView::new(seat, &self.hand, ctx);
        let card = self.strategy.choose_card(&view).await?;
        let pos = check_play(&self.hand, view.leading_suit(), card).map_err(|e| {
            warn!(player = %self.name, seat, %card, error = %e, "strategy produced an illegal card");
            EngineError::from(e)
        })?;
        Ok(self.hand.remove(pos))
    }
}

impl fmt::Debug for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Player")
            .field("name", &self.name)
            .field("hand", &self.hand)
            .field("kind", &self.strategy.kind())
            .finish()
    }
}
