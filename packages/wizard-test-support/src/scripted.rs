//! Strategies that answer from a script.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use wizard::players::create_computer;
use wizard::{Card, Player, PlayerKind, PlayerStrategy, StrategyError, TurnView};

/// Pops answers from fixed queues; once a queue runs dry it falls back to the
/// lowest legal choice. Answers are not checked, so scripts can be illegal.
#[derive(Default)]
pub struct ScriptedStrategy {
    bids: Mutex<VecDeque<u8>>,
    cards: Mutex<VecDeque<Card>>,
}

impl ScriptedStrategy {
    pub fn new(bids: impl IntoIterator<Item = u8>, cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            bids: Mutex::new(bids.into_iter().collect()),
            cards: Mutex::new(cards.into_iter().collect()),
        }
    }

    /// Scripted bids only; cards fall back to the lowest legal play.
    pub fn with_bids(bids: impl IntoIterator<Item = u8>) -> Self {
        Self::new(bids, Vec::new())
    }

    /// Scripted cards only; bids fall back to zero.
    pub fn with_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self::new(Vec::new(), cards)
    }

    fn next<T>(queue: &Mutex<VecDeque<T>>) -> Result<Option<T>, StrategyError> {
        queue
            .lock()
            .map(|mut q| q.pop_front())
            .map_err(|_| StrategyError::Internal("script lock poisoned".into()))
    }
}

#[async_trait]
impl PlayerStrategy for ScriptedStrategy {
    async fn choose_bid(&self, view: &TurnView<'_>) -> Result<u8, StrategyError> {
        match Self::next(&self.bids)? {
            Some(bid) => Ok(bid),
            None => Ok(view.legal_bids().first().copied().unwrap_or(0)),
        }
    }

    async fn choose_card(&self, view: &TurnView<'_>) -> Result<Card, StrategyError> {
        match Self::next(&self.cards)? {
            Some(card) => Ok(card),
            None => view
                .legal_plays()
                .first()
                .copied()
                .ok_or_else(|| StrategyError::NoLegalMove("empty hand".into())),
        }
    }

    fn kind(&self) -> PlayerKind {
        PlayerKind::Computer
    }
}

/// `count` seats named `cpu0..` playing the given registered strategy.
///
/// Panics if the strategy is not registered.
pub fn computer_seats(count: usize, strategy: &str, seed: Option<u64>) -> Vec<Player> {
    (0..count)
        .map(|seat| {
            let seat_seed = seed.map(|s| s.wrapping_add(seat as u64));
            create_computer(format!("cpu{seat}"), strategy, seat_seed)
                .unwrap_or_else(|| panic!("strategy '{strategy}' is not registered"))
        })
        .collect()
}
