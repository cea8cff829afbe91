//! Random strategy - makes random legal moves.
//!
//! Baseline opponent for the simulator and for tests. Seedable, so a game
//! between random players replays exactly from the same seeds.

use std::sync::Mutex;

use async_trait::async_trait;
use rand::prelude::*;

use super::trait_def::{PlayerKind, PlayerStrategy, StrategyError};
use crate::domain::{Card, TurnView};

/// Chooses uniformly at random among legal bids and plays.
pub struct RandomPlayer {
    /// `choose_*` take `&self`, the RNG needs `&mut`.
    rng: Mutex<StdRng>,
}

impl RandomPlayer {
    pub const NAME: &'static str = "random";

    /// `None` draws a seed from the thread RNG.
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    fn pick<T: Copy>(&self, options: &[T], what: &str) -> Result<T, StrategyError> {
        if options.is_empty() {
            return Err(StrategyError::NoLegalMove(format!("no legal {what} available")));
        }
        let mut rng = self
            .rng
            .lock()
            .map_err(|e| StrategyError::Internal(format!("RNG lock poisoned: {e}")))?;
        options
            .choose(&mut *rng)
            .copied()
            .ok_or_else(|| StrategyError::Internal(format!("failed to choose random {what}")))
    }
}

#[async_trait]
impl PlayerStrategy for RandomPlayer {
    async fn choose_bid(&self, view: &TurnView<'_>) -> Result<u8, StrategyError> {
        self.pick(&view.legal_bids(), "bid")
    }

    async fn choose_card(&self, view: &TurnView<'_>) -> Result<Card, StrategyError> {
        self.pick(&view.legal_plays(), "card")
    }

    fn kind(&self) -> PlayerKind {
        PlayerKind::Computer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cards_parsing::try_parse_cards;
    use crate::domain::{GameContext, RoundContext, TrickContext};

    fn context_with_lead(lead: &str) -> GameContext {
        let mut ctx = GameContext::from_names(["a", "b", "c"]);
        let mut round = RoundContext::new(4, None, 0, 3);
        let mut trick = TrickContext::new(1, 1);
        trick.record_play(1, lead.parse().unwrap());
        round.start_trick(trick);
        ctx.start_round(round);
        ctx
    }

    #[tokio::test]
    async fn random_player_stays_legal() {
        let ctx = context_with_lead("5D");
        let hand = try_parse_cards(["2D", "KD", "AS", "WZ"]).unwrap();
        let view = TurnView::new(2, &hand, &ctx);
        let player = RandomPlayer::new(Some(7));
        for _ in 0..50 {
            let card = player.choose_card(&view).await.unwrap();
            assert!(card.is_suit(crate::domain::Suit::Diamonds));
            let bid = player.choose_bid(&view).await.unwrap();
            assert!(bid <= 4);
        }
    }

    #[tokio::test]
    async fn same_seed_same_choices() {
        let ctx = context_with_lead("5D");
        let hand = try_parse_cards(["2C", "KH", "AS", "WZ", "JR"]).unwrap();
        let view = TurnView::new(2, &hand, &ctx);
        let a = RandomPlayer::new(Some(99));
        let b = RandomPlayer::new(Some(99));
        for _ in 0..20 {
            assert_eq!(
                a.choose_card(&view).await.unwrap(),
                b.choose_card(&view).await.unwrap()
            );
        }
    }

    #[tokio::test]
    async fn empty_hand_has_no_legal_move() {
        let ctx = context_with_lead("5D");
        let view = TurnView::new(2, &[], &ctx);
        let err = RandomPlayer::new(Some(1)).choose_card(&view).await.unwrap_err();
        assert!(matches!(err, StrategyError::NoLegalMove(_)));
    }
}
