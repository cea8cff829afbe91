//! Human players answer through the front-end over a request/response channel.
//!
//! The engine awaits each reply, so it is suspended while the person thinks
//! and the front-end stays free to keep its own loop running.

use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};
use tracing::debug;

use super::trait_def::{PlayerKind, PlayerStrategy, StrategyError};
use crate::domain::{Card, Seat, Suit, TurnView};

/// A decision the front-end must collect from a person.
#[derive(Debug)]
pub enum HumanPrompt {
    Bid {
        seat: Seat,
        player: String,
        round_no: u8,
        hand: Vec<Card>,
        trump_card: Option<Card>,
        respond: oneshot::Sender<u8>,
    },
    Card {
        seat: Seat,
        player: String,
        hand: Vec<Card>,
        legal: Vec<Card>,
        cards_played: Vec<Card>,
        trump_suit: Option<Suit>,
        respond: oneshot::Sender<Card>,
    },
}

#[derive(Debug, Clone)]
pub struct HumanPlayer {
    prompts: mpsc::Sender<HumanPrompt>,
}

impl HumanPlayer {
    /// The receiver goes to whatever collects input from the person.
    pub fn channel(buffer: usize) -> (Self, mpsc::Receiver<HumanPrompt>) {
        let (tx, rx) = mpsc::channel(buffer.max(1));
        (Self { prompts: tx }, rx)
    }

    async fn ask<T>(
        &self,
        prompt: HumanPrompt,
        reply: oneshot::Receiver<T>,
    ) -> Result<T, StrategyError> {
        self.prompts
            .send(prompt)
            .await
            .map_err(|_| StrategyError::Disconnected)?;
        reply.await.map_err(|_| StrategyError::Disconnected)
    }
}

#[async_trait]
impl PlayerStrategy for HumanPlayer {
    async fn choose_bid(&self, view: &TurnView<'_>) -> Result<u8, StrategyError> {
        debug!(seat = view.seat, "awaiting human bid");
        let (respond, reply) = oneshot::channel();
        let prompt = HumanPrompt::Bid {
            seat: view.seat,
            player: view.player_name().to_string(),
            round_no: view.round_no(),
            hand: view.hand.to_vec(),
            trump_card: view.trump_card(),
            respond,
        };
        self.ask(prompt, reply).await
    }

    async fn choose_card(&self, view: &TurnView<'_>) -> Result<Card, StrategyError> {
        debug!(seat = view.seat, "awaiting human card selection");
        let (respond, reply) = oneshot::channel();
        let prompt = HumanPrompt::Card {
            seat: view.seat,
            player: view.player_name().to_string(),
            hand: view.hand.to_vec(),
            legal: view.legal_plays(),
            cards_played: view.cards_played(),
            trump_suit: view.trump_suit(),
            respond,
        };
        self.ask(prompt, reply).await
    }

    fn kind(&self) -> PlayerKind {
        PlayerKind::Human
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cards_parsing::try_parse_cards;
    use crate::domain::{GameContext, RoundContext};

    #[tokio::test]
    async fn prompts_are_answered_over_the_channel() {
        let (human, mut prompts) = HumanPlayer::channel(1);
        let answerer = tokio::spawn(async move {
            while let Some(prompt) = prompts.recv().await {
                match prompt {
                    HumanPrompt::Bid { round_no, respond, .. } => {
                        let _ = respond.send(round_no);
                    }
                    HumanPrompt::Card { legal, respond, .. } => {
                        let _ = respond.send(legal[0]);
                    }
                }
            }
        });

        let mut ctx = GameContext::from_names(["me", "bot1", "bot2"]);
        ctx.start_round(RoundContext::new(2, None, 0, 3));
        let hand = try_parse_cards(["9H", "3C"]).unwrap();
        let view = TurnView::new(0, &hand, &ctx);

        assert_eq!(human.choose_bid(&view).await.unwrap(), 2);
        assert_eq!(
            human.choose_card(&view).await.unwrap(),
            "3C".parse().unwrap()
        );

        drop(human);
        answerer.await.unwrap();
    }

    #[tokio::test]
    async fn dropped_receiver_is_disconnected() {
        let (human, prompts) = HumanPlayer::channel(1);
        drop(prompts);
        let ctx = GameContext::from_names(["me", "bot1", "bot2"]);
        let view = TurnView::new(0, &[], &ctx);
        assert!(matches!(
            human.choose_bid(&view).await,
            Err(StrategyError::Disconnected)
        ));
    }
}
