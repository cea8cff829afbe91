//! A front-end that records every notification in order.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tracing::trace;
use wizard::{Card, Frontend, FrontendError, GameContext, Player, PlayerInfo, Seat};

#[derive(Debug, Clone, PartialEq)]
pub enum FrontendEvent {
    StartGame,
    PlayerCreation,
    StartRound(u8),
    DealInProgress(Duration),
    DealDone { dealer: Seat, trump_card: Option<Card> },
    PlayerBid { seat: Seat, bid: u8 },
    BidOutcome { round_no: u8, total_bids: u32 },
    StartTrick(u8),
    TurnTaken { seat: Seat, card: Card },
    TrickWinner { seat: Seat, card: Card },
    RoundScores { round_no: u8, scores: Vec<i32> },
    GameOver { scores: Vec<i32> },
}

/// Hands out the seats it was built with once, then records.
pub struct RecordingFrontend {
    seats: Mutex<Option<Vec<Player>>>,
    events: Mutex<Vec<FrontendEvent>>,
}

impl RecordingFrontend {
    pub fn new(seats: Vec<Player>) -> Arc<Self> {
        Arc::new(Self {
            seats: Mutex::new(Some(seats)),
            events: Mutex::new(Vec::new()),
        })
    }

    pub fn events(&self) -> Vec<FrontendEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    pub fn count(&self, matches: impl Fn(&FrontendEvent) -> bool) -> usize {
        self.events().iter().filter(|e| matches(e)).count()
    }

    fn record(&self, event: FrontendEvent) -> Result<(), FrontendError> {
        trace!(?event, "frontend event");
        self.events
            .lock()
            .map_err(|_| FrontendError::Other("event log poisoned".into()))?
            .push(event);
        Ok(())
    }
}

#[async_trait]
impl Frontend for RecordingFrontend {
    async fn prompt_player_creation(&self) -> Result<Vec<Player>, FrontendError> {
        self.record(FrontendEvent::PlayerCreation)?;
        self.seats
            .lock()
            .map_err(|_| FrontendError::Other("seat list poisoned".into()))?
            .take()
            .ok_or(FrontendError::Closed)
    }

    async fn display_start_game(&self) -> Result<(), FrontendError> {
        self.record(FrontendEvent::StartGame)
    }

    async fn display_start_round(&self, round_no: u8) -> Result<(), FrontendError> {
        self.record(FrontendEvent::StartRound(round_no))
    }

    async fn display_deal_in_progress(&self, pause: Duration) -> Result<(), FrontendError> {
        self.record(FrontendEvent::DealInProgress(pause))
    }

    async fn display_deal_done(
        &self,
        dealer: &PlayerInfo,
        trump_card: Option<Card>,
    ) -> Result<(), FrontendError> {
        self.record(FrontendEvent::DealDone {
            dealer: dealer.seat,
            trump_card,
        })
    }

    async fn display_player_bid(&self, player: &PlayerInfo, bid: u8) -> Result<(), FrontendError> {
        self.record(FrontendEvent::PlayerBid {
            seat: player.seat,
            bid,
        })
    }

    async fn display_bid_outcome(&self, round_no: u8, total_bids: u32) -> Result<(), FrontendError> {
        self.record(FrontendEvent::BidOutcome {
            round_no,
            total_bids,
        })
    }

    async fn display_start_trick(&self, trick_no: u8) -> Result<(), FrontendError> {
        self.record(FrontendEvent::StartTrick(trick_no))
    }

    async fn display_turn_taken(&self, card: Card, player: &PlayerInfo) -> Result<(), FrontendError> {
        self.record(FrontendEvent::TurnTaken {
            seat: player.seat,
            card,
        })
    }

    async fn display_trick_winner(
        &self,
        winner: &PlayerInfo,
        winning_card: Card,
    ) -> Result<(), FrontendError> {
        self.record(FrontendEvent::TrickWinner {
            seat: winner.seat,
            card: winning_card,
        })
    }

    async fn display_round_scores(&self, ctx: &GameContext) -> Result<(), FrontendError> {
        self.record(FrontendEvent::RoundScores {
            round_no: ctx.current_round().map_or(0, |r| r.round_no()),
            scores: ctx.scores().to_vec(),
        })
    }

    async fn display_game_over(&self, ctx: &GameContext) -> Result<(), FrontendError> {
        self.record(FrontendEvent::GameOver {
            scores: ctx.scores().to_vec(),
        })
    }
}
