//! Game engine: drives a whole game through its front-end and players.
//!
//! The engine owns the seats and the context for the duration of a game and
//! is the only writer of either. Front-ends only receive shared views.

mod phase;
mod round_lifecycle;
mod trick_flow;


use std::collections::HashSet;
use std::sync::Arc;

use rand::Rng;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument};

pub use phase::Phase;

use crate::config::GameConfig;
use crate::domain::rules::{MAX_PLAYERS, MIN_PLAYERS};
use crate::domain::{round_count, GameContext, PlayerInfo, Seat};
use crate::error::EngineError;
use crate::errors::domain::DomainError;
use crate::frontend::Frontend;
use crate::players::Player;

/// Seats and the shared context, kept apart so a player can decide from the
/// context while its own hand is borrowed mutably.
pub(crate) struct Table {
    players: Vec<Player>,
    context: GameContext,
}

impl Table {
    fn new(players: Vec<Player>) -> Self {
        let context = GameContext::new(
            players
                .iter()
                .enumerate()
                .map(|(seat, p)| PlayerInfo {
                    seat,
                    name: p.name().to_string(),
                })
                .collect(),
        );
        Self { players, context }
    }

    fn player_count(&self) -> usize {
        self.players.len()
    }
}

fn seat_info(ctx: &GameContext, seat: Seat) -> Result<&PlayerInfo, DomainError> {
    ctx.player(seat)
        .ok_or_else(|| DomainError::internal(format!("no player at seat {seat}")))
}

/// Reject seatings the rules cannot play: wrong count, blank or duplicate names.
pub fn validate_players(players: &[Player]) -> Result<(), DomainError> {
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&players.len()) {
        return Err(DomainError::invalid_argument(format!(
            "{} players given, a game needs {MIN_PLAYERS} to {MAX_PLAYERS}",
            players.len()
        )));
    }
    let mut seen = HashSet::new();
    for player in players {
        let name = player.name();
        if name.is_empty() {
            return Err(DomainError::invalid_argument("player names cannot be blank"));
        }
        if !seen.insert(name) {
            return Err(DomainError::invalid_argument(format!(
                "player name '{name}' is used twice"
            )));
        }
    }
    Ok(())
}

pub struct WizardEngine {
    frontend: Arc<dyn Frontend>,
    config: GameConfig,
    phase: watch::Sender<Phase>,
}

impl WizardEngine {
    pub fn new(frontend: Arc<dyn Frontend>, config: GameConfig) -> Self {
        let (phase, _) = watch::channel(Phase::NotStarted);
        Self {
            frontend,
            config,
            phase,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        *self.phase.borrow()
    }

    /// Follow phase changes from another task.
    pub fn subscribe(&self) -> watch::Receiver<Phase> {
        self.phase.subscribe()
    }

    fn set_phase(&self, phase: Phase) {
        let previous = self.phase.send_replace(phase);
        if previous != phase {
            debug!(from = %previous, to = %phase, "Phase transition");
        }
    }

    /// Play one complete game and hand back its final context.
    #[instrument(skip_all)]
    pub async fn run(&self) -> Result<GameContext, EngineError> {
        self.frontend.display_start_game().await?;
        self.set_phase(Phase::PlayerCreation);
        let players = self.frontend.prompt_player_creation().await?;
        validate_players(&players)?;

        let game_seed = self.config.seed.unwrap_or_else(|| rand::rng().random());
        let rounds = round_count(self.config.deck_size(), players.len())?;
        info!(
            game_seed,
            players = players.len(),
            rounds,
            deck_size = self.config.deck_size(),
            "Starting game"
        );

        let mut table = Table::new(players);

        for round_no in 1..=rounds {
            self.play_round(&mut table, game_seed, round_no).await?;
        }

        self.set_phase(Phase::GameComplete);
        info!(scores = ?table.context.scores(), "Game complete");
        self.frontend.display_game_over(&table.context).await?;
        Ok(table.context)
    }

    /// Run the game on the current tokio runtime as a separate task.
    pub fn spawn(self) -> JoinHandle<Result<GameContext, EngineError>> {
        tokio::spawn(async move { self.run().await })
    }

    /// Run the game on a dedicated thread with its own runtime and wait for it.
    ///
    /// Must not be called from inside an async context that cannot block.
    pub fn run_blocking(self) -> Result<GameContext, EngineError> {
        let handle = std::thread::Builder::new()
            .name("wizard-engine".into())
            .spawn(move || {
                let runtime = tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
                    .map_err(|e| EngineError::runtime(format!("building runtime: {e}")))?;
                runtime.block_on(self.run())
            })
            .map_err(|e| EngineError::runtime(format!("spawning engine thread: {e}")))?;
        handle
            .join()
            .map_err(|_| EngineError::runtime("engine thread panicked"))?
    }
}
