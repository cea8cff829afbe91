//! Headless game runner for strategy evaluation.
//!
//! Games go through the real engine with a front-end that only supplies
//! seats, so simulated games obey exactly the rules a played game does.

use std::fmt;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use wizard::domain::derive_strategy_seed;
use wizard::players::create_computer;
use wizard::{EngineError, Frontend, FrontendError, GameConfig, GameContext, Player, WizardEngine};

/// Result of simulating a complete game.
#[derive(Debug, Clone)]
pub struct GameResult {
    pub seed: u64,
    pub final_scores: Vec<i32>,
    pub context: GameContext,
}

impl GameResult {
    /// Seats sharing the top score.
    pub fn winners(&self) -> Vec<usize> {
        let best = self.final_scores.iter().max().copied().unwrap_or(0);
        self.final_scores
            .iter()
            .enumerate()
            .filter(|&(_, &score)| score == best)
            .map(|(seat, _)| seat)
            .collect()
    }
}

#[derive(Debug)]
pub enum SimulatorError {
    UnknownStrategy(String),
    Engine(EngineError),
}

impl fmt::Display for SimulatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulatorError::UnknownStrategy(name) => write!(f, "unknown strategy: {name}"),
            SimulatorError::Engine(e) => write!(f, "engine error: {e}"),
        }
    }
}

impl std::error::Error for SimulatorError {}

impl From<EngineError> for SimulatorError {
    fn from(e: EngineError) -> Self {
        SimulatorError::Engine(e)
    }
}

/// Supplies the seats once and ignores every notification.
struct HeadlessFrontend {
    seats: Mutex<Option<Vec<Player>>>,
}

#[async_trait]
impl Frontend for HeadlessFrontend {
    async fn prompt_player_creation(&self) -> Result<Vec<Player>, FrontendError> {
        self.seats
            .lock()
            .map_err(|_| FrontendError::Other("seat list poisoned".into()))?
            .take()
            .ok_or(FrontendError::Closed)
    }
}

/// In-memory game simulator for a fixed line-up of strategies.
pub struct Simulator {
    strategies: Vec<String>,
}

impl Simulator {
    pub fn new(strategies: Vec<String>) -> Self {
        Self { strategies }
    }

    pub fn strategies(&self) -> &[String] {
        &self.strategies
    }

    /// Play one game; strategy seeds are derived from the game seed per seat.
    pub fn simulate_game(&self, seed: u64) -> Result<GameResult, SimulatorError> {
        let mut seats = Vec::with_capacity(self.strategies.len());
        for (seat, strategy) in self.strategies.iter().enumerate() {
            let name = format!("seat{seat}-{strategy}");
            let player = create_computer(name, strategy, Some(derive_strategy_seed(seed, seat)))
                .ok_or_else(|| SimulatorError::UnknownStrategy(strategy.clone()))?;
            seats.push(player);
        }

        let frontend = Arc::new(HeadlessFrontend {
            seats: Mutex::new(Some(seats)),
        });
        let config = GameConfig::default()
            .with_seed(seed)
            .with_deal_pause(Duration::ZERO);
        let context = WizardEngine::new(frontend, config).run_blocking()?;

        Ok(GameResult {
            seed,
            final_scores: context.scores().to_vec(),
            context,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lineup(names: &[&str]) -> Simulator {
        Simulator::new(names.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn simulates_a_full_game() {
        let result = lineup(&["computer", "random", "computer", "random"])
            .simulate_game(42)
            .unwrap();
        assert_eq!(result.context.rounds().len(), 15);
        assert_eq!(result.final_scores.len(), 4);
        assert!(!result.winners().is_empty());
    }

    #[test]
    fn same_seed_same_outcome() {
        let sim = lineup(&["random", "random", "random"]);
        let a = sim.simulate_game(9).unwrap();
        let b = sim.simulate_game(9).unwrap();
        assert_eq!(a.context, b.context);
    }

    #[test]
    fn unknown_strategy_is_reported() {
        let err = lineup(&["computer", "oracle", "computer"])
            .simulate_game(1)
            .unwrap_err();
        assert!(matches!(err, SimulatorError::UnknownStrategy(name) if name == "oracle"));
    }
}
