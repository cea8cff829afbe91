#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod errors;
pub mod frontend;
pub mod players;
pub mod telemetry;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use config::GameConfig;
pub use domain::{Card, GameContext, PlayerInfo, Rank, RoundContext, Seat, Suit, TrickContext, TurnView};
pub use engine::{Phase, WizardEngine};
pub use error::EngineError;
pub use errors::DomainError;
pub use frontend::{Frontend, FrontendError};
pub use players::{Player, PlayerKind, PlayerStrategy, StrategyError};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
