use std::fmt;

use serde::{Deserialize, Serialize};

/// Where the engine is in the game flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    NotStarted,
    PlayerCreation,
    Dealing,
    Bidding,
    TrickPlay,
    TrickResolution,
    Scoring,
    GameComplete,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::NotStarted => "not started",
            Phase::PlayerCreation => "player creation",
            Phase::Dealing => "dealing",
            Phase::Bidding => "bidding",
            Phase::TrickPlay => "trick play",
            Phase::TrickResolution => "trick resolution",
            Phase::Scoring => "scoring",
            Phase::GameComplete => "game complete",
        };
        f.write_str(name)
    }
}
