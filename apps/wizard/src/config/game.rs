//! Game setup knobs, from code or from the environment.

use std::env;
use std::time::Duration;

use crate::domain::deck::{Deck, DEFAULT_JESTERS, DEFAULT_WIZARDS};
use crate::error::EngineError;

const DEFAULT_DEAL_PAUSE: Duration = Duration::from_secs(3);

/// Configuration for one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Wizards in the deck
    pub wizard_count: u8,
    /// Jesters in the deck
    pub jester_count: u8,
    /// Game seed; a random one is drawn (and logged) when absent
    pub seed: Option<u64>,
    /// How long the front-end is told to linger on the deal
    pub deal_pause: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            wizard_count: DEFAULT_WIZARDS,
            jester_count: DEFAULT_JESTERS,
            seed: None,
            deal_pause: DEFAULT_DEAL_PAUSE,
        }
    }
}

impl GameConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_deal_pause(mut self, pause: Duration) -> Self {
        self.deal_pause = pause;
        self
    }

    pub fn with_specials(mut self, wizards: u8, jesters: u8) -> Self {
        self.wizard_count = wizards;
        self.jester_count = jesters;
        self
    }

    pub fn deck_size(&self) -> usize {
        Deck::size_for(self.wizard_count, self.jester_count)
    }

    /// Defaults overridden by `WIZARD_SEED`, `WIZARD_WIZARDS`, `WIZARD_JESTERS`
    /// and `WIZARD_DEAL_PAUSE_MS` where set.
    pub fn from_env() -> Result<Self, EngineError> {
        let mut config = Self::default();
        if let Some(seed) = parse_var::<u64>("WIZARD_SEED")? {
            config.seed = Some(seed);
        }
        if let Some(wizards) = parse_var::<u8>("WIZARD_WIZARDS")? {
            config.wizard_count = wizards;
        }
        if let Some(jesters) = parse_var::<u8>("WIZARD_JESTERS")? {
            config.jester_count = jesters;
        }
        if let Some(ms) = parse_var::<u64>("WIZARD_DEAL_PAUSE_MS")? {
            config.deal_pause = Duration::from_millis(ms);
        }
        Ok(config)
    }
}

/// Unset or empty means "not configured"; anything else must parse.
fn parse_var<T: std::str::FromStr>(key: &str) -> Result<Option<T>, EngineError> {
    match env::var(key) {
        Ok(raw) if raw.trim().is_empty() => Ok(None),
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| EngineError::config(format!("{key} has an invalid value: '{raw}'"))),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => {
            Err(EngineError::config(format!("{key} is not valid unicode")))
        }
    }
}
