//! How to register a computer strategy
//!
//! 1) Implement `PlayerStrategy` for your type in its module.
//! 2) Add a `StrategyFactory` entry to the static list with a stable `name`.
//! 3) Determinism: same seed ⇒ same behavior (where applicable).

use super::computer::ComputerPlayer;
use super::random::RandomPlayer;
use super::trait_def::PlayerStrategy;

/// Factory definition for constructing computer strategies.
pub struct StrategyFactory {
    pub name: &'static str,
    pub description: &'static str,
    pub make: fn(seed: Option<u64>) -> Box<dyn PlayerStrategy>,
}

static STRATEGY_FACTORIES: &[StrategyFactory] = &[
    StrategyFactory {
        name: ComputerPlayer::NAME,
        description: "hand-strength bidding, bid-aware card play",
        make: make_computer_player,
    },
    StrategyFactory {
        name: RandomPlayer::NAME,
        description: "uniformly random legal bids and cards",
        make: make_random_player,
    },
];

/// Returns the statically registered strategy factories.
pub fn registered_strategies() -> &'static [StrategyFactory] {
    STRATEGY_FACTORIES
}

/// Finds a registered strategy factory by its name.
pub fn by_name(name: &str) -> Option<&'static StrategyFactory> {
    registered_strategies()
        .iter()
        .find(|factory| factory.name.eq_ignore_ascii_case(name))
}

fn make_computer_player(_seed: Option<u64>) -> Box<dyn PlayerStrategy> {
    Box::new(ComputerPlayer::new())
}

fn make_random_player(seed: Option<u64>) -> Box<dyn PlayerStrategy> {
    Box::new(RandomPlayer::new(seed))
}

#[cfg(test)]
mod strategy_registry_smoke {
    use super::*;
    use crate::players::PlayerKind;

    #[test]
    fn enumerates_registered_strategies() {
        let names: Vec<&str> = registered_strategies().iter().map(|f| f.name).collect();
        assert_eq!(names, ["computer", "random"]);
    }

    #[test]
    fn constructs_computer_strategies() {
        for factory in registered_strategies() {
            let strategy = (factory.make)(Some(123));
            assert_eq!(strategy.kind(), PlayerKind::Computer);
        }
    }

    #[test]
    fn lookup_helper_behaves() {
        assert!(by_name("computer").is_some());
        assert!(by_name("Random").is_some());
        assert!(by_name("NotARealStrategy").is_none());
    }
}
