use thiserror::Error;

use crate::errors::domain::DomainError;
use crate::frontend::FrontendError;
use crate::players::StrategyError;

/// Everything the engine can hand back to the surrounding application.
///
/// None of these are retried: a failed round or trick aborts the game and the
/// caller decides whether to end the process.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("Frontend error: {0}")]
    Frontend(#[from] FrontendError),
    #[error("Player strategy error: {0}")]
    Strategy(#[from] StrategyError),
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Engine runtime error: {detail}")]
    Runtime { detail: String },
}

impl EngineError {
    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub fn runtime(detail: impl Into<String>) -> Self {
        Self::Runtime {
            detail: detail.into(),
        }
    }

    /// The domain error behind this failure, if any.
    pub fn as_domain(&self) -> Option<&DomainError> {
        match self {
            EngineError::Domain(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::IllegalMoveKind;

    #[test]
    fn domain_errors_convert_transparently() {
        let err: EngineError =
            DomainError::illegal_move(IllegalMoveKind::CardNotInHand, "AS not in hand").into();
        assert_eq!(err.to_string(), "illegal move CardNotInHand: AS not in hand");
        assert!(matches!(
            err.as_domain(),
            Some(DomainError::IllegalMove(IllegalMoveKind::CardNotInHand, _))
        ));
    }

    #[test]
    fn config_error_has_detail() {
        let err = EngineError::config("WIZARD_SEED must be an integer");
        assert_eq!(
            err.to_string(),
            "Configuration error: WIZARD_SEED must be an integer"
        );
        assert!(err.as_domain().is_none());
    }
}
