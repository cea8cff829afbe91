//! Rules-level error type used across the domain, players and engine.
//!
//! This error type knows nothing about front-ends or runtimes. The engine
//! returns `Result<T, crate::error::EngineError>` and converts from
//! `DomainError` using the provided `From<DomainError> for EngineError` impl.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Why a played card was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum IllegalMoveKind {
    CardNotInHand,
    MustFollowSuit,
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Caller passed input the rules cannot work with (empty trick, bad player list)
    InvalidArgument(String),
    /// Draw from an exhausted deck; round sizing is broken
    EmptyDeck,
    /// A player capability produced a card the rules forbid
    IllegalMove(IllegalMoveKind, String),
    /// A player capability produced a bid outside `0..=max`
    InvalidBid { bid: u8, max: u8 },
    /// Rules or data bug: no determinable winner, leftover cards, etc.
    InternalConsistency(String),
    /// Card notation could not be parsed
    ParseCard(String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::InvalidArgument(d) => write!(f, "invalid argument: {d}"),
            DomainError::EmptyDeck => write!(f, "cannot draw from an empty deck"),
            DomainError::IllegalMove(kind, d) => write!(f, "illegal move {kind:?}: {d}"),
            DomainError::InvalidBid { bid, max } => {
                write!(f, "invalid bid {bid}: must be between 0 and {max}")
            }
            DomainError::InternalConsistency(d) => write!(f, "internal consistency error: {d}"),
            DomainError::ParseCard(s) => write!(f, "parse card: {s}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn invalid_argument(detail: impl Into<String>) -> Self {
        Self::InvalidArgument(detail.into())
    }
    pub fn illegal_move(kind: IllegalMoveKind, detail: impl Into<String>) -> Self {
        Self::IllegalMove(kind, detail.into())
    }
    pub fn internal(detail: impl Into<String>) -> Self {
        Self::InternalConsistency(detail.into())
    }
    pub fn parse_card(token: impl Into<String>) -> Self {
        Self::ParseCard(token.into())
    }
}
