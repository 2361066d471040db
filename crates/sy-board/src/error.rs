//! Board-specific error types.

use sy_core::{StationNumber, SyError};
use thiserror::Error;

use crate::graph::{ConnectionMode, StationKind};

pub type BoardResult<T> = Result<T, BoardError>;

/// Structural faults detected while constructing a board.
///
/// Any of these means the input must not be used; there is no partial board.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidBoard {
    #[error("no stations")]
    NoStations,

    #[error("invalid station number ({number})")]
    InvalidStationNumber { number: i64 },

    #[error("duplicate station ({number})")]
    DuplicateStation { number: i64 },

    #[error("empty kinds ({station})")]
    EmptyKinds { station: i64 },

    #[error("duplicate kinds ({}) at station {station}", join(.kinds))]
    DuplicateKinds { station: i64, kinds: Vec<StationKind> },

    #[error("missing stations ({numbers:?})")]
    MissingStations { numbers: Vec<u32> },

    #[error("unknown station ({number})")]
    UnknownStation { number: i64 },

    #[error("kinds and connections are not consistent ({station})")]
    InconsistentKinds {
        station: StationNumber,
        kinds: Vec<StationKind>,
        modes: Vec<ConnectionMode>,
    },

    #[error("network is not connected ({reached} of {total} stations reachable)")]
    NotConnected { reached: usize, total: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("invalid board: {0}")]
    Invalid(#[from] InvalidBoard),

    /// Lookup of a number that is not on an otherwise valid board.
    #[error("invalid station number ({number})")]
    StationOutOfRange { number: StationNumber },
}

impl BoardError {
    /// The structural fault, if this error came from construction.
    pub fn as_invalid(&self) -> Option<&InvalidBoard> {
        match self {
            BoardError::Invalid(fault) => Some(fault),
            BoardError::StationOutOfRange { .. } => None,
        }
    }
}

impl From<BoardError> for SyError {
    fn from(err: BoardError) -> Self {
        match err {
            BoardError::StationOutOfRange { .. } => SyError::InvalidArg {
                what: err.to_string(),
            },
            BoardError::Invalid(_) => SyError::Invariant {
                what: err.to_string(),
            },
        }
    }
}

fn join<T: core::fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
