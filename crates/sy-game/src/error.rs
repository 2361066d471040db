//! Error types for game setup.

use sy_core::{StationNumber, SyError};
use thiserror::Error;

use crate::player::{Color, Tickets};

pub type GameResult<T> = Result<T, GameError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("empty name")]
    EmptyName,

    #[error("black is not a detective color")]
    BlackDetective,

    #[error("duplicate color ({color})")]
    DuplicateColor { color: Color },

    #[error("unknown color ({name})")]
    UnknownColor { name: String },

    #[error("no starting positions for {who}")]
    NoStartingPositions { who: &'static str },

    #[error("{detectives} detectives but only {positions} starting positions")]
    NotEnoughStartingPositions { detectives: usize, positions: usize },

    #[error("duplicate starting position ({position})")]
    DuplicateStartingPosition { position: StationNumber },

    #[error("starting position {position} is not on the board")]
    StartingPositionNotOnBoard { position: StationNumber },

    #[error("supply pile exhausted (needed {needed}, left {left})")]
    SupplyExhausted { needed: Tickets, left: Tickets },
}

impl From<GameError> for SyError {
    fn from(err: GameError) -> Self {
        SyError::InvalidArg {
            what: err.to_string(),
        }
    }
}
