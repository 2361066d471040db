//! Rule constants and the configurable `Rules` set used by game setup.

use std::collections::HashSet;

use sy_board::Board;
use sy_core::StationNumber;

use crate::error::{GameError, GameResult};
use crate::player::Tickets;

const fn station(number: u32) -> StationNumber {
    match StationNumber::new(number) {
        Some(n) => n,
        None => panic!("station numbers start at 1"),
    }
}

pub const TOTAL_TICKETS: Tickets = Tickets::new(45, 57, 23);

pub const MAX_ROUND: u32 = 23;

#[rustfmt::skip]
pub const DETECTIVES_STARTING_POSITIONS: [StationNumber; 16] = [
    station(13), station(26), station(29), station(34),
    station(50), station(53), station(91), station(94),
    station(103), station(112), station(117), station(123),
    station(138), station(141), station(155), station(174),
];

pub const DETECTIVE_TICKETS: Tickets = Tickets::new(8, 11, 4);

#[rustfmt::skip]
pub const MISTER_X_STARTING_POSITIONS: [StationNumber; 13] = [
    station(35), station(45), station(51), station(71),
    station(78), station(104), station(106), station(127),
    station(132), station(146), station(166), station(170),
    station(172),
];

pub const MISTER_X_BLACK_TICKETS: u32 = 5;
pub const MISTER_X_DOUBLE_MOVE_TICKETS: u32 = 3;

/// Setup parameters. `Rules::default()` is the classic game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rules {
    pub supply_pile: Tickets,
    pub max_round: u32,
    pub detective_starting_positions: Vec<StationNumber>,
    pub detective_tickets: Tickets,
    pub mister_x_starting_positions: Vec<StationNumber>,
    pub mister_x_black_tickets: u32,
    pub mister_x_double_move_tickets: u32,
}

impl Rules {
    pub fn classic() -> Self {
        Self {
            supply_pile: TOTAL_TICKETS,
            max_round: MAX_ROUND,
            detective_starting_positions: DETECTIVES_STARTING_POSITIONS.to_vec(),
            detective_tickets: DETECTIVE_TICKETS,
            mister_x_starting_positions: MISTER_X_STARTING_POSITIONS.to_vec(),
            mister_x_black_tickets: MISTER_X_BLACK_TICKETS,
            mister_x_double_move_tickets: MISTER_X_DOUBLE_MOVE_TICKETS,
        }
    }

    /// Check that starting positions are usable on `board`.
    pub fn check_against(&self, board: &Board) -> GameResult<()> {
        check_positions(&self.detective_starting_positions, "detectives", board)?;
        check_positions(&self.mister_x_starting_positions, "Mister X", board)
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::classic()
    }
}

fn check_positions(
    positions: &[StationNumber],
    who: &'static str,
    board: &Board,
) -> GameResult<()> {
    if positions.is_empty() {
        return Err(GameError::NoStartingPositions { who });
    }

    let mut seen = HashSet::new();
    for &position in positions {
        if !seen.insert(position) {
            return Err(GameError::DuplicateStartingPosition { position });
        }
        if !board.contains(position) {
            return Err(GameError::StartingPositionNotOnBoard { position });
        }
    }
    Ok(())
}
