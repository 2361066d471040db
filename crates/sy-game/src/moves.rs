//! Move descriptions. These only record what was played; legality is
//! decided elsewhere.

use sy_board::ConnectionMode;
use sy_core::StationNumber;

/// A move along one connection with the matching ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SimpleMove {
    pub source: StationNumber,
    pub destination: StationNumber,
    /// Two stations may be linked by several modes, and the mode decides the ticket.
    pub mode: ConnectionMode,
}

/// A move paid with a black ticket; the mode is hidden and not recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlackTicketMove {
    pub source: StationNumber,
    pub destination: StationNumber,
}

/// Either half of a double move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SingleMove {
    Simple(SimpleMove),
    BlackTicket(BlackTicketMove),
}

impl SingleMove {
    pub fn source(&self) -> StationNumber {
        match self {
            SingleMove::Simple(m) => m.source,
            SingleMove::BlackTicket(m) => m.source,
        }
    }

    pub fn destination(&self) -> StationNumber {
        match self {
            SingleMove::Simple(m) => m.destination,
            SingleMove::BlackTicket(m) => m.destination,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DoubleMove {
    pub first: SingleMove,
    pub second: SingleMove,
}

pub type DetectiveMove = SimpleMove;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MisterXMove {
    Simple(SimpleMove),
    BlackTicket(BlackTicketMove),
    Double(DoubleMove),
}

impl MisterXMove {
    pub fn source(&self) -> StationNumber {
        match self {
            MisterXMove::Simple(m) => m.source,
            MisterXMove::BlackTicket(m) => m.source,
            MisterXMove::Double(m) => m.first.source(),
        }
    }

    /// Where Mister X ends up after the whole move.
    pub fn destination(&self) -> StationNumber {
        match self {
            MisterXMove::Simple(m) => m.destination,
            MisterXMove::BlackTicket(m) => m.destination,
            MisterXMove::Double(m) => m.second.destination(),
        }
    }
}

impl From<SingleMove> for MisterXMove {
    fn from(m: SingleMove) -> Self {
        match m {
            SingleMove::Simple(m) => MisterXMove::Simple(m),
            SingleMove::BlackTicket(m) => MisterXMove::BlackTicket(m),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(number: u32) -> StationNumber {
        StationNumber::new(number).unwrap()
    }

    #[test]
    fn double_move_spans_both_halves() {
        let first = SingleMove::Simple(SimpleMove {
            source: n(35),
            destination: n(48),
            mode: ConnectionMode::Taxi,
        });
        let second = SingleMove::BlackTicket(BlackTicketMove {
            source: n(48),
            destination: n(62),
        });
        let m = MisterXMove::Double(DoubleMove { first, second });

        assert_eq!(m.source(), n(35));
        assert_eq!(m.destination(), n(62));
        assert_eq!(MisterXMove::from(second).source(), n(48));
    }
}
