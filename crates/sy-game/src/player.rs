//! Players: detectives and Mister X.

use core::fmt;
use core::str::FromStr;

use sy_board::ConnectionMode;
use sy_core::StationNumber;

use crate::error::{GameError, GameResult};

/// Player colors. Black is reserved for Mister X.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Black,
    Blue,
    Green,
    Orange,
    Purple,
    Red,
}

impl Color {
    pub const ALL: [Color; 6] = [
        Color::Black,
        Color::Blue,
        Color::Green,
        Color::Orange,
        Color::Purple,
        Color::Red,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Orange => "orange",
            Color::Purple => "purple",
            Color::Red => "red",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Color {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| GameError::UnknownColor { name: s.to_string() })
    }
}

/// Bus, taxi and underground tickets held by a player or the supply pile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Tickets {
    pub bus: u32,
    pub taxi: u32,
    pub underground: u32,
}

impl Tickets {
    pub const fn new(bus: u32, taxi: u32, underground: u32) -> Self {
        Self {
            bus,
            taxi,
            underground,
        }
    }

    /// Tickets available for a mode; ferries take no regular ticket.
    pub fn for_mode(&self, mode: ConnectionMode) -> Option<u32> {
        match mode {
            ConnectionMode::Bus => Some(self.bus),
            ConnectionMode::Taxi => Some(self.taxi),
            ConnectionMode::Underground => Some(self.underground),
            ConnectionMode::Ferry => None,
        }
    }

    /// Subtract per ticket type, `None` if any count would go negative.
    pub fn checked_sub(&self, other: &Tickets) -> Option<Tickets> {
        Some(Tickets {
            bus: self.bus.checked_sub(other.bus)?,
            taxi: self.taxi.checked_sub(other.taxi)?,
            underground: self.underground.checked_sub(other.underground)?,
        })
    }

    pub fn total(&self) -> u32 {
        self.bus + self.taxi + self.underground
    }
}

impl fmt::Display for Tickets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "bus {}, taxi {}, underground {}",
            self.bus, self.taxi, self.underground
        )
    }
}

/// Common surface of all players. Name and color are fixed; position moves.
pub trait Player {
    fn name(&self) -> &str;
    fn color(&self) -> Color;
    fn position(&self) -> StationNumber;
    fn set_position(&mut self, position: StationNumber);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detective {
    name: String,
    color: Color,
    position: StationNumber,
    tickets: Tickets,
}

impl Detective {
    pub fn new(
        name: impl Into<String>,
        color: Color,
        position: StationNumber,
        tickets: Tickets,
    ) -> GameResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(GameError::EmptyName);
        }
        if color == Color::Black {
            return Err(GameError::BlackDetective);
        }
        Ok(Self {
            name,
            color,
            position,
            tickets,
        })
    }

    pub fn tickets(&self) -> &Tickets {
        &self.tickets
    }

    pub fn tickets_mut(&mut self) -> &mut Tickets {
        &mut self.tickets
    }
}

impl Player for Detective {
    fn name(&self) -> &str {
        &self.name
    }

    fn color(&self) -> Color {
        self.color
    }

    fn position(&self) -> StationNumber {
        self.position
    }

    fn set_position(&mut self, position: StationNumber) {
        self.position = position;
    }
}

/// Mister X: always black, with black and double-move tickets instead of
/// regular ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MisterX {
    name: String,
    position: StationNumber,
    black_tickets: u32,
    double_move_tickets: u32,
}

impl MisterX {
    pub fn new(
        name: impl Into<String>,
        position: StationNumber,
        black_tickets: u32,
        double_move_tickets: u32,
    ) -> GameResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(GameError::EmptyName);
        }
        Ok(Self {
            name,
            position,
            black_tickets,
            double_move_tickets,
        })
    }

    pub fn black_tickets(&self) -> u32 {
        self.black_tickets
    }

    pub fn set_black_tickets(&mut self, black_tickets: u32) {
        self.black_tickets = black_tickets;
    }

    pub fn double_move_tickets(&self) -> u32 {
        self.double_move_tickets
    }

    pub fn set_double_move_tickets(&mut self, double_move_tickets: u32) {
        self.double_move_tickets = double_move_tickets;
    }
}

impl Player for MisterX {
    fn name(&self) -> &str {
        &self.name
    }

    fn color(&self) -> Color {
        Color::Black
    }

    fn position(&self) -> StationNumber {
        self.position
    }

    fn set_position(&mut self, position: StationNumber) {
        self.position = position;
    }
}
