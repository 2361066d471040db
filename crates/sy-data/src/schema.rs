//! Board and rules file schema.

use serde::{Deserialize, Serialize};
use sy_board::{Board, BoardResult, ConnectionEntry, ConnectionMode, StationEntry, StationKind};
use sy_core::StationNumber;
use sy_game::{Rules, Tickets};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct BoardDef {
    #[serde(default)]
    pub stations: Vec<StationDef>,
    #[serde(default)]
    pub connections: Vec<ConnectionDef>,
}

/// Station numbers stay signed here so that bad numbers reach board
/// construction and are reported as structural faults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StationDef {
    pub number: i64,
    pub kinds: Vec<StationKind>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConnectionDef {
    pub from: i64,
    pub to: i64,
    pub mode: ConnectionMode,
}

impl BoardDef {
    pub fn station_entries(&self) -> Vec<StationEntry> {
        self.stations
            .iter()
            .map(|s| (s.number, s.kinds.clone()))
            .collect()
    }

    pub fn connection_entries(&self) -> Vec<ConnectionEntry> {
        self.connections
            .iter()
            .map(|c| (c.from, c.to, c.mode))
            .collect()
    }

    /// Build and validate the board described by this definition.
    pub fn build(&self) -> BoardResult<Board> {
        Board::new(&self.station_entries(), &self.connection_entries())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TicketsDef {
    pub bus: u32,
    pub taxi: u32,
    pub underground: u32,
}

impl From<TicketsDef> for Tickets {
    fn from(def: TicketsDef) -> Self {
        Tickets::new(def.bus, def.taxi, def.underground)
    }
}

/// Rules overrides. Every field is optional and falls back to the classic game.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct RulesDef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supply_pile: Option<TicketsDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_round: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detective_starting_positions: Option<Vec<StationNumber>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detective_tickets: Option<TicketsDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mister_x_starting_positions: Option<Vec<StationNumber>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mister_x_black_tickets: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mister_x_double_move_tickets: Option<u32>,
}

impl RulesDef {
    pub fn into_rules(self) -> Rules {
        let classic = Rules::classic();
        Rules {
            supply_pile: self.supply_pile.map_or(classic.supply_pile, Tickets::from),
            max_round: self.max_round.unwrap_or(classic.max_round),
            detective_starting_positions: self
                .detective_starting_positions
                .unwrap_or(classic.detective_starting_positions),
            detective_tickets: self
                .detective_tickets
                .map_or(classic.detective_tickets, Tickets::from),
            mister_x_starting_positions: self
                .mister_x_starting_positions
                .unwrap_or(classic.mister_x_starting_positions),
            mister_x_black_tickets: self
                .mister_x_black_tickets
                .unwrap_or(classic.mister_x_black_tickets),
            mister_x_double_move_tickets: self
                .mister_x_double_move_tickets
                .unwrap_or(classic.mister_x_double_move_tickets),
        }
    }
}
