//! Core board data structures.

use core::fmt;
use std::collections::BTreeSet;
use std::ops::Index;

use sy_core::StationNumber;

use crate::error::{BoardError, BoardResult};

/// Transportation a station offers locally (used for display, hence no ferry).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum StationKind {
    Bus,
    Taxi,
    Underground,
}

impl StationKind {
    pub const ALL: [StationKind; 3] = [StationKind::Bus, StationKind::Taxi, StationKind::Underground];

    pub fn as_str(self) -> &'static str {
        match self {
            StationKind::Bus => "bus",
            StationKind::Taxi => "taxi",
            StationKind::Underground => "underground",
        }
    }
}

impl fmt::Display for StationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transportation mode of a connection between two stations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum ConnectionMode {
    Bus,
    Taxi,
    Underground,
    /// Express link between specific stations; never a station kind.
    Ferry,
}

impl ConnectionMode {
    pub const ALL: [ConnectionMode; 4] = [
        ConnectionMode::Bus,
        ConnectionMode::Taxi,
        ConnectionMode::Underground,
        ConnectionMode::Ferry,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ConnectionMode::Bus => "bus",
            ConnectionMode::Taxi => "taxi",
            ConnectionMode::Underground => "underground",
            ConnectionMode::Ferry => "ferry",
        }
    }

    /// The station kind this mode corresponds to, `None` for ferry.
    pub fn station_kind(self) -> Option<StationKind> {
        match self {
            ConnectionMode::Bus => Some(StationKind::Bus),
            ConnectionMode::Taxi => Some(StationKind::Taxi),
            ConnectionMode::Underground => Some(StationKind::Underground),
            ConnectionMode::Ferry => None,
        }
    }

    pub fn is_ferry(self) -> bool {
        self == ConnectionMode::Ferry
    }
}

impl From<StationKind> for ConnectionMode {
    fn from(kind: StationKind) -> Self {
        match kind {
            StationKind::Bus => ConnectionMode::Bus,
            StationKind::Taxi => ConnectionMode::Taxi,
            StationKind::Underground => ConnectionMode::Underground,
        }
    }
}

impl fmt::Display for ConnectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One side of a link: the station at the other end and the mode used.
///
/// Every declared link is stored twice, once on each endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Connection {
    pub destination: StationNumber,
    pub mode: ConnectionMode,
}

/// A numbered station with its declared kinds and outgoing connections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Station {
    pub(crate) number: StationNumber,
    pub(crate) kinds: BTreeSet<StationKind>,
    pub(crate) connections: Vec<Connection>,
}

impl Station {
    pub(crate) fn new(number: StationNumber, kinds: BTreeSet<StationKind>) -> Self {
        Self {
            number,
            kinds,
            connections: Vec::new(),
        }
    }

    pub fn number(&self) -> StationNumber {
        self.number
    }

    pub fn kinds(&self) -> &BTreeSet<StationKind> {
        &self.kinds
    }

    pub fn has_kind(&self, kind: StationKind) -> bool {
        self.kinds.contains(&kind)
    }

    /// Connections in declaration order.
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// Destinations reachable from this station with the given mode.
    pub fn destinations_by(&self, mode: ConnectionMode) -> impl Iterator<Item = StationNumber> + '_ {
        self.connections
            .iter()
            .filter(move |c| c.mode == mode)
            .map(|c| c.destination)
    }

    /// Modes of the incident connections, ferry excluded.
    pub fn local_modes(&self) -> BTreeSet<ConnectionMode> {
        self.connections
            .iter()
            .map(|c| c.mode)
            .filter(|m| !m.is_ferry())
            .collect()
    }
}

/// The board: a validated, immutable transit network.
///
/// Stations live in an arena indexed by `number - 1`; connections refer to
/// their destination by number and are resolved through the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub(crate) stations: Vec<Station>,
}

impl Board {
    /// Number of stations.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Always false for a board that passed construction.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Number of declared links (each stored on both endpoints).
    pub fn connection_count(&self) -> usize {
        self.stations.iter().map(|s| s.connections.len()).sum::<usize>() / 2
    }

    pub fn contains(&self, number: StationNumber) -> bool {
        number.index() < self.stations.len()
    }

    /// Get a station by number (returns None if not on the board).
    pub fn get(&self, number: StationNumber) -> Option<&Station> {
        self.stations.get(number.index())
    }

    /// Get a station by number, failing with an out-of-range error.
    pub fn station(&self, number: StationNumber) -> BoardResult<&Station> {
        self.get(number)
            .ok_or(BoardError::StationOutOfRange { number })
    }

    /// Stations in ascending number order.
    pub fn stations(&self) -> impl ExactSizeIterator<Item = &Station> {
        self.stations.iter()
    }

    pub fn numbers(&self) -> impl ExactSizeIterator<Item = StationNumber> + '_ {
        self.stations.iter().map(|s| s.number)
    }
}

impl Index<StationNumber> for Board {
    type Output = Station;

    fn index(&self, number: StationNumber) -> &Self::Output {
        &self.stations[number.index()]
    }
}
