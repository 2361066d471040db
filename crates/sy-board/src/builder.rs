//! Board construction from raw station and connection tables.

use std::collections::{BTreeMap, BTreeSet};

use sy_core::StationNumber;
use tracing::{debug, info};

use crate::error::{BoardResult, InvalidBoard};
use crate::graph::{Board, Connection, ConnectionMode, Station, StationKind};
use crate::validate;

/// Raw station entry: number as declared and its kinds.
pub type StationEntry = (i64, Vec<StationKind>);

/// Raw connection entry: source number, destination number, mode.
pub type ConnectionEntry = (i64, i64, ConnectionMode);

/// Builder collecting raw station and connection declarations.
///
/// Nothing is checked until `build()`, which runs the whole pipeline in
/// declaration order and either returns a validated `Board` or the first
/// structural fault found.
#[derive(Debug, Default, Clone)]
pub struct BoardBuilder {
    stations: Vec<StationEntry>,
    connections: Vec<ConnectionEntry>,
}

impl BoardBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a station with its kinds.
    pub fn add_station(
        &mut self,
        number: i64,
        kinds: impl IntoIterator<Item = StationKind>,
    ) -> &mut Self {
        self.stations.push((number, kinds.into_iter().collect()));
        self
    }

    /// Declare a link between two stations. It is usable in both directions.
    pub fn add_connection(&mut self, from: i64, to: i64, mode: ConnectionMode) -> &mut Self {
        self.connections.push((from, to, mode));
        self
    }

    /// Build and validate the board.
    pub fn build(&self) -> BoardResult<Board> {
        Board::new(&self.stations, &self.connections)
    }
}

impl Board {
    /// Build a board from station and connection tables.
    ///
    /// Stages: create stations, attach mirrored connections, check that kinds
    /// match connection modes, check that the network is connected.
    pub fn new(stations: &[StationEntry], connections: &[ConnectionEntry]) -> BoardResult<Self> {
        debug!(
            stations = stations.len(),
            connections = connections.len(),
            "building board"
        );

        let mut arena = create_stations(stations)?;
        attach_connections(&mut arena, connections)?;
        debug!("connections attached");

        validate::check_kinds_consistency(&arena)?;
        validate::check_connected(&arena)?;

        let board = Board { stations: arena };
        info!(
            stations = board.len(),
            connections = board.connection_count(),
            "board ready"
        );
        Ok(board)
    }
}

/// Create stations in arena order, rejecting bad numbers and kind lists.
fn create_stations(entries: &[StationEntry]) -> Result<Vec<Station>, InvalidBoard> {
    if entries.is_empty() {
        return Err(InvalidBoard::NoStations);
    }

    let mut declared: BTreeMap<u32, BTreeSet<StationKind>> = BTreeMap::new();
    for (number, kinds) in entries {
        let number = *number;
        if number < 0 {
            return Err(InvalidBoard::InvalidStationNumber { number });
        }
        let key =
            u32::try_from(number).map_err(|_| InvalidBoard::InvalidStationNumber { number })?;
        if declared.contains_key(&key) {
            return Err(InvalidBoard::DuplicateStation { number });
        }
        declared.insert(key, kind_set(number, kinds)?);
    }

    // The expected range comes from the count, so an out-of-range number
    // always leaves a hole that is reported here.
    let count = declared.len();
    let missing: Vec<u32> = (1..=count as u32)
        .filter(|n| !declared.contains_key(n))
        .collect();
    if !missing.is_empty() {
        return Err(InvalidBoard::MissingStations { numbers: missing });
    }

    Ok(declared
        .into_values()
        .enumerate()
        .map(|(index, kinds)| Station::new(StationNumber::from_index(index), kinds))
        .collect())
}

/// Reduce a declared kind list to a set, rejecting empty lists and repeats.
fn kind_set(station: i64, kinds: &[StationKind]) -> Result<BTreeSet<StationKind>, InvalidBoard> {
    if kinds.is_empty() {
        return Err(InvalidBoard::EmptyKinds { station });
    }

    let mut set = BTreeSet::new();
    let mut repeated = BTreeSet::new();
    for &kind in kinds {
        if !set.insert(kind) {
            repeated.insert(kind);
        }
    }

    if repeated.is_empty() {
        Ok(set)
    } else {
        Err(InvalidBoard::DuplicateKinds {
            station,
            kinds: repeated.into_iter().collect(),
        })
    }
}

/// Append each declared link to both of its endpoints.
fn attach_connections(
    stations: &mut [Station],
    connections: &[ConnectionEntry],
) -> Result<(), InvalidBoard> {
    for &(from, to, mode) in connections {
        let source = resolve(stations, from)?;
        let destination = resolve(stations, to)?;

        stations[source.index()].connections.push(Connection {
            destination,
            mode,
        });
        stations[destination.index()].connections.push(Connection {
            destination: source,
            mode,
        });
    }
    Ok(())
}

fn resolve(stations: &[Station], number: i64) -> Result<StationNumber, InvalidBoard> {
    StationNumber::try_from(number)
        .ok()
        .filter(|n| n.index() < stations.len())
        .ok_or(InvalidBoard::UnknownStation { number })
}
