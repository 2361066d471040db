//! Board validation logic.

use std::collections::BTreeSet;

use tracing::debug;

use crate::error::InvalidBoard;
use crate::graph::{ConnectionMode, Station};

/// Check that each station's non-ferry connection modes are exactly the modes
/// of its declared kinds. Ferry links are ignored on both sides.
pub(crate) fn check_kinds_consistency(stations: &[Station]) -> Result<(), InvalidBoard> {
    for station in stations {
        let modes = station.local_modes();
        let expected: BTreeSet<ConnectionMode> =
            station.kinds.iter().copied().map(ConnectionMode::from).collect();

        if modes != expected {
            return Err(InvalidBoard::InconsistentKinds {
                station: station.number,
                kinds: station.kinds.iter().copied().collect(),
                modes: modes.into_iter().collect(),
            });
        }
    }

    debug!("kinds consistent with connections");
    Ok(())
}

/// Check that every station is reachable from the first one, following
/// connections of any mode.
pub(crate) fn check_connected(stations: &[Station]) -> Result<(), InvalidBoard> {
    let total = stations.len();
    if total == 0 {
        return Err(InvalidBoard::NoStations);
    }

    let mut visited = vec![false; total];
    let mut stack = vec![0_usize];
    visited[0] = true;
    let mut reached = 1;

    while let Some(index) = stack.pop() {
        for connection in &stations[index].connections {
            let next = connection.destination.index();
            if !visited[next] {
                visited[next] = true;
                reached += 1;
                stack.push(next);
            }
        }
    }

    if reached != total {
        return Err(InvalidBoard::NotConnected { reached, total });
    }

    debug!(stations = total, "network connected");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Connection, StationKind};
    use sy_core::StationNumber;

    fn station(number: u32, kinds: &[StationKind], links: &[(u32, ConnectionMode)]) -> Station {
        let mut s = Station::new(
            StationNumber::new(number).unwrap(),
            kinds.iter().copied().collect(),
        );
        s.connections = links
            .iter()
            .map(|&(to, mode)| Connection {
                destination: StationNumber::new(to).unwrap(),
                mode,
            })
            .collect();
        s
    }

    #[test]
    fn ferry_neither_required_nor_forbidden() {
        let stations = vec![
            station(
                1,
                &[StationKind::Taxi],
                &[(2, ConnectionMode::Taxi), (2, ConnectionMode::Ferry)],
            ),
            station(
                2,
                &[StationKind::Taxi],
                &[(1, ConnectionMode::Taxi), (1, ConnectionMode::Ferry)],
            ),
        ];
        assert!(check_kinds_consistency(&stations).is_ok());
    }

    #[test]
    fn extra_mode_without_kind_rejected() {
        let stations = vec![
            station(1, &[StationKind::Taxi], &[(2, ConnectionMode::Taxi), (2, ConnectionMode::Bus)]),
            station(
                2,
                &[StationKind::Taxi, StationKind::Bus],
                &[(1, ConnectionMode::Taxi), (1, ConnectionMode::Bus)],
            ),
        ];
        let err = check_kinds_consistency(&stations).unwrap_err();
        assert_eq!(
            err,
            InvalidBoard::InconsistentKinds {
                station: StationNumber::new(1).unwrap(),
                kinds: vec![StationKind::Taxi],
                modes: vec![ConnectionMode::Bus, ConnectionMode::Taxi],
            }
        );
    }

    #[test]
    fn kind_without_mode_rejected() {
        let stations = vec![station(
            1,
            &[StationKind::Underground, StationKind::Taxi],
            &[(1, ConnectionMode::Taxi), (1, ConnectionMode::Taxi)],
        )];
        let err = check_kinds_consistency(&stations).unwrap_err();
        assert_eq!(err.to_string(), "kinds and connections are not consistent (1)");
    }

    #[test]
    fn ferry_only_link_keeps_components_together() {
        let stations = vec![
            station(1, &[StationKind::Taxi], &[(2, ConnectionMode::Ferry)]),
            station(2, &[StationKind::Taxi], &[(1, ConnectionMode::Ferry)]),
        ];
        assert!(check_connected(&stations).is_ok());
    }

    #[test]
    fn isolated_station_detected() {
        let stations = vec![
            station(1, &[StationKind::Bus], &[(2, ConnectionMode::Bus)]),
            station(2, &[StationKind::Bus], &[(1, ConnectionMode::Bus)]),
            station(3, &[StationKind::Bus], &[(3, ConnectionMode::Bus), (3, ConnectionMode::Bus)]),
        ];
        assert_eq!(
            check_connected(&stations).unwrap_err(),
            InvalidBoard::NotConnected { reached: 2, total: 3 }
        );
    }

    #[test]
    fn single_station_is_connected() {
        let stations = vec![station(1, &[StationKind::Bus], &[])];
        assert!(check_connected(&stations).is_ok());
    }
}
