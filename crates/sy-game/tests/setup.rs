//! Game setup against the classic rules.

use std::collections::HashSet;

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use sy_board::{Board, BoardBuilder, ConnectionMode, StationKind};
use sy_game::{Color, Game, Player, Rules, Tickets, rules};

/// 199 stations in a taxi ring with a bus chord every ten stations.
fn classic_sized_board() -> Board {
    let mut builder = BoardBuilder::new();
    for i in 1..=199 {
        if i % 10 == 1 {
            builder.add_station(i, [StationKind::Taxi, StationKind::Bus]);
        } else {
            builder.add_station(i, [StationKind::Taxi]);
        }
        builder.add_connection(i, i % 199 + 1, ConnectionMode::Taxi);
    }
    for i in (1..=181).step_by(10) {
        builder.add_connection(i, i + 10, ConnectionMode::Bus);
    }
    builder.build().unwrap()
}

const COLORS: [Color; 5] = [
    Color::Blue,
    Color::Green,
    Color::Orange,
    Color::Purple,
    Color::Red,
];

fn crew(count: usize) -> Vec<(Color, String)> {
    COLORS[..count]
        .iter()
        .map(|c| (*c, format!("{c} detective")))
        .collect()
}

#[test]
fn classic_game_on_full_board() {
    let board = classic_sized_board();
    assert_eq!(board.len(), 199);

    let mut rng = ChaCha8Rng::seed_from_u64(2025);
    let game = Game::new(board, Rules::classic(), &crew(5), "Mister X", &mut rng).unwrap();

    assert_eq!(game.detectives().len(), 5);
    for d in game.detectives() {
        assert!(rules::DETECTIVES_STARTING_POSITIONS.contains(&d.position()));
        assert_eq!(*d.tickets(), rules::DETECTIVE_TICKETS);
        assert!(game.board().contains(d.position()));
    }
    assert!(rules::MISTER_X_STARTING_POSITIONS.contains(&game.mister_x().position()));
    assert_eq!(game.mister_x().color(), Color::Black);
    assert_eq!(*game.supply_pile(), Tickets::new(5, 2, 3));
}

proptest! {
    #[test]
    fn setup_is_consistent(seed in any::<u64>(), count in 1_usize..=5) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let game = Game::new(classic_sized_board(), Rules::classic(), &crew(count), "X", &mut rng)
            .unwrap();

        let positions: HashSet<_> = game.detectives().iter().map(|d| d.position()).collect();
        prop_assert_eq!(positions.len(), count);

        let handed_out: u32 = game.detectives().iter().map(|d| d.tickets().total()).sum();
        prop_assert_eq!(
            game.supply_pile().total() + handed_out,
            rules::TOTAL_TICKETS.total()
        );
    }
}
