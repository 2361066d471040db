//! Game setup: board, supply pile, detectives and Mister X.

use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;
use sy_board::Board;
use sy_core::{SyError, SyResult};
use tracing::{debug, info};

use crate::error::{GameError, GameResult};
use crate::player::{Color, Detective, MisterX, Player, Tickets};
use crate::rules::Rules;

/// A game at its starting position.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    rules: Rules,
    supply_pile: Tickets,
    detectives: Vec<Detective>,
    mister_x: MisterX,
    round: u32,
}

impl Game {
    /// Set up a game on `board`.
    ///
    /// Each detective draws a distinct starting position and takes their
    /// tickets from the supply pile; Mister X draws from his own list.
    pub fn new<R: Rng + ?Sized>(
        board: Board,
        rules: Rules,
        detectives: &[(Color, String)],
        mister_x_name: &str,
        rng: &mut R,
    ) -> GameResult<Self> {
        rules.check_against(&board)?;

        let mut remaining = rules.detective_starting_positions.clone();
        if detectives.len() > remaining.len() {
            return Err(GameError::NotEnoughStartingPositions {
                detectives: detectives.len(),
                positions: remaining.len(),
            });
        }

        let mut supply_pile = rules.supply_pile;
        let mut seen_colors = HashSet::new();
        let mut players = Vec::with_capacity(detectives.len());
        for (color, name) in detectives {
            if !seen_colors.insert(*color) {
                return Err(GameError::DuplicateColor { color: *color });
            }

            let tickets = rules.detective_tickets;
            let position = remaining.remove(rng.gen_range(0..remaining.len()));
            let detective = Detective::new(name.as_str(), *color, position, tickets)?;

            supply_pile = supply_pile
                .checked_sub(&tickets)
                .ok_or(GameError::SupplyExhausted {
                    needed: tickets,
                    left: supply_pile,
                })?;
            debug!(name = detective.name(), %color, %position, "detective placed");
            players.push(detective);
        }

        let position = rules
            .mister_x_starting_positions
            .choose(rng)
            .copied()
            .ok_or(GameError::NoStartingPositions { who: "Mister X" })?;
        let mister_x = MisterX::new(
            mister_x_name,
            position,
            rules.mister_x_black_tickets,
            rules.mister_x_double_move_tickets,
        )?;

        info!(
            detectives = players.len(),
            supply = %supply_pile,
            "game set up"
        );
        Ok(Self {
            board,
            rules,
            supply_pile,
            detectives: players,
            mister_x,
            round: 0,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Tickets left after the detectives took theirs.
    pub fn supply_pile(&self) -> &Tickets {
        &self.supply_pile
    }

    pub fn detectives(&self) -> &[Detective] {
        &self.detectives
    }

    pub fn detective(&self, index: usize) -> SyResult<&Detective> {
        self.detectives.get(index).ok_or(SyError::IndexOob {
            what: "detective",
            index,
            len: self.detectives.len(),
        })
    }

    pub fn mister_x(&self) -> &MisterX {
        &self.mister_x
    }

    pub fn round(&self) -> u32 {
        self.round
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use sy_board::{BoardBuilder, ConnectionMode, StationKind};
    use sy_core::StationNumber;

    fn n(number: u32) -> StationNumber {
        StationNumber::new(number).unwrap()
    }

    /// Ring of six taxi stations.
    fn ring() -> Board {
        let mut builder = BoardBuilder::new();
        for i in 1..=6 {
            builder.add_station(i, [StationKind::Taxi]);
            builder.add_connection(i, i % 6 + 1, ConnectionMode::Taxi);
        }
        builder.build().unwrap()
    }

    fn rules() -> Rules {
        Rules {
            detective_starting_positions: vec![n(1), n(2), n(3)],
            mister_x_starting_positions: vec![n(5), n(6)],
            ..Rules::classic()
        }
    }

    fn crew(colors: &[Color]) -> Vec<(Color, String)> {
        colors.iter().map(|c| (*c, format!("{c} detective"))).collect()
    }

    #[test]
    fn detectives_get_distinct_positions() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let game = Game::new(
            ring(),
            rules(),
            &crew(&[Color::Blue, Color::Green, Color::Red]),
            "X",
            &mut rng,
        )
        .unwrap();

        let positions: HashSet<_> = game.detectives().iter().map(|d| d.position()).collect();
        assert_eq!(positions, HashSet::from([n(1), n(2), n(3)]));
        assert!([n(5), n(6)].contains(&game.mister_x().position()));
        assert_eq!(game.round(), 0);
        assert_eq!(*game.supply_pile(), Tickets::new(45 - 24, 57 - 33, 23 - 12));
        assert_eq!(game.mister_x().black_tickets(), 5);
        assert_eq!(game.mister_x().double_move_tickets(), 3);
    }

    #[test]
    fn same_seed_same_setup() {
        let setup = |seed| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let game = Game::new(ring(), rules(), &crew(&[Color::Blue]), "X", &mut rng).unwrap();
            (game.detectives()[0].position(), game.mister_x().position())
        };
        assert_eq!(setup(11), setup(11));
    }

    #[test]
    fn setup_faults() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let err = Game::new(ring(), rules(), &crew(&[Color::Blue, Color::Blue]), "X", &mut rng)
            .unwrap_err();
        assert_eq!(err, GameError::DuplicateColor { color: Color::Blue });

        let err = Game::new(ring(), rules(), &crew(&[Color::Black]), "X", &mut rng).unwrap_err();
        assert_eq!(err, GameError::BlackDetective);

        let err = Game::new(
            ring(),
            rules(),
            &crew(&[Color::Blue, Color::Green, Color::Red, Color::Purple]),
            "X",
            &mut rng,
        )
        .unwrap_err();
        assert_eq!(
            err,
            GameError::NotEnoughStartingPositions {
                detectives: 4,
                positions: 3
            }
        );

        let err = Game::new(ring(), rules(), &crew(&[Color::Blue]), "", &mut rng).unwrap_err();
        assert_eq!(err, GameError::EmptyName);
    }

    #[test]
    fn small_supply_pile_runs_out() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let rules = Rules {
            supply_pile: Tickets::new(10, 30, 10),
            ..rules()
        };
        let err = Game::new(ring(), rules, &crew(&[Color::Blue, Color::Green]), "X", &mut rng)
            .unwrap_err();
        assert_eq!(
            err,
            GameError::SupplyExhausted {
                needed: Tickets::new(8, 11, 4),
                left: Tickets::new(2, 19, 6),
            }
        );
    }

    #[test]
    fn detective_lookup_out_of_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let game = Game::new(ring(), rules(), &crew(&[Color::Orange]), "X", &mut rng).unwrap();
        assert_eq!(game.detective(0).unwrap().color(), Color::Orange);
        assert!(matches!(
            game.detective(1),
            Err(SyError::IndexOob { index: 1, len: 1, .. })
        ));
    }
}
