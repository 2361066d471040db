//! sy-game: players, tickets, moves and game setup on top of the board.

pub mod error;
pub mod game;
pub mod moves;
pub mod observer;
pub mod player;
pub mod rules;

pub use error::{GameError, GameResult};
pub use game::Game;
pub use moves::{BlackTicketMove, DetectiveMove, DoubleMove, MisterXMove, SimpleMove, SingleMove};
pub use observer::{LogObserver, Observer, Subject};
pub use player::{Color, Detective, MisterX, Player, Tickets};
pub use rules::Rules;
