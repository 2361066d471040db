//! sy-board: the transit network of the Scotland Yard board.
//!
//! Provides:
//! - Station kinds, connection modes, stations and connections
//! - Board construction from raw tables, with structural validation
//! - A read-only `Board` for movement and setup code to query
//!
//! # Example
//!
//! ```
//! use sy_board::{BoardBuilder, ConnectionMode, StationKind};
//! use sy_core::StationNumber;
//!
//! let board = BoardBuilder::new()
//!     .add_station(1, [StationKind::Bus])
//!     .add_station(2, [StationKind::Bus])
//!     .add_connection(1, 2, ConnectionMode::Bus)
//!     .build()
//!     .unwrap();
//!
//! let one = StationNumber::new(1).unwrap();
//! assert_eq!(board.len(), 2);
//! assert_eq!(board[one].connections().len(), 1);
//! ```

pub mod builder;
pub mod error;
pub mod graph;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use builder::{BoardBuilder, ConnectionEntry, StationEntry};
pub use error::{BoardError, BoardResult, InvalidBoard};
pub use graph::{Board, Connection, ConnectionMode, Station, StationKind};
