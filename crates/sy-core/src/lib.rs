//! sy-core: shared foundation for the Scotland Yard workspace.
//!
//! Contains:
//! - ids (station numbers, the stable ids of the transit network)
//! - error (shared error types)

pub mod error;
pub mod ids;

pub use error::{SyError, SyResult};
pub use ids::StationNumber;
