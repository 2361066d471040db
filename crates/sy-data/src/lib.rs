//! sy-data: board and rules files.
//!
//! Boards are read from YAML or JSON and handed to `sy-board` for
//! construction; nothing is returned unless the board validates.

pub mod schema;

use std::path::{Path, PathBuf};

use sy_board::{Board, BoardError};
use sy_game::Rules;
use tracing::{debug, warn};

pub use schema::{BoardDef, ConnectionDef, RulesDef, StationDef, TicketsDef};

pub type DataResult<T> = Result<T, DataError>;

#[derive(thiserror::Error, Debug)]
pub enum DataError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Board(#[from] BoardError),
}

fn read(path: &Path) -> DataResult<String> {
    debug!(path = %path.display(), "reading data file");
    std::fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn build(def: &BoardDef, origin: &str) -> DataResult<Board> {
    def.build().map_err(|err| {
        warn!(origin, error = %err, "rejected board");
        DataError::from(err)
    })
}

pub fn board_from_yaml_str(content: &str) -> DataResult<Board> {
    let def: BoardDef = serde_yaml::from_str(content)?;
    build(&def, "yaml")
}

pub fn board_from_json_str(content: &str) -> DataResult<Board> {
    let def: BoardDef = serde_json::from_str(content)?;
    build(&def, "json")
}

pub fn load_board_yaml(path: &Path) -> DataResult<Board> {
    let def: BoardDef = serde_yaml::from_str(&read(path)?)?;
    build(&def, &path.display().to_string())
}

pub fn load_board_json(path: &Path) -> DataResult<Board> {
    let def: BoardDef = serde_json::from_str(&read(path)?)?;
    build(&def, &path.display().to_string())
}

/// Load a board, choosing the format from the file extension (YAML unless `.json`).
pub fn load_board(path: &Path) -> DataResult<Board> {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => load_board_json(path),
        _ => load_board_yaml(path),
    }
}

pub fn rules_from_yaml_str(content: &str) -> DataResult<Rules> {
    let def: RulesDef = serde_yaml::from_str(content)?;
    Ok(def.into_rules())
}

pub fn load_rules_yaml(path: &Path) -> DataResult<Rules> {
    rules_from_yaml_str(&read(path)?)
}
