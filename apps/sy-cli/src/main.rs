use clap::{Parser, Subcommand};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::path::{Path, PathBuf};
use sy_board::ConnectionMode;
use sy_core::{StationNumber, SyError};
use sy_data::DataError;
use sy_game::{Color, Game, GameError, Player, Rules};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sy-cli")]
#[command(about = "Scotland Yard CLI - board validation and game setup", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build and validate a board file
    Validate {
        /// Path to the board YAML or JSON file
        board_path: PathBuf,
    },
    /// Show the kinds and connections of one station
    Station {
        /// Path to the board YAML or JSON file
        board_path: PathBuf,
        /// Station number
        number: u32,
    },
    /// Set up a game and print the starting positions
    Setup {
        /// Path to the board YAML or JSON file
        board_path: PathBuf,
        /// Detective as <color>:<name>, repeatable
        #[arg(short, long = "detective", value_parser = parse_detective, required = true)]
        detectives: Vec<(Color, String)>,
        /// Name of Mister X
        #[arg(short, long)]
        mister_x: String,
        /// Rules YAML file (defaults to the classic rules)
        #[arg(short, long)]
        rules: Option<PathBuf>,
        /// Seed for a reproducible setup
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Data(#[from] DataError),

    #[error(transparent)]
    Game(#[from] GameError),

    #[error(transparent)]
    Core(#[from] SyError),
}

type CliResult<T> = Result<T, CliError>;

fn parse_detective(s: &str) -> Result<(Color, String), String> {
    let (color, name) = s
        .split_once(':')
        .ok_or_else(|| format!("expected <color>:<name>, got '{s}'"))?;
    let color = color.parse::<Color>().map_err(|e| e.to_string())?;
    Ok((color, name.to_string()))
}

fn main() -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { board_path } => cmd_validate(&board_path),
        Commands::Station { board_path, number } => cmd_station(&board_path, number),
        Commands::Setup {
            board_path,
            detectives,
            mister_x,
            rules,
            seed,
        } => cmd_setup(&board_path, &detectives, &mister_x, rules.as_deref(), seed),
    }
}

fn cmd_validate(board_path: &Path) -> CliResult<()> {
    println!("Validating board: {}", board_path.display());
    let board = sy_data::load_board(board_path)?;
    println!("✓ Board is valid");
    println!("  Stations: {}", board.len());
    println!("  Connections: {}", board.connection_count());
    for mode in ConnectionMode::ALL {
        let count = board
            .stations()
            .flat_map(|s| s.connections())
            .filter(|c| c.mode == mode)
            .count()
            / 2;
        println!("    {mode}: {count}");
    }
    Ok(())
}

fn cmd_station(board_path: &Path, number: u32) -> CliResult<()> {
    let board = sy_data::load_board(board_path)?;
    let number = StationNumber::try_from(number)?;
    let station = board.station(number).map_err(SyError::from)?;

    let kinds: Vec<&str> = station.kinds().iter().map(|k| k.as_str()).collect();
    println!("Station {} ({})", station.number(), kinds.join(", "));
    for mode in ConnectionMode::ALL {
        let destinations: Vec<String> = station
            .destinations_by(mode)
            .map(|d| d.to_string())
            .collect();
        if !destinations.is_empty() {
            println!("  {mode}: {}", destinations.join(", "));
        }
    }
    Ok(())
}

fn cmd_setup(
    board_path: &Path,
    detectives: &[(Color, String)],
    mister_x: &str,
    rules_path: Option<&Path>,
    seed: Option<u64>,
) -> CliResult<()> {
    let board = sy_data::load_board(board_path)?;
    let rules = match rules_path {
        Some(path) => sy_data::load_rules_yaml(path)?,
        None => Rules::classic(),
    };

    debug!(?seed, detectives = detectives.len(), "setting up game");
    let mut rng: Box<dyn RngCore> = match seed {
        Some(seed) => Box::new(ChaCha8Rng::seed_from_u64(seed)),
        None => Box::new(rand::thread_rng()),
    };
    let game = Game::new(board, rules, detectives, mister_x, rng.as_mut())?;

    println!("Game set up ({} rounds)", game.rules().max_round);
    for detective in game.detectives() {
        println!(
            "  {} ({}) at {} with {}",
            detective.name(),
            detective.color(),
            detective.position(),
            detective.tickets()
        );
    }
    let x = game.mister_x();
    println!(
        "  {} (black) at {} with {} black and {} double-move tickets",
        x.name(),
        x.position(),
        x.black_tickets(),
        x.double_move_tickets()
    );
    println!("  Supply pile: {}", game.supply_pile());
    Ok(())
}
