use anyhow::Result;
use clap::{Parser, ValueEnum};
use grid_snake::game::{GameConfig, SelfCollision};
use grid_snake::logging;
use grid_snake::modes::HumanMode;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "grid_snake")]
#[command(version, about = "Classic grid Snake in the terminal")]
struct Cli {
    /// JSON file with game settings; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Board width and height
    #[arg(long)]
    board_size: Option<i32>,

    /// Size of one cell; the board size must be a multiple of it
    #[arg(long)]
    cell_size: Option<i32>,

    /// Milliseconds between ticks
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Whether moving into the tail's current cell ends the run
    #[arg(long)]
    self_collision: Option<CollisionArg>,

    /// Disable the bell on food and game over
    #[arg(long)]
    mute: bool,

    /// Seed for food placement
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file (RUST_LOG sets the level)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum CollisionArg {
    /// Every segment counts, including the tail
    Strict,
    /// The tail is skipped when it moves away this tick
    VacatingTail,
}

impl From<CollisionArg> for SelfCollision {
    fn from(arg: CollisionArg) -> Self {
        match arg {
            CollisionArg::Strict => SelfCollision::Strict,
            CollisionArg::VacatingTail => SelfCollision::VacatingTail,
        }
    }
}

impl Cli {
    /// Defaults, then the config file, then flags
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_json_file(path)?,
            None => GameConfig::default(),
        };

        if let Some(board_size) = self.board_size {
            config.board_size = board_size;
        }
        if let Some(cell_size) = self.cell_size {
            config.cell_size = cell_size;
        }
        if let Some(tick_ms) = self.tick_ms {
            config.tick_interval_ms = tick_ms;
        }
        if let Some(policy) = self.self_collision {
            config.self_collision = policy.into();
        }
        if self.mute {
            config.sound = false;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        config.validate()?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_file.as_deref())?;

    let config = cli.game_config()?;
    log::info!("starting with {:?}", config);

    let mut human_mode = HumanMode::new(config)?;
    human_mode.run().await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::parse_from([
            "grid_snake",
            "--board-size",
            "200",
            "--tick-ms",
            "90",
            "--self-collision",
            "vacating-tail",
            "--mute",
        ]);
        let config = cli.game_config().unwrap();

        assert_eq!(config.board_size, 200);
        assert_eq!(config.cell_size, 20);
        assert_eq!(config.tick_interval_ms, 90);
        assert_eq!(config.self_collision, SelfCollision::VacatingTail);
        assert!(!config.sound);
    }

    #[test]
    fn test_invalid_geometry_rejected() {
        let cli = Cli::parse_from(["grid_snake", "--board-size", "410"]);
        assert!(cli.game_config().is_err());
    }
}
