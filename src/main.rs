use anyhow::{Context, Result};
use clap::Parser;
use gate_snake::game::GameConfig;
use gate_snake::modes::HumanMode;
use simplelog::{Config, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gate_snake")]
#[command(version, about = "Snake with growth and poison items and teleport gates")]
struct Cli {
    /// JSON level/config file; the flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid width, border included
    #[arg(long)]
    width: Option<usize>,

    /// Grid height, border included
    #[arg(long)]
    height: Option<usize>,

    /// Milliseconds per game tick
    #[arg(long)]
    tick_ms: Option<u64>,

    /// RNG seed for a reproducible level
    #[arg(long)]
    seed: Option<u64>,

    /// Where to write the log (the terminal is taken by the game)
    #[arg(long, default_value = "gate_snake.log")]
    log_file: PathBuf,

    /// Log debug events such as teleports and item spawns
    #[arg(long)]
    verbose: bool,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };

        if let Some(width) = self.width {
            config.grid_width = width;
        }
        if let Some(height) = self.height {
            config.grid_height = height;
        }
        if let Some(tick_ms) = self.tick_ms {
            config.tick_ms = tick_ms;
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

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let log_file = File::create(&cli.log_file)
        .with_context(|| format!("Failed to create log file {:?}", cli.log_file))?;
    WriteLogger::init(level, Config::default(), log_file).context("Failed to initialize logger")?;

    let config = cli.game_config()?;
    log::info!(
        "starting {}x{} game, tick {}ms",
        config.grid_height,
        config.grid_width,
        config.tick_ms
    );

    let mut human_mode = HumanMode::new(config)?;
    human_mode.run().await?;

    Ok(())
}
