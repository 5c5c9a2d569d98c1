use crate::grid::Grid;
use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "snektorus", about = "Snake on a wrap-around grid")]
pub struct Args {
    /// Grid width in cells
    #[arg(long, default_value_t = 32)]
    pub width: u16,

    /// Grid height in cells
    #[arg(long, default_value_t = 24)]
    pub height: u16,

    /// Terminal columns per grid cell
    #[arg(long, default_value_t = 2)]
    pub cell_width: u16,

    /// Ticks per second
    #[arg(long, default_value_t = 20)]
    pub tps: u32,

    /// Seed for apple placement
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, default_value = "snektorus.log")]
    pub log_file: PathBuf,

    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Args {
    pub fn validate(&self) -> Result<(), String> {
        if !(2..=1000).contains(&self.width) {
            return Err("Grid width must be between 2 and 1000".to_string());
        }
        if !(2..=1000).contains(&self.height) {
            return Err("Grid height must be between 2 and 1000".to_string());
        }
        if !(1..=8).contains(&self.cell_width) {
            return Err("Cell width must be between 1 and 8".to_string());
        }
        if !(1..=240).contains(&self.tps) {
            return Err("Ticks per second must be between 1 and 240".to_string());
        }
        Ok(())
    }
}

/// Settings fixed for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub grid: Grid,
    pub tick_period: Duration,
    pub seed: Option<u64>,
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
}

impl TryFrom<Args> for GameConfig {
    type Error = String;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        args.validate()?;
        let log_level = args
            .log_level
            .parse::<LevelFilter>()
            .map_err(|e| format!("Invalid log level '{}': {}", args.log_level, e))?;

        Ok(GameConfig {
            grid: Grid::new(args.width, args.height, args.cell_width),
            tick_period: Duration::from_secs(1) / args.tps,
            seed: args.seed,
            log_file: args.log_file,
            log_level,
        })
    }
}
