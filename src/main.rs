mod apple;
mod clock;
mod config;
mod error;
mod grid;
mod haus;
mod input;
mod render;
mod snek;

use clap::{error::ErrorKind, CommandFactory, Parser};
use clock::TickClock;
use config::{Args, GameConfig};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use haus::{SnekHaus, StepResult};
use log::{error, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::prelude::*;
use simplelog::{Config, WriteLogger};
use std::fs::File;
use std::io;

fn main() -> Result<(), io::Error> {
    let config = match GameConfig::try_from(Args::parse()) {
        Ok(config) => config,
        Err(e) => Args::command().error(ErrorKind::ValueValidation, e).exit(),
    };

    // Set up logging before anything else
    WriteLogger::init(
        config.log_level,
        Config::default(),
        File::create(&config.log_file)?,
    )
    .map_err(io::Error::other)?;

    let mut clock = TickClock::new(config.tick_period);
    info!(
        "Starting snektorus on a {}x{} grid, {:?} per tick",
        config.grid.width,
        config.grid.height,
        clock.period()
    );

    let rng = match config.seed {
        Some(seed) => {
            info!("Using seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };
    let mut haus = SnekHaus::new(config.grid, rng)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let wanted = render::frame_size(haus.grid());
    let available = terminal.size()?;
    if available.width < wanted.width || available.height < wanted.height {
        warn!(
            "Terminal is {}x{} but the board needs {}x{}, it will be clipped",
            available.width, available.height, wanted.width, wanted.height
        );
    }

    let result = run(&mut terminal, &mut haus, &mut clock);

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    match &result {
        Ok(()) => info!(
            "Finished after {} ticks, {} apples eaten, {} resets",
            haus.ticks(),
            haus.apples_eaten(),
            haus.resets()
        ),
        Err(e) => error!("Game loop failed: {}", e),
    }
    result
}

fn run<B: Backend, R: Rng>(
    terminal: &mut Terminal<B>,
    haus: &mut SnekHaus<R>,
    clock: &mut TickClock,
) -> io::Result<()> {
    terminal.draw(|f| render::draw(f, haus))?;

    loop {
        let commands = input::drain_until(clock.deadline())?;
        clock.advance();

        match haus.tick(commands)? {
            StepResult::Quit => return Ok(()),
            // Wipe the whole board, not just the vacated cell
            StepResult::Collision => terminal.clear()?,
            StepResult::Nommed(_) | StepResult::Ongoing => {}
        }

        terminal.draw(|f| render::draw(f, haus))?;
    }
}
