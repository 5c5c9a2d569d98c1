use crate::apple::Apple;
use crate::error::Result;
use crate::grid::{Direction, Grid, Pos};
use crate::snek::Snek;
use log::{debug, info};
use rand::Rng;
use std::collections::HashSet;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    Turn(Direction),
    Quit,
}

#[derive(Debug, PartialEq)]
pub enum StepResult {
    Ongoing,        // Normal movement, no special events
    Nommed(usize),  // Ate the apple, with the new length
    Collision,      // Hit self, snake was reset
    Quit,           // Quit requested, nothing was touched
}

/// Owns the whole game state and advances it one tick at a time.
#[derive(Debug)]
pub struct SnekHaus<R> {
    grid: Grid,
    snek: Snek,
    apple: Apple,
    rng: R,
    ticks: u64,
    apples_eaten: u64,
    resets: u64,
}

impl<R: Rng> SnekHaus<R> {
    pub fn new(grid: Grid, mut rng: R) -> Result<Self> {
        let snek = Snek::new(grid.center());
        let apple = Apple::spawn(&grid, &occupied_by(&snek), &mut rng)?;
        Ok(SnekHaus {
            grid,
            snek,
            apple,
            rng,
            ticks: 0,
            apples_eaten: 0,
            resets: 0,
        })
    }

    pub fn tick(&mut self, commands: impl IntoIterator<Item = Command>) -> Result<StepResult> {
        let mut turns = Vec::new();
        for command in commands {
            match command {
                Command::Turn(direction) => turns.push(direction),
                Command::Quit => {
                    info!("Quit after {} ticks", self.ticks);
                    return Ok(StepResult::Quit);
                }
            }
        }
        for direction in turns {
            self.snek.set_pending_direction(direction);
        }
        if let Some(direction) = self.snek.pending_direction() {
            debug!("Turning {:?} on tick {}", direction, self.ticks + 1);
        }

        self.ticks += 1;
        self.snek.commit_direction();
        self.snek.slither(&self.grid);

        let mut result = StepResult::Ongoing;
        if self.apple.pos() == self.snek.head() {
            self.snek.grow();
            self.apple
                .relocate(&self.grid, &occupied_by(&self.snek), &mut self.rng)?;
            debug_assert!(!self.snek.occupies(self.apple.pos()));
            self.apples_eaten += 1;
            info!(
                "Apple eaten, length now {}, next apple at ({}, {})",
                self.snek.length(),
                self.apple.pos().x,
                self.apple.pos().y
            );
            result = StepResult::Nommed(self.snek.length());
        }

        if self.snek.has_self_collision() {
            info!(
                "Snake hit itself heading {:?} at length {} on tick {}, resetting",
                self.snek.direction(),
                self.snek.length(),
                self.ticks
            );
            self.snek.reset();
            self.resets += 1;
            result = StepResult::Collision;
        }

        Ok(result)
    }
}

impl<R> SnekHaus<R> {
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn snek(&self) -> &Snek {
        &self.snek
    }

    pub fn apple(&self) -> &Apple {
        &self.apple
    }

    pub fn vacated(&self) -> Option<Pos> {
        self.snek.vacated()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn apples_eaten(&self) -> u64 {
        self.apples_eaten
    }

    pub fn resets(&self) -> u64 {
        self.resets
    }
}

fn occupied_by(snek: &Snek) -> HashSet<Pos> {
    snek.body().iter().copied().collect()
}
