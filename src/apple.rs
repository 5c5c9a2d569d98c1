use crate::error::{GameError, Result};
use crate::grid::{Grid, Pos};
use log::{debug, warn};
use rand::Rng;
use std::collections::HashSet;

/// Random draws per free cell before falling back to a scan.
const SAMPLES_PER_CELL: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Apple {
    pos: Pos,
}

impl Apple {
    pub fn spawn(grid: &Grid, occupied: &HashSet<Pos>, rng: &mut impl Rng) -> Result<Self> {
        let pos = free_cell(grid, occupied, rng)?;
        Ok(Apple { pos })
    }

    pub fn pos(&self) -> Pos {
        self.pos
    }

    /// Moves the apple to a uniformly random cell not in `occupied`.
    /// On failure the apple stays where it was.
    pub fn relocate(
        &mut self,
        grid: &Grid,
        occupied: &HashSet<Pos>,
        rng: &mut impl Rng,
    ) -> Result {
        self.pos = free_cell(grid, occupied, rng)?;
        Ok(())
    }
}

fn free_cell(grid: &Grid, occupied: &HashSet<Pos>, rng: &mut impl Rng) -> Result<Pos> {
    let taken = occupied.iter().filter(|&&pos| grid.contains(pos)).count();
    if taken >= grid.capacity() {
        return Err(GameError::GridFull {
            width: grid.width,
            height: grid.height,
        });
    }

    let attempts = grid.capacity().saturating_sub(taken) * SAMPLES_PER_CELL;
    for _ in 0..attempts {
        let pos = Pos {
            x: rng.gen_range(0..grid.width),
            y: rng.gen_range(0..grid.height),
        };
        if !occupied.contains(&pos) {
            debug!("Apple placed at ({}, {})", pos.x, pos.y);
            return Ok(pos);
        }
    }

    warn!(
        "No free cell after {} samples with {} of {} cells taken, scanning",
        attempts,
        taken,
        grid.capacity()
    );
    grid.cells()
        .find(|pos| !occupied.contains(pos))
        .ok_or(GameError::GridFull {
            width: grid.width,
            height: grid.height,
        })
}
