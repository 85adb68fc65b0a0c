use log::{debug, info};
use rand::Rng;

use crate::domain::{Grid, GridError, Pattern, step};

/// Controller owns the generation pair and the run/pause flag.
/// The shell talks to the simulation only through this type.
pub struct Controller {
    grid: Grid,
    scratch: Grid,
    running: bool,
    generation: u64,
}

impl Controller {
    /// Create a paused controller over an all-Empty grid
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        let grid = Grid::new(width, height)?;
        let scratch = grid.clone();
        Ok(Self {
            grid,
            scratch,
            running: false,
            generation: 0,
        })
    }

    /// Current generation, read-only
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Generations computed since the last clear/randomize
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Flip between Paused and Running. The grid is not touched.
    pub fn toggle_run(&mut self) {
        self.running = !self.running;
        info!(
            "simulation {} at generation {}",
            if self.running { "running" } else { "paused" },
            self.generation
        );
    }

    /// Advance one generation if running; no-op while paused.
    pub fn tick(&mut self) -> Result<(), GridError> {
        if !self.running {
            return Ok(());
        }
        step(&self.grid, &mut self.scratch)?;
        std::mem::swap(&mut self.grid, &mut self.scratch);
        self.generation += 1;
        Ok(())
    }

    /// Toggle the cell at (x, y) while paused.
    ///
    /// Returns `Ok(false)` when the edit was discarded because the simulation
    /// is running; off-grid coordinates are reported as `OutOfBounds`.
    pub fn edit(&mut self, x: i32, y: i32) -> Result<bool, GridError> {
        if self.running {
            debug!("edit at ({x}, {y}) ignored while running");
            return Ok(false);
        }
        let cell = self.grid.toggle(x, y)?;
        debug!("cell ({x}, {y}) is now {cell:?}");
        Ok(true)
    }

    /// Stamp a preset centred on (x, y) while paused.
    /// Returns the number of cells placed (0 while running).
    pub fn stamp(&mut self, pattern: &Pattern, x: i32, y: i32) -> usize {
        if self.running {
            debug!("stamp of {} ignored while running", pattern.name);
            return 0;
        }
        let placed = pattern.place_centered(&mut self.grid, x, y);
        debug!("stamped {} at ({x}, {y}), {placed} cells placed", pattern.name);
        placed
    }

    /// Pause, empty the grid and reset the generation counter
    pub fn clear(&mut self) {
        self.running = false;
        self.grid.clear();
        self.generation = 0;
        info!("grid cleared");
    }

    /// Pause, fill the grid at random and reset the generation counter
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R, density: f64) {
        self.running = false;
        self.grid.randomize(rng, density);
        self.generation = 0;
        info!("grid randomized, population {}", self.grid.population());
    }
}
