//! Window and simulation constants.
//!
//! The grid size is derived from the window size and cell size rather than
//! fixed in the model, so the engine itself can run at any dimensions.

pub const WINDOW_WIDTH: u32 = 800;
pub const WINDOW_HEIGHT: u32 = 600;
pub const CELL_SIZE: u32 = 10;
pub const TICKS_PER_SECOND: f32 = 60.0;
pub const MIN_TICKS_PER_SECOND: f32 = 1.0;
pub const MAX_TICKS_PER_SECOND: f32 = 60.0;
/// Share of cells set alive by "randomize"
pub const RANDOM_DENSITY: f64 = 0.3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    pub window_width: u32,
    pub window_height: u32,
    pub cell_size: u32,
    pub ticks_per_second: f32,
}

impl Config {
    /// Grid dimensions in cells (window pixels / cell pixels).
    /// A zero cell size yields (0, 0), which `Grid::new` rejects.
    pub fn grid_dimensions(&self) -> (usize, usize) {
        let cells = |pixels: u32| pixels.checked_div(self.cell_size).unwrap_or(0) as usize;
        (cells(self.window_width), cells(self.window_height))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            cell_size: CELL_SIZE,
            ticks_per_second: TICKS_PER_SECOND,
        }
    }
}
