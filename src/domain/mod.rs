mod cell;
mod error;
mod grid;
mod patterns;
pub mod transition;

pub use cell::Cell;
pub use error::GridError;
pub use grid::Grid;
pub use patterns::{Pattern, presets};
pub use transition::step;
