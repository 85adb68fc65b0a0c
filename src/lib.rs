// Domain layer - grid store, transition engine, presets
pub mod domain;

// Application layer - simulation controller and pacing
pub mod application;

pub mod config;

// Infrastructure layer - rendering, input
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, Grid, GridError, Pattern, presets};
pub use application::{Controller, TickClock};
pub use config::Config;
