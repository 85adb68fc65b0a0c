mod clock;
mod controller;

pub use clock::TickClock;
pub use controller::Controller;
