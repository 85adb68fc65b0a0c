use crate::config::{MAX_TICKS_PER_SECOND, MIN_TICKS_PER_SECOND};

/// TickClock paces the simulation independently of the render frame rate.
/// It accumulates frame time and reports when the next tick is due.
#[derive(Clone, Debug)]
pub struct TickClock {
    ticks_per_second: f32,
    elapsed: f32,
}

impl TickClock {
    pub fn new(ticks_per_second: f32) -> Self {
        Self {
            ticks_per_second: ticks_per_second.clamp(MIN_TICKS_PER_SECOND, MAX_TICKS_PER_SECOND),
            elapsed: 0.0,
        }
    }

    pub fn ticks_per_second(&self) -> f32 {
        self.ticks_per_second
    }

    /// Adjust speed, clamped to the supported range
    pub fn adjust_speed(&mut self, delta: f32) {
        self.ticks_per_second =
            (self.ticks_per_second + delta).clamp(MIN_TICKS_PER_SECOND, MAX_TICKS_PER_SECOND);
    }

    /// Add `delta_time` seconds; true when a tick is due.
    ///
    /// At top speed every frame ticks. Otherwise one interval is consumed per
    /// tick and the leftover stays below one interval, so a slow frame never
    /// triggers a burst.
    pub fn advance(&mut self, delta_time: f32) -> bool {
        if self.ticks_per_second >= MAX_TICKS_PER_SECOND {
            self.elapsed = 0.0;
            return true;
        }
        self.elapsed += delta_time;
        let interval = 1.0 / self.ticks_per_second;
        if self.elapsed >= interval {
            self.elapsed = (self.elapsed - interval) % interval;
            true
        } else {
            false
        }
    }

    /// Drop any accumulated time, e.g. while paused
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticks_after_interval() {
        let mut clock = TickClock::new(10.0);
        assert!(!clock.advance(0.05));
        assert!(clock.advance(0.06));
        assert!(!clock.advance(0.01));
    }

    #[test]
    fn test_one_tick_per_long_frame() {
        let mut clock = TickClock::new(10.0);
        assert!(clock.advance(1.0));
        assert!(!clock.advance(0.0));
    }

    #[test]
    fn test_top_speed_ticks_every_frame() {
        let mut clock = TickClock::new(crate::config::TICKS_PER_SECOND);
        let ticks = (0..60).filter(|_| clock.advance(0.01666)).count();
        assert_eq!(ticks, 60);
    }

    #[test]
    fn test_leftover_time_carries_over() {
        // Frames slightly shorter than half an interval still average out.
        let mut clock = TickClock::new(30.0);
        let ticks = (0..60).filter(|_| clock.advance(0.01666)).count();
        assert!((29..=30).contains(&ticks), "got {ticks} ticks");
    }

    #[test]
    fn test_speed_is_clamped() {
        let mut clock = TickClock::new(500.0);
        assert_eq!(clock.ticks_per_second(), MAX_TICKS_PER_SECOND);
        clock.adjust_speed(-1000.0);
        assert_eq!(clock.ticks_per_second(), MIN_TICKS_PER_SECOND);
        clock.adjust_speed(1.0);
        assert_eq!(clock.ticks_per_second(), 2.0);
    }

    #[test]
    fn test_reset_drops_accumulated_time() {
        let mut clock = TickClock::new(1.0);
        assert!(!clock.advance(0.9));
        clock.reset();
        assert!(!clock.advance(0.2));
    }
}
