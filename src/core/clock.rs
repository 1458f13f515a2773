//! Simulation clock.
//!
//! All deadlines in the core (projectile expiry, fire-rate gating, explosion
//! flashes) are absolute timestamps on this clock, never wall-clock timers.

/// Monotonic run clock advanced once per simulation step.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SimClock {
    elapsed: f32,
}

impl SimClock {
    /// Advance by `delta` seconds. Negative deltas are treated as zero.
    pub fn advance(&mut self, delta: f32) -> f32 {
        let delta = if delta.is_finite() { delta.max(0.0) } else { 0.0 };
        self.elapsed += delta;
        delta
    }

    /// Total seconds since the run started.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether an absolute deadline has passed.
    pub fn has_passed(&self, deadline: f32) -> bool {
        self.elapsed >= deadline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulates_elapsed_time() {
        let mut clock = SimClock::default();
        clock.advance(0.25);
        assert_eq!(clock.advance(0.5), 0.5);
        assert_eq!(clock.elapsed(), 0.75);
    }

    #[test]
    fn negative_and_nan_deltas_do_not_rewind() {
        let mut clock = SimClock::default();
        clock.advance(1.0);
        assert_eq!(clock.advance(-0.5), 0.0);
        assert_eq!(clock.advance(f32::NAN), 0.0);
        assert_eq!(clock.elapsed(), 1.0);
    }

    #[test]
    fn deadlines_are_inclusive() {
        let mut clock = SimClock::default();
        clock.advance(0.5);
        assert!(clock.has_passed(0.5));
        assert!(!clock.has_passed(0.6));
    }
}
