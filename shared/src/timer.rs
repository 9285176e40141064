use crate::math::clamp;

/// Tracks elapsed time against a fixed duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timer {
    duration: f64,
    elapsed: f64,
}

impl Timer {
    pub fn new(duration: f64) -> Self {
        Self { duration, elapsed: 0.0 }
    }

    pub fn with_elapsed(duration: f64, elapsed: f64) -> Self {
        Self { duration, elapsed }
    }

    /// Accumulates `dt` and reports whether the timer has expired. Expiry is
    /// strict (elapsed must exceed the duration) and the check runs on every
    /// call, so callers should stop ticking after the first `true`.
    pub fn tick(&mut self, dt: f64) -> bool {
        self.elapsed += dt;
        self.elapsed > self.duration
    }

    /// Fraction of the duration consumed so far, clamped to [0, 1]. A timer
    /// with a non-positive duration counts as already complete.
    pub fn percent_complete(&self) -> f64 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        clamp(self.elapsed / self.duration, 0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_expires_strictly_after_duration() {
        let mut timer = Timer::new(100.0);
        assert!(!timer.tick(50.0));
        // exactly at the duration is not yet expired
        assert!(!timer.tick(50.0));
        assert!(timer.tick(0.1));
        // keeps reporting expiry on later calls
        assert!(timer.tick(0.0));
    }

    #[test]
    fn test_percent_complete_is_clamped() {
        let mut timer = Timer::new(200.0);
        assert_eq!(timer.percent_complete(), 0.0);
        timer.tick(50.0);
        assert_eq!(timer.percent_complete(), 0.25);
        timer.tick(10_000.0);
        assert_eq!(timer.percent_complete(), 1.0);
    }

    #[test]
    fn test_zero_duration_counts_as_complete() {
        let mut timer = Timer::new(0.0);
        assert_eq!(timer.percent_complete(), 1.0);
        assert!(timer.tick(0.1));
    }

    #[test]
    fn test_starts_partially_elapsed() {
        let timer = Timer::with_elapsed(100.0, 50.0);
        assert_eq!(timer.percent_complete(), 0.5);
    }
}
