//! Shared animation clock; every wave phase reads this one value.

use crate::error::{OceanError, Result};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Clock {
    elapsed_s: f32,
}

impl Clock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Elapsed time in seconds
    pub fn elapsed(&self) -> f32 {
        self.elapsed_s
    }

    /// Advance by `dt_s` seconds and return the new elapsed time
    pub fn advance(&mut self, dt_s: f32) -> Result<f32> {
        if !dt_s.is_finite() || dt_s < 0.0 {
            return Err(OceanError::InvalidTimeStep(dt_s));
        }
        let next = self.elapsed_s + dt_s;
        if !next.is_finite() {
            return Err(OceanError::InvalidTimeStep(dt_s));
        }
        self.elapsed_s = next;
        Ok(self.elapsed_s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_accumulates() {
        let mut clock = Clock::new();
        assert_eq!(clock.advance(0.5).unwrap(), 0.5);
        assert_eq!(clock.advance(0.0).unwrap(), 0.5);
        assert_eq!(clock.advance(0.25).unwrap(), 0.75);
        assert_eq!(clock.elapsed(), 0.75);
    }

    #[test]
    fn test_rejects_backward_or_non_finite_steps() {
        let mut clock = Clock::new();
        clock.advance(1.0).unwrap();
        for dt in [-0.1, f32::NAN, f32::INFINITY] {
            assert!(matches!(
                clock.advance(dt),
                Err(OceanError::InvalidTimeStep(_))
            ));
        }
        assert_eq!(clock.elapsed(), 1.0);
    }

    #[test]
    fn test_rejects_step_that_overflows_elapsed() {
        let mut clock = Clock::new();
        clock.advance(f32::MAX).unwrap();
        assert!(matches!(
            clock.advance(f32::MAX),
            Err(OceanError::InvalidTimeStep(_))
        ));
        assert_eq!(clock.elapsed(), f32::MAX);
    }
}
