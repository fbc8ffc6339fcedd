//! Frame-stepped timers

/// Counts elapsed seconds against a fixed duration
///
/// Owned by whatever needs a cooldown; advanced explicitly with [`Timer::tick`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timer {
    /// Seconds until the timer expires
    pub duration: f32,
    /// Seconds accumulated since the last reset
    pub elapsed: f32,
}

impl Timer {
    /// Create a timer that has not started counting
    pub const fn new(duration: f32) -> Self {
        Self {
            duration,
            elapsed: 0.0,
        }
    }

    /// Whether elapsed time has reached the duration
    #[inline]
    pub fn expired(&self) -> bool {
        self.elapsed >= self.duration
    }

    #[inline]
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }

    #[inline]
    pub fn tick(&mut self, dt: f32) {
        self.elapsed += dt;
    }

    /// Fraction of the duration elapsed, clamped to 1
    pub fn percent(&self) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (self.elapsed / self.duration).min(1.0)
    }
}
