//! Combat-mode state machine
//!
//! Agents cycle between three modes, each with its own dwell timer.
//! Offensive and defensive modes fall back to neutral when their timer
//! expires. Neutral picks one of the other two at random. Low health
//! overrides everything except an already-defensive agent.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use vigil_core::Timer;

/// High-level behaviour mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CombatMode {
    Offensive,
    Defensive,
    Neutral,
}

impl CombatMode {
    pub const ALL: [CombatMode; 3] = [Self::Offensive, Self::Defensive, Self::Neutral];

    #[inline]
    fn slot(self) -> usize {
        match self {
            Self::Offensive => 0,
            Self::Defensive => 1,
            Self::Neutral => 2,
        }
    }

    /// Whether this mode is driven by a decision tree
    pub fn is_tactical(self) -> bool {
        self != Self::Neutral
    }
}

impl fmt::Display for CombatMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Offensive => "OFFENSIVE",
            Self::Defensive => "DEFENSIVE",
            Self::Neutral => "NEUTRAL",
        };
        f.write_str(name)
    }
}

/// Dwell time per mode, in seconds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModeDurations {
    pub neutral: f32,
    pub offensive: f32,
    pub defensive: f32,
}

impl Default for ModeDurations {
    fn default() -> Self {
        Self {
            neutral: 4.0,
            offensive: 6.0,
            defensive: 8.0,
        }
    }
}

/// Mode machine for a single agent
#[derive(Debug, Clone)]
pub struct ModeMachine {
    current: CombatMode,
    previous: Option<CombatMode>,
    timers: [Timer; 3],
    /// Health fraction below which the agent is forced defensive
    low_health: f32,
}

impl ModeMachine {
    /// Default forced-retreat threshold
    pub const LOW_HEALTH: f32 = 0.25;

    /// Create a machine starting in neutral
    pub fn new(durations: ModeDurations) -> Self {
        let mut timers = [Timer::default(); 3];
        timers[CombatMode::Offensive.slot()] = Timer::new(durations.offensive);
        timers[CombatMode::Defensive.slot()] = Timer::new(durations.defensive);
        timers[CombatMode::Neutral.slot()] = Timer::new(durations.neutral);

        Self {
            current: CombatMode::Neutral,
            previous: None,
            timers,
            low_health: Self::LOW_HEALTH,
        }
    }

    /// Set the forced-retreat threshold
    pub fn with_low_health(mut self, threshold: f32) -> Self {
        self.low_health = threshold;
        self
    }

    pub fn current(&self) -> CombatMode {
        self.current
    }

    pub fn previous(&self) -> Option<CombatMode> {
        self.previous
    }

    pub fn is_in(&self, mode: CombatMode) -> bool {
        self.current == mode
    }

    /// Timer belonging to `mode`
    pub fn timer(&self, mode: CombatMode) -> &Timer {
        &self.timers[mode.slot()]
    }

    /// Enter `mode`, resetting its timer
    ///
    /// Re-entering the current mode also restarts its timer.
    pub fn change(&mut self, mode: CombatMode) {
        self.previous = Some(self.current);
        self.current = mode;
        self.timers[mode.slot()].reset();
        log::info!("Entering {}", mode);
    }

    /// Advance one tick
    ///
    /// Returns the newly entered mode if a transition happened. A forced
    /// retreat consumes the tick, so the defensive timer starts from zero.
    pub fn update(&mut self, dt: f32, health_percent: f32, rng: &mut impl Rng) -> Option<CombatMode> {
        if health_percent < self.low_health && self.current != CombatMode::Defensive {
            self.change(CombatMode::Defensive);
            return Some(CombatMode::Defensive);
        }

        let timer = &mut self.timers[self.current.slot()];
        timer.tick(dt);
        if !timer.expired() {
            return None;
        }

        let next = match self.current {
            CombatMode::Offensive | CombatMode::Defensive => CombatMode::Neutral,
            CombatMode::Neutral => {
                if rng.gen_bool(0.5) {
                    CombatMode::Offensive
                } else {
                    CombatMode::Defensive
                }
            }
        };
        self.change(next);
        Some(next)
    }
}

impl Default for ModeMachine {
    fn default() -> Self {
        Self::new(ModeDurations::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_starts_neutral() {
        let machine = ModeMachine::default();
        assert!(machine.is_in(CombatMode::Neutral));
        assert_eq!(machine.previous(), None);
        assert_eq!(machine.timer(CombatMode::Defensive).duration, 8.0);
    }

    #[test]
    fn test_low_health_forces_defensive() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut machine = ModeMachine::default();
        machine.change(CombatMode::Offensive);
        machine.update(1.0, 1.0, &mut rng);

        // Leave some time on the defensive timer from an earlier visit
        machine.timers[CombatMode::Defensive.slot()].tick(3.0);

        assert_eq!(machine.update(0.1, 0.2, &mut rng), Some(CombatMode::Defensive));
        assert!(machine.is_in(CombatMode::Defensive));
        assert_eq!(machine.previous(), Some(CombatMode::Offensive));
        assert_eq!(machine.timer(CombatMode::Defensive).elapsed, 0.0);
    }

    #[test]
    fn test_low_health_while_defensive_keeps_ticking() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut machine = ModeMachine::default();
        machine.change(CombatMode::Defensive);

        assert_eq!(machine.update(1.0, 0.1, &mut rng), None);
        assert_eq!(machine.timer(CombatMode::Defensive).elapsed, 1.0);
    }

    #[test]
    fn test_expiry_returns_to_neutral() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut machine = ModeMachine::default();

        for mode in [CombatMode::Offensive, CombatMode::Defensive] {
            machine.change(mode);
            let duration = machine.timer(mode).duration;
            assert_eq!(machine.update(duration - 0.5, 1.0, &mut rng), None);
            assert_eq!(machine.update(0.5, 1.0, &mut rng), Some(CombatMode::Neutral));
            assert_eq!(machine.timer(CombatMode::Neutral).elapsed, 0.0);
        }
    }

    #[test]
    fn test_neutral_picks_both_tactics() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen_offensive = false;
        let mut seen_defensive = false;

        for _ in 0..64 {
            let mut machine = ModeMachine::default();
            match machine.update(4.0, 1.0, &mut rng) {
                Some(CombatMode::Offensive) => seen_offensive = true,
                Some(CombatMode::Defensive) => seen_defensive = true,
                other => panic!("unexpected transition {:?}", other),
            }
        }

        assert!(seen_offensive && seen_defensive);
    }

    #[test]
    fn test_zero_duration_expires_every_tick() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut machine = ModeMachine::new(ModeDurations {
            neutral: 0.0,
            offensive: 0.0,
            defensive: 0.0,
        });

        for _ in 0..10 {
            assert!(machine.update(0.0, 1.0, &mut rng).is_some());
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(CombatMode::Offensive.to_string(), "OFFENSIVE");
        assert!(CombatMode::Defensive.is_tactical());
        assert!(!CombatMode::Neutral.is_tactical());
    }
}
