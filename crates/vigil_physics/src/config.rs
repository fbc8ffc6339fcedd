//! Physics configuration

use crate::body::Rigidbody;
use serde::{Deserialize, Serialize};

/// Per-tick physics tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Velocity multiplier applied to AI bodies after each step
    pub damping: f32,

    /// Hard speed cap for steered bodies (`None` = uncapped)
    pub max_speed: Option<f32>,

    /// Turn rate given to new entities, radians per second
    pub angular_speed: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            damping: 0.95,
            max_speed: None,
            angular_speed: 100.0_f32.to_radians(),
        }
    }
}

impl PhysicsConfig {
    /// Set damping
    pub fn with_damping(mut self, damping: f32) -> Self {
        self.damping = damping;
        self
    }

    /// Set speed cap
    pub fn with_max_speed(mut self, max_speed: f32) -> Self {
        self.max_speed = Some(max_speed);
        self
    }

    /// Apply the speed cap, if any, to `body`
    pub fn limit_speed(&self, body: &mut Rigidbody) {
        if let Some(max_speed) = self.max_speed {
            body.clamp_speed(max_speed);
        }
    }
}
