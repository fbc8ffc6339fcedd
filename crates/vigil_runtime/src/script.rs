//! Scripted player input
//!
//! Stands in for a pointer device: the cursor sweeps an ellipse around the
//! middle of the world and the fire button is tapped at a fixed interval.

use vigil_math::Vec2;
use vigil_world::{FrameInput, WorldBounds};

/// Deterministic cursor path
#[derive(Debug, Clone, Copy)]
pub struct CursorScript {
    center: Vec2,
    radii: Vec2,
    /// Radians per tick
    rate: f32,
    fire_interval: u32,
}

impl CursorScript {
    pub fn new(bounds: WorldBounds) -> Self {
        Self {
            center: bounds.center(),
            radii: Vec2::new(bounds.width * 0.35, bounds.height * 0.35),
            rate: 0.01,
            fire_interval: 20,
        }
    }

    pub fn cursor(&self, tick: u32) -> Vec2 {
        let angle = tick as f32 * self.rate;
        self.center + Vec2::new(self.radii.x * angle.cos(), self.radii.y * angle.sin())
    }

    /// Input for `tick`
    pub fn input(&self, tick: u32) -> FrameInput {
        let cursor = self.cursor(tick);
        if self.fire_interval > 0 && tick % self.fire_interval == 0 {
            FrameInput::fire_at(cursor)
        } else {
            FrameInput::aim(cursor)
        }
    }
}
