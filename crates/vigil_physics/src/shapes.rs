//! Shape primitives

use serde::{Deserialize, Serialize};
use vigil_math::Vec2;

/// Finite line segment
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub start: Vec2,
    pub end: Vec2,
}

impl Line {
    pub const fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    /// Segment of `length` starting at `start` along `direction`
    pub fn from_direction(start: Vec2, direction: Vec2, length: f32) -> Self {
        Self::new(start, start + direction.normalize() * length)
    }

    pub fn length(&self) -> f32 {
        (self.end - self.start).length()
    }
}

/// Circle used for obstacles and colliders alike
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    /// Center
    pub position: Vec2,
    /// Radius (non-negative)
    pub radius: f32,
}

impl Circle {
    pub const fn new(position: Vec2, radius: f32) -> Self {
        Self { position, radius }
    }

    /// Whether `point` lies inside or on the circle
    pub fn contains(&self, point: Vec2) -> bool {
        (point - self.position).length_squared() <= self.radius * self.radius
    }
}

/// Obstacle-avoidance sensor
///
/// Fixed after setup. The ray is cast from the owner's position along its
/// velocity rotated by `angle`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Probe {
    /// Degrees relative to the current velocity direction (positive = counter-clockwise)
    pub angle: f32,
    /// Ray length (positive)
    pub length: f32,
}

impl Probe {
    pub const fn new(angle: f32, length: f32) -> Self {
        Self { angle, length }
    }
}

pub type Points = Vec<Vec2>;
pub type Circles = Vec<Circle>;
pub type Probes = Vec<Probe>;
