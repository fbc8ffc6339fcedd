//! Shared world state

use crate::bullet::Bullet;
use crate::config::WorldBounds;
use vigil_math::Vec2;
use vigil_physics::{distance_sort, Circle, Circles, Points};

/// Obstacles, waypoints and live bullets
///
/// Owned by the [`Simulation`](crate::Simulation). Entities borrow it for
/// the duration of their own update and only ever append bullets.
#[derive(Debug, Clone, Default)]
pub struct World {
    pub obstacles: Circles,
    pub waypoints: Points,
    pub bullets: Vec<Bullet>,
    pub bounds: WorldBounds,
}

impl World {
    pub fn new(bounds: WorldBounds) -> Self {
        Self {
            bounds,
            ..Default::default()
        }
    }

    pub fn add_obstacle(&mut self, obstacle: Circle) {
        self.obstacles.push(obstacle);
    }

    pub fn add_waypoint(&mut self, waypoint: Vec2) {
        self.waypoints.push(waypoint);
    }

    pub fn spawn_bullet(&mut self, bullet: Bullet) {
        log::debug!(
            "{:?} bullet fired from ({:.1}, {:.1})",
            bullet.kind(),
            bullet.position().x,
            bullet.position().y
        );
        self.bullets.push(bullet);
    }

    /// Drop inactive bullets, keeping the rest in order; returns how many were removed
    pub fn remove_inactive_bullets(&mut self) -> usize {
        let before = self.bullets.len();
        self.bullets.retain(Bullet::is_active);
        let removed = before - self.bullets.len();
        if removed > 0 {
            log::debug!("{} bullet(s) expired", removed);
        }
        removed
    }

    /// Index of the waypoint nearest to `point`
    pub fn nearest_waypoint(&self, point: Vec2) -> Option<usize> {
        self.waypoints
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| {
                (**a - point)
                    .length_squared()
                    .total_cmp(&(**b - point).length_squared())
            })
            .map(|(index, _)| index)
    }

    /// Waypoints sorted by distance to `point`, nearest first
    pub fn waypoints_by_distance(&self, point: Vec2) -> Points {
        let mut sorted = self.waypoints.clone();
        distance_sort(point, &mut sorted);
        sorted
    }
}
