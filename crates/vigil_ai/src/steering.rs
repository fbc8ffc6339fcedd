//! Steering behaviours
//!
//! Every behaviour returns a steering acceleration: the change this tick
//! needed to move the current velocity toward a desired velocity.

use serde::{Deserialize, Serialize};
use vigil_math::{radians, Vec2};
use vigil_physics::{line_circle, Circle, Probe, Rigidbody};

/// Accelerate toward `target` at `max_speed`
///
/// At the target itself the desired velocity is zero, so the result brakes.
#[inline]
pub fn seek(target: Vec2, position: Vec2, velocity: Vec2, max_speed: f32) -> Vec2 {
    (target - position).normalize() * max_speed - velocity
}

/// Accelerate directly away from `target` at `max_speed`
#[inline]
pub fn flee(target: Vec2, position: Vec2, velocity: Vec2, max_speed: f32) -> Vec2 {
    (position - target).normalize() * max_speed - velocity
}

/// Seek that slows down near the target
///
/// Full speed outside `slow_radius`, linearly scaled inside it and zero
/// within `arrive_radius`.
pub fn arrive(
    target: Vec2,
    position: Vec2,
    velocity: Vec2,
    max_speed: f32,
    slow_radius: f32,
    arrive_radius: f32,
) -> Vec2 {
    let to_target = target - position;
    let distance = to_target.length();

    let desired_speed = if distance > slow_radius {
        max_speed
    } else if distance > arrive_radius {
        max_speed * (distance / slow_radius)
    } else {
        0.0
    };

    to_target.normalize() * desired_speed - velocity
}

/// Probe-based obstacle avoidance
///
/// Each probe casts a ray from the body along its velocity rotated by the
/// probe angle. The first probe (in order) that touches any obstacle wins:
/// the velocity is turned away from that probe's side by
/// `angular_speed * dt` and the acceleration producing that turn is
/// returned. Detections are never blended.
pub fn avoid(body: &Rigidbody, dt: f32, obstacles: &[Circle], probes: &[Probe]) -> Vec2 {
    if dt <= 0.0 || body.velocity.length_squared() == 0.0 {
        return Vec2::ZERO;
    }

    let heading = body.velocity.normalize();
    let triggered = probes.iter().find(|probe| {
        let end = body.position + heading.rotate(radians(probe.angle)) * probe.length;
        obstacles
            .iter()
            .any(|obstacle| line_circle(body.position, end, obstacle.position, obstacle.radius))
    });

    match triggered {
        Some(probe) => {
            let turn_sign = if probe.angle >= 0.0 { -1.0 } else { 1.0 };
            let turned = heading.rotate(body.angular_speed * turn_sign * dt) * body.speed();
            (turned - body.velocity) / dt
        }
        None => Vec2::ZERO,
    }
}

/// Configurable target-following behaviour
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SteeringBehavior {
    Seek,
    Flee,
    Arrive { slow_radius: f32, arrive_radius: f32 },
}

impl Default for SteeringBehavior {
    fn default() -> Self {
        Self::Seek
    }
}

impl SteeringBehavior {
    /// Arrive with the default slowing/stopping radii (100 / 25)
    pub fn arrive() -> Self {
        Self::Arrive {
            slow_radius: 100.0,
            arrive_radius: 25.0,
        }
    }

    /// Calculate the steering acceleration toward (or away from) `target`
    pub fn calculate(&self, target: Vec2, position: Vec2, velocity: Vec2, max_speed: f32) -> Vec2 {
        match *self {
            Self::Seek => seek(target, position, velocity, max_speed),
            Self::Flee => flee(target, position, velocity, max_speed),
            Self::Arrive {
                slow_radius,
                arrive_radius,
            } => arrive(target, position, velocity, max_speed, slow_radius, arrive_radius),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_seek() {
        let acc = seek(Vec2::new(10.0, 0.0), Vec2::ZERO, Vec2::ZERO, 5.0);
        assert_eq!(acc, Vec2::new(5.0, 0.0));

        // Cancels current velocity
        let acc = seek(Vec2::new(10.0, 0.0), Vec2::ZERO, Vec2::new(0.0, 3.0), 5.0);
        assert_eq!(acc, Vec2::new(5.0, -3.0));
    }

    #[test]
    fn test_seek_at_target_brakes() {
        let velocity = Vec2::new(2.0, 1.0);
        let acc = seek(Vec2::ONE, Vec2::ONE, velocity, 5.0);
        assert!(acc.is_finite());
        assert_eq!(acc, -velocity);
    }

    #[test]
    fn test_flee() {
        let acc = flee(Vec2::new(10.0, 0.0), Vec2::ZERO, Vec2::ZERO, 5.0);
        assert_eq!(acc, Vec2::new(-5.0, 0.0));
    }

    #[test]
    fn test_arrive_slows_down() {
        let far = arrive(Vec2::new(500.0, 0.0), Vec2::ZERO, Vec2::ZERO, 10.0, 100.0, 25.0);
        let near = arrive(Vec2::new(50.0, 0.0), Vec2::ZERO, Vec2::ZERO, 10.0, 100.0, 25.0);
        let inside = arrive(Vec2::new(10.0, 0.0), Vec2::ZERO, Vec2::new(1.0, 0.0), 10.0, 100.0, 25.0);

        assert_relative_eq!(far.x, 10.0);
        assert_relative_eq!(near.x, 5.0);
        assert_eq!(inside, Vec2::new(-1.0, 0.0));
    }

    fn moving_right() -> Rigidbody {
        let mut body = Rigidbody::at(Vec2::ZERO).with_angular_speed(1.0);
        body.velocity = Vec2::new(10.0, 0.0);
        body
    }

    #[test]
    fn test_avoid_without_obstacles_is_zero() {
        let probes = vec![Probe::new(15.0, 100.0), Probe::new(-15.0, 100.0)];
        assert_eq!(avoid(&moving_right(), 0.1, &[], &probes), Vec2::ZERO);
    }

    #[test]
    fn test_avoid_turns_away_from_left_probe() {
        let body = moving_right();
        // Obstacle up and to the left (counter-clockwise side)
        let obstacles = vec![Circle::new(Vec2::new(80.0, 25.0), 5.0)];
        let probes = vec![Probe::new(15.0, 100.0), Probe::new(-15.0, 100.0)];

        let acc = avoid(&body, 0.1, &obstacles, &probes);
        let turned = body.velocity + acc * 0.1;

        // Clockwise turn of angular_speed * dt, speed preserved
        assert_relative_eq!(body.velocity.angle_to(turned), -0.1, epsilon = 1e-4);
        assert_relative_eq!(turned.length(), 10.0, epsilon = 1e-4);
    }

    #[test]
    fn test_avoid_first_probe_wins() {
        let body = moving_right();
        // Both probes see the obstacle dead ahead; declared order decides
        let obstacles = vec![Circle::new(Vec2::new(60.0, 0.0), 30.0)];

        let right_first = vec![Probe::new(-15.0, 100.0), Probe::new(15.0, 100.0)];
        let acc = avoid(&body, 0.1, &obstacles, &right_first);
        assert!(acc.y > 0.0);

        let left_first = vec![Probe::new(15.0, 100.0), Probe::new(-15.0, 100.0)];
        let acc = avoid(&body, 0.1, &obstacles, &left_first);
        assert!(acc.y < 0.0);
    }

    #[test]
    fn test_avoid_at_rest_is_zero() {
        let body = Rigidbody::at(Vec2::ZERO).with_angular_speed(1.0);
        let obstacles = vec![Circle::new(Vec2::ZERO, 30.0)];
        assert_eq!(avoid(&body, 0.1, &obstacles, &[Probe::new(0.0, 50.0)]), Vec2::ZERO);
    }

    #[test]
    fn test_behavior_dispatch() {
        let target = Vec2::new(0.0, 100.0);
        assert_eq!(
            SteeringBehavior::Seek.calculate(target, Vec2::ZERO, Vec2::ZERO, 2.0),
            Vec2::new(0.0, 2.0)
        );
        assert_eq!(
            SteeringBehavior::Flee.calculate(target, Vec2::ZERO, Vec2::ZERO, 2.0),
            Vec2::new(0.0, -2.0)
        );
        let arrive = SteeringBehavior::arrive().calculate(target, Vec2::ZERO, Vec2::ZERO, 2.0);
        assert_relative_eq!(arrive.y, 2.0);
    }
}
