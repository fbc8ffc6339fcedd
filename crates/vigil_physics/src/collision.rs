//! Circle overlap tests and push-out resolution
//!
//! MTV convention: the minimum translation vector returned for
//! `(circle1, circle2)` is the displacement to apply to `circle2` so the two
//! circles just touch. It points from `circle1` toward `circle2` and has
//! length `radii_sum - center_distance`.

use crate::shapes::Circle;
use vigil_math::Vec2;

/// Whether two circles overlap or touch
#[inline]
pub fn circle_circle(circle1: &Circle, circle2: &Circle) -> bool {
    let radii_sum = circle1.radius + circle2.radius;
    (circle2.position - circle1.position).length_squared() <= radii_sum * radii_sum
}

/// MTV that resolves `circle2` out of `circle1`, or `None` if they don't collide
///
/// Coincident centers have no defined separation axis; +X is used so the
/// result is always finite.
pub fn circle_circle_mtv(circle1: &Circle, circle2: &Circle) -> Option<Vec2> {
    let delta = circle2.position - circle1.position;
    let radii_sum = circle1.radius + circle2.radius;
    let center_distance = delta.length();
    if center_distance > radii_sum {
        return None;
    }

    let axis = if center_distance > 0.0 {
        delta / center_distance
    } else {
        Vec2::X
    };
    Some(axis * (radii_sum - center_distance))
}

/// Push a moving circle out of every obstacle it overlaps
///
/// Obstacles are processed in order and each correction is applied before the
/// next test, so deep overlaps with several obstacles may need more than one
/// call to settle.
pub fn resolve_circles(position: &mut Vec2, radius: f32, obstacles: &[Circle]) {
    for obstacle in obstacles {
        let moving = Circle::new(*position, radius);
        if let Some(mtv) = circle_circle_mtv(obstacle, &moving) {
            *position += mtv;
        }
    }
}
