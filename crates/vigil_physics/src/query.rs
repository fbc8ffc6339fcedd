//! Segment queries and line-of-sight

use crate::shapes::Circle;
use vigil_math::{distance_squared, project_point_segment, Vec2};

/// Anything with a world position that can be distance-sorted
pub trait Positioned {
    fn position(&self) -> Vec2;
}

impl Positioned for Vec2 {
    #[inline]
    fn position(&self) -> Vec2 {
        *self
    }
}

impl Positioned for Circle {
    #[inline]
    fn position(&self) -> Vec2 {
        self.position
    }
}

/// Sort ascending by squared distance to `reference`
///
/// The sort is stable: items at equal distance keep their input order.
pub fn distance_sort<T: Positioned>(reference: Vec2, items: &mut [T]) {
    items.sort_by(|lhs, rhs| {
        distance_squared(reference, lhs.position())
            .total_cmp(&distance_squared(reference, rhs.position()))
    });
}

/// Whether the finite segment `[start, end]` touches the circle
pub fn line_circle(start: Vec2, end: Vec2, center: Vec2, radius: f32) -> bool {
    let nearest = project_point_segment(start, end, center);
    distance_squared(nearest, center) <= radius * radius
}

/// Every circle the segment touches, nearest to `start` first
pub fn line_circle_list(start: Vec2, end: Vec2, circles: &[Circle]) -> Vec<Circle> {
    let mut hits: Vec<Circle> = circles
        .iter()
        .filter(|circle| line_circle(start, end, circle.position, circle.radius))
        .copied()
        .collect();
    distance_sort(start, &mut hits);
    hits
}

/// Line-of-sight test with occlusion
///
/// Casts a ray of `view_distance` from `viewer` toward `target`. The target
/// is visible when the ray reaches its circle and no intersected obstacle's
/// center is at least as close to the viewer as the target.
pub fn is_visible(
    viewer: Vec2,
    view_distance: f32,
    target: Vec2,
    target_radius: f32,
    obstacles: &[Circle],
) -> bool {
    let view_end = viewer + (target - viewer).normalize() * view_distance;
    if !line_circle(viewer, view_end, target, target_radius) {
        return false;
    }

    match line_circle_list(viewer, view_end, obstacles).first() {
        None => true,
        Some(nearest) => {
            distance_squared(viewer, target) < distance_squared(viewer, nearest.position)
        }
    }
}
