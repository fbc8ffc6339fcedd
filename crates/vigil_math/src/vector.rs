//! 2D vector type and planar helpers

use core::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

/// 2D vector
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0);
    pub const X: Self = Self::new(1.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0);

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn splat(v: f32) -> Self {
        Self::new(v, v)
    }

    /// Unit vector pointing at `angle` radians from +X
    #[inline]
    pub fn from_angle(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(cos, sin)
    }

    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Z component of the 3D cross product (signed parallelogram area)
    #[inline]
    pub fn perp_dot(self, other: Self) -> f32 {
        self.x * other.y - self.y * other.x
    }

    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Unit vector in the same direction; the zero vector maps to zero
    #[inline]
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len > 0.0 { self / len } else { Self::ZERO }
    }

    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        self + (other - self) * t
    }

    #[inline]
    pub fn perpendicular(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Angle from +X in radians, in (-PI, PI]
    #[inline]
    pub fn angle(self) -> f32 {
        self.y.atan2(self.x)
    }

    /// Signed angle (radians) that rotates `self` onto `other`
    #[inline]
    pub fn angle_to(self, other: Self) -> f32 {
        self.perp_dot(other).atan2(self.dot(other))
    }

    /// Rotate counter-clockwise by `angle` radians
    #[inline]
    pub fn rotate(self, angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    /// Rotate toward `target` by at most `max_angle` radians
    ///
    /// A zero `target` leaves the vector unchanged.
    pub fn rotate_towards(self, target: Self, max_angle: f32) -> Self {
        if target.length_squared() == 0.0 || self.length_squared() == 0.0 {
            return self;
        }
        let delta = self.angle_to(target);
        let max_angle = max_angle.abs();
        self.rotate(delta.clamp(-max_angle, max_angle))
    }

    /// Same direction with length limited to `max`
    #[inline]
    pub fn clamp_length(self, max: f32) -> Self {
        let len_sq = self.length_squared();
        if len_sq > max * max {
            self * (max / len_sq.sqrt())
        } else {
            self
        }
    }

    #[inline]
    pub fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<[f32; 2]> for Vec2 {
    fn from(arr: [f32; 2]) -> Self {
        Self::new(arr[0], arr[1])
    }
}

impl From<(f32, f32)> for Vec2 {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

/// Distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    (b - a).length()
}

/// Squared distance between two points (no square root, for comparisons)
#[inline]
pub fn distance_squared(a: Vec2, b: Vec2) -> f32 {
    (b - a).length_squared()
}

/// Closest point to `point` on the finite segment `[start, end]`
///
/// A degenerate segment (start == end) projects onto `start`.
pub fn project_point_segment(start: Vec2, end: Vec2, point: Vec2) -> Vec2 {
    let segment = end - start;
    let len_sq = segment.length_squared();
    if len_sq == 0.0 {
        return start;
    }
    let t = ((point - start).dot(segment) / len_sq).clamp(0.0, 1.0);
    start + segment * t
}

// Operator implementations for Vec2
impl Add for Vec2 {
    type Output = Self;
    #[inline] fn add(self, rhs: Self) -> Self { Self::new(self.x + rhs.x, self.y + rhs.y) }
}
impl Sub for Vec2 {
    type Output = Self;
    #[inline] fn sub(self, rhs: Self) -> Self { Self::new(self.x - rhs.x, self.y - rhs.y) }
}
impl Mul<f32> for Vec2 {
    type Output = Self;
    #[inline] fn mul(self, rhs: f32) -> Self { Self::new(self.x * rhs, self.y * rhs) }
}
impl Mul<Vec2> for f32 {
    type Output = Vec2;
    #[inline] fn mul(self, rhs: Vec2) -> Vec2 { rhs * self }
}
impl Div<f32> for Vec2 {
    type Output = Self;
    #[inline] fn div(self, rhs: f32) -> Self { Self::new(self.x / rhs, self.y / rhs) }
}
impl Neg for Vec2 {
    type Output = Self;
    #[inline] fn neg(self) -> Self { Self::new(-self.x, -self.y) }
}
impl AddAssign for Vec2 {
    #[inline] fn add_assign(&mut self, rhs: Self) { self.x += rhs.x; self.y += rhs.y; }
}
impl SubAssign for Vec2 {
    #[inline] fn sub_assign(&mut self, rhs: Self) { self.x -= rhs.x; self.y -= rhs.y; }
}
impl MulAssign<f32> for Vec2 {
    #[inline] fn mul_assign(&mut self, rhs: f32) { self.x *= rhs; self.y *= rhs; }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{FRAC_PI_2, PI};
    use approx::assert_relative_eq;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn test_normalize() {
        let v = Vec2::new(3.0, 4.0);
        assert_eq!(v.length(), 5.0);
        assert_relative_eq!(v.normalize().length(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_normalize_zero_is_zero() {
        assert_eq!(Vec2::ZERO.normalize(), Vec2::ZERO);
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let r = Vec2::X.rotate(FRAC_PI_2);
        assert_relative_eq!(r.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(r.y, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_rotate_towards_is_bounded() {
        let turned = Vec2::X.rotate_towards(Vec2::Y, 0.1);
        assert_relative_eq!(Vec2::X.angle_to(turned), 0.1, epsilon = 1e-5);

        // Clockwise target turns clockwise
        let turned = Vec2::X.rotate_towards(-Vec2::Y, 0.1);
        assert_relative_eq!(Vec2::X.angle_to(turned), -0.1, epsilon = 1e-5);
    }

    #[test]
    fn test_rotate_towards_snaps_when_within_reach() {
        let target = Vec2::from_angle(0.05);
        let turned = Vec2::X.rotate_towards(target, 0.5);
        assert_relative_eq!(turned.x, target.x, epsilon = 1e-5);
        assert_relative_eq!(turned.y, target.y, epsilon = 1e-5);
    }

    #[test]
    fn test_rotate_towards_zero_target_keeps_direction() {
        assert_eq!(Vec2::Y.rotate_towards(Vec2::ZERO, PI), Vec2::Y);
    }

    #[test]
    fn test_project_point_segment_clamps() {
        let start = Vec2::new(0.0, 0.0);
        let end = Vec2::new(10.0, 0.0);

        assert_eq!(project_point_segment(start, end, Vec2::new(5.0, 3.0)), Vec2::new(5.0, 0.0));
        assert_eq!(project_point_segment(start, end, Vec2::new(-4.0, 1.0)), start);
        assert_eq!(project_point_segment(start, end, Vec2::new(14.0, -1.0)), end);
        assert_eq!(project_point_segment(start, start, Vec2::new(1.0, 1.0)), start);
    }

    #[test]
    fn test_projection_is_closest_sampled_point() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let start = Vec2::new(rng.gen_range(-50.0..50.0), rng.gen_range(-50.0..50.0));
            let end = Vec2::new(rng.gen_range(-50.0..50.0), rng.gen_range(-50.0..50.0));
            let point = Vec2::new(rng.gen_range(-50.0..50.0), rng.gen_range(-50.0..50.0));

            let projected = distance(project_point_segment(start, end, point), point);
            let sampled = (0..=256)
                .map(|i| distance(start.lerp(end, i as f32 / 256.0), point))
                .fold(f32::MAX, f32::min);

            assert!(projected <= sampled + 1e-3);
        }
    }

    #[test]
    fn test_clamp_length() {
        let v = Vec2::new(30.0, 40.0).clamp_length(5.0);
        assert_relative_eq!(v.length(), 5.0, epsilon = 1e-5);
        assert_eq!(Vec2::new(1.0, 0.0).clamp_length(5.0), Vec2::new(1.0, 0.0));
    }
}
