//! Vigil Physics - Circle World Physics
//!
//! Everything in a Vigil world is a circle: obstacles, colliders and
//! sensor targets. This crate provides the planar physics built on that.
//!
//! # Features
//!
//! - Circle/circle overlap with minimum translation vectors
//! - Sequential push-out resolution against obstacle lists
//! - Segment/circle intersection and distance-sorted hit lists
//! - Line-of-sight with occlusion
//! - Point-mass integration with bounded turn rate
//!
//! # Example
//!
//! ```ignore
//! use vigil_physics::prelude::*;
//!
//! let obstacles = vec![Circle::new(Vec2::new(100.0, 0.0), 20.0)];
//! let mut body = Rigidbody::at(Vec2::ZERO);
//! body.velocity = Vec2::new(50.0, 0.0);
//!
//! body.integrate(1.0 / 60.0);
//! resolve_circles(&mut body.position, 25.0, &obstacles);
//! ```

pub mod body;
pub mod collision;
pub mod config;
pub mod query;
pub mod shapes;

pub mod prelude {
    //! Common imports for physics functionality
    pub use crate::body::{HasBody, Rigidbody};
    pub use crate::collision::{circle_circle, circle_circle_mtv, resolve_circles};
    pub use crate::config::PhysicsConfig;
    pub use crate::query::{distance_sort, is_visible, line_circle, line_circle_list, Positioned};
    pub use crate::shapes::{Circle, Circles, Line, Points, Probe, Probes};
    pub use vigil_math::Vec2;
}

pub use prelude::*;
