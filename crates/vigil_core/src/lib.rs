//! # vigil_core - Vigil Core
//!
//! Primitives shared by every Vigil crate (serde support behind the `serde` feature):
//! - **Handles**: typed indices into append-only arenas, used instead of
//!   references between simulation objects
//! - **Timers**: frame-stepped cooldown/duration tracking

pub mod handle;
pub mod timer;

pub use handle::*;
pub use timer::*;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::handle::{Arena, Handle};
    pub use crate::timer::Timer;
}
