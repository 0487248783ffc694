//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, driven by the caller
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Aabb, overlaps};
pub use spawn::{Layout, initial_platform_count, layout_for_width};
pub use state::{Ball, Board, Facing, Platform, World};
pub use tick::{Steer, TickInput, tick};
