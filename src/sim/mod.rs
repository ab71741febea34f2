//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Immutable state in, fresh state out
//! - No timers, no I/O, no rendering or platform dependencies
//! - Identical event sequences always produce identical snapshots

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::item_intersects_cutter;
pub use state::{Cutter, Direction, FallingItem, GameState};
pub use tick::{GameEvent, reduce};
