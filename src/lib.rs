//! Cutfall - a falling-item reflex game simulation core
//!
//! Items spawn at a fixed interval and fall toward the bottom of an abstract
//! 0-100 viewport. The player slides a horizontal cutter bar left and right
//! to intercept them. The run ends once the spawn quota is reached and every
//! item has been cut or missed.
//!
//! Core modules:
//! - `sim`: Deterministic simulation (game state, collision, event reduction)
//! - `engine`: Async event loop merging clock, spawner, and control streams
//! - `config`: Game configuration and validation
//!
//! Rendering and input binding are up to the caller: [`engine::start`]
//! delivers an immutable [`sim::GameState`] snapshot per processed event, and
//! the returned [`engine::GameHandle`] accepts direction commands.

pub mod config;
pub mod engine;
pub mod sim;

pub use config::{ConfigError, CutterConfig, GameConfig, GeneratorConfig};
pub use engine::{GameHandle, start};
pub use sim::{Cutter, Direction, FallingItem, GameEvent, GameState, reduce};

/// Game tuning constants
pub mod consts {
    /// Fixed simulation timestep in milliseconds
    pub const TICK_INTERVAL_MS: u64 = 100;
    /// Item fall speed (percent of field height per millisecond)
    pub const ITEM_FALL_SPEED: f32 = 0.025;
    /// Cutter slide speed (percent of field width per millisecond)
    pub const CUTTER_SPEED: f32 = 0.040;
    /// Horizontal width of every falling item (percent of field width)
    pub const ITEM_WIDTH: f32 = 10.0;
    /// Extent of the abstract viewport, both axes
    pub const FIELD_SIZE: f32 = 100.0;
}
