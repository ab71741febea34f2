//! Game state and core simulation types
//!
//! Snapshots are immutable values: the reducer never mutates a prior state,
//! so callers may retain history safely.

use serde::{Deserialize, Serialize};

use crate::config::CutterConfig;
use crate::consts::{CUTTER_SPEED, ITEM_WIDTH};

/// Player input direction. Held input, not a one-shot command: it persists
/// across ticks until overwritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    #[default]
    None,
}

impl Direction {
    /// Signed cutter speed in percent per millisecond
    pub fn signed_speed(self) -> f32 {
        match self {
            Direction::Left => -CUTTER_SPEED,
            Direction::Right => CUTTER_SPEED,
            Direction::None => 0.0,
        }
    }
}

/// A single falling item
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FallingItem {
    /// Unique, monotonically increasing in spawn order
    pub id: u32,
    pub left: f32,
    /// Distance fallen; only increases until the item resolves
    pub top: f32,
    pub width: f32,
    pub is_cut: bool,
    pub is_missed: bool,
}

impl FallingItem {
    /// A freshly spawned item at the top of the field
    pub fn spawn(id: u32, left: f32) -> Self {
        Self {
            id,
            left,
            top: 0.0,
            width: ITEM_WIDTH,
            is_cut: false,
            is_missed: false,
        }
    }

    /// An item is resolved once its outcome is decided. Resolved items are
    /// frozen: no field changes on any later tick.
    pub fn is_resolved(&self) -> bool {
        self.is_cut || self.is_missed
    }
}

/// The player-controlled bar
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cutter {
    /// Horizontal position, clamped to `[0, 100 - width]` every tick
    pub left: f32,
    pub width: f32,
    pub height: f32,
    /// Vertical position of the cut band (fixed for the run)
    pub top: f32,
}

impl From<CutterConfig> for Cutter {
    fn from(config: CutterConfig) -> Self {
        Self {
            left: config.left,
            width: config.width,
            height: config.height,
            top: config.top,
        }
    }
}

/// Complete game state snapshot
///
/// The only type crossing the engine boundary. Every reduction produces a
/// fresh value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Falling items, most recently spawned first
    pub items: Vec<FallingItem>,
    /// True once the quota is spawned and every item is resolved; never
    /// reverts to false
    pub is_finished: bool,
    pub cutter: Cutter,
    pub direction: Direction,
}

impl GameState {
    /// Initial state: no items, not finished, no held direction.
    pub fn new(cutter: Cutter) -> Self {
        Self {
            items: Vec::new(),
            is_finished: false,
            cutter,
            direction: Direction::None,
        }
    }

    /// Number of items cut so far
    pub fn cut_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_cut).count()
    }

    /// Number of items missed so far
    pub fn missed_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_missed).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawned_item_starts_at_top() {
        let item = FallingItem::spawn(0, 45.0);
        assert_eq!(item.id, 0);
        assert_eq!(item.top, 0.0);
        assert_eq!(item.width, ITEM_WIDTH);
        assert!(!item.is_cut);
        assert!(!item.is_missed);
        assert!(!item.is_resolved());
    }

    #[test]
    fn test_either_flag_resolves() {
        let mut item = FallingItem::spawn(1, 0.0);
        item.is_cut = true;
        assert!(item.is_resolved());

        let mut item = FallingItem::spawn(2, 0.0);
        item.is_missed = true;
        assert!(item.is_resolved());
    }

    #[test]
    fn test_signed_speed() {
        assert!(Direction::Left.signed_speed() < 0.0);
        assert!(Direction::Right.signed_speed() > 0.0);
        assert_eq!(Direction::None.signed_speed(), 0.0);
        assert_eq!(
            Direction::Left.signed_speed(),
            -Direction::Right.signed_speed()
        );
    }

    #[test]
    fn test_outcome_counts() {
        let mut state = GameState::new(CutterConfig::default().into());
        let mut cut = FallingItem::spawn(0, 10.0);
        cut.is_cut = true;
        let mut missed = FallingItem::spawn(1, 20.0);
        missed.is_missed = true;
        state.items = vec![missed, cut, FallingItem::spawn(2, 30.0)];

        assert_eq!(state.cut_count(), 1);
        assert_eq!(state.missed_count(), 1);
    }
}
