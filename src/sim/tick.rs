//! Pure event reduction
//!
//! The reducer folds one [`GameEvent`] at a time over the previous snapshot
//! and returns a fresh one. It is the only place game rules live; the engine
//! loop just feeds it events in arrival order.

use serde::{Deserialize, Serialize};

use super::collision::item_intersects_cutter;
use super::state::{Cutter, Direction, FallingItem, GameState};
use crate::consts::{FIELD_SIZE, ITEM_FALL_SPEED};

/// One event from the merged clock/spawner/control streams
///
/// The closed enum is what makes a malformed event unrepresentable: a wiring
/// bug in the event loop cannot reach the reducer as an unrecognized shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Physics step advancing simulation time by `delta_ms`
    Tick { delta_ms: f32 },
    /// A new item entering play
    Spawn { item: FallingItem },
    /// Player input change
    Direction { value: Direction },
}

/// Fold one event over the previous state.
///
/// Spawn prepends the item (newest first), direction overwrites the held
/// input, and tick runs the physics step. `max_items` is the spawn quota
/// used by the termination rule.
pub fn reduce(prev: &GameState, event: &GameEvent, max_items: u32) -> GameState {
    match event {
        GameEvent::Spawn { item } => {
            let mut items = Vec::with_capacity(prev.items.len() + 1);
            items.push(*item);
            items.extend_from_slice(&prev.items);
            GameState {
                items,
                ..prev.clone()
            }
        }
        GameEvent::Direction { value } => GameState {
            direction: *value,
            ..prev.clone()
        },
        GameEvent::Tick { delta_ms } => tick(prev, *delta_ms, max_items),
    }
}

/// The physics step: advance every live item, move the cutter, re-evaluate
/// the termination rule.
fn tick(prev: &GameState, delta_ms: f32, max_items: u32) -> GameState {
    let items: Vec<FallingItem> = prev
        .items
        .iter()
        .map(|item| fall(item, &prev.cutter, delta_ms))
        .collect();

    let max_left = FIELD_SIZE - prev.cutter.width;
    let left = (prev.cutter.left + prev.direction.signed_speed() * delta_ms).clamp(0.0, max_left);
    let cutter = Cutter {
        left,
        ..prev.cutter
    };

    GameState {
        is_finished: game_finished(&items, max_items),
        items,
        cutter,
        direction: prev.direction,
    }
}

/// Advance one item by one step. Resolved items are frozen and returned
/// unchanged. Collision is evaluated at the post-move position against the
/// cutter's position before this tick's movement; cut takes priority over
/// missed when both would apply on the same step.
fn fall(item: &FallingItem, cutter: &Cutter, delta_ms: f32) -> FallingItem {
    if item.is_resolved() {
        return *item;
    }
    let mut next = FallingItem {
        top: item.top + ITEM_FALL_SPEED * delta_ms,
        ..*item
    };
    if item_intersects_cutter(&next, cutter) {
        next.is_cut = true;
    } else if next.top >= FIELD_SIZE {
        next.is_missed = true;
    }
    next
}

/// The run ends once the spawn quota is reached and every item is resolved.
fn game_finished(items: &[FallingItem], max_items: u32) -> bool {
    items.len() == max_items as usize && items.iter().all(FallingItem::is_resolved)
}
