//! Cutter-item intersection test
//!
//! Collision is sampled once per tick at the item's post-move position. An
//! item that crosses the entire cut band between two samples is not caught;
//! at the fixed 100 ms step and stock fall speed the band is wide enough
//! that this cannot happen, and the discrete-sampling policy is intentional.

use super::state::{Cutter, FallingItem};
use crate::consts::FIELD_SIZE;

/// True when the item overlaps the cutter on the horizontal axis while
/// inside the vertical cut band.
pub fn item_intersects_cutter(item: &FallingItem, cutter: &Cutter) -> bool {
    in_cut_band(item, cutter) && overlaps_horizontally(item, cutter)
}

/// The item has fallen past the cutter's line but not yet off the field.
fn in_cut_band(item: &FallingItem, cutter: &Cutter) -> bool {
    item.top > cutter.top && item.top < FIELD_SIZE
}

/// One-dimensional interval overlap on the horizontal axis.
fn overlaps_horizontally(item: &FallingItem, cutter: &Cutter) -> bool {
    item.left < cutter.left + cutter.width && item.left + item.width > cutter.left
}
