//! The lazy list measurement pass.
//!
//! One pass walks a fixed sequence of steps: adjust the anchor forward past
//! items that scrolled fully off the start, pull it backward while space
//! remains before it, clamp the start edge, place items through the viewport,
//! then clamp the end edge. Every step reads the anchor as
//! `first_offset + scroll_accumulator + key_offset`; the loops converge by
//! moving banked scroll into the anchor pair, never by touching the
//! accumulator itself. Re-running the pass with no new scroll input yields
//! the same placements.

use tv_ui_layout::{Axis, Constraints, IntOffset, IntSize, LayoutDirection};

use super::align::LazyListAlign;
use super::item_cache::PassItemCache;
use super::lazy_list_state::LazyListState;
use super::measured_item::{LazyListMeasureResult, LazyListPlacement, PlacementVec};
use super::slot_reuse::{LazyListSlotReusePolicy, SlotId};

/// Upper bound on realized placements in one pass. A run of zero-extent
/// items would otherwise realize the entire item set and defeat
/// virtualization; hitting the cap is logged and the pass truncated.
const MAX_PLACED_ITEMS: usize = 10_000;

/// Static layout parameters for a lazy list.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LazyListMeasureConfig {
    pub axis: Axis,
    pub direction: LayoutDirection,
    pub align: LazyListAlign,
    /// Fraction of the viewport extent where the anchor line sits.
    pub window_percent: f32,
    /// Fraction of the anchor item's extent aligned to that line.
    pub item_percent: f32,
}

impl Default for LazyListMeasureConfig {
    fn default() -> Self {
        Self {
            axis: Axis::Vertical,
            direction: LayoutDirection::Ltr,
            align: LazyListAlign::default(),
            window_percent: 0.5,
            item_percent: 0.5,
        }
    }
}

/// Runs one measurement pass over the list.
///
/// `measure_item` realizes and measures the item at an index under the given
/// constraints; it is invoked at most once per index per pass. The settled
/// anchor is written back to `state` before returning.
pub fn measure_lazy_list<F>(
    state: &LazyListState,
    reuse_policy: &LazyListSlotReusePolicy,
    constraints: Constraints,
    config: &LazyListMeasureConfig,
    measure_item: F,
) -> LazyListMeasureResult
where
    F: FnMut(usize, SlotId, Constraints) -> IntSize,
{
    let width = constraints.max_width;
    let height = constraints.max_height;
    let viewport = match config.axis {
        Axis::Horizontal => width,
        Axis::Vertical => height,
    };

    let items = state.items();
    let count = items.count();
    if count == 0 {
        return LazyListMeasureResult::empty(width, height);
    }

    let (anchor_index, mut first_offset, accumulator) = state.anchor();
    let mut first_index = anchor_index;
    if first_index >= count {
        log::debug!(
            "lazy list anchor {} is past the item count {}, clamping",
            first_index,
            count
        );
        first_index = count - 1;
    }

    // Items size themselves freely along the scroll axis.
    let item_constraints = match config.axis {
        Axis::Horizontal => constraints.copy_with_width(0, Constraints::INFINITY),
        Axis::Vertical => constraints.copy_with_height(0, Constraints::INFINITY),
    };

    let mut cache = PassItemCache::new(&items, reuse_policy, measure_item);

    let key_offset = if config.align.has_align() {
        let first_extent = cache.get(first_index, item_constraints).main_axis_size(config.axis);
        (viewport as f32 * config.window_percent - first_extent as f32 * config.item_percent)
            .round() as i32
    } else {
        0
    };

    // Forward adjust: the anchor item scrolled fully off the start, hand the
    // anchor to the next item.
    loop {
        let offset = first_offset + accumulator + key_offset;
        let extent = cache.get(first_index, item_constraints).main_axis_size(config.axis);
        if offset + extent >= 0 {
            break;
        }
        if first_index + 1 >= count {
            break;
        }
        first_index += 1;
        first_offset += extent;
    }

    // Backward adjust: space opened before the anchor, pull earlier items in.
    loop {
        let offset = first_offset + accumulator + key_offset;
        let extent = cache.get(first_index, item_constraints).main_axis_size(config.axis);
        if offset + extent < 0 {
            break;
        }
        if first_index == 0 {
            break;
        }
        first_index -= 1;
        first_offset -= extent;
    }

    let start_edge_offset = if config.align.has_start_edge() {
        let offset = first_offset + accumulator + key_offset;
        if offset > 0 {
            first_offset -= offset;
            -offset
        } else {
            0
        }
    } else {
        0
    };

    let mut placements = PlacementVec::new();
    let mut pos = first_index;
    let mut offset = first_offset + accumulator + key_offset;
    let mut max_trailing = 0;
    while pos < count {
        if placements.len() == MAX_PLACED_ITEMS {
            log::warn!(
                "lazy list placed {} items without filling the viewport, truncating",
                MAX_PLACED_ITEMS
            );
            break;
        }
        let item = cache.get(pos, item_constraints).clone();
        let extent = item.main_axis_size(config.axis);
        max_trailing = max_trailing.max(offset + extent);
        placements.push(LazyListPlacement {
            item,
            offset: main_axis_offset(config.axis, offset),
        });
        // One item past the fold stays realized for focus search.
        if offset > viewport {
            break;
        }
        offset += extent;
        pos += 1;
    }

    let end_edge_offset = if config.align.has_end_edge()
        && start_edge_offset == 0
        && max_trailing < viewport
    {
        let shift = viewport - max_trailing;
        first_offset += shift;
        shift
    } else {
        0
    };

    state.set_anchor(first_index, first_offset);

    if end_edge_offset != 0 {
        for placement in placements.iter_mut() {
            match config.axis {
                Axis::Horizontal => placement.offset.x += end_edge_offset,
                Axis::Vertical => placement.offset.y += end_edge_offset,
            }
        }
    }
    if config.axis == Axis::Horizontal && config.direction == LayoutDirection::Rtl {
        for placement in placements.iter_mut() {
            placement.offset.x = width - placement.offset.x - placement.item.size.width;
        }
    }

    LazyListMeasureResult {
        placements,
        width,
        height,
    }
}

#[inline]
fn main_axis_offset(axis: Axis, offset: i32) -> IntOffset {
    match axis {
        Axis::Horizontal => IntOffset { x: offset, y: 0 },
        Axis::Vertical => IntOffset { x: 0, y: offset },
    }
}
