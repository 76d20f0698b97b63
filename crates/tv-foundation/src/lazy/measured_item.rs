//! Realized item slots and the layout pass result.

use smallvec::SmallVec;
use tv_ui_layout::{Axis, IntOffset, IntSize};

use super::slot_reuse::SlotId;

/// A realized, measured item slot.
///
/// Owned by the per-pass item cache; discarded when the pass completes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LazyListMeasuredItem {
    /// Index in the declared item set.
    pub index: usize,

    /// Stable key used for slot reuse.
    pub key: SlotId,

    /// Content type recorded for recycling compatibility.
    pub content_type: u64,

    /// Measured size in pixels.
    pub size: IntSize,
}

impl LazyListMeasuredItem {
    /// Extent along the scroll axis.
    #[inline]
    pub fn main_axis_size(&self, axis: Axis) -> i32 {
        match axis {
            Axis::Horizontal => self.size.width,
            Axis::Vertical => self.size.height,
        }
    }

    /// Extent across the scroll axis.
    #[inline]
    pub fn cross_axis_size(&self, axis: Axis) -> i32 {
        match axis {
            Axis::Horizontal => self.size.height,
            Axis::Vertical => self.size.width,
        }
    }
}

/// A placed item: the realized slot plus its position in the viewport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LazyListPlacement {
    pub item: LazyListMeasuredItem,
    pub offset: IntOffset,
}

/// Inline capacity for placements: a viewport rarely realizes more than a
/// handful of items plus one past the fold.
pub type PlacementVec = SmallVec<[LazyListPlacement; 8]>;

/// Result of one layout pass.
///
/// The list always fills its given space: `width`/`height` are the incoming
/// maximum extents regardless of content size.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LazyListMeasureResult {
    pub placements: PlacementVec,
    pub width: i32,
    pub height: i32,
}

impl LazyListMeasureResult {
    /// An empty layout of the full viewport extents.
    pub fn empty(width: i32, height: i32) -> Self {
        Self {
            placements: PlacementVec::new(),
            width,
            height,
        }
    }
}
