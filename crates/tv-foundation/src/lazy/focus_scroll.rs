//! Focus-driven scroll delta calculation.
//!
//! Pure geometry: given the focused item's bounds in list-local space and the
//! viewport size, decide how far the list must scroll to satisfy the
//! alignment policy. Positive deltas scroll content toward the start
//! (revealing later items).

use tv_ui_layout::{Axis, LayoutDirection, Rect, Size};

use super::align::LazyListAlign;

/// Computes the scroll delta for a focused item, or `None` if the item
/// already satisfies the policy.
///
/// With an alignment anchor, the item's leading edge is pinned to
/// `viewport * window_percent - item * item_percent`. Without one, the item
/// is scrolled just enough to be fully visible, and only if it is not.
///
/// Under [`LayoutDirection::Rtl`] on the horizontal axis, leading/trailing
/// are mirrored so "leading" is the edge nearest the reading start.
pub fn compute_focus_scroll_delta(
    bounds: Rect,
    viewport: Size,
    axis: Axis,
    direction: LayoutDirection,
    align: LazyListAlign,
    window_percent: f32,
    item_percent: f32,
) -> Option<f32> {
    let (leading, trailing, extent, item_extent) = match axis {
        Axis::Vertical => (bounds.top(), bounds.bottom(), viewport.height, bounds.height),
        Axis::Horizontal => match direction {
            LayoutDirection::Ltr => (bounds.left(), bounds.right(), viewport.width, bounds.width),
            LayoutDirection::Rtl => (
                viewport.width - bounds.right(),
                viewport.width - bounds.left(),
                viewport.width,
                bounds.width,
            ),
        },
    };

    if align.has_align() {
        let target = extent * window_percent - item_extent * item_percent;
        if leading != target {
            return Some(leading - target);
        }
        return None;
    }

    if leading < 0.0 {
        return Some(leading);
    }
    if trailing > extent {
        return Some(trailing - extent);
    }
    None
}
