//! Focus-navigable virtualized lazy list.
//!
//! A one-dimensional list for directional-input devices: the scroll position
//! follows focus rather than pointer gestures. Only the items intersecting
//! the viewport (plus one past the fold) are realized; off-screen slots are
//! recycled through a type-aware reuse policy.

mod align;
mod focus_scroll;
mod item_cache;
mod item_provider;
mod lazy_list;
mod lazy_list_state;
mod measure;
mod measured_item;
mod scroll_animation;
mod slot_reuse;

pub use align::LazyListAlign;
pub use focus_scroll::compute_focus_scroll_delta;
pub use item_provider::{ItemContent, LazyListItemScope, LazyListItems};
pub use lazy_list::{LayoutCoordinates, LazyList};
pub use lazy_list_state::{LazyListState, SavedListState};
pub use measure::{measure_lazy_list, LazyListMeasureConfig};
pub use measured_item::{LazyListMeasureResult, LazyListMeasuredItem, LazyListPlacement};
pub use scroll_animation::{ScrollAnimation, SCROLL_STEP};
pub use slot_reuse::{
    LazyListSlotReusePolicy, SlotId, SlotReusePolicy, MAX_RETAINED_SLOTS_PER_TYPE,
};
