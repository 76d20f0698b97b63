//! Foundation widgets for TV-style directional navigation.
//!
//! The centerpiece is the lazy list in [`lazy`]: a virtualized list whose
//! scroll position is driven by focus movement instead of pointer input, with
//! configurable focus alignment and edge clamping.

pub mod lazy;

pub use lazy::{
    LazyList, LazyListAlign, LazyListItemScope, LazyListItems, LazyListMeasureConfig,
    LazyListState, SavedListState,
};

#[cfg(test)]
mod tests;
