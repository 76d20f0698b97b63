//! Per-pass item measurement cache.

use rustc_hash::FxHashMap;
use tv_ui_layout::{Constraints, IntSize};

use super::item_provider::LazyListItems;
use super::measured_item::LazyListMeasuredItem;
use super::slot_reuse::LazyListSlotReusePolicy;

/// Memoizes item measurement for the duration of one layout pass.
///
/// The adjust loops and the place loop may visit the same index more than
/// once; each index is measured exactly once per pass. The cache also records
/// slot content types with the reuse policy as items are first realized.
pub struct PassItemCache<'a, F> {
    items: &'a LazyListItems,
    reuse_policy: &'a LazyListSlotReusePolicy,
    measure: F,
    cache: FxHashMap<usize, LazyListMeasuredItem>,
}

impl<'a, F> PassItemCache<'a, F>
where
    F: FnMut(usize, super::slot_reuse::SlotId, Constraints) -> IntSize,
{
    pub fn new(
        items: &'a LazyListItems,
        reuse_policy: &'a LazyListSlotReusePolicy,
        measure: F,
    ) -> Self {
        Self {
            items,
            reuse_policy,
            measure,
            cache: FxHashMap::default(),
        }
    }

    /// Returns the measured item at `index`, measuring it on first access.
    pub fn get(&mut self, index: usize, constraints: Constraints) -> &LazyListMeasuredItem {
        if !self.cache.contains_key(&index) {
            let key = self.items.key(index);
            let content_type = self.items.content_type(index);
            self.reuse_policy.record_type(key, content_type);
            let size = (self.measure)(index, key, constraints);
            self.cache.insert(
                index,
                LazyListMeasuredItem {
                    index,
                    key,
                    content_type,
                    size,
                },
            );
        }
        // Just inserted above when absent.
        &self.cache[&index]
    }
}
