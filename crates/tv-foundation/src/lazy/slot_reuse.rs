//! Slot reuse policy for recycled item instances.
//!
//! Off-screen item slots are offered back to the list instead of being torn
//! down. Reuse follows a two-step decision: a slot is compatible with a
//! request when the identifiers match exactly, or when both slots were
//! recorded with the same content type. Retention of inactive slots is capped
//! per type so a long scroll does not accumulate an unbounded pool.

use std::cell::RefCell;

use rustc_hash::FxHashMap;

/// Identifier for a realized item slot.
///
/// Callers provide stable identifiers (usually derived from the item key
/// provider) so slots can be matched across layout passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotId(pub u64);

impl SlotId {
    #[inline]
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[inline]
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Maximum number of inactive slots retained per content type.
pub const MAX_RETAINED_SLOTS_PER_TYPE: usize = 5;

/// Policy that decides which inactive slots survive a layout pass and which
/// slot pairs are interchangeable.
///
/// Single-threaded by design; implementations use interior mutability rather
/// than locks.
pub trait SlotReusePolicy {
    /// Returns true if a node previously rendered for `reusable` may be
    /// recycled to render `candidate`.
    fn are_compatible(&self, candidate: SlotId, reusable: SlotId) -> bool;

    /// Filters the offered inactive slots in place, keeping only those worth
    /// retaining. Iteration order is the order supplied by the caller.
    fn select_retainable(&self, slot_ids: &mut Vec<SlotId>);
}

/// Reuse policy for lazy lists: compatibility by recorded content type,
/// retention capped at [`MAX_RETAINED_SLOTS_PER_TYPE`] per type.
///
/// The slot-to-type table lives for the lifetime of the list. It is written
/// by the measurement pass (when an item is first realized at a position) and
/// only read here.
#[derive(Default)]
pub struct LazyListSlotReusePolicy {
    slot_type_map: RefCell<FxHashMap<SlotId, u64>>,
}

impl LazyListSlotReusePolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the content type for a slot. Called by the measurement pass
    /// before a slot is realized.
    pub fn record_type(&self, slot_id: SlotId, content_type: u64) {
        self.slot_type_map
            .borrow_mut()
            .insert(slot_id, content_type);
    }

    /// Returns the recorded content type for a slot, if any.
    pub fn type_of(&self, slot_id: SlotId) -> Option<u64> {
        self.slot_type_map.borrow().get(&slot_id).copied()
    }
}

impl std::fmt::Debug for LazyListSlotReusePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LazyListSlotReusePolicy")
            .field("tracked_slots", &self.slot_type_map.borrow().len())
            .finish()
    }
}

impl SlotReusePolicy for LazyListSlotReusePolicy {
    fn are_compatible(&self, candidate: SlotId, reusable: SlotId) -> bool {
        if candidate == reusable {
            return true;
        }
        let map = self.slot_type_map.borrow();
        map.get(&candidate) == map.get(&reusable)
    }

    fn select_retainable(&self, slot_ids: &mut Vec<SlotId>) {
        let map = self.slot_type_map.borrow();
        let mut type_count: FxHashMap<Option<u64>, usize> = FxHashMap::default();
        slot_ids.retain(|slot| {
            let ty = map.get(slot).copied();
            let count = type_count.entry(ty).or_insert(0);
            if *count == MAX_RETAINED_SLOTS_PER_TYPE {
                return false;
            }
            *count += 1;
            true
        });
    }
}
