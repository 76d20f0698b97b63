//! Scroll position state for a lazy list.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use tv_ui_layout::{Axis, Density, LayoutDirection, Rect, Size};

use super::align::LazyListAlign;
use super::focus_scroll::compute_focus_scroll_delta;
use super::item_provider::LazyListItems;
use super::scroll_animation::{ScrollAnimation, SCROLL_STEP};

/// Snapshot of a list's scroll position for persistence across process death
/// or host recreation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SavedListState {
    pub default_index: i32,
    pub first_index: i32,
    pub first_offset: i32,
    pub scroll_accumulator: i32,
}

impl SavedListState {
    pub fn to_array(self) -> [i32; 4] {
        [
            self.default_index,
            self.first_index,
            self.first_offset,
            self.scroll_accumulator,
        ]
    }

    pub fn from_array(values: [i32; 4]) -> Self {
        Self {
            default_index: values[0],
            first_index: values[1],
            first_offset: values[2],
            scroll_accumulator: values[3],
        }
    }
}

struct Inner {
    first_index: usize,
    first_offset: i32,
    scroll_accumulator: i32,
    default_index: usize,
    items: LazyListItems,
    current_focus_bounds: Option<Rect>,
    animation: Option<ScrollAnimation>,
    invalidate_callbacks: Vec<(u64, Rc<dyn Fn()>)>,
    next_callback_id: u64,
}

impl Inner {
    fn new(first_index: usize, first_offset: i32) -> Self {
        Self {
            first_index,
            first_offset,
            scroll_accumulator: 0,
            default_index: first_index,
            items: LazyListItems::default(),
            current_focus_bounds: None,
            animation: None,
            invalidate_callbacks: Vec::new(),
            next_callback_id: 0,
        }
    }
}

/// Observable scroll state for a lazy list.
///
/// Cheap to clone; all clones share one position. The anchor is the pair
/// `(first_index, first_offset)`: the first realized item and its leading
/// offset relative to the viewport start. Scroll input lands in a separate
/// accumulator which the layout pass folds into the anchor.
#[derive(Clone)]
pub struct LazyListState {
    inner: Rc<RefCell<Inner>>,
}

impl Default for LazyListState {
    fn default() -> Self {
        Self::new()
    }
}

impl LazyListState {
    pub fn new() -> Self {
        Self::with_position(0, 0)
    }

    /// Creates a state initially scrolled to `first_index` with the given
    /// leading offset. The index also becomes the default focus target.
    pub fn with_position(first_index: usize, first_offset: i32) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner::new(first_index, first_offset))),
        }
    }

    /// Restores a previously [`save`](Self::save)d position.
    pub fn restore(saved: SavedListState) -> Self {
        let state = Self::with_position(
            saved.first_index.max(0) as usize,
            saved.first_offset,
        );
        {
            let mut inner = state.inner.borrow_mut();
            inner.default_index = saved.default_index.max(0) as usize;
            inner.scroll_accumulator = saved.scroll_accumulator;
        }
        state
    }

    /// Captures the position for persistence.
    pub fn save(&self) -> SavedListState {
        let inner = self.inner.borrow();
        SavedListState {
            default_index: inner.default_index as i32,
            first_index: inner.first_index as i32,
            first_offset: inner.first_offset,
            scroll_accumulator: inner.scroll_accumulator,
        }
    }

    /// Scrolls by `pixels` along the main axis. Positive values reveal later
    /// items. The amount is banked in the accumulator and consumed by the
    /// next layout pass; the full amount is always consumed.
    pub fn scroll_by(&self, pixels: f32) -> f32 {
        {
            let mut inner = self.inner.borrow_mut();
            inner.scroll_accumulator -= pixels.round() as i32;
            inner.scroll_accumulator += inner.first_offset;
            inner.first_offset = 0;
        }
        self.mark_dirty();
        pixels
    }

    /// Jumps so the item at `index` becomes the anchor with zero offset,
    /// discarding any banked scroll.
    pub fn scroll_to_item(&self, index: usize) {
        {
            let mut inner = self.inner.borrow_mut();
            inner.first_index = index;
            inner.first_offset = 0;
            inner.scroll_accumulator = 0;
            inner.animation = None;
        }
        self.mark_dirty();
    }

    /// Replaces the declared item set and schedules a relayout.
    pub fn register_items(&self, items: LazyListItems) {
        self.inner.borrow_mut().items = items;
        self.mark_dirty();
    }

    /// The currently declared item set.
    pub fn items(&self) -> LazyListItems {
        self.inner.borrow().items.clone()
    }

    /// Index restored as the initial focus target.
    pub fn default_index(&self) -> usize {
        self.inner.borrow().default_index
    }

    /// Current anchor plus banked scroll: `(first_index, first_offset,
    /// scroll_accumulator)`. Read by the layout pass.
    pub fn anchor(&self) -> (usize, i32, i32) {
        let inner = self.inner.borrow();
        (inner.first_index, inner.first_offset, inner.scroll_accumulator)
    }

    /// Writes back the settled anchor after a layout pass. The accumulator is
    /// left alone; [`scroll_by`](Self::scroll_by) is the only place banked
    /// scroll moves. Does not invalidate.
    pub fn set_anchor(&self, first_index: usize, first_offset: i32) {
        let mut inner = self.inner.borrow_mut();
        inner.first_index = first_index;
        inner.first_offset = first_offset;
    }

    /// Reacts to the focused child's bounds (in list-local space).
    ///
    /// Identical bounds to the last event are ignored, so a layout pass that
    /// leaves the focused item where it was does not restart scrolling. When
    /// a scroll is needed it either applies immediately or replaces the
    /// running animation with a new stepped one.
    #[allow(clippy::too_many_arguments)]
    pub fn on_focus_bounds_changed(
        &self,
        bounds: Rect,
        viewport: Size,
        axis: Axis,
        direction: LayoutDirection,
        align: LazyListAlign,
        window_percent: f32,
        item_percent: f32,
        animated: bool,
        density: Density,
    ) {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.current_focus_bounds == Some(bounds) {
                return;
            }
            inner.current_focus_bounds = Some(bounds);
        }

        let delta = compute_focus_scroll_delta(
            bounds,
            viewport,
            axis,
            direction,
            align,
            window_percent,
            item_percent,
        );
        let Some(delta) = delta else {
            self.inner.borrow_mut().animation = None;
            return;
        };

        if animated {
            let step_px = SCROLL_STEP.to_px(density);
            self.inner.borrow_mut().animation = Some(ScrollAnimation::new(delta, step_px));
        } else {
            self.inner.borrow_mut().animation = None;
            self.scroll_by(delta);
        }
    }

    /// Advances the running scroll animation by one step. Returns true if a
    /// step was applied (the host should tick again next frame).
    pub fn tick_scroll_animation(&self) -> bool {
        let mut animation = match self.inner.borrow_mut().animation.take() {
            Some(a) => a,
            None => return false,
        };
        let step = animation.next_step();
        if !animation.is_finished() {
            self.inner.borrow_mut().animation = Some(animation);
        }
        match step {
            Some(step) => {
                self.scroll_by(step);
                true
            }
            None => false,
        }
    }

    /// True while a stepped scroll has unconsumed distance.
    pub fn is_scroll_in_progress(&self) -> bool {
        self.inner.borrow().animation.is_some()
    }

    /// Registers a relayout callback, returning a handle for removal.
    pub fn add_invalidate_callback(&self, callback: Rc<dyn Fn()>) -> u64 {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_callback_id;
        inner.next_callback_id += 1;
        inner.invalidate_callbacks.push((id, callback));
        id
    }

    pub fn remove_invalidate_callback(&self, id: u64) {
        self.inner
            .borrow_mut()
            .invalidate_callbacks
            .retain(|(cb_id, _)| *cb_id != id);
    }

    /// Requests a relayout. Callbacks may re-enter the state, so they run
    /// outside the borrow.
    pub fn mark_dirty(&self) {
        let callbacks: Vec<Rc<dyn Fn()>> = self
            .inner
            .borrow()
            .invalidate_callbacks
            .iter()
            .map(|(_, cb)| Rc::clone(cb))
            .collect();
        for callback in callbacks {
            callback();
        }
    }
}

impl fmt::Debug for LazyListState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("LazyListState")
            .field("first_index", &inner.first_index)
            .field("first_offset", &inner.first_offset)
            .field("scroll_accumulator", &inner.scroll_accumulator)
            .field("animating", &inner.animation.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn scroll_by_banks_into_the_accumulator() {
        let state = LazyListState::new();
        let consumed = state.scroll_by(30.0);
        assert_eq!(consumed, 30.0);
        assert_eq!(state.anchor(), (0, 0, -30));
    }

    #[test]
    fn scroll_by_folds_the_anchor_offset_first() {
        let state = LazyListState::with_position(4, -80);
        state.scroll_by(30.0);
        // -30 banked, then the -80 leading offset folds in and zeroes out.
        assert_eq!(state.anchor(), (4, 0, -110));
    }

    #[test]
    fn scroll_to_item_resets_offset_and_bank() {
        let state = LazyListState::with_position(2, -40);
        state.scroll_by(100.0);
        state.scroll_to_item(7);
        assert_eq!(state.anchor(), (7, 0, 0));
        assert!(!state.is_scroll_in_progress());
    }

    #[test]
    fn save_restore_round_trips() {
        let state = LazyListState::with_position(5, -120);
        state.scroll_by(60.0);
        let saved = state.save();

        let restored = LazyListState::restore(SavedListState::from_array(saved.to_array()));
        assert_eq!(restored.anchor(), state.anchor());
        assert_eq!(restored.default_index(), 5);
    }

    #[test]
    fn clones_share_position() {
        let a = LazyListState::new();
        let b = a.clone();
        a.scroll_to_item(9);
        assert_eq!(b.anchor(), (9, 0, 0));
    }

    #[test]
    fn mark_dirty_notifies_registered_callbacks() {
        let state = LazyListState::new();
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let id = state.add_invalidate_callback(Rc::new(move || {
            counter.set(counter.get() + 1);
        }));

        state.scroll_by(10.0);
        assert_eq!(calls.get(), 1);

        state.remove_invalidate_callback(id);
        state.scroll_by(10.0);
        assert_eq!(calls.get(), 1);
    }

    fn focus_args(state: &LazyListState, y: f32, animated: bool) {
        state.on_focus_bounds_changed(
            Rect {
                x: 0.0,
                y,
                width: 200.0,
                height: 100.0,
            },
            Size {
                width: 800.0,
                height: 500.0,
            },
            Axis::Vertical,
            LayoutDirection::Ltr,
            LazyListAlign::BOTH_EDGE,
            0.5,
            0.5,
            animated,
            Density(1.0),
        );
    }

    #[test]
    fn immediate_focus_scroll_applies_the_full_delta() {
        let state = LazyListState::new();
        // Anchor at 200; item at 350 needs +150.
        focus_args(&state, 350.0, false);
        assert_eq!(state.anchor(), (0, 0, -150));
    }

    #[test]
    fn repeated_bounds_are_ignored() {
        let state = LazyListState::new();
        focus_args(&state, 350.0, false);
        focus_args(&state, 350.0, false);
        assert_eq!(state.anchor(), (0, 0, -150));
    }

    #[test]
    fn animated_focus_scroll_steps_in_fixed_increments() {
        let state = LazyListState::new();
        // Delta 150 at 50 px per step.
        focus_args(&state, 350.0, true);
        assert!(state.is_scroll_in_progress());
        assert_eq!(state.anchor(), (0, 0, 0));

        assert!(state.tick_scroll_animation());
        assert_eq!(state.anchor(), (0, 0, -50));
        assert!(state.tick_scroll_animation());
        assert!(state.tick_scroll_animation());
        assert_eq!(state.anchor(), (0, 0, -150));

        assert!(!state.tick_scroll_animation());
        assert!(!state.is_scroll_in_progress());
    }

    #[test]
    fn new_focus_target_replaces_the_running_animation() {
        let state = LazyListState::new();
        focus_args(&state, 350.0, true);
        state.tick_scroll_animation();
        // New target before the first finished: remaining 100 is dropped.
        focus_args(&state, 100.0, false);
        // Item at 100 needs -100 relative to the anchor; applied on top of
        // the 50 already scrolled.
        assert_eq!(state.anchor(), (0, 0, 50));
        assert!(!state.is_scroll_in_progress());
    }
}
