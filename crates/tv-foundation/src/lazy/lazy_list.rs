//! Lazy list composition glue.
//!
//! Ties the pieces together for a host: item registration, the measurement
//! pass, slot retention, and translation of focus events into scroll. The
//! host owns rendering and input; it reports placement and focus through
//! [`LayoutCoordinates`] handles and drives animation frames via
//! [`LazyList::tick`].

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tv_ui_layout::{Constraints, Density, IntSize, Point, Rect, Size};

use super::item_provider::LazyListItems;
use super::lazy_list_state::LazyListState;
use super::measure::{measure_lazy_list, LazyListMeasureConfig};
use super::measured_item::LazyListMeasureResult;
use super::slot_reuse::{LazyListSlotReusePolicy, SlotId, SlotReusePolicy};

struct CoordsInner {
    size: Cell<Size>,
    position_in_parent: Cell<Point>,
    parent: RefCell<Option<LayoutCoordinates>>,
}

/// A node in the host's layout tree.
///
/// Shared handle; the host updates size and position as it lays out, and the
/// list reads them back to resolve focus bounds. Parents form a chain up to
/// the root.
#[derive(Clone)]
pub struct LayoutCoordinates {
    inner: Rc<CoordsInner>,
}

impl Default for LayoutCoordinates {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutCoordinates {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(CoordsInner {
                size: Cell::new(Size::ZERO),
                position_in_parent: Cell::new(Point::ZERO),
                parent: RefCell::new(None),
            }),
        }
    }

    pub fn set_size(&self, size: Size) {
        self.inner.size.set(size);
    }

    pub fn size(&self) -> Size {
        self.inner.size.get()
    }

    pub fn set_position(&self, position: Point) {
        self.inner.position_in_parent.set(position);
    }

    pub fn position_in_parent(&self) -> Point {
        self.inner.position_in_parent.get()
    }

    pub fn set_parent(&self, parent: Option<&LayoutCoordinates>) {
        *self.inner.parent.borrow_mut() = parent.cloned();
    }

    pub fn parent(&self) -> Option<LayoutCoordinates> {
        self.inner.parent.borrow().clone()
    }

    /// True if both handles refer to the same node.
    pub fn ptr_eq(&self, other: &LayoutCoordinates) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Bounds of `descendant` expressed in this node's space, or `None` if it
    /// is not below this node.
    pub fn local_bounding_box_of(&self, descendant: &LayoutCoordinates) -> Option<Rect> {
        let mut origin = Point::ZERO;
        let mut node = descendant.clone();
        loop {
            if node.ptr_eq(self) {
                let size = descendant.size();
                return Some(Rect {
                    x: origin.x,
                    y: origin.y,
                    width: size.width,
                    height: size.height,
                });
            }
            let position = node.position_in_parent();
            origin.x += position.x;
            origin.y += position.y;
            node = node.parent()?;
        }
    }
}

impl std::fmt::Debug for LayoutCoordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayoutCoordinates")
            .field("size", &self.size())
            .field("position_in_parent", &self.position_in_parent())
            .finish()
    }
}

/// A focus-navigable virtualized list.
///
/// The host composes one of these per list in its tree, forwards its layout
/// and focus callbacks, and measures through [`measure`](Self::measure).
pub struct LazyList {
    state: LazyListState,
    reuse_policy: Rc<LazyListSlotReusePolicy>,
    config: LazyListMeasureConfig,
    animated: bool,
    density: Density,
    coordinates: RefCell<Option<LayoutCoordinates>>,
}

impl LazyList {
    pub fn new(state: LazyListState, config: LazyListMeasureConfig) -> Self {
        Self {
            state,
            reuse_policy: Rc::new(LazyListSlotReusePolicy::new()),
            config,
            animated: true,
            density: Density::default(),
            coordinates: RefCell::new(None),
        }
    }

    /// Disables or enables stepped focus scrolling; when disabled, focus
    /// changes jump in a single pass.
    pub fn with_animation(mut self, animated: bool) -> Self {
        self.animated = animated;
        self
    }

    pub fn with_density(mut self, density: Density) -> Self {
        self.density = density;
        self
    }

    pub fn state(&self) -> &LazyListState {
        &self.state
    }

    pub fn reuse_policy(&self) -> &Rc<LazyListSlotReusePolicy> {
        &self.reuse_policy
    }

    pub fn config(&self) -> &LazyListMeasureConfig {
        &self.config
    }

    /// Replaces the declared item set.
    pub fn items(&self, items: LazyListItems) {
        self.state.register_items(items);
    }

    /// Index of the item that should receive initial focus.
    pub fn default_focus_index(&self) -> usize {
        self.state.default_index()
    }

    /// Records this list's node in the host layout tree. Focus events cannot
    /// be resolved until placement has been reported.
    pub fn on_placed(&self, coordinates: LayoutCoordinates) {
        *self.coordinates.borrow_mut() = Some(coordinates);
    }

    /// Runs the measurement pass.
    pub fn measure<F>(&self, constraints: Constraints, measure_item: F) -> LazyListMeasureResult
    where
        F: FnMut(usize, SlotId, Constraints) -> IntSize,
    {
        measure_lazy_list(
            &self.state,
            &self.reuse_policy,
            constraints,
            &self.config,
            measure_item,
        )
    }

    /// Reacts to a focus move. `focused` is the newly focused node, or `None`
    /// when focus left the host entirely.
    ///
    /// The focused node is resolved to the list item containing it (the
    /// direct child of this list on the node's ancestor chain); focus landing
    /// outside the list is ignored.
    pub fn on_focused_bounds_changed(&self, focused: Option<&LayoutCoordinates>) {
        let Some(focused) = focused else {
            return;
        };
        let coordinates = self.coordinates.borrow().clone();
        let Some(list_coordinates) = coordinates else {
            return;
        };

        let mut item = focused.clone();
        loop {
            let Some(parent) = item.parent() else {
                return;
            };
            if parent.ptr_eq(&list_coordinates) {
                break;
            }
            item = parent;
        }

        let Some(bounds) = list_coordinates.local_bounding_box_of(&item) else {
            return;
        };
        self.state.on_focus_bounds_changed(
            bounds,
            list_coordinates.size(),
            self.config.axis,
            self.config.direction,
            self.config.align,
            self.config.window_percent,
            self.config.item_percent,
            self.animated,
            self.density,
        );
    }

    /// Advances the stepped focus scroll. Returns true while more frames are
    /// needed.
    pub fn tick(&self) -> bool {
        self.state.tick_scroll_animation()
    }

    /// Filters the host's inactive slots through the reuse policy.
    pub fn retain_inactive_slots(&self, slots: &mut Vec<SlotId>) {
        self.reuse_policy.select_retainable(slots);
    }
}

impl std::fmt::Debug for LazyList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LazyList")
            .field("state", &self.state)
            .field("config", &self.config)
            .field("animated", &self.animated)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(parent: Option<&LayoutCoordinates>, x: f32, y: f32, w: f32, h: f32) -> LayoutCoordinates {
        let coords = LayoutCoordinates::new();
        coords.set_parent(parent);
        coords.set_position(Point { x, y });
        coords.set_size(Size {
            width: w,
            height: h,
        });
        coords
    }

    #[test]
    fn bounding_box_accumulates_ancestor_positions() {
        let root = node(None, 0.0, 0.0, 800.0, 500.0);
        let item = node(Some(&root), 0.0, 120.0, 800.0, 100.0);
        let inner = node(Some(&item), 10.0, 5.0, 50.0, 20.0);

        let rect = root.local_bounding_box_of(&inner).unwrap();
        assert_eq!(
            rect,
            Rect {
                x: 10.0,
                y: 125.0,
                width: 50.0,
                height: 20.0,
            }
        );
    }

    #[test]
    fn bounding_box_of_a_foreign_node_is_none() {
        let root = node(None, 0.0, 0.0, 800.0, 500.0);
        let other = node(None, 0.0, 0.0, 10.0, 10.0);
        assert!(root.local_bounding_box_of(&other).is_none());
    }

    #[test]
    fn focus_resolves_to_the_direct_list_child() {
        let state = LazyListState::new();
        let list = LazyList::new(state, LazyListMeasureConfig::default()).with_animation(false);

        let list_coords = node(None, 0.0, 0.0, 800.0, 500.0);
        let item = node(Some(&list_coords), 0.0, 350.0, 800.0, 100.0);
        let button = node(Some(&item), 20.0, 10.0, 100.0, 40.0);
        list.on_placed(list_coords);

        // The scroll delta is computed from the item, not the inner button:
        // centering a 100 px item in a 500 px viewport targets 200, and the
        // item sits at 350.
        list.on_focused_bounds_changed(Some(&button));
        assert_eq!(list.state().anchor(), (0, 0, -150));
    }

    #[test]
    fn focus_outside_the_list_is_ignored() {
        let state = LazyListState::new();
        let list = LazyList::new(state, LazyListMeasureConfig::default()).with_animation(false);
        list.on_placed(node(None, 0.0, 0.0, 800.0, 500.0));

        let stray = node(None, 0.0, 900.0, 100.0, 100.0);
        list.on_focused_bounds_changed(Some(&stray));
        list.on_focused_bounds_changed(None);
        assert_eq!(list.state().anchor(), (0, 0, 0));
    }

    #[test]
    fn focus_before_placement_is_ignored() {
        let state = LazyListState::new();
        let list = LazyList::new(state, LazyListMeasureConfig::default()).with_animation(false);
        let orphan = node(None, 0.0, 0.0, 100.0, 100.0);
        list.on_focused_bounds_changed(Some(&orphan));
        assert_eq!(list.state().anchor(), (0, 0, 0));
    }
}
