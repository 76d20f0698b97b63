//! End-to-end scenarios driving a lazy list the way a host would: measure,
//! report placements as layout coordinates, feed focus changes back in, and
//! repeat until the position settles.

use std::collections::HashMap;

use tv_ui_layout::{Constraints, IntSize, Point, Size};

use crate::lazy::{
    LayoutCoordinates, LazyList, LazyListAlign, LazyListItems, LazyListMeasureConfig,
    LazyListMeasureResult, LazyListState, SavedListState,
};

const ITEM_EXTENT: i32 = 100;

struct Host {
    list: LazyList,
    list_coords: LayoutCoordinates,
    item_coords: HashMap<usize, LayoutCoordinates>,
    constraints: Constraints,
}

impl Host {
    fn new(count: usize, config: LazyListMeasureConfig, animated: bool) -> Self {
        let state = LazyListState::new();
        Self::with_state(state, count, config, animated)
    }

    fn with_state(
        state: LazyListState,
        count: usize,
        config: LazyListMeasureConfig,
        animated: bool,
    ) -> Self {
        let list = LazyList::new(state, config).with_animation(animated);
        list.items(LazyListItems::new(count, |_, _| {}));

        let list_coords = LayoutCoordinates::new();
        list_coords.set_size(Size {
            width: 800.0,
            height: 500.0,
        });
        list.on_placed(list_coords.clone());

        Self {
            list,
            list_coords,
            item_coords: HashMap::new(),
            constraints: Constraints::loose(800, 500),
        }
    }

    fn measure(&mut self) -> LazyListMeasureResult {
        let result = self.list.measure(self.constraints, |_, _, _| IntSize {
            width: 800,
            height: ITEM_EXTENT,
        });
        self.item_coords.clear();
        for placement in &result.placements {
            let coords = LayoutCoordinates::new();
            coords.set_parent(Some(&self.list_coords));
            coords.set_position(Point {
                x: placement.offset.x as f32,
                y: placement.offset.y as f32,
            });
            coords.set_size(Size {
                width: placement.item.size.width as f32,
                height: placement.item.size.height as f32,
            });
            self.item_coords.insert(placement.item.index, coords);
        }
        result
    }

    fn focus(&self, index: usize) {
        if let Some(coords) = self.item_coords.get(&index) {
            self.list.on_focused_bounds_changed(Some(coords));
        }
    }

    fn leading_of(&self, result: &LazyListMeasureResult, index: usize) -> Option<i32> {
        result
            .placements
            .iter()
            .find(|p| p.item.index == index)
            .map(|p| p.offset.y)
    }
}

#[test]
fn focusing_an_item_settles_it_on_the_alignment_anchor() {
    let mut host = Host::new(20, LazyListMeasureConfig::default(), false);

    let mut result = host.measure();
    // Measure, report focus, re-measure until nothing moves.
    for _ in 0..5 {
        host.focus(5);
        result = host.measure();
    }
    // A 100 px item centered in a 500 px viewport leads at 200.
    assert_eq!(host.leading_of(&result, 5), Some(200));

    // One more round is a no-op.
    host.focus(5);
    let settled = host.measure();
    assert_eq!(result, settled);
}

#[test]
fn animated_focus_converges_in_fixed_steps() {
    let mut host = Host::new(20, LazyListMeasureConfig::default(), true);

    let mut result = host.measure();
    host.focus(5);
    // Item 5 starts at 500; the 300 px journey to 200 takes six 50 px steps.
    let mut ticks = 0;
    while host.list.tick() {
        ticks += 1;
        result = host.measure();
        host.focus(5);
        assert!(ticks < 100, "animation failed to converge");
    }
    assert_eq!(ticks, 6);
    assert_eq!(host.leading_of(&result, 5), Some(200));
    assert!(!host.list.state().is_scroll_in_progress());
}

#[test]
fn focusing_the_last_item_keeps_content_flush_with_the_end() {
    let mut host = Host::new(10, LazyListMeasureConfig::default(), false);
    host.list.state().scroll_to_item(9);

    let mut result = host.measure();
    for _ in 0..5 {
        host.focus(9);
        result = host.measure();
    }
    // Centering item 9 would leave a gap after it; the end clamp wins and the
    // focused bounds stop changing, so no scroll churn follows.
    assert_eq!(host.leading_of(&result, 9), Some(400));

    host.focus(9);
    let settled = host.measure();
    assert_eq!(host.leading_of(&settled, 9), Some(400));
}

#[test]
fn jump_scrolling_shows_the_target_without_alignment() {
    let config = LazyListMeasureConfig {
        align: LazyListAlign::NO_ALIGN,
        ..Default::default()
    };
    let mut host = Host::new(10, config, false);
    host.list.state().scroll_to_item(9);

    let result = host.measure();
    assert_eq!(host.leading_of(&result, 9), Some(0));
}

#[test]
fn saved_position_survives_a_new_host() {
    let mut host = Host::new(20, LazyListMeasureConfig::default(), false);
    let mut first = host.measure();
    for _ in 0..5 {
        host.focus(7);
        first = host.measure();
    }
    let saved = host.list.state().save();

    let restored = LazyListState::restore(SavedListState::from_array(saved.to_array()));
    let mut revived = Host::with_state(restored, 20, LazyListMeasureConfig::default(), false);
    let second = revived.measure();

    assert_eq!(first, second);
    assert_eq!(revived.list.default_focus_index(), 0);
}

#[test]
fn inactive_slots_are_capped_by_the_reuse_policy() {
    let mut host = Host::new(40, LazyListMeasureConfig::default(), false);
    host.measure();
    host.list.state().scroll_to_item(30);
    let result = host.measure();

    // Every slot realized before the jump is now inactive.
    let mut inactive: Vec<_> = (0..7).map(|i| host.list.state().items().key(i)).collect();
    host.list.retain_inactive_slots(&mut inactive);
    assert_eq!(inactive.len(), 5);

    // The jump target is on screen.
    assert!(host.leading_of(&result, 30).is_some());
}
