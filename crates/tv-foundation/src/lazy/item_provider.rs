//! Declarative item registration for lazy lists.
//!
//! Callers describe the item set with a count, four per-index provider
//! functions (key, content type, span, renderer) and nothing else; items are
//! realized lazily by the measurement pass. Providers are plain `Rc`
//! closures, each independently defaulted at the call site.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use super::slot_reuse::SlotId;

/// Per-slot scope handed to the item renderer.
///
/// Carries the focus flag for the realized slot; the host updates it from its
/// focus events so item content can restyle itself when focused.
#[derive(Default)]
pub struct LazyListItemScope {
    has_focus: Cell<bool>,
}

impl LazyListItemScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true while this slot holds focus.
    pub fn has_focus(&self) -> bool {
        self.has_focus.get()
    }

    /// Updates the focus flag. Called by the host's focus-change handler.
    pub fn set_focus(&self, focused: bool) {
        self.has_focus.set(focused);
    }
}

/// Renderer invoked when a slot at the given index is (re)composed.
pub type ItemContent = Rc<dyn Fn(&LazyListItemScope, usize)>;

/// The declared item set for a lazy list.
///
/// Replaces any prior declaration wholesale when registered; no bounds
/// checking happens here, the measurement pass enforces index validity.
#[derive(Clone)]
pub struct LazyListItems {
    count: usize,
    key: Rc<dyn Fn(usize) -> u64>,
    content_type: Rc<dyn Fn(usize) -> u64>,
    span: Rc<dyn Fn(usize) -> usize>,
    content: ItemContent,
}

impl LazyListItems {
    /// Declares `count` items with default providers: key = index, a single
    /// shared content type, span 1.
    pub fn new<F>(count: usize, content: F) -> Self
    where
        F: Fn(&LazyListItemScope, usize) + 'static,
    {
        Self {
            count,
            key: Rc::new(|index| index as u64),
            content_type: Rc::new(|_| 0),
            span: Rc::new(|_| 1),
            content: Rc::new(content),
        }
    }

    /// Declares items backed by a slice, rendering each element.
    pub fn from_slice<T, F>(items: &[T], content: F) -> Self
    where
        T: Clone + 'static,
        F: Fn(&LazyListItemScope, &T) + 'static,
    {
        let items_rc: Rc<[T]> = items.to_vec().into();
        Self::new(items_rc.len(), move |scope, index| {
            if let Some(item) = items_rc.get(index) {
                content(scope, item);
            }
        })
    }

    /// Replaces the key provider.
    pub fn key_by<F>(mut self, key: F) -> Self
    where
        F: Fn(usize) -> u64 + 'static,
    {
        self.key = Rc::new(key);
        self
    }

    /// Replaces the content-type provider.
    pub fn type_by<F>(mut self, content_type: F) -> Self
    where
        F: Fn(usize) -> u64 + 'static,
    {
        self.content_type = Rc::new(content_type);
        self
    }

    /// Replaces the span provider. Spans are stored but not consulted by
    /// placement yet; every item occupies one span.
    pub fn span_by<F>(mut self, span: F) -> Self
    where
        F: Fn(usize) -> usize + 'static,
    {
        self.span = Rc::new(span);
        self
    }

    /// Number of declared items.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Stable slot identifier for the item at `index`.
    pub fn key(&self, index: usize) -> SlotId {
        SlotId::new((self.key)(index))
    }

    /// Content type for the item at `index`.
    pub fn content_type(&self, index: usize) -> u64 {
        (self.content_type)(index)
    }

    /// Declared span for the item at `index` (reserved).
    pub fn span(&self, index: usize) -> usize {
        (self.span)(index)
    }

    /// Invokes the renderer for the item at `index`.
    pub fn render(&self, scope: &LazyListItemScope, index: usize) {
        (self.content)(scope, index);
    }

    /// Shared handle to the renderer, for hosts that compose slots directly.
    pub fn content(&self) -> ItemContent {
        Rc::clone(&self.content)
    }
}

impl Default for LazyListItems {
    fn default() -> Self {
        Self::new(0, |_, _| {})
    }
}

impl fmt::Debug for LazyListItems {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyListItems")
            .field("count", &self.count)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn default_providers() {
        let items = LazyListItems::new(3, |_, _| {});
        assert_eq!(items.count(), 3);
        assert_eq!(items.key(2), SlotId::new(2));
        assert_eq!(items.content_type(2), 0);
        assert_eq!(items.span(2), 1);
    }

    #[test]
    fn providers_can_be_replaced_independently() {
        let items = LazyListItems::new(4, |_, _| {})
            .key_by(|i| (i * 10) as u64)
            .type_by(|i| if i == 0 { 1 } else { 2 });

        assert_eq!(items.key(3), SlotId::new(30));
        assert_eq!(items.content_type(0), 1);
        assert_eq!(items.content_type(3), 2);
        assert_eq!(items.span(3), 1);
    }

    #[test]
    fn from_slice_renders_elements() {
        let rendered = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&rendered);
        let items = LazyListItems::from_slice(&["a", "b", "c"], move |_, item: &&str| {
            sink.borrow_mut().push((*item).to_string());
        });

        let scope = LazyListItemScope::new();
        for i in 0..items.count() {
            items.render(&scope, i);
        }
        assert_eq!(*rendered.borrow(), vec!["a", "b", "c"]);
    }

    #[test]
    fn scope_tracks_focus() {
        let scope = LazyListItemScope::new();
        assert!(!scope.has_focus());
        scope.set_focus(true);
        assert!(scope.has_focus());
    }
}
