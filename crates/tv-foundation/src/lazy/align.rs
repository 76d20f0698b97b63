//! Alignment policy for focus-driven scrolling and edge clamping.

/// Packed alignment policy for a lazy list.
///
/// Three independent facets are encoded in one value:
/// - whether an explicit window/item percentage anchor is applied
///   ([`has_align`](Self::has_align));
/// - whether the start edge is clamped when content would leave a gap before
///   the first item ([`has_start_edge`](Self::has_start_edge));
/// - whether the end edge is clamped when content underflows the viewport
///   ([`has_end_edge`](Self::has_end_edge)).
///
/// The edge facets are supersets of the shared align bit, so every edge
/// preset also carries the percentage anchor. [`NO_ALIGN`](Self::NO_ALIGN) is
/// the only preset where focus scrolling falls back to pure edge clamping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LazyListAlign(u32);

impl LazyListAlign {
    /// No percentage anchor; focused items are scrolled just far enough to
    /// become fully visible.
    pub const NO_ALIGN: Self = Self(0x000);

    /// Percentage anchor without edge clamping: the list may scroll freely
    /// past the first item and leave a gap after the last.
    pub const NO_EDGE: Self = Self(0x100);

    /// Percentage anchor, clamped so no gap opens before the first item.
    pub const START_EDGE: Self = Self(0x101);

    /// Percentage anchor, clamped so no gap is left after the last item when
    /// content underflows the viewport.
    pub const END_EDGE: Self = Self(0x110);

    /// Percentage anchor with both edges clamped. The default.
    pub const BOTH_EDGE: Self = Self(0x111);

    /// Returns true if the window/item percentage anchor applies.
    #[inline]
    pub fn has_align(self) -> bool {
        self.0 & Self::NO_EDGE.0 == Self::NO_EDGE.0
    }

    /// Returns true if the start edge is clamped.
    #[inline]
    pub fn has_start_edge(self) -> bool {
        self.0 & Self::START_EDGE.0 == Self::START_EDGE.0
    }

    /// Returns true if the end edge is clamped.
    #[inline]
    pub fn has_end_edge(self) -> bool {
        self.0 & Self::END_EDGE.0 == Self::END_EDGE.0
    }

    /// Raw packed value.
    #[inline]
    pub fn raw(self) -> u32 {
        self.0
    }
}

impl Default for LazyListAlign {
    fn default() -> Self {
        Self::BOTH_EDGE
    }
}
