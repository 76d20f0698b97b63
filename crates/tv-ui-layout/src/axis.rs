/// The scroll axis of a one-dimensional list.
///
/// The main axis is where items are stacked; the cross axis is the
/// perpendicular direction, where every item is placed at offset 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal main axis (a row).
    Horizontal,

    /// Vertical main axis (a column).
    Vertical,
}

impl Axis {
    /// Returns the opposite axis.
    #[inline]
    pub fn cross_axis(self) -> Self {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }

    /// Returns true if this is the horizontal axis.
    #[inline]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Axis::Horizontal)
    }

    /// Returns true if this is the vertical axis.
    #[inline]
    pub fn is_vertical(self) -> bool {
        matches!(self, Axis::Vertical)
    }
}

/// Resolved reading direction for horizontal layouts.
///
/// Vertical lists ignore this; horizontal lists mirror their placement and
/// focus-scroll math when the direction is [`LayoutDirection::Rtl`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LayoutDirection {
    #[default]
    Ltr,
    Rtl,
}

impl LayoutDirection {
    /// Returns true for left-to-right layouts.
    #[inline]
    pub fn is_ltr(self) -> bool {
        matches!(self, LayoutDirection::Ltr)
    }
}
