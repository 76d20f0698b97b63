//! Integer-pixel layout constraints.

/// Constraints used during layout measurement.
///
/// All bounds are whole pixels. An unbounded axis is expressed with the
/// [`Constraints::INFINITY`] sentinel rather than a floating-point infinity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Constraints {
    pub min_width: i32,
    pub max_width: i32,
    pub min_height: i32,
    pub max_height: i32,
}

impl Constraints {
    /// Sentinel for an unbounded maximum extent.
    pub const INFINITY: i32 = i32::MAX;

    /// Creates constraints with exact width and height.
    pub fn tight(width: i32, height: i32) -> Self {
        Self {
            min_width: width,
            max_width: width,
            min_height: height,
            max_height: height,
        }
    }

    /// Creates constraints with loose bounds (min = 0, max = given values).
    pub fn loose(max_width: i32, max_height: i32) -> Self {
        Self {
            min_width: 0,
            max_width,
            min_height: 0,
            max_height,
        }
    }

    /// Returns true if these constraints admit exactly one size.
    pub fn is_tight(&self) -> bool {
        self.min_width == self.max_width && self.min_height == self.max_height
    }

    /// Returns true if the width is bounded.
    #[inline]
    pub fn has_bounded_width(&self) -> bool {
        self.max_width != Self::INFINITY
    }

    /// Returns true if the height is bounded.
    #[inline]
    pub fn has_bounded_height(&self) -> bool {
        self.max_height != Self::INFINITY
    }

    /// Clamps the provided width and height into these constraints.
    pub fn constrain(&self, width: i32, height: i32) -> (i32, i32) {
        (
            width.clamp(self.min_width, self.max_width),
            height.clamp(self.min_height, self.max_height),
        )
    }

    /// Creates new constraints with the given width bounds.
    pub fn copy_with_width(self, min_width: i32, max_width: i32) -> Self {
        Self {
            min_width,
            max_width,
            ..self
        }
    }

    /// Creates new constraints with the given height bounds.
    pub fn copy_with_height(self, min_height: i32, max_height: i32) -> Self {
        Self {
            min_height,
            max_height,
            ..self
        }
    }
}
