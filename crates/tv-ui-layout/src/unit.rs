//! Unit types: Dp and screen density.

/// Density-independent pixels.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Dp(pub f32);

impl Dp {
    pub fn to_px(self, density: Density) -> f32 {
        self.0 * density.0
    }

    pub fn from_px(px: f32, density: Density) -> Self {
        Self(px / density.0)
    }
}

/// Screen density as a px-per-dp scale factor (1.0 = mdpi).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Density(pub f32);

impl Default for Density {
    fn default() -> Self {
        Self(1.0)
    }
}
