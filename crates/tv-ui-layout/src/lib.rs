//! Layout contracts and geometry primitives for the TV lazy list foundation.
//!
//! Two coordinate spaces coexist:
//! - integer pixels ([`Constraints`], [`IntOffset`], [`IntSize`]) for
//!   measurement and placement, where sub-pixel sizes do not exist;
//! - f32 ([`Point`], [`Size`], [`Rect`]) for focus bounds reported by the
//!   host, which may carry fractional coordinates.

mod axis;
mod constraints;
mod geometry;
mod unit;

pub use axis::*;
pub use constraints::*;
pub use geometry::*;
pub use unit::*;
