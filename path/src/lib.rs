//! Data structures and protocols to store, build, reverse and iterate over
//! outline paths.
//!
//! A [`Path`] owns an ordered sequence of contours made of line, quadratic
//! and cubic Bézier segments, plus a fill rule. Paths are recorded through
//! the [`SegmentPen`] protocol and read back at two granularities: atomic
//! [`PathEvent`]s exposing the stored quadratic decomposition, and
//! high-level [`Segment`]s with multi-point quadratic splines re-joined.
//!
//! # Examples
//!
//! ```
//! use linocut_path::math::point;
//! use linocut_path::{Path, Segment, SegmentPen};
//!
//! let mut path = Path::new();
//! let mut pen = path.pen();
//! pen.move_to(point(0.0, 0.0))?;
//! pen.qcurve_to(&[point(1.0, 1.0), point(2.0, 2.0), point(3.0, 3.0)])?;
//! pen.close_path()?;
//!
//! let segments: Vec<Segment> = path.segments().collect();
//! assert_eq!(segments.len(), 3);
//! assert_eq!(segments[1].name(), "qCurveTo");
//! # Ok::<(), linocut_path::PenError>(())
//! ```

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

pub mod float_bits;

mod error;
mod events;
mod path;
mod pen;

pub use crate::error::{OpenPathError, PenError, SequencingError};
pub use crate::events::{PathEvent, Segment};
pub use crate::path::{ContourSlice, Contours, Iter, Path, PathSegments, Segments};
pub use crate::pen::{PathPen, SegmentPen};

pub mod math {
    //! f32 euclid aliases used everywhere in this crate.

    /// Alias for `euclid::default::Point2D<f32>`.
    pub type Point = euclid::default::Point2D<f32>;

    /// Alias for `euclid::default::Transform2D<f32>`.
    pub type Transform = euclid::default::Transform2D<f32>;

    /// Shorthand for `Point::new(x, y)`.
    #[inline]
    pub fn point(x: f32, y: f32) -> Point {
        Point::new(x, y)
    }
}

/// The fill rule defines how to determine what is inside and what is outside
/// of the shape.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum FillRule {
    NonZero,
    EvenOdd,
}

impl FillRule {
    #[inline]
    pub fn is_in(&self, winding_number: i16) -> bool {
        match *self {
            FillRule::NonZero => winding_number != 0,
            FillRule::EvenOdd => winding_number % 2 != 0,
        }
    }

    #[inline]
    pub fn is_out(&self, winding_number: i16) -> bool {
        !self.is_in(winding_number)
    }
}

impl Default for FillRule {
    fn default() -> Self {
        FillRule::NonZero
    }
}

#[test]
fn test_fill_rule() {
    assert!(FillRule::NonZero.is_in(2));
    assert!(FillRule::NonZero.is_out(0));
    assert!(FillRule::EvenOdd.is_out(2));
    assert!(FillRule::EvenOdd.is_in(-1));
    assert_eq!(FillRule::default(), FillRule::NonZero);
}
