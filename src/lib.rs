//! Vector outlines with a recording pen protocol, verb-preserving reversal
//! and boolean set operations.
//!
//! # Crates
//!
//! This meta-crate (`linocut`) reexports the following sub-crates for
//! convenience:
//!
//! * **linocut_path** - Path storage, the pen protocol, iteration and
//!   contour reversal.
//! * **linocut_ops** - The boolean-operation builder and the geometry-engine
//!   contract.
//!
//! Each `linocut_<name>` crate is reexported as a `<name>` module.
//!
//! # Examples
//!
//! Recording a triangle through a pen and reversing it in place:
//!
//! ```
//! use linocut::math::point;
//! use linocut::path::Segment;
//! use linocut::{Path, SegmentPen};
//!
//! let mut path = Path::new();
//! let mut pen = path.pen();
//! pen.move_to(point(0.0, 0.0)).unwrap();
//! pen.line_to(point(1.0, 1.0)).unwrap();
//! pen.line_to(point(2.0, 0.0)).unwrap();
//! pen.close_path().unwrap();
//!
//! path.reverse();
//! assert_eq!(path.segments().next(), Some(Segment::MoveTo(point(2.0, 0.0))));
//! ```
//!
//! Serialization using serde can be enabled with the `serialization`
//! feature flag (disabled by default).

pub use linocut_ops as ops;
pub use linocut_path as path;

pub use linocut_path::math;
pub use linocut_path::{FillRule, Path, PathPen, SegmentPen};

pub use linocut_ops::{GeometryEngine, OpBuilder, OpOptions, PathOp};
