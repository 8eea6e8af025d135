//! The recording pen protocol.
//!
//! Outline producers (glyph decomposers, shape generators) draw through the
//! [`SegmentPen`] trait; a [`PathPen`] records those commands into a
//! [`Path`]. All coordinates are absolute.

use crate::error::{OpenPathError, PenError, SequencingError};
use crate::events::Segment;
use crate::math::Point;
use crate::path::Path;

/// The drawing interface outline producers write to.
///
/// A contour starts with `move_to` and ends with `close_path` or
/// `end_path`; issuing any other command outside of a contour is a
/// sequencing error.
pub trait SegmentPen {
    /// Starts a new contour at `to`, implicitly terminating any contour in
    /// progress.
    fn move_to(&mut self, to: Point) -> Result<(), PenError>;

    /// Adds a straight segment to the current contour.
    fn line_to(&mut self, to: Point) -> Result<(), PenError>;

    /// Adds a cubic Bézier segment.
    fn curve_to(&mut self, ctrl1: Point, ctrl2: Point, to: Point) -> Result<(), PenError>;

    /// Adds a quadratic spline in TrueType convention: every point but the
    /// last is an off-curve control point, and consecutive off-curve points
    /// imply an on-curve point at their midpoint.
    ///
    /// # Panics
    ///
    /// If fewer than two points are provided.
    fn qcurve_to(&mut self, points: &[Point]) -> Result<(), PenError>;

    /// Terminates the current contour with an implicit straight edge back
    /// to its starting point, marking it closed.
    fn close_path(&mut self) -> Result<(), PenError>;

    /// Terminates the current contour without closing it.
    fn end_path(&mut self) -> Result<(), PenError>;

    /// Applies a recorded segment by dispatching to the matching command.
    fn segment(&mut self, segment: &Segment) -> Result<(), PenError> {
        match segment {
            Segment::MoveTo(to) => self.move_to(*to),
            Segment::LineTo(to) => self.line_to(*to),
            Segment::CurveTo(ctrl1, ctrl2, to) => self.curve_to(*ctrl1, *ctrl2, *to),
            Segment::QCurveTo(points) => self.qcurve_to(points),
            Segment::ClosePath => self.close_path(),
            Segment::EndPath => self.end_path(),
        }
    }
}

/// A stateful recorder bound to one target [`Path`].
///
/// Pens do not own the path they write to; the mutable borrow keeps a pen
/// exclusive for its lifetime, so several pens can target the same path
/// only one after another.
pub struct PathPen<'l> {
    path: &'l mut Path,
    allow_open_paths: bool,
}

impl<'l> PathPen<'l> {
    /// Creates a pen that records open contours as-is.
    pub fn new(path: &'l mut Path) -> Self {
        PathPen::with_policy(path, true)
    }

    /// Creates a pen with an explicit open-contour policy.
    ///
    /// With `allow_open_paths` set to `false`, leaving a contour open
    /// (explicitly through `end_path`, or implicitly through `move_to`)
    /// fails with [`OpenPathError`] and leaves the path untouched.
    pub fn with_policy(path: &'l mut Path, allow_open_paths: bool) -> Self {
        PathPen {
            path,
            allow_open_paths,
        }
    }
}

impl<'l> SegmentPen for PathPen<'l> {
    fn move_to(&mut self, to: Point) -> Result<(), PenError> {
        if self.path.in_contour() && !self.allow_open_paths {
            return Err(OpenPathError.into());
        }
        self.path.move_to(to)
    }

    fn line_to(&mut self, to: Point) -> Result<(), PenError> {
        self.path.line_to(to)
    }

    fn curve_to(&mut self, ctrl1: Point, ctrl2: Point, to: Point) -> Result<(), PenError> {
        self.path.curve_to(ctrl1, ctrl2, to)
    }

    fn qcurve_to(&mut self, points: &[Point]) -> Result<(), PenError> {
        self.path.qcurve_to(points)
    }

    fn close_path(&mut self) -> Result<(), PenError> {
        self.path.close_path()
    }

    fn end_path(&mut self) -> Result<(), PenError> {
        if !self.path.in_contour() {
            return Err(SequencingError.into());
        }
        if !self.allow_open_paths {
            return Err(OpenPathError.into());
        }
        self.path.end_path()
    }
}

#[cfg(test)]
use crate::events::PathEvent;
#[cfg(test)]
use crate::math::point;

#[test]
fn test_record_and_draw() {
    let mut path = Path::new();
    let mut pen = path.pen();
    pen.move_to(point(0.0, 0.0)).unwrap();
    pen.line_to(point(1.0, 2.0)).unwrap();
    pen.curve_to(point(3.5, 4.0), point(5.0, 6.0), point(7.0, 8.0)).unwrap();
    pen.qcurve_to(&[point(9.0, 10.0), point(11.0, 12.0)]).unwrap();
    pen.close_path().unwrap();

    let mut replayed = Path::new();
    path.draw(&mut replayed.pen()).unwrap();
    assert_eq!(path, replayed);
}

#[test]
fn test_allow_open_contour() {
    let mut path = Path::new();
    let mut pen = path.pen();
    pen.move_to(point(0.0, 0.0)).unwrap();
    // end_path is implicit here
    pen.move_to(point(1.0, 0.0)).unwrap();
    pen.line_to(point(1.0, 1.0)).unwrap();
    pen.curve_to(point(2.0, 2.0), point(3.0, 3.0), point(4.0, 4.0)).unwrap();
    pen.end_path().unwrap();

    let segments: Vec<Segment> = path.segments().collect();
    assert_eq!(
        segments,
        vec![
            Segment::MoveTo(point(0.0, 0.0)),
            Segment::EndPath,
            Segment::MoveTo(point(1.0, 0.0)),
            Segment::LineTo(point(1.0, 1.0)),
            Segment::CurveTo(point(2.0, 2.0), point(3.0, 3.0), point(4.0, 4.0)),
            Segment::EndPath,
        ]
    );
}

#[test]
fn test_open_contour_error() {
    let mut path = Path::new();
    let mut pen = PathPen::with_policy(&mut path, false);
    pen.move_to(point(0.0, 0.0)).unwrap();
    assert_eq!(pen.end_path(), Err(PenError::OpenPath(OpenPathError)));
    // An implicit termination through move_to is rejected the same way and
    // the contour remains as drawn.
    assert_eq!(pen.move_to(point(1.0, 0.0)), Err(PenError::OpenPath(OpenPathError)));
    pen.close_path().unwrap();

    let mut expected = Path::new();
    expected.move_to(point(0.0, 0.0)).unwrap();
    expected.close_path().unwrap();
    assert_eq!(path, expected);
}

#[test]
fn test_sequencing_error() {
    let mut path = Path::new();
    let mut pen = path.pen();
    assert_eq!(pen.line_to(point(1.0, 1.0)), Err(PenError::Sequencing(SequencingError)));
    assert_eq!(pen.close_path(), Err(PenError::Sequencing(SequencingError)));
    assert_eq!(pen.end_path(), Err(PenError::Sequencing(SequencingError)));

    pen.move_to(point(0.0, 0.0)).unwrap();
    pen.close_path().unwrap();
    assert_eq!(
        pen.curve_to(point(1.0, 1.0), point(2.0, 2.0), point(3.0, 3.0)),
        Err(PenError::Sequencing(SequencingError))
    );
}

#[test]
fn test_decompose_join_quadratic_segments() {
    let mut path = Path::new();
    let mut pen = path.pen();
    pen.move_to(point(0.0, 0.0)).unwrap();
    pen.qcurve_to(&[point(1.0, 1.0), point(2.0, 2.0), point(3.0, 3.0)]).unwrap();
    pen.close_path().unwrap();

    // The TrueType quadratic spline with N off-curve points is stored as N
    // atomic quadratic segments with implied on-curve midpoints.
    let events: Vec<PathEvent> = path.iter().collect();
    assert_eq!(events.len(), 4);
    assert_eq!(
        events[1],
        PathEvent::Quadratic {
            from: point(0.0, 0.0),
            ctrl: point(1.0, 1.0),
            to: point(1.5, 1.5),
        }
    );
    assert_eq!(
        events[2],
        PathEvent::Quadratic {
            from: point(1.5, 1.5),
            ctrl: point(2.0, 2.0),
            to: point(3.0, 3.0),
        }
    );

    // The segments view re-joins the run and omits the implied on-curves.
    let segments: Vec<Segment> = path.segments().collect();
    assert_eq!(
        segments,
        vec![
            Segment::MoveTo(point(0.0, 0.0)),
            Segment::QCurveTo(vec![point(1.0, 1.0), point(2.0, 2.0), point(3.0, 3.0)]),
            Segment::ClosePath,
        ]
    );
}

#[test]
fn test_last_implicit_line_to() {
    let mut path = Path::new();
    let mut pen = path.pen();
    pen.move_to(point(100.0, 100.0)).unwrap();
    pen.line_to(point(100.0, 200.0)).unwrap();
    pen.close_path().unwrap();

    // The closing edge back to the start is implied by closePath; no extra
    // lineTo is reported.
    let segments: Vec<Segment> = path.segments().collect();
    assert_eq!(
        segments,
        vec![
            Segment::MoveTo(point(100.0, 100.0)),
            Segment::LineTo(point(100.0, 200.0)),
            Segment::ClosePath,
        ]
    );
}

#[test]
fn test_draw_open_contour_onto_strict_pen() {
    let mut path = Path::new();
    path.move_to(point(0.0, 0.0)).unwrap();
    path.line_to(point(1.0, 1.0)).unwrap();
    path.end_path().unwrap();

    let mut target = Path::new();
    let mut pen = PathPen::with_policy(&mut target, false);
    assert_eq!(path.draw(&mut pen), Err(PenError::OpenPath(OpenPathError)));
}
