//! The path container and its iteration views.

use crate::error::{PenError, SequencingError};
use crate::events::{PathEvent, Segment};
use crate::float_bits::{bit_equal, nearly_equal};
use crate::math::{point, Point, Transform};
use crate::pen::{PathPen, SegmentPen};
use crate::FillRule;

use std::fmt;

/// Storage form of the path events, without their operands.
///
/// `Begin` opens a contour at a stored point, `Close`/`End` terminate it
/// closed or open. The closing edge of `Close` is implied, so terminators
/// store no point of their own.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub(crate) enum Verb {
    Begin,
    LineTo,
    QuadraticTo,
    CubicTo,
    Close,
    End,
}

fn stored_points(verb: Verb) -> usize {
    match verb {
        Verb::Begin => 1,
        Verb::LineTo => 1,
        Verb::QuadraticTo => 2,
        Verb::CubicTo => 3,
        Verb::Close => 0,
        Verb::End => 0,
    }
}

fn is_terminator(verb: Verb) -> bool {
    matches!(verb, Verb::Close | Verb::End)
}

/// The implied on-curve point between two consecutive off-curve control
/// points of a quadratic spline. Decomposition and re-joining must agree on
/// this value bit-for-bit.
#[inline]
fn mid_point(a: Point, b: Point) -> Point {
    point((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}

/// An ordered sequence of contours plus a fill rule.
///
/// # Representation
///
/// Paths contain two buffers: a tape of verbs and an arena of points
/// addressed positionally by the verbs. Contours are index ranges over the
/// arena, so duplicate points are plain repeated values rather than shared
/// storage.
///
/// ```ascii
///  ______________________________
/// |       |      |           |
/// | Begin | Line | Quadratic | ...
/// |_______|______|___________|_
///  ______________________________________
/// |          |        |          |      |
/// | start x,y| to x,y | ctrl x,y | to x,y ...
/// |__________|________|__________|______|_
/// ```
///
/// A path is mutated through the pen protocol (or the equivalent direct
/// append methods below) and read back through [`iter`](Path::iter),
/// [`segments`](Path::segments), [`contours`](Path::contours) or
/// [`draw`](Path::draw). A path that ends in the middle of a contour is
/// finalized implicitly, as if terminated by `end_path`, whenever it is
/// consumed or compared.
#[derive(Clone, Default)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Path {
    points: Vec<Point>,
    verbs: Vec<Verb>,
    fill_rule: FillRule,
}

impl Path {
    /// Creates an empty path with the non-zero fill rule.
    pub fn new() -> Path {
        Path::with_fill_rule(FillRule::NonZero)
    }

    pub fn with_fill_rule(fill_rule: FillRule) -> Path {
        Path {
            points: Vec::new(),
            verbs: Vec::new(),
            fill_rule,
        }
    }

    #[inline]
    pub fn fill_rule(&self) -> FillRule {
        self.fill_rule
    }

    #[inline]
    pub fn set_fill_rule(&mut self, fill_rule: FillRule) {
        self.fill_rule = fill_rule;
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty()
    }

    /// Creates a recording pen targeting this path, allowing open contours.
    ///
    /// See [`PathPen::with_policy`] for a pen that rejects open contours.
    pub fn pen(&mut self) -> PathPen {
        PathPen::new(self)
    }

    /// Whether the last contour is still in progress.
    pub(crate) fn in_contour(&self) -> bool {
        self.verbs.last().map_or(false, |verb| !is_terminator(*verb))
    }

    fn edge(&self) -> Result<(), PenError> {
        if self.in_contour() {
            Ok(())
        } else {
            Err(SequencingError.into())
        }
    }

    /// Starts a new contour, implicitly ending any contour in progress as
    /// open.
    ///
    /// This is the direct append API; it behaves like a pen that allows
    /// open contours.
    pub fn move_to(&mut self, to: Point) -> Result<(), PenError> {
        if self.in_contour() {
            self.verbs.push(Verb::End);
        }
        self.points.push(to);
        self.verbs.push(Verb::Begin);
        Ok(())
    }

    pub fn line_to(&mut self, to: Point) -> Result<(), PenError> {
        self.edge()?;
        self.points.push(to);
        self.verbs.push(Verb::LineTo);
        Ok(())
    }

    pub fn curve_to(&mut self, ctrl1: Point, ctrl2: Point, to: Point) -> Result<(), PenError> {
        self.edge()?;
        self.points.push(ctrl1);
        self.points.push(ctrl2);
        self.points.push(to);
        self.verbs.push(Verb::CubicTo);
        Ok(())
    }

    /// Appends a quadratic spline, decomposed into single-control
    /// quadratics with implied on-curve midpoints.
    ///
    /// # Panics
    ///
    /// If fewer than two points are provided.
    pub fn qcurve_to(&mut self, points: &[Point]) -> Result<(), PenError> {
        self.edge()?;
        assert!(
            points.len() >= 2,
            "a quadratic spline needs at least one control point and an end point"
        );
        let last = points.len() - 1;
        for i in 0..last {
            let ctrl = points[i];
            let to = if i + 1 == last {
                points[last]
            } else {
                mid_point(ctrl, points[i + 1])
            };
            self.points.push(ctrl);
            self.points.push(to);
            self.verbs.push(Verb::QuadraticTo);
        }
        Ok(())
    }

    pub fn close_path(&mut self) -> Result<(), PenError> {
        self.edge()?;
        self.verbs.push(Verb::Close);
        Ok(())
    }

    pub fn end_path(&mut self) -> Result<(), PenError> {
        self.edge()?;
        self.verbs.push(Verb::End);
        Ok(())
    }

    /// Appends all contours of `other`, finalizing any contour of this path
    /// still in progress.
    pub fn append(&mut self, other: &Path) {
        if self.in_contour() {
            self.verbs.push(Verb::End);
        }
        self.points.extend_from_slice(&other.points);
        self.verbs.extend_from_slice(&other.verbs);
    }

    /// Returns this path with `transform` applied to every point.
    pub fn transformed(mut self, transform: &Transform) -> Path {
        self.apply_transform(transform);
        self
    }

    pub fn apply_transform(&mut self, transform: &Transform) {
        for p in &mut self.points {
            *p = transform.transform_point(*p);
        }
    }

    /// Iterates over the atomic events of the path, exposing the stored
    /// quadratic decomposition.
    pub fn iter(&self) -> Iter {
        Iter::new(&self.points, &self.verbs)
    }

    /// Iterates over read-only views of the contours, in path order.
    pub fn contours(&self) -> Contours {
        Contours {
            points: &self.points,
            verbs: &self.verbs,
        }
    }

    /// Iterates over the high-level segments of all contours, with
    /// quadratic runs re-joined.
    pub fn segments(&self) -> PathSegments {
        PathSegments {
            contours: self.contours(),
            current: None,
        }
    }

    /// Replays every contour onto `pen` as high-level segments, in original
    /// order. Quadratic splines are re-joined before replay, never replayed
    /// as atomic runs.
    pub fn draw<P: SegmentPen + ?Sized>(&self, pen: &mut P) -> Result<(), PenError> {
        for contour in self.contours() {
            for segment in contour.segments() {
                pen.segment(&segment)?;
            }
        }
        Ok(())
    }

    /// Reverses the point traversal order of every contour, in place.
    ///
    /// Contour order, open/closed status and the exact bit-level point
    /// multiset (duplicates included) are preserved; only traversal order
    /// and per-verb operand grouping change. Reversing twice restores the
    /// original sequence.
    pub fn reverse(&mut self) {
        let mut points = Vec::with_capacity(self.points.len());
        let mut verbs = Vec::with_capacity(self.verbs.len() + 1);
        for contour in self.contours() {
            contour.reverse_into(&mut points, &mut verbs);
        }
        self.points = points;
        self.verbs = verbs;
    }
}

impl SegmentPen for Path {
    fn move_to(&mut self, to: Point) -> Result<(), PenError> {
        Path::move_to(self, to)
    }

    fn line_to(&mut self, to: Point) -> Result<(), PenError> {
        Path::line_to(self, to)
    }

    fn curve_to(&mut self, ctrl1: Point, ctrl2: Point, to: Point) -> Result<(), PenError> {
        Path::curve_to(self, ctrl1, ctrl2, to)
    }

    fn qcurve_to(&mut self, points: &[Point]) -> Result<(), PenError> {
        Path::qcurve_to(self, points)
    }

    fn close_path(&mut self) -> Result<(), PenError> {
        Path::close_path(self)
    }

    fn end_path(&mut self) -> Result<(), PenError> {
        Path::end_path(self)
    }
}

fn implicit_end(verbs: &[Verb]) -> bool {
    verbs.last().map_or(false, |verb| !is_terminator(*verb))
}

impl PartialEq for Path {
    /// Structural equality: same fill rule, same contours, same verbs and
    /// points in order. Points compare bit-for-bit and a trailing
    /// unterminated contour compares as if ended open.
    fn eq(&self, other: &Path) -> bool {
        let verbs = self
            .verbs
            .iter()
            .copied()
            .chain(implicit_end(&self.verbs).then(|| Verb::End));
        let other_verbs = other
            .verbs
            .iter()
            .copied()
            .chain(implicit_end(&other.verbs).then(|| Verb::End));

        self.fill_rule == other.fill_rule
            && verbs.eq(other_verbs)
            && self.points.len() == other.points.len()
            && self
                .points
                .iter()
                .zip(&other.points)
                .all(|(a, b)| bit_equal(*a, *b))
    }
}

impl fmt::Debug for Path {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        fn write_point(formatter: &mut fmt::Formatter, point: Point) -> fmt::Result {
            write!(formatter, " ")?;
            fmt::Debug::fmt(&point.x, formatter)?;
            write!(formatter, " ")?;
            fmt::Debug::fmt(&point.y, formatter)
        }

        write!(formatter, "\"")?;
        for event in self.iter() {
            match event {
                PathEvent::Begin { at } => {
                    write!(formatter, " M")?;
                    write_point(formatter, at)?;
                }
                PathEvent::Line { to, .. } => {
                    write!(formatter, " L")?;
                    write_point(formatter, to)?;
                }
                PathEvent::Quadratic { ctrl, to, .. } => {
                    write!(formatter, " Q")?;
                    write_point(formatter, ctrl)?;
                    write_point(formatter, to)?;
                }
                PathEvent::Cubic {
                    ctrl1, ctrl2, to, ..
                } => {
                    write!(formatter, " C")?;
                    write_point(formatter, ctrl1)?;
                    write_point(formatter, ctrl2)?;
                    write_point(formatter, to)?;
                }
                PathEvent::End { close, .. } => {
                    if close {
                        write!(formatter, " Z")?;
                    }
                }
            }
        }
        write!(formatter, "\"")
    }
}

impl<'l> IntoIterator for &'l Path {
    type Item = PathEvent;
    type IntoIter = Iter<'l>;

    fn into_iter(self) -> Iter<'l> {
        self.iter()
    }
}

/// Atomic event iterator for a path.
///
/// A trailing contour without a terminator yields a synthesized open `End`
/// event.
#[derive(Clone)]
pub struct Iter<'l> {
    points: std::slice::Iter<'l, Point>,
    verbs: std::slice::Iter<'l, Verb>,
    current: Point,
    first: Point,
    in_contour: bool,
}

impl<'l> Iter<'l> {
    fn new(points: &'l [Point], verbs: &'l [Verb]) -> Self {
        Iter {
            points: points.iter(),
            verbs: verbs.iter(),
            current: point(0.0, 0.0),
            first: point(0.0, 0.0),
            in_contour: false,
        }
    }

    fn next_point(&mut self) -> Point {
        self.points
            .next()
            .copied()
            .unwrap_or_else(|| point(f32::NAN, f32::NAN))
    }
}

impl<'l> Iterator for Iter<'l> {
    type Item = PathEvent;

    fn next(&mut self) -> Option<PathEvent> {
        match self.verbs.next() {
            Some(Verb::Begin) => {
                self.current = self.next_point();
                self.first = self.current;
                self.in_contour = true;
                Some(PathEvent::Begin { at: self.current })
            }
            Some(Verb::LineTo) => {
                let from = self.current;
                self.current = self.next_point();
                Some(PathEvent::Line {
                    from,
                    to: self.current,
                })
            }
            Some(Verb::QuadraticTo) => {
                let from = self.current;
                let ctrl = self.next_point();
                self.current = self.next_point();
                Some(PathEvent::Quadratic {
                    from,
                    ctrl,
                    to: self.current,
                })
            }
            Some(Verb::CubicTo) => {
                let from = self.current;
                let ctrl1 = self.next_point();
                let ctrl2 = self.next_point();
                self.current = self.next_point();
                Some(PathEvent::Cubic {
                    from,
                    ctrl1,
                    ctrl2,
                    to: self.current,
                })
            }
            Some(Verb::Close) => {
                let last = self.current;
                self.current = self.first;
                self.in_contour = false;
                Some(PathEvent::End {
                    last,
                    first: self.first,
                    close: true,
                })
            }
            Some(Verb::End) => {
                let last = self.current;
                self.current = self.first;
                self.in_contour = false;
                Some(PathEvent::End {
                    last,
                    first: self.first,
                    close: false,
                })
            }
            None if self.in_contour => {
                self.in_contour = false;
                Some(PathEvent::End {
                    last: self.current,
                    first: self.first,
                    close: false,
                })
            }
            None => None,
        }
    }
}

/// Iterator over a path's contours, in path order.
#[derive(Clone)]
pub struct Contours<'l> {
    points: &'l [Point],
    verbs: &'l [Verb],
}

impl<'l> Iterator for Contours<'l> {
    type Item = ContourSlice<'l>;

    fn next(&mut self) -> Option<ContourSlice<'l>> {
        if self.verbs.is_empty() {
            return None;
        }
        debug_assert!(matches!(self.verbs[0], Verb::Begin));

        let mut num_points = 0;
        let mut num_verbs = 0;
        while num_verbs < self.verbs.len() {
            let verb = self.verbs[num_verbs];
            num_points += stored_points(verb);
            num_verbs += 1;
            if is_terminator(verb) {
                break;
            }
        }

        let (points, rest_points) = self.points.split_at(num_points);
        let (verbs, rest_verbs) = self.verbs.split_at(num_verbs);
        self.points = rest_points;
        self.verbs = rest_verbs;

        Some(ContourSlice { points, verbs })
    }
}

/// A read-only view over one contour of a path.
#[derive(Copy, Clone, Debug)]
pub struct ContourSlice<'l> {
    points: &'l [Point],
    verbs: &'l [Verb],
}

impl<'l> ContourSlice<'l> {
    /// All recorded points of the contour, control points included.
    pub fn points(&self) -> &'l [Point] {
        self.points
    }

    /// Whether the contour is terminated by a closing edge.
    pub fn is_closed(&self) -> bool {
        matches!(self.verbs.last(), Some(Verb::Close))
    }

    /// The contour's starting point.
    pub fn first_point(&self) -> Option<Point> {
        self.points.first().copied()
    }

    /// The last recorded on-curve point before the terminator.
    pub fn last_point(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// The high-level segments of this contour, with quadratic runs
    /// re-joined.
    pub fn segments(self) -> Segments<'l> {
        Segments::new(self)
    }

    fn reverse_into(self, points: &mut Vec<Point>, verbs: &mut Vec<Verb>) {
        let n = self.points.len();
        if n == 0 {
            return;
        }
        let terminated = self.verbs.last().map_or(false, |verb| is_terminator(*verb));
        let edges = &self.verbs[1..self.verbs.len() - terminated as usize];

        points.push(self.points[n - 1]);
        verbs.push(Verb::Begin);

        // `p` indexes just past the stored points of the current verb; each
        // reversed verb keeps its kind but targets the previous endpoint.
        let mut p = n;
        for verb in edges.iter().rev() {
            match verb {
                Verb::LineTo => {
                    points.push(self.points[p - 2]);
                    verbs.push(Verb::LineTo);
                    p -= 1;
                }
                Verb::QuadraticTo => {
                    points.push(self.points[p - 2]);
                    points.push(self.points[p - 3]);
                    verbs.push(Verb::QuadraticTo);
                    p -= 2;
                }
                Verb::CubicTo => {
                    points.push(self.points[p - 2]);
                    points.push(self.points[p - 3]);
                    points.push(self.points[p - 4]);
                    verbs.push(Verb::CubicTo);
                    p -= 3;
                }
                Verb::Begin | Verb::Close | Verb::End => unreachable!(),
            }
        }
        debug_assert_eq!(p, 1);

        verbs.push(if self.is_closed() { Verb::Close } else { Verb::End });
    }
}

/// High-level segment iterator over one contour.
///
/// Runs of stored quadratics sharing implied on-curve midpoints are
/// re-joined into a single `QCurveTo`. For a closed contour whose last
/// point drifted within floating tolerance of its start, the trailing point
/// is reported as the start point, so the contour closes on a single
/// coherent point without a synthesized closing edge.
#[derive(Clone)]
pub struct Segments<'l> {
    points: &'l [Point],
    verbs: &'l [Verb],
    p: usize,
    v: usize,
    done: bool,
    snap_to: Option<Point>,
}

impl<'l> Segments<'l> {
    fn new(contour: ContourSlice<'l>) -> Self {
        let snap_to = match (contour.first_point(), contour.last_point()) {
            (Some(first), Some(last))
                if contour.is_closed()
                    && contour.points.len() > 1
                    && !bit_equal(first, last)
                    && nearly_equal(first, last) =>
            {
                Some(first)
            }
            _ => None,
        };

        Segments {
            points: contour.points,
            verbs: contour.verbs,
            p: 0,
            v: 0,
            done: contour.verbs.is_empty(),
            snap_to,
        }
    }

    /// The endpoint at `index`, snapped onto the contour's starting point
    /// when it is the almost-equal final point of a closed contour.
    fn endpoint(&self, index: usize) -> Point {
        if index + 1 == self.points.len() {
            if let Some(start) = self.snap_to {
                return start;
            }
        }
        self.points[index]
    }
}

impl<'l> Iterator for Segments<'l> {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        if self.done {
            return None;
        }
        if self.v == 0 {
            debug_assert!(matches!(self.verbs[0], Verb::Begin));
            self.v = 1;
            self.p = 1;
            return Some(Segment::MoveTo(self.points[0]));
        }
        if self.v == self.verbs.len() {
            // The contour ended without a terminator; finalize it as open.
            self.done = true;
            return Some(Segment::EndPath);
        }

        let verb = self.verbs[self.v];
        self.v += 1;
        match verb {
            Verb::LineTo => {
                let to = self.endpoint(self.p);
                self.p += 1;
                Some(Segment::LineTo(to))
            }
            Verb::CubicTo => {
                let ctrl1 = self.points[self.p];
                let ctrl2 = self.points[self.p + 1];
                let to = self.endpoint(self.p + 2);
                self.p += 3;
                Some(Segment::CurveTo(ctrl1, ctrl2, to))
            }
            Verb::QuadraticTo => {
                let mut spline = vec![self.points[self.p]];
                let mut to = self.points[self.p + 1];
                self.p += 2;
                // Extend the run for as long as the shared on-curve point is
                // the implied midpoint of the surrounding control points.
                while self.v < self.verbs.len()
                    && self.verbs[self.v] == Verb::QuadraticTo
                    && bit_equal(to, mid_point(spline[spline.len() - 1], self.points[self.p]))
                {
                    spline.push(self.points[self.p]);
                    to = self.points[self.p + 1];
                    self.p += 2;
                    self.v += 1;
                }
                if self.p == self.points.len() {
                    if let Some(start) = self.snap_to {
                        to = start;
                    }
                }
                spline.push(to);
                Some(Segment::QCurveTo(spline))
            }
            Verb::Close => {
                self.done = true;
                Some(Segment::ClosePath)
            }
            Verb::End => {
                self.done = true;
                Some(Segment::EndPath)
            }
            Verb::Begin => unreachable!(),
        }
    }
}

/// High-level segment iterator over a whole path, contour by contour.
#[derive(Clone)]
pub struct PathSegments<'l> {
    contours: Contours<'l>,
    current: Option<Segments<'l>>,
}

impl<'l> Iterator for PathSegments<'l> {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        loop {
            if let Some(segments) = &mut self.current {
                if let Some(segment) = segments.next() {
                    return Some(segment);
                }
            }
            self.current = Some(self.contours.next()?.segments());
        }
    }
}

#[cfg(test)]
use crate::events::Segment::{ClosePath, CurveTo, EndPath, LineTo, MoveTo, QCurveTo};
#[cfg(test)]
use crate::float_bits::bits2float;

#[cfg(test)]
fn build(operations: &[Segment]) -> Path {
    let mut path = Path::new();
    let mut pen = path.pen();
    for operation in operations {
        pen.segment(operation).unwrap();
    }
    path
}

#[cfg(test)]
fn check_reverse(operations: &[Segment], expected: &[Segment]) {
    let mut path = build(operations);
    path.reverse();
    let segments: Vec<Segment> = path.segments().collect();
    assert_eq!(segments, expected);
}

#[test]
fn test_eq() {
    let path1 = Path::new();
    let mut path2 = Path::new();
    assert_eq!(path1, path2);

    path2.move_to(point(0.0, 0.0)).unwrap();
    assert_ne!(path1, path2);

    let mut path3 = Path::new();
    path3.move_to(point(0.0, 0.0)).unwrap();
    assert_eq!(path2, path3);

    path3.set_fill_rule(FillRule::EvenOdd);
    assert_ne!(path2, path3);
}

#[test]
fn test_eq_implicit_end() {
    let mut path1 = Path::new();
    path1.move_to(point(1.0, 2.0)).unwrap();

    let mut path2 = Path::new();
    path2.move_to(point(1.0, 2.0)).unwrap();
    path2.end_path().unwrap();

    assert_eq!(path1, path2);
}

#[test]
fn test_copy() {
    let mut path = Path::new();
    path.move_to(point(0.0, 0.0)).unwrap();
    path.line_to(point(1.0, 1.0)).unwrap();
    path.close_path().unwrap();

    assert_eq!(path, path.clone());
}

#[test]
fn test_segments_restartable() {
    let mut path = Path::new();
    path.move_to(point(0.0, 0.0)).unwrap();
    path.qcurve_to(&[point(1.0, 1.0), point(2.0, 2.0)]).unwrap();
    path.close_path().unwrap();

    let first: Vec<Segment> = path.segments().collect();
    let second: Vec<Segment> = path.segments().collect();
    assert_eq!(first, second);
}

#[test]
fn test_iter_implicit_end() {
    let mut path = Path::new();
    path.move_to(point(0.0, 0.0)).unwrap();
    path.line_to(point(1.0, 1.0)).unwrap();

    let mut it = path.iter();
    assert_eq!(it.next(), Some(PathEvent::Begin { at: point(0.0, 0.0) }));
    assert_eq!(
        it.next(),
        Some(PathEvent::Line {
            from: point(0.0, 0.0),
            to: point(1.0, 1.0),
        })
    );
    assert_eq!(
        it.next(),
        Some(PathEvent::End {
            last: point(1.0, 1.0),
            first: point(0.0, 0.0),
            close: false,
        })
    );
    assert_eq!(it.next(), None);
}

#[test]
fn test_append() {
    let mut open = Path::new();
    open.move_to(point(0.0, 0.0)).unwrap();
    open.line_to(point(1.0, 1.0)).unwrap();

    let mut square = Path::new();
    square.move_to(point(5.0, 5.0)).unwrap();
    square.line_to(point(6.0, 5.0)).unwrap();
    square.line_to(point(6.0, 6.0)).unwrap();
    square.close_path().unwrap();

    open.append(&square);
    let segments: Vec<Segment> = open.segments().collect();
    assert_eq!(
        segments,
        vec![
            MoveTo(point(0.0, 0.0)),
            LineTo(point(1.0, 1.0)),
            EndPath,
            MoveTo(point(5.0, 5.0)),
            LineTo(point(6.0, 5.0)),
            LineTo(point(6.0, 6.0)),
            ClosePath,
        ]
    );
}

#[test]
fn test_transformed() {
    let mut path = Path::new();
    path.move_to(point(0.0, 0.0)).unwrap();
    path.line_to(point(1.0, 0.0)).unwrap();
    path.close_path().unwrap();

    let translated = path.transformed(&Transform::translation(10.0, -2.0));
    let segments: Vec<Segment> = translated.segments().collect();
    assert_eq!(
        segments,
        vec![
            MoveTo(point(10.0, -2.0)),
            LineTo(point(11.0, -2.0)),
            ClosePath,
        ]
    );
}

#[test]
fn test_reverse_lines() {
    check_reverse(
        &[
            MoveTo(point(0.0, 0.0)),
            LineTo(point(1.0, 1.0)),
            LineTo(point(2.0, 2.0)),
            LineTo(point(3.0, 3.0)),
            ClosePath,
        ],
        &[
            MoveTo(point(3.0, 3.0)),
            LineTo(point(2.0, 2.0)),
            LineTo(point(1.0, 1.0)),
            LineTo(point(0.0, 0.0)),
            ClosePath,
        ],
    );
    // A trailing point duplicating the start is kept verbatim.
    check_reverse(
        &[
            MoveTo(point(0.0, 0.0)),
            LineTo(point(1.0, 1.0)),
            LineTo(point(2.0, 2.0)),
            LineTo(point(0.0, 0.0)),
            ClosePath,
        ],
        &[
            MoveTo(point(0.0, 0.0)),
            LineTo(point(2.0, 2.0)),
            LineTo(point(1.0, 1.0)),
            LineTo(point(0.0, 0.0)),
            ClosePath,
        ],
    );
    // So is a duplicate right after the start.
    check_reverse(
        &[
            MoveTo(point(0.0, 0.0)),
            LineTo(point(0.0, 0.0)),
            LineTo(point(1.0, 1.0)),
            LineTo(point(2.0, 2.0)),
            ClosePath,
        ],
        &[
            MoveTo(point(2.0, 2.0)),
            LineTo(point(1.0, 1.0)),
            LineTo(point(0.0, 0.0)),
            LineTo(point(0.0, 0.0)),
            ClosePath,
        ],
    );
    check_reverse(
        &[
            MoveTo(point(0.0, 0.0)),
            LineTo(point(1.0, 1.0)),
            ClosePath,
        ],
        &[
            MoveTo(point(1.0, 1.0)),
            LineTo(point(0.0, 0.0)),
            ClosePath,
        ],
    );
}

#[test]
fn test_reverse_curves() {
    check_reverse(
        &[
            MoveTo(point(0.0, 0.0)),
            CurveTo(point(1.0, 1.0), point(2.0, 2.0), point(3.0, 3.0)),
            CurveTo(point(4.0, 4.0), point(5.0, 5.0), point(0.0, 0.0)),
            ClosePath,
        ],
        &[
            MoveTo(point(0.0, 0.0)),
            CurveTo(point(5.0, 5.0), point(4.0, 4.0), point(3.0, 3.0)),
            CurveTo(point(2.0, 2.0), point(1.0, 1.0), point(0.0, 0.0)),
            ClosePath,
        ],
    );
    check_reverse(
        &[
            MoveTo(point(0.0, 0.0)),
            CurveTo(point(1.0, 1.0), point(2.0, 2.0), point(3.0, 3.0)),
            CurveTo(point(4.0, 4.0), point(5.0, 5.0), point(6.0, 6.0)),
            ClosePath,
        ],
        &[
            MoveTo(point(6.0, 6.0)),
            CurveTo(point(5.0, 5.0), point(4.0, 4.0), point(3.0, 3.0)),
            CurveTo(point(2.0, 2.0), point(1.0, 1.0), point(0.0, 0.0)),
            ClosePath,
        ],
    );
    check_reverse(
        &[
            MoveTo(point(0.0, 0.0)),
            LineTo(point(1.0, 1.0)),
            CurveTo(point(2.0, 2.0), point(3.0, 3.0), point(4.0, 4.0)),
            CurveTo(point(5.0, 5.0), point(6.0, 6.0), point(7.0, 7.0)),
            ClosePath,
        ],
        &[
            MoveTo(point(7.0, 7.0)),
            CurveTo(point(6.0, 6.0), point(5.0, 5.0), point(4.0, 4.0)),
            CurveTo(point(3.0, 3.0), point(2.0, 2.0), point(1.0, 1.0)),
            LineTo(point(0.0, 0.0)),
            ClosePath,
        ],
    );
}

#[test]
fn test_reverse_quadratic_splines() {
    check_reverse(
        &[
            MoveTo(point(0.0, 0.0)),
            QCurveTo(vec![point(1.0, 1.0), point(2.5, 2.5)]),
            QCurveTo(vec![point(3.0, 3.0), point(0.0, 0.0)]),
            ClosePath,
        ],
        &[
            MoveTo(point(0.0, 0.0)),
            QCurveTo(vec![point(3.0, 3.0), point(2.5, 2.5)]),
            QCurveTo(vec![point(1.0, 1.0), point(0.0, 0.0)]),
            ClosePath,
        ],
    );
    check_reverse(
        &[
            MoveTo(point(0.0, 0.0)),
            QCurveTo(vec![point(1.0, 1.0), point(2.5, 2.5)]),
            QCurveTo(vec![point(3.0, 3.0), point(4.0, 4.0)]),
            ClosePath,
        ],
        &[
            MoveTo(point(4.0, 4.0)),
            QCurveTo(vec![point(3.0, 3.0), point(2.5, 2.5)]),
            QCurveTo(vec![point(1.0, 1.0), point(0.0, 0.0)]),
            ClosePath,
        ],
    );
    check_reverse(
        &[
            MoveTo(point(0.0, 0.0)),
            LineTo(point(1.0, 1.0)),
            QCurveTo(vec![point(2.0, 2.0), point(3.0, 3.0)]),
            ClosePath,
        ],
        &[
            MoveTo(point(3.0, 3.0)),
            QCurveTo(vec![point(2.0, 2.0), point(1.0, 1.0)]),
            LineTo(point(0.0, 0.0)),
            ClosePath,
        ],
    );
}

#[test]
fn test_reverse_degenerate() {
    check_reverse(&[], &[]);
    check_reverse(
        &[MoveTo(point(0.0, 0.0)), EndPath],
        &[MoveTo(point(0.0, 0.0)), EndPath],
    );
    check_reverse(
        &[MoveTo(point(0.0, 0.0)), ClosePath],
        &[MoveTo(point(0.0, 0.0)), ClosePath],
    );
}

#[test]
fn test_reverse_open_contours() {
    check_reverse(
        &[
            MoveTo(point(0.0, 0.0)),
            LineTo(point(1.0, 1.0)),
            EndPath,
        ],
        &[
            MoveTo(point(1.0, 1.0)),
            LineTo(point(0.0, 0.0)),
            EndPath,
        ],
    );
    check_reverse(
        &[
            MoveTo(point(0.0, 0.0)),
            CurveTo(point(1.0, 1.0), point(2.0, 2.0), point(3.0, 3.0)),
            EndPath,
        ],
        &[
            MoveTo(point(3.0, 3.0)),
            CurveTo(point(2.0, 2.0), point(1.0, 1.0), point(0.0, 0.0)),
            EndPath,
        ],
    );
    check_reverse(
        &[
            MoveTo(point(0.0, 0.0)),
            CurveTo(point(1.0, 1.0), point(2.0, 2.0), point(3.0, 3.0)),
            LineTo(point(4.0, 4.0)),
            EndPath,
        ],
        &[
            MoveTo(point(4.0, 4.0)),
            LineTo(point(3.0, 3.0)),
            CurveTo(point(2.0, 2.0), point(1.0, 1.0), point(0.0, 0.0)),
            EndPath,
        ],
    );
    check_reverse(
        &[
            MoveTo(point(0.0, 0.0)),
            LineTo(point(1.0, 1.0)),
            CurveTo(point(2.0, 2.0), point(3.0, 3.0), point(4.0, 4.0)),
            EndPath,
        ],
        &[
            MoveTo(point(4.0, 4.0)),
            CurveTo(point(3.0, 3.0), point(2.0, 2.0), point(1.0, 1.0)),
            LineTo(point(0.0, 0.0)),
            EndPath,
        ],
    );
}

#[test]
fn test_reverse_duplicate_point_spline() {
    // Quadratic runs with duplicated control points, from a cu2qu
    // conversion. The duplicates survive reversal verbatim and the runs
    // re-join at the authored boundaries.
    check_reverse(
        &[
            MoveTo(point(848.0, 348.0)),
            LineTo(point(848.0, 348.0)),
            QCurveTo(vec![
                point(848.0, 526.0),
                point(649.0, 704.0),
                point(449.0, 704.0),
            ]),
            QCurveTo(vec![
                point(449.0, 704.0),
                point(248.0, 704.0),
                point(50.0, 526.0),
                point(50.0, 348.0),
            ]),
            LineTo(point(50.0, 348.0)),
            QCurveTo(vec![
                point(50.0, 348.0),
                point(50.0, 171.0),
                point(248.0, -3.0),
                point(449.0, -3.0),
            ]),
            QCurveTo(vec![
                point(449.0, -3.0),
                point(649.0, -3.0),
                point(848.0, 171.0),
                point(848.0, 348.0),
            ]),
            ClosePath,
        ],
        &[
            MoveTo(point(848.0, 348.0)),
            QCurveTo(vec![
                point(848.0, 171.0),
                point(649.0, -3.0),
                point(449.0, -3.0),
                point(449.0, -3.0),
            ]),
            QCurveTo(vec![
                point(248.0, -3.0),
                point(50.0, 171.0),
                point(50.0, 348.0),
                point(50.0, 348.0),
            ]),
            LineTo(point(50.0, 348.0)),
            QCurveTo(vec![
                point(50.0, 526.0),
                point(248.0, 704.0),
                point(449.0, 704.0),
                point(449.0, 704.0),
            ]),
            QCurveTo(vec![
                point(649.0, 704.0),
                point(848.0, 526.0),
                point(848.0, 348.0),
            ]),
            LineTo(point(848.0, 348.0)),
            ClosePath,
        ],
    );
}

#[test]
fn test_reverse_is_involution() {
    let original = build(&[
        MoveTo(point(0.0, 0.0)),
        LineTo(point(1.0, 1.0)),
        QCurveTo(vec![point(2.0, 2.0), point(3.0, 1.0), point(4.0, 0.0)]),
        CurveTo(point(5.0, 0.0), point(5.0, 2.0), point(0.0, 0.0)),
        ClosePath,
        MoveTo(point(10.0, 10.0)),
        LineTo(point(11.0, 10.0)),
        EndPath,
    ]);

    let mut path = original.clone();
    path.reverse();
    assert_ne!(path, original);
    path.reverse();
    assert_eq!(path, original);
}

#[test]
fn test_reverse_preserves_point_multiset() {
    let mut path = build(&[
        MoveTo(point(0.0, 0.0)),
        LineTo(point(0.0, 0.0)),
        QCurveTo(vec![point(1.0, 1.0), point(1.0, 1.0), point(2.0, 0.0)]),
        ClosePath,
    ]);
    let mut before: Vec<(u32, u32)> = path
        .contours()
        .flat_map(|c| c.points().to_vec())
        .map(|p| (p.x.to_bits(), p.y.to_bits()))
        .collect();

    path.reverse();
    let mut after: Vec<(u32, u32)> = path
        .contours()
        .flat_map(|c| c.points().to_vec())
        .map(|p| (p.x.to_bits(), p.y.to_bits()))
        .collect();

    before.sort_unstable();
    after.sort_unstable();
    assert_eq!(before, after);
}

#[test]
fn test_duplicate_start_point() {
    // Two contours built from exact bit patterns; on the second one the
    // last and first points' Y coordinates differ by a single bit:
    // 0x43881798 != 0x43881797.
    let mut path = Path::new();
    path.move_to(point(
        bits2float(0x43480000), // 200
        bits2float(0x43db8ce9), // 439.101
    ))
    .unwrap();
    path.line_to(point(
        bits2float(0x43480000), // 200
        bits2float(0x4401c000), // 519
    ))
    .unwrap();
    path.curve_to(
        point(bits2float(0x43480000), bits2float(0x441f0000)), // 200, 636
        point(bits2float(0x43660000), bits2float(0x44340000)), // 230, 720
        point(bits2float(0x43c80000), bits2float(0x44340000)), // 400, 720
    )
    .unwrap();
    path.curve_to(
        point(bits2float(0x4404c000), bits2float(0x44340000)), // 531, 720
        point(bits2float(0x440d0000), bits2float(0x442b8000)), // 564, 686
        point(bits2float(0x44118000), bits2float(0x4416c000)), // 582, 603
    )
    .unwrap();
    path.line_to(point(
        bits2float(0x442cc000), // 691
        bits2float(0x441c8000), // 626
    ))
    .unwrap();
    path.curve_to(
        point(bits2float(0x44260000), bits2float(0x443d4000)), // 664, 757
        point(bits2float(0x44114000), bits2float(0x444a8000)), // 581, 810
        point(bits2float(0x43c88000), bits2float(0x444a8000)), // 401, 810
    )
    .unwrap();
    path.curve_to(
        point(bits2float(0x43350000), bits2float(0x444a8000)), // 181, 810
        point(bits2float(0x42c80000), bits2float(0x442e0000)), // 100, 696
        point(bits2float(0x42c80000), bits2float(0x4401c000)), // 100, 519
    )
    .unwrap();
    path.line_to(point(
        bits2float(0x42c80000), // 100
        bits2float(0x438a8000), // 277
    ))
    .unwrap();
    path.curve_to(
        point(bits2float(0x42c80000), bits2float(0x42cc0000)), // 100, 102
        point(bits2float(0x433e0000), bits2float(0xc1200000)), // 190, -10
        point(bits2float(0x43cd0000), bits2float(0xc1200000)), // 410, -10
    )
    .unwrap();
    path.curve_to(
        point(bits2float(0x441d8000), bits2float(0xc1200000)), // 630, -10
        point(bits2float(0x442f0000), bits2float(0x42e60000)), // 700, 115
        point(bits2float(0x442f0000), bits2float(0x437a0000)), // 700, 250
    )
    .unwrap();
    path.line_to(point(
        bits2float(0x442f0000), // 700
        bits2float(0x43880000), // 272
    ))
    .unwrap();
    path.curve_to(
        point(bits2float(0x442f0000), bits2float(0x43d18000)), // 700, 419
        point(bits2float(0x44164000), bits2float(0x43fa0000)), // 601, 500
        point(bits2float(0x43c88000), bits2float(0x43fa0000)), // 401, 500
    )
    .unwrap();
    path.curve_to(
        point(bits2float(0x43964752), bits2float(0x43fa0000)), // 300.557, 500
        point(bits2float(0x436db1ed), bits2float(0x43ef6824)), // 237.695, 478.814
        point(bits2float(0x43480000), bits2float(0x43db8ce9)), // 200, 439.101
    )
    .unwrap();
    path.close_path().unwrap();

    path.move_to(point(
        bits2float(0x434805cb), // 200.023
        bits2float(0x43881798), // 272.184
    ))
    .unwrap();
    path.curve_to(
        point(bits2float(0x43493da4), bits2float(0x43b2a869)), // 201.241, 357.316
        point(bits2float(0x437bd6b1), bits2float(0x43cd0000)), // 251.839, 410
        point(bits2float(0x43c80000), bits2float(0x43cd0000)), // 400, 410
    )
    .unwrap();
    path.curve_to(
        point(bits2float(0x44098000), bits2float(0x43cd0000)), // 550, 410
        point(bits2float(0x44160000), bits2float(0x43b20000)), // 600, 356
        point(bits2float(0x44160000), bits2float(0x43868000)), // 600, 269
    )
    .unwrap();
    path.line_to(point(
        bits2float(0x44160000), // 600
        bits2float(0x43808000), // 257
    ))
    .unwrap();
    path.curve_to(
        point(bits2float(0x44160000), bits2float(0x43330000)), // 600, 179
        point(bits2float(0x44110000), bits2float(0x429c0000)), // 580, 78
        point(bits2float(0x43cd0000), bits2float(0x429c0000)), // 410, 78
    )
    .unwrap();
    path.curve_to(
        point(bits2float(0x43725298), bits2float(0x429c0000)), // 242.323, 78
        point(bits2float(0x43491e05), bits2float(0x431ccd43)), // 201.117, 156.802
        point(bits2float(0x434805cb), bits2float(0x43881797)), // 200.023, 272.184
    )
    .unwrap();
    path.close_path().unwrap();

    let contours: Vec<ContourSlice> = path.contours().collect();
    assert_eq!(contours.len(), 2);

    let points = contours[1].points();
    assert_ne!(points[0], points[points.len() - 1]);
    assert!(nearly_equal(points[0], points[points.len() - 1]));

    // When read back as segments, the almost-equal last and first points are
    // treated as exactly equal, with no extra closing lineTo.
    for contour in path.contours() {
        let segments: Vec<Segment> = contour.segments().collect();
        assert_eq!(segments.last().unwrap().name(), "closePath");
        let first = &segments[0];
        let last = &segments[segments.len() - 2];
        match (first, last) {
            (MoveTo(first_point), CurveTo(_, _, last_point)) => {
                assert_eq!(last_point, first_point);
            }
            _ => panic!("unexpected segments: {:?} {:?}", first, last),
        }
    }
}
