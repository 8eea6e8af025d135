use crate::math::Point;

/// An atomic event of a path, exposing the stored quadratic decomposition.
///
/// Multi-point quadratic splines are stored as runs of single-control
/// quadratics with implied on-curve midpoints; this view reports them as
/// stored. See [`Segment`] for the re-joined view.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum PathEvent {
    Begin {
        at: Point,
    },
    Line {
        from: Point,
        to: Point,
    },
    Quadratic {
        from: Point,
        ctrl: Point,
        to: Point,
    },
    Cubic {
        from: Point,
        ctrl1: Point,
        ctrl2: Point,
        to: Point,
    },
    End {
        last: Point,
        first: Point,
        close: bool,
    },
}

/// A high-level segment, as drawn through the pen protocol.
///
/// Runs of stored quadratics sharing implied on-curve midpoints are
/// re-joined into a single `QCurveTo` carrying all off-curve control points
/// plus the final on-curve point.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum Segment {
    MoveTo(Point),
    LineTo(Point),
    /// A cubic Bézier: two control points followed by the end point.
    CurveTo(Point, Point, Point),
    /// A quadratic spline: off-curve control points followed by the final
    /// on-curve point.
    QCurveTo(Vec<Point>),
    ClosePath,
    EndPath,
}

impl Segment {
    /// The segment's textual identifier in the pen protocol.
    pub fn name(&self) -> &'static str {
        match self {
            Segment::MoveTo(..) => "moveTo",
            Segment::LineTo(..) => "lineTo",
            Segment::CurveTo(..) => "curveTo",
            Segment::QCurveTo(..) => "qCurveTo",
            Segment::ClosePath => "closePath",
            Segment::EndPath => "endPath",
        }
    }
}

#[test]
fn test_segment_names() {
    use crate::math::point;

    assert_eq!(Segment::MoveTo(point(0.0, 0.0)).name(), "moveTo");
    assert_eq!(Segment::LineTo(point(0.0, 0.0)).name(), "lineTo");
    assert_eq!(
        Segment::CurveTo(point(0.0, 0.0), point(1.0, 1.0), point(2.0, 2.0)).name(),
        "curveTo"
    );
    assert_eq!(Segment::QCurveTo(vec![point(0.0, 0.0), point(1.0, 1.0)]).name(), "qCurveTo");
    assert_eq!(Segment::ClosePath.name(), "closePath");
    assert_eq!(Segment::EndPath.name(), "endPath");
}
