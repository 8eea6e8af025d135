//! Boolean set operations over outline paths.
//!
//! The actual geometry mathematics (curve intersections, winding
//! computation, coordinate-precision clipping) lives behind the
//! [`GeometryEngine`] capability. This crate owns the operand bookkeeping
//! and the contract such an engine must satisfy: an [`OpBuilder`]
//! accumulates `(path, operation)` pairs and resolves them into one
//! normalized output path in a single engine invocation.
//!
//! # Examples
//!
//! ```
//! use linocut_ops::{GeometryEngine, OpBuilder, OpOptions, PathOp, ResolutionError};
//! use linocut_path::math::point;
//! use linocut_path::Path;
//!
//! // A stand-in engine good enough for disjoint shapes.
//! struct Concat;
//!
//! impl GeometryEngine for Concat {
//!     fn solve(
//!         &self,
//!         operands: &[(Path, PathOp)],
//!         _options: &OpOptions,
//!     ) -> Result<Path, ResolutionError> {
//!         let mut result = Path::new();
//!         for (path, _op) in operands {
//!             result.append(path);
//!         }
//!         Ok(result)
//!     }
//! }
//!
//! let mut path = Path::new();
//! path.move_to(point(0.0, 0.0)).unwrap();
//! path.line_to(point(10.0, 0.0)).unwrap();
//! path.line_to(point(10.0, 10.0)).unwrap();
//! path.close_path().unwrap();
//!
//! let mut builder = OpBuilder::new(Concat);
//! builder.add(path, PathOp::Union);
//! let result = builder.resolve().unwrap();
//! assert!(!result.is_empty());
//! ```

use linocut_path::Path;

use std::fmt;

/// The boolean set operation a path participates in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PathOp {
    Union,
    Intersection,
    Difference,
    ReverseDifference,
    Xor,
}

/// Parameters forwarded to the geometry engine when resolving.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct OpOptions {
    /// Normalize contour winding direction before combining. Needed when
    /// externally authored inputs wind inconsistently.
    pub fix_winding: bool,
    /// Ask the engine to keep each input contour's starting point in the
    /// output instead of an engine-chosen canonical point.
    pub keep_starting_points: bool,
}

impl OpOptions {
    pub const DEFAULT_FIX_WINDING: bool = true;
    pub const DEFAULT_KEEP_STARTING_POINTS: bool = true;

    pub fn with_fix_winding(mut self, fix_winding: bool) -> Self {
        self.fix_winding = fix_winding;
        self
    }

    pub fn with_keep_starting_points(mut self, keep_starting_points: bool) -> Self {
        self.keep_starting_points = keep_starting_points;
        self
    }
}

impl Default for OpOptions {
    fn default() -> Self {
        OpOptions {
            fix_winding: Self::DEFAULT_FIX_WINDING,
            keep_starting_points: Self::DEFAULT_KEEP_STARTING_POINTS,
        }
    }
}

/// The geometry engine's error enumeration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResolutionError {
    /// The input contains degenerate or self-overlapping geometry the
    /// engine cannot rationalize.
    DegenerateGeometry,
    /// The engine does not support the requested operation.
    UnsupportedOperation(PathOp),
}

impl fmt::Display for ResolutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolutionError::DegenerateGeometry => {
                write!(f, "degenerate geometry cannot be rationalized")
            }
            ResolutionError::UnsupportedOperation(op) => {
                write!(f, "unsupported operation: {:?}", op)
            }
        }
    }
}

impl std::error::Error for ResolutionError {}

/// The capability performing the actual boolean-operation mathematics.
///
/// The engine receives every accumulated operand in one call and is free to
/// re-parameterize intersections: output contour start points, winding and
/// point counts are engine-defined except where constrained through
/// [`OpOptions`].
pub trait GeometryEngine {
    fn solve(
        &self,
        operands: &[(Path, PathOp)],
        options: &OpOptions,
    ) -> Result<Path, ResolutionError>;
}

/// Accumulates `(path, operation)` pairs and resolves them into one
/// normalized path through a [`GeometryEngine`].
///
/// `resolve` consumes the builder, so a builder produces at most one
/// result; retrying after a failure means assembling a new builder with
/// adjusted inputs or options.
pub struct OpBuilder<E: GeometryEngine> {
    engine: E,
    options: OpOptions,
    operands: Vec<(Path, PathOp)>,
}

impl<E: GeometryEngine> OpBuilder<E> {
    /// Creates a builder with the default options (winding fixed, starting
    /// points kept).
    pub fn new(engine: E) -> Self {
        OpBuilder::with_options(engine, OpOptions::default())
    }

    pub fn with_options(engine: E, options: OpOptions) -> Self {
        OpBuilder {
            engine,
            options,
            operands: Vec::new(),
        }
    }

    /// Registers a path under a boolean-operation role.
    ///
    /// The builder takes ownership of the path; later mutations of the
    /// source can never be observed by the resolution.
    pub fn add(&mut self, path: Path, op: PathOp) {
        self.operands.push((path, op));
    }

    /// Invokes the engine once over all accumulated operands.
    pub fn resolve(self) -> Result<Path, ResolutionError> {
        self.engine.solve(&self.operands, &self.options)
    }
}

#[cfg(test)]
use linocut_path::math::point;
#[cfg(test)]
use std::cell::Cell;

#[cfg(test)]
fn square(x0: f32, y0: f32, x1: f32, y1: f32) -> Path {
    let mut path = Path::new();
    path.move_to(point(x0, y0)).unwrap();
    path.line_to(point(x1, y0)).unwrap();
    path.line_to(point(x1, y1)).unwrap();
    path.line_to(point(x0, y1)).unwrap();
    path.close_path().unwrap();
    path
}

/// Unions disjoint operands by concatenation; enough to exercise the
/// builder contract without a real engine.
#[cfg(test)]
struct ConcatUnionEngine;

#[cfg(test)]
impl GeometryEngine for ConcatUnionEngine {
    fn solve(
        &self,
        operands: &[(Path, PathOp)],
        _options: &OpOptions,
    ) -> Result<Path, ResolutionError> {
        let mut result = Path::new();
        for (path, op) in operands {
            if *op != PathOp::Union {
                return Err(ResolutionError::UnsupportedOperation(*op));
            }
            result.append(path);
        }
        Ok(result)
    }
}

#[cfg(test)]
#[derive(Default)]
struct RecordingEngine {
    seen: Cell<Option<(usize, OpOptions)>>,
}

#[cfg(test)]
impl GeometryEngine for &RecordingEngine {
    fn solve(
        &self,
        operands: &[(Path, PathOp)],
        options: &OpOptions,
    ) -> Result<Path, ResolutionError> {
        self.seen.set(Some((operands.len(), *options)));
        Ok(Path::new())
    }
}

#[cfg(test)]
struct FailingEngine;

#[cfg(test)]
impl GeometryEngine for FailingEngine {
    fn solve(
        &self,
        _operands: &[(Path, PathOp)],
        _options: &OpOptions,
    ) -> Result<Path, ResolutionError> {
        Err(ResolutionError::DegenerateGeometry)
    }
}

#[test]
fn test_default_options() {
    let options = OpOptions::default();
    assert!(options.fix_winding);
    assert!(options.keep_starting_points);

    let options = options.with_fix_winding(false).with_keep_starting_points(false);
    assert!(!options.fix_winding);
    assert!(!options.keep_starting_points);
}

#[test]
fn test_resolve_union() {
    let mut builder = OpBuilder::new(ConcatUnionEngine);
    builder.add(square(0.0, 0.0, 10.0, 10.0), PathOp::Union);
    builder.add(square(20.0, 20.0, 30.0, 30.0), PathOp::Union);
    let result = builder.resolve().unwrap();

    let mut expected = square(0.0, 0.0, 10.0, 10.0);
    expected.append(&square(20.0, 20.0, 30.0, 30.0));
    assert_eq!(result, expected);
}

#[test]
fn test_options_passed_through() {
    let engine = RecordingEngine::default();
    let options = OpOptions::default()
        .with_fix_winding(false)
        .with_keep_starting_points(false);

    let mut builder = OpBuilder::with_options(&engine, options);
    builder.add(square(0.0, 0.0, 1.0, 1.0), PathOp::Union);
    builder.add(square(2.0, 2.0, 3.0, 3.0), PathOp::Intersection);
    builder.resolve().unwrap();

    assert_eq!(engine.seen.get(), Some((2, options)));
}

#[test]
fn test_resolution_errors() {
    let mut builder = OpBuilder::new(FailingEngine);
    builder.add(square(0.0, 0.0, 1.0, 1.0), PathOp::Union);
    assert_eq!(builder.resolve(), Err(ResolutionError::DegenerateGeometry));

    let mut builder = OpBuilder::new(ConcatUnionEngine);
    builder.add(square(0.0, 0.0, 1.0, 1.0), PathOp::Difference);
    assert_eq!(
        builder.resolve(),
        Err(ResolutionError::UnsupportedOperation(PathOp::Difference))
    );
}

#[test]
fn test_added_path_is_owned() {
    let path = square(0.0, 0.0, 1.0, 1.0);
    let snapshot = path.clone();

    let mut builder = OpBuilder::new(ConcatUnionEngine);
    builder.add(path, PathOp::Union);
    // The original binding has been moved into the builder; resolving sees
    // exactly what was added.
    assert_eq!(builder.resolve().unwrap(), snapshot);
}
