//! Typed errors surfaced by the recording pen protocol.

use std::fmt;

/// A pen configured to reject open contours was asked to leave one open,
/// either through an explicit `end_path` or implicitly by starting a new
/// contour.
///
/// The path is left as drawn so far; the caller may close the contour and
/// continue.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct OpenPathError;

impl fmt::Display for OpenPathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "open contours are not allowed by this pen")
    }
}

impl std::error::Error for OpenPathError {}

/// A drawing command was issued while no contour was in progress: either no
/// `move_to` was recorded yet, or the previous contour was already
/// terminated.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SequencingError;

impl fmt::Display for SequencingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "drawing command issued outside of a contour")
    }
}

impl std::error::Error for SequencingError {}

/// The pen protocol's error enumeration.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PenError {
    OpenPath(OpenPathError),
    Sequencing(SequencingError),
}

impl fmt::Display for PenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PenError::OpenPath(e) => write!(f, "{}", e),
            PenError::Sequencing(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for PenError {}

impl From<OpenPathError> for PenError {
    fn from(value: OpenPathError) -> Self {
        PenError::OpenPath(value)
    }
}

impl From<SequencingError> for PenError {
    fn from(value: SequencingError) -> Self {
        PenError::Sequencing(value)
    }
}
