//! Error types for termwidgets.
//!
//! Widget operations themselves never fail: they report [`Action::NoOp`]
//! instead. These errors come from the few checked constructors and setters
//! that hand a reason back to the caller.
//!
//! [`Action::NoOp`]: crate::Action::NoOp

use crate::tree::NodeId;
use std::fmt;

/// Result type alias for termwidgets operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for termwidgets operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// Text does not fit in the input buffer.
    CapacityExceeded { capacity: usize, requested: usize },
    /// Node handle refers to a node that was destroyed (or never attached).
    StaleNode(NodeId),
    /// Viewport has no drawable area after clamping.
    InvalidViewport { x1: u32, x2: u32, y1: u32, y2: u32 },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded {
                capacity,
                requested,
            } => {
                write!(
                    f,
                    "{requested} codepoints exceed the input capacity of {capacity}"
                )
            }
            Self::StaleNode(id) => write!(f, "stale node handle {id}"),
            Self::InvalidViewport { x1, x2, y1, y2 } => {
                write!(f, "empty viewport x {x1}..{x2}, y {y1}..{y2}")
            }
        }
    }
}

impl std::error::Error for Error {}
