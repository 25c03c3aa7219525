//! Identifiers for the primitive kinds a cache can hand out

use std::fmt;
use std::str::FromStr;

use crate::error::ShapeError;

/// The closed set of primitive kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShapeKind {
    Circle,
    Square,
    Point,
}

impl ShapeKind {
    /// Every kind, in declaration order
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Circle, ShapeKind::Square, ShapeKind::Point];

    /// The identifier used to request this kind from a cache
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Square => "square",
            ShapeKind::Point => "point",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShapeKind {
    type Err = ShapeError;

    /// Identifiers are matched exactly; "Circle" is not "circle"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "circle" => Ok(ShapeKind::Circle),
            "square" => Ok(ShapeKind::Square),
            "point" => Ok(ShapeKind::Point),
            other => Err(ShapeError::unknown_kind(other)),
        }
    }
}
