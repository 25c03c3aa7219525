//! Primitive shapes holding only intrinsic state

use std::fmt;
use std::io::{self, Write};

use super::ShapeKind;

/// Extrinsic placement of a shape, supplied per use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Something that can describe itself at a given position
pub trait Renderable {
    /// Write one line describing this shape drawn at `position`
    fn render(&self, position: Position, out: &mut dyn Write) -> io::Result<()>;
}

/// A shared, immutable shape definition
///
/// Only intrinsic attributes live here. Where the shape is drawn is passed
/// in at render time so a single instance can be placed many times.
#[derive(Debug, PartialEq, Eq, Hash)]
pub enum Primitive {
    Circle { radius: u32 },
    Square { size: u32 },
    Point,
}

impl Primitive {
    pub fn circle(radius: u32) -> Self {
        Primitive::Circle { radius }
    }

    pub fn square(size: u32) -> Self {
        Primitive::Square { size }
    }

    pub fn point() -> Self {
        Primitive::Point
    }

    /// The kind identifier for this primitive
    pub fn kind(&self) -> ShapeKind {
        match self {
            Primitive::Circle { .. } => ShapeKind::Circle,
            Primitive::Square { .. } => ShapeKind::Square,
            Primitive::Point => ShapeKind::Point,
        }
    }

    /// The line emitted when this primitive is drawn at `position`
    pub fn describe(&self, position: Position) -> String {
        match self {
            Primitive::Circle { radius } => {
                format!("Drawing a circle with radius {} at {}", radius, position)
            }
            Primitive::Square { size } => {
                format!("Drawing a square with size {} at {}", size, position)
            }
            Primitive::Point => format!("Drawing a point at {}", position),
        }
    }
}

impl Renderable for Primitive {
    fn render(&self, position: Position, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", self.describe(position))
    }
}
