//! Composition of placed shapes

use std::io::{self, Write};
use std::sync::Arc;

use crate::shape::{Position, Primitive, Renderable};

/// A shared primitive together with where it is drawn
#[derive(Debug, Clone)]
pub struct PlacedShape {
    pub shape: Arc<Primitive>,
    pub position: Position,
}

/// An ordered list of placed shapes
///
/// Entries are drawn in the order they were added. The same shared
/// primitive may appear any number of times at different positions.
#[derive(Debug, Clone, Default)]
pub struct Picture {
    shapes: Vec<PlacedShape>,
}

impl Picture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place `shape` at `(x, y)`
    pub fn add_shape(&mut self, shape: Arc<Primitive>, x: i32, y: i32) {
        self.shapes.push(PlacedShape {
            shape,
            position: Position::new(x, y),
        });
    }

    /// Render every placed shape to `out`, in insertion order
    pub fn draw(&self, out: &mut dyn Write) -> io::Result<()> {
        for placed in &self.shapes {
            placed.shape.render(placed.position, out)?;
        }
        Ok(())
    }

    /// The lines `draw` would emit
    pub fn lines(&self) -> Vec<String> {
        self.shapes
            .iter()
            .map(|placed| placed.shape.describe(placed.position))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlacedShape> {
        self.shapes.iter()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Number of distinct shared instances referenced by this picture
    pub fn distinct_shapes(&self) -> usize {
        let mut seen: Vec<&Arc<Primitive>> = Vec::new();
        for placed in &self.shapes {
            if !seen.iter().any(|s| Arc::ptr_eq(s, &placed.shape)) {
                seen.push(&placed.shape);
            }
        }
        seen.len()
    }
}

impl<'a> IntoIterator for &'a Picture {
    type Item = &'a PlacedShape;
    type IntoIter = std::slice::Iter<'a, PlacedShape>;

    fn into_iter(self) -> Self::IntoIter {
        self.shapes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::ShapeCache;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_picture_draws_nothing() {
        let picture = Picture::new();
        let mut buf = Vec::new();
        picture.draw(&mut buf).unwrap();
        assert!(buf.is_empty());
        assert!(picture.is_empty());
    }

    #[test]
    fn test_draw_in_insertion_order() {
        let mut cache = ShapeCache::new();
        let mut picture = Picture::new();
        picture.add_shape(cache.get_shape("point").unwrap(), 1, 2);
        picture.add_shape(cache.get_shape("square").unwrap(), 3, 4);
        picture.add_shape(cache.get_shape("point").unwrap(), 5, 6);

        let mut buf = Vec::new();
        picture.draw(&mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Drawing a point at (1, 2)\n\
             Drawing a square with size 15 at (3, 4)\n\
             Drawing a point at (5, 6)\n"
        );
    }

    #[test]
    fn test_positions_are_per_placement() {
        let shape = Arc::new(Primitive::circle(2));
        let mut picture = Picture::new();
        picture.add_shape(Arc::clone(&shape), 0, 0);
        picture.add_shape(Arc::clone(&shape), 9, -9);

        let positions: Vec<Position> = picture.iter().map(|p| p.position).collect();
        assert_eq!(positions, vec![Position::new(0, 0), Position::new(9, -9)]);
        assert_eq!(picture.distinct_shapes(), 1);
    }

    #[test]
    fn test_no_deduplication() {
        let shape = Arc::new(Primitive::point());
        let mut picture = Picture::new();
        picture.add_shape(Arc::clone(&shape), 1, 1);
        picture.add_shape(Arc::clone(&shape), 1, 1);
        assert_eq!(picture.len(), 2);
        assert_eq!(picture.lines().len(), 2);
    }

    #[test]
    fn test_distinct_shapes_uses_identity() {
        // Equal values in separate allocations are not the same flyweight
        let mut picture = Picture::new();
        picture.add_shape(Arc::new(Primitive::point()), 0, 0);
        picture.add_shape(Arc::new(Primitive::point()), 0, 0);
        assert_eq!(picture.distinct_shapes(), 2);
    }

    #[test]
    fn test_picture_keeps_shapes_alive() {
        let mut picture = Picture::new();
        {
            let mut cache = ShapeCache::new();
            picture.add_shape(cache.get_shape("circle").unwrap(), 7, 7);
        }
        assert_eq!(picture.lines(), vec!["Drawing a circle with radius 10 at (7, 7)"]);
    }

    #[test]
    fn test_draw_propagates_sink_error() {
        struct FailingSink;

        impl Write for FailingSink {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let mut picture = Picture::new();
        picture.add_shape(Arc::new(Primitive::point()), 0, 0);
        let err = picture.draw(&mut FailingSink).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
