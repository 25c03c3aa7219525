//! The fixed demonstration scene

use crate::cache::ShapeCache;
use crate::error::ShapeError;
use crate::picture::Picture;

/// Placements of the demonstration scene: kind identifier and position
pub const DEMO_PLACEMENTS: [(&str, i32, i32); 5] = [
    ("circle", 10, 10),
    ("square", 20, 20),
    ("circle", 30, 30),
    ("point", 40, 40),
    ("circle", 50, 50),
];

/// Build the demonstration picture, drawing every shape from `cache`
pub fn demo_picture(cache: &mut ShapeCache) -> Result<Picture, ShapeError> {
    let mut picture = Picture::new();
    for (name, x, y) in DEMO_PLACEMENTS {
        picture.add_shape(cache.get_shape(name)?, x, y);
    }
    Ok(picture)
}
