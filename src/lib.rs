//! Shape Flyweight - shared primitive shapes placed many times
//!
//! A [`ShapeCache`] builds at most one [`Primitive`] per kind and hands out
//! shared handles to it. A [`Picture`] places those handles at individual
//! positions and draws them in order.
//!
//! # Example
//!
//! ```rust
//! use shape_flyweight::{Picture, ShapeCache};
//!
//! let mut cache = ShapeCache::new();
//! let mut picture = Picture::new();
//! picture.add_shape(cache.get_shape("circle").unwrap(), 10, 10);
//! picture.add_shape(cache.get_shape("circle").unwrap(), 30, 30);
//!
//! assert_eq!(cache.len(), 1);
//! assert_eq!(picture.lines()[1], "Drawing a circle with radius 10 at (30, 30)");
//! ```

pub mod cache;
pub mod config;
pub mod demo;
pub mod error;
pub mod picture;
pub mod shape;

pub use cache::{CacheStats, ConcurrentShapeCache, ShapeCache};
pub use config::{ConfigError, ShapeConfig};
pub use demo::demo_picture;
pub use error::ShapeError;
pub use picture::{Picture, PlacedShape};
pub use shape::{Position, Primitive, Renderable, ShapeKind};

use std::io::Write;

use thiserror::Error;

/// Errors that can occur while running the demonstration
#[derive(Debug, Error)]
pub enum Error {
    /// A shape could not be looked up
    #[error(transparent)]
    Shape(#[from] ShapeError),

    /// The configuration could not be loaded
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Output could not be written
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),
}

/// Render the demonstration scene with default intrinsic values
///
/// # Example
///
/// ```rust
/// let out = shape_flyweight::render_demo().unwrap();
/// assert_eq!(out.lines().count(), 5);
/// assert!(out.starts_with("Drawing a circle with radius 10 at (10, 10)\n"));
/// ```
pub fn render_demo() -> Result<String, Error> {
    render_demo_with_config(ShapeConfig::default())
}

/// Render the demonstration scene with custom intrinsic values
pub fn render_demo_with_config(config: ShapeConfig) -> Result<String, Error> {
    let mut out = Vec::new();
    draw_demo(config, &mut out)?;

    // Only `Display` output is written, which is always valid UTF-8
    Ok(String::from_utf8_lossy(&out).into_owned())
}

/// Draw the demonstration scene to `out`
///
/// Returns the cache the scene was drawn from so callers can inspect what
/// was shared.
pub fn draw_demo(config: ShapeConfig, out: &mut dyn Write) -> Result<ShapeCache, Error> {
    let mut cache = ShapeCache::with_config(config);
    let picture = demo_picture(&mut cache)?;
    picture.draw(out)?;
    out.flush()?;
    Ok(cache)
}
