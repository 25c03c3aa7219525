//! Flyweight caches for shared primitives
//!
//! A cache maps a kind identifier to one lazily built [`Primitive`] and
//! returns shared handles to it. Requesting `"circle"` a thousand times
//! allocates one circle.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use shape_flyweight::ShapeCache;
//!
//! let mut cache = ShapeCache::new();
//! let a = cache.get_shape("circle").unwrap();
//! let b = cache.get_shape("circle").unwrap();
//! assert!(Arc::ptr_eq(&a, &b));
//! assert!(cache.get_shape("triangle").is_err());
//! ```
//!
//! [`Primitive`]: crate::shape::Primitive

mod concurrent;
mod registry;

pub use concurrent::ConcurrentShapeCache;
pub use registry::{CacheStats, ShapeCache};
