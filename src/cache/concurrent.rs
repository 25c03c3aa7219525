//! Thread-safe flyweight cache

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::{CacheStats, ShapeCache};
use crate::config::ShapeConfig;
use crate::error::ShapeError;
use crate::shape::{Primitive, ShapeKind};

/// A [`ShapeCache`] that can be shared between threads
///
/// The whole lookup-or-insert runs under one lock. Two threads asking for
/// the same unseen kind therefore observe a single construction.
#[derive(Debug, Default)]
pub struct ConcurrentShapeCache {
    inner: Mutex<ShapeCache>,
}

impl ConcurrentShapeCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ShapeConfig) -> Self {
        Self {
            inner: Mutex::new(ShapeCache::with_config(config)),
        }
    }

    /// Look up a shape by identifier, building it on first use
    pub fn get_shape(&self, name: &str) -> Result<Arc<Primitive>, ShapeError> {
        self.lock().get_shape(name)
    }

    /// Look up a shape by kind, building it on first use
    pub fn get(&self, kind: ShapeKind) -> Arc<Primitive> {
        self.lock().get(kind)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        self.lock().stats()
    }

    /// Unwrap into the single-threaded cache
    pub fn into_inner(self) -> ShapeCache {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    // The map is only mutated through `Entry::insert`, so a panic elsewhere
    // cannot leave it half-updated.
    fn lock(&self) -> MutexGuard<'_, ShapeCache> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<ShapeCache> for ConcurrentShapeCache {
    fn from(cache: ShapeCache) -> Self {
        Self {
            inner: Mutex::new(cache),
        }
    }
}
