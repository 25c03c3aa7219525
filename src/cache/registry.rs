//! Single-threaded flyweight cache

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::sync::Arc;

use crate::config::ShapeConfig;
use crate::error::ShapeError;
use crate::shape::{Primitive, ShapeKind};

/// Hit and miss counters for a cache
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups served by an existing instance
    pub hits: u64,
    /// Lookups that constructed a new instance
    pub misses: u64,
}

impl CacheStats {
    /// Total number of successful lookups
    pub fn lookups(&self) -> u64 {
        self.hits + self.misses
    }
}

/// Hands out one shared [`Primitive`] per kind
///
/// Instances are built lazily on first request and kept for the lifetime of
/// the cache. Every later request for the same kind returns a handle to the
/// same allocation.
#[derive(Debug, Default)]
pub struct ShapeCache {
    shapes: BTreeMap<ShapeKind, Arc<Primitive>>,
    config: ShapeConfig,
    stats: CacheStats,
}

impl ShapeCache {
    /// Create an empty cache using the default intrinsic values
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty cache that builds primitives from `config`
    pub fn with_config(config: ShapeConfig) -> Self {
        Self {
            shapes: BTreeMap::new(),
            config,
            stats: CacheStats::default(),
        }
    }

    /// Look up a shape by identifier, building it on first use
    ///
    /// Unknown identifiers are rejected without touching the cache.
    pub fn get_shape(&mut self, name: &str) -> Result<Arc<Primitive>, ShapeError> {
        let kind = name.parse::<ShapeKind>().inspect_err(|_| {
            log::warn!("rejected lookup for unknown shape kind '{}'", name);
        })?;
        Ok(self.get(kind))
    }

    /// Look up a shape by kind, building it on first use
    pub fn get(&mut self, kind: ShapeKind) -> Arc<Primitive> {
        match self.shapes.entry(kind) {
            Entry::Occupied(entry) => {
                self.stats.hits += 1;
                log::trace!("cache hit for {}", kind);
                Arc::clone(entry.get())
            }
            Entry::Vacant(entry) => {
                self.stats.misses += 1;
                let shape = self.config.build(kind);
                log::debug!("cache miss for {}, created {:?}", kind, shape);
                Arc::clone(entry.insert(Arc::new(shape)))
            }
        }
    }

    /// Check if an instance of `kind` has been built
    pub fn contains(&self, kind: ShapeKind) -> bool {
        self.shapes.contains_key(&kind)
    }

    /// Number of distinct instances held
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Kinds with a cached instance, in declaration order
    pub fn kinds(&self) -> impl Iterator<Item = ShapeKind> + '_ {
        self.shapes.keys().copied()
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    pub fn config(&self) -> &ShapeConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_identifier_returns_same_instance() {
        let mut cache = ShapeCache::new();
        let a = cache.get_shape("circle").unwrap();
        let b = cache.get_shape("circle").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_distinct_identifiers_return_distinct_instances() {
        let mut cache = ShapeCache::new();
        let circle = cache.get_shape("circle").unwrap();
        let square = cache.get_shape("square").unwrap();
        let point = cache.get_shape("point").unwrap();
        assert!(!Arc::ptr_eq(&circle, &square));
        assert!(!Arc::ptr_eq(&circle, &point));
        assert!(!Arc::ptr_eq(&square, &point));
    }

    #[test]
    fn test_default_intrinsic_values() {
        let mut cache = ShapeCache::new();
        assert_eq!(*cache.get_shape("circle").unwrap(), Primitive::circle(10));
        assert_eq!(*cache.get_shape("square").unwrap(), Primitive::square(15));
        assert_eq!(*cache.get_shape("point").unwrap(), Primitive::point());
    }

    #[test]
    fn test_growth_bounded_by_distinct_identifiers() {
        let mut cache = ShapeCache::new();
        for _ in 0..50 {
            cache.get_shape("circle").unwrap();
            cache.get_shape("square").unwrap();
        }
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.stats(), CacheStats { hits: 98, misses: 2 });
        assert_eq!(cache.stats().lookups(), 100);
    }

    #[test]
    fn test_unknown_identifier_is_error() {
        let mut cache = ShapeCache::new();
        let result = cache.get_shape("triangle");
        assert!(matches!(result, Err(ShapeError::UnknownKind { .. })));
        assert!(cache.is_empty());
        assert_eq!(cache.stats(), CacheStats::default());
    }

    #[test]
    fn test_unknown_identifier_does_not_disturb_existing() {
        let mut cache = ShapeCache::new();
        let circle = cache.get_shape("circle").unwrap();
        assert!(cache.get_shape("").is_err());
        assert_eq!(cache.len(), 1);
        assert!(Arc::ptr_eq(&circle, &cache.get_shape("circle").unwrap()));
    }

    #[test]
    fn test_with_config() {
        let mut cache = ShapeCache::with_config(ShapeConfig::new().with_circle_radius(7));
        assert_eq!(*cache.get(ShapeKind::Circle), Primitive::circle(7));
        assert_eq!(cache.config().circle_radius, 7);
    }

    #[test]
    fn test_kinds_and_contains() {
        let mut cache = ShapeCache::new();
        cache.get(ShapeKind::Point);
        cache.get(ShapeKind::Circle);
        assert!(cache.contains(ShapeKind::Circle));
        assert!(!cache.contains(ShapeKind::Square));
        let kinds: Vec<_> = cache.kinds().collect();
        assert_eq!(kinds, vec![ShapeKind::Circle, ShapeKind::Point]);
    }

    #[test]
    fn test_handle_outlives_cache() {
        let shape = {
            let mut cache = ShapeCache::new();
            cache.get(ShapeKind::Square)
        };
        assert_eq!(*shape, Primitive::square(15));
    }
}
