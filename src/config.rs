//! Configuration for the intrinsic values of cached primitives

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::shape::{Primitive, ShapeKind};

/// Errors that can occur when loading a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Intrinsic values used when a cache constructs a primitive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeConfig {
    /// Radius given to the shared circle
    pub circle_radius: u32,

    /// Side length given to the shared square
    pub square_size: u32,
}

/// TOML structure for deserializing configs
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlConfig {
    shapes: Option<TomlShapes>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlShapes {
    circle_radius: Option<u32>,
    square_size: Option<u32>,
}

impl Default for ShapeConfig {
    fn default() -> Self {
        Self {
            circle_radius: 10,
            square_size: 15,
        }
    }
}

impl ShapeConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the circle radius
    pub fn with_circle_radius(mut self, radius: u32) -> Self {
        self.circle_radius = radius;
        self
    }

    /// Set the square size
    pub fn with_square_size(mut self, size: u32) -> Self {
        self.square_size = size;
        self
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load configuration from a TOML string
    ///
    /// Keys that are absent keep their default value.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let parsed: TomlConfig = toml::from_str(content)?;
        let mut config = Self::default();

        if let Some(shapes) = parsed.shapes {
            if let Some(radius) = shapes.circle_radius {
                config.circle_radius = radius;
            }
            if let Some(size) = shapes.square_size {
                config.square_size = size;
            }
        }

        Ok(config)
    }

    /// Build the primitive for `kind` using these intrinsic values
    pub fn build(&self, kind: ShapeKind) -> Primitive {
        match kind {
            ShapeKind::Circle => Primitive::circle(self.circle_radius),
            ShapeKind::Square => Primitive::square(self.square_size),
            ShapeKind::Point => Primitive::point(),
        }
    }
}
