//! Primitive shapes and their kind identifiers
//!
//! A [`Primitive`] carries only intrinsic state (a circle's radius, a
//! square's size). Placement is extrinsic and supplied as a [`Position`]
//! each time the shape is rendered.

mod kind;
mod primitive;

pub use kind::ShapeKind;
pub use primitive::{Position, Primitive, Renderable};
