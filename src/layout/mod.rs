//! Layout resolution engine
//!
//! Turns loosely-typed geometry fields into resolved pixel rectangles.
//! The pipeline is anchor name lookup, size/offset token parsing, and a
//! closed-form base-position solve; everything is integer arithmetic
//! against an explicit [`LayoutContext`].

pub mod anchor;
pub mod context;
pub mod dimension;
pub mod geometry;
pub mod solver;

pub use anchor::Anchor;
pub use context::LayoutContext;
pub use dimension::{parse_offset, parse_size, DEFAULT_HEIGHT, DEFAULT_WIDTH};
pub use geometry::{Point, Size};
pub use solver::{absolute_position, base_position, offset_for};
