//! Pure math/data for the tag cloud
//!
//! Geometry primitives and color definitions shared by the layout engine
//! and the controller.

mod color;
mod geometry;

pub use color::*;
pub use geometry::*;

pub mod prelude {
    pub use crate::color::Color;
    pub use crate::geometry::{EdgeInsets, Point, Rect, Size};
}
