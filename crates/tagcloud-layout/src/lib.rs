//! Layout for the tag cloud
//!
//! A single fixed algorithm: greedy left-to-right, top-to-bottom row packing
//! with one uniform padding. Callers hand in measured sizes in display order and
//! get back one box per element plus the height the container needs.

mod flow;
mod placement;

pub use flow::*;
pub use placement::*;

pub mod prelude {
    pub use crate::flow::{flow_layout, FlowLayout, FlowLayoutResult};
    pub use crate::placement::center_within;
}
