//! Core state for the tag cloud
//!
//! Everything here is independent of how tags are measured or painted:
//! weight scaling, the ordered tag collection, and selection membership.

mod registry;
mod scale;
mod selection;

pub use registry::*;
pub use scale::*;
pub use selection::*;

pub mod prelude {
    pub use crate::registry::{DuplicateWeightPolicy, ScaledTagEntry, TagEntry, TagRegistry};
    pub use crate::scale::{WeightScale, WeightScaler};
    pub use crate::selection::SelectionState;
}
