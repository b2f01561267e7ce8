//! Tag cloud controller
//!
//! Composes weight scaling, row packing and selection into the surface a host
//! toolkit embeds. The host supplies text measurement and, optionally, plays
//! appearance transitions; the controller hands back positioned boxes.

mod appearance;
mod config;
mod controller;
mod event;
mod frame;
mod text;
mod transition;

pub use appearance::*;
pub use config::*;
pub use controller::*;
pub use event::*;
pub use frame::*;
pub use text::*;
pub use transition::*;

pub use tagcloud_core::{DuplicateWeightPolicy, WeightScaler};
pub use tagcloud_graphics::{Color, EdgeInsets, Point, Rect, Size};

pub mod prelude {
    pub use crate::config::TagCloudConfig;
    pub use crate::controller::TagCloudController;
    pub use crate::event::{EventResponse, TagCloudEvent};
    pub use crate::frame::{LayoutRequest, PlacedTag, TagCloudFrame};
    pub use crate::text::{TextMeasurer, TextMetrics};
    pub use crate::transition::{AppearanceTransitions, TransitionSpec};
    pub use tagcloud_graphics::{Point, Size};
}
