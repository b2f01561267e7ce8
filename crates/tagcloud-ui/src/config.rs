//! Controller configuration.

use tagcloud_core::{DuplicateWeightPolicy, WeightScaler};
use tagcloud_graphics::EdgeInsets;
use tagcloud_layout::DEFAULT_PADDING;

use crate::transition::TransitionSpec;

#[derive(Clone, Debug, PartialEq)]
pub struct TagCloudConfig {
    /// Gap between labels, between rows, and around the packed area.
    pub padding: f32,
    /// Factor applied to a display size to get the font size labels are
    /// measured and painted at.
    pub render_scale: f32,
    /// Space between a label's text and its background edge.
    pub label_insets: EdgeInsets,
    pub hint_font_size: f32,
    pub animations_enabled: bool,
    pub appear_transition: TransitionSpec,
    pub duplicate_weights: DuplicateWeightPolicy,
    pub scaler: WeightScaler,
}

impl Default for TagCloudConfig {
    fn default() -> Self {
        Self {
            padding: DEFAULT_PADDING,
            render_scale: 2.0,
            label_insets: EdgeInsets::symmetric(6.0, 2.0),
            hint_font_size: 16.0,
            animations_enabled: false,
            appear_transition: TransitionSpec::default(),
            duplicate_weights: DuplicateWeightPolicy::default(),
            scaler: WeightScaler::default(),
        }
    }
}

impl TagCloudConfig {
    pub fn with_padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_render_scale(mut self, render_scale: f32) -> Self {
        self.render_scale = render_scale;
        self
    }

    pub fn with_label_insets(mut self, label_insets: EdgeInsets) -> Self {
        self.label_insets = label_insets;
        self
    }

    pub fn with_hint_font_size(mut self, hint_font_size: f32) -> Self {
        self.hint_font_size = hint_font_size;
        self
    }

    pub fn with_animations(mut self, enabled: bool) -> Self {
        self.animations_enabled = enabled;
        self
    }

    pub fn with_appear_transition(mut self, spec: TransitionSpec) -> Self {
        self.appear_transition = spec;
        self
    }

    pub fn with_duplicate_weights(mut self, policy: DuplicateWeightPolicy) -> Self {
        self.duplicate_weights = policy;
        self
    }

    pub fn with_scaler(mut self, scaler: WeightScaler) -> Self {
        self.scaler = scaler;
        self
    }
}
