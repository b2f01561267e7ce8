//! Visual states derived from selection.

use tagcloud_graphics::Color;

use crate::frame::PlacedTag;

/// Colors of a tag label.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TagAppearance {
    pub text_color: Color,
    pub background: Color,
}

impl TagAppearance {
    pub const DEFAULT: Self = Self {
        text_color: Color::BLACK,
        background: Color::LIGHT_GRAY,
    };

    pub const SELECTED: Self = Self {
        text_color: Color::WHITE,
        background: Color::GRAY,
    };

    pub fn for_selection(selected: bool) -> Self {
        if selected {
            Self::SELECTED
        } else {
            Self::DEFAULT
        }
    }
}

/// Text color of the area hint.
pub const HINT_TEXT_COLOR: Color = Color::DARK_GRAY;

/// A placed tag joined with its current selection state.
///
/// Built on demand from the last frame and the live selection, so a toggle is
/// reflected without a new layout pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TagView<'a> {
    pub tag: &'a PlacedTag,
    pub selected: bool,
    pub appearance: TagAppearance,
}
