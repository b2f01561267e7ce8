//! Output of a layout pass.

use tagcloud_graphics::{Point, Rect, Size};
use tagcloud_layout::RowRanges;

/// A tag with its packed position.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedTag {
    pub identifier: String,
    pub weight: f32,
    /// Font size the label was measured at and should be painted at.
    pub render_size: f32,
    /// Label box including its insets.
    pub bounds: Rect,
    /// False while the tag's fade-in is still pending; the tag keeps its
    /// place in the rows but is not painted or hit.
    pub visible: bool,
}

/// The area hint, centered in the container.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedHint {
    pub text: String,
    pub font_size: f32,
    pub bounds: Rect,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TagCloudFrame {
    /// Container bounds the pass ran against.
    pub container: Size,
    /// Tags in display order.
    pub tags: Vec<PlacedTag>,
    /// Index ranges into `tags`, one per row.
    pub rows: RowRanges,
    pub total_height: f32,
    pub hint: Option<PlacedHint>,
}

impl TagCloudFrame {
    /// The frame of an empty cloud: only the leading padding is counted.
    pub fn empty(container: Size, padding: f32) -> Self {
        Self {
            container,
            tags: Vec::new(),
            rows: RowRanges::new(),
            total_height: padding,
            hint: None,
        }
    }

    /// Size the container should report: its own width and the packed height.
    pub fn measured_size(&self) -> Size {
        Size::new(self.container.width, self.total_height)
    }

    pub fn is_hint_visible(&self) -> bool {
        self.hint.is_some()
    }

    pub fn get(&self, identifier: &str) -> Option<&PlacedTag> {
        self.tags.iter().find(|tag| tag.identifier == identifier)
    }

    pub fn bounds_of(&self, identifier: &str) -> Option<Rect> {
        self.get(identifier).map(|tag| tag.bounds)
    }

    /// Topmost visible tag under `point`.
    pub fn tag_at(&self, point: Point) -> Option<&PlacedTag> {
        self.tags
            .iter()
            .rev()
            .find(|tag| tag.visible && tag.bounds.contains(point.x, point.y))
    }

    /// Tags of each row, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[PlacedTag]> + '_ {
        self.rows.iter().map(move |row| &self.tags[row.clone()])
    }

    /// True when a tag present in both frames changed position or size.
    pub fn moved_from(&self, previous: &TagCloudFrame) -> bool {
        self.tags.iter().any(|tag| {
            previous
                .bounds_of(&tag.identifier)
                .is_some_and(|bounds| bounds != tag.bounds)
        })
    }
}

/// Result of [`TagCloudController::request_layout`](crate::TagCloudController::request_layout).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LayoutRequest<'a> {
    Completed(&'a TagCloudFrame),
    /// A relayout transition is in flight; the request runs when it finishes.
    Deferred,
}

impl<'a> LayoutRequest<'a> {
    pub fn frame(self) -> Option<&'a TagCloudFrame> {
        match self {
            LayoutRequest::Completed(frame) => Some(frame),
            LayoutRequest::Deferred => None,
        }
    }

    pub fn is_deferred(&self) -> bool {
        matches!(self, LayoutRequest::Deferred)
    }
}
