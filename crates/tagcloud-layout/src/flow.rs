//! Greedy row packing.
//!
//! Elements are placed left to right in the order given. When an element does
//! not fit in what is left of the current row it starts a new one. Elements are
//! never resized: one that is wider than the container is placed at the start
//! of a row and overflows the right edge.

use std::ops::Range;

use smallvec::SmallVec;
use tagcloud_graphics::{Rect, Size};

/// Default gap between elements and around the packed area.
pub const DEFAULT_PADDING: f32 = 10.0;

/// Index ranges into [`FlowLayoutResult::boxes`], one per row.
/// Tag clouds rarely exceed a handful of rows.
pub type RowRanges = SmallVec<[Range<usize>; 8]>;

/// Output of a single layout pass.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct FlowLayoutResult {
    /// One box per input element, in input order.
    pub boxes: Vec<Rect>,
    /// Row-break decisions: consecutive ranges covering every box.
    pub rows: RowRanges,
    /// Height the container needs to show every row.
    pub total_height: f32,
}

impl FlowLayoutResult {
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the row holding the element at `index`.
    pub fn row_of(&self, index: usize) -> Option<usize> {
        self.rows.iter().position(|row| row.contains(&index))
    }

    /// Iterates the boxes of each row.
    pub fn row_boxes(&self) -> impl Iterator<Item = &[Rect]> + '_ {
        self.rows.iter().map(move |row| &self.boxes[row.clone()])
    }
}

/// Row-packing layout with a uniform padding.
///
/// The padding is used as the gap between neighbours on a row, the gap between
/// rows, and the inset of the first row and first column from the container
/// edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlowLayout {
    padding: f32,
}

impl Default for FlowLayout {
    fn default() -> Self {
        Self {
            padding: DEFAULT_PADDING,
        }
    }
}

impl FlowLayout {
    pub fn new(padding: f32) -> Self {
        Self { padding }
    }

    pub fn with_padding(self, padding: f32) -> Self {
        Self { padding }
    }

    pub fn padding(&self) -> f32 {
        self.padding
    }

    /// Packs `elements` into rows no wider than `container_width`.
    pub fn layout(&self, elements: &[Size], container_width: f32) -> FlowLayoutResult {
        flow_layout(elements, container_width, self.padding)
    }
}

/// Packs `elements` into rows no wider than `container_width`.
///
/// With no elements the result has no boxes and `total_height == padding`:
/// the leading padding is always counted.
pub fn flow_layout(elements: &[Size], container_width: f32, padding: f32) -> FlowLayoutResult {
    let mut boxes = Vec::with_capacity(elements.len());
    let mut rows = RowRanges::new();

    let mut x = padding;
    let mut y = padding;
    let mut row_max_height = 0.0_f32;
    let mut row_start = 0;

    for (index, element) in elements.iter().enumerate() {
        // An empty row takes the element whatever its width, so an oversized
        // element never leaves a blank row behind it.
        if x + element.width > container_width && index > row_start {
            rows.push(row_start..index);
            row_start = index;
            x = padding;
            y += row_max_height + padding;
            row_max_height = 0.0;
        }

        log::trace!(
            "flow: element {} ({}x{}) at ({}, {})",
            index,
            element.width,
            element.height,
            x,
            y
        );
        boxes.push(Rect::new(x, y, element.width, element.height));

        row_max_height = row_max_height.max(element.height);
        x += element.width + padding;
    }

    if !boxes.is_empty() {
        rows.push(row_start..boxes.len());
    }

    let total_height = y + row_max_height;
    log::debug!(
        "flow: {} elements in {} rows, width {}, total height {}",
        boxes.len(),
        rows.len(),
        container_width,
        total_height
    );

    FlowLayoutResult {
        boxes,
        rows,
        total_height,
    }
}

#[cfg(test)]
#[path = "tests/flow_tests.rs"]
mod tests;
