//! Placement of elements that sit outside the packed rows.

use tagcloud_graphics::{Rect, Size};

/// Centers `child` in a box of size `container` anchored at the origin.
///
/// The offset is not clamped: a child larger than the container gets a negative
/// origin and overhangs both edges evenly.
pub fn center_within(container: Size, child: Size) -> Rect {
    Rect::new(
        (container.width - child.width) / 2.0,
        (container.height - child.height) / 2.0,
        child.width,
        child.height,
    )
}
