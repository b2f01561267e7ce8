use super::*;

#[test]
fn rect_contains_edges() {
    let rect = Rect::new(10.0, 10.0, 100.0, 20.0);
    assert!(rect.contains(10.0, 10.0));
    assert!(rect.contains(110.0, 30.0));
    assert!(!rect.contains(110.5, 15.0));
    assert!(!rect.contains(50.0, 9.0));
}

#[test]
fn touching_rects_do_not_intersect() {
    let left = Rect::new(0.0, 0.0, 10.0, 10.0);
    let right = Rect::new(10.0, 0.0, 10.0, 10.0);
    assert!(!left.intersects(&right));
    assert!(left.intersects(&Rect::new(9.0, 9.0, 5.0, 5.0)));
}

#[test]
fn inflate_adds_both_edges() {
    let size = Size::new(40.0, 16.0).inflate(EdgeInsets::symmetric(6.0, 2.0));
    assert_eq!(size, Size::new(52.0, 20.0));
}
