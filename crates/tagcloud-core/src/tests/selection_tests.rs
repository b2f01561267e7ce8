use super::*;

#[test]
fn toggle_flips_membership() {
    let mut selection = SelectionState::new();
    assert!(selection.toggle("rock"));
    assert!(selection.is_selected("rock"));
    assert!(!selection.toggle("rock"));
    assert!(!selection.is_selected("rock"));
    assert!(selection.is_empty());
}

#[test]
fn double_toggle_leaves_others_untouched() {
    let mut selection = SelectionState::new();
    selection.toggle("jazz");
    selection.toggle("folk");
    let before = selection.clone();

    selection.toggle("rock");
    selection.toggle("rock");
    assert_eq!(selection, before);

    selection.toggle("jazz");
    selection.toggle("jazz");
    assert!(selection.is_selected("jazz"));
    assert!(selection.is_selected("folk"));
}

#[test]
fn reports_selection_order() {
    let mut selection = SelectionState::new();
    selection.toggle("metal");
    selection.toggle("ambient");
    selection.toggle("jazz");
    selection.toggle("ambient");

    assert_eq!(selection.selected().collect::<Vec<_>>(), vec!["metal", "jazz"]);

    selection.toggle("ambient");
    assert_eq!(
        selection.selected().collect::<Vec<_>>(),
        vec!["metal", "jazz", "ambient"]
    );
    assert_eq!(selection.len(), 3);
}
