use super::*;
use crate::scale::MIN_FONT_SIZE;

fn identifiers(registry: &TagRegistry) -> Vec<&str> {
    registry.iter().map(ScaledTagEntry::identifier).collect()
}

#[test]
fn iterates_by_descending_weight() {
    let mut registry = TagRegistry::new();
    registry.add("indie", 1.0);
    registry.add("rock", 5.0);
    registry.add("jazz", 10.0);

    assert_eq!(identifiers(&registry), vec!["jazz", "rock", "indie"]);
    assert_eq!(registry.weights().collect::<Vec<_>>(), vec![10.0, 5.0, 1.0]);
}

#[test]
fn same_tag_twice_keeps_one_entry() {
    let mut registry = TagRegistry::new();
    assert_eq!(registry.add("rock", 5.0), AddOutcome::Inserted);
    assert_eq!(
        registry.add("rock", 5.0),
        AddOutcome::Replaced(TagEntry::new("rock", 5.0))
    );
    assert_eq!(registry.len(), 1);
}

#[test]
fn equal_weight_overwrites_other_identifier() {
    let mut registry = TagRegistry::new();
    registry.add("punk", 3.0);
    registry.add("metal", 8.0);
    let outcome = registry.add("emo", 3.0);

    assert_eq!(outcome, AddOutcome::Replaced(TagEntry::new("punk", 3.0)));
    assert_eq!(identifiers(&registry), vec!["metal", "emo"]);
    assert!(!registry.contains("punk"));
}

#[test]
fn overwrite_policy_keeps_same_identifier_at_two_weights() {
    let mut registry = TagRegistry::new();
    registry.add("rock", 5.0);
    registry.add("rock", 7.0);
    assert_eq!(registry.len(), 2);
    assert_eq!(registry.get("rock").map(ScaledTagEntry::weight), Some(7.0));
}

#[test]
fn keyed_by_identifier_keeps_equal_weights_in_insertion_order() {
    let mut registry = TagRegistry::new().with_policy(DuplicateWeightPolicy::KeyByIdentifier);
    registry.add("punk", 3.0);
    registry.add("emo", 3.0);
    registry.add("ska", 3.0);
    registry.add("metal", 8.0);

    assert_eq!(identifiers(&registry), vec!["metal", "punk", "emo", "ska"]);
    let sequences: Vec<u64> = registry.iter().map(ScaledTagEntry::sequence).collect();
    assert_eq!(sequences, vec![3, 0, 1, 2]);
}

#[test]
fn keyed_by_identifier_readd_moves_weight_and_keeps_sequence() {
    let mut registry = TagRegistry::new().with_policy(DuplicateWeightPolicy::KeyByIdentifier);
    registry.add("punk", 3.0);
    registry.add("emo", 3.0);

    assert_eq!(
        registry.add("emo", 9.0),
        AddOutcome::Replaced(TagEntry::new("emo", 3.0))
    );
    assert_eq!(identifiers(&registry), vec!["emo", "punk"]);

    registry.add("emo", 3.0);
    assert_eq!(identifiers(&registry), vec!["punk", "emo"]);
    assert_eq!(registry.get("emo").map(ScaledTagEntry::sequence), Some(1));
}

#[test]
fn non_finite_weights_are_rejected() {
    let mut registry = TagRegistry::new();
    assert_eq!(registry.add("nan", f32::NAN), AddOutcome::Rejected);
    assert_eq!(registry.add("inf", f32::INFINITY), AddOutcome::Rejected);
    assert!(registry.is_empty());
    assert!(registry.scale().is_none());
}

#[test]
fn sizes_refit_after_every_mutation() {
    let mut registry = TagRegistry::new();
    registry.add("rock", 5.0);
    assert_eq!(registry.entries()[0].display_size(), MIN_FONT_SIZE);

    registry.add("jazz", 10.0);
    let jazz = registry.get("jazz").expect("jazz registered");
    let rock = registry.get("rock").expect("rock registered");
    assert!((jazz.display_size() - (10.0 + 90.01_f32.ln())).abs() < 1e-4);
    assert!((rock.display_size() - (10.0 + 0.01_f32.ln())).abs() < 1e-4);
    assert!(jazz.display_size() > rock.display_size());
}

#[test]
fn clear_empties_registry() {
    let mut registry = TagRegistry::new();
    registry.add("rock", 5.0);
    registry.add("jazz", 10.0);
    registry.clear();

    assert!(registry.is_empty());
    assert!(registry.scale().is_none());

    registry.add("folk", 2.0);
    assert_eq!(registry.entries()[0].display_size(), MIN_FONT_SIZE);
}

#[test]
fn custom_scaler_is_applied() {
    let mut registry = TagRegistry::new().with_scaler(WeightScaler::new(20.0, 40.0));
    registry.add("rock", 5.0);
    assert_eq!(registry.entries()[0].display_size(), 20.0);
}

#[test]
fn signed_zero_weights_are_distinct() {
    let mut registry = TagRegistry::new();
    assert_eq!(registry.add("a", 0.0), AddOutcome::Inserted);
    assert_eq!(registry.add("b", -0.0), AddOutcome::Inserted);

    assert_eq!(registry.len(), 2);
    assert_eq!(identifiers(&registry), vec!["a", "b"]);
}
