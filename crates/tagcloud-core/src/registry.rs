//! Ordered tag collection.
//!
//! Entries iterate by weight, largest first; equal weights keep insertion order.
//! Display sizes are refitted after every mutation so readers never observe a
//! size computed against a different set of weights.

use std::cmp::Ordering;

use crate::scale::{WeightScale, WeightScaler};

/// A tag as supplied by the caller. The identifier doubles as the label.
#[derive(Clone, Debug, PartialEq)]
pub struct TagEntry {
    pub identifier: String,
    pub weight: f32,
}

impl TagEntry {
    pub fn new(identifier: impl Into<String>, weight: f32) -> Self {
        Self {
            identifier: identifier.into(),
            weight,
        }
    }
}

/// A registered tag with its derived display size.
#[derive(Clone, Debug, PartialEq)]
pub struct ScaledTagEntry {
    entry: TagEntry,
    display_size: f32,
    sequence: u64,
}

impl ScaledTagEntry {
    pub fn entry(&self) -> &TagEntry {
        &self.entry
    }

    pub fn identifier(&self) -> &str {
        &self.entry.identifier
    }

    pub fn weight(&self) -> f32 {
        self.entry.weight
    }

    pub fn display_size(&self) -> f32 {
        self.display_size
    }

    /// Insertion sequence, used to order entries of equal weight.
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    fn display_order(&self, other: &Self) -> Ordering {
        other
            .entry
            .weight
            .total_cmp(&self.entry.weight)
            .then(self.sequence.cmp(&other.sequence))
    }
}

/// How [`TagRegistry::add`] resolves collisions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DuplicateWeightPolicy {
    /// One entry per weight value: adding at a weight already present replaces
    /// whatever entry held it, whatever its identifier.
    #[default]
    Overwrite,
    /// One entry per identifier: equal weights coexist in insertion order, and
    /// re-adding an identifier moves it to its new weight while keeping its
    /// original insertion sequence.
    KeyByIdentifier,
}

/// Result of [`TagRegistry::add`].
#[derive(Clone, Debug, PartialEq)]
pub enum AddOutcome {
    Inserted,
    /// The new entry displaced this one.
    Replaced(TagEntry),
    /// The weight was not finite; nothing changed.
    Rejected,
}

#[derive(Clone, Debug, Default)]
pub struct TagRegistry {
    entries: Vec<ScaledTagEntry>,
    scaler: WeightScaler,
    scale: Option<WeightScale>,
    policy: DuplicateWeightPolicy,
    next_sequence: u64,
}

impl TagRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(mut self, policy: DuplicateWeightPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_scaler(mut self, scaler: WeightScaler) -> Self {
        self.scaler = scaler;
        self.rescale();
        self
    }

    pub fn policy(&self) -> DuplicateWeightPolicy {
        self.policy
    }

    pub fn scaler(&self) -> &WeightScaler {
        &self.scaler
    }

    /// The curve fitted to the current weights, if any are present.
    pub fn scale(&self) -> Option<&WeightScale> {
        self.scale.as_ref()
    }

    pub fn add(&mut self, identifier: impl Into<String>, weight: f32) -> AddOutcome {
        let identifier = identifier.into();
        if !weight.is_finite() {
            log::warn!("TagRegistry: ignoring tag {identifier:?} with non-finite weight {weight}");
            return AddOutcome::Rejected;
        }

        let displaced = match self.policy {
            DuplicateWeightPolicy::Overwrite => self
                .entries
                .iter()
                .position(|existing| existing.entry.weight.total_cmp(&weight).is_eq()),
            DuplicateWeightPolicy::KeyByIdentifier => self
                .entries
                .iter()
                .position(|existing| existing.entry.identifier == identifier),
        }
        .map(|index| self.entries.remove(index));

        let sequence = match (&displaced, self.policy) {
            (Some(old), DuplicateWeightPolicy::KeyByIdentifier) => old.sequence,
            _ => {
                let sequence = self.next_sequence;
                self.next_sequence += 1;
                sequence
            }
        };

        let scaled = ScaledTagEntry {
            entry: TagEntry { identifier, weight },
            display_size: self.scaler.min_font_size(),
            sequence,
        };
        let index = self
            .entries
            .partition_point(|existing| existing.display_order(&scaled) == Ordering::Less);
        self.entries.insert(index, scaled);
        self.rescale();

        match displaced {
            Some(old) => {
                log::debug!(
                    "TagRegistry: {:?} replaced {:?} at weight {}",
                    self.entries[index].entry.identifier,
                    old.entry.identifier,
                    old.entry.weight
                );
                AddOutcome::Replaced(old.entry)
            }
            None => AddOutcome::Inserted,
        }
    }

    /// Removes every entry. Selection lives elsewhere and is left untouched.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.scale = None;
    }

    /// Entries in display order.
    pub fn entries(&self) -> &[ScaledTagEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScaledTagEntry> {
        self.entries.iter()
    }

    /// First entry, in display order, carrying `identifier`.
    pub fn get(&self, identifier: &str) -> Option<&ScaledTagEntry> {
        self.entries
            .iter()
            .find(|entry| entry.entry.identifier == identifier)
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.get(identifier).is_some()
    }

    pub fn weights(&self) -> impl ExactSizeIterator<Item = f32> + '_ {
        self.entries.iter().map(|entry| entry.entry.weight)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn rescale(&mut self) {
        let fitted = self.scaler.fit(self.weights());
        self.scale = fitted;
        let Some(scale) = fitted else {
            return;
        };
        for entry in &mut self.entries {
            entry.display_size = scale.display_size(entry.entry.weight);
            log::debug!(
                "TagRegistry: sizing {:?} weight {} size {}",
                entry.entry.identifier,
                entry.entry.weight,
                entry.display_size
            );
        }
    }
}

impl<'a> IntoIterator for &'a TagRegistry {
    type Item = &'a ScaledTagEntry;
    type IntoIter = std::slice::Iter<'a, ScaledTagEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
#[path = "tests/registry_tests.rs"]
mod tests;
