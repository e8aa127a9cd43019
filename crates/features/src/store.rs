use std::collections::{BTreeMap, BTreeSet};

use crate::feature::Feature;
use crate::geojson::GeoJsonFeature;
use crate::id::FeatureId;

/// Why a feature was removed without a creation notification.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Discard {
    /// The user cancelled (escape or trash).
    Aborted,
    /// The geometry was degenerate when the mode stopped.
    Invalid,
}

/// Feature persistence as seen by interaction modes.
///
/// Deletions through this interface are always silent; the `Discard` reason
/// is informational.
pub trait FeatureStore {
    fn new_id(&mut self) -> FeatureId;
    fn add(&mut self, feature: Feature);
    fn get(&self, id: FeatureId) -> Option<&Feature>;
    fn get_mut(&mut self, id: FeatureId) -> Option<&mut Feature>;
    fn delete(&mut self, ids: &[FeatureId], discard: Discard);
    fn clear_selected(&mut self);
}

/// In-memory store.
///
/// Ordering contract:
/// - `iter` and `to_geojson` yield features in ascending id order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    next_id: u64,
    features: BTreeMap<FeatureId, Feature>,
    selected: BTreeSet<FeatureId>,
    discarded: Vec<(FeatureId, Discard)>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn contains(&self, id: FeatureId) -> bool {
        self.features.contains_key(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Feature> + '_ {
        self.features.values()
    }

    pub fn to_geojson(&self) -> Vec<GeoJsonFeature> {
        self.iter().map(Feature::to_geojson).collect()
    }

    /// Returns `true` if the selection changed.
    pub fn select(&mut self, id: FeatureId) -> bool {
        self.features.contains_key(&id) && self.selected.insert(id)
    }

    pub fn selected(&self) -> impl Iterator<Item = FeatureId> + '_ {
        self.selected.iter().copied()
    }

    /// Every deletion seen so far, in call order.
    pub fn discarded(&self) -> &[(FeatureId, Discard)] {
        &self.discarded
    }
}

impl FeatureStore for MemoryStore {
    fn new_id(&mut self) -> FeatureId {
        self.next_id += 1;
        FeatureId(self.next_id)
    }

    fn add(&mut self, feature: Feature) {
        self.features.insert(feature.id(), feature);
    }

    fn get(&self, id: FeatureId) -> Option<&Feature> {
        self.features.get(&id)
    }

    fn get_mut(&mut self, id: FeatureId) -> Option<&mut Feature> {
        self.features.get_mut(&id)
    }

    fn delete(&mut self, ids: &[FeatureId], discard: Discard) {
        for id in ids {
            if self.features.remove(id).is_some() {
                self.selected.remove(id);
                self.discarded.push((*id, discard));
                tracing::debug!(feature = %id, ?discard, "feature deleted");
            }
        }
    }

    fn clear_selected(&mut self) {
        self.selected.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::{Discard, FeatureStore, MemoryStore};
    use crate::circle::CircleFeature;
    use crate::id::FeatureId;
    use crate::polygon::PolygonFeature;

    #[test]
    fn ids_are_unique_and_increasing() {
        let mut store = MemoryStore::new();
        let a = store.new_id();
        let b = store.new_id();
        assert!(a < b);
    }

    #[test]
    fn add_get_delete() {
        let mut store = MemoryStore::new();
        let id = store.new_id();
        store.add(CircleFeature::new(id).into());
        assert!(store.get(id).is_some_and(|f| f.as_circle().is_some()));
        assert!(store.select(id));

        store.delete(&[id, FeatureId(99)], Discard::Aborted);
        assert!(store.get(id).is_none());
        assert!(store.is_empty());
        assert_eq!(store.selected().count(), 0);
        assert_eq!(store.discarded(), &[(id, Discard::Aborted)]);
    }

    #[test]
    fn iteration_is_sorted_by_id() {
        let mut store = MemoryStore::new();
        let ids: Vec<FeatureId> = (0..3).map(|_| store.new_id()).collect();
        for id in ids.iter().rev() {
            store.add(PolygonFeature::new(*id, serde_json::Map::new()).into());
        }
        let got: Vec<FeatureId> = store.iter().map(|f| f.id()).collect();
        assert_eq!(got, ids);
        assert_eq!(store.to_geojson().len(), 3);
    }

    #[test]
    fn clear_selected_keeps_features() {
        let mut store = MemoryStore::new();
        let id = store.new_id();
        store.add(CircleFeature::new(id).into());
        store.select(id);
        store.clear_selected();
        assert_eq!(store.selected().count(), 0);
        assert_eq!(store.len(), 1);
        assert!(!store.select(FeatureId(42)));
    }
}
