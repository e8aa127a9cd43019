use foundation::math::LngLat;
use serde_json::{Map, Value};

use crate::coord_path::CoordPath;
use crate::geojson::{GeoJsonFeature, Geometry};
use crate::id::FeatureId;

/// Generic polygon feature.
///
/// Rings are stored open: the closing duplicate is dropped on the way in and
/// re-added on the way out, so coordinate paths only address real positions.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonFeature {
    id: FeatureId,
    properties: Map<String, Value>,
    rings: Vec<Vec<LngLat>>,
}

impl PolygonFeature {
    /// A polygon with a single empty ring.
    pub fn new(id: FeatureId, properties: Map<String, Value>) -> Self {
        Self {
            id,
            properties,
            rings: vec![Vec::new()],
        }
    }

    pub fn id(&self) -> FeatureId {
        self.id
    }

    pub fn properties(&self) -> &Map<String, Value> {
        &self.properties
    }

    /// Replaces every ring. Closed input rings lose their closing point.
    pub fn set_coordinates(&mut self, rings: Vec<Vec<LngLat>>) {
        self.rings = rings
            .into_iter()
            .map(|mut ring| {
                if ring.len() > 1 && ring.first() == ring.last() {
                    ring.pop();
                }
                ring
            })
            .collect();
    }

    /// Rings in GeoJSON form, each closed.
    pub fn coordinates(&self) -> Vec<Vec<LngLat>> {
        self.rings
            .iter()
            .map(|ring| {
                let mut closed = ring.clone();
                if let Some(first) = ring.first() {
                    closed.push(*first);
                }
                closed
            })
            .collect()
    }

    pub fn get_coordinate(&self, path: CoordPath) -> Option<LngLat> {
        self.rings.get(path.ring)?.get(path.index).copied()
    }

    /// Inserts before `path.index`. Returns `false` if the path is out of range.
    pub fn add_coordinate(&mut self, path: CoordPath, position: LngLat) -> bool {
        let Some(ring) = self.rings.get_mut(path.ring) else {
            return false;
        };
        if path.index > ring.len() {
            return false;
        }
        ring.insert(path.index, position);
        true
    }

    /// Removes the addressed position. Out-of-range paths leave the polygon unchanged.
    pub fn remove_coordinate(&mut self, path: CoordPath) -> bool {
        let Some(ring) = self.rings.get_mut(path.ring) else {
            return false;
        };
        if path.index >= ring.len() {
            return false;
        }
        ring.remove(path.index);
        true
    }

    pub fn update_coordinate(&mut self, path: CoordPath, position: LngLat) -> bool {
        let Some(slot) = self
            .rings
            .get_mut(path.ring)
            .and_then(|ring| ring.get_mut(path.index))
        else {
            return false;
        };
        *slot = position;
        true
    }

    /// A polygon is valid when every ring has at least three distinct positions.
    pub fn is_valid(&self) -> bool {
        !self.rings.is_empty() && self.rings.iter().all(|ring| distinct_positions(ring) >= 3)
    }

    pub fn to_geojson(&self) -> GeoJsonFeature {
        let coordinates: Vec<Vec<[f64; 2]>> = self
            .coordinates()
            .into_iter()
            .map(|ring| ring.into_iter().map(LngLat::to_array).collect())
            .collect();
        GeoJsonFeature::new(
            Some(self.id),
            self.properties.clone(),
            Geometry::Polygon {
                coordinates,
                center: None,
                radius: None,
            },
        )
    }
}

fn distinct_positions(ring: &[LngLat]) -> usize {
    let mut seen: Vec<LngLat> = Vec::with_capacity(ring.len());
    for p in ring {
        if !seen.contains(p) {
            seen.push(*p);
        }
    }
    seen.len()
}
