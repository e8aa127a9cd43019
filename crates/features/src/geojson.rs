//! GeoJSON wire types.
//!
//! Polygons may carry the non-standard `center` / `radius` members that circle
//! features write next to their ring so they can be rebuilt losslessly.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::coord_path::CoordPath;
use crate::id::FeatureId;

pub const PROP_CIRCLE: &str = "circle";
pub const PROP_CLASS: &str = "class";
pub const PROP_META: &str = "meta";
pub const PROP_ACTIVE: &str = "active";
pub const PROP_PARENT: &str = "parent";
pub const PROP_PARENT_CLASS: &str = "parent_class";
pub const PROP_COORD_PATH: &str = "coord_path";

pub const CLASS_CIRCLE: &str = "circle";

pub const META_FEATURE: &str = "feature";
pub const META_VERTEX: &str = "vertex";

pub const ACTIVE: &str = "true";
pub const INACTIVE: &str = "false";

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeatureKind {
    Feature,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point {
        coordinates: [f64; 2],
    },
    Polygon {
        coordinates: Vec<Vec<[f64; 2]>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        center: Option<[f64; 2]>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        radius: Option<f64>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoJsonFeature {
    #[serde(rename = "type")]
    pub kind: FeatureKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<FeatureId>,
    #[serde(default)]
    pub properties: Map<String, Value>,
    pub geometry: Geometry,
}

impl GeoJsonFeature {
    pub fn new(id: Option<FeatureId>, properties: Map<String, Value>, geometry: Geometry) -> Self {
        Self {
            kind: FeatureKind::Feature,
            id,
            properties,
            geometry,
        }
    }

    pub fn set_property(&mut self, key: &str, value: impl Into<Value>) {
        self.properties.insert(key.to_string(), value.into());
    }

    pub fn property_str(&self, key: &str) -> Option<&str> {
        self.properties.get(key).and_then(Value::as_str)
    }

    /// Length of the outer ring, or 0 for non-polygons.
    pub fn outer_ring_len(&self) -> usize {
        match &self.geometry {
            Geometry::Polygon { coordinates, .. } => coordinates.first().map_or(0, Vec::len),
            Geometry::Point { .. } => 0,
        }
    }

    pub fn outer_ring_point(&self, index: usize) -> Option<[f64; 2]> {
        match &self.geometry {
            Geometry::Polygon { coordinates, .. } => {
                coordinates.first().and_then(|ring| ring.get(index)).copied()
            }
            Geometry::Point { .. } => None,
        }
    }
}

/// Point feature marking one vertex of `parent`.
pub fn vertex_marker(
    parent: FeatureId,
    position: [f64; 2],
    path: CoordPath,
    selected: bool,
    parent_class: Option<&str>,
) -> GeoJsonFeature {
    let mut properties = Map::new();
    properties.insert(PROP_META.to_string(), META_VERTEX.into());
    properties.insert(PROP_PARENT.to_string(), Value::from(parent.0));
    properties.insert(PROP_COORD_PATH.to_string(), path.to_string().into());
    properties.insert(
        PROP_ACTIVE.to_string(),
        Value::from(if selected { ACTIVE } else { INACTIVE }),
    );
    if let Some(class) = parent_class {
        properties.insert(PROP_PARENT_CLASS.to_string(), class.into());
    }
    GeoJsonFeature::new(
        None,
        properties,
        Geometry::Point {
            coordinates: position,
        },
    )
}
