use crate::circle::CircleFeature;
use crate::geojson::GeoJsonFeature;
use crate::id::FeatureId;
use crate::polygon::PolygonFeature;

/// Any feature the store can hold.
#[derive(Debug, Clone, PartialEq)]
pub enum Feature {
    Polygon(PolygonFeature),
    Circle(CircleFeature),
}

impl Feature {
    pub fn id(&self) -> FeatureId {
        match self {
            Feature::Polygon(p) => p.id(),
            Feature::Circle(c) => c.id(),
        }
    }

    pub fn is_valid(&self) -> bool {
        match self {
            Feature::Polygon(p) => p.is_valid(),
            Feature::Circle(c) => c.is_valid(),
        }
    }

    pub fn to_geojson(&self) -> GeoJsonFeature {
        match self {
            Feature::Polygon(p) => p.to_geojson(),
            Feature::Circle(c) => c.to_geojson(),
        }
    }

    pub fn as_circle(&self) -> Option<&CircleFeature> {
        match self {
            Feature::Circle(c) => Some(c),
            Feature::Polygon(_) => None,
        }
    }

    pub fn as_circle_mut(&mut self) -> Option<&mut CircleFeature> {
        match self {
            Feature::Circle(c) => Some(c),
            Feature::Polygon(_) => None,
        }
    }
}

impl From<PolygonFeature> for Feature {
    fn from(p: PolygonFeature) -> Self {
        Feature::Polygon(p)
    }
}

impl From<CircleFeature> for Feature {
    fn from(c: CircleFeature) -> Self {
        Feature::Circle(c)
    }
}
