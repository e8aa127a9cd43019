use foundation::math::{CIRCLE_STEPS, LngLat, circle_ring_with_steps};
use serde_json::{Map, Value};

use crate::coord_path::CoordPath;
use crate::error::FeatureError;
use crate::geojson::{CLASS_CIRCLE, GeoJsonFeature, Geometry, PROP_CIRCLE, PROP_CLASS};
use crate::id::FeatureId;
use crate::polygon::PolygonFeature;

/// Polygon feature whose single ring is derived from a center and a radius.
///
/// The ring is regenerated whenever either input changes and is only produced
/// once both are known.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleFeature {
    polygon: PolygonFeature,
    center: Option<LngLat>,
    radius: Option<f64>,
    steps: usize,
}

impl CircleFeature {
    pub fn new(id: FeatureId) -> Self {
        Self::with_steps(id, CIRCLE_STEPS)
    }

    pub fn with_steps(id: FeatureId, steps: usize) -> Self {
        Self::with_properties(id, steps, Map::new())
    }

    fn with_properties(id: FeatureId, steps: usize, mut properties: Map<String, Value>) -> Self {
        properties.insert(PROP_CIRCLE.to_string(), Value::Bool(true));
        properties.insert(PROP_CLASS.to_string(), CLASS_CIRCLE.into());
        Self {
            polygon: PolygonFeature::new(id, properties),
            center: None,
            radius: None,
            steps,
        }
    }

    /// Rebuilds a circle from its serialized form.
    ///
    /// The ring is regenerated from `center` / `radius`; the stored coordinates
    /// are only used to recover the step count. Properties are kept as given.
    pub fn from_geojson(geojson: &GeoJsonFeature, id: FeatureId) -> Result<Self, FeatureError> {
        let Geometry::Polygon {
            coordinates,
            center,
            radius,
        } = &geojson.geometry
        else {
            return Err(FeatureError::NotPolygon);
        };
        if geojson.properties.get(PROP_CIRCLE) != Some(&Value::Bool(true)) {
            return Err(FeatureError::NotCircle);
        }
        let center = (*center).ok_or(FeatureError::MissingCenter)?;
        let radius = (*radius).ok_or(FeatureError::MissingRadius)?;
        if !radius.is_finite() || radius < 0.0 {
            return Err(FeatureError::InvalidRadius(radius));
        }

        let steps = coordinates
            .first()
            .map(|ring| open_len(ring))
            .filter(|&len| len >= 3)
            .unwrap_or(CIRCLE_STEPS);
        let mut circle = Self::with_properties(id, steps, geojson.properties.clone());
        circle.place(LngLat::from(center), radius);
        Ok(circle)
    }

    pub fn id(&self) -> FeatureId {
        self.polygon.id()
    }

    pub fn center(&self) -> Option<LngLat> {
        self.center
    }

    pub fn radius(&self) -> Option<f64> {
        self.radius
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn polygon(&self) -> &PolygonFeature {
        &self.polygon
    }

    /// Sets center and radius together. Returns the generated ring length.
    pub fn place(&mut self, center: LngLat, radius_m: f64) -> usize {
        self.center = Some(center);
        self.radius = Some(radius_m);
        self.regenerate()
    }

    pub fn set_center(&mut self, center: LngLat) -> usize {
        self.center = Some(center);
        self.regenerate()
    }

    pub fn set_radius(&mut self, radius_m: f64) -> usize {
        self.radius = Some(radius_m);
        self.regenerate()
    }

    /// Translates the center by a delta in degrees, keeping the radius.
    pub fn update_center(&mut self, delta_lng: f64, delta_lat: f64) {
        let Some(center) = self.center else {
            tracing::trace!(feature = %self.id(), "update_center on a circle without center");
            return;
        };
        self.center = Some(center.offset(delta_lng, delta_lat));
        self.regenerate();
    }

    pub fn coordinates(&self) -> Vec<Vec<LngLat>> {
        self.polygon.coordinates()
    }

    pub fn remove_coordinate(&mut self, path: CoordPath) -> bool {
        self.polygon.remove_coordinate(path)
    }

    pub fn is_valid(&self) -> bool {
        self.polygon.is_valid()
    }

    pub fn to_geojson(&self) -> GeoJsonFeature {
        let base = self.polygon.to_geojson();

        let mut properties = base.properties.clone();
        properties.insert(PROP_CIRCLE.to_string(), Value::Bool(true));
        properties.insert(PROP_CLASS.to_string(), CLASS_CIRCLE.into());

        let geometry = match &base.geometry {
            Geometry::Polygon { coordinates, .. } => Geometry::Polygon {
                coordinates: coordinates.clone(),
                center: self.center.map(LngLat::to_array),
                radius: self.radius,
            },
            other => other.clone(),
        };

        GeoJsonFeature::new(base.id, properties, geometry)
    }

    fn regenerate(&mut self) -> usize {
        let (Some(center), Some(radius)) = (self.center, self.radius) else {
            return 0;
        };
        let ring = circle_ring_with_steps(center, radius, self.steps);
        let len = ring.len();
        self.polygon.set_coordinates(vec![ring]);
        len
    }
}

/// Ring length without any trailing copies of the first position.
fn open_len(ring: &[[f64; 2]]) -> usize {
    let mut len = ring.len();
    while len > 1 && ring[len - 1] == ring[0] {
        len -= 1;
    }
    len
}

#[cfg(test)]
mod tests {
    use super::CircleFeature;
    use crate::error::FeatureError;
    use crate::geojson::{GeoJsonFeature, Geometry};
    use crate::id::FeatureId;
    use foundation::math::{LngLat, circle_ring};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn placed() -> CircleFeature {
        let mut c = CircleFeature::new(FeatureId(1));
        c.place(LngLat::new(10.0, 20.0), 250.0);
        c
    }

    #[test]
    fn ring_waits_for_center_and_radius() {
        let mut c = CircleFeature::new(FeatureId(1));
        assert_eq!(c.set_center(LngLat::new(10.0, 20.0)), 0);
        assert_eq!(c.coordinates()[0].len(), 0);
        assert_eq!(c.set_radius(100.0), 65);
        assert_eq!(c.coordinates()[0].len(), 65);
    }

    #[test]
    fn update_center_matches_fresh_generation() {
        let mut c = placed();
        c.update_center(0.5, -0.25);

        assert_eq!(c.center(), Some(LngLat::new(10.5, 19.75)));
        assert_eq!(c.radius(), Some(250.0));
        assert_eq!(c.coordinates()[0], circle_ring(LngLat::new(10.5, 19.75), 250.0));
    }

    #[test]
    fn update_center_without_center_is_a_no_op() {
        let mut c = CircleFeature::new(FeatureId(1));
        c.update_center(1.0, 1.0);
        assert_eq!(c, CircleFeature::new(FeatureId(1)));
    }

    #[test]
    fn geojson_carries_circle_markers_and_members() {
        let c = placed();
        let gj = c.to_geojson();
        assert_eq!(gj.properties.get("circle"), Some(&json!(true)));
        assert_eq!(gj.property_str("class"), Some("circle"));
        assert_eq!(gj.outer_ring_len(), 65);
        match &gj.geometry {
            Geometry::Polygon { center, radius, .. } => {
                assert_eq!(*center, Some([10.0, 20.0]));
                assert_eq!(*radius, Some(250.0));
            }
            other => panic!("unexpected geometry: {other:?}"),
        }

        // The wrapped polygon serialization is left untouched.
        match c.polygon().to_geojson().geometry {
            Geometry::Polygon { center, radius, .. } => {
                assert_eq!(center, None);
                assert_eq!(radius, None);
            }
            other => panic!("unexpected geometry: {other:?}"),
        }
    }

    #[test]
    fn rebuilds_from_its_own_geojson() {
        let c = placed();
        let text = serde_json::to_string(&c.to_geojson()).expect("serialize circle");
        let parsed: GeoJsonFeature = serde_json::from_str(&text).expect("parse circle");
        let rebuilt = CircleFeature::from_geojson(&parsed, FeatureId(1)).expect("rebuild circle");
        assert_eq!(rebuilt, c);
    }

    #[test]
    fn rebuild_keeps_user_properties() {
        let mut gj = placed().to_geojson();
        gj.set_property("name", "pond");
        gj.set_property("class", "water");

        let rebuilt = CircleFeature::from_geojson(&gj, FeatureId(7)).expect("rebuild circle");
        let out = rebuilt.to_geojson();
        assert_eq!(out.id, Some(FeatureId(7)));
        assert_eq!(out.property_str("name"), Some("pond"));
        assert_eq!(out.property_str("class"), Some("circle"));
        assert_eq!(out.properties.get("circle"), Some(&json!(true)));
    }

    #[test]
    fn rebuild_recovers_step_count() {
        let mut doubled = placed().to_geojson();
        if let Geometry::Polygon { coordinates, .. } = &mut doubled.geometry {
            let first = coordinates[0][0];
            coordinates[0].push(first);
        }
        let rebuilt = CircleFeature::from_geojson(&doubled, FeatureId(1)).expect("rebuild circle");
        assert_eq!(rebuilt.steps(), 64);
        assert_eq!(rebuilt.coordinates()[0].len(), 65);

        let mut sixteen = CircleFeature::with_steps(FeatureId(2), 16);
        sixteen.place(LngLat::new(0.0, 0.0), 50.0);
        let rebuilt = CircleFeature::from_geojson(&sixteen.to_geojson(), FeatureId(2))
            .expect("rebuild circle");
        assert_eq!(rebuilt.steps(), 16);

        let mut bare = placed().to_geojson();
        if let Geometry::Polygon { coordinates, .. } = &mut bare.geometry {
            coordinates.clear();
        }
        let rebuilt = CircleFeature::from_geojson(&bare, FeatureId(1)).expect("rebuild circle");
        assert_eq!(rebuilt.steps(), 64);
    }

    #[test]
    fn rejects_non_circles() {
        let c = placed();

        let plain = c.polygon().to_geojson();
        assert_eq!(
            CircleFeature::from_geojson(&plain, FeatureId(1)),
            Err(FeatureError::NotCircle)
        );

        let mut no_radius = c.to_geojson();
        if let Geometry::Polygon { radius, .. } = &mut no_radius.geometry {
            *radius = None;
        }
        assert_eq!(
            CircleFeature::from_geojson(&no_radius, FeatureId(1)),
            Err(FeatureError::MissingRadius)
        );

        let mut negative = c.to_geojson();
        if let Geometry::Polygon { radius, .. } = &mut negative.geometry {
            *radius = Some(-5.0);
        }
        assert_eq!(
            CircleFeature::from_geojson(&negative, FeatureId(1)),
            Err(FeatureError::InvalidRadius(-5.0))
        );
    }
}
