/// WGS84 semi-major axis (meters). Used as the sphere radius for distances.
pub const WGS84_A: f64 = 6_378_137.0;

/// Geographic position in degrees, GeoJSON axis order.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LngLat {
    pub lng: f64,
    pub lat: f64,
}

impl LngLat {
    pub fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    /// Translates by a delta expressed in degrees.
    pub fn offset(self, delta_lng: f64, delta_lat: f64) -> Self {
        Self::new(self.lng + delta_lng, self.lat + delta_lat)
    }

    /// Great-circle distance to `other` in meters.
    pub fn distance_to(self, other: LngLat) -> f64 {
        great_circle_distance_m(self.lat, self.lng, other.lat, other.lng)
    }

    pub fn to_array(self) -> [f64; 2] {
        [self.lng, self.lat]
    }
}

impl From<[f64; 2]> for LngLat {
    fn from(v: [f64; 2]) -> Self {
        Self::new(v[0], v[1])
    }
}

impl From<LngLat> for [f64; 2] {
    fn from(p: LngLat) -> Self {
        p.to_array()
    }
}

/// Haversine distance between two points given as (lat, lng) degrees.
///
/// Spherical earth of radius [`WGS84_A`]. Symmetric in its two points and
/// exactly zero for identical inputs. Out-of-range coordinates are not checked.
pub fn great_circle_distance_m(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let d_phi = (lat2 - lat1).to_radians();
    let d_lambda = (lng2 - lng1).to_radians();

    let s_phi = (d_phi * 0.5).sin();
    let s_lambda = (d_lambda * 0.5).sin();
    let h = s_phi * s_phi + phi1.cos() * phi2.cos() * s_lambda * s_lambda;

    // Rounding can push h a hair above 1 for antipodal points.
    2.0 * WGS84_A * h.sqrt().min(1.0).asin()
}
