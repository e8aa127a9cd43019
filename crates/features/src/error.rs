use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoordPathError {
    Malformed(String),
}

impl fmt::Display for CoordPathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordPathError::Malformed(raw) => {
                write!(f, "Malformed coordinate path: {raw:?} (expected \"<ring>.<index>\")")
            }
        }
    }
}

impl std::error::Error for CoordPathError {}

/// Reasons a GeoJSON value cannot be turned back into a feature.
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureError {
    NotPolygon,
    NotCircle,
    MissingCenter,
    MissingRadius,
    InvalidRadius(f64),
}

impl fmt::Display for FeatureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureError::NotPolygon => write!(f, "Geometry is not a Polygon"),
            FeatureError::NotCircle => write!(f, "Feature is not marked as a circle"),
            FeatureError::MissingCenter => write!(f, "Circle geometry has no center"),
            FeatureError::MissingRadius => write!(f, "Circle geometry has no radius"),
            FeatureError::InvalidRadius(r) => write!(f, "Invalid circle radius: {r}"),
        }
    }
}

impl std::error::Error for FeatureError {}
