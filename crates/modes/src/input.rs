use foundation::math::LngLat;
use serde::{Deserialize, Serialize};

/// Pointer event in map coordinates.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerEvent {
    pub lng_lat: LngLat,
    /// The pointer is over a rendered vertex marker.
    pub on_vertex: bool,
}

impl PointerEvent {
    pub fn new(lng: f64, lat: f64, on_vertex: bool) -> Self {
        Self {
            lng_lat: LngLat::new(lng, lat),
            on_vertex,
        }
    }

    pub fn at(lng: f64, lat: f64) -> Self {
        Self::new(lng, lat, false)
    }

    pub fn on_vertex(lng: f64, lat: f64) -> Self {
        Self::new(lng, lat, true)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Escape,
    Enter,
    Other,
}

/// Serializable form of one input, used for scripted sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    Click {
        lng: f64,
        lat: f64,
        #[serde(default)]
        vertex: bool,
    },
    MouseMove {
        lng: f64,
        lat: f64,
        #[serde(default)]
        vertex: bool,
    },
    KeyUp {
        key: Key,
    },
    Trash,
}
