//! Collaborators an interaction mode talks to.
//!
//! The host application implements these; `RecordingHost` is an in-memory
//! implementation that logs every call.

use features::{FeatureId, FeatureStore, GeoJsonFeature};
use serde_json::{Value, json};

use crate::constants::{Cursor, EVENT_CREATE, ModeName, Tool};

/// Bulk actions the host may offer while a mode is active.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Actions {
    pub combine_features: bool,
    pub uncombine_features: bool,
    pub trash: bool,
}

/// Options handed to the next mode.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModePayload {
    pub feature_ids: Vec<FeatureId>,
}

impl ModePayload {
    pub fn selecting(id: FeatureId) -> Self {
        Self {
            feature_ids: vec![id],
        }
    }
}

/// Notifications fired on the map.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawEvent {
    Create { features: Vec<GeoJsonFeature> },
}

impl DrawEvent {
    pub fn name(&self) -> &'static str {
        match self {
            DrawEvent::Create { .. } => EVENT_CREATE,
        }
    }

    pub fn payload(&self) -> Value {
        match self {
            DrawEvent::Create { features } => json!({ "features": features }),
        }
    }
}

pub trait ModeDispatch {
    fn change_mode(&mut self, mode: ModeName, payload: ModePayload, silent: bool);
    fn actionable(&mut self, actions: Actions);
}

pub trait Ui {
    fn queue_map_classes(&mut self, cursor: Cursor);
    fn set_active_button(&mut self, tool: Option<Tool>);
}

pub trait MapSurface {
    fn set_double_click_zoom(&mut self, enabled: bool);
    fn fire(&mut self, event: DrawEvent);
}

pub trait Host: ModeDispatch + Ui + MapSurface {}

impl<T: ModeDispatch + Ui + MapSurface + ?Sized> Host for T {}

/// Everything a mode handler may touch during one event turn.
pub struct Context<'a> {
    pub store: &'a mut dyn FeatureStore,
    pub host: &'a mut dyn Host,
}

impl<'a> Context<'a> {
    pub fn new(store: &'a mut dyn FeatureStore, host: &'a mut dyn Host) -> Self {
        Self { store, host }
    }
}
