//! Click-and-drag circle drawing.
//!
//! The first click places the center with a default radius, pointer moves
//! resize the circle, and a second click (or Enter, or a click on a vertex
//! marker) commits it. Escape and trash discard it.

use features::{
    ACTIVE, CircleFeature, CoordPath, Discard, Feature, FeatureId, FeatureStore, GeoJsonFeature,
    INACTIVE, META_FEATURE, PROP_ACTIVE, PROP_CLASS, PROP_META, vertex_marker,
};
use foundation::math::{CIRCLE_STEPS, DEFAULT_RADIUS_M, LngLat, great_circle_distance_m};

use crate::constants::{Cursor, ModeName, Tool};
use crate::host::{Actions, Context, DrawEvent, ModePayload};
use crate::input::{Key, PointerEvent};
use crate::mode::{Mode, StopOutcome};

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DrawCircleOptions {
    /// Radius given to the circle when its center is placed.
    pub default_radius_m: f64,
    /// Distinct points around the generated ring.
    pub steps: usize,
}

impl Default for DrawCircleOptions {
    fn default() -> Self {
        Self {
            default_radius_m: DEFAULT_RADIUS_M,
            steps: CIRCLE_STEPS,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DrawState {
    AwaitingCenter,
    Sizing,
    Committed,
    Discarded(Discard),
}

impl DrawState {
    pub fn is_terminal(self) -> bool {
        matches!(self, DrawState::Committed | DrawState::Discarded(_))
    }
}

#[derive(Debug)]
pub struct DrawCircleMode {
    feature_id: FeatureId,
    state: DrawState,
    /// Ring length after the latest regeneration; 0 until a center is placed.
    vertex_count: usize,
    options: DrawCircleOptions,
    /// Set by the first `stop`; later calls replay it without side effects.
    stopped: Option<StopOutcome>,
}

impl DrawCircleMode {
    pub fn new(store: &mut dyn FeatureStore) -> Self {
        Self::with_options(store, DrawCircleOptions::default())
    }

    /// Creates the empty in-progress circle and registers it with `store`.
    pub fn with_options(store: &mut dyn FeatureStore, options: DrawCircleOptions) -> Self {
        let feature_id = store.new_id();
        store.add(CircleFeature::with_steps(feature_id, options.steps).into());
        Self {
            feature_id,
            state: DrawState::AwaitingCenter,
            vertex_count: 0,
            options,
            stopped: None,
        }
    }

    pub fn feature_id(&self) -> FeatureId {
        self.feature_id
    }

    pub fn state(&self) -> DrawState {
        self.state
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn place_center(&mut self, ctx: &mut Context<'_>, center: LngLat) {
        let Some(circle) = circle_mut(ctx.store, self.feature_id) else {
            tracing::debug!(feature = %self.feature_id, "in-progress circle left the store");
            return;
        };
        self.vertex_count = circle.place(center, self.options.default_radius_m);
        self.state = DrawState::Sizing;
        ctx.host.queue_map_classes(Cursor::Add);
        tracing::debug!(
            feature = %self.feature_id,
            lng = center.lng,
            lat = center.lat,
            "circle center placed"
        );
    }

    fn resize_to(&mut self, ctx: &mut Context<'_>, event: &PointerEvent) {
        let Some(circle) = circle_mut(ctx.store, self.feature_id) else {
            tracing::debug!(feature = %self.feature_id, "in-progress circle left the store");
            return;
        };
        let Some(center) = circle.center() else {
            return;
        };
        let radius = great_circle_distance_m(
            center.lat,
            center.lng,
            event.lng_lat.lat,
            event.lng_lat.lng,
        );
        self.vertex_count = circle.set_radius(radius);
        ctx.host.queue_map_classes(if event.on_vertex {
            Cursor::Pointer
        } else {
            Cursor::Add
        });
    }

    fn commit(&mut self, ctx: &mut Context<'_>) {
        self.state = DrawState::Committed;
        tracing::debug!(feature = %self.feature_id, "circle committed");
        ctx.host.change_mode(
            ModeName::SimpleSelect,
            ModePayload::selecting(self.feature_id),
            false,
        );
    }

    fn abort(&mut self, ctx: &mut Context<'_>) {
        ctx.store.delete(&[self.feature_id], Discard::Aborted);
        self.state = DrawState::Discarded(Discard::Aborted);
        tracing::debug!(feature = %self.feature_id, "circle aborted");
        ctx.host
            .change_mode(ModeName::SimpleSelect, ModePayload::default(), false);
    }

    fn finish(&mut self, ctx: &mut Context<'_>) -> StopOutcome {
        ctx.host.queue_map_classes(Cursor::Neutral);
        ctx.host.set_double_click_zoom(true);
        ctx.host.set_active_button(None);

        let Some(circle) = circle_mut(ctx.store, self.feature_id) else {
            return match self.state {
                DrawState::Discarded(discard) => StopOutcome::Discarded(discard),
                _ => StopOutcome::Missing,
            };
        };

        // Drop the trailing placeholder left by interactive sizing.
        circle.remove_coordinate(CoordPath::new(0, self.vertex_count));

        if circle.is_valid() {
            let geojson = circle.to_geojson();
            self.state = DrawState::Committed;
            ctx.host.fire(DrawEvent::Create {
                features: vec![geojson.clone()],
            });
            return StopOutcome::Created(geojson);
        }

        ctx.store.delete(&[self.feature_id], Discard::Invalid);
        self.state = DrawState::Discarded(Discard::Invalid);
        tracing::debug!(feature = %self.feature_id, "degenerate circle discarded");
        ctx.host
            .change_mode(ModeName::SimpleSelect, ModePayload::default(), true);
        StopOutcome::Discarded(Discard::Invalid)
    }
}

fn circle_mut<'s>(
    store: &'s mut (dyn FeatureStore + '_),
    id: FeatureId,
) -> Option<&'s mut CircleFeature> {
    store.get_mut(id).and_then(Feature::as_circle_mut)
}

impl Mode for DrawCircleMode {
    fn start(&mut self, ctx: &mut Context<'_>) {
        ctx.store.clear_selected();
        ctx.host.set_double_click_zoom(false);
        ctx.host.queue_map_classes(Cursor::Add);
        ctx.host.set_active_button(Some(Tool::Circle));
        ctx.host.actionable(Actions {
            combine_features: false,
            uncombine_features: false,
            trash: true,
        });
    }

    fn stop(&mut self, ctx: &mut Context<'_>) -> StopOutcome {
        if let Some(outcome) = &self.stopped {
            tracing::trace!(feature = %self.feature_id, "mode already stopped");
            return outcome.clone();
        }
        let outcome = self.finish(ctx);
        self.stopped = Some(outcome.clone());
        outcome
    }

    fn render(&self, mut geojson: GeoJsonFeature, emit: &mut dyn FnMut(GeoJsonFeature)) {
        let is_active = geojson.id == Some(self.feature_id);
        geojson.set_property(PROP_ACTIVE, if is_active { ACTIVE } else { INACTIVE });
        if !is_active {
            emit(geojson);
            return;
        }

        // Two positions plus the closer is the smallest renderable shape.
        let count = geojson.outer_ring_len();
        if count < 3 {
            return;
        }
        geojson.set_property(PROP_META, META_FEATURE);

        if count >= 4 {
            let parent_class = geojson.property_str(PROP_CLASS).map(str::to_string);
            let end = count - 2;
            for index in [0, end] {
                if let Some(position) = geojson.outer_ring_point(index) {
                    emit(vertex_marker(
                        self.feature_id,
                        position,
                        CoordPath::new(0, index),
                        false,
                        parent_class.as_deref(),
                    ));
                }
            }
        }

        if count > 4 {
            emit(geojson);
        }
    }

    fn on_click(&mut self, ctx: &mut Context<'_>, event: &PointerEvent) {
        match self.state {
            DrawState::Sizing => self.commit(ctx),
            DrawState::AwaitingCenter => self.place_center(ctx, event.lng_lat),
            DrawState::Committed | DrawState::Discarded(_) => {
                tracing::trace!(state = ?self.state, "click ignored");
            }
        }

        // Clicking a vertex marker commits on its own, whatever happened above.
        if event.on_vertex && !self.state.is_terminal() {
            self.commit(ctx);
        }
    }

    fn on_mouse_move(&mut self, ctx: &mut Context<'_>, event: &PointerEvent) {
        if self.state != DrawState::Sizing {
            return;
        }
        self.resize_to(ctx, event);
    }

    fn on_key_up(&mut self, ctx: &mut Context<'_>, key: Key) {
        match (key, self.state) {
            (Key::Escape, state) if !state.is_terminal() => self.abort(ctx),
            (Key::Enter, DrawState::Sizing) => self.commit(ctx),
            _ => tracing::trace!(?key, state = ?self.state, "key ignored"),
        }
    }

    fn trash(&mut self, ctx: &mut Context<'_>) {
        if self.state.is_terminal() {
            return;
        }
        self.abort(ctx);
    }

    fn is_finished(&self) -> bool {
        self.state.is_terminal()
    }
}
