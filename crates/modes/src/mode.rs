use features::{Discard, GeoJsonFeature};

use crate::host::Context;
use crate::input::{Key, PointerEvent};

/// What a mode left behind when it stopped.
#[derive(Debug, Clone, PartialEq)]
pub enum StopOutcome {
    /// The feature was kept and a creation event fired with this payload.
    Created(GeoJsonFeature),
    /// The feature was removed from the store.
    Discarded(Discard),
    /// The feature had already left the store; nothing was done.
    Missing,
}

/// An interaction mode driven by a dispatcher.
///
/// The dispatcher calls `start` once, forwards input until the mode asks for a
/// mode change (`is_finished`), then calls `stop` once. `render` may be called
/// at any point between `start` and `stop`, once per candidate feature.
pub trait Mode {
    fn start(&mut self, ctx: &mut Context<'_>);

    fn stop(&mut self, ctx: &mut Context<'_>) -> StopOutcome;

    fn render(&self, geojson: GeoJsonFeature, emit: &mut dyn FnMut(GeoJsonFeature));

    fn on_click(&mut self, _ctx: &mut Context<'_>, _event: &PointerEvent) {}

    fn on_mouse_move(&mut self, _ctx: &mut Context<'_>, _event: &PointerEvent) {}

    fn on_key_up(&mut self, _ctx: &mut Context<'_>, _key: Key) {}

    fn trash(&mut self, _ctx: &mut Context<'_>) {}

    /// `true` once the mode has requested a change to another mode.
    fn is_finished(&self) -> bool {
        false
    }
}
