//! Replays a recorded list of inputs through a mode.
//!
//! The session plays the dispatcher's part: it starts the mode, forwards each
//! input, and stops the mode as soon as it asks for a mode change.

use std::fmt;

use crate::host::Context;
use crate::input::{InputEvent, PointerEvent};
use crate::mode::{Mode, StopOutcome};

#[derive(Debug)]
pub enum SessionError {
    Parse(serde_json::Error),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Parse(err) => write!(f, "Input script parse error: {err}"),
        }
    }
}

impl std::error::Error for SessionError {}

/// Parses a JSON array of [`InputEvent`]s.
pub fn parse_script(payload: &str) -> Result<Vec<InputEvent>, SessionError> {
    serde_json::from_str(payload).map_err(SessionError::Parse)
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionReport {
    /// Inputs forwarded to the mode before it finished.
    pub processed: usize,
    /// `None` if the mode was still active at the end of the script and
    /// `stop_at_end` was not requested.
    pub outcome: Option<StopOutcome>,
}

/// Runs `events` through `mode`, which must not have been started yet.
pub fn replay(
    mode: &mut dyn Mode,
    ctx: &mut Context<'_>,
    events: &[InputEvent],
    stop_at_end: bool,
) -> SessionReport {
    mode.start(ctx);

    let mut processed = 0;
    for event in events {
        if mode.is_finished() {
            break;
        }
        dispatch(mode, ctx, event);
        processed += 1;
    }

    if processed < events.len() {
        tracing::debug!(
            skipped = events.len() - processed,
            "mode finished before the end of the script"
        );
    }

    let outcome = if mode.is_finished() || stop_at_end {
        Some(mode.stop(ctx))
    } else {
        None
    };
    SessionReport { processed, outcome }
}

fn dispatch(mode: &mut dyn Mode, ctx: &mut Context<'_>, event: &InputEvent) {
    match event {
        InputEvent::Click { lng, lat, vertex } => {
            mode.on_click(ctx, &PointerEvent::new(*lng, *lat, *vertex));
        }
        InputEvent::MouseMove { lng, lat, vertex } => {
            mode.on_mouse_move(ctx, &PointerEvent::new(*lng, *lat, *vertex));
        }
        InputEvent::KeyUp { key } => mode.on_key_up(ctx, *key),
        InputEvent::Trash => mode.trash(ctx),
    }
}

#[cfg(test)]
mod tests {
    use super::{SessionError, parse_script, replay};
    use crate::draw_circle::{DrawCircleMode, DrawState};
    use crate::host::Context;
    use crate::mode::StopOutcome;
    use crate::constants::Cursor;
    use crate::recording::RecordingHost;
    use features::{Discard, MemoryStore};

    const DRAW_AND_COMMIT: &str = r#"[
        { "type": "click", "lng": 10.0, "lat": 20.0 },
        { "type": "mouse_move", "lng": 10.0, "lat": 20.004 },
        { "type": "click", "lng": 10.0, "lat": 20.004 },
        { "type": "mouse_move", "lng": 10.0, "lat": 20.5 }
    ]"#;

    #[test]
    fn replays_until_commit() {
        let events = parse_script(DRAW_AND_COMMIT).expect("parse script");
        let mut store = MemoryStore::new();
        let mut host = RecordingHost::new();
        let mut mode = DrawCircleMode::new(&mut store);

        let report = replay(
            &mut mode,
            &mut Context::new(&mut store, &mut host),
            &events,
            false,
        );
        assert_eq!(report.processed, 3);
        assert!(matches!(report.outcome, Some(StopOutcome::Created(_))));
        assert_eq!(mode.state(), DrawState::Committed);
        assert_eq!(host.fired().count(), 1);
    }

    #[test]
    fn unfinished_script_leaves_mode_active_unless_stopped() {
        let events = parse_script(r#"[{ "type": "click", "lng": 1.0, "lat": 2.0 }]"#)
            .expect("parse script");

        let mut store = MemoryStore::new();
        let mut host = RecordingHost::new();
        let mut mode = DrawCircleMode::new(&mut store);
        let report = replay(
            &mut mode,
            &mut Context::new(&mut store, &mut host),
            &events,
            false,
        );
        assert_eq!(report.outcome, None);
        assert_eq!(mode.state(), DrawState::Sizing);

        let mut store = MemoryStore::new();
        let mut host = RecordingHost::new();
        let mut mode = DrawCircleMode::new(&mut store);
        let report = replay(
            &mut mode,
            &mut Context::new(&mut store, &mut host),
            &events,
            true,
        );
        assert!(matches!(report.outcome, Some(StopOutcome::Created(_))));
    }

    #[test]
    fn escape_script_discards() {
        let events = parse_script(r#"[{ "type": "key_up", "key": "Escape" }]"#)
            .expect("parse script");
        let mut store = MemoryStore::new();
        let mut host = RecordingHost::new();
        let mut mode = DrawCircleMode::new(&mut store);
        let report = replay(
            &mut mode,
            &mut Context::new(&mut store, &mut host),
            &events,
            false,
        );
        assert_eq!(report.outcome, Some(StopOutcome::Discarded(Discard::Aborted)));
        assert!(store.is_empty());
    }

    #[test]
    fn vertex_flag_reaches_the_mode() {
        let events = parse_script(r#"[{ "type": "click", "lng": 10.0, "lat": 20.0, "vertex": true }]"#)
            .expect("parse script");
        let mut store = MemoryStore::new();
        let mut host = RecordingHost::new();
        let mut mode = DrawCircleMode::new(&mut store);
        let report = replay(
            &mut mode,
            &mut Context::new(&mut store, &mut host),
            &events,
            false,
        );
        assert_eq!(report.processed, 1);
        assert!(matches!(report.outcome, Some(StopOutcome::Created(_))));

        let events = parse_script(
            r#"[
                { "type": "click", "lng": 10.0, "lat": 20.0 },
                { "type": "mouse_move", "lng": 10.0, "lat": 20.002, "vertex": true }
            ]"#,
        )
        .expect("parse script");
        let mut store = MemoryStore::new();
        let mut host = RecordingHost::new();
        let mut mode = DrawCircleMode::new(&mut store);
        replay(
            &mut mode,
            &mut Context::new(&mut store, &mut host),
            &events,
            false,
        );
        assert_eq!(mode.state(), DrawState::Sizing);
        assert_eq!(host.last_cursor(), Some(Cursor::Pointer));
    }

    #[test]
    fn rejects_malformed_scripts() {
        let err = parse_script(r#"[{ "type": "wiggle" }]"#).expect_err("expect parse error");
        let SessionError::Parse(inner) = err;
        assert!(inner.is_data());
    }
}
