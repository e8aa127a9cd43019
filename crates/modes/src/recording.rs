use crate::constants::{Cursor, ModeName, Tool};
use crate::host::{Actions, DrawEvent, MapSurface, ModeDispatch, ModePayload, Ui};

/// One call made by a mode into its host.
#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    ModeChanged {
        mode: ModeName,
        payload: ModePayload,
        silent: bool,
    },
    Actionable(Actions),
    Cursor(Cursor),
    ActiveButton(Option<Tool>),
    DoubleClickZoom(bool),
    Fired(DrawEvent),
}

/// Host that records every call in order instead of acting on it.
#[derive(Debug, Default)]
pub struct RecordingHost {
    events: Vec<HostEvent>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn events(&self) -> &[HostEvent] {
        &self.events
    }

    pub fn drain(&mut self) -> Vec<HostEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn fired(&self) -> impl Iterator<Item = &DrawEvent> + '_ {
        self.events.iter().filter_map(|e| match e {
            HostEvent::Fired(ev) => Some(ev),
            _ => None,
        })
    }

    pub fn mode_changes(&self) -> impl Iterator<Item = (ModeName, &ModePayload, bool)> + '_ {
        self.events.iter().filter_map(|e| match e {
            HostEvent::ModeChanged {
                mode,
                payload,
                silent,
            } => Some((*mode, payload, *silent)),
            _ => None,
        })
    }

    pub fn last_cursor(&self) -> Option<Cursor> {
        self.events.iter().rev().find_map(|e| match e {
            HostEvent::Cursor(c) => Some(*c),
            _ => None,
        })
    }

    /// Current double-click zoom state, `None` if never touched.
    pub fn double_click_zoom(&self) -> Option<bool> {
        self.events.iter().rev().find_map(|e| match e {
            HostEvent::DoubleClickZoom(enabled) => Some(*enabled),
            _ => None,
        })
    }
}

impl ModeDispatch for RecordingHost {
    fn change_mode(&mut self, mode: ModeName, payload: ModePayload, silent: bool) {
        tracing::trace!(mode = mode.as_str(), silent, "change mode");
        self.events.push(HostEvent::ModeChanged {
            mode,
            payload,
            silent,
        });
    }

    fn actionable(&mut self, actions: Actions) {
        self.events.push(HostEvent::Actionable(actions));
    }
}

impl Ui for RecordingHost {
    fn queue_map_classes(&mut self, cursor: Cursor) {
        tracing::trace!(mouse = cursor.as_str(), "queue map classes");
        self.events.push(HostEvent::Cursor(cursor));
    }

    fn set_active_button(&mut self, tool: Option<Tool>) {
        tracing::trace!(button = tool.map(Tool::as_str), "set active button");
        self.events.push(HostEvent::ActiveButton(tool));
    }
}

impl MapSurface for RecordingHost {
    fn set_double_click_zoom(&mut self, enabled: bool) {
        self.events.push(HostEvent::DoubleClickZoom(enabled));
    }

    fn fire(&mut self, event: DrawEvent) {
        self.events.push(HostEvent::Fired(event));
    }
}
