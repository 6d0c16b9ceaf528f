use leptos::prelude::*;

/// Visual state of a drop target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DropZoneState {
    #[default]
    Idle,
    Hovering,
}

/// Events coming from the host windowing layer (OS-level drag and drop).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DropEvent {
    Hover,
    Cancel,
    Drop(Vec<String>),
}

/// Every event lands in the same state no matter where we came from, so the
/// transition only looks at the event. A drop yields its paths when there are any.
pub fn transition(event: DropEvent) -> (DropZoneState, Option<Vec<String>>) {
    match event {
        DropEvent::Hover => (DropZoneState::Hovering, None),
        DropEvent::Cancel => (DropZoneState::Idle, None),
        DropEvent::Drop(paths) => {
            let forwarded = if paths.is_empty() { None } else { Some(paths) };
            (DropZoneState::Idle, forwarded)
        }
    }
}

/// Reactive handle around [`DropZoneState`]; `Copy` so it can move into
/// every event closure of a view.
#[derive(Clone, Copy)]
pub struct DropZone {
    state: RwSignal<DropZoneState>,
}

impl Default for DropZone {
    fn default() -> Self {
        Self::new()
    }
}

impl DropZone {
    pub fn new() -> Self {
        Self { state: RwSignal::new(DropZoneState::Idle) }
    }

    pub fn state(&self) -> DropZoneState {
        self.state.get()
    }

    pub fn is_hovering(&self) -> bool {
        self.state.get() == DropZoneState::Hovering
    }

    /// Feed a host event; returns the paths to add when a non-empty drop lands.
    pub fn handle(&self, event: DropEvent) -> Option<Vec<String>> {
        let (next, forwarded) = transition(event);
        if self.state.get_untracked() != next {
            self.state.set(next);
        }
        forwarded
    }

    /// In-page dragover. Only the affordance changes, no paths are carried.
    pub fn browser_drag_over(&self, ev: &web_sys::DragEvent) {
        ev.prevent_default();
        self.handle(DropEvent::Hover);
    }

    pub fn browser_drag_leave(&self, _ev: &web_sys::DragEvent) {
        self.handle(DropEvent::Cancel);
    }

    /// The webview's own drop. The files arrive through the host event, so
    /// this just keeps the browser from navigating to the dropped file.
    pub fn browser_drop(&self, ev: &web_sys::DragEvent) {
        ev.prevent_default();
        self.handle(DropEvent::Cancel);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_then_cancel_returns_to_idle() {
        let (state, out) = transition(DropEvent::Hover);
        assert_eq!(state, DropZoneState::Hovering);
        assert!(out.is_none());

        let (state, out) = transition(DropEvent::Cancel);
        assert_eq!(state, DropZoneState::Idle);
        assert!(out.is_none());
    }

    #[test]
    fn drop_forwards_paths() {
        let paths = vec!["C:\\img\\a.png".to_string(), "C:\\img\\b.png".to_string()];
        let (state, out) = transition(DropEvent::Drop(paths.clone()));
        assert_eq!(state, DropZoneState::Idle);
        assert_eq!(out, Some(paths));
    }

    #[test]
    fn empty_drop_is_a_no_op() {
        let (state, out) = transition(DropEvent::Drop(Vec::new()));
        assert_eq!(state, DropZoneState::Idle);
        assert_eq!(out, None);
    }

    #[test]
    fn drop_zone_tracks_hover_affordance() {
        let zone = DropZone::new();
        assert_eq!(zone.state(), DropZoneState::Idle);

        assert!(zone.handle(DropEvent::Hover).is_none());
        assert!(zone.is_hovering());
        // repeated hover events keep hovering
        assert!(zone.handle(DropEvent::Hover).is_none());
        assert!(zone.is_hovering());

        let out = zone.handle(DropEvent::Drop(vec!["/tmp/a.png".to_string()]));
        assert_eq!(out, Some(vec!["/tmp/a.png".to_string()]));
        assert!(!zone.is_hovering());
    }
}
