use std::rc::Rc;

use leptos::task::spawn_local;
use leptos_dragdrop::DropEvent;
use wasm_bindgen::prelude::*;

use crate::app::api::listen;
use crate::app::config::host_events;
use crate::app::error::describe_js;
use crate::app::types::{DragDropPayload, HostEvent};
use crate::{ui_error, ui_log};

/// Map a host window event to a drop-zone event. Unknown names are ignored.
pub fn classify(event_name: &str, payload: Option<DragDropPayload>) -> Option<DropEvent> {
    match event_name {
        host_events::DRAG_ENTER | host_events::DRAG_OVER => Some(DropEvent::Hover),
        host_events::DRAG_LEAVE => Some(DropEvent::Cancel),
        host_events::DRAG_DROP => Some(DropEvent::Drop(payload.unwrap_or_default().paths)),
        _ => None,
    }
}

/// Subscribe to the host's OS-level drag and drop events for the lifetime of
/// the page.
pub fn listen_host_drag_events(on_event: impl Fn(DropEvent) + 'static) {
    let on_event = Rc::new(on_event);
    for name in host_events::ALL {
        let on_event = on_event.clone();
        spawn_local(async move {
            let handler = Closure::<dyn FnMut(JsValue)>::new(move |raw: JsValue| {
                let event = match serde_wasm_bindgen::from_value::<HostEvent<DragDropPayload>>(raw) {
                    Ok(event) => event,
                    Err(e) => {
                        ui_error!("[DropZone] bad {} payload: {:?}", name, e);
                        return;
                    }
                };
                if let Some(drop_event) = classify(&event.event, event.payload) {
                    on_event(drop_event);
                }
            });
            match listen(name, &handler).await {
                Ok(_) => ui_log!("[DropZone] listening for {}", name),
                Err(e) => ui_error!("[DropZone] listen {} failed: {}", name, describe_js(&e)),
            }
            handler.forget();
        });
    }
}
