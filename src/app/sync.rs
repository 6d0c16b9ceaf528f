//! Flows that connect the target set, the gallery and the drop zone.
//!
//! The gallery signal is only written here and in the gallery view, and only
//! through [`GalleryState`]'s own methods.

use leptos::prelude::*;
use leptos_dragdrop::{DropEvent, DropZone};

use crate::app::api::ConfigStore;
use crate::app::error::StoreError;
use crate::app::gallery::GalleryState;
use crate::app::paths::PathConvention;
use crate::app::targets::{add_targets, remove_target};
use crate::{ui_log, ui_warn};

/// Send `paths` to the store and show whatever it answers with. Paths the
/// user detached earlier are shown again if the store lists them.
/// Returns how many thumbnails were added.
pub async fn add_paths<S: ConfigStore>(
    store: &S,
    gallery: RwSignal<GalleryState>,
    paths: Vec<String>,
    convention: PathConvention,
) -> Result<usize, StoreError> {
    gallery.update(|g| g.readmit(&paths));
    let Some(authoritative) = add_targets(store, &paths, convention).await? else {
        return Ok(0);
    };
    let (added, total) = gallery
        .try_update(|g| (g.reconcile(&authoritative), g.len()))
        .unwrap_or_default();
    ui_log!("[Gallery] {} new thumbnail(s), {} shown", added, total);
    Ok(added)
}

/// Transition end on a thumbnail. If the node was fading out it is detached
/// right away and the store is told afterwards; the result of that call does
/// not change what the gallery shows. Returns whether a removal happened.
pub async fn finish_removal<S: ConfigStore>(
    store: &S,
    gallery: RwSignal<GalleryState>,
    key: &str,
    convention: PathConvention,
) -> Result<bool, StoreError> {
    let Some(removed) = gallery.try_update(|g| g.finish_remove(key)).flatten() else {
        return Ok(false);
    };
    let result = remove_target(store, &removed, convention).await;
    gallery.update(|g| g.settle_removal(&removed));
    result.map(|_| true)
}

/// Host drag and drop event. Hover and cancel only move the affordance; a
/// drop with paths goes through [`add_paths`].
pub async fn handle_drop_event<S: ConfigStore>(
    store: &S,
    zone: DropZone,
    gallery: RwSignal<GalleryState>,
    event: DropEvent,
    convention: PathConvention,
) -> Result<usize, StoreError> {
    match zone.handle(event) {
        Some(paths) => add_paths(store, gallery, paths, convention).await,
        None => Ok(0),
    }
}

/// Log-and-forget for event handlers; store failures have no UI surface.
pub fn report<T>(context: &str, result: Result<T, StoreError>) {
    if let Err(e) = result {
        ui_warn!("[{}] {}", context, e);
    }
}
