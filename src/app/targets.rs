//! File targets: the image paths the host rotates through.
//!
//! Adding is send-then-reconcile: the raw paths go to the store, which merges
//! and dedups against what it already has, and its full answer is what the UI
//! shows. Nothing is merged locally. Removal is the opposite: the gallery drops
//! its node first and [`remove_target`] only tells the store afterwards.

use crate::app::api::ConfigStore;
use crate::app::error::StoreError;
use crate::app::paths::{normalize, to_store, PathConvention};
use crate::app::types::ScheduleConfig;
use crate::ui_log;

/// Returns the store's authoritative list in UI convention, or `None` when
/// there was nothing to send (no call is made then).
pub async fn add_targets<S: ConfigStore>(
    store: &S,
    paths: &[String],
    convention: PathConvention,
) -> Result<Option<Vec<String>>, StoreError> {
    if paths.is_empty() {
        return Ok(None);
    }
    let outgoing: Vec<String> = paths.iter().map(|p| to_store(p, convention)).collect();
    ui_log!("[Targets] adding {} path(s)", outgoing.len());

    let authoritative = store.add_file_targets(outgoing).await?;
    ui_log!("[Targets] store now holds {} target(s)", authoritative.len());
    Ok(Some(authoritative.iter().map(|p| normalize(p)).collect()))
}

pub async fn remove_target<S: ConfigStore>(
    store: &S,
    path: &str,
    convention: PathConvention,
) -> Result<(), StoreError> {
    let outgoing = to_store(path, convention);
    ui_log!("[Targets] removing {}", outgoing);
    store.remove_file_target(outgoing).await
}

/// Targets of a freshly loaded config, in UI convention.
pub fn initial_targets(config: &ScheduleConfig) -> Vec<String> {
    config.file_targets.iter().map(|p| normalize(p)).collect()
}
