use serde::{Deserialize, Serialize};

use crate::app::config::DEFAULT_INTERVAL_SECS;

fn default_interval() -> u64 {
    DEFAULT_INTERVAL_SECS
}

fn default_random() -> bool {
    true
}

/// Snapshot of the store's configuration. Field names follow the store's JSON.
///
/// `weekly` and `monthly` are either `None` or non-empty; "nothing selected"
/// is sent as `null`, never as `[]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleConfig {
    #[serde(default = "default_interval")]
    pub interval: u64,
    #[serde(default)]
    pub start_dt: Option<String>,
    #[serde(default)]
    pub end_dt: Option<String>,
    #[serde(default)]
    pub weekly: Option<Vec<String>>,
    #[serde(default)]
    pub monthly: Option<Vec<u32>>,
    #[serde(default)]
    pub default_wallpaper_path: Option<String>,
    #[serde(default)]
    pub file_targets: Vec<String>,
    #[serde(default = "default_random")]
    pub random: bool,
    // window state owned by the host, carried through untouched
    #[serde(default)]
    pub window_width: Option<u32>,
    #[serde(default)]
    pub window_height: Option<u32>,
    #[serde(default)]
    pub window_minimized: Option<bool>,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            interval: default_interval(),
            start_dt: None,
            end_dt: None,
            weekly: None,
            monthly: None,
            default_wallpaper_path: None,
            file_targets: Vec::new(),
            random: default_random(),
            window_width: None,
            window_height: None,
            window_minimized: None,
        }
    }
}

#[derive(Serialize)]
pub struct SaveConfigArgs<'a> {
    pub config: &'a ScheduleConfig,
}

#[derive(Serialize, Deserialize)]
pub struct AddFileTargetsArgs {
    pub paths: Vec<String>,
}

#[derive(Serialize, Deserialize)]
pub struct RemoveFileTargetArgs {
    pub path: String,
}

/// Payload of the host's drag and drop window events.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct DragDropPayload {
    #[serde(default)]
    pub paths: Vec<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct HostEvent<T> {
    pub event: String,
    #[serde(default)]
    pub payload: Option<T>,
}

/// What the file dialog hands back: nothing, one path or several.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PickerSelection {
    One(String),
    Many(Vec<String>),
}

impl PickerSelection {
    pub fn into_paths(selection: Option<Self>) -> Vec<String> {
        match selection {
            None => Vec::new(),
            Some(PickerSelection::One(path)) => vec![path],
            Some(PickerSelection::Many(paths)) => paths,
        }
    }
}
