use crate::app::api::ConfigStore;
use crate::app::config::{DEFAULT_INTERVAL_SECS, MAX_DAY_OF_MONTH};
use crate::app::error::StoreError;
use crate::app::paths::{normalize, to_store, PathConvention};
use crate::app::types::ScheduleConfig;
use crate::{ui_error, ui_log};

/// Current values of the schedule inputs, as the DOM holds them.
///
/// The week and day selectors are single-select although the store keeps a
/// list: on load only the first entry shows up, on save the one selected
/// value becomes a one-element list.
#[derive(Clone, Debug, PartialEq)]
pub struct FormFields {
    pub interval: String,
    pub start_time: String,
    pub end_time: String,
    pub weekly: String,
    pub monthly: String,
    pub default_wallpaper: String,
    pub random: bool,
}

impl Default for FormFields {
    fn default() -> Self {
        FormFields::from_config(&ScheduleConfig::default())
    }
}

fn blank_to_none(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

impl FormFields {
    pub fn from_config(config: &ScheduleConfig) -> Self {
        let interval = if config.interval == 0 { DEFAULT_INTERVAL_SECS } else { config.interval };
        Self {
            interval: interval.to_string(),
            start_time: config.start_dt.clone().unwrap_or_default(),
            end_time: config.end_dt.clone().unwrap_or_default(),
            weekly: config
                .weekly
                .as_ref()
                .and_then(|days| days.first())
                .cloned()
                .unwrap_or_default(),
            monthly: config
                .monthly
                .as_ref()
                .and_then(|days| days.first())
                .map(|d| d.to_string())
                .unwrap_or_default(),
            default_wallpaper: config
                .default_wallpaper_path
                .as_deref()
                .map(normalize)
                .unwrap_or_default(),
            random: config.random,
        }
    }

    /// Build the snapshot to save. Fields the form does not edit come from
    /// `base` (the config as loaded). `fileTargets` is left empty: the store
    /// keeps its own list when a snapshot carries none.
    pub fn to_config(&self, base: &ScheduleConfig, convention: PathConvention) -> ScheduleConfig {
        let fallback = if base.interval == 0 { DEFAULT_INTERVAL_SECS } else { base.interval };
        let interval = match self.interval.trim().parse::<u64>() {
            Ok(secs) if secs > 0 => secs,
            _ => fallback,
        };
        let weekly = blank_to_none(&self.weekly).map(|day| vec![day.to_ascii_lowercase()]);
        let monthly = self
            .monthly
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|day| (1..=MAX_DAY_OF_MONTH).contains(day))
            .map(|day| vec![day]);

        ScheduleConfig {
            interval,
            start_dt: blank_to_none(&self.start_time),
            end_dt: blank_to_none(&self.end_time),
            weekly,
            monthly,
            default_wallpaper_path: blank_to_none(&self.default_wallpaper)
                .map(|p| to_store(&p, convention)),
            file_targets: Vec::new(),
            random: self.random,
            ..base.clone()
        }
    }
}

/// Fetch the config and derive the form from it. A failed load is logged and
/// treated as an empty config, so the page still comes up.
pub async fn load_form<S: ConfigStore>(store: &S) -> (FormFields, ScheduleConfig) {
    let config = match store.load_config().await {
        Ok(config) => {
            ui_log!(
                "[Form] loaded config: interval={}s, {} target(s)",
                config.interval,
                config.file_targets.len()
            );
            config
        }
        Err(e) => {
            ui_error!("[Form] load failed, using defaults: {}", e);
            ScheduleConfig::default()
        }
    };
    (FormFields::from_config(&config), config)
}

/// Send the full form snapshot. Runs on every input/change event, no debounce.
pub async fn autosave<S: ConfigStore>(
    store: &S,
    fields: &FormFields,
    base: &ScheduleConfig,
    convention: PathConvention,
) -> Result<(), StoreError> {
    let snapshot = fields.to_config(base, convention);
    store.save_config(&snapshot).await
}
