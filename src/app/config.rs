//! UI constants. Everything persisted lives in the store; this is only what
//! the front-end needs to talk to it and draw itself.

pub const DEFAULT_INTERVAL_SECS: u64 = 60;

pub const IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "bmp", "gif", "webp"];

pub const EMPTY_GALLERY_TEXT: &str = "No images registered";

/// `(value sent to the store, label)` for the weekday selector.
pub const WEEKDAYS: [(&str, &str); 7] = [
    ("sun", "Sun"),
    ("mon", "Mon"),
    ("tue", "Tue"),
    ("wed", "Wed"),
    ("thu", "Thu"),
    ("fri", "Fri"),
    ("sat", "Sat"),
];

pub const MAX_DAY_OF_MONTH: u32 = 31;

pub mod commands {
    pub const LOAD_CONFIG: &str = "load_config_for_frontend";
    pub const SAVE_CONFIG: &str = "save_config";
    pub const ADD_FILE_TARGETS: &str = "add_file_targets";
    pub const REMOVE_FILE_TARGET: &str = "remove_file_target";
}

/// Window events the host emits for OS-level drag and drop.
pub mod host_events {
    pub const DRAG_ENTER: &str = "tauri://drag-enter";
    pub const DRAG_OVER: &str = "tauri://drag-over";
    pub const DRAG_LEAVE: &str = "tauri://drag-leave";
    pub const DRAG_DROP: &str = "tauri://drag-drop";

    pub const ALL: [&str; 4] = [DRAG_ENTER, DRAG_OVER, DRAG_LEAVE, DRAG_DROP];
}
