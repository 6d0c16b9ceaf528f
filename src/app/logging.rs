//! Console logging for the UI.
//!
//! In the webview everything goes to the browser console like the rest of the
//! front-end does. Native builds (unit tests) print to stderr instead, since
//! calling into `console` outside wasm panics.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Info,
    Warn,
    Error,
}

impl Level {
    #[cfg_attr(target_arch = "wasm32", allow(dead_code))]
    fn tag(self) -> &'static str {
        match self {
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        }
    }
}

#[doc(hidden)]
pub fn emit(level: Level, message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let line = wasm_bindgen::JsValue::from_str(message);
        match level {
            Level::Info => web_sys::console::log_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Error => web_sys::console::error_1(&line),
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("[{}] {}", level.tag(), message);
}

#[macro_export]
macro_rules! ui_log {
    ($($arg:tt)*) => {
        $crate::app::logging::emit($crate::app::logging::Level::Info, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! ui_warn {
    ($($arg:tt)*) => {
        $crate::app::logging::emit($crate::app::logging::Level::Warn, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! ui_error {
    ($($arg:tt)*) => {
        $crate::app::logging::emit($crate::app::logging::Level::Error, &format!($($arg)*))
    };
}
