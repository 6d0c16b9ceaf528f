//! Path handling shared by the form, the target set and the gallery.
//!
//! Inside the UI every path uses `/` so that paths coming from the file
//! dialog, the OS drop handler and the store compare equal and can key DOM
//! nodes. The store wants its own platform separator, so paths are converted
//! with [`to_store`] right before each call and with [`normalize`] right after
//! anything comes back.

use crate::app::config::IMAGE_EXTENSIONS;

/// Separator convention of the store's platform.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PathConvention {
    #[default]
    Windows,
    Posix,
}

impl PathConvention {
    pub fn separator(self) -> char {
        match self {
            PathConvention::Windows => '\\',
            PathConvention::Posix => '/',
        }
    }

    /// Guess the host platform from the webview's navigator. Falls back to
    /// Windows, which is what the host process ships on.
    pub fn detect() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(win) = web_sys::window() {
                let navigator = win.navigator();
                let platform = navigator.platform().unwrap_or_default();
                let agent = navigator.user_agent().unwrap_or_default();
                if platform.starts_with("Win") || agent.contains("Windows") {
                    return PathConvention::Windows;
                }
                if !platform.is_empty() || !agent.is_empty() {
                    return PathConvention::Posix;
                }
            }
        }
        PathConvention::default()
    }
}

pub fn normalize(path: &str) -> String {
    path.replace('\\', "/")
}

pub fn to_store(path: &str, convention: PathConvention) -> String {
    let separator = convention.separator().to_string();
    path.replace(['/', '\\'], &separator)
}

/// Plain string equality after separator unification. No case folding and no
/// filesystem access.
pub fn same_path(a: &str, b: &str) -> bool {
    a.len() == b.len() && normalize(a) == normalize(b)
}

pub fn file_name(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

pub fn is_image_path(path: &str) -> bool {
    let name = file_name(path);
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => IMAGE_EXTENSIONS
            .iter()
            .any(|known| known.eq_ignore_ascii_case(ext)),
        _ => false,
    }
}
