use thiserror::Error;

/// Failures of a call to the host: the store commands and the file dialog.
///
/// Callers in the UI log these and move on; nothing here is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("store rejected `{command}`: {message}")]
    Rejected { command: &'static str, message: String },

    #[error("unexpected response from `{command}`: {message}")]
    Decode { command: &'static str, message: String },

    #[error("failed to encode arguments for `{command}`: {message}")]
    Encode { command: &'static str, message: String },

    #[error("file dialog failed: {0}")]
    Picker(String),
}

impl StoreError {
    pub fn rejected(command: &'static str, reason: wasm_bindgen::JsValue) -> Self {
        StoreError::Rejected { command, message: describe_js(&reason) }
    }

    pub fn decode(command: &'static str, err: impl std::fmt::Display) -> Self {
        StoreError::Decode { command, message: err.to_string() }
    }

    pub fn encode(command: &'static str, err: impl std::fmt::Display) -> Self {
        StoreError::Encode { command, message: err.to_string() }
    }
}

/// Tauri rejects with the command's `Err(String)`; anything else is a JS error object.
pub fn describe_js(value: &wasm_bindgen::JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
