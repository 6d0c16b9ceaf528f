use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::app::config::{commands, IMAGE_EXTENSIONS};
use crate::app::error::StoreError;
use crate::app::paths::is_image_path;
use crate::app::types::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"], catch)]
    pub async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"], js_name = convertFileSrc)]
    pub fn convert_file_src(path: &str) -> String;

    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "dialog"], js_name = open, catch)]
    async fn open_dialog(options: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "event"], js_name = listen, catch)]
    pub async fn listen(event: &str, handler: &Closure<dyn FnMut(JsValue)>) -> Result<JsValue, JsValue>;
}

/// The four operations of the configuration store.
///
/// Every path crossing this boundary is in the store's convention; converting
/// is up to the caller (see [`crate::app::paths`]).
#[allow(async_fn_in_trait)]
pub trait ConfigStore {
    async fn load_config(&self) -> Result<ScheduleConfig, StoreError>;

    async fn save_config(&self, config: &ScheduleConfig) -> Result<(), StoreError>;

    /// Returns the complete target list after the store merged `paths` in.
    async fn add_file_targets(&self, paths: Vec<String>) -> Result<Vec<String>, StoreError>;

    async fn remove_file_target(&self, path: String) -> Result<(), StoreError>;
}

/// Store reached through the host's `invoke` bridge.
#[derive(Clone, Copy, Debug, Default)]
pub struct TauriStore;

// Options become `null` rather than `undefined`, so the store sees
// `"weekly": null` instead of a missing key.
fn encode<A: Serialize>(command: &'static str, args: &A) -> Result<JsValue, StoreError> {
    args.serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| StoreError::encode(command, e))
}

async fn call<R: DeserializeOwned>(command: &'static str, args: JsValue) -> Result<R, StoreError> {
    let value = invoke(command, args)
        .await
        .map_err(|e| StoreError::rejected(command, e))?;
    serde_wasm_bindgen::from_value::<R>(value).map_err(|e| StoreError::decode(command, e))
}

impl ConfigStore for TauriStore {
    async fn load_config(&self) -> Result<ScheduleConfig, StoreError> {
        call(commands::LOAD_CONFIG, JsValue::NULL).await
    }

    async fn save_config(&self, config: &ScheduleConfig) -> Result<(), StoreError> {
        let args = encode(commands::SAVE_CONFIG, &SaveConfigArgs { config })?;
        invoke(commands::SAVE_CONFIG, args)
            .await
            .map_err(|e| StoreError::rejected(commands::SAVE_CONFIG, e))?;
        Ok(())
    }

    async fn add_file_targets(&self, paths: Vec<String>) -> Result<Vec<String>, StoreError> {
        let args = encode(commands::ADD_FILE_TARGETS, &AddFileTargetsArgs { paths })?;
        call(commands::ADD_FILE_TARGETS, args).await
    }

    async fn remove_file_target(&self, path: String) -> Result<(), StoreError> {
        let args = encode(commands::REMOVE_FILE_TARGET, &RemoveFileTargetArgs { path })?;
        // the store answers with its remaining list; the gallery already dropped the node
        invoke(commands::REMOVE_FILE_TARGET, args)
            .await
            .map_err(|e| StoreError::rejected(commands::REMOVE_FILE_TARGET, e))?;
        Ok(())
    }
}

#[derive(Serialize)]
struct DialogFilter {
    name: &'static str,
    extensions: &'static [&'static str],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OpenDialogOptions {
    multiple: bool,
    directory: bool,
    filters: Vec<DialogFilter>,
}

/// Ask the host for image files. A cancelled dialog resolves to an empty list.
pub async fn pick_images(multiple: bool) -> Result<Vec<String>, StoreError> {
    let options = OpenDialogOptions {
        multiple,
        directory: false,
        filters: vec![DialogFilter { name: "Images", extensions: &IMAGE_EXTENSIONS }],
    };
    let options = options
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| StoreError::Picker(e.to_string()))?;
    let value = open_dialog(options)
        .await
        .map_err(|e| StoreError::Picker(crate::app::error::describe_js(&e)))?;
    let selection = serde_wasm_bindgen::from_value::<Option<PickerSelection>>(value)
        .map_err(|e| StoreError::Picker(e.to_string()))?;
    // some platforms let the user switch the filter to "all files"
    let (images, skipped): (Vec<String>, Vec<String>) = PickerSelection::into_paths(selection)
        .into_iter()
        .partition(|p| is_image_path(p));
    if !skipped.is_empty() {
        crate::ui_warn!("[Picker] ignoring {} non-image file(s)", skipped.len());
    }
    Ok(images)
}
