//! Local export of the current workflow as a JSON download

use flowcanvas_core::{EXPORT_FILE_NAME, GraphSnapshot};
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::error::{Result, UiError};

/// Serializes `snapshot` and triggers a browser download of it.
///
/// # Errors
/// Returns [`UiError::Download`] if serialization fails or
/// [`UiError::Dom`] if the browser refuses to create the file.
pub fn download_snapshot(snapshot: &GraphSnapshot) -> Result<()> {
    let text = snapshot
        .to_pretty_json()
        .map_err(|e| UiError::Download(e.to_string()))?;

    let parts = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(&text));
    let options = BlobPropertyBag::new();
    options.set_type("application/json");
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)
        .map_err(|e| UiError::dom("Blob", &e))?;
    let url = Url::create_object_url_with_blob(&blob).map_err(|e| UiError::dom("createObjectURL", &e))?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| UiError::Dom("no document".to_string()))?;
    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| UiError::dom("createElement", &e))?
        .dyn_into()
        .map_err(|_| UiError::Dom("anchor element cast".to_string()))?;
    anchor.set_href(&url);
    anchor.set_download(EXPORT_FILE_NAME);
    anchor.click();

    Url::revoke_object_url(&url).map_err(|e| UiError::dom("revokeObjectURL", &e))?;
    tracing::info!(file = EXPORT_FILE_NAME, bytes = text.len(), "Workflow exported");
    Ok(())
}
