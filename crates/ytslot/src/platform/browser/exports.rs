//! Functions exposed to page scripts.

use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;

use crate::embed::{self, EmbedConfig};
use crate::markup::Markup;
use crate::video_id;

/// Converts an optional JS options object, falling back to defaults when it
/// is absent or malformed.
fn options_or_default<T: DeserializeOwned + Default>(value: JsValue, what: &str) -> T {
    if value.is_undefined() || value.is_null() {
        return T::default();
    }
    serde_wasm_bindgen::from_value(value).unwrap_or_else(|error| {
        log::warn!("ignoring invalid {what}: {error}");
        T::default()
    })
}

#[wasm_bindgen(js_name = extractVideoId)]
pub fn extract_video_id(raw: Option<String>) -> String {
    video_id::extract(raw.as_deref().unwrap_or_default())
}

#[wasm_bindgen(js_name = buildEmbedUrl)]
pub fn build_embed_url(raw: Option<String>, config: JsValue) -> String {
    let config: EmbedConfig = options_or_default(config, "embed config");
    embed::build_url(raw.as_deref().unwrap_or_default(), config)
}

/// Installs the players with optional markup overrides. For pages built
/// without the `auto-start` feature.
#[wasm_bindgen]
pub fn boot(markup: JsValue) {
    let markup: Markup = options_or_default(markup, "markup");
    super::schedule_bootstrap(markup);
}
