//! Browser platform: web_sys-backed DOM and the wasm entry points.

mod document;
mod exports;

pub use document::{BrowserDocument, BrowserElement, js_error};
pub use exports::{boot, build_embed_url, extract_video_id};

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::bootstrap;
use crate::dom::DomError;
use crate::markup::Markup;

const LOG_LEVEL: log::Level = if cfg!(feature = "debug-logs") {
    log::Level::Debug
} else {
    log::Level::Info
};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(LOG_LEVEL));

    #[cfg(feature = "auto-start")]
    schedule_bootstrap(Markup::default());
}

/// Runs the bootstrap once the document is structurally ready.
pub fn schedule_bootstrap(markup: Markup) {
    let Some(document) = BrowserDocument::current() else {
        log::warn!("no document available, players not installed");
        return;
    };
    let target = document.clone();
    let scheduled = when_ready(document.raw(), move || {
        bootstrap::run(&target, &markup);
    });
    if let Err(error) = scheduled {
        log::warn!("bootstrap not scheduled: {error}");
    }
}

/// Calls `run` now if the document has finished parsing, otherwise on
/// `DOMContentLoaded`.
pub fn when_ready(
    document: &web_sys::Document,
    run: impl FnOnce() + 'static,
) -> Result<(), DomError> {
    if document.ready_state() != "loading" {
        run();
        return Ok(());
    }
    let closure = Closure::once(run);
    document
        .add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref())
        .map_err(js_error)?;
    closure.forget();
    Ok(())
}
