use crate::dom::{DomDocument, DomElement};
use crate::embed::EmbedConfig;
use crate::markup::Markup;
use crate::player_host::PlayerHost;

/// Embeds the full-screen background player and retires the local fallback.
///
/// Returns true if a player was injected.
pub fn install_background<D: DomDocument>(document: &D, markup: &Markup) -> bool {
    let Some(container) = document.query_selector(&markup.background_selector()) else {
        return false;
    };
    let reference = container
        .attribute(&markup.background_attribute)
        .unwrap_or_default();
    if reference.trim().is_empty() {
        return false;
    }
    if PlayerHost::new(container)
        .inject(&reference, EmbedConfig::AUTOPLAY)
        .is_none()
    {
        return false;
    }

    if let Some(fallback) = document.query_selector(&markup.background_fallback) {
        // Already stopped or not a media element; the embed covers it either way.
        if let Err(error) = fallback.pause() {
            log::debug!("fallback video not paused: {error}");
        }
        if let Err(error) = fallback.hide() {
            log::warn!("fallback video not hidden: {error}");
        }
    }
    true
}
