use crate::dom::{DomDocument, DomElement};
use crate::embed::{self, EmbedConfig};
use crate::markup::Markup;
use crate::player_host::PlayerHost;

/// Starts a looping, muted player in every panel marked for autoplay.
///
/// Returns the number of panels that received a player.
pub fn fill_autoplay_panels<D: DomDocument>(document: &D, markup: &Markup) -> usize {
    let mut filled = 0;
    for panel in document.query_selector_all(&markup.autoplay_panel_selector()) {
        let reference = panel
            .attribute(&markup.reference_attribute)
            .unwrap_or_default();
        if embed::is_blank_reference(&reference) {
            log::debug!("skipping autoplay panel with unset reference {reference:?}");
            continue;
        }
        if PlayerHost::new(panel)
            .inject(&reference, EmbedConfig::AUTOPLAY)
            .is_some()
        {
            filled += 1;
        }
    }
    filled
}
