//! The marker vocabulary page authors use to request players.

use serde::Deserialize;

/// Selectors, attribute names and classes the behaviors look for.
///
/// Defaults are the markup contract; page scripts may override single fields
/// (camelCase keys) when booting manually.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Markup {
    /// Full-screen background container.
    pub background_host: String,
    /// Video Reference attribute on the background container.
    pub background_attribute: String,
    /// Local video shown until the embedded background replaces it.
    pub background_fallback: String,
    /// Embeddable slot, used by autoplay panels and preview cards.
    pub slot: String,
    pub reference_attribute: String,
    pub autoplay_attribute: String,
    pub preview_card: String,
    /// Class set on a preview card while its player is live.
    pub playing_class: String,
    pub footer_year_id: String,
}

impl Default for Markup {
    fn default() -> Self {
        Self {
            background_host: ".yt-bg".to_string(),
            background_attribute: "data-yt-bg".to_string(),
            background_fallback: ".yt-bg-fallback".to_string(),
            slot: ".yt-embed".to_string(),
            reference_attribute: "data-yt".to_string(),
            autoplay_attribute: "data-autoplay".to_string(),
            preview_card: ".preview-card".to_string(),
            playing_class: "is-playing".to_string(),
            footer_year_id: "year".to_string(),
        }
    }
}

impl Markup {
    pub fn background_selector(&self) -> String {
        format!("{}[{}]", self.background_host, self.background_attribute)
    }

    pub fn autoplay_panel_selector(&self) -> String {
        format!(
            "{}[{}][{}]",
            self.slot, self.reference_attribute, self.autoplay_attribute
        )
    }

    /// Hover slot inside a preview card: a slot with a reference that is not
    /// an autoplay panel.
    pub fn preview_slot_selector(&self) -> String {
        format!(
            "{}[{}]:not([{}])",
            self.slot, self.reference_attribute, self.autoplay_attribute
        )
    }
}
