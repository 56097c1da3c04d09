//! Embed URL building for the privacy-enhanced YouTube player.

use serde::{Deserialize, Deserializer};

use crate::video_id;

pub const EMBED_ORIGIN: &str = "https://www.youtube-nocookie.com";

/// Marks a Video Reference the page author has not filled in yet.
pub const PLACEHOLDER_PREFIX: &str = "YOUR_";

/// Player options, merged against the defaults.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EmbedConfig {
    #[serde(deserialize_with = "flag")]
    pub autoplay: bool,
}

impl EmbedConfig {
    pub const AUTOPLAY: Self = Self { autoplay: true };
    pub const PAUSED: Self = Self { autoplay: false };
}

impl Default for EmbedConfig {
    fn default() -> Self {
        Self::AUTOPLAY
    }
}

/// Accepts `true`/`false` as well as the `0`/`1` numbers page scripts tend to pass.
fn flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Number(f64),
    }

    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(value) => value,
        Flag::Number(value) => value != 0.0,
    })
}

/// Returns true for values that must never be embedded: empty or placeholder.
pub fn is_blank_reference(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || value.starts_with(PLACEHOLDER_PREFIX)
}

/// Builds the player URL for a raw Video Reference.
///
/// Returns an empty string when there is nothing to embed.
pub fn build_url(raw: &str, config: EmbedConfig) -> String {
    let id = video_id::extract(raw);
    if is_blank_reference(&id) {
        return String::new();
    }
    // Canonical ids pass through unchanged; degraded fallbacks stay well-formed.
    let id = urlencoding::encode(&id);
    let autoplay = u8::from(config.autoplay);
    format!(
        "{EMBED_ORIGIN}/embed/{id}?autoplay={autoplay}&mute=1&controls=0&rel=0\
         &modestbranding=1&playsinline=1&iv_load_policy=3&loop=1&playlist={id}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID: &str = "RAbnwLxwPNY";

    #[test]
    fn test_exact_url_format() {
        assert_eq!(
            build_url(ID, EmbedConfig::AUTOPLAY),
            "https://www.youtube-nocookie.com/embed/RAbnwLxwPNY?autoplay=1&mute=1&controls=0\
             &rel=0&modestbranding=1&playsinline=1&iv_load_policy=3&loop=1&playlist=RAbnwLxwPNY"
        );
    }

    #[test]
    fn test_autoplay_off() {
        let url = build_url(ID, EmbedConfig::PAUSED);
        assert!(url.starts_with("https://www.youtube-nocookie.com/"));
        assert!(url.contains("autoplay=0"));
        assert!(url.contains("mute=1"));
        assert!(url.contains("playlist=RAbnwLxwPNY"));
    }

    #[test]
    fn test_url_input_is_resolved() {
        assert_eq!(
            build_url("https://youtu.be/RAbnwLxwPNY", EmbedConfig::default()),
            build_url(ID, EmbedConfig::default())
        );
    }

    #[test]
    fn test_placeholder_and_empty_build_nothing() {
        for raw in ["", "   ", "YOUR_VIDEO_ID", "YOUR_ID_123", "  YOUR_BACKGROUND  "] {
            assert_eq!(build_url(raw, EmbedConfig::default()), "", "{raw:?}");
        }
    }

    #[test]
    fn test_degraded_reference_stays_well_formed() {
        let url = build_url("not a video", EmbedConfig::default());
        assert!(url.starts_with("https://www.youtube-nocookie.com/embed/not%20a%20video?"));
        assert!(url.ends_with("&playlist=not%20a%20video"));
        assert!(!url.contains(' '));
    }

    #[test]
    fn test_config_deserialization() {
        let parse = |json: &str| serde_json::from_str::<EmbedConfig>(json).unwrap();
        assert_eq!(parse("{}"), EmbedConfig::AUTOPLAY);
        assert_eq!(parse(r#"{"autoplay": false}"#), EmbedConfig::PAUSED);
        assert_eq!(parse(r#"{"autoplay": 0}"#), EmbedConfig::PAUSED);
        assert_eq!(parse(r#"{"autoplay": 1}"#), EmbedConfig::AUTOPLAY);
        assert_eq!(parse(r#"{"loop": false, "autoplay": true}"#), EmbedConfig::AUTOPLAY);
    }
}
