//! Video identifier extraction.

use std::sync::LazyLock;

use regex::Regex;

/// Length of a canonical YouTube video id.
pub const VIDEO_ID_LEN: usize = 11;

static CANONICAL_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]{11}$").unwrap());

// `v=` query parameter, `/embed/` and `/shorts/` paths, `youtu.be/` short links.
static ID_IN_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:v=|/embed/|/shorts/|youtu\.be/)([A-Za-z0-9_-]{11})").unwrap()
});

/// Returns true if `value` is exactly a canonical video id.
pub fn is_canonical(value: &str) -> bool {
    CANONICAL_ID.is_match(value)
}

/// Resolves a Video Reference (bare id or URL) to its canonical id.
///
/// Unrecognized input comes back trimmed but otherwise unchanged; it fails
/// later, when it does not produce a playable embed.
pub fn extract(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() || is_canonical(trimmed) {
        return trimmed.to_string();
    }
    ID_IN_URL
        .captures(trimmed)
        .and_then(|captures| captures.get(1))
        .map_or(trimmed, |id| id.as_str())
        .to_string()
}
