//! One embedded player per container.

use crate::dom::{DomElement, DomError};
use crate::embed::{self, EmbedConfig};

pub const PLAYER_TAG: &str = "iframe";

const PLAYER_ATTRIBUTES: [(&str, &str); 5] = [
    ("loading", "lazy"),
    ("allow", "autoplay; fullscreen; picture-in-picture"),
    ("allowfullscreen", ""),
    ("title", "YouTube video player"),
    ("referrerpolicy", "strict-origin-when-cross-origin"),
];

/// A container that holds zero or one player element.
///
/// Everything it touches is a descendant of `element`.
#[derive(Clone)]
pub struct PlayerHost<E: DomElement> {
    element: E,
}

impl<E: DomElement> PlayerHost<E> {
    pub fn new(element: E) -> Self {
        Self { element }
    }

    pub fn element(&self) -> &E {
        &self.element
    }

    /// The current player, if any.
    pub fn player(&self) -> Option<E> {
        self.element.query_selector(PLAYER_TAG)
    }

    /// Points the host's player at `raw`, creating the player on first use.
    ///
    /// `src` is reassigned even when unchanged so short loops restart.
    /// Returns `None` when there is nothing to embed.
    pub fn inject(&self, raw: &str, config: EmbedConfig) -> Option<E> {
        if raw.is_empty() {
            return None;
        }
        let url = embed::build_url(raw, config);
        if url.is_empty() {
            log::debug!("not embedding unset video reference {raw:?}");
            return None;
        }
        match self.attach(&url) {
            Ok(player) => Some(player),
            Err(error) => {
                log::warn!("failed to embed player for {raw:?}: {error}");
                None
            }
        }
    }

    fn attach(&self, url: &str) -> Result<E, DomError> {
        let player = match self.player() {
            Some(player) => player,
            None => {
                let player = self.element.append_element(PLAYER_TAG)?;
                for (name, value) in PLAYER_ATTRIBUTES {
                    player.set_attribute(name, value)?;
                }
                player
            }
        };
        player.set_attribute("src", url)?;
        Ok(player)
    }

    /// Removes the player, leaving the host and its other children alone.
    pub fn clear(&self) {
        if let Some(player) = self.player() {
            player.remove();
        }
    }
}
