//! Hover-triggered previews.
//!
//! Every card owns its state and its two transition handlers; nothing is
//! shared between cards.

use std::cell::Cell;
use std::rc::Rc;

use crate::dom::{DomDocument, DomElement, PointerEdge};
use crate::embed::{self, EmbedConfig};
use crate::markup::Markup;
use crate::player_host::PlayerHost;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HoverState {
    #[default]
    Idle,
    Playing,
}

impl HoverState {
    pub fn next(self, edge: PointerEdge) -> Self {
        match edge {
            PointerEdge::Enter => Self::Playing,
            PointerEdge::Leave => Self::Idle,
        }
    }
}

/// A preview card wired to start its player on hover.
pub struct PreviewCard<E: DomElement> {
    card: E,
    host: PlayerHost<E>,
    reference: String,
    playing_class: String,
    state: Cell<HoverState>,
}

impl<E: DomElement> PreviewCard<E> {
    /// Resolves the card's hover slot, skipping autoplay panels in the card.
    /// `None` if there is no such slot or its reference is unset.
    pub fn new(card: E, markup: &Markup) -> Option<Self> {
        let slot = card.query_selector(&markup.preview_slot_selector())?;
        let reference = slot.attribute(&markup.reference_attribute)?;
        if embed::is_blank_reference(&reference) {
            return None;
        }
        Some(Self {
            card,
            host: PlayerHost::new(slot),
            reference,
            playing_class: markup.playing_class.clone(),
            state: Cell::new(HoverState::Idle),
        })
    }

    pub fn state(&self) -> HoverState {
        self.state.get()
    }

    pub fn host(&self) -> &PlayerHost<E> {
        &self.host
    }

    /// Applies one pointer transition. Events are handled in arrival order,
    /// repeated edges included.
    pub fn transition(&self, edge: PointerEdge) {
        match edge {
            PointerEdge::Enter => {
                if let Err(error) = self.card.add_class(&self.playing_class) {
                    log::warn!("preview card class not set: {error}");
                }
                self.host.inject(&self.reference, EmbedConfig::AUTOPLAY);
            }
            PointerEdge::Leave => {
                if let Err(error) = self.card.remove_class(&self.playing_class) {
                    log::warn!("preview card class not cleared: {error}");
                }
                self.host.clear();
            }
        }
        self.state.set(self.state.get().next(edge));
    }
}

/// Registers enter/leave handlers on every usable preview card.
pub fn wire_hover_previews<D: DomDocument>(
    document: &D,
    markup: &Markup,
) -> Vec<Rc<PreviewCard<D::Element>>> {
    let mut wired = Vec::new();
    for card in document.query_selector_all(&markup.preview_card) {
        let Some(preview) = PreviewCard::new(card, markup) else {
            continue;
        };
        let preview = Rc::new(preview);
        let registered = [PointerEdge::Enter, PointerEdge::Leave]
            .into_iter()
            .try_for_each(|edge| {
                let preview_for_edge = Rc::clone(&preview);
                preview
                    .card
                    .on_pointer(edge, move || preview_for_edge.transition(edge))
            });
        match registered {
            Ok(()) => wired.push(preview),
            Err(error) => log::warn!("preview card not wired: {error}"),
        }
    }
    wired
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_machine() {
        let state = HoverState::default();
        assert_eq!(state, HoverState::Idle);

        let state = state.next(PointerEdge::Enter);
        assert_eq!(state, HoverState::Playing);
        assert_eq!(state.next(PointerEdge::Enter), HoverState::Playing);

        let state = state.next(PointerEdge::Leave);
        assert_eq!(state, HoverState::Idle);
        assert_eq!(state.next(PointerEdge::Leave), HoverState::Idle);
    }
}
