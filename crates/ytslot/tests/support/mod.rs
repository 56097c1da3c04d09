//! Page fixtures shared by the integration tests.

#![allow(dead_code)]

use ytslot::platform::memory::{MemoryDocument, MemoryElement};

pub const ID: &str = "RAbnwLxwPNY";
pub const OTHER_ID: &str = "dQw4w9WgXcQ";

pub fn players(scope: &MemoryElement) -> Vec<MemoryElement> {
    scope.query_selector_all("iframe")
}

pub fn background(document: &MemoryDocument, reference: &str) -> (MemoryElement, MemoryElement) {
    let body = document.body();
    let container = body.append("div", &[("class", "yt-bg"), ("data-yt-bg", reference)]);
    let fallback = body.append("video", &[("class", "yt-bg-fallback"), ("autoplay", "")]);
    (container, fallback)
}

pub fn autoplay_panel(parent: &MemoryElement, reference: &str) -> MemoryElement {
    parent.append(
        "div",
        &[("class", "yt-embed"), ("data-yt", reference), ("data-autoplay", "")],
    )
}

/// A card with a poster image and a hover slot. Returns `(card, slot)`.
pub fn preview_card(parent: &MemoryElement, reference: &str) -> (MemoryElement, MemoryElement) {
    let card = parent.append("article", &[("class", "preview-card")]);
    card.append("img", &[("class", "poster"), ("src", "poster.jpg")]);
    let slot = card.append("div", &[("class", "yt-embed"), ("data-yt", reference)]);
    (card, slot)
}

pub fn footer(document: &MemoryDocument) -> MemoryElement {
    let footer = document.body().append("footer", &[]);
    footer.append("span", &[("id", "year")])
}
