//! Runs the page behaviors against a real DOM.
//!
//! `wasm-pack test --headless --firefox crates/ytslot`

#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement};
use ytslot::dom::DomDocument;
use ytslot::platform::browser::{BrowserDocument, build_embed_url, extract_video_id};
use ytslot::{EmbedConfig, Markup, bootstrap, build_url};

wasm_bindgen_test_configure!(run_in_browser);

const ID: &str = "RAbnwLxwPNY";

/// Mounts `html` in a fresh container so tests do not see each other's markup.
fn mount(html: &str) -> (BrowserDocument, Element) {
    let document = BrowserDocument::current().unwrap();
    let root = document.raw().create_element("section").unwrap();
    root.set_inner_html(html);
    document.raw().body().unwrap().append_child(&root).unwrap();
    (document, root)
}

fn player_count(scope: &Element) -> u32 {
    scope.query_selector_all("iframe").unwrap().length()
}

fn pointer(target: &Element, event: &str) {
    let event = web_sys::Event::new(event).unwrap();
    target.dispatch_event(&event).unwrap();
}

#[wasm_bindgen_test]
fn exports_match_core() {
    assert_eq!(extract_video_id(Some(format!("https://youtu.be/{ID}"))), ID);
    assert_eq!(extract_video_id(None), "");

    let config = js_sys::JSON::parse(r#"{"autoplay": 0}"#).unwrap();
    assert_eq!(
        build_embed_url(Some(ID.to_string()), config),
        build_url(ID, EmbedConfig::PAUSED)
    );
    assert_eq!(
        build_embed_url(Some(ID.to_string()), wasm_bindgen::JsValue::UNDEFINED),
        build_url(ID, EmbedConfig::AUTOPLAY)
    );
    assert_eq!(
        build_embed_url(Some("YOUR_ID".to_string()), wasm_bindgen::JsValue::UNDEFINED),
        ""
    );
}

#[wasm_bindgen_test]
fn hover_cycle_in_browser() {
    let markup = Markup {
        preview_card: ".browser-hover-card".to_string(),
        ..Markup::default()
    };
    let (document, root) = mount(&format!(
        r#"<article class="browser-hover-card"><img class="poster"><div class="yt-embed" data-yt="{ID}"></div></article>"#
    ));
    let card = root.query_selector(".browser-hover-card").unwrap().unwrap();

    let wired = ytslot::behaviors::wire_hover_previews(&document, &markup);
    assert_eq!(wired.len(), 1);

    pointer(&card, "pointerenter");
    assert_eq!(player_count(&root), 1);
    assert!(card.class_list().contains("is-playing"));

    pointer(&card, "pointerleave");
    assert_eq!(player_count(&root), 0);
    assert!(!card.class_list().contains("is-playing"));

    pointer(&card, "pointerenter");
    pointer(&card, "pointerenter");
    assert_eq!(player_count(&root), 1);
    assert_eq!(
        root.query_selector("iframe").unwrap().unwrap().get_attribute("src"),
        Some(build_url(ID, EmbedConfig::AUTOPLAY))
    );
}

#[wasm_bindgen_test]
fn background_hides_fallback() {
    let markup = Markup {
        background_host: ".browser-bg".to_string(),
        background_fallback: ".browser-bg-fallback".to_string(),
        ..Markup::default()
    };
    let (document, root) = mount(&format!(
        r#"<div class="browser-bg" data-yt-bg="{ID}"></div><video class="browser-bg-fallback"></video>"#
    ));

    assert!(ytslot::behaviors::install_background(&document, &markup));
    assert_eq!(player_count(&root), 1);

    let fallback: HtmlElement = root
        .query_selector(".browser-bg-fallback")
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap();
    assert_eq!(
        fallback.style().get_property_value("display").unwrap(),
        "none"
    );
}

#[wasm_bindgen_test]
fn footer_and_report() {
    let markup = Markup {
        background_host: ".browser-none".to_string(),
        slot: ".browser-none".to_string(),
        preview_card: ".browser-none".to_string(),
        footer_year_id: "browser-year".to_string(),
        ..Markup::default()
    };
    let (document, _root) = mount(r#"<span id="browser-year"></span>"#);

    let report = bootstrap::run(&document, &markup);
    let year = document.current_year();
    assert_eq!(report.footer_year, Some(year));
    assert_eq!(
        document.element_by_id("browser-year").unwrap().0.text_content(),
        Some(year.to_string())
    );
    assert_eq!(report.hover_cards, 0);
}
