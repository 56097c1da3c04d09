use crate::behaviors;
use crate::dom::DomDocument;
use crate::markup::Markup;

/// What one bootstrap run found and changed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BootReport {
    pub background: bool,
    pub autoplay_panels: usize,
    pub hover_cards: usize,
    pub footer_year: Option<i32>,
}

/// Runs every page behavior once: background, autoplay panels, hover
/// previews, then the footer stamp.
///
/// Call once per "document ready" signal.
pub fn run<D: DomDocument>(document: &D, markup: &Markup) -> BootReport {
    let background = behaviors::install_background(document, markup);
    let autoplay_panels = behaviors::fill_autoplay_panels(document, markup);
    let hover_cards = behaviors::wire_hover_previews(document, markup).len();
    let footer_year = behaviors::stamp_footer_year(document, markup);

    let report = BootReport {
        background,
        autoplay_panels,
        hover_cards,
        footer_year,
    };
    log::info!(
        "page ready: background={} autoplay_panels={} hover_cards={} footer_year={:?}",
        report.background,
        report.autoplay_panels,
        report.hover_cards,
        report.footer_year
    );
    report
}
