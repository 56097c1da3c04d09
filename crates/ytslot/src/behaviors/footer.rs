use crate::dom::{DomDocument, DomElement};
use crate::markup::Markup;

/// Writes the current year into the footer. Returns the year if the element exists.
pub fn stamp_footer_year<D: DomDocument>(document: &D, markup: &Markup) -> Option<i32> {
    let element = document.element_by_id(&markup.footer_year_id)?;
    let year = document.current_year();
    element.set_text(&year.to_string());
    Some(year)
}
