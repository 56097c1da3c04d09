use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, HtmlMediaElement};

use crate::dom::{DomDocument, DomElement, DomError, PointerEdge};

pub fn js_error(value: JsValue) -> DomError {
    DomError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

#[derive(Clone)]
pub struct BrowserDocument {
    document: web_sys::Document,
}

impl BrowserDocument {
    pub fn new(document: web_sys::Document) -> Self {
        Self { document }
    }

    /// The document of the current window.
    pub fn current() -> Option<Self> {
        web_sys::window()?.document().map(Self::new)
    }

    pub fn raw(&self) -> &web_sys::Document {
        &self.document
    }
}

impl DomDocument for BrowserDocument {
    type Element = BrowserElement;

    fn query_selector(&self, selector: &str) -> Option<BrowserElement> {
        self.document
            .query_selector(selector)
            .ok()
            .flatten()
            .map(BrowserElement)
    }

    fn query_selector_all(&self, selector: &str) -> Vec<BrowserElement> {
        let Ok(nodes) = self.document.query_selector_all(selector) else {
            log::warn!("invalid selector {selector:?}");
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|index| nodes.get(index))
            .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
            .map(BrowserElement)
            .collect()
    }

    fn element_by_id(&self, id: &str) -> Option<BrowserElement> {
        self.document.get_element_by_id(id).map(BrowserElement)
    }

    fn current_year(&self) -> i32 {
        js_sys::Date::new_0().get_full_year() as i32
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BrowserElement(pub web_sys::Element);

impl DomElement for BrowserElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn has_attribute(&self, name: &str) -> bool {
        self.0.has_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<(), DomError> {
        self.0.set_attribute(name, value).map_err(js_error)
    }

    fn query_selector(&self, selector: &str) -> Option<Self> {
        self.0.query_selector(selector).ok().flatten().map(Self)
    }

    fn append_element(&self, tag: &str) -> Result<Self, DomError> {
        let document = self.0.owner_document().ok_or(DomError::Detached)?;
        let child = document.create_element(tag).map_err(js_error)?;
        self.0.append_child(&child).map_err(js_error)?;
        Ok(Self(child))
    }

    fn remove(&self) {
        self.0.remove();
    }

    fn add_class(&self, class: &str) -> Result<(), DomError> {
        self.0.class_list().add_1(class).map_err(js_error)
    }

    fn remove_class(&self, class: &str) -> Result<(), DomError> {
        self.0.class_list().remove_1(class).map_err(js_error)
    }

    fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }

    fn hide(&self) -> Result<(), DomError> {
        self.0
            .dyn_ref::<HtmlElement>()
            .ok_or(DomError::Unsupported("inline style"))?
            .style()
            .set_property("display", "none")
            .map_err(js_error)
    }

    fn pause(&self) -> Result<(), DomError> {
        self.0
            .dyn_ref::<HtmlMediaElement>()
            .ok_or(DomError::Unsupported("media playback"))?
            .pause()
            .map_err(js_error)
    }

    fn on_pointer(
        &self,
        edge: PointerEdge,
        handler: impl Fn() + 'static,
    ) -> Result<(), DomError> {
        let closure: Closure<dyn Fn()> = Closure::new(handler);
        self.0
            .add_event_listener_with_callback(edge.event_name(), closure.as_ref().unchecked_ref())
            .map_err(js_error)?;
        // Listeners live as long as the page.
        closure.forget();
        Ok(())
    }
}
