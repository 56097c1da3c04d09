//! DOM capabilities the page behaviors are written against.
//!
//! Behaviors never name a concrete element type; anything matching a marker
//! selector is handled the same way. `platform::browser` backs these traits
//! with web_sys, `platform::memory` with an in-memory tree.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    #[error("element is not attached to a document")]
    Detached,
    #[error("element does not support {0}")]
    Unsupported(&'static str),
    #[error("DOM call failed: {0}")]
    Js(String),
}

/// The two pointer transitions a preview card reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerEdge {
    Enter,
    Leave,
}

impl PointerEdge {
    pub fn event_name(self) -> &'static str {
        match self {
            Self::Enter => "pointerenter",
            Self::Leave => "pointerleave",
        }
    }
}

pub trait DomElement: Clone + 'static {
    fn attribute(&self, name: &str) -> Option<String>;

    fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<(), DomError>;

    /// First descendant matching `selector`, in document order.
    fn query_selector(&self, selector: &str) -> Option<Self>;

    /// Creates a `tag` element and appends it as the last child.
    fn append_element(&self, tag: &str) -> Result<Self, DomError>;

    /// Detaches the element (and its subtree) from its parent.
    fn remove(&self);

    fn add_class(&self, class: &str) -> Result<(), DomError>;

    fn remove_class(&self, class: &str) -> Result<(), DomError>;

    fn set_text(&self, text: &str);

    /// Hides the element visually (`display: none`).
    fn hide(&self) -> Result<(), DomError>;

    /// Pauses a media element.
    fn pause(&self) -> Result<(), DomError>;

    /// Registers `handler` for the lifetime of the page.
    fn on_pointer(&self, edge: PointerEdge, handler: impl Fn() + 'static)
    -> Result<(), DomError>;
}

pub trait DomDocument {
    type Element: DomElement;

    fn query_selector(&self, selector: &str) -> Option<Self::Element>;

    fn query_selector_all(&self, selector: &str) -> Vec<Self::Element>;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// Four-digit year of the page's local clock.
    fn current_year(&self) -> i32;
}
