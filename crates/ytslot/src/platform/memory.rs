//! In-memory document for running the page behaviors without a browser.
//!
//! Elements are handles into a shared arena. Removed elements stay in the
//! arena but are unreachable from the document root. Pointer events are
//! delivered with [`MemoryElement::dispatch`] and, like `pointerenter` /
//! `pointerleave`, do not bubble.
//!
//! Selector queries render the reachable tree to HTML and match it with
//! `scraper`, so they accept the same selectors a browser does.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt::{self, Write};
use std::rc::Rc;

use chrono::Datelike;
use scraper::{ElementRef, Html, Selector};

use crate::dom::{DomDocument, DomElement, DomError, PointerEdge};

type NodeId = usize;
type Listener = Rc<dyn Fn()>;

const ROOT: NodeId = 0;
const BODY: NodeId = 1;

/// Carries the arena id through rendering so matches map back to elements.
const NODE_ATTRIBUTE: &str = "data-memory-node";

/// Playback state of a `video` / `audio` element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaState {
    Playing,
    Paused,
    /// Source failed to load; `pause()` rejects.
    Unavailable,
}

struct Node {
    tag: String,
    attributes: BTreeMap<String, String>,
    /// Number of `set_attribute` calls per attribute name.
    writes: BTreeMap<String, usize>,
    text: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    listeners: Vec<(PointerEdge, Listener)>,
    hidden: bool,
    media: Option<MediaState>,
}

impl Node {
    fn new(tag: &str, parent: Option<NodeId>) -> Self {
        let tag = tag.to_ascii_lowercase();
        let media = matches!(tag.as_str(), "video" | "audio").then_some(MediaState::Playing);
        Self {
            tag,
            attributes: BTreeMap::new(),
            writes: BTreeMap::new(),
            text: String::new(),
            parent,
            children: Vec::new(),
            listeners: Vec::new(),
            hidden: false,
            media,
        }
    }
}

struct Tree {
    nodes: Vec<Node>,
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

impl Tree {
    fn new() -> Self {
        let mut root = Node::new("html", None);
        root.children.push(BODY);
        Self {
            nodes: vec![root, Node::new("body", Some(ROOT))],
        }
    }

    /// Descendants of `id` (excluding `id`) in document order.
    fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut order = Vec::new();
        let mut stack: Vec<NodeId> = self.nodes[id].children.iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            order.push(next);
            stack.extend(self.nodes[next].children.iter().rev());
        }
        order
    }

    fn render(&self, id: NodeId, html: &mut String) {
        let node = &self.nodes[id];
        let _ = write!(html, r#"<{} {NODE_ATTRIBUTE}="{id}""#, node.tag);
        for (name, value) in &node.attributes {
            let _ = write!(html, r#" {name}="{}""#, escape(value));
        }
        html.push('>');
        html.push_str(&escape(&node.text));
        for &child in &node.children {
            self.render(child, html);
        }
        let _ = write!(html, "</{}>", node.tag);
    }

    /// Descendants of `scope` (excluding `scope`) matching `selector`, in
    /// document order.
    fn select(&self, scope: NodeId, selector: &str) -> Vec<NodeId> {
        let selector = match Selector::parse(selector) {
            Ok(selector) => selector,
            Err(error) => {
                log::warn!("invalid selector {selector:?}: {error:?}");
                return Vec::new();
            }
        };
        let mut top = scope;
        while let Some(parent) = self.nodes[top].parent {
            top = parent;
        }
        let mut html = String::from("<!DOCTYPE html>");
        self.render(top, &mut html);
        let document = Html::parse_document(&html);

        let node_id = |element: ElementRef<'_>| {
            element
                .value()
                .attr(NODE_ATTRIBUTE)
                .and_then(|id| id.parse::<NodeId>().ok())
        };
        let Some(scope_element) = document
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
            .find(|&element| node_id(element) == Some(scope))
        else {
            return Vec::new();
        };
        scope_element
            .select(&selector)
            .filter_map(node_id)
            .filter(|&id| id != scope)
            .collect()
    }

    fn append(&mut self, parent: NodeId, tag: &str) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(Node::new(tag, Some(parent)));
        self.nodes[parent].children.push(id);
        id
    }

    fn detach(&mut self, id: NodeId) {
        if let Some(parent) = self.nodes[id].parent.take() {
            self.nodes[parent].children.retain(|&child| child != id);
        }
    }
}

#[derive(Clone)]
pub struct MemoryDocument {
    tree: Rc<RefCell<Tree>>,
    year: i32,
}

impl MemoryDocument {
    /// An empty `<html><body></body></html>` document on the local clock.
    pub fn new() -> Self {
        Self::with_year(chrono::Local::now().year())
    }

    /// An empty document whose clock reads `year`.
    pub fn with_year(year: i32) -> Self {
        Self {
            tree: Rc::new(RefCell::new(Tree::new())),
            year,
        }
    }

    pub fn body(&self) -> MemoryElement {
        self.element(BODY)
    }

    fn element(&self, id: NodeId) -> MemoryElement {
        MemoryElement {
            tree: Rc::clone(&self.tree),
            id,
        }
    }
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl DomDocument for MemoryDocument {
    type Element = MemoryElement;

    fn query_selector(&self, selector: &str) -> Option<MemoryElement> {
        let first = self.tree.borrow().select(ROOT, selector).first().copied();
        first.map(|id| self.element(id))
    }

    fn query_selector_all(&self, selector: &str) -> Vec<MemoryElement> {
        let ids = self.tree.borrow().select(ROOT, selector);
        ids.into_iter().map(|id| self.element(id)).collect()
    }

    fn element_by_id(&self, id: &str) -> Option<MemoryElement> {
        let tree = self.tree.borrow();
        let found = tree
            .descendants(ROOT)
            .into_iter()
            .find(|&node| tree.nodes[node].attributes.get("id").map(String::as_str) == Some(id));
        drop(tree);
        found.map(|node| self.element(node))
    }

    fn current_year(&self) -> i32 {
        self.year
    }
}

#[derive(Clone)]
pub struct MemoryElement {
    tree: Rc<RefCell<Tree>>,
    id: NodeId,
}

impl PartialEq for MemoryElement {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.tree, &other.tree) && self.id == other.id
    }
}

impl fmt::Debug for MemoryElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tree = self.tree.borrow();
        let node = &tree.nodes[self.id];
        f.debug_struct("MemoryElement")
            .field("id", &self.id)
            .field("tag", &node.tag)
            .field("attributes", &node.attributes)
            .finish()
    }
}

impl MemoryElement {
    fn sibling(&self, id: NodeId) -> Self {
        Self {
            tree: Rc::clone(&self.tree),
            id,
        }
    }

    fn with_node<T>(&self, read: impl FnOnce(&Node) -> T) -> T {
        read(&self.tree.borrow().nodes[self.id])
    }

    fn with_node_mut<T>(&self, write: impl FnOnce(&mut Node) -> T) -> T {
        write(&mut self.tree.borrow_mut().nodes[self.id])
    }

    /// Appends a `tag` child carrying `attributes`.
    pub fn append(&self, tag: &str, attributes: &[(&str, &str)]) -> Self {
        let id = self.tree.borrow_mut().append(self.id, tag);
        let child = self.sibling(id);
        child.with_node_mut(|node| {
            for (name, value) in attributes {
                node.attributes.insert(name.to_string(), value.to_string());
            }
        });
        child
    }

    pub fn tag(&self) -> String {
        self.with_node(|node| node.tag.clone())
    }

    pub fn text(&self) -> String {
        self.with_node(|node| node.text.clone())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.with_node(|node| {
            node.attributes
                .get("class")
                .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
        })
    }

    pub fn children(&self) -> Vec<Self> {
        let ids = self.with_node(|node| node.children.clone());
        ids.into_iter().map(|id| self.sibling(id)).collect()
    }

    pub fn query_selector_all(&self, selector: &str) -> Vec<Self> {
        let ids = self.tree.borrow().select(self.id, selector);
        ids.into_iter().map(|id| self.sibling(id)).collect()
    }

    /// True while the element is reachable from the document root.
    pub fn is_connected(&self) -> bool {
        let tree = self.tree.borrow();
        let mut current = self.id;
        while let Some(parent) = tree.nodes[current].parent {
            current = parent;
        }
        current == ROOT
    }

    pub fn is_hidden(&self) -> bool {
        self.with_node(|node| node.hidden)
    }

    pub fn media_state(&self) -> Option<MediaState> {
        self.with_node(|node| node.media)
    }

    /// Simulates a media element whose source never loaded.
    pub fn set_media_unavailable(&self) {
        self.with_node_mut(|node| {
            if node.media.is_some() {
                node.media = Some(MediaState::Unavailable);
            }
        });
    }

    /// How many times `name` has been written, including rewrites of the
    /// same value.
    pub fn attribute_writes(&self, name: &str) -> usize {
        self.with_node(|node| node.writes.get(name).copied().unwrap_or(0))
    }

    pub fn listener_count(&self) -> usize {
        self.with_node(|node| node.listeners.len())
    }

    /// Delivers a pointer event to the element's own listeners.
    pub fn dispatch(&self, edge: PointerEdge) {
        let listeners: Vec<Listener> = self.with_node(|node| {
            node.listeners
                .iter()
                .filter(|(registered, _)| *registered == edge)
                .map(|(_, listener)| Rc::clone(listener))
                .collect()
        });
        for listener in listeners {
            listener();
        }
    }

    fn update_classes(&self, update: impl FnOnce(&mut Vec<String>)) {
        self.with_node_mut(|node| {
            let mut classes: Vec<String> = node
                .attributes
                .get("class")
                .map(|classes| classes.split_whitespace().map(str::to_string).collect())
                .unwrap_or_default();
            update(&mut classes);
            node.attributes.insert("class".to_string(), classes.join(" "));
        });
    }
}

impl DomElement for MemoryElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.with_node(|node| node.attributes.get(name).cloned())
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<(), DomError> {
        self.with_node_mut(|node| {
            node.attributes.insert(name.to_string(), value.to_string());
            *node.writes.entry(name.to_string()).or_insert(0) += 1;
        });
        Ok(())
    }

    fn query_selector(&self, selector: &str) -> Option<Self> {
        let first = self.tree.borrow().select(self.id, selector).first().copied();
        first.map(|id| self.sibling(id))
    }

    fn append_element(&self, tag: &str) -> Result<Self, DomError> {
        Ok(self.append(tag, &[]))
    }

    fn remove(&self) {
        self.tree.borrow_mut().detach(self.id);
    }

    fn add_class(&self, class: &str) -> Result<(), DomError> {
        self.update_classes(|classes| {
            if !classes.iter().any(|c| c == class) {
                classes.push(class.to_string());
            }
        });
        Ok(())
    }

    fn remove_class(&self, class: &str) -> Result<(), DomError> {
        self.update_classes(|classes| classes.retain(|c| c != class));
        Ok(())
    }

    fn set_text(&self, text: &str) {
        let children = self.with_node_mut(|node| {
            node.text = text.to_string();
            std::mem::take(&mut node.children)
        });
        let mut tree = self.tree.borrow_mut();
        for child in children {
            tree.nodes[child].parent = None;
        }
    }

    fn hide(&self) -> Result<(), DomError> {
        self.with_node_mut(|node| node.hidden = true);
        Ok(())
    }

    fn pause(&self) -> Result<(), DomError> {
        self.with_node_mut(|node| match node.media {
            Some(MediaState::Playing | MediaState::Paused) => {
                node.media = Some(MediaState::Paused);
                Ok(())
            }
            Some(MediaState::Unavailable) => Err(DomError::Js(
                "InvalidStateError: media is not available".to_string(),
            )),
            None => Err(DomError::Unsupported("media playback")),
        })
    }

    fn on_pointer(&self, edge: PointerEdge, handler: impl Fn() + 'static) -> Result<(), DomError> {
        let listener: Listener = Rc::new(handler);
        self.with_node_mut(|node| node.listeners.push((edge, listener)));
        Ok(())
    }
}
