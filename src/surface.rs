//! Retained element tree the swipe gesture attaches to.
//!
//! `Surface` plays the part of a document: elements carry marker classes,
//! string attributes and a horizontal translation, and structural changes are
//! published to subscribers. Element ids are never reused, so a stored id
//! behaves like a weak reference: once its element is removed every lookup
//! returns nothing and every mutation is a silent no-op.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

/// Opaque handle to an element of a [`Surface`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(u64);

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Description of an element to insert
#[derive(Debug, Clone, Default)]
pub struct ElementSpec {
    classes: Vec<String>,
    data: Vec<(String, String)>,
}

impl ElementSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    pub fn data(mut self, key: &str, value: impl Into<String>) -> Self {
        self.data.push((key.to_string(), value.into()));
        self
    }
}

/// Structural change notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Inserted { parent: ElementId, element: ElementId },
    Removed { parent: ElementId, element: ElementId },
}

#[derive(Debug)]
struct Element {
    parent: Option<ElementId>,
    children: Vec<ElementId>,
    classes: BTreeSet<String>,
    data: BTreeMap<String, String>,
    transform: Option<i32>,
}

impl Element {
    fn new(parent: Option<ElementId>, spec: ElementSpec) -> Self {
        Self {
            parent,
            children: Vec::new(),
            classes: spec.classes.into_iter().collect(),
            data: spec.data.into_iter().collect(),
            transform: None,
        }
    }
}

pub struct Surface {
    elements: HashMap<ElementId, Element>,
    root: ElementId,
    next_id: u64,
    observers: Vec<UnboundedSender<Mutation>>,
}

impl Default for Surface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface {
    pub fn new() -> Self {
        let root = ElementId(0);
        let mut elements = HashMap::new();
        elements.insert(root, Element::new(None, ElementSpec::new()));
        Self {
            elements,
            root,
            next_id: 1,
            observers: Vec::new(),
        }
    }

    pub fn root(&self) -> ElementId {
        self.root
    }

    /// Receive a [`Mutation`] for every insertion and removal from now on.
    pub fn subscribe(&mut self) -> UnboundedReceiver<Mutation> {
        let (tx, rx) = unbounded_channel();
        self.observers.push(tx);
        rx
    }

    /// Append a new element as the last child of `parent`.
    ///
    /// Returns `None` when `parent` no longer exists.
    pub fn append(&mut self, parent: ElementId, spec: ElementSpec) -> Option<ElementId> {
        if !self.elements.contains_key(&parent) {
            return None;
        }
        let id = ElementId(self.next_id);
        self.next_id += 1;
        self.elements.insert(id, Element::new(Some(parent), spec));
        if let Some(parent_element) = self.elements.get_mut(&parent) {
            parent_element.children.push(id);
        }
        self.notify(Mutation::Inserted { parent, element: id });
        Some(id)
    }

    /// Remove an element together with its whole subtree. The root stays.
    pub fn remove(&mut self, id: ElementId) -> bool {
        if id == self.root {
            return false;
        }
        let Some(parent) = self.elements.get(&id).and_then(|element| element.parent) else {
            return false;
        };
        if let Some(parent_element) = self.elements.get_mut(&parent) {
            parent_element.children.retain(|child| *child != id);
        }

        let mut pending = vec![id];
        while let Some(next) = pending.pop() {
            if let Some(element) = self.elements.remove(&next) {
                pending.extend(element.children);
            }
        }
        self.notify(Mutation::Removed { parent, element: id });
        true
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.elements.contains_key(&id)
    }

    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.elements.get(&id).and_then(|element| element.parent)
    }

    pub fn children(&self, id: ElementId) -> Vec<ElementId> {
        self.elements
            .get(&id)
            .map(|element| element.children.clone())
            .unwrap_or_default()
    }

    /// True when `node` is `ancestor` or lies somewhere below it.
    pub fn is_ancestor_or_self(&self, ancestor: ElementId, node: ElementId) -> bool {
        if !self.contains(ancestor) {
            return false;
        }
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.parent(id);
        }
        false
    }

    /// Nearest element carrying `class`, starting at `node` and walking up.
    pub fn closest(&self, node: ElementId, class: &str) -> Option<ElementId> {
        let mut current = Some(node);
        while let Some(id) = current {
            let element = self.elements.get(&id)?;
            if element.classes.contains(class) {
                return Some(id);
            }
            current = element.parent;
        }
        None
    }

    /// First strict descendant of `node` carrying `class`, in document order.
    pub fn find_descendant(&self, node: ElementId, class: &str) -> Option<ElementId> {
        let mut found = None;
        self.walk(node, &mut |id, element| {
            if id != node && element.classes.contains(class) {
                found = Some(id);
                return false;
            }
            true
        });
        found
    }

    /// Every element carrying `class`, in document order.
    pub fn query_class(&self, class: &str) -> Vec<ElementId> {
        let mut matches = Vec::new();
        self.walk(self.root, &mut |id, element| {
            if element.classes.contains(class) {
                matches.push(id);
            }
            true
        });
        matches
    }

    pub fn has_class(&self, id: ElementId, class: &str) -> bool {
        self.elements
            .get(&id)
            .is_some_and(|element| element.classes.contains(class))
    }

    pub fn add_class(&mut self, id: ElementId, class: &str) -> bool {
        match self.elements.get_mut(&id) {
            Some(element) => {
                element.classes.insert(class.to_string());
                true
            }
            None => false,
        }
    }

    pub fn remove_class(&mut self, id: ElementId, class: &str) -> bool {
        match self.elements.get_mut(&id) {
            Some(element) => {
                element.classes.remove(class);
                true
            }
            None => false,
        }
    }

    pub fn data(&self, id: ElementId, key: &str) -> Option<&str> {
        self.elements
            .get(&id)
            .and_then(|element| element.data.get(key))
            .map(String::as_str)
    }

    pub fn set_data(&mut self, id: ElementId, key: &str, value: &str) -> bool {
        match self.elements.get_mut(&id) {
            Some(element) => {
                element.data.insert(key.to_string(), value.to_string());
                true
            }
            None => false,
        }
    }

    /// Horizontal translation in pixels; `None` means untransformed.
    pub fn transform(&self, id: ElementId) -> Option<i32> {
        self.elements.get(&id).and_then(|element| element.transform)
    }

    pub fn set_transform(&mut self, id: ElementId, transform: Option<i32>) -> bool {
        match self.elements.get_mut(&id) {
            Some(element) => {
                element.transform = transform;
                true
            }
            None => false,
        }
    }

    /// Pre-order traversal below and including `start`; the visitor returns
    /// `false` to stop early.
    fn walk(&self, start: ElementId, visit: &mut dyn FnMut(ElementId, &Element) -> bool) {
        let mut stack = vec![start];
        while let Some(id) = stack.pop() {
            let Some(element) = self.elements.get(&id) else {
                continue;
            };
            if !visit(id, element) {
                return;
            }
            stack.extend(element.children.iter().rev().copied());
        }
    }

    fn notify(&mut self, mutation: Mutation) {
        self.observers.retain(|observer| observer.send(mutation).is_ok());
    }
}
