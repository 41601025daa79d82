// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core document implementation: structure, updates, traversal.

use alloc::vec::Vec;
use kurbo::Rect;
use smallvec::SmallVec;

use crate::types::{Element, ElementFlags, ElementId};

/// A tree of laid-out elements.
///
/// The document owns structure and per-element [`Element`] data. Bounds are
/// whatever the host's layout produced; updates take effect immediately, so
/// the next navigation call sees them.
///
/// ## Example
///
/// ```rust
/// use kurbo::Rect;
/// use spatial_focus_tree::{Document, Element, ElementKind};
///
/// let mut doc = Document::new();
/// let form = doc.insert(None, Element::default());
/// let ok = doc.insert(
///     Some(form),
///     Element::new(ElementKind::Button, Rect::new(0.0, 0.0, 80.0, 24.0)),
/// );
///
/// assert_eq!(doc.parent_of(ok), Some(form));
/// assert_eq!(doc.bounds(ok), Some(Rect::new(0.0, 0.0, 80.0, 24.0)));
/// ```
#[derive(Clone, Default)]
pub struct Document {
    /// slots
    nodes: Vec<Option<Node>>,
    /// last generation per slot (persists across frees)
    generations: Vec<u32>,
    free_list: Vec<usize>,
    roots: Vec<ElementId>,
}

impl core::fmt::Debug for Document {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total = self.nodes.len();
        let alive = self.nodes.iter().filter(|n| n.is_some()).count();
        f.debug_struct("Document")
            .field("nodes_total", &total)
            .field("nodes_alive", &alive)
            .field("free_list", &self.free_list.len())
            .field("roots", &self.roots.len())
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Debug)]
struct Node {
    generation: u32,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
    element: Element,
}

impl Node {
    fn new(generation: u32, element: Element) -> Self {
        Self {
            generation,
            parent: None,
            children: Vec::new(),
            element,
        }
    }
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new element as the last child of `parent` (or as the last root if `None`).
    ///
    /// Inserting under a stale `parent` inserts a root.
    pub fn insert(&mut self, parent: Option<ElementId>, element: Element) -> ElementId {
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.nodes[idx] = Some(Node::new(generation, element));
            #[allow(
                clippy::cast_possible_truncation,
                reason = "ElementId uses 32-bit indices by design."
            )]
            (idx as u32, generation)
        } else {
            let generation = 1_u32;
            self.nodes.push(Some(Node::new(generation, element)));
            self.generations.push(generation);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "ElementId uses 32-bit indices by design."
            )]
            ((self.nodes.len() - 1) as u32, generation)
        };
        let id = ElementId::new(idx, generation);
        match parent.filter(|&p| self.is_alive(p)) {
            Some(p) => self.link_parent(id, p),
            None => self.roots.push(id),
        }
        id
    }

    /// Remove an element and its subtree.
    pub fn remove(&mut self, id: ElementId) {
        if !self.is_alive(id) {
            return;
        }
        match self.node(id).parent {
            Some(parent) => self.unlink_parent(id, parent),
            None => self.roots.retain(|r| *r != id),
        }
        let mut stack: SmallVec<[ElementId; 16]> = SmallVec::new();
        stack.push(id);
        while let Some(next) = stack.pop() {
            if let Some(node) = self.nodes[next.idx()].take() {
                stack.extend(node.children);
                self.free_list.push(next.idx());
            }
        }
    }

    /// Returns true if `id` refers to a live element.
    ///
    /// An `ElementId` is live if its slot exists and its generation matches
    /// the generation currently stored in that slot.
    pub fn is_alive(&self, id: ElementId) -> bool {
        self.nodes
            .get(id.idx())
            .and_then(|n| n.as_ref())
            .map(|n| n.generation == id.1)
            .unwrap_or(false)
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.nodes.len() - self.free_list.len()
    }

    /// Whether the document has no live elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The element data for a live id.
    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.node_opt(id).map(|n| &n.element)
    }

    /// Laid-out bounds of a live element.
    pub fn bounds(&self, id: ElementId) -> Option<Rect> {
        self.node_opt(id).map(|n| n.element.bounds)
    }

    /// Update laid-out bounds.
    pub fn set_bounds(&mut self, id: ElementId, bounds: Rect) {
        if let Some(n) = self.node_opt_mut(id) {
            n.element.bounds = bounds;
        }
    }

    /// Update element flags.
    pub fn set_flags(&mut self, id: ElementId, flags: ElementFlags) {
        if let Some(n) = self.node_opt_mut(id) {
            n.element.flags = flags;
        }
    }

    /// Enable or disable an element.
    pub fn set_disabled(&mut self, id: ElementId, disabled: bool) {
        if let Some(n) = self.node_opt_mut(id) {
            n.element.flags.set(ElementFlags::DISABLED, disabled);
        }
    }

    /// Update the explicit tab index.
    pub fn set_tab_index(&mut self, id: ElementId, tab_index: Option<i32>) {
        if let Some(n) = self.node_opt_mut(id) {
            n.element.tab_index = tab_index;
        }
    }

    /// Returns the parent of an element if live, or `None` for roots or stale ids.
    pub fn parent_of(&self, id: ElementId) -> Option<ElementId> {
        self.node_opt(id).and_then(|n| n.parent)
    }

    /// Get the children of an element, or an empty slice if the id is stale.
    pub fn children_of(&self, id: ElementId) -> &[ElementId] {
        self.node_opt(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Top-level elements in insertion order.
    pub fn roots(&self) -> &[ElementId] {
        &self.roots
    }

    /// Elements below `scope` in depth-first pre-order, excluding `scope` itself.
    ///
    /// With `None`, walks the whole document starting at the roots. A stale
    /// scope yields nothing.
    pub fn descendants(&self, scope: Option<ElementId>) -> Descendants<'_> {
        let start = match scope {
            Some(id) => self.children_of(id),
            None => self.roots.as_slice(),
        };
        Descendants {
            doc: self,
            stack: start.iter().rev().copied().collect(),
        }
    }

    /// Access a node; panics if `id` is stale.
    fn node(&self, id: ElementId) -> &Node {
        self.nodes[id.idx()].as_ref().expect("dangling ElementId")
    }

    fn node_mut(&mut self, id: ElementId) -> &mut Node {
        self.nodes[id.idx()].as_mut().expect("dangling ElementId")
    }

    fn node_opt(&self, id: ElementId) -> Option<&Node> {
        let n = self.nodes.get(id.idx())?.as_ref()?;
        (n.generation == id.1).then_some(n)
    }

    fn node_opt_mut(&mut self, id: ElementId) -> Option<&mut Node> {
        let n = self.nodes.get_mut(id.idx())?.as_mut()?;
        if n.generation != id.1 {
            return None;
        }
        Some(n)
    }

    fn link_parent(&mut self, id: ElementId, parent: ElementId) {
        self.node_mut(parent).children.push(id);
        self.node_mut(id).parent = Some(parent);
    }

    fn unlink_parent(&mut self, id: ElementId, parent: ElementId) {
        self.node_mut(parent).children.retain(|c| *c != id);
        self.node_mut(id).parent = None;
    }
}

/// Depth-first pre-order iterator returned by [`Document::descendants`].
#[derive(Clone, Debug)]
pub struct Descendants<'a> {
    doc: &'a Document,
    stack: SmallVec<[ElementId; 16]>,
}

impl Iterator for Descendants<'_> {
    type Item = ElementId;

    fn next(&mut self) -> Option<ElementId> {
        let id = self.stack.pop()?;
        // Children are pushed in reverse so they pop in document order.
        self.stack
            .extend(self.doc.children_of(id).iter().rev().copied());
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ElementKind;
    use alloc::vec;

    fn button(x: f64) -> Element {
        Element::new(ElementKind::Button, Rect::new(x, 0.0, x + 10.0, 10.0))
    }

    #[test]
    fn insert_and_query() {
        let mut doc = Document::new();
        let root = doc.insert(None, Element::default());
        let a = doc.insert(Some(root), button(0.0));

        assert!(doc.is_alive(root));
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.parent_of(a), Some(root));
        assert_eq!(doc.parent_of(root), None);
        assert_eq!(doc.children_of(root), &[a]);
        assert_eq!(doc.roots(), &[root]);
        assert_eq!(doc.element(a).map(|e| e.kind), Some(ElementKind::Button));
    }

    #[test]
    fn liveness_insert_remove_reuse() {
        let mut doc = Document::new();
        let root = doc.insert(None, Element::default());
        let a = doc.insert(Some(root), button(0.0));

        doc.remove(a);
        assert!(!doc.is_alive(a));
        assert!(doc.children_of(root).is_empty());

        // The freed slot is reused with a bumped generation.
        let b = doc.insert(Some(root), button(0.0));
        assert!(doc.is_alive(b));
        assert!(!doc.is_alive(a));
        assert_eq!(a.0, b.0);
        assert!(b.1 > a.1, "generation must increase on reuse");

        // Setters ignore stale ids.
        doc.set_bounds(a, Rect::new(5.0, 5.0, 6.0, 6.0));
        assert_eq!(doc.bounds(a), None);
        assert_eq!(doc.bounds(b), Some(Rect::new(0.0, 0.0, 10.0, 10.0)));
    }

    #[test]
    fn remove_drops_whole_subtree() {
        let mut doc = Document::new();
        let root = doc.insert(None, Element::default());
        let group = doc.insert(Some(root), Element::default());
        let x = doc.insert(Some(group), button(0.0));
        let y = doc.insert(Some(group), button(20.0));
        let z = doc.insert(Some(root), button(40.0));

        doc.remove(group);
        assert!(!doc.is_alive(group));
        assert!(!doc.is_alive(x));
        assert!(!doc.is_alive(y));
        assert!(doc.is_alive(z));
        assert_eq!(doc.children_of(root), &[z]);
        assert_eq!(doc.len(), 2);

        doc.remove(root);
        assert!(doc.is_empty());
        assert!(doc.roots().is_empty());
    }

    #[test]
    fn stale_parent_inserts_root() {
        let mut doc = Document::new();
        let gone = doc.insert(None, Element::default());
        doc.remove(gone);
        let a = doc.insert(Some(gone), button(0.0));
        assert_eq!(doc.roots(), &[a]);
        assert_eq!(doc.parent_of(a), None);
    }

    #[test]
    fn depth_first_traversal() {
        let mut doc = Document::new();
        // Build: root -> [a -> [c, d], b], second root e
        let root = doc.insert(None, Element::default());
        let a = doc.insert(Some(root), Element::default());
        let b = doc.insert(Some(root), Element::default());
        let c = doc.insert(Some(a), Element::default());
        let d = doc.insert(Some(a), Element::default());
        let e = doc.insert(None, Element::default());

        let all: Vec<_> = doc.descendants(None).collect();
        assert_eq!(all, vec![root, a, c, d, b, e]);
        let under_root: Vec<_> = doc.descendants(Some(root)).collect();
        assert_eq!(under_root, vec![a, c, d, b]);
        let under_a: Vec<_> = doc.descendants(Some(a)).collect();
        assert_eq!(under_a, vec![c, d]);

        doc.remove(a);
        assert_eq!(doc.descendants(Some(a)).count(), 0);
        assert_eq!(doc.descendants(None).collect::<Vec<_>>(), vec![root, b, e]);
    }

    #[test]
    fn flags_and_tab_index_setters() {
        let mut doc = Document::new();
        let a = doc.insert(None, Element::default());

        doc.set_tab_index(a, Some(0));
        assert_eq!(doc.element(a).and_then(|e| e.tab_index), Some(0));

        doc.set_disabled(a, true);
        assert!(doc.element(a).is_some_and(Element::is_disabled));
        doc.set_flags(a, ElementFlags::empty());
        assert!(!doc.element(a).is_some_and(Element::is_disabled));
    }
}
