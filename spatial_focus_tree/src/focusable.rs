// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Focusable-set queries and the navigation traits implemented by [`Document`].

use alloc::vec::Vec;

use hashbrown::HashSet;
use kurbo::Rect;
use spatial_focus::{FocusableProvider, GeometrySource};

use crate::document::Document;
use crate::types::ElementId;

impl Document {
    /// Focusable elements below `scope`, or in the whole document for `None`,
    /// in document order.
    ///
    /// See [`Element::is_focusable`](crate::Element::is_focusable) for the
    /// rules. The scope element itself is never included.
    pub fn focusable_elements(&self, scope: Option<ElementId>) -> Vec<ElementId> {
        self.descendants(scope)
            .filter(|&id| self.element(id).is_some_and(|e| e.is_focusable()))
            .collect()
    }

    /// Focusable elements below any of `scopes`, each reported once.
    ///
    /// Scopes are visited in order; an element reachable from several scopes
    /// (for example when one scope contains another) keeps its first position.
    pub fn focusable_elements_in(&self, scopes: &[ElementId]) -> Vec<ElementId> {
        let mut seen: HashSet<ElementId> = HashSet::new();
        let mut out = Vec::new();
        for &scope in scopes {
            for id in self.focusable_elements(Some(scope)) {
                if seen.insert(id) {
                    out.push(id);
                }
            }
        }
        tracing::trace!(
            scopes = scopes.len(),
            focusable = out.len(),
            "collected focusable set"
        );
        out
    }
}

impl FocusableProvider<ElementId> for Document {
    fn focusable_elements(&self, scope: Option<ElementId>) -> Vec<ElementId> {
        Self::focusable_elements(self, scope)
    }
}

impl GeometrySource<ElementId> for Document {
    fn bounds(&self, element: ElementId) -> Option<Rect> {
        Self::bounds(self, element)
    }
}
