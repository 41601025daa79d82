// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spatial Focus Tree: a small element tree that plugs into `spatial_focus`.
//!
//! [`Document`] is a generational tree of laid-out [`Element`]s. It answers the
//! two queries directional navigation needs:
//!
//! - which elements are focusable below a scope ([`Document::focusable_elements`]),
//! - where each element is ([`Document::bounds`]),
//!
//! and implements [`spatial_focus::FocusableProvider`] and
//! [`spatial_focus::GeometrySource`] on top of them. [`FocusState`] records
//! where focus went and implements [`spatial_focus::FocusSink`].
//!
//! ## Focusability
//!
//! An element is focusable when it is not disabled and either
//! - its [`ElementKind`] is a link, button, input, text area, select, or details container, or
//! - it carries a non-negative explicit tab index.
//!
//! The focusable set is computed on every query, in depth-first document order,
//! so enabling, disabling, moving, or removing elements is reflected by the
//! next navigation.
//!
//! ## Not a layout engine
//!
//! Bounds are supplied by the host after its own layout pass. The document
//! stores them as given, in one shared coordinate space.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Rect;
//! use spatial_focus::{Direction, Navigator};
//! use spatial_focus_tree::{Document, Element, ElementKind, FocusState};
//!
//! let mut doc = Document::new();
//! let toolbar = doc.insert(None, Element::default());
//! let open = doc.insert(
//!     Some(toolbar),
//!     Element::new(ElementKind::Button, Rect::new(0.0, 0.0, 60.0, 30.0)),
//! );
//! let save = doc.insert(
//!     Some(toolbar),
//!     Element::new(ElementKind::Button, Rect::new(70.0, 0.0, 130.0, 30.0)),
//! );
//!
//! let mut focus = FocusState::with_focus(open);
//! let navigator = Navigator::new(&doc, &doc);
//! navigator.navigate(open, Direction::Right, &mut focus);
//! assert_eq!(focus.focused(), Some(save));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod document;
mod focus_state;
mod focusable;
mod types;

pub use document::{Descendants, Document};
pub use focus_state::FocusState;
pub use types::{Element, ElementFlags, ElementId, ElementKind};

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Rect;
    use spatial_focus::{
        AlignedSiblings, Direction, FocusSink, HorizontalDirection, HorizontalOptions, Navigator,
        focus_horizontal,
    };

    fn rect(top: f64, left: f64, width: f64, height: f64) -> Rect {
        Rect::new(left, top, left + width, top + height)
    }

    fn button(top: f64, left: f64) -> Element {
        Element::new(ElementKind::Button, rect(top, left, 100.0, 50.0))
    }

    /// A 3x3 grid of buttons, 150 apart horizontally and 100 apart vertically.
    fn grid() -> (Document, ElementId, [[ElementId; 3]; 3]) {
        let mut doc = Document::new();
        let root = doc.insert(None, Element::default());
        let mut cells = [[root; 3]; 3];
        for (r, row) in cells.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                *cell = doc.insert(Some(root), button(r as f64 * 100.0, c as f64 * 150.0));
            }
        }
        (doc, root, cells)
    }

    #[test]
    fn arrows_walk_the_grid() {
        let (doc, _, cells) = grid();
        let navigator = Navigator::new(&doc, &doc);
        let mut focus = FocusState::with_focus(cells[1][1]);

        let steps = [
            (Direction::Right, cells[1][2]),
            (Direction::Down, cells[2][2]),
            (Direction::Left, cells[2][1]),
            (Direction::Left, cells[2][0]),
            (Direction::Up, cells[1][0]),
            (Direction::Up, cells[0][0]),
        ];
        for (direction, expected) in steps {
            let current = focus.focused().unwrap();
            navigator.navigate(current, direction, &mut focus);
            assert_eq!(focus.focused(), Some(expected), "moving {direction}");
        }
        assert_eq!(focus.changes(), 6);
    }

    #[test]
    fn edges_are_no_ops() {
        let (doc, _, cells) = grid();
        let navigator = Navigator::new(&doc, &doc);
        let mut focus = FocusState::with_focus(cells[0][0]);

        assert_eq!(navigator.navigate(cells[0][0], Direction::Up, &mut focus), None);
        assert_eq!(navigator.navigate(cells[0][0], Direction::Left, &mut focus), None);
        assert_eq!(focus.focused(), Some(cells[0][0]));
        assert_eq!(focus.changes(), 0);
    }

    #[test]
    fn disabled_and_removed_cells_are_skipped() {
        let (mut doc, _, cells) = grid();
        doc.set_disabled(cells[1][1], true);
        doc.remove(cells[1][2]);

        let navigator = Navigator::new(&doc, &doc);
        assert_eq!(navigator.select(cells[1][0], Direction::Right), None);
        assert_eq!(navigator.select(cells[0][1], Direction::Down), Some(cells[2][1]));
    }

    #[test]
    fn layout_changes_apply_to_next_call() {
        let (mut doc, _, cells) = grid();
        assert_eq!(
            Navigator::new(&doc, &doc).select(cells[0][0], Direction::Right),
            Some(cells[0][1])
        );

        // Move the middle cell of the first row past the last one.
        doc.set_bounds(cells[0][1], rect(0.0, 500.0, 100.0, 50.0));
        assert_eq!(
            Navigator::new(&doc, &doc).select(cells[0][0], Direction::Right),
            Some(cells[0][2])
        );
    }

    #[test]
    fn scope_limits_candidates() {
        let mut doc = Document::new();
        let left_pane = doc.insert(None, Element::default());
        let right_pane = doc.insert(None, Element::default());
        let a = doc.insert(Some(left_pane), button(0.0, 0.0));
        let b = doc.insert(Some(left_pane), button(0.0, 300.0));
        let c = doc.insert(Some(right_pane), button(0.0, 150.0));

        let whole = Navigator::new(&doc, &doc);
        assert_eq!(whole.select(a, Direction::Right), Some(c));
        let pane = whole.with_scope(left_pane);
        assert_eq!(pane.select(a, Direction::Right), Some(b));
        assert_eq!(pane.focusable(), [a, b]);
    }

    #[test]
    fn aligned_tab_indexed_panel_only_qualifies_forward() {
        let mut doc = Document::new();
        let a = doc.insert(None, button(0.0, 0.0));
        // Same left edge, half a row lower.
        let b = doc.insert(
            None,
            Element::new(ElementKind::Generic, rect(25.0, 0.0, 100.0, 50.0)).with_tab_index(0),
        );

        let navigator = Navigator::new(&doc, &doc);
        assert_eq!(navigator.select(a, Direction::Right), Some(b));
        assert_eq!(navigator.select(a, Direction::Left), None);
        let strict = navigator.with_aligned(AlignedSiblings::Excluded);
        assert_eq!(strict.select(a, Direction::Right), None);
    }

    #[test]
    fn axis_navigator_over_document_geometry() {
        let (doc, root, cells) = grid();
        let focusable = doc.focusable_elements(Some(root));
        let mut focus = FocusState::new();

        let options = HorizontalOptions::new(cells[2][2], &focusable);
        assert_eq!(options.direction, HorizontalDirection::Left);
        let moved = focus_horizontal(options, &doc, &mut focus);
        assert_eq!(moved, Some(cells[2][1]));
        assert_eq!(focus.focused(), Some(cells[2][1]));

        // The sink trait can also be driven directly.
        focus.focus(cells[0][0]);
        assert_eq!(focus.focused(), Some(cells[0][0]));
    }
}
