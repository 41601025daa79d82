// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the element tree: identifiers, kinds, flags, and per-element data.

use kurbo::Rect;

/// Identifier for an element in a [`Document`](crate::Document) (generational).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ElementId(pub(crate) u32, pub(crate) u32);

impl ElementId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// What an element is, as far as focusability is concerned.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// A hyperlink.
    Link,
    /// A push button.
    Button,
    /// A text field, checkbox, radio button, or other input control.
    Input,
    /// A multi-line text field.
    TextArea,
    /// A selection list or dropdown.
    Select,
    /// An expandable details container.
    Details,
    /// Anything else: containers, labels, images.
    ///
    /// Generic elements are focusable only through an explicit tab index.
    #[default]
    Generic,
}

impl ElementKind {
    /// Whether elements of this kind take focus without an explicit tab index.
    pub const fn is_natively_focusable(self) -> bool {
        !matches!(self, Self::Generic)
    }
}

bitflags::bitflags! {
    /// Element state flags.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ElementFlags: u8 {
        /// The element is disabled and never takes focus.
        const DISABLED = 0b0000_0001;
    }
}

/// Per-element data supplied by the host.
///
/// `bounds` is the laid-out box in document coordinates; the document never
/// computes layout itself.
#[derive(Clone, Debug, Default)]
pub struct Element {
    /// Element kind.
    pub kind: ElementKind,
    /// Laid-out bounds, `x0`/`y0` being the left/top edges.
    pub bounds: Rect,
    /// Explicit focus-order marker. Non-negative values make any element
    /// focusable; negative values mark a generic element as not focusable.
    pub tab_index: Option<i32>,
    /// State flags.
    pub flags: ElementFlags,
}

impl Element {
    /// An element of `kind` laid out at `bounds`.
    pub fn new(kind: ElementKind, bounds: Rect) -> Self {
        Self {
            kind,
            bounds,
            ..Self::default()
        }
    }

    /// Set the tab index.
    pub fn with_tab_index(mut self, tab_index: i32) -> Self {
        self.tab_index = Some(tab_index);
        self
    }

    /// Mark the element disabled.
    pub fn disabled(mut self) -> Self {
        self.flags |= ElementFlags::DISABLED;
        self
    }

    /// Whether the element is disabled.
    pub fn is_disabled(&self) -> bool {
        self.flags.contains(ElementFlags::DISABLED)
    }

    /// Whether the element can take keyboard focus.
    ///
    /// Natively focusable kinds always qualify, other elements need a
    /// non-negative tab index, and disabled elements never qualify.
    pub fn is_focusable(&self) -> bool {
        if self.is_disabled() {
            return false;
        }
        self.kind.is_natively_focusable() || self.tab_index.is_some_and(|t| t >= 0)
    }
}
