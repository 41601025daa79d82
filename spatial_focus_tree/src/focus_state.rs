// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Focus bookkeeping for a [`Document`](crate::Document).

use spatial_focus::FocusSink;

use crate::types::ElementId;

/// Tracks which element of a document has focus.
///
/// `FocusState` is the [`FocusSink`] counterpart of a
/// [`Document`](crate::Document): navigation reads geometry from the document
/// and writes the result here. It is kept separate so both can be borrowed at
/// once.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FocusState {
    focused: Option<ElementId>,
    changes: u64,
}

impl FocusState {
    /// No element focused.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `element` focused.
    pub fn with_focus(element: ElementId) -> Self {
        Self {
            focused: Some(element),
            changes: 0,
        }
    }

    /// The focused element, if any.
    pub fn focused(&self) -> Option<ElementId> {
        self.focused
    }

    /// How many times focus moved to a different element.
    pub fn changes(&self) -> u64 {
        self.changes
    }

    /// Drop focus.
    pub fn blur(&mut self) {
        self.focused = None;
    }
}

impl FocusSink<ElementId> for FocusState {
    fn focus(&mut self, element: ElementId) {
        if self.focused != Some(element) {
            self.changes += 1;
            tracing::trace!(?element, "focus moved");
        }
        self.focused = Some(element);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_only_real_changes() {
        let a = ElementId::new(0, 1);
        let b = ElementId::new(1, 1);
        let mut state = FocusState::new();
        assert_eq!(state.focused(), None);

        state.focus(a);
        state.focus(a);
        state.focus(b);
        assert_eq!(state.focused(), Some(b));
        assert_eq!(state.changes(), 2);

        state.blur();
        assert_eq!(state.focused(), None);
        assert_eq!(FocusState::with_focus(a).focused(), Some(a));
    }
}
