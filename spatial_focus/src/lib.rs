// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spatial Focus: arrow-key focus navigation driven by on-screen geometry.
//!
//! Given the currently focused element, the set of focusable elements, and a
//! direction, the navigators pick the sibling that should receive focus next
//! based on where elements sit in a shared 2D coordinate space rather than on
//! document order.
//!
//! ## Scoring
//!
//! Navigation along one axis measures overlap on the other:
//!
//! - The [horizontal navigator](focus_horizontal) keeps siblings whose vertical
//!   span overlaps the current element and that start to the left (for
//!   [`HorizontalDirection::Left`]) or not to the left (for
//!   [`HorizontalDirection::Right`]) of it.
//! - The [vertical navigator](focus_vertical) mirrors this with the axes swapped:
//!   horizontal overlap, top edge comparison.
//!
//! Overlap is normalized by the current element's own extent, so `1.0` means the
//! sibling spans the current element completely on the cross axis.
//! Qualifying siblings become [`Candidate`]s ranked by descending overlap, then
//! ascending distance between leading edges, then ascending left edge. Remaining
//! ties keep the order of the focusable sequence.
//!
//! Siblings exactly aligned with the current element on the primary axis count
//! as lying ahead by default; see [`AlignedSiblings`].
//!
//! ## Host integration
//!
//! The crate does not know what an element is. Elements are small copyable
//! handles `K`, and the host supplies three capabilities:
//!
//! - [`GeometrySource`]: read-only bounds for a handle, as a [`kurbo::Rect`].
//! - [`FocusSink`]: the action that moves input focus.
//! - [`FocusableProvider`]: the elements eligible for focus within a scope.
//!
//! Closures implement the first two, which keeps tests and small hosts short:
//!
//! ```rust
//! use kurbo::Rect;
//! use spatial_focus::{HorizontalDirection, NavigateOptions, focus_horizontal};
//!
//! let rects = [
//!     (1_u32, Rect::new(0.0, 0.0, 100.0, 50.0)),
//!     (2_u32, Rect::new(150.0, 0.0, 250.0, 50.0)),
//! ];
//! let geometry = |id: u32| rects.iter().find(|(k, _)| *k == id).map(|(_, r)| *r);
//! let focusable = [1, 2];
//!
//! let mut focused = None;
//! let options = NavigateOptions::new(1, &focusable).with_direction(HorizontalDirection::Right);
//! focus_horizontal(options, &geometry, &mut |id: u32| focused = Some(id));
//! assert_eq!(focused, Some(2));
//! ```
//!
//! A [`Navigator`] binds a provider and a geometry source and re-queries the
//! focusable set on every call, so layout changes are picked up without any
//! caching on this side.
//!
//! Every call is synchronous and stateless. Finding no candidate is a normal
//! outcome: the sink is not called and the functions return `None`.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo` and `tracing`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for floating-point math.
//!
//! Navigation decisions are reported through [`tracing`] at the `debug` and
//! `trace` levels.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Rect;

mod candidate;
mod direction;
mod navigate;

pub use candidate::{AlignedSiblings, Candidate, cross_axis_overlap};
pub use direction::{
    Axis, AxisMismatch, Direction, HorizontalDirection, ParseDirectionError, VerticalDirection,
};
pub use navigate::{
    HorizontalOptions, NavigateOptions, Navigator, VerticalOptions, focus_horizontal,
    focus_in_direction, focus_vertical, ranked_candidates, select_horizontal, select_vertical,
};

/// Read-only access to element geometry.
///
/// All bounds handed to one navigation call must share a coordinate space.
/// Returning `None` marks an element as unmeasurable: it is skipped as a
/// sibling, and a call whose current element is unmeasurable does nothing.
pub trait GeometrySource<K> {
    /// Bounds of `element`, with `x0`/`y0` as its left/top edges.
    fn bounds(&self, element: K) -> Option<Rect>;
}

impl<K, F> GeometrySource<K> for F
where
    F: Fn(K) -> Option<Rect>,
{
    fn bounds(&self, element: K) -> Option<Rect> {
        self(element)
    }
}

/// The host action that transfers input focus.
pub trait FocusSink<K> {
    /// Move focus to `element`.
    fn focus(&mut self, element: K);
}

impl<K, F> FocusSink<K> for F
where
    F: FnMut(K),
{
    fn focus(&mut self, element: K) {
        self(element);
    }
}

/// Source of the elements eligible for focus.
pub trait FocusableProvider<K> {
    /// Focusable elements below `scope`, or in the whole document for `None`.
    ///
    /// Implementations return each element at most once, leave out disabled
    /// elements, and reflect the current state of the host on every call.
    fn focusable_elements(&self, scope: Option<K>) -> Vec<K>;
}
