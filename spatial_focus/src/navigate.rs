// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The horizontal and vertical navigators and their shared entry points.

use alloc::vec::Vec;
use core::fmt;

use crate::candidate::{self, AlignedSiblings, Candidate};
use crate::direction::{Direction, HorizontalDirection, VerticalDirection};
use crate::{FocusSink, FocusableProvider, GeometrySource};

/// Inputs for one navigation request.
///
/// `focusable` may or may not contain `current_focus`; the current element is
/// always skipped when scanning siblings. `D` is the direction type of the
/// navigator being called: [`HorizontalDirection`] (defaults to left),
/// [`VerticalDirection`] (defaults to down), or [`Direction`].
#[derive(Clone, Debug)]
pub struct NavigateOptions<'a, K, D> {
    /// The element that currently has focus.
    pub current_focus: K,
    /// Elements eligible to receive focus.
    pub focusable: &'a [K],
    /// Where to move.
    pub direction: D,
    /// Treatment of siblings aligned with the current element on the primary axis.
    pub aligned: AlignedSiblings,
}

/// Options for [`focus_horizontal`] and [`select_horizontal`].
pub type HorizontalOptions<'a, K> = NavigateOptions<'a, K, HorizontalDirection>;

/// Options for [`focus_vertical`] and [`select_vertical`].
pub type VerticalOptions<'a, K> = NavigateOptions<'a, K, VerticalDirection>;

impl<'a, K, D: Default> NavigateOptions<'a, K, D> {
    /// Options using the navigator's default direction.
    pub fn new(current_focus: K, focusable: &'a [K]) -> Self {
        Self::towards(current_focus, focusable, D::default())
    }
}

impl<'a, K, D> NavigateOptions<'a, K, D> {
    /// Options moving in `direction`.
    pub fn towards(current_focus: K, focusable: &'a [K], direction: D) -> Self {
        Self {
            current_focus,
            focusable,
            direction,
            aligned: AlignedSiblings::default(),
        }
    }

    /// Replace the direction.
    pub fn with_direction(mut self, direction: D) -> Self {
        self.direction = direction;
        self
    }

    /// Replace the aligned-sibling treatment.
    pub fn with_aligned(mut self, aligned: AlignedSiblings) -> Self {
        self.aligned = aligned;
        self
    }
}

/// Pick the sibling the horizontal navigator would focus, without focusing it.
pub fn select_horizontal<K, G>(options: &HorizontalOptions<'_, K>, geometry: &G) -> Option<K>
where
    K: Copy + Eq,
    G: GeometrySource<K> + ?Sized,
{
    select(
        options.current_focus,
        options.focusable,
        options.direction.into(),
        options.aligned,
        geometry,
    )
}

/// Pick the sibling the vertical navigator would focus, without focusing it.
pub fn select_vertical<K, G>(options: &VerticalOptions<'_, K>, geometry: &G) -> Option<K>
where
    K: Copy + Eq,
    G: GeometrySource<K> + ?Sized,
{
    select(
        options.current_focus,
        options.focusable,
        options.direction.into(),
        options.aligned,
        geometry,
    )
}

/// Move focus left or right.
///
/// Siblings qualify when their vertical span overlaps the current element's and
/// they lie on the requested side of it. The best candidate is handed to `sink`
/// and returned. When nothing qualifies the sink is not called and the result
/// is `None`.
///
/// ```rust
/// use kurbo::Rect;
/// use spatial_focus::{HorizontalOptions, focus_horizontal};
///
/// let rects = [
///     Rect::new(200.0, 0.0, 300.0, 50.0),
///     Rect::new(0.0, 0.0, 100.0, 50.0),
///     Rect::new(0.0, 100.0, 100.0, 150.0),
/// ];
/// let geometry = |i: usize| rects.get(i).copied();
/// let mut moves = Vec::new();
///
/// // Left is the default direction. Element 2 sits on another row.
/// let options = HorizontalOptions::new(0, &[0, 1, 2]);
/// assert_eq!(focus_horizontal(options, &geometry, &mut |i: usize| moves.push(i)), Some(1));
/// assert_eq!(moves, [1]);
/// ```
pub fn focus_horizontal<K, G, S>(
    options: HorizontalOptions<'_, K>,
    geometry: &G,
    sink: &mut S,
) -> Option<K>
where
    K: Copy + Eq,
    G: GeometrySource<K> + ?Sized,
    S: FocusSink<K> + ?Sized,
{
    focus(
        options.current_focus,
        options.focusable,
        options.direction.into(),
        options.aligned,
        geometry,
        sink,
    )
}

/// Move focus up or down.
///
/// The vertical counterpart of [`focus_horizontal`]: overlap is measured on the
/// horizontal extent and sides are decided by top edges.
pub fn focus_vertical<K, G, S>(
    options: VerticalOptions<'_, K>,
    geometry: &G,
    sink: &mut S,
) -> Option<K>
where
    K: Copy + Eq,
    G: GeometrySource<K> + ?Sized,
    S: FocusSink<K> + ?Sized,
{
    focus(
        options.current_focus,
        options.focusable,
        options.direction.into(),
        options.aligned,
        geometry,
        sink,
    )
}

/// Move focus in any of the four directions, dispatching on its axis.
pub fn focus_in_direction<K, G, S>(
    options: NavigateOptions<'_, K, Direction>,
    geometry: &G,
    sink: &mut S,
) -> Option<K>
where
    K: Copy + Eq,
    G: GeometrySource<K> + ?Sized,
    S: FocusSink<K> + ?Sized,
{
    focus(
        options.current_focus,
        options.focusable,
        options.direction,
        options.aligned,
        geometry,
        sink,
    )
}

/// Every sibling qualifying for `options`, best first.
///
/// The first entry is the element [`focus_in_direction`] would focus.
pub fn ranked_candidates<K, G>(
    options: &NavigateOptions<'_, K, Direction>,
    geometry: &G,
) -> Vec<Candidate<K>>
where
    K: Copy + Eq,
    G: GeometrySource<K> + ?Sized,
{
    candidate::ranked(
        options.current_focus,
        options.focusable,
        options.direction,
        options.aligned,
        geometry,
    )
}

fn select<K, G>(
    current: K,
    focusable: &[K],
    direction: Direction,
    aligned: AlignedSiblings,
    geometry: &G,
) -> Option<K>
where
    K: Copy + Eq,
    G: GeometrySource<K> + ?Sized,
{
    candidate::best(current, focusable, direction, aligned, geometry).map(|c| c.element)
}

fn focus<K, G, S>(
    current: K,
    focusable: &[K],
    direction: Direction,
    aligned: AlignedSiblings,
    geometry: &G,
    sink: &mut S,
) -> Option<K>
where
    K: Copy + Eq,
    G: GeometrySource<K> + ?Sized,
    S: FocusSink<K> + ?Sized,
{
    match candidate::best(current, focusable, direction, aligned, geometry) {
        Some(winner) => {
            tracing::debug!(
                %direction,
                overlap = winner.overlap,
                distance = winner.distance,
                "moving focus"
            );
            sink.focus(winner.element);
            Some(winner.element)
        }
        None => {
            tracing::debug!(
                %direction,
                siblings = focusable.len(),
                "no candidate, focus unchanged"
            );
            None
        }
    }
}

/// Directional navigation over a host's live focusable set.
///
/// A `Navigator` borrows a [`FocusableProvider`] and a [`GeometrySource`] (often
/// the same host object) and asks the provider for a fresh focusable set on
/// every call, limited to an optional scope.
///
/// ```rust
/// use kurbo::Rect;
/// use spatial_focus::{Direction, FocusableProvider, Navigator};
///
/// struct Toolbar(Vec<Rect>);
///
/// impl FocusableProvider<usize> for Toolbar {
///     fn focusable_elements(&self, _scope: Option<usize>) -> Vec<usize> {
///         (0..self.0.len()).collect()
///     }
/// }
///
/// let toolbar = Toolbar(vec![
///     Rect::new(0.0, 0.0, 40.0, 40.0),
///     Rect::new(50.0, 0.0, 90.0, 40.0),
/// ]);
/// let geometry = |i: usize| toolbar.0.get(i).copied();
/// let navigator = Navigator::new(&toolbar, &geometry);
///
/// let mut focused = 0;
/// navigator.navigate(focused, Direction::Right, &mut |i: usize| focused = i);
/// assert_eq!(focused, 1);
/// assert_eq!(navigator.select(1, Direction::Right), None);
/// ```
pub struct Navigator<'a, K, P: ?Sized, G: ?Sized> {
    provider: &'a P,
    geometry: &'a G,
    scope: Option<K>,
    aligned: AlignedSiblings,
}

impl<K: fmt::Debug, P: ?Sized, G: ?Sized> fmt::Debug for Navigator<'_, K, P, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Navigator")
            .field("scope", &self.scope)
            .field("aligned", &self.aligned)
            .finish_non_exhaustive()
    }
}

impl<K: Copy, P: ?Sized, G: ?Sized> Clone for Navigator<'_, K, P, G> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: Copy, P: ?Sized, G: ?Sized> Copy for Navigator<'_, K, P, G> {}

impl<'a, K, P, G> Navigator<'a, K, P, G>
where
    K: Copy + Eq,
    P: FocusableProvider<K> + ?Sized,
    G: GeometrySource<K> + ?Sized,
{
    /// Navigate over the whole document of `provider`.
    pub fn new(provider: &'a P, geometry: &'a G) -> Self {
        Self {
            provider,
            geometry,
            scope: None,
            aligned: AlignedSiblings::default(),
        }
    }

    /// Limit candidates to focusable descendants of `scope`.
    pub fn with_scope(mut self, scope: K) -> Self {
        self.scope = Some(scope);
        self
    }

    /// Replace the aligned-sibling treatment.
    pub fn with_aligned(mut self, aligned: AlignedSiblings) -> Self {
        self.aligned = aligned;
        self
    }

    /// The current focusable set, queried fresh from the provider.
    pub fn focusable(&self) -> Vec<K> {
        self.provider.focusable_elements(self.scope)
    }

    /// The element that navigating from `current` would focus.
    pub fn select(&self, current: K, direction: Direction) -> Option<K> {
        let focusable = self.focusable();
        select(current, &focusable, direction, self.aligned, self.geometry)
    }

    /// Move focus from `current` in `direction` and return the newly focused element.
    pub fn navigate<S>(&self, current: K, direction: Direction, sink: &mut S) -> Option<K>
    where
        S: FocusSink<K> + ?Sized,
    {
        let focusable = self.focusable();
        focus(
            current,
            &focusable,
            direction,
            self.aligned,
            self.geometry,
            sink,
        )
    }
}
