// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Candidate scoring: cross-axis overlap, primary-axis offset, and ranking.

use alloc::vec::Vec;
use core::cmp::Ordering;

use kurbo::Rect;

use crate::GeometrySource;
use crate::direction::{Axis, Direction};

/// How siblings sharing the current element's exact primary-axis position are
/// treated.
///
/// A sibling whose left edge (horizontal) or top edge (vertical) equals the
/// current element's is neither before nor after it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum AlignedSiblings {
    /// Aligned siblings count as "not before" the current element, so they
    /// qualify for [`Direction::Right`] and [`Direction::Down`] only.
    #[default]
    Forward,
    /// Aligned siblings never qualify.
    Excluded,
}

/// A sibling that qualified for a navigation request, with its ranking keys.
///
/// Candidates are produced per call and ordered by
/// 1. descending [`overlap`](Self::overlap),
/// 2. ascending [`distance`](Self::distance),
/// 3. ascending [`left`](Self::left),
/// 4. position in the focusable sequence.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Candidate<K> {
    /// The sibling element.
    pub element: K,
    /// Share of the current element's cross-axis extent covered by the sibling, in `(0, 1]`.
    pub overlap: f64,
    /// Absolute primary-axis offset between the two leading edges.
    pub distance: f64,
    /// The sibling's left edge, the final positional tie-break on both axes.
    pub left: f64,
}

/// Fraction of `current`'s cross-axis extent that `sibling` overlaps.
///
/// For [`Axis::Horizontal`] the cross axis is vertical (top/height); for
/// [`Axis::Vertical`] it is horizontal (left/width). Returns `None` unless the
/// overlap is strictly positive, which includes every case where `current` has
/// zero extent on the cross axis, or when either rect is not finite.
///
/// ```rust
/// use kurbo::Rect;
/// use spatial_focus::{Axis, cross_axis_overlap};
///
/// let current = Rect::new(0.0, 0.0, 100.0, 50.0);
/// let sibling = Rect::new(150.0, 25.0, 250.0, 75.0);
/// assert_eq!(cross_axis_overlap(current, sibling, Axis::Horizontal), Some(0.5));
/// assert_eq!(cross_axis_overlap(current, sibling, Axis::Vertical), None);
/// ```
pub fn cross_axis_overlap(current: Rect, sibling: Rect, axis: Axis) -> Option<f64> {
    if !current.is_finite() || !sibling.is_finite() {
        return None;
    }
    let (c0, c1) = cross_span(current.abs(), axis);
    let (s0, s1) = cross_span(sibling.abs(), axis);
    let extent = c1 - c0;
    if extent <= 0.0 {
        return None;
    }
    let shared = c1.min(s1) - c0.max(s0);
    let ratio = shared / extent;
    (ratio > 0.0).then_some(ratio)
}

fn cross_span(rect: Rect, axis: Axis) -> (f64, f64) {
    match axis {
        Axis::Horizontal => (rect.y0, rect.y1),
        Axis::Vertical => (rect.x0, rect.x1),
    }
}

fn leading_edge(rect: Rect, axis: Axis) -> f64 {
    match axis {
        Axis::Horizontal => rect.x0,
        Axis::Vertical => rect.y0,
    }
}

/// Score a single sibling against the current element.
///
/// Returns `None` when the sibling does not qualify for `direction`.
pub(crate) fn evaluate<K>(
    current: Rect,
    element: K,
    sibling: Rect,
    direction: Direction,
    aligned: AlignedSiblings,
) -> Option<Candidate<K>> {
    let axis = direction.axis();
    let overlap = cross_axis_overlap(current, sibling, axis)?;

    let current = current.abs();
    let sibling = sibling.abs();
    // Positive when the sibling starts before the current element.
    let offset = leading_edge(current, axis) - leading_edge(sibling, axis);
    let qualifies = if offset > 0.0 {
        direction.is_backward()
    } else if offset < 0.0 {
        !direction.is_backward()
    } else {
        !direction.is_backward() && aligned == AlignedSiblings::Forward
    };

    qualifies.then_some(Candidate {
        element,
        overlap,
        distance: offset.abs(),
        left: sibling.x0,
    })
}

/// Total order used to rank candidates; the best candidate sorts first.
pub(crate) fn compare<K>(a: &Candidate<K>, b: &Candidate<K>) -> Ordering {
    b.overlap
        .partial_cmp(&a.overlap)
        .unwrap_or(Ordering::Equal)
        .then_with(|| {
            a.distance
                .partial_cmp(&b.distance)
                .unwrap_or(Ordering::Equal)
        })
        .then_with(|| a.left.partial_cmp(&b.left).unwrap_or(Ordering::Equal))
}

/// Lazily score every sibling of `current` that qualifies for `direction`.
///
/// Yields nothing when the current element cannot be measured.
pub(crate) fn qualifying<'a, K, G>(
    current: K,
    focusable: &'a [K],
    direction: Direction,
    aligned: AlignedSiblings,
    geometry: &'a G,
) -> impl Iterator<Item = Candidate<K>> + 'a
where
    K: Copy + Eq,
    G: GeometrySource<K> + ?Sized,
{
    let current_rect = geometry.bounds(current);
    if current_rect.is_none() {
        tracing::debug!(%direction, "current element has no geometry");
    }

    focusable
        .iter()
        .enumerate()
        .filter_map(move |(index, &sibling)| {
            let current_rect = current_rect?;
            if sibling == current {
                return None;
            }
            let Some(sibling_rect) = geometry.bounds(sibling) else {
                tracing::trace!(index, "skipping sibling without geometry");
                return None;
            };
            let candidate = evaluate(current_rect, sibling, sibling_rect, direction, aligned)?;
            tracing::trace!(
                index,
                overlap = candidate.overlap,
                distance = candidate.distance,
                "sibling qualifies"
            );
            Some(candidate)
        })
}

/// Collect and rank every qualifying sibling of `current`.
///
/// The sort is stable, so fully tied candidates keep their order in
/// `focusable`.
pub(crate) fn ranked<K, G>(
    current: K,
    focusable: &[K],
    direction: Direction,
    aligned: AlignedSiblings,
    geometry: &G,
) -> Vec<Candidate<K>>
where
    K: Copy + Eq,
    G: GeometrySource<K> + ?Sized,
{
    let mut candidates: Vec<Candidate<K>> =
        qualifying(current, focusable, direction, aligned, geometry).collect();
    candidates.sort_by(compare);
    candidates
}

/// The first entry [`ranked`] would return, without allocating.
pub(crate) fn best<K, G>(
    current: K,
    focusable: &[K],
    direction: Direction,
    aligned: AlignedSiblings,
    geometry: &G,
) -> Option<Candidate<K>>
where
    K: Copy + Eq,
    G: GeometrySource<K> + ?Sized,
{
    // Only a strictly better candidate displaces the current best.
    qualifying(current, focusable, direction, aligned, geometry).reduce(|best, next| {
        if compare(&next, &best) == Ordering::Less {
            next
        } else {
            best
        }
    })
}
