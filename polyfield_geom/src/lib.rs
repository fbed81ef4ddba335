// Copyright 2025 the Polyfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Polygon containment and closest-point queries.
//!
//! This crate provides the pure geometric queries behind the Polyfield
//! visualization: given a simple polygon (an ordered vertex loop, with the
//! last vertex implicitly connected back to the first) and a probe point,
//! answer whether the probe lies inside the polygon and where the nearest
//! point inside or on the polygon is. It is built on [`kurbo`] and holds no
//! state of its own, so queries are reentrant and safe to repeat every frame.
//!
//! # Typical usage
//!
//! - Store polygons as vertex slices (`&[Point]`) in whatever scene structure
//!   suits the host; nothing here assumes a particular container.
//! - Call [`contains_point`] for an inside/outside classification.
//! - Call [`closest_point_in_polygon`] for the nearest point inside or on the
//!   boundary. When the probe is already inside, that is the probe itself.
//!
//! All queries are O(vertex count) with no acceleration structure; the
//! intended workload is tens of polygons with tens of vertices, re-queried
//! once per display frame.
//!
//! # Degenerate polygons
//!
//! Empty, single-vertex, and two-vertex polygons are accepted and produce
//! defined results (see each function); no input makes these functions panic.
//!
//! # Boundary behavior
//!
//! [`contains_point`] uses the even–odd ray-casting rule. Probes exactly on
//! a horizontal edge or exactly on a vertex may classify as either inside or
//! outside, and two polygons sharing an edge may disagree about a probe on
//! that edge. This is accepted behavior of the crossing predicate, not
//! something callers should try to compensate for.

#![no_std]

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Point;

/// Coincidence tolerance for segment endpoints, per axis.
const EPSILON: f64 = 1e-9;

/// Classify `probe` against the polygon `poly` using the even–odd rule.
///
/// A conceptual horizontal ray from `probe` towards `x = +∞` is tested
/// against every edge, including the closing edge from the last vertex back
/// to the first; an odd crossing count means inside. An edge crosses the ray
/// when exactly one of its endpoints lies strictly above the probe's y and
/// the edge's x at that y (by linear interpolation) is strictly greater than
/// the probe's x.
///
/// Polygons with fewer than three vertices always classify as outside.
/// See the crate docs for the exact-boundary caveat.
pub fn contains_point(poly: &[Point], probe: Point) -> bool {
    if poly.len() < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = poly.len() - 1;
    for i in 0..poly.len() {
        let (pi, pj) = (poly[i], poly[j]);
        if (pi.y > probe.y) != (pj.y > probe.y) {
            // The y difference is nonzero here, so the interpolation is safe.
            let x_at_probe_y = pj.x + (probe.y - pj.y) * (pi.x - pj.x) / (pi.y - pj.y);
            if x_at_probe_y > probe.x {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Return the point on the segment from `a` to `b` nearest to `p`.
///
/// Projects `p` onto the line through `a` and `b` and clamps the projection
/// parameter to the segment. When `a` and `b` coincide within tolerance on
/// both axes the segment has no direction and `a` is returned directly.
pub fn closest_point_on_segment(p: Point, a: Point, b: Point) -> Point {
    let ab = b - a;
    if ab.x.abs() < EPSILON && ab.y.abs() < EPSILON {
        return a;
    }
    let t = (p - a).dot(ab) / ab.hypot2();
    a.lerp(b, t.clamp(0.0, 1.0))
}

/// Return the point inside or on the boundary of `poly` nearest to `probe`.
///
/// - An empty polygon has nothing to project onto; `probe` comes back
///   unchanged.
/// - A single vertex is its own nearest point.
/// - A probe already inside the polygon satisfies the contract as-is and is
///   returned unchanged.
/// - Otherwise every edge (including the closing edge) is projected onto and
///   the nearest candidate wins. Exact distance ties keep the first edge in
///   iteration order, so repeated queries are stable.
pub fn closest_point_in_polygon(poly: &[Point], probe: Point) -> Point {
    let (first, rest) = match poly.split_first() {
        None => return probe,
        Some((first, rest)) if rest.is_empty() => return *first,
        Some(split) => split,
    };
    if contains_point(poly, probe) {
        return probe;
    }

    let mut closest = *first;
    let mut min_distance = f64::INFINITY;
    let mut a = *first;
    for &b in rest.iter().chain(core::iter::once(first)) {
        let candidate = closest_point_on_segment(probe, a, b);
        let dist = distance(probe, candidate);
        if dist < min_distance {
            min_distance = dist;
            closest = candidate;
        }
        a = b;
    }
    closest
}

/// Euclidean distance between two points.
pub fn distance(p1: Point, p2: Point) -> f64 {
    (p1 - p2).hypot()
}
