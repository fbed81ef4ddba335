// Copyright 2025 the Polyfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scene state for the Polyfield visualization.
//!
//! A [`Scene`] holds the mutable state the rest of the stack works against:
//! an ordered list of [`Polygon`]s, the current probe point, and the vertex
//! currently being dragged, if any. Polygon indices are stable for the life
//! of the scene: vertex edits replace coordinates in place and never
//! reorder or renumber anything. A [`VertexRef`] captured at
//! drag-begin stays valid until the drag ends.
//!
//! The scene is deliberately passive: it performs no geometry and emits no
//! events. An interaction layer (see `polyfield_pointer`) applies mutations,
//! and a frame pass (see `polyfield_frame`) reads a snapshot each tick.
//! All access happens on one logical thread, so there is no locking here.
//!
//! [`presets`] provides the built-in polygon seeds used by
//! [`Scene::with_presets`].

#![no_std]

extern crate alloc;

pub mod presets;

use alloc::vec::Vec;
use kurbo::Point;

/// Where the probe parks before the first pointer movement arrives.
///
/// Deliberately outside any plausible surface so every polygon starts in the
/// "outside" rendering branch.
const PARKED_PROBE: Point = Point::new(-100.0, -100.0);

/// An ordered vertex loop; the last vertex connects back to the first.
///
/// Zero, one, and two-vertex polygons are representable (the geometry layer
/// defines their behavior); three or more vertices is the normal case.
/// Self-intersecting loops are not validated.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    /// Create a polygon from its vertex loop.
    pub fn new(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    /// The vertex loop, in order.
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Replace the vertex at `index` in place.
    ///
    /// The vertex count and ordering are unchanged. An out-of-range index is
    /// a caller bug and panics.
    pub fn set_vertex(&mut self, index: usize, pos: Point) {
        self.vertices[index] = pos;
    }
}

impl From<Vec<Point>> for Polygon {
    fn from(vertices: Vec<Point>) -> Self {
        Self::new(vertices)
    }
}

/// A stable reference to one vertex of one polygon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VertexRef {
    /// Index of the polygon within the scene.
    pub polygon: usize,
    /// Index of the vertex within that polygon's loop.
    pub vertex: usize,
}

/// The shared state read each frame and mutated by pointer interaction.
#[derive(Clone, Debug)]
pub struct Scene {
    polygons: Vec<Polygon>,
    probe: Point,
    drag: Option<VertexRef>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    /// Create an empty scene with the probe parked off-surface.
    pub fn new() -> Self {
        Self {
            polygons: Vec::new(),
            probe: PARKED_PROBE,
            drag: None,
        }
    }

    /// Create a scene seeded from the built-in [`presets`].
    pub fn with_presets() -> Self {
        let mut scene = Self::new();
        scene.polygons = presets::PRESETS.iter().map(|p| p.to_polygon()).collect();
        scene
    }

    /// Create a scene from an explicit polygon list.
    pub fn with_polygons(polygons: Vec<Polygon>) -> Self {
        let mut scene = Self::new();
        scene.polygons = polygons;
        scene
    }

    /// The current probe point.
    pub fn probe(&self) -> Point {
        self.probe
    }

    /// Replace the probe point. Called on every pointer movement.
    pub fn set_probe(&mut self, pos: Point) {
        self.probe = pos;
    }

    /// The polygon list, in seed order. Indices are stable across mutation.
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    /// Replace a single vertex in place; all other vertices, the vertex
    /// count, and polygon ordering are untouched.
    ///
    /// Out-of-range references are a programming error (the interaction
    /// layer only issues references it resolved from live scene state) and
    /// panic rather than being reported at runtime.
    pub fn set_vertex(&mut self, target: VertexRef, pos: Point) {
        self.polygons[target.polygon].set_vertex(target.vertex, pos);
    }

    /// Record `target` as the grabbed vertex. At most one vertex is grabbed
    /// at a time; a second call replaces the first.
    pub fn begin_drag(&mut self, target: VertexRef) {
        debug_assert!(
            target.polygon < self.polygons.len()
                && target.vertex < self.polygons[target.polygon].vertex_count(),
            "drag target must reference a live vertex"
        );
        self.drag = Some(target);
    }

    /// Clear the grabbed vertex. Safe to call when nothing is grabbed.
    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    /// The currently grabbed vertex, if a drag is in progress.
    pub fn drag_target(&self) -> Option<VertexRef> {
        self.drag
    }

    /// Total vertex count across all polygons (telemetry readout).
    pub fn vertex_count(&self) -> usize {
        self.polygons.iter().map(Polygon::vertex_count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn new_scene_parks_probe_off_surface() {
        let scene = Scene::new();
        assert!(scene.probe().x < 0.0 && scene.probe().y < 0.0);
        assert!(scene.polygons().is_empty());
        assert_eq!(scene.drag_target(), None);
    }

    #[test]
    fn preset_scene_seeds_all_polygons() {
        let scene = Scene::with_presets();
        assert_eq!(scene.polygons().len(), presets::PRESETS.len());
        // Triangle + square + L-shape + pentagon.
        assert_eq!(scene.vertex_count(), 3 + 4 + 6 + 5);
    }

    #[test]
    fn set_vertex_replaces_in_place() {
        let mut scene = Scene::with_polygons(vec![Polygon::new(vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(5.0, 10.0),
        ])]);
        let target = VertexRef { polygon: 0, vertex: 0 };
        scene.set_vertex(target, Point::new(20.0, 20.0));

        let poly = &scene.polygons()[0];
        assert_eq!(poly.vertex_count(), 3);
        assert_eq!(poly.vertices()[0], Point::new(20.0, 20.0));
        assert_eq!(poly.vertices()[1], Point::new(10.0, 0.0));
    }

    #[test]
    fn drag_target_set_and_cleared() {
        let mut scene = Scene::with_presets();
        let target = VertexRef { polygon: 1, vertex: 2 };
        scene.begin_drag(target);
        assert_eq!(scene.drag_target(), Some(target));
        scene.end_drag();
        assert_eq!(scene.drag_target(), None);
        // Ending again stays cleared.
        scene.end_drag();
        assert_eq!(scene.drag_target(), None);
    }

    #[test]
    fn probe_tracks_latest_position() {
        let mut scene = Scene::new();
        scene.set_probe(Point::new(12.0, 34.0));
        assert_eq!(scene.probe(), Point::new(12.0, 34.0));
        scene.set_probe(Point::new(56.0, 78.0));
        assert_eq!(scene.probe(), Point::new(56.0, 78.0));
    }
}
