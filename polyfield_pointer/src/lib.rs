// Copyright 2025 the Polyfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer interaction for the Polyfield scene.
//!
//! [`PointerController`] translates host pointer events into scene
//! mutations. It is a two-state machine:
//!
//! - **Idle**: pointer movement tracks the probe point.
//! - **Dragging**: pointer movement tracks the probe point *and* repositions
//!   the grabbed vertex to the same position on the same event, so the
//!   vertex follows the pointer exactly, with no smoothing or lag.
//!
//! A press within the grab radius of a vertex enters Dragging; releasing the
//! pointer always returns to Idle, wherever the release lands. The machine
//! state itself lives in the scene's drag target, so there is exactly one
//! source of truth for "which vertex is grabbed".
//!
//! ## Host event-delivery requirement
//!
//! The host must deliver the pointer-up (or a pointer-cancel) even when the
//! release occurs outside the drawing surface's bounds; otherwise a drag
//! that leaves the surface can never end. Desktop windowing hosts that
//! capture the pointer for the duration of a button press (winit does)
//! satisfy this automatically.
//!
//! ## Hit resolution
//!
//! [`grab_vertex_at`] resolves a press position to the nearest vertex within
//! the grab radius, scanning polygons and vertices in order and keeping the
//! closest (exact ties keep the first found). It is a plain function so
//! hosts with their own picking infrastructure can substitute theirs; the
//! controller only needs *some* way to turn a position into a vertex
//! reference.

#![no_std]

use kurbo::Point;
use polyfield_scene::{Polygon, Scene, VertexRef};

/// Default grab radius around a vertex, in surface-local logical units.
pub const DEFAULT_GRAB_RADIUS: f64 = 8.0;

/// Resolve `pos` to the nearest vertex within `radius`, if any.
///
/// Scans every vertex of every polygon; with scene sizes in the tens of
/// vertices this is cheaper than maintaining an index. Exact distance ties
/// keep the earliest (polygon, vertex) pair in iteration order.
pub fn grab_vertex_at(polygons: &[Polygon], pos: Point, radius: f64) -> Option<VertexRef> {
    let mut best: Option<(VertexRef, f64)> = None;
    for (polygon, poly) in polygons.iter().enumerate() {
        for (vertex, &v) in poly.vertices().iter().enumerate() {
            let dist = (v - pos).hypot();
            if dist <= radius && best.is_none_or(|(_, d)| dist < d) {
                best = Some((VertexRef { polygon, vertex }, dist));
            }
        }
    }
    best.map(|(target, _)| target)
}

/// Translates pointer events into [`Scene`] mutations.
///
/// The controller holds only configuration; the Idle/Dragging state is the
/// scene's drag target. Single-pointer input is assumed (a second press
/// while a drag is active is ignored rather than re-entering the machine).
#[derive(Clone, Copy, Debug)]
pub struct PointerController {
    /// Grab radius used by [`grab_vertex_at`] on press.
    pub grab_radius: f64,
}

impl Default for PointerController {
    fn default() -> Self {
        Self {
            grab_radius: DEFAULT_GRAB_RADIUS,
        }
    }
}

impl PointerController {
    /// Create a controller with an explicit grab radius.
    pub fn with_grab_radius(grab_radius: f64) -> Self {
        Self { grab_radius }
    }

    /// Pointer moved to `pos`.
    ///
    /// Replaces the probe, and while a drag is active also repositions the
    /// grabbed vertex to `pos` on this same event.
    pub fn on_move(&self, scene: &mut Scene, pos: Point) {
        scene.set_probe(pos);
        if let Some(target) = scene.drag_target() {
            scene.set_vertex(target, pos);
        }
    }

    /// Pointer pressed at `pos`.
    ///
    /// In Idle, a press within the grab radius of a vertex begins a drag and
    /// returns the grabbed reference. A press anywhere else, or while a drag
    /// is already active, changes nothing.
    pub fn on_down(&self, scene: &mut Scene, pos: Point) -> Option<VertexRef> {
        if scene.drag_target().is_some() {
            return None;
        }
        let target = grab_vertex_at(scene.polygons(), pos, self.grab_radius)?;
        scene.begin_drag(target);
        Some(target)
    }

    /// Pointer released.
    ///
    /// Ends any active drag regardless of where the release occurred (see
    /// the crate docs for the event-delivery requirement this relies on).
    /// Returns whether a drag was in fact ended.
    pub fn on_up(&self, scene: &mut Scene) -> bool {
        let was_dragging = scene.drag_target().is_some();
        scene.end_drag();
        was_dragging
    }

    /// Pointer interaction cancelled by the host (window loss, pointer
    /// capture revoked). Behaves exactly like a release so a drag can never
    /// get stuck.
    pub fn on_cancel(&self, scene: &mut Scene) -> bool {
        self.on_up(scene)
    }
}
