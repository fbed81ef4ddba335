// Copyright 2025 the Polyfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vello execution of the frame-pass draw ops.

use kurbo::{Affine, BezPath, Circle, Point, Rect};
use polyfield_frame::{DrawOp, FrameSurface};
use vello::Scene;
use vello::peniko::Fill;

/// Executes [`DrawOp`]s onto a vello [`Scene`] for one frame.
///
/// Ops arrive in surface-local logical coordinates; the adapter maps them
/// into device pixels with a single absolute scale transform captured at
/// construction. The scale factor only changes when the window is resized
/// or moved between displays, and because the transform is absolute rather
/// than accumulated, re-rendering every frame cannot compound it.
pub struct VelloSurface<'s> {
    scene: &'s mut Scene,
    transform: Affine,
    logical_size: (f64, f64),
}

impl<'s> VelloSurface<'s> {
    /// Wrap `scene` for one frame at the given scale factor and logical
    /// surface size.
    pub fn new(scene: &'s mut Scene, scale_factor: f64, logical_size: (f64, f64)) -> Self {
        Self {
            scene,
            transform: Affine::scale(scale_factor),
            logical_size,
        }
    }
}

impl core::fmt::Debug for VelloSurface<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("VelloSurface")
            .field("transform", &self.transform)
            .field("logical_size", &self.logical_size)
            .finish_non_exhaustive()
    }
}

fn polyline(points: &[Point], closed: bool) -> BezPath {
    let mut path = BezPath::new();
    if let Some((first, rest)) = points.split_first() {
        path.move_to(*first);
        for p in rest {
            path.line_to(*p);
        }
        if closed {
            path.close_path();
        }
    }
    path
}

impl FrameSurface for VelloSurface<'_> {
    fn draw(&mut self, op: DrawOp) {
        match op {
            DrawOp::Clear { color } => {
                let (w, h) = self.logical_size;
                self.scene.fill(
                    Fill::NonZero,
                    self.transform,
                    color,
                    None,
                    &Rect::new(0.0, 0.0, w, h),
                );
            }
            DrawOp::FillPath { points, color } => {
                self.scene.fill(
                    Fill::NonZero,
                    self.transform,
                    color,
                    None,
                    &polyline(&points, true),
                );
            }
            DrawOp::StrokePath {
                points,
                closed,
                style,
                color,
            } => {
                self.scene.stroke(
                    &style,
                    self.transform,
                    color,
                    None,
                    &polyline(&points, closed),
                );
            }
            DrawOp::FillCircle {
                center,
                radius,
                color,
            } => {
                self.scene.fill(
                    Fill::NonZero,
                    self.transform,
                    color,
                    None,
                    &Circle::new(center, radius),
                );
            }
        }
    }
}
