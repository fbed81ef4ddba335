// Copyright 2025 the Polyfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-frame rendering for the Polyfield scene.
//!
//! This crate turns a scene snapshot into an ordered sequence of
//! backend-agnostic draw operations, once per display frame. It sits between
//! the scene/geometry layers and a concrete renderer:
//!
//! - **Draw-op IR**: [`DrawOp`] is a small plain-old-data vocabulary
//!   (clear, fill path, stroke path, fill circle) that any 2D backend can
//!   consume. Stroke parameters (width, dashes) ride along as
//!   [`StrokeStyle`].
//! - **Surface trait**: [`FrameSurface`] is implemented by backends. The
//!   surface owns its device-pixel-ratio handling; scaling is applied when
//!   the surface is (re)sized, never per frame, so transforms cannot
//!   compound.
//! - **Frame pass**: [`render_frame`] queries containment and the closest
//!   point for every polygon and emits the frame's ops (see [`pass`]).
//! - **Tick contract**: [`FrameLoop`] wraps the pass in an explicit
//!   start/stop lifecycle so a torn-down visualization can never be drawn
//!   again (see [`tick`]).
//!
//! The host environment supplies the clock: it calls [`FrameLoop::tick`]
//! from its display-synchronized redraw callback (never a fixed timer) and
//! schedules the next callback only while the loop reports that it is
//! running. The pass reads the scene and never mutates it.

#![no_std]

extern crate alloc;

pub mod pass;
pub mod tick;

pub use pass::{Palette, render_frame};
pub use tick::{FrameLoop, TickOutcome};

use alloc::boxed::Box;
use kurbo::Point;
use peniko::Color;

/// Stroke style used by [`DrawOp::StrokePath`].
///
/// This is a re-export of [`kurbo::Stroke`], which carries width, joins,
/// caps, and dash parameters.
pub type StrokeStyle = kurbo::Stroke;

/// One drawing command.
///
/// Ops are emitted in paint order; a backend that executes them in sequence
/// reproduces the frame. Paths are vertex polylines in surface-local logical
/// coordinates; `closed` strokes connect the last vertex back to the first.
#[derive(Clone, Debug)]
pub enum DrawOp {
    /// Clear the whole surface to a color.
    Clear {
        /// Background color.
        color: Color,
    },
    /// Fill the polygon described by `points` (implicitly closed).
    FillPath {
        /// Vertex loop in paint order.
        points: Box<[Point]>,
        /// Fill color.
        color: Color,
    },
    /// Stroke the polyline described by `points`.
    StrokePath {
        /// Vertices in paint order.
        points: Box<[Point]>,
        /// Whether to connect the last vertex back to the first.
        closed: bool,
        /// Width and dash parameters.
        style: StrokeStyle,
        /// Stroke color.
        color: Color,
    },
    /// Fill a circle, used for the probe and closest-point markers.
    FillCircle {
        /// Circle center.
        center: Point,
        /// Circle radius.
        radius: f64,
        /// Fill color.
        color: Color,
    },
}

/// A drawing surface that consumes [`DrawOp`]s.
///
/// Backends implement [`FrameSurface::draw`]; the provided methods are
/// shorthands for constructing the corresponding op. Device-pixel-ratio
/// scaling and resizing to the display size are the backend's concern,
/// handled when the surface changes size rather than on every frame.
pub trait FrameSurface {
    /// Execute one drawing command.
    fn draw(&mut self, op: DrawOp);

    /// Clear the whole surface to `color`.
    fn clear(&mut self, color: Color) {
        self.draw(DrawOp::Clear { color });
    }

    /// Fill the implicitly-closed polygon `points`.
    fn fill_path(&mut self, points: &[Point], color: Color) {
        self.draw(DrawOp::FillPath {
            points: points.into(),
            color,
        });
    }

    /// Stroke the polyline `points`, optionally closing it.
    fn stroke_path(&mut self, points: &[Point], closed: bool, style: StrokeStyle, color: Color) {
        self.draw(DrawOp::StrokePath {
            points: points.into(),
            closed,
            style,
            color,
        });
    }

    /// Fill a circle.
    fn fill_circle(&mut self, center: Point, radius: f64, color: Color) {
        self.draw(DrawOp::FillCircle {
            center,
            radius,
            color,
        });
    }
}
