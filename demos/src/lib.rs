// Copyright 2025 the Polyfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Windowed host for Polyfield demos.
//!
//! The library crates in this workspace are host-agnostic; this member
//! supplies the missing host: a winit window whose redraw callback is the
//! display-synchronized tick source, ui-events pointer translation, and a
//! vello renderer behind the [`VelloSurface`] draw-op adapter.
//!
//! A demo implements [`CanvasApp`] and hands itself to [`run`]. The host
//! guarantees the event-delivery scope the pointer layer documents: while a
//! mouse button is held, winit keeps delivering movement and the eventual
//! release to the window even when the cursor leaves it, so a vertex drag
//! released off-surface still ends.

mod host;
mod surface;

pub use host::{CanvasApp, run};
pub use surface::VelloSurface;
