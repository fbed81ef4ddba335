// Copyright 2025 the Polyfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The tick/teardown contract.
//!
//! A continuously repeating frame callback is easy to start and easy to
//! leak. [`FrameLoop`] makes the lifecycle explicit: the host starts the
//! loop when the visualization mounts, calls [`FrameLoop::tick`] from its
//! display-synchronized redraw callback, and stops the loop on teardown.
//! After [`FrameLoop::stop`] every tick is inert (nothing is drawn and the
//! host is told not to schedule another callback), so a detached callback
//! can never paint against torn-down state.
//!
//! A tick may also find the surface temporarily unavailable (mid-resize,
//! mid-teardown); that tick is skipped without error and the host simply
//! waits for the next opportunity.

use polyfield_scene::Scene;

use crate::{FrameSurface, Palette, render_frame};

/// What a call to [`FrameLoop::tick`] did, and whether the host should
/// schedule another tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// A frame was rendered; schedule the next tick.
    Rendered,
    /// No surface was available; nothing was drawn, but the loop is still
    /// running; schedule the next tick.
    Skipped,
    /// The loop is stopped; nothing was drawn and no further tick may be
    /// scheduled.
    Stopped,
}

impl TickOutcome {
    /// Whether the host should schedule another tick after this one.
    pub fn should_continue(self) -> bool {
        !matches!(self, Self::Stopped)
    }
}

/// Explicit start/stop lifecycle around [`render_frame`].
///
/// Constructed stopped; the host pairs [`FrameLoop::start`] with mount and
/// [`FrameLoop::stop`] with teardown.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameLoop {
    running: bool,
}

impl FrameLoop {
    /// Create a loop in the stopped state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin ticking. Idempotent.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Stop ticking. Every subsequent [`FrameLoop::tick`] is a no-op until
    /// [`FrameLoop::start`] is called again. Idempotent.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Whether the loop is currently running.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Render one frame of `scene`, if the loop is running and a surface is
    /// available.
    pub fn tick<S: FrameSurface + ?Sized>(
        &self,
        scene: &Scene,
        surface: Option<&mut S>,
        palette: &Palette,
    ) -> TickOutcome {
        if !self.running {
            return TickOutcome::Stopped;
        }
        match surface {
            Some(surface) => {
                render_frame(scene, surface, palette);
                TickOutcome::Rendered
            }
            None => TickOutcome::Skipped,
        }
    }
}
