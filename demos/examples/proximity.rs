// Copyright 2025 the Polyfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interactive polygon containment & proximity demo.
//!
//! Move the pointer to probe the preset polygons: each polygon reports
//! whether the probe is inside it by switching fill, and when the probe is
//! outside, a dashed connector points at the nearest boundary point. Press
//! near a vertex and drag to reshape a polygon; the geometry re-answers on
//! the very next frame. The window title carries the telemetry readout.
//!
//! Run:
//! - `cargo run -p polyfield_demos --example proximity`

use polyfield_demos::{CanvasApp, VelloSurface, run};
use polyfield_frame::{FrameLoop, Palette};
use polyfield_pointer::PointerController;
use polyfield_scene::Scene;
use ui_events::pointer::{PointerButton, PointerButtonEvent, PointerEvent, PointerUpdate};

struct ProximityDemo {
    scene: Scene,
    controller: PointerController,
    frame_loop: FrameLoop,
    palette: Palette,
}

impl ProximityDemo {
    fn new() -> Self {
        let mut frame_loop = FrameLoop::new();
        frame_loop.start();
        Self {
            scene: Scene::with_presets(),
            controller: PointerController::default(),
            frame_loop,
            palette: Palette::default(),
        }
    }
}

impl CanvasApp for ProximityDemo {
    fn window_title(&self) -> &'static str {
        "Polyfield proximity"
    }

    fn initial_logical_size(&self) -> (f64, f64) {
        (700.0, 720.0)
    }

    fn handle_pointer_event(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down(PointerButtonEvent {
                button: Some(PointerButton::Primary),
                state,
                ..
            }) => {
                let p = state.logical_point();
                self.controller
                    .on_down(&mut self.scene, kurbo::Point::new(p.x, p.y));
            }
            PointerEvent::Move(PointerUpdate { current, .. }) => {
                let p = current.logical_point();
                self.controller
                    .on_move(&mut self.scene, kurbo::Point::new(p.x, p.y));
            }
            PointerEvent::Up(PointerButtonEvent {
                button: Some(PointerButton::Primary),
                ..
            }) => {
                self.controller.on_up(&mut self.scene);
            }
            PointerEvent::Cancel(_) => {
                self.controller.on_cancel(&mut self.scene);
            }
            _ => {}
        }
    }

    fn interaction_cancelled(&mut self) {
        self.controller.on_cancel(&mut self.scene);
    }

    fn teardown(&mut self) {
        self.frame_loop.stop();
    }

    fn render_frame(
        &mut self,
        scene: &mut vello::Scene,
        logical_size: (f64, f64),
        scale_factor: f64,
    ) -> bool {
        let mut surface = VelloSurface::new(scene, scale_factor, logical_size);
        self.frame_loop
            .tick(&self.scene, Some(&mut surface), &self.palette)
            .should_continue()
    }

    fn status_line(&self) -> Option<String> {
        let probe = self.scene.probe();
        Some(format!(
            "Polyfield proximity | probe {:.0} / {:.0} | {} vertices | O(n) per query",
            probe.x,
            probe.y,
            self.scene.vertex_count()
        ))
    }
}

fn main() {
    run(ProximityDemo::new()).expect("run event loop");
}
