// Copyright 2025 the Polyfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Winit + vello application harness.

use std::num::NonZeroUsize;
use std::sync::Arc;

use ui_events::pointer::PointerEvent;
use ui_events_winit::{WindowEventReducer, WindowEventTranslation};
use vello::peniko::Color;
use vello::util::{RenderContext, RenderSurface};
use vello::wgpu;
use vello::{AaConfig, Renderer, RendererOptions, Scene};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::error::EventLoopError;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::Window;

/// What a Polyfield demo plugs into the windowed host.
pub trait CanvasApp {
    /// Title of the window.
    fn window_title(&self) -> &'static str;

    /// Initial logical size of the window (width, height).
    fn initial_logical_size(&self) -> (f64, f64);

    /// Handle a pointer event in the surface's logical coordinate space.
    fn handle_pointer_event(&mut self, event: PointerEvent);

    /// The host interrupted interaction (window suspended). Any drag in
    /// progress must be abandoned as if the pointer had been released.
    fn interaction_cancelled(&mut self) {}

    /// The visualization is being torn down; per-frame work must stop so
    /// nothing draws or mutates after this call.
    fn teardown(&mut self) {}

    /// Build this frame's vello scene. Returns whether another frame should
    /// be scheduled; returning `false` parks the loop until the next input
    /// event.
    fn render_frame(
        &mut self,
        scene: &mut Scene,
        logical_size: (f64, f64),
        scale_factor: f64,
    ) -> bool;

    /// One-line readout shown in the window title, refreshed per frame.
    fn status_line(&self) -> Option<String> {
        None
    }
}

/// Window/surface lifecycle state.
enum RenderState<'s> {
    /// Winit is suspended; cache the window if we had one.
    Suspended(Option<Arc<Window>>),
    /// Active window + surface.
    Active {
        surface: Box<RenderSurface<'s>>,
        window: Arc<Window>,
    },
}

/// Drives a [`CanvasApp`] inside a winit event loop with a vello renderer.
struct CanvasHost<'s, A: CanvasApp> {
    context: RenderContext,
    renderer: Option<Renderer>,
    state: RenderState<'s>,
    scene: Scene,
    reducer: WindowEventReducer,
    app: A,
}

impl<A: CanvasApp> CanvasHost<'_, A> {
    fn new(app: A) -> Self {
        Self {
            context: RenderContext::new(),
            renderer: None,
            state: RenderState::Suspended(None),
            scene: Scene::new(),
            reducer: WindowEventReducer::default(),
            app,
        }
    }
}

impl<A: CanvasApp> ApplicationHandler for CanvasHost<'_, A> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let RenderState::Suspended(cached_window) = &mut self.state else {
            return;
        };

        let window = cached_window.take().unwrap_or_else(|| {
            let (w, h) = self.app.initial_logical_size();
            create_window(event_loop, self.app.window_title(), w, h)
        });

        let size = window.inner_size();
        let surface_future = self.context.create_surface(
            window.clone(),
            size.width,
            size.height,
            wgpu::PresentMode::AutoVsync,
        );
        let surface = pollster::block_on(surface_future).expect("create surface");

        if self.renderer.is_none() {
            self.renderer = Some(create_renderer(&self.context, &surface));
        }

        self.state = RenderState::Active {
            surface: Box::new(surface),
            window: window.clone(),
        };
        // Kick off the frame loop; each rendered frame requests the next.
        window.request_redraw();
    }

    fn suspended(&mut self, _event_loop: &ActiveEventLoop) {
        if let RenderState::Active { window, .. } = &self.state {
            self.app.interaction_cancelled();
            self.state = RenderState::Suspended(Some(window.clone()));
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        let (surface, window) = match &mut self.state {
            RenderState::Active { surface, window } if window.id() == window_id => {
                (surface, &**window)
            }
            _ => return,
        };

        if let Some(t) = self.reducer.reduce(window.scale_factor(), &event) {
            if let WindowEventTranslation::Pointer(e) = t {
                self.app.handle_pointer_event(e);
            }
            window.request_redraw();
        }

        match event {
            WindowEvent::CloseRequested => {
                self.app.teardown();
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                self.context
                    .resize_surface(surface, size.width, size.height);
            }
            WindowEvent::RedrawRequested => {
                self.scene.reset();
                let scale = window.scale_factor();
                let wgpu::SurfaceConfiguration { width, height, .. } = surface.config;
                let logical_size = (f64::from(width) / scale, f64::from(height) / scale);
                let keep_ticking = self.app.render_frame(&mut self.scene, logical_size, scale);

                if let Some(status) = self.app.status_line() {
                    window.set_title(&status);
                }

                let device_handle = &self.context.devices[surface.dev_id];

                let surface_texture = surface
                    .surface
                    .get_current_texture()
                    .expect("get surface texture");

                self.renderer
                    .as_mut()
                    .expect("renderer")
                    .render_to_texture(
                        &device_handle.device,
                        &device_handle.queue,
                        &self.scene,
                        &surface.target_view,
                        &vello::RenderParams {
                            base_color: Color::BLACK,
                            width,
                            height,
                            antialiasing_method: AaConfig::Area,
                        },
                    )
                    .expect("render to texture");

                let mut encoder =
                    device_handle
                        .device
                        .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                            label: Some("Surface Blit"),
                        });
                surface.blitter.copy(
                    &device_handle.device,
                    &mut encoder,
                    &surface.target_view,
                    &surface_texture
                        .texture
                        .create_view(&wgpu::TextureViewDescriptor::default()),
                );
                device_handle.queue.submit([encoder.finish()]);
                surface_texture.present();

                let _ = device_handle.device.poll(wgpu::PollType::Poll);

                // Display-synchronized continuation: AutoVsync paces the
                // presents, and the app decides whether another tick runs.
                if keep_ticking {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }
}

/// Run `app` until its window is closed.
pub fn run<A: CanvasApp>(app: A) -> Result<(), EventLoopError> {
    let event_loop = EventLoop::new()?;
    let mut host = CanvasHost::new(app);
    event_loop.run_app(&mut host)
}

fn create_window(event_loop: &ActiveEventLoop, title: &str, width: f64, height: f64) -> Arc<Window> {
    let attr = Window::default_attributes()
        .with_inner_size(LogicalSize::new(width, height))
        .with_resizable(true)
        .with_title(title.to_string());
    Arc::new(event_loop.create_window(attr).expect("create window"))
}

fn create_renderer(render_cx: &RenderContext, surface: &RenderSurface<'_>) -> Renderer {
    Renderer::new(
        &render_cx.devices[surface.dev_id].device,
        RendererOptions {
            use_cpu: false,
            antialiasing_support: vello::AaSupport::area_only(),
            num_init_threads: NonZeroUsize::new(1),
            pipeline_cache: None,
        },
    )
    .expect("create renderer")
}
