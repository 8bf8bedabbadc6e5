//! Application handler and render loop
//!
//! Window and renderer come up inside `resumed` (winit 0.30+ creates
//! windows only from within the event loop). After that the loop is
//! redraw -> present -> request the next redraw.

use std::sync::Arc;

use glint_metrics::FrameTimer;
use glint_render::wgpu;
use glint_render::window::window_attributes;
use glint_render::Renderer;
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowId};

use crate::settings::Settings;

/// Frames between frame-statistics log lines, also the stats window size
const STATS_INTERVAL: u64 = 120;

pub struct App {
    settings: Settings,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    frame_timer: FrameTimer,
    frames: u64,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            window: None,
            renderer: None,
            frame_timer: FrameTimer::new(STATS_INTERVAL as usize),
            frames: 0,
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(renderer) = &mut self.renderer else {
            return;
        };

        match renderer.render() {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost) | Err(wgpu::SurfaceError::Outdated) => {
                // The surface comes back after reconfiguring at the current size
                renderer.reconfigure();
                return;
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                tracing::error!("out of GPU memory, exiting");
                event_loop.exit();
                return;
            }
            Err(e) => {
                tracing::warn!("skipping frame: {e:?}");
                return;
            }
        }

        self.frame_timer.frame();
        self.frames += 1;
        if self.frames % STATS_INTERVAL == 0 {
            let stats = self.frame_timer.stats();
            tracing::debug!(
                "frame stats: {:.1} fps, {:.2}ms avg ({:.2}ms..{:.2}ms)",
                stats.fps,
                stats.avg_ms,
                stats.min_ms,
                stats.max_ms
            );
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let config = self.settings.window_config();
        let window = match event_loop.create_window(window_attributes(&config)) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                tracing::error!("failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let options = self.settings.renderer_options();
        match pollster::block_on(Renderer::new(window.clone(), options)) {
            Ok(renderer) => {
                self.window = Some(window);
                self.renderer = Some(renderer);
                tracing::info!("renderer ready");
            }
            Err(e) => {
                tracing::error!("failed to initialize renderer: {e}");
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("close requested, shutting down");
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                tracing::debug!("resizing surface to {}x{}", size.width, size.height);
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}
