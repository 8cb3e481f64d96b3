use std::time::Instant;

use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::device::GpuError;
use crate::frame::{FrameLoop, LoopState};
use crate::input::translate_key_event;
use crate::render::{Renderer, RendererInit};
use crate::time::FrameClock;

use super::RuntimeConfig;

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens the window and renders until it closes.
    ///
    /// Returns the first fatal GPU error, if any ended the loop.
    pub fn run(config: RuntimeConfig, init: RendererInit) -> Result<()> {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, init);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.fatal.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[self_referencing]
struct WindowEntry {
    frame_loop: FrameLoop,
    clock: FrameClock,

    window: Window,

    #[borrows(window)]
    #[covariant]
    renderer: Renderer<'this>,
}

struct AppState {
    config: RuntimeConfig,
    init: RendererInit,

    entry: Option<WindowEntry>,
    fatal: Option<anyhow::Error>,
}

impl AppState {
    fn new(config: RuntimeConfig, init: RendererInit) -> Self {
        Self {
            config,
            init,
            entry: None,
            fatal: None,
        }
    }

    fn create_window_entry(&self, event_loop: &ActiveEventLoop) -> Result<WindowEntry> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.size)
            .with_resizable(false);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let init = self.init.clone();

        // The continuation inside `Renderer::new` only runs once a device exists;
        // nothing else touches the GPU before this returns.
        let entry = WindowEntryTryBuilder {
            frame_loop: FrameLoop::with_max_frames(self.config.max_frames),
            clock: FrameClock::default(),
            window,
            renderer_builder: |w| pollster::block_on(Renderer::new(w, init)),
        }
        .try_build()
        .context("GPU initialization failed")?;

        Ok(entry)
    }

    /// Stores the first fatal error for `Runtime::run` to return.
    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        if self.fatal.is_none() {
            self.fatal = Some(err);
        }
        event_loop.exit();
    }

    fn closing(&self) -> bool {
        self.entry
            .as_ref()
            .is_some_and(|e| e.with_frame_loop(|lp| !lp.is_running()))
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(entry) = self.entry.as_mut() else {
            return;
        };

        let result: Result<LoopState, GpuError> = entry.with_mut(|fields| {
            let state = fields.frame_loop.step(fields.renderer)?;
            let time = fields.clock.tick();
            log::trace!("frame {} took {:.2} ms", time.frame_index, time.dt * 1000.0);

            if let Some(fps) = fields.clock.take_rate(Instant::now()) {
                log::debug!(
                    "{fps:.1} fps ({} command buffers submitted)",
                    fields.renderer.submissions()
                );
            }
            Ok(state)
        });

        match result {
            Ok(LoopState::Running) => {}
            Ok(LoopState::Closing) => event_loop.exit(),
            Err(err) => self.fail(event_loop, anyhow::Error::new(err).context("frame failed")),
        }
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.entry.is_some() || self.fatal.is_some() {
            return;
        }

        match self.create_window_entry(event_loop) {
            Ok(entry) => {
                entry.with_window(|w| w.request_redraw());
                self.entry = Some(entry);
            }
            Err(err) => self.fail(event_loop, err),
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.closing() || self.fatal.is_some() {
            event_loop.exit();
            return;
        }

        event_loop.set_control_flow(ControlFlow::Wait);

        // Continuous redraw; FIFO presentation paces it.
        if let Some(entry) = self.entry.as_ref() {
            entry.with_window(|w| w.request_redraw());
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(entry) = self.entry.as_mut() else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                entry.with_frame_loop_mut(|lp| lp.request_close());
            }

            WindowEvent::KeyboardInput { event, .. } => {
                let key_event = translate_key_event(&event);
                entry.with_frame_loop_mut(|lp| lp.handle_key(key_event));
            }

            WindowEvent::RedrawRequested => {
                entry.with_window(|w| w.pre_present_notify());
                self.redraw(event_loop);
            }

            // Fixed-size swap chain: resize events are not acted on.
            _ => {}
        }

        if self.closing() {
            event_loop.exit();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(entry) = self.entry.as_ref() {
            let frames = entry.with_frame_loop(|lp| lp.frames());
            log::debug!("releasing GPU resources after {frames} frames");
        }

        // Renderer borrows the window; drop both together before the loop ends.
        self.entry = None;
    }
}
