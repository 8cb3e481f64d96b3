use anyhow::{anyhow, Context, Result};
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop, EventLoopProxy};
use winit::platform::web::{EventLoopExtWebSys, WindowAttributesExtWebSys};
use winit::window::{Window, WindowId};

use crate::device::GpuError;
use crate::frame::{FrameLoop, LoopState};
use crate::input::translate_key_event;
use crate::render::{Renderer, RendererInit};

use super::RuntimeConfig;

/// Delivered back into the event loop when GPU setup finishes.
enum UserEvent {
    RendererReady(Result<Renderer<'static>, GpuError>),
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Attaches to the page canvas and hands the event loop to the browser.
    ///
    /// Returns immediately; frames are produced from animation-frame callbacks
    /// and fatal errors are logged to the console.
    pub fn run(config: RuntimeConfig, init: RendererInit) -> Result<()> {
        let event_loop = EventLoop::<UserEvent>::with_user_event()
            .build()
            .context("failed to create winit EventLoop")?;

        let app = WebApp {
            frame_loop: FrameLoop::with_max_frames(config.max_frames),
            proxy: event_loop.create_proxy(),
            config,
            init,
            window: None,
            renderer: None,
        };

        event_loop.spawn_app(app);
        Ok(())
    }
}

struct WebApp {
    config: RuntimeConfig,
    init: RendererInit,
    proxy: EventLoopProxy<UserEvent>,
    frame_loop: FrameLoop,

    /// Leaked once so the renderer can borrow it for the page's lifetime.
    window: Option<&'static Window>,
    renderer: Option<Renderer<'static>>,
}

impl WebApp {
    fn create_window(&self, event_loop: &ActiveEventLoop) -> Result<&'static Window> {
        let canvas = find_canvas(&self.config.canvas_id)?;

        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.size)
            .with_resizable(false)
            .with_canvas(Some(canvas));

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        Ok(Box::leak(Box::new(window)))
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::error!("{err:#}");
        self.renderer = None;
        event_loop.exit();
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(window), Some(renderer)) = (self.window, self.renderer.as_mut()) else {
            return;
        };

        window.pre_present_notify();

        match self.frame_loop.step(renderer) {
            // The next frame is requested from the browser's animation callback.
            Ok(LoopState::Running) => window.request_redraw(),
            Ok(LoopState::Closing) => event_loop.exit(),
            Err(err) => self.fail(event_loop, anyhow::Error::new(err).context("frame failed")),
        }
    }
}

impl ApplicationHandler<UserEvent> for WebApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match self.create_window(event_loop) {
            Ok(window) => window,
            Err(err) => return self.fail(event_loop, err),
        };
        self.window = Some(window);

        let init = self.init.clone();
        let proxy = self.proxy.clone();

        // The browser cannot block; acquisition resolves on the JS task queue.
        wasm_bindgen_futures::spawn_local(async move {
            let result = Renderer::new(window, init).await;
            if proxy.send_event(UserEvent::RendererReady(result)).is_err() {
                log::warn!("event loop closed before GPU setup finished");
            }
        });
    }

    fn user_event(&mut self, event_loop: &ActiveEventLoop, event: UserEvent) {
        match event {
            UserEvent::RendererReady(Ok(renderer)) => {
                self.renderer = Some(renderer);
                if let Some(window) = self.window {
                    window.request_redraw();
                }
            }
            UserEvent::RendererReady(Err(err)) => self.fail(
                event_loop,
                anyhow::Error::new(err).context("GPU initialization failed"),
            ),
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => self.frame_loop.request_close(),

            WindowEvent::KeyboardInput { event, .. } => {
                self.frame_loop.handle_key(translate_key_event(&event));
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            _ => {}
        }

        if !self.frame_loop.is_running() {
            event_loop.exit();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.renderer = None;
    }
}

fn find_canvas(id: &str) -> Result<HtmlCanvasElement> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .context("no browser document")?;

    document
        .get_element_by_id(id)
        .with_context(|| format!("no element with id {id:?}"))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| anyhow!("element {id:?} is not a canvas"))
}
