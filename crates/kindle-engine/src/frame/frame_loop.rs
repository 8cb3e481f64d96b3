use crate::device::GpuError;
use crate::input::{Key, KeyEvent, KeyState};

/// Per-frame GPU work, split into the three steps the loop orders.
pub trait FrameBackend {
    /// Presentable image; valid for one frame only.
    type Image;

    fn acquire_image(&mut self) -> Result<Self::Image, GpuError>;

    /// Records one render pass into `image` and submits exactly one command buffer.
    fn submit(&mut self, image: &Self::Image);

    /// Presents and releases `image`.
    fn present(&mut self, image: Self::Image);
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum LoopState {
    Running,
    Closing,
}

/// Running/Closing state machine around the per-frame sequence.
#[derive(Debug)]
pub struct FrameLoop {
    state: LoopState,
    frames: u64,
    max_frames: Option<u64>,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self {
            state: LoopState::Running,
            frames: 0,
            max_frames: None,
        }
    }

    /// Closes the loop by itself after `max` presented frames.
    pub fn with_max_frames(max: Option<u64>) -> Self {
        Self {
            max_frames: max,
            ..Self::new()
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// Frames submitted and presented so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Window-close request, user or platform initiated.
    pub fn request_close(&mut self) {
        if self.state == LoopState::Running {
            log::info!("close requested after {} frames", self.frames);
            self.state = LoopState::Closing;
        }
    }

    /// Applies a key transition. Only an Escape press closes the loop.
    pub fn handle_key(&mut self, event: KeyEvent) -> LoopState {
        if event.key == Key::Escape && event.state == KeyState::Pressed {
            self.request_close();
        }
        self.state
    }

    /// Runs one iteration: acquire, submit, present.
    ///
    /// Does nothing once closing or once the frame limit is reached. An
    /// acquire failure is returned before anything is submitted.
    pub fn step<B: FrameBackend>(&mut self, backend: &mut B) -> Result<LoopState, GpuError> {
        self.close_if_limit_reached();
        if self.state == LoopState::Closing {
            return Ok(self.state);
        }

        let image = backend.acquire_image()?;
        backend.submit(&image);
        backend.present(image);
        self.frames += 1;

        self.close_if_limit_reached();
        Ok(self.state)
    }

    fn close_if_limit_reached(&mut self) {
        if self.max_frames.is_some_and(|max| self.frames >= max) {
            self.request_close();
        }
    }
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}
