use winit::dpi::PhysicalSize;

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    /// Physical size; matches the swap chain, which is never resized.
    pub size: PhysicalSize<u32>,
    /// Stop after this many frames. `None` runs until the window closes.
    pub max_frames: Option<u64>,
    /// Id of the page canvas rendered into by browser builds.
    pub canvas_id: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "WebGPU window".to_string(),
            size: PhysicalSize::new(512, 512),
            max_frames: None,
            canvas_id: "canvas".to_string(),
        }
    }
}
