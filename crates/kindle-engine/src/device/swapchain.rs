use super::GpuError;

/// Fixed swap chain configuration.
///
/// Applied once; the presentation target is never reconfigured.
#[derive(Debug, Clone)]
pub struct SwapChainConfig {
    pub width: u32,
    pub height: u32,
    pub format: wgpu::TextureFormat,
    pub present_mode: wgpu::PresentMode,
    pub usage: wgpu::TextureUsages,

    /// Hint only; support depends on platform/backend.
    pub desired_maximum_frame_latency: u32,
}

impl Default for SwapChainConfig {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
            format: wgpu::TextureFormat::Bgra8Unorm,
            present_mode: wgpu::PresentMode::Fifo,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            desired_maximum_frame_latency: 2,
        }
    }
}

impl SwapChainConfig {
    /// Checks this configuration against what the surface reports.
    pub fn validate(
        &self,
        formats: &[wgpu::TextureFormat],
        present_modes: &[wgpu::PresentMode],
    ) -> Result<(), GpuError> {
        if self.width == 0 || self.height == 0 {
            return Err(GpuError::UnsupportedSurface(format!(
                "size {}x{}",
                self.width, self.height
            )));
        }
        if !formats.contains(&self.format) {
            return Err(GpuError::UnsupportedSurface(format!("format {:?}", self.format)));
        }
        if !present_modes.contains(&self.present_mode) {
            return Err(GpuError::UnsupportedSurface(format!(
                "present mode {:?}",
                self.present_mode
            )));
        }
        Ok(())
    }

    pub fn surface_configuration(
        &self,
        alpha_mode: wgpu::CompositeAlphaMode,
    ) -> wgpu::SurfaceConfiguration {
        wgpu::SurfaceConfiguration {
            usage: self.usage,
            format: self.format,
            width: self.width,
            height: self.height,
            present_mode: self.present_mode,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: self.desired_maximum_frame_latency,
        }
    }
}

pub(crate) fn choose_alpha_mode(supported: &[wgpu::CompositeAlphaMode]) -> wgpu::CompositeAlphaMode {
    supported
        .first()
        .copied()
        .unwrap_or(wgpu::CompositeAlphaMode::Auto)
}

/// The configured surface.
pub struct PresentationTarget<'w> {
    /// Surface lifetime is tied to the window via `'w`.
    surface: wgpu::Surface<'w>,
    config: wgpu::SurfaceConfiguration,
}

impl<'w> PresentationTarget<'w> {
    /// Validates `config` against the surface capabilities and configures the
    /// surface with it.
    ///
    /// Only borrows the surface; the caller wraps it with [`Self::from_configured`]
    /// once it owns the surface again.
    pub fn configure(
        surface: &wgpu::Surface<'_>,
        adapter: &wgpu::Adapter,
        device: &wgpu::Device,
        config: &SwapChainConfig,
    ) -> Result<wgpu::SurfaceConfiguration, GpuError> {
        let caps = surface.get_capabilities(adapter);
        config.validate(&caps.formats, &caps.present_modes)?;

        let surface_config = config.surface_configuration(choose_alpha_mode(&caps.alpha_modes));
        surface.configure(device, &surface_config);

        log::info!(
            "swap chain configured: {}x{} {:?} {:?}",
            surface_config.width,
            surface_config.height,
            surface_config.format,
            surface_config.present_mode
        );

        Ok(surface_config)
    }

    pub fn from_configured(surface: wgpu::Surface<'w>, config: wgpu::SurfaceConfiguration) -> Self {
        Self { surface, config }
    }

    /// Acquires the current presentable image.
    pub fn acquire(&self) -> Result<FrameImage, GpuError> {
        let texture = self.surface.get_current_texture()?;
        let view = texture.texture.create_view(&wgpu::TextureViewDescriptor {
            format: Some(self.config.format),
            ..Default::default()
        });
        Ok(FrameImage { texture, view })
    }
}

/// One acquired swap chain image.
///
/// Valid for a single frame: presenting consumes it.
pub struct FrameImage {
    texture: wgpu::SurfaceTexture,
    view: wgpu::TextureView,
}

impl FrameImage {
    pub fn view(&self) -> &wgpu::TextureView {
        &self.view
    }

    pub fn present(self) {
        drop(self.view);
        self.texture.present();
    }
}
