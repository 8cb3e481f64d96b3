use std::future::Future;

use crate::device::{GpuDevice, GpuError, PresentationTarget, SwapChainConfig};

use super::{check_color_target, PipelineDesc, TrianglePipeline};

/// Backend seam for the steps that follow device acquisition.
pub(crate) trait RenderSetup {
    type Device;
    type Target;
    type Pipeline;

    /// Configures the swap chain and reports the format it ended up with.
    fn configure_target(
        &self,
        device: &Self::Device,
        config: &SwapChainConfig,
    ) -> Result<(Self::Target, wgpu::TextureFormat), GpuError>;

    fn build_pipeline(
        &self,
        device: &Self::Device,
        desc: &PipelineDesc,
        format: wgpu::TextureFormat,
    ) -> impl Future<Output = Self::Pipeline>;
}

/// Configures the swap chain, then builds the pipeline for the format the
/// swap chain was configured with.
///
/// A format mismatch stops before the pipeline is built.
pub(crate) async fn build_render_resources<S: RenderSetup>(
    setup: &S,
    device: &S::Device,
    swap_chain: &SwapChainConfig,
    pipeline: &PipelineDesc,
) -> Result<(S::Target, S::Pipeline), GpuError> {
    let (target, format) = setup.configure_target(device, swap_chain)?;
    check_color_target(pipeline.color_format, format)?;
    let pipeline = setup.build_pipeline(device, pipeline, format).await;
    Ok((target, pipeline))
}

/// `RenderSetup` against the window surface.
pub(crate) struct WgpuSetup<'a, 'w> {
    pub surface: &'a wgpu::Surface<'w>,
}

impl RenderSetup for WgpuSetup<'_, '_> {
    type Device = GpuDevice;
    type Target = wgpu::SurfaceConfiguration;
    type Pipeline = TrianglePipeline;

    fn configure_target(
        &self,
        gpu: &GpuDevice,
        config: &SwapChainConfig,
    ) -> Result<(wgpu::SurfaceConfiguration, wgpu::TextureFormat), GpuError> {
        let surface_config =
            PresentationTarget::configure(self.surface, &gpu.adapter, &gpu.device, config)?;
        let format = surface_config.format;
        Ok((surface_config, format))
    }

    async fn build_pipeline(
        &self,
        gpu: &GpuDevice,
        desc: &PipelineDesc,
        format: wgpu::TextureFormat,
    ) -> TrianglePipeline {
        TrianglePipeline::new(&gpu.device, desc, format).await
    }
}
