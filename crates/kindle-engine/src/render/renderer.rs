use winit::window::Window;

use crate::device::{
    acquire_device, AdapterHints, FrameImage, GpuDevice, GpuError, PresentationTarget,
    SwapChainConfig, WgpuSource,
};
use crate::frame::FrameBackend;

use super::setup::{build_render_resources, WgpuSetup};
use super::{PipelineDesc, TrianglePipeline};

/// Initialization parameters for [`Renderer`].
#[derive(Debug, Clone, Default)]
pub struct RendererInit {
    pub adapter: AdapterHints,
    pub swap_chain: SwapChainConfig,
    pub pipeline: PipelineDesc,
}

/// Owns every GPU object the program uses.
///
/// Built once per window; device and pipeline are never replaced.
pub struct Renderer<'w> {
    /// Kept alive for the surface and device it produced.
    _instance: wgpu::Instance,

    gpu: GpuDevice,
    target: PresentationTarget<'w>,
    pipeline: TrianglePipeline,

    submissions: u64,
}

impl<'w> Renderer<'w> {
    /// Creates the surface, negotiates adapter and device, then configures
    /// the swap chain and builds the pipeline.
    ///
    /// Nothing past the surface is created if either request fails.
    pub async fn new(window: &'w Window, init: RendererInit) -> Result<Self, GpuError> {
        let RendererInit {
            adapter: hints,
            swap_chain,
            pipeline: pipeline_desc,
        } = init;

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance.create_surface(window)?;

        let (gpu, surface_config, pipeline) = {
            let source = WgpuSource::new(&instance, &surface, hints);
            let setup = WgpuSetup { surface: &surface };
            let (setup, swap_chain, pipeline_desc) = (&setup, &swap_chain, &pipeline_desc);

            acquire_device(&source, move |gpu: GpuDevice| async move {
                let (surface_config, pipeline) =
                    build_render_resources(setup, &gpu, swap_chain, pipeline_desc).await?;
                Ok((gpu, surface_config, pipeline))
            })
            .await?
        };

        Ok(Self {
            _instance: instance,
            gpu,
            target: PresentationTarget::from_configured(surface, surface_config),
            pipeline,
            submissions: 0,
        })
    }

    /// Command buffers submitted since creation.
    pub fn submissions(&self) -> u64 {
        self.submissions
    }
}

impl FrameBackend for Renderer<'_> {
    type Image = FrameImage;

    fn acquire_image(&mut self) -> Result<FrameImage, GpuError> {
        self.target.acquire()
    }

    fn submit(&mut self, image: &FrameImage) {
        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("kindle frame encoder"),
            });

        // Pass is dropped (ended) before the encoder is finished.
        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("kindle triangle pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: image.view(),
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            self.pipeline.draw(&mut pass);
        }

        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        self.submissions += 1;
    }

    fn present(&mut self, image: FrameImage) {
        image.present();
    }
}
