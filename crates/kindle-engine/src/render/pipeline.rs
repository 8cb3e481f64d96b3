use crate::device::GpuError;

use super::CompilationReport;

/// Embedded shader pair: vertex positions come from `vertex_index`, the
/// fragment stage returns constant red.
pub const TRIANGLE_SHADER: &str = include_str!("shaders/triangle.wgsl");

pub const VERTEX_ENTRY: &str = "vertexMain";
pub const FRAGMENT_ENTRY: &str = "fragmentMain";

/// Vertices drawn per frame.
pub(crate) const TRIANGLE_VERTICES: u32 = 3;

/// Pipeline description. No vertex buffers, no bind groups.
#[derive(Debug, Clone)]
pub struct PipelineDesc {
    pub label: &'static str,
    pub source: &'static str,
    pub vertex_entry: &'static str,
    pub fragment_entry: &'static str,
    pub color_format: wgpu::TextureFormat,
}

impl Default for PipelineDesc {
    fn default() -> Self {
        Self {
            label: "kindle triangle",
            source: TRIANGLE_SHADER,
            vertex_entry: VERTEX_ENTRY,
            fragment_entry: FRAGMENT_ENTRY,
            color_format: wgpu::TextureFormat::Bgra8Unorm,
        }
    }
}

/// The pipeline's single color target must use the presentation format.
pub fn check_color_target(
    pipeline: wgpu::TextureFormat,
    target: wgpu::TextureFormat,
) -> Result<(), GpuError> {
    if pipeline == target {
        Ok(())
    } else {
        Err(GpuError::FormatMismatch { pipeline, target })
    }
}

/// Immutable render pipeline built once from [`PipelineDesc`].
pub struct TrianglePipeline {
    pipeline: wgpu::RenderPipeline,
}

impl TrianglePipeline {
    /// Compiles the shader module and builds the pipeline rendering into `format`.
    ///
    /// Compilation diagnostics are logged and never stop construction. The
    /// caller has already matched `desc.color_format` against `format`.
    pub(crate) async fn new(
        device: &wgpu::Device,
        desc: &PipelineDesc,
        format: wgpu::TextureFormat,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(desc.label),
            source: wgpu::ShaderSource::Wgsl(desc.source.into()),
        });

        let info = shader.get_compilation_info().await;
        CompilationReport::from(&info).log();

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(desc.label),
            // Derived from the shader: no bind groups.
            layout: None,

            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some(desc.vertex_entry),
                compilation_options: Default::default(),
                buffers: &[],
            },

            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some(desc.fragment_entry),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        log::info!("render pipeline \"{}\" ready ({format:?})", desc.label);

        Self { pipeline }
    }

    /// Records the single draw: 3 vertices, 1 instance, nothing bound.
    pub fn draw(&self, pass: &mut wgpu::RenderPass<'_>) {
        pass.set_pipeline(&self.pipeline);
        pass.draw(0..TRIANGLE_VERTICES, 0..1);
    }
}
