//! GPU rendering subsystem.
//!
//! One shader module, one pipeline, one pass per frame:
//! - `pipeline` compiles the embedded WGSL and builds the render pipeline
//! - `diagnostics` turns shader compilation info into a loggable report
//! - `setup` configures the swap chain and builds the pipeline once a device exists
//! - `renderer` owns the device, the presentation target and the pipeline

mod diagnostics;
mod pipeline;
mod renderer;
pub(crate) mod setup;

pub use diagnostics::{CompilationMessage, CompilationReport, CompilationStatus, Severity};
pub use pipeline::{
    check_color_target, PipelineDesc, TrianglePipeline, FRAGMENT_ENTRY, TRIANGLE_SHADER,
    VERTEX_ENTRY,
};
pub use renderer::{Renderer, RendererInit};
