use thiserror::Error;

/// Every fatal condition of the acquisition chain, the presentation target and
/// the pipeline builder.
///
/// Backend status types are converted here and nowhere else.
#[derive(Debug, Error)]
pub enum GpuError {
    #[error("failed to create surface: {0}")]
    SurfaceCreation(String),

    #[error("no suitable GPU adapter: {0}")]
    AdapterUnavailable(String),

    #[error("failed to create logical device: {0}")]
    DeviceRequestFailed(String),

    #[error("device acquisition already completed")]
    AcquisitionFinished,

    #[error("surface does not support {0}")]
    UnsupportedSurface(String),

    #[error("pipeline color target {pipeline:?} does not match presentation format {target:?}")]
    FormatMismatch {
        pipeline: wgpu::TextureFormat,
        target: wgpu::TextureFormat,
    },

    #[error("failed to acquire the current surface image: {0}")]
    SurfaceAcquire(#[from] wgpu::SurfaceError),
}

impl From<wgpu::CreateSurfaceError> for GpuError {
    fn from(err: wgpu::CreateSurfaceError) -> Self {
        GpuError::SurfaceCreation(err.to_string())
    }
}

impl From<wgpu::RequestAdapterError> for GpuError {
    fn from(err: wgpu::RequestAdapterError) -> Self {
        GpuError::AdapterUnavailable(err.to_string())
    }
}

impl From<wgpu::RequestDeviceError> for GpuError {
    fn from(err: wgpu::RequestDeviceError) -> Self {
        GpuError::DeviceRequestFailed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_mismatch_names_both_formats() {
        let err = GpuError::FormatMismatch {
            pipeline: wgpu::TextureFormat::Rgba8Unorm,
            target: wgpu::TextureFormat::Bgra8Unorm,
        };
        let msg = err.to_string();
        assert!(msg.contains("Rgba8Unorm"));
        assert!(msg.contains("Bgra8Unorm"));
    }

    #[test]
    fn surface_error_converts_to_acquire_failure() {
        let err: GpuError = wgpu::SurfaceError::Outdated.into();
        assert!(matches!(err, GpuError::SurfaceAcquire(wgpu::SurfaceError::Outdated)));
    }
}
