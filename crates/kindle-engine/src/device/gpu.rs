use super::{GpuError, GpuSource};

/// Adapter selection hints.
#[derive(Debug, Clone)]
pub struct AdapterHints {
    pub power_preference: wgpu::PowerPreference,

    /// Force the software fallback adapter (useful on headless CI hosts).
    pub force_fallback_adapter: bool,
}

impl Default for AdapterHints {
    fn default() -> Self {
        Self {
            power_preference: wgpu::PowerPreference::HighPerformance,
            force_fallback_adapter: false,
        }
    }
}

/// Logical device plus the adapter it was created from.
///
/// The adapter is kept only to query surface capabilities.
pub struct GpuDevice {
    pub adapter: wgpu::Adapter,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
}

/// `GpuSource` backed by a wgpu instance and the window surface.
pub struct WgpuSource<'a, 'w> {
    instance: &'a wgpu::Instance,
    surface: &'a wgpu::Surface<'w>,
    hints: AdapterHints,
}

impl<'a, 'w> WgpuSource<'a, 'w> {
    pub fn new(instance: &'a wgpu::Instance, surface: &'a wgpu::Surface<'w>, hints: AdapterHints) -> Self {
        Self {
            instance,
            surface,
            hints,
        }
    }
}

impl GpuSource for WgpuSource<'_, '_> {
    type Adapter = wgpu::Adapter;
    type Device = GpuDevice;

    async fn request_adapter(&self) -> Result<wgpu::Adapter, GpuError> {
        let adapter = self
            .instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: self.hints.power_preference,
                compatible_surface: Some(self.surface),
                force_fallback_adapter: self.hints.force_fallback_adapter,
            })
            .await?;

        let info = adapter.get_info();
        log::info!("using adapter \"{}\" ({:?})", info.name, info.backend);

        Ok(adapter)
    }

    async fn request_device(&self, adapter: wgpu::Adapter) -> Result<GpuDevice, GpuError> {
        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("kindle device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                experimental_features: wgpu::ExperimentalFeatures::disabled(),
                memory_hints: wgpu::MemoryHints::Performance,
                trace: wgpu::Trace::Off,
            })
            .await?;

        Ok(GpuDevice {
            adapter,
            device,
            queue,
        })
    }
}
