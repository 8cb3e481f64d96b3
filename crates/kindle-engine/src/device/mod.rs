//! GPU device + presentation target management.
//!
//! This module is responsible for:
//! - negotiating an adapter and a logical device (`acquire`)
//! - the wgpu-backed source driving that negotiation (`gpu`)
//! - configuring the swap chain and handing out frame images (`swapchain`)

mod acquire;
mod error;
mod gpu;
mod swapchain;

pub use acquire::{acquire_device, AcquireState, DeviceAcquisition, GpuSource};
pub use error::GpuError;
pub use gpu::{AdapterHints, GpuDevice, WgpuSource};
pub use swapchain::{FrameImage, PresentationTarget, SwapChainConfig};
