//! Frame loop.
//!
//! Platform-independent: the loop drives any [`FrameBackend`]. The wgpu
//! renderer is one; tests use counting fakes.

mod frame_loop;

pub use frame_loop::{FrameBackend, FrameLoop, LoopState};
