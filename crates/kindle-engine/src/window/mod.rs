//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and the single window, and wires them to the
//! renderer and the frame loop. Native builds block on GPU setup inside
//! `resumed`; browser builds render into a canvas and let the page drive frames.

mod config;

#[cfg(not(target_arch = "wasm32"))]
mod runtime;
#[cfg(target_arch = "wasm32")]
mod web;

pub use config::RuntimeConfig;
#[cfg(not(target_arch = "wasm32"))]
pub use runtime::Runtime;
#[cfg(target_arch = "wasm32")]
pub use web::Runtime;
