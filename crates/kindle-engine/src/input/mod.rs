//! Input subsystem.
//!
//! Public API is platform-agnostic. The runtime translates winit key codes via
//! [`translate_key_event`]; nothing else in the crate sees winit input types.

mod types;

pub use types::{map_key_code, translate_key_event, Key, KeyEvent, KeyState};
