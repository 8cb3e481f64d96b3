use winit::event::ElementState;
use winit::keyboard::{KeyCode, PhysicalKey};

/// Keyboard key identifier.
///
/// Only keys the runtime can act on get a variant; everything else is
/// `Unknown` with the platform code when one exists.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Enter,
    Space,
    Tab,
    Backspace,

    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    /// Q, as in quit. Not bound to anything by default.
    Q,

    Unknown(u32),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// Key transition delivered to the frame loop.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct KeyEvent {
    pub key: Key,
    pub state: KeyState,
}

impl KeyEvent {
    pub fn pressed(key: Key) -> Self {
        Self {
            key,
            state: KeyState::Pressed,
        }
    }

    pub fn released(key: Key) -> Self {
        Self {
            key,
            state: KeyState::Released,
        }
    }
}

/// Maps a winit physical key to a [`Key`].
pub fn map_key_code(pk: PhysicalKey) -> Key {
    match pk {
        PhysicalKey::Code(code) => match code {
            KeyCode::Escape => Key::Escape,
            KeyCode::Enter | KeyCode::NumpadEnter => Key::Enter,
            KeyCode::Space => Key::Space,
            KeyCode::Tab => Key::Tab,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::ArrowUp => Key::ArrowUp,
            KeyCode::ArrowDown => Key::ArrowDown,
            KeyCode::ArrowLeft => Key::ArrowLeft,
            KeyCode::ArrowRight => Key::ArrowRight,
            KeyCode::KeyQ => Key::Q,
            other => Key::Unknown(other as u32),
        },

        // NativeKeyCode carries no stable numeric in winit 0.30.
        PhysicalKey::Unidentified(_) => Key::Unknown(0),
    }
}

/// Translates a winit keyboard event. Key-repeats arrive as presses.
pub fn translate_key_event(event: &winit::event::KeyEvent) -> KeyEvent {
    KeyEvent {
        key: map_key_code(event.physical_key),
        state: map_element_state(event.state),
    }
}

fn map_element_state(state: ElementState) -> KeyState {
    match state {
        ElementState::Pressed => KeyState::Pressed,
        ElementState::Released => KeyState::Released,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::NativeKeyCode;

    #[test]
    fn element_state_maps_both_ways() {
        assert_eq!(map_element_state(ElementState::Pressed), KeyState::Pressed);
        assert_eq!(map_element_state(ElementState::Released), KeyState::Released);
    }

    #[test]
    fn escape_maps_to_escape() {
        assert_eq!(map_key_code(PhysicalKey::Code(KeyCode::Escape)), Key::Escape);
    }

    #[test]
    fn numpad_enter_is_enter() {
        assert_eq!(map_key_code(PhysicalKey::Code(KeyCode::NumpadEnter)), Key::Enter);
    }

    #[test]
    fn unmapped_keys_are_unknown() {
        assert!(matches!(
            map_key_code(PhysicalKey::Code(KeyCode::KeyZ)),
            Key::Unknown(_)
        ));
        assert_eq!(
            map_key_code(PhysicalKey::Unidentified(NativeKeyCode::Unidentified)),
            Key::Unknown(0)
        );
    }
}
