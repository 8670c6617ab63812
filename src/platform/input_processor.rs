//=========================================================================
// Input Processor
//=========================================================================
//
// Turns winit keyboard and mouse events into `InputEvent`s for the frame
// thread.
//
// Architecture:
//   WindowEvent → InputProcessor → InputEvent → InputBuffer
//
// Three rules apply before anything reaches a screen:
// - OS key repeat is dropped: a held key is one KeyDown, one KeyUp
// - keys no screen can name are dropped
// - the latest ModifiersChanged state is stamped onto key and button
//   events, releases included
//
//=========================================================================

//=== External Dependencies ===============================================

use winit::{
    event::{ElementState, KeyEvent, MouseButton as WinitMouseButton},
    keyboard::{KeyCode as WinitKeyCode, ModifiersState, PhysicalKey},
};

//=== Internal Dependencies ===============================================

use crate::core::input::event::{InputEvent, KeyCode, Modifiers, MouseButton};

//=== InputProcessor ======================================================

pub(crate) struct InputProcessor {
    modifiers: Modifiers,
}

impl InputProcessor {
    pub(crate) fn new() -> Self {
        Self {
            modifiers: Modifiers::NONE,
        }
    }

    pub(crate) fn update_modifiers(&mut self, state: ModifiersState) {
        self.modifiers = Modifiers::from(state);
    }

    //--- Keyboard ---------------------------------------------------------

    pub(crate) fn process_key_event(&self, key_event: &KeyEvent) -> Option<InputEvent> {
        self.convert_key(key_event.physical_key, key_event.state, key_event.repeat)
    }

    /// `None` for repeats and for keys outside `KeyCode`.
    fn convert_key(
        &self,
        physical: PhysicalKey,
        state: ElementState,
        repeat: bool,
    ) -> Option<InputEvent> {
        if repeat {
            return None;
        }

        let PhysicalKey::Code(code) = physical else {
            return None;
        };
        let key = screen_key(code)?;
        let modifiers = self.modifiers;

        Some(match state {
            ElementState::Pressed => InputEvent::KeyDown { key, modifiers },
            ElementState::Released => InputEvent::KeyUp { key, modifiers },
        })
    }

    //--- Mouse ------------------------------------------------------------

    pub(crate) fn process_mouse_button(
        &self,
        button: WinitMouseButton,
        state: ElementState,
    ) -> InputEvent {
        let button = MouseButton::from(button);
        let modifiers = self.modifiers;

        match state {
            ElementState::Pressed => InputEvent::MouseButtonDown { button, modifiers },
            ElementState::Released => InputEvent::MouseButtonUp { button, modifiers },
        }
    }

    pub(crate) fn process_mouse_move(&self, x: f32, y: f32) -> InputEvent {
        InputEvent::MouseMoved { x, y }
    }
}

//=========================================================================
// Winit Conversions
//=========================================================================

/// Maps the physical keys the screens react to. Numpad Enter counts as
/// Enter.
fn screen_key(code: WinitKeyCode) -> Option<KeyCode> {
    let key = match code {
        WinitKeyCode::ArrowUp => KeyCode::ArrowUp,
        WinitKeyCode::ArrowDown => KeyCode::ArrowDown,
        WinitKeyCode::ArrowLeft => KeyCode::ArrowLeft,
        WinitKeyCode::ArrowRight => KeyCode::ArrowRight,
        WinitKeyCode::Enter | WinitKeyCode::NumpadEnter => KeyCode::Enter,
        WinitKeyCode::Space => KeyCode::Space,
        WinitKeyCode::Escape => KeyCode::Escape,
        WinitKeyCode::KeyQ => KeyCode::KeyQ,
        _ => return None,
    };
    Some(key)
}

/// Winit already folds macOS Cmd into control and Option into alt.
impl From<ModifiersState> for Modifiers {
    fn from(state: ModifiersState) -> Self {
        Self {
            shift: state.shift_key(),
            ctrl: state.control_key(),
            alt: state.alt_key(),
        }
    }
}

impl From<WinitMouseButton> for MouseButton {
    fn from(button: WinitMouseButton) -> Self {
        match button {
            WinitMouseButton::Left => MouseButton::Left,
            WinitMouseButton::Right => MouseButton::Right,
            WinitMouseButton::Middle => MouseButton::Middle,
            _ => MouseButton::Other,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
