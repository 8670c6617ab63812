//=========================================================================
// Input Snapshot
//=========================================================================
//
// Persistent device state: what is held right now.
//
// Architecture:
//   InputEvent batches → apply_events() → HashSet (keys/buttons held) → query
//
// The snapshot carries no per-frame deltas. Screens that need
// "pressed this frame" diff consecutive snapshots with `InputEdges`.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashSet;

//=== Internal Dependencies ===============================================

use super::event::{InputEvent, KeyCode, Modifiers, MouseButton};

//=== InputSnapshot =======================================================

/// Keyboard and mouse state at one point in time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputSnapshot {
    keys_down: HashSet<KeyCode>,
    buttons_down: HashSet<MouseButton>,
    mouse_position: (f32, f32),
    modifiers: Modifiers,
}

impl InputSnapshot {
    /// Creates a snapshot with nothing held.
    pub fn new() -> Self {
        Self::default()
    }

    //--- Event Processing -------------------------------------------------

    /// Folds a batch of events into the held state.
    pub fn apply_events(&mut self, events: &[InputEvent]) {
        for event in events {
            self.apply_event(event);
        }
    }

    fn apply_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::KeyDown { key, modifiers } => {
                self.modifiers = *modifiers;
                self.keys_down.insert(*key);
            }
            InputEvent::KeyUp { key, modifiers } => {
                self.modifiers = *modifiers;
                self.keys_down.remove(key);
            }
            InputEvent::MouseButtonDown { button, modifiers } => {
                self.modifiers = *modifiers;
                self.buttons_down.insert(*button);
            }
            InputEvent::MouseButtonUp { button, modifiers } => {
                self.modifiers = *modifiers;
                self.buttons_down.remove(button);
            }
            InputEvent::MouseMoved { x, y } => {
                self.mouse_position = (*x, *y);
            }
            InputEvent::Unidentified => {}
        }
    }

    //--- Query API --------------------------------------------------------

    /// Returns `true` while `key` is held.
    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.keys_down.contains(&key)
    }

    /// Returns `true` while `button` is held.
    pub fn is_button_down(&self, button: MouseButton) -> bool {
        self.buttons_down.contains(&button)
    }

    pub fn keys_down(&self) -> impl Iterator<Item = &KeyCode> {
        self.keys_down.iter()
    }

    pub fn buttons_down(&self) -> impl Iterator<Item = &MouseButton> {
        self.buttons_down.iter()
    }

    /// Cursor position in window pixels.
    pub fn mouse_position(&self) -> (f32, f32) {
        self.mouse_position
    }

    /// Modifiers reported with the most recent key or button event.
    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn key_down(key: KeyCode) -> InputEvent {
        InputEvent::KeyDown {
            key,
            modifiers: Modifiers::NONE,
        }
    }

    fn key_up(key: KeyCode) -> InputEvent {
        InputEvent::KeyUp {
            key,
            modifiers: Modifiers::NONE,
        }
    }

    #[test]
    fn key_held_until_released() {
        let mut snapshot = InputSnapshot::new();

        snapshot.apply_events(&[key_down(KeyCode::Enter)]);
        assert!(snapshot.is_key_down(KeyCode::Enter));

        snapshot.apply_events(&[]);
        assert!(snapshot.is_key_down(KeyCode::Enter));

        snapshot.apply_events(&[key_up(KeyCode::Enter)]);
        assert!(!snapshot.is_key_down(KeyCode::Enter));
    }

    #[test]
    fn press_and_release_in_one_batch_leaves_key_up() {
        let mut snapshot = InputSnapshot::new();
        snapshot.apply_events(&[key_down(KeyCode::Space), key_up(KeyCode::Space)]);
        assert!(!snapshot.is_key_down(KeyCode::Space));
    }

    #[test]
    fn mouse_buttons_and_position_tracked() {
        let mut snapshot = InputSnapshot::new();
        snapshot.apply_events(&[
            InputEvent::MouseButtonDown {
                button: MouseButton::Left,
                modifiers: Modifiers::SHIFT,
            },
            InputEvent::MouseMoved { x: 10.0, y: 20.0 },
        ]);

        assert!(snapshot.is_button_down(MouseButton::Left));
        assert_eq!(snapshot.mouse_position(), (10.0, 20.0));
        assert!(snapshot.modifiers().shift);
    }

    #[test]
    fn unidentified_events_are_ignored() {
        let mut snapshot = InputSnapshot::new();
        snapshot.apply_events(&[InputEvent::Unidentified]);
        assert_eq!(snapshot, InputSnapshot::new());
    }
}
