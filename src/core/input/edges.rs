//=========================================================================
// Input Edges
//=========================================================================
//
// Screen-owned "pressed / released this frame" detection.
//
// Frame lifecycle: observe(snapshot) → query → next frame observe(...)
//
// Each screen keeps its own detector so a key that was already held when
// the screen appeared does not count as a fresh press.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashSet;

//=== Internal Dependencies ===============================================

use super::event::{KeyCode, MouseButton};
use super::snapshot::InputSnapshot;

//=== InputEdges ==========================================================

/// Diffs consecutive [`InputSnapshot`]s into per-frame transitions.
///
/// The first observation only records a baseline and reports no edges.
#[derive(Debug, Default)]
pub struct InputEdges {
    //--- Baseline ---------------------------------------------------------
    previous: Option<InputSnapshot>,

    //--- Frame Deltas (recomputed by observe()) --------------------------
    keys_pressed: HashSet<KeyCode>,
    keys_released: HashSet<KeyCode>,
    buttons_pressed: HashSet<MouseButton>,
    buttons_released: HashSet<MouseButton>,
}

impl InputEdges {
    pub fn new() -> Self {
        Self::default()
    }

    //--- Frame Processing -------------------------------------------------

    /// Computes edges between the last observed snapshot and `current`.
    pub fn observe(&mut self, current: &InputSnapshot) {
        self.keys_pressed.clear();
        self.keys_released.clear();
        self.buttons_pressed.clear();
        self.buttons_released.clear();

        if let Some(previous) = &self.previous {
            self.keys_pressed
                .extend(current.keys_down().filter(|k| !previous.is_key_down(**k)));
            self.keys_released
                .extend(previous.keys_down().filter(|k| !current.is_key_down(**k)));
            self.buttons_pressed
                .extend(current.buttons_down().filter(|b| !previous.is_button_down(**b)));
            self.buttons_released
                .extend(previous.buttons_down().filter(|b| !current.is_button_down(**b)));
        }

        self.previous = Some(current.clone());
    }

    /// Forgets the baseline; the next observation starts fresh.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    //--- Query API --------------------------------------------------------

    /// Returns `true` if `key` went UP → DOWN since the previous observation.
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed.contains(&key)
    }

    /// Returns `true` if `key` went DOWN → UP since the previous observation.
    pub fn is_key_released(&self, key: KeyCode) -> bool {
        self.keys_released.contains(&key)
    }

    /// Like [`is_key_pressed`](Self::is_key_pressed) but for mouse buttons.
    pub fn is_button_pressed(&self, button: MouseButton) -> bool {
        self.buttons_pressed.contains(&button)
    }

    /// Like [`is_key_released`](Self::is_key_released) but for mouse buttons.
    pub fn is_button_released(&self, button: MouseButton) -> bool {
        self.buttons_released.contains(&button)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::event::{InputEvent, Modifiers};

    fn snapshot_with(keys: &[KeyCode]) -> InputSnapshot {
        let mut snapshot = InputSnapshot::new();
        let events: Vec<_> = keys
            .iter()
            .map(|&key| InputEvent::KeyDown {
                key,
                modifiers: Modifiers::NONE,
            })
            .collect();
        snapshot.apply_events(&events);
        snapshot
    }

    #[test]
    fn first_observation_is_baseline_only() {
        let mut edges = InputEdges::new();
        edges.observe(&snapshot_with(&[KeyCode::Enter]));
        assert!(!edges.is_key_pressed(KeyCode::Enter));
    }

    #[test]
    fn press_reported_for_one_frame() {
        let mut edges = InputEdges::new();
        edges.observe(&snapshot_with(&[]));

        edges.observe(&snapshot_with(&[KeyCode::Enter]));
        assert!(edges.is_key_pressed(KeyCode::Enter));

        edges.observe(&snapshot_with(&[KeyCode::Enter]));
        assert!(!edges.is_key_pressed(KeyCode::Enter));
    }

    #[test]
    fn release_detected() {
        let mut edges = InputEdges::new();
        edges.observe(&snapshot_with(&[KeyCode::Escape]));
        edges.observe(&snapshot_with(&[]));

        assert!(edges.is_key_released(KeyCode::Escape));
        assert!(!edges.is_key_pressed(KeyCode::Escape));
    }

    #[test]
    fn mouse_button_edges() {
        let mut edges = InputEdges::new();
        let mut held = InputSnapshot::new();
        edges.observe(&held);

        held.apply_events(&[InputEvent::MouseButtonDown {
            button: MouseButton::Left,
            modifiers: Modifiers::NONE,
        }]);
        edges.observe(&held);

        assert!(edges.is_button_pressed(MouseButton::Left));
        assert!(!edges.is_button_released(MouseButton::Left));
    }

    #[test]
    fn reset_drops_baseline() {
        let mut edges = InputEdges::new();
        edges.observe(&snapshot_with(&[]));
        edges.reset();

        edges.observe(&snapshot_with(&[KeyCode::Space]));
        assert!(!edges.is_key_pressed(KeyCode::Space));
    }
}
