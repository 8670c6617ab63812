//=========================================================================
// Transition System
//=========================================================================
//
// Timed alpha animations attached to screens.
//
// Architecture:
//   ScreenTransition
//     ├─ kind: TransitionKind (alpha curve)
//     ├─ position: 0.0 ..= 1.0
//     └─ direction: Forward (turning on) / Backward (turning off)
//
// Flow:
//   start(on/off) → update(dt) per frame → alpha() / black_overlay_alpha()
//
//=========================================================================

//=== Module Declarations =================================================

mod screen_transition;

//=== Public API ==========================================================

pub use screen_transition::{ScreenTransition, TransitionDirection, TransitionKind};

//=== Transition State ====================================================

/// Lifecycle phase of a screen owned by the screen manager.
///
/// ```text
///  add ──► TransitionOn ──complete──► Active
///   │                                   │ remove
///   └── (no transition) ──► Active      ▼
///                              TransitionOff ──position 0──► Hidden
///                                (no transition) ───────────► Hidden
/// ```
///
/// `Hidden` is terminal: the screen has been unloaded and is waiting to be
/// delisted at the next structural flush.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionState {
    /// Animating on; drawn and updated.
    TransitionOn,

    /// Fully shown.
    Active,

    /// Animating off; still drawn until the animation regresses to 0.
    TransitionOff,

    /// Unloaded and queued for removal.
    Hidden,
}

impl TransitionState {
    /// Returns `true` while a transition animation is running.
    pub fn is_transitioning(self) -> bool {
        matches!(self, Self::TransitionOn | Self::TransitionOff)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
