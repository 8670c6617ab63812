//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use aetheric_screens::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine host
pub use crate::engine::{Engine, EngineBuilder};

// Screen system
pub use crate::core::screen::{
    DrawContext, LoadContext, ManagerConfig, Screen, ScreenContext, ScreenId, ScreenManager,
};

// Transitions
pub use crate::core::transition::{ScreenTransition, TransitionKind, TransitionState};

// Rendering and content
pub use crate::core::content::ContentManager;
pub use crate::core::render::{Color, Rect, RecordingRenderer, Renderer, TextureHandle};

// Input
pub use crate::core::input::{InputEdges, InputSnapshot, KeyCode, Modifiers, MouseButton};

// Demo screens
pub use crate::screens::{
    GameScreen, LoadingScreen, MenuScreen, OptionsScreen, PauseScreen, SplashScreen,
};
