//=========================================================================
// Screen System
//=========================================================================
//
// Screens, their per-call contexts, and the manager that sequences them.
//
// Architecture:
//   ScreenManager
//     ├─ screens: Vec<ScreenEntry>       (live, back-to-front)
//     ├─ to_add / to_remove              (flushed at the start of update)
//     └─ commands: ScreenCommands        (requests from screen callbacks)
//
// Flow:
//   update(dt) → flush → advance transitions → Screen::update(ctx)
//   draw(dt)   → Screen::draw(ctx) back-to-front → overlay pass
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;

//=== Internal Dependencies ===============================================

use crate::core::content::ContentManager;
use crate::core::input::InputSnapshot;
use crate::core::render::Renderer;
use crate::core::transition::{ScreenTransition, TransitionState};

//=== Module Declarations =================================================

mod commands;
mod config;
mod manager;

//=== Public API ==========================================================

pub use config::ManagerConfig;
pub use manager::ScreenManager;

use commands::{ScreenCommand, ScreenCommands};

//=== ScreenId ============================================================

/// Stable handle of a screen registered with a [`ScreenManager`].
///
/// Ids are never reused, so a stale id simply refers to nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScreenId(pub(crate) u64);

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "screen#{}", self.0)
    }
}

//=== Screen Trait ========================================================

/// A self-contained presentation state (menu, gameplay, dialog, ...).
///
/// Only `update` and `draw` are required. Lifecycle hooks default to
/// doing nothing.
///
/// # Lifecycle
///
/// 1. `initialize` then `load_content`, synchronously when the screen is
///    handed to the manager
/// 2. `update` / `draw` every frame while active (also during
///    `TransitionOff` unless [`update_while_leaving`](Self::update_while_leaving)
///    says otherwise)
/// 3. `unload_content` exactly once when the screen becomes `Hidden`, or
///    when it is removed before it was ever shown
///
/// # Minimal Implementation
///
/// ```rust
/// # use aetheric_screens::prelude::*;
/// struct Title;
///
/// impl Screen for Title {
///     fn update(&mut self, _dt: f32, _ctx: &mut ScreenContext<'_>) {}
///
///     fn draw(&mut self, _dt: f32, ctx: &mut DrawContext<'_>) {
///         let alpha = ctx.transition_alpha();
///         ctx.renderer().clear(Color::DARK_BLUE * alpha);
///     }
/// }
/// ```
pub trait Screen: Send {
    /// Called once, before `load_content`.
    fn initialize(&mut self, _ctx: &mut LoadContext<'_>) {}

    /// Acquires screen-owned rendering resources.
    fn load_content(&mut self, _ctx: &mut LoadContext<'_>) {}

    /// Releases whatever `load_content` actually acquired.
    ///
    /// Must be safe when nothing was acquired.
    fn unload_content(&mut self, _ctx: &mut LoadContext<'_>) {}

    /// Per-frame logic. Navigation requests go through `ctx`.
    fn update(&mut self, dt: f32, ctx: &mut ScreenContext<'_>);

    /// Renders the screen, blending with `ctx.transition_alpha()`.
    ///
    /// Popups draw only their own content; the manager dims the frame.
    fn draw(&mut self, dt: f32, ctx: &mut DrawContext<'_>);

    /// Popups composite over the screens beneath them.
    fn is_popup(&self) -> bool {
        false
    }

    /// Whether `update` keeps being called during `TransitionOff`.
    ///
    /// Screens returning `true` (the default) that must not react to input
    /// while leaving should check [`ScreenContext::is_leaving`].
    fn update_while_leaving(&self) -> bool {
        true
    }

    /// Name used in log output.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

//=== LoadContext =========================================================

/// Services available while a screen loads or unloads content.
pub struct LoadContext<'a> {
    renderer: &'a mut dyn Renderer,
    content: &'a ContentManager,
}

impl<'a> LoadContext<'a> {
    pub(crate) fn new(renderer: &'a mut dyn Renderer, content: &'a ContentManager) -> Self {
        Self { renderer, content }
    }

    pub fn renderer(&mut self) -> &mut dyn Renderer {
        &mut *self.renderer
    }

    pub fn content(&self) -> &ContentManager {
        self.content
    }

    pub fn viewport_size(&self) -> (u32, u32) {
        self.renderer.viewport_size()
    }
}

//=== ScreenContext =======================================================

/// What a screen sees during its `update`.
///
/// Navigation calls never touch the live screen sequence directly: new
/// screens are loaded right after the current update returns and enter
/// the sequence at the next `ScreenManager::update`.
pub struct ScreenContext<'a> {
    id: ScreenId,
    state: TransitionState,
    transition_alpha: f32,
    covered_by_popup: bool,
    viewport: (u32, u32),
    input: &'a InputSnapshot,
    commands: &'a mut ScreenCommands,
}

impl<'a> ScreenContext<'a> {
    //--- Screen State -----------------------------------------------------

    /// Id of the screen being updated.
    pub fn id(&self) -> ScreenId {
        self.id
    }

    pub fn state(&self) -> TransitionState {
        self.state
    }

    /// Returns `true` while this screen is animating off.
    pub fn is_leaving(&self) -> bool {
        self.state == TransitionState::TransitionOff
    }

    pub fn transition_alpha(&self) -> f32 {
        self.transition_alpha
    }

    /// Returns `true` if an active popup sits above this screen.
    pub fn is_covered_by_popup(&self) -> bool {
        self.covered_by_popup
    }

    pub fn viewport_size(&self) -> (u32, u32) {
        self.viewport
    }

    /// Device state for this frame.
    pub fn input(&self) -> &InputSnapshot {
        self.input
    }

    //--- Navigation -------------------------------------------------------

    /// Requests a new screen. It becomes visible at the next update.
    pub fn add_screen<T>(&mut self, screen: T, transition: Option<ScreenTransition>) -> ScreenId
    where
        T: Screen + 'static,
    {
        let id = self.commands.allocate_id();
        self.commands.push(ScreenCommand::Add {
            id,
            screen: Box::new(screen),
            transition,
        });
        id
    }

    /// Requests removal of a screen; unknown ids are ignored.
    pub fn remove_screen(&mut self, id: ScreenId) {
        self.commands.push(ScreenCommand::Remove(id));
    }

    /// Requests removal of the screen being updated.
    pub fn remove_self(&mut self) {
        let id = self.id;
        self.remove_screen(id);
    }

    /// Requests removal of every screen, this one included.
    pub fn remove_all_screens(&mut self) {
        self.commands.push(ScreenCommand::RemoveAll);
    }

    /// Replaces every screen with `screen`.
    pub fn transition_to<T>(&mut self, screen: T, transition: Option<ScreenTransition>) -> ScreenId
    where
        T: Screen + 'static,
    {
        let id = self.commands.allocate_id();
        self.commands.push(ScreenCommand::TransitionTo {
            id,
            screen: Box::new(screen),
            transition,
        });
        id
    }

    /// Requests a change of a screen's active flag.
    pub fn set_active(&mut self, id: ScreenId, active: bool) {
        self.commands.push(ScreenCommand::SetActive(id, active));
    }
}

//=== DrawContext =========================================================

/// What a screen sees during its `draw`.
pub struct DrawContext<'a> {
    id: ScreenId,
    state: TransitionState,
    transition_alpha: f32,
    renderer: &'a mut dyn Renderer,
}

impl<'a> DrawContext<'a> {
    pub fn id(&self) -> ScreenId {
        self.id
    }

    pub fn state(&self) -> TransitionState {
        self.state
    }

    /// Alpha to blend this screen's output with; 1.0 without a transition.
    pub fn transition_alpha(&self) -> f32 {
        self.transition_alpha
    }

    pub fn renderer(&mut self) -> &mut dyn Renderer {
        &mut *self.renderer
    }

    pub fn viewport_size(&self) -> (u32, u32) {
        self.renderer.viewport_size()
    }
}
