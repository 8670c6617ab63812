//=========================================================================
// Game Screen
//=========================================================================

//=== Internal Dependencies ===============================================

use super::{Backdrop, PauseScreen};
use crate::core::input::{InputEdges, KeyCode};
use crate::core::render::Color;
use crate::core::screen::{DrawContext, LoadContext, Screen, ScreenContext};
use crate::core::transition::ScreenTransition;

//=== GameScreen ==========================================================

/// Cornflower blue gameplay placeholder; Escape opens the pause popup.
///
/// Game time only advances while nothing covers the screen.
#[derive(Debug)]
pub struct GameScreen {
    backdrop: Backdrop,
    edges: InputEdges,
    play_time: f32,
}

impl GameScreen {
    pub const PAUSE_FADE_SECS: f32 = 0.25;

    pub fn new() -> Self {
        Self {
            backdrop: Backdrop::new(Color::CORNFLOWER_BLUE),
            edges: InputEdges::new(),
            play_time: 0.0,
        }
    }

    /// Seconds of unpaused play.
    pub fn play_time(&self) -> f32 {
        self.play_time
    }
}

impl Default for GameScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for GameScreen {
    fn load_content(&mut self, ctx: &mut LoadContext<'_>) {
        self.backdrop.load(ctx);
    }

    fn unload_content(&mut self, ctx: &mut LoadContext<'_>) {
        self.backdrop.unload(ctx);
    }

    fn update(&mut self, dt: f32, ctx: &mut ScreenContext<'_>) {
        // Observed even while paused so keys used by the popup do not
        // register here once it closes.
        self.edges.observe(ctx.input());
        if ctx.is_leaving() || ctx.is_covered_by_popup() {
            return;
        }

        self.play_time += dt;

        if self.edges.is_key_pressed(KeyCode::Escape) {
            ctx.add_screen(
                PauseScreen::new(),
                Some(ScreenTransition::fade(Self::PAUSE_FADE_SECS)),
            );
        }
    }

    fn draw(&mut self, _dt: f32, ctx: &mut DrawContext<'_>) {
        ctx.renderer().begin_batch();
        self.backdrop.fill(ctx);
        ctx.renderer().end_batch();
    }

    fn name(&self) -> &str {
        "GameScreen"
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
