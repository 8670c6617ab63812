//=========================================================================
// Pause Screen
//=========================================================================

//=== Internal Dependencies ===============================================

use super::{Backdrop, MenuScreen};
use crate::core::input::{InputEdges, KeyCode};
use crate::core::render::{Color, Rect};
use crate::core::screen::{DrawContext, LoadContext, Screen, ScreenContext};
use crate::core::transition::ScreenTransition;

//=== PauseScreen =========================================================

/// Pause dialog drawn over the game.
///
/// Escape resumes, Q quits to the menu. Only the dialog panel is drawn;
/// the manager dims everything beneath it.
#[derive(Debug)]
pub struct PauseScreen {
    panel: Backdrop,
    edges: InputEdges,
}

impl PauseScreen {
    const PANEL_WIDTH: f32 = 360.0;
    const PANEL_HEIGHT: f32 = 200.0;
    const BORDER: f32 = 4.0;

    pub fn new() -> Self {
        Self {
            panel: Backdrop::new(Color::DARK_GRAY),
            edges: InputEdges::new(),
        }
    }
}

impl Default for PauseScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for PauseScreen {
    fn load_content(&mut self, ctx: &mut LoadContext<'_>) {
        self.panel.load(ctx);
    }

    fn unload_content(&mut self, ctx: &mut LoadContext<'_>) {
        self.panel.unload(ctx);
    }

    fn update(&mut self, _dt: f32, ctx: &mut ScreenContext<'_>) {
        self.edges.observe(ctx.input());
        if ctx.is_leaving() {
            return;
        }

        if self.edges.is_key_pressed(KeyCode::Escape) {
            ctx.remove_self();
        } else if self.edges.is_key_pressed(KeyCode::KeyQ) {
            ctx.transition_to(
                MenuScreen::new(),
                Some(ScreenTransition::fade(ScreenTransition::DEFAULT_FADE_SECS)),
            );
        }
    }

    fn draw(&mut self, _dt: f32, ctx: &mut DrawContext<'_>) {
        let viewport = Rect::viewport(ctx.viewport_size());
        let border = viewport.centered(Self::PANEL_WIDTH, Self::PANEL_HEIGHT);
        let inner = border.centered(
            Self::PANEL_WIDTH - 2.0 * Self::BORDER,
            Self::PANEL_HEIGHT - 2.0 * Self::BORDER,
        );

        ctx.renderer().begin_batch();
        self.panel.rect(ctx, border, Color::WHITE);
        self.panel.fill_rect(ctx, inner);
        ctx.renderer().end_batch();
    }

    fn is_popup(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        "PauseScreen"
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
