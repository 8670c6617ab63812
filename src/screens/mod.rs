//=========================================================================
// Demo Screens
//=========================================================================
//
// A complete splash → menu → loading → game flow built on the public
// screen API only.
//
// Flow:
//   Splash ──timeout/Enter──► Menu ──Play──► Loading ──► Game
//                              ▲  └─Options─► Options ─Esc─┘
//                              │                    Game ─Esc─► Pause (popup)
//                              └────────────Q────────────────────┘
//
// Every screen owns one 1×1 white texture (acquired in load_content,
// released in unload_content) and tints it for all of its drawing.
//
//=========================================================================

//=== Module Declarations =================================================

mod game;
mod loading;
mod menu;
mod options;
mod pause;
mod splash;

//=== Public API ==========================================================

pub use game::GameScreen;
pub use loading::LoadingScreen;
pub use menu::{MenuItem, MenuScreen};
pub use options::OptionsScreen;
pub use pause::PauseScreen;
pub use splash::SplashScreen;

//=== Internal Dependencies ===============================================

use crate::core::render::{Color, Rect, TextureHandle};
use crate::core::screen::{DrawContext, LoadContext};

//=== Backdrop ============================================================

/// Shared texture plus fill color used by the demo screens.
#[derive(Debug)]
pub(crate) struct Backdrop {
    color: Color,
    texture: Option<TextureHandle>,
}

impl Backdrop {
    pub(crate) fn new(color: Color) -> Self {
        Self {
            color,
            texture: None,
        }
    }

    pub(crate) fn load(&mut self, ctx: &mut LoadContext<'_>) {
        if self.texture.is_none() {
            self.texture = Some(ctx.renderer().create_texture(1, 1, &[Color::WHITE]));
        }
    }

    /// Releases the texture if one was acquired.
    pub(crate) fn unload(&mut self, ctx: &mut LoadContext<'_>) {
        if let Some(texture) = self.texture.take() {
            ctx.renderer().release_texture(texture);
        }
    }

    /// Fills the viewport with the backdrop color at the screen's alpha.
    pub(crate) fn fill(&self, ctx: &mut DrawContext<'_>) {
        let dest = Rect::viewport(ctx.viewport_size());
        self.fill_rect(ctx, dest);
    }

    /// Fills `dest` with the backdrop color.
    pub(crate) fn fill_rect(&self, ctx: &mut DrawContext<'_>, dest: Rect) {
        self.rect(ctx, dest, self.color);
    }

    /// Draws `color` into `dest` at the screen's alpha.
    pub(crate) fn rect(&self, ctx: &mut DrawContext<'_>, dest: Rect, color: Color) {
        if let Some(texture) = self.texture {
            let tint = color * ctx.transition_alpha();
            ctx.renderer().draw_rect(texture, dest, tint);
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use crate::core::input::KeyCode;
    use crate::core::transition::TransitionKind;

    #[test]
    fn full_flow_balances_textures() {
        let mut manager = manager();
        manager.add_screen(SplashScreen::new(), None);
        run_for(&mut manager, SplashScreen::DEFAULT_DURATION + 0.1);
        run_for(&mut manager, 1.0);
        assert_eq!(live_names(&manager), vec!["MenuScreen"]);

        tap(&mut manager, KeyCode::Enter);
        run_for(&mut manager, LoadingScreen::DEFAULT_MIN_DISPLAY + 0.1);
        run_for(&mut manager, 1.5);
        assert_eq!(live_names(&manager), vec!["GameScreen"]);

        tap(&mut manager, KeyCode::Escape);
        run_for(&mut manager, 0.5);
        assert_eq!(live_names(&manager), vec!["GameScreen", "PauseScreen"]);

        tap(&mut manager, KeyCode::KeyQ);
        run_for(&mut manager, 1.5);
        assert_eq!(live_names(&manager), vec!["MenuScreen"]);

        // Overlay texture plus the menu's backdrop.
        assert_eq!(manager.renderer().live_textures(), 2);
    }

    #[test]
    fn loading_hands_over_with_fade_to_black() {
        let mut manager = manager();
        manager.add_screen(LoadingScreen::new(), None);
        run_for(&mut manager, LoadingScreen::DEFAULT_MIN_DISPLAY + 0.1);

        let game = manager.screen_ids().last().unwrap();
        assert_eq!(manager.screen_name(game), Some("GameScreen"));
        assert_eq!(
            manager.transition(game).map(|t| t.kind()),
            Some(TransitionKind::FadeToBlack)
        );
    }
}
