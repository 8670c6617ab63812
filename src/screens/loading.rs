//=========================================================================
// Loading Screen
//=========================================================================

//=== External Dependencies ===============================================

use log::debug;

//=== Internal Dependencies ===============================================

use super::{Backdrop, GameScreen};
use crate::core::render::{Color, Rect};
use crate::core::screen::{DrawContext, LoadContext, Screen, ScreenContext};
use crate::core::transition::ScreenTransition;

//=== LoadingScreen =======================================================

/// Black interstitial with a progress bar, shown for a minimum time
/// before handing over to the game through a fade to black.
#[derive(Debug)]
pub struct LoadingScreen {
    backdrop: Backdrop,
    elapsed: f32,
    min_display: f32,
}

impl LoadingScreen {
    pub const DEFAULT_MIN_DISPLAY: f32 = 1.0;

    const BAR_WIDTH: f32 = 320.0;
    const BAR_HEIGHT: f32 = 12.0;

    pub fn new() -> Self {
        Self::with_min_display(Self::DEFAULT_MIN_DISPLAY)
    }

    pub fn with_min_display(seconds: f32) -> Self {
        Self {
            backdrop: Backdrop::new(Color::BLACK),
            elapsed: 0.0,
            min_display: seconds,
        }
    }

    /// Share of the minimum display time already elapsed, in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        if self.min_display <= 0.0 {
            return 1.0;
        }
        (self.elapsed / self.min_display).clamp(0.0, 1.0)
    }
}

impl Default for LoadingScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for LoadingScreen {
    fn load_content(&mut self, ctx: &mut LoadContext<'_>) {
        self.backdrop.load(ctx);
    }

    fn unload_content(&mut self, ctx: &mut LoadContext<'_>) {
        self.backdrop.unload(ctx);
    }

    fn update(&mut self, dt: f32, ctx: &mut ScreenContext<'_>) {
        if ctx.is_leaving() {
            return;
        }

        self.elapsed += dt;
        if self.elapsed >= self.min_display {
            debug!("Loading complete after {:.2}s", self.elapsed);
            ctx.transition_to(
                GameScreen::new(),
                Some(ScreenTransition::fade_to_black(
                    ScreenTransition::DEFAULT_FADE_TO_BLACK_SECS,
                )),
            );
        }
    }

    fn draw(&mut self, _dt: f32, ctx: &mut DrawContext<'_>) {
        let track = Rect::viewport(ctx.viewport_size()).centered(Self::BAR_WIDTH, Self::BAR_HEIGHT);
        let fill = Rect::new(track.x, track.y, track.width * self.progress(), track.height);

        ctx.renderer().begin_batch();
        self.backdrop.fill(ctx);
        self.backdrop.rect(ctx, track, Color::DARK_GRAY);
        self.backdrop.rect(ctx, fill, Color::WHITE);
        ctx.renderer().end_batch();
    }

    fn name(&self) -> &str {
        "LoadingScreen"
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
