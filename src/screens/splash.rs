//=========================================================================
// Splash Screen
//=========================================================================

//=== External Dependencies ===============================================

use log::debug;

//=== Internal Dependencies ===============================================

use super::{Backdrop, MenuScreen};
use crate::core::input::{InputEdges, KeyCode};
use crate::core::render::Color;
use crate::core::screen::{DrawContext, LoadContext, Screen, ScreenContext};
use crate::core::transition::ScreenTransition;

//=== SplashScreen ========================================================

/// White title card that hands over to the menu after a timeout.
///
/// Enter or Space skips the wait.
#[derive(Debug)]
pub struct SplashScreen {
    backdrop: Backdrop,
    edges: InputEdges,
    elapsed: f32,
    duration: f32,
}

impl SplashScreen {
    pub const DEFAULT_DURATION: f32 = 2.0;

    pub fn new() -> Self {
        Self::with_duration(Self::DEFAULT_DURATION)
    }

    /// Splash shown for `duration` seconds before moving on.
    pub fn with_duration(duration: f32) -> Self {
        Self {
            backdrop: Backdrop::new(Color::WHITE),
            edges: InputEdges::new(),
            elapsed: 0.0,
            duration,
        }
    }
}

impl Default for SplashScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for SplashScreen {
    fn load_content(&mut self, ctx: &mut LoadContext<'_>) {
        self.backdrop.load(ctx);
    }

    fn unload_content(&mut self, ctx: &mut LoadContext<'_>) {
        self.backdrop.unload(ctx);
    }

    fn update(&mut self, dt: f32, ctx: &mut ScreenContext<'_>) {
        self.edges.observe(ctx.input());
        if ctx.is_leaving() {
            return;
        }

        self.elapsed += dt;
        let skipped =
            self.edges.is_key_pressed(KeyCode::Enter) || self.edges.is_key_pressed(KeyCode::Space);

        if skipped || self.elapsed >= self.duration {
            debug!("Splash finished after {:.2}s (skipped: {})", self.elapsed, skipped);
            ctx.transition_to(
                MenuScreen::new(),
                Some(ScreenTransition::cross_fade(
                    ScreenTransition::DEFAULT_CROSS_FADE_SECS,
                )),
            );
        }
    }

    fn draw(&mut self, _dt: f32, ctx: &mut DrawContext<'_>) {
        ctx.renderer().begin_batch();
        self.backdrop.fill(ctx);
        ctx.renderer().end_batch();
    }

    fn name(&self) -> &str {
        "SplashScreen"
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
