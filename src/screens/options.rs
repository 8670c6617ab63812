//=========================================================================
// Options Screen
//=========================================================================

//=== External Dependencies ===============================================

use log::debug;

//=== Internal Dependencies ===============================================

use super::{Backdrop, MenuScreen};
use crate::core::input::{InputEdges, KeyCode};
use crate::core::render::{Color, Rect};
use crate::core::screen::{DrawContext, LoadContext, Screen, ScreenContext};
use crate::core::transition::ScreenTransition;

//=== OptionsScreen =======================================================

/// Dark gray settings page with a volume slider.
///
/// Left/Right adjust the volume, Escape returns to the menu.
#[derive(Debug)]
pub struct OptionsScreen {
    backdrop: Backdrop,
    edges: InputEdges,
    volume: u8,
}

impl OptionsScreen {
    pub const MAX_VOLUME: u8 = 10;
    pub const DEFAULT_VOLUME: u8 = 7;

    const SLIDER_WIDTH: f32 = 300.0;
    const SLIDER_HEIGHT: f32 = 24.0;

    pub fn new() -> Self {
        Self {
            backdrop: Backdrop::new(Color::DARK_GRAY),
            edges: InputEdges::new(),
            volume: Self::DEFAULT_VOLUME,
        }
    }

    /// Volume in steps from 0 to [`MAX_VOLUME`](Self::MAX_VOLUME).
    pub fn volume(&self) -> u8 {
        self.volume
    }
}

impl Default for OptionsScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for OptionsScreen {
    fn load_content(&mut self, ctx: &mut LoadContext<'_>) {
        self.backdrop.load(ctx);
    }

    fn unload_content(&mut self, ctx: &mut LoadContext<'_>) {
        self.backdrop.unload(ctx);
    }

    fn update(&mut self, _dt: f32, ctx: &mut ScreenContext<'_>) {
        self.edges.observe(ctx.input());
        if ctx.is_leaving() {
            return;
        }

        if self.edges.is_key_pressed(KeyCode::ArrowLeft) {
            self.volume = self.volume.saturating_sub(1);
            debug!("Volume set to {}", self.volume);
        }
        if self.edges.is_key_pressed(KeyCode::ArrowRight) {
            self.volume = (self.volume + 1).min(Self::MAX_VOLUME);
            debug!("Volume set to {}", self.volume);
        }
        if self.edges.is_key_pressed(KeyCode::Escape) {
            ctx.transition_to(
                MenuScreen::new(),
                Some(ScreenTransition::cross_fade(
                    ScreenTransition::DEFAULT_CROSS_FADE_SECS,
                )),
            );
        }
    }

    fn draw(&mut self, _dt: f32, ctx: &mut DrawContext<'_>) {
        let track = Rect::viewport(ctx.viewport_size())
            .centered(Self::SLIDER_WIDTH, Self::SLIDER_HEIGHT);
        let share = f32::from(self.volume) / f32::from(Self::MAX_VOLUME);
        let level = Rect::new(track.x, track.y, track.width * share, track.height);

        ctx.renderer().begin_batch();
        self.backdrop.fill(ctx);
        self.backdrop.rect(ctx, track, Color::BLACK);
        self.backdrop.rect(ctx, level, Color::WHITE);
        ctx.renderer().end_batch();
    }

    fn name(&self) -> &str {
        "OptionsScreen"
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
