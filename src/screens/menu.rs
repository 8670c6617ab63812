//=========================================================================
// Menu Screen
//=========================================================================

//=== External Dependencies ===============================================

use log::debug;

//=== Internal Dependencies ===============================================

use super::{Backdrop, LoadingScreen, OptionsScreen};
use crate::core::input::{InputEdges, KeyCode};
use crate::core::render::{Color, Rect};
use crate::core::screen::{DrawContext, LoadContext, Screen, ScreenContext};
use crate::core::transition::ScreenTransition;

//=== MenuItem ============================================================

/// Entries of the main menu, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Play,
    Options,
}

impl MenuItem {
    const ALL: [MenuItem; 2] = [MenuItem::Play, MenuItem::Options];

    fn index(self) -> usize {
        match self {
            MenuItem::Play => 0,
            MenuItem::Options => 1,
        }
    }

    fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }
}

//=== MenuScreen ==========================================================

/// Dark blue main menu.
///
/// Up/Down move the selection and Enter confirms. Input is ignored once
/// the menu starts transitioning off, so a second Enter cannot queue a
/// second navigation.
#[derive(Debug)]
pub struct MenuScreen {
    backdrop: Backdrop,
    edges: InputEdges,
    selected: MenuItem,
}

impl MenuScreen {
    const ITEM_WIDTH: f32 = 240.0;
    const ITEM_HEIGHT: f32 = 40.0;
    const ITEM_SPACING: f32 = 16.0;

    pub fn new() -> Self {
        Self {
            backdrop: Backdrop::new(Color::DARK_BLUE),
            edges: InputEdges::new(),
            selected: MenuItem::Play,
        }
    }

    pub fn selected(&self) -> MenuItem {
        self.selected
    }

    fn confirm(&self, ctx: &mut ScreenContext<'_>) {
        debug!("Menu confirmed {:?}", self.selected);
        match self.selected {
            MenuItem::Play => {
                ctx.transition_to(
                    LoadingScreen::new(),
                    Some(ScreenTransition::fade(ScreenTransition::DEFAULT_FADE_SECS)),
                );
            }
            MenuItem::Options => {
                ctx.transition_to(
                    OptionsScreen::new(),
                    Some(ScreenTransition::cross_fade(
                        ScreenTransition::DEFAULT_CROSS_FADE_SECS,
                    )),
                );
            }
        }
    }

    fn item_rect(viewport: Rect, index: usize) -> Rect {
        let count = MenuItem::ALL.len() as f32;
        let total = count * Self::ITEM_HEIGHT + (count - 1.0) * Self::ITEM_SPACING;
        let column = viewport.centered(Self::ITEM_WIDTH, total);
        Rect::new(
            column.x,
            column.y + index as f32 * (Self::ITEM_HEIGHT + Self::ITEM_SPACING),
            Self::ITEM_WIDTH,
            Self::ITEM_HEIGHT,
        )
    }
}

impl Default for MenuScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for MenuScreen {
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

        if self.edges.is_key_pressed(KeyCode::ArrowUp) {
            self.selected = self.selected.previous();
        }
        if self.edges.is_key_pressed(KeyCode::ArrowDown) {
            self.selected = self.selected.next();
        }
        if self.edges.is_key_pressed(KeyCode::Enter) {
            self.confirm(ctx);
        }
    }

    fn draw(&mut self, _dt: f32, ctx: &mut DrawContext<'_>) {
        let viewport = Rect::viewport(ctx.viewport_size());

        ctx.renderer().begin_batch();
        self.backdrop.fill(ctx);
        for item in MenuItem::ALL {
            let color = if item == self.selected {
                Color::WHITE
            } else {
                Color::DARK_GRAY
            };
            self.backdrop
                .rect(ctx, Self::item_rect(viewport, item.index()), color);
        }
        ctx.renderer().end_batch();
    }

    fn name(&self) -> &str {
        "MenuScreen"
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
