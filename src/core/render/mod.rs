//=========================================================================
// Rendering Interface
//=========================================================================
//
// The drawing capabilities screens and the screen manager rely on.
//
// The engine does not ship a GPU backend. Hosts implement `Renderer` on
// top of whatever they draw with; `RecordingRenderer` captures the
// command stream instead and hands each finished frame to a channel the
// host replays from.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::ops::Mul;

//=== Module Declarations =================================================

mod recording;

//=== Public API ==========================================================

pub use recording::{DrawCommand, RecordingRenderer};

//=== Color ===============================================================

/// RGBA color with components in `[0, 1]`.
///
/// Multiplying by a scalar scales every channel, which is how screens fade
/// a premultiplied tint: `Color::WHITE * alpha`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const DARK_BLUE: Self = Self::rgb(0.0, 0.0, 0.545);
    pub const DARK_GRAY: Self = Self::rgb(0.663, 0.663, 0.663);
    pub const CORNFLOWER_BLUE: Self = Self::rgb(0.392, 0.584, 0.929);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

impl Mul<f32> for Color {
    type Output = Color;

    fn mul(self, factor: f32) -> Color {
        Color {
            r: self.r * factor,
            g: self.g * factor,
            b: self.b * factor,
            a: self.a * factor,
        }
    }
}

//=== Rect ================================================================

/// Axis-aligned rectangle in viewport pixels (top-left origin).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Rectangle covering a whole `(width, height)` viewport.
    pub fn viewport((width, height): (u32, u32)) -> Self {
        Self::new(0.0, 0.0, width as f32, height as f32)
    }

    /// A `width × height` rectangle centered inside `self`.
    pub fn centered(&self, width: f32, height: f32) -> Self {
        Self::new(
            self.x + (self.width - width) / 2.0,
            self.y + (self.height - height) / 2.0,
            width,
            height,
        )
    }
}

//=== TextureHandle =======================================================

/// Opaque identifier of a texture owned by a [`Renderer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u32);

//=== Renderer Trait ======================================================

/// Rendering backend consumed by screens and the screen manager.
///
/// Draw calls are expected between `begin_batch` and `end_batch`. `clear`
/// is issued outside of a batch.
pub trait Renderer: Send {
    /// Current drawable size in pixels.
    fn viewport_size(&self) -> (u32, u32);

    /// Notifies the backend that the drawable was resized.
    fn set_viewport_size(&mut self, _width: u32, _height: u32) {}

    /// Fills the whole frame with `color`.
    fn clear(&mut self, color: Color);

    fn begin_batch(&mut self);

    fn end_batch(&mut self);

    /// Draws `texture` stretched over `dest`, modulated by `tint`.
    fn draw_rect(&mut self, texture: TextureHandle, dest: Rect, tint: Color);

    /// Uploads a `width × height` texture from row-major pixels.
    fn create_texture(&mut self, width: u32, height: u32, pixels: &[Color]) -> TextureHandle;

    /// Frees a texture; unknown handles are ignored.
    fn release_texture(&mut self, texture: TextureHandle);

    /// Marks the end of a frame. Called once per tick after the last draw.
    fn end_frame(&mut self) {}
}

//=========================================================================
// Unit Tests
//=========================================================================
