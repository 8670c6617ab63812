//=========================================================================
// Screen Manager Configuration
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::render::Color;

//=== ManagerConfig =======================================================

/// Tunables for [`ScreenManager`](super::ScreenManager) compositing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ManagerConfig {
    /// Opacity of the black rectangle drawn over the frame while a popup
    /// is visible. Clamped to `[0, 1]` when drawn.
    pub popup_dim_alpha: f32,

    /// Color the frame loop clears to before drawing; `None` skips the clear.
    pub clear_color: Option<Color>,
}

impl ManagerConfig {
    pub const DEFAULT_POPUP_DIM_ALPHA: f32 = 0.5;

    /// Sets the popup dim opacity, clamped to `[0, 1]`. NaN disables dimming.
    pub fn with_popup_dim_alpha(mut self, alpha: f32) -> Self {
        self.popup_dim_alpha = clamp_unit(alpha);
        self
    }

    /// `popup_dim_alpha` as actually drawn.
    pub(crate) fn effective_dim_alpha(&self) -> f32 {
        clamp_unit(self.popup_dim_alpha)
    }

    pub fn with_clear_color(mut self, color: Option<Color>) -> Self {
        self.clear_color = color;
        self
    }
}

fn clamp_unit(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            popup_dim_alpha: Self::DEFAULT_POPUP_DIM_ALPHA,
            clear_color: Some(Color::BLACK),
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
