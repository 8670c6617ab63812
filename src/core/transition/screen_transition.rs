//=========================================================================
// Screen Transition
//=========================================================================
//
// A position in [0, 1] advanced by elapsed time in a direction.
//
// Position 1 means fully shown, 0 means not shown. Turning on moves the
// position forward towards 1, turning off moves it backward towards 0.
// The variants only differ in how position maps to alpha.
//
//=========================================================================

//=== Transition Direction ================================================

/// Direction in which a transition is moving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionDirection {
    /// Turning on: position moves towards 1.
    Forward,

    /// Turning off: position moves towards 0.
    Backward,
}

impl TransitionDirection {
    fn sign(self) -> f32 {
        match self {
            Self::Forward => 1.0,
            Self::Backward => -1.0,
        }
    }

    /// Position reached when the animation in this direction finishes.
    fn boundary(self) -> f32 {
        match self {
            Self::Forward => 1.0,
            Self::Backward => 0.0,
        }
    }
}

//=== Transition Kind =====================================================

/// Alpha curve of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionKind {
    /// Plain fade of the screen itself.
    Fade,

    /// Same curve as [`Fade`](Self::Fade); outgoing and incoming screens
    /// blend directly into each other with no opaque stage in between.
    CrossFade,

    /// Fade through black: exposes a second channel,
    /// [`ScreenTransition::black_overlay_alpha`].
    FadeToBlack,

    /// No animation, always fully opaque.
    Instant,
}

//=== Screen Transition ===================================================

/// Timed animation state driving a screen's visibility.
///
/// # Example
///
/// ```
/// use aetheric_screens::core::transition::ScreenTransition;
///
/// let mut fade = ScreenTransition::fade(0.5);
/// fade.start(true);
/// fade.update(0.25);
/// assert!((fade.alpha() - 0.5).abs() < 1e-6);
///
/// fade.update(0.25);
/// assert!(fade.is_complete());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenTransition {
    kind: TransitionKind,
    duration: f32,
    position: f32,
    direction: TransitionDirection,
}

impl ScreenTransition {
    /// Default duration of [`fade`](Self::fade), in seconds.
    pub const DEFAULT_FADE_SECS: f32 = 0.5;

    /// Default duration of [`cross_fade`](Self::cross_fade), in seconds.
    pub const DEFAULT_CROSS_FADE_SECS: f32 = 0.75;

    /// Default duration of [`fade_to_black`](Self::fade_to_black), in seconds.
    pub const DEFAULT_FADE_TO_BLACK_SECS: f32 = 1.0;

    //--- Construction -----------------------------------------------------

    /// Creates a transition of the given kind, not yet started.
    ///
    /// [`TransitionKind::Instant`] ignores `duration` and always uses 0.
    pub fn new(kind: TransitionKind, duration: f32) -> Self {
        let duration = match kind {
            TransitionKind::Instant => 0.0,
            _ => duration,
        };

        Self {
            kind,
            duration,
            position: 0.0,
            direction: TransitionDirection::Forward,
        }
    }

    pub fn fade(duration: f32) -> Self {
        Self::new(TransitionKind::Fade, duration)
    }

    pub fn cross_fade(duration: f32) -> Self {
        Self::new(TransitionKind::CrossFade, duration)
    }

    pub fn fade_to_black(duration: f32) -> Self {
        Self::new(TransitionKind::FadeToBlack, duration)
    }

    pub fn instant() -> Self {
        Self::new(TransitionKind::Instant, 0.0)
    }

    //--- Accessors --------------------------------------------------------

    pub fn kind(&self) -> TransitionKind {
        self.kind
    }

    /// Duration in seconds.
    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Current position, always within `[0, 1]`.
    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn direction(&self) -> TransitionDirection {
        self.direction
    }

    /// Returns `true` once a forward transition has reached 1.
    pub fn is_complete(&self) -> bool {
        self.direction == TransitionDirection::Forward && self.position >= 1.0
    }

    //--- Control ----------------------------------------------------------

    /// Starts the transition turning on (`true`) or off (`false`).
    ///
    /// A transition that is strictly mid-way keeps its position and only
    /// flips direction, so an in-flight animation reverses smoothly.
    /// Otherwise the position restarts from the opposite boundary.
    /// Zero-length transitions jump straight to their target boundary.
    pub fn start(&mut self, turning_on: bool) {
        self.direction = if turning_on {
            TransitionDirection::Forward
        } else {
            TransitionDirection::Backward
        };

        if !self.has_duration() {
            self.position = self.direction.boundary();
            return;
        }

        if self.position > 0.0 && self.position < 1.0 {
            return;
        }

        self.position = if turning_on { 0.0 } else { 1.0 };
    }

    /// Advances the position by `elapsed` seconds.
    pub fn update(&mut self, elapsed: f32) {
        if self.is_saturated() || elapsed.is_nan() {
            return;
        }

        if !self.has_duration() {
            self.position = self.direction.boundary();
            return;
        }

        let delta = elapsed / self.duration * self.direction.sign();
        self.position = (self.position + delta).clamp(0.0, 1.0);
    }

    //--- Curves -----------------------------------------------------------

    /// Screen alpha for the current position and direction.
    pub fn alpha(&self) -> f32 {
        match self.kind {
            TransitionKind::Instant => 1.0,
            TransitionKind::Fade | TransitionKind::CrossFade | TransitionKind::FadeToBlack => {
                match self.direction {
                    TransitionDirection::Forward => self.position,
                    TransitionDirection::Backward => 1.0 - self.position,
                }
            }
        }
    }

    /// Alpha of the full-frame black overlay, for `FadeToBlack` only.
    ///
    /// Turning on, the overlay fades out as the screen fades in; turning
    /// off, it fades back in.
    pub fn black_overlay_alpha(&self) -> Option<f32> {
        match self.kind {
            TransitionKind::FadeToBlack => Some(match self.direction {
                TransitionDirection::Forward => 1.0 - self.position,
                TransitionDirection::Backward => self.position,
            }),
            _ => None,
        }
    }

    /// Scale factor for zoom-style transitions; 1.0 for every current kind.
    pub fn scale(&self) -> f32 {
        1.0
    }

    //--- Internal Helpers -------------------------------------------------

    // NaN and negative durations count as zero-length.
    fn has_duration(&self) -> bool {
        self.duration > 0.0
    }

    fn is_saturated(&self) -> bool {
        match self.direction {
            TransitionDirection::Forward => self.position >= 1.0,
            TransitionDirection::Backward => self.position <= 0.0,
        }
    }
}

impl Default for ScreenTransition {
    fn default() -> Self {
        Self::fade(Self::DEFAULT_FADE_SECS)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
