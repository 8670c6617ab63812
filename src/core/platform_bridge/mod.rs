//=========================================================================
// Platform Bridge
//=========================================================================
//
// Bridges the platform layer (winit) with the frame thread.
//
// Components:
// - `interface`: event and error types exchanged across the thread boundary
// - `event_collector`: frame-side draining of the platform channel
//
//=========================================================================

//=== Module Declarations =================================================

pub(crate) mod event_collector;
pub(crate) mod interface;

//=== Internal API ========================================================

pub(crate) use event_collector::{EventCollector, TickControl};
pub(crate) use interface::{PlatformError, PlatformEvent};
