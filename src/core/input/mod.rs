//=========================================================================
// Input
//=========================================================================
//
// Device state handed to screens each frame.
//
// Architecture:
//   Platform → InputEvent batches → InputSnapshot (owned by ScreenManager)
//                                        ↓
//                   Screen::update() → InputEdges::observe() → pressed?
//
// The manager never decides what counts as a press; each screen diffs
// snapshots itself.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod event;
mod edges;
mod snapshot;

//=== Public API ==========================================================

pub use edges::InputEdges;
pub use event::{InputEvent, KeyCode, Modifiers, MouseButton};
pub use snapshot::InputSnapshot;
