//=========================================================================
// Aetheric Screens — Library Root
//=========================================================================
//
// A transition-aware screen stack for frame-stepped game loops.
//
// Responsibilities:
// - `core`: transitions, the screen trait and the screen manager, plus the
//   rendering, input and content seams screens are written against
// - `screens`: a ready-made splash → menu → loading → game flow
// - `Engine`: optional winit host driving a `ScreenManager` on its own
//   frame thread
//
// Typical usage:
// ```no_run
// use aetheric_screens::prelude::*;
//
// // Finished frames arrive on `frames` for a backend to replay.
// let (frames_tx, frames) = crossbeam_channel::bounded(2);
// std::thread::spawn(move || for _frame in frames {});
//
// EngineBuilder::new()
//     .build(RecordingRenderer::default().with_frame_sink(frames_tx))
//     .init(|manager| {
//         manager.add_screen(SplashScreen::new(), None);
//     })
//     .run();
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------

pub mod core;
pub mod prelude;
pub mod screens;

//--- Internal Modules ----------------------------------------------------
//
// `platform` owns the window and winit event loop; `engine` wires it to
// the frame thread.
//
mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use engine::{Engine, EngineBuilder};
