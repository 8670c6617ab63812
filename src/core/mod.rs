//=========================================================================
// Core Frame Loop
//=========================================================================
//
// Drives the screen manager on the frame (non-platform) thread.
//
// Architecture:
//   Platform ──PlatformEvent──► EventCollector
//                                   ↓
//                          InputSnapshot / resize
//                                   ↓
//                 ScreenManager::update(dt) → clear → draw(dt)
//                                   ↓
//                         Renderer::end_frame()
//
// One update and one draw per tick, paced to a fixed tick rate. `dt` is
// the measured wall time since the previous tick and reaches the screen
// manager unclamped.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::Receiver;
use log::info;

//=== Module Declarations =================================================

pub mod content;
pub mod input;
pub mod render;
pub mod screen;
pub mod transition;

pub(crate) mod platform_bridge;

//=== Internal Dependencies ===============================================

use platform_bridge::{EventCollector, PlatformEvent, TickControl};
use render::Renderer;
use screen::ScreenManager;

//=== FrameLoop ===========================================================

/// Owns the screen manager and feeds it platform events each tick.
pub(crate) struct FrameLoop<R: Renderer> {
    manager: ScreenManager<R>,
    collector: EventCollector,
}

impl<R: Renderer> FrameLoop<R> {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new(manager: ScreenManager<R>, receiver: Receiver<PlatformEvent>) -> Self {
        Self {
            manager,
            collector: EventCollector::new(receiver),
        }
    }

    pub(crate) fn manager_mut(&mut self) -> &mut ScreenManager<R> {
        &mut self.manager
    }

    //--- Tick -------------------------------------------------------------

    /// Runs one frame: events, input, resize, update, clear, draw, then
    /// closes the frame on the renderer.
    pub(crate) fn tick(&mut self, dt: f32) -> TickControl {
        if self.collector.collect_frame() == TickControl::Exit {
            return TickControl::Exit;
        }

        for batch in self.collector.batches() {
            self.manager.input_mut().apply_events(batch);
        }

        if let Some((width, height)) = self.collector.take_resize() {
            self.manager.resize(width, height);
        }

        self.manager.update(dt);

        if let Some(color) = self.manager.config().clear_color {
            self.manager.renderer_mut().clear(color);
        }
        self.manager.draw(dt);
        self.manager.renderer_mut().end_frame();

        TickControl::Continue
    }

    //--- Thread -----------------------------------------------------------

    /// Moves the loop onto its own thread, ticking `tps` times per second
    /// until the platform closes or disconnects.
    ///
    /// The screen manager is dropped on that thread, which unloads any
    /// screens still alive.
    pub(crate) fn spawn(self, tps: f64) -> thread::JoinHandle<()>
    where
        R: 'static,
    {
        let frame_duration = Duration::from_secs_f64(1.0 / tps);

        thread::spawn(move || {
            let mut frame_loop = self;
            let mut last_tick = Instant::now();
            info!("Frame thread started ({} TPS)", tps);

            loop {
                let frame_start = Instant::now();
                let dt = frame_start.duration_since(last_tick).as_secs_f32();
                last_tick = frame_start;

                if frame_loop.tick(dt) == TickControl::Exit {
                    info!("Frame thread exiting");
                    break;
                }

                let elapsed = frame_start.elapsed();
                if elapsed < frame_duration {
                    thread::sleep(frame_duration - elapsed);
                }
            }
        })
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
