//=========================================================================
// Aetheric Screens Engine
//=========================================================================
//
// Host entry point: wires the winit platform to the screen manager.
//
// Architecture:
// ```text
//     EngineBuilder  ──build(renderer)──>  Engine  ──run()──>  [Runtime]
//         │                                  │
//         ├─ with_tps()                      ├─ init(|manager| ..)
//         ├─ with_channel_capacity()         └─ spawns frame thread
//         ├─ with_title() / with_window_size()  runs platform
//         ├─ with_content_root()                blocks until exit
//         └─ with_manager_config()
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use std::path::PathBuf;

use crossbeam_channel::{bounded, Sender};
use log::{error, info};

//=== Internal Dependencies ===============================================

use crate::core::content::ContentManager;
use crate::core::platform_bridge::PlatformEvent;
use crate::core::render::Renderer;
use crate::core::screen::{ManagerConfig, ScreenManager};
use crate::core::FrameLoop;
use crate::platform::{Platform, WindowSettings};

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// # Default Values
///
/// - **TPS**: 60.0 (frames per second on the frame thread)
/// - **Channel capacity**: 128 events
/// - **Window**: "Aetheric Screens", 800×600
/// - **Content root**: `Content`
/// - **Manager config**: [`ManagerConfig::default`]
///
/// # Examples
///
/// ```no_run
/// use aetheric_screens::prelude::*;
///
/// let (frames_tx, frames) = crossbeam_channel::bounded(2);
/// std::thread::spawn(move || for _frame in frames {});
///
/// EngineBuilder::new()
///     .with_tps(120.0)
///     .with_title("Demo")
///     .build(RecordingRenderer::default().with_frame_sink(frames_tx))
///     .init(|manager| {
///         manager.add_screen(SplashScreen::new(), Some(ScreenTransition::fade(0.5)));
///     })
///     .run();
/// ```
#[derive(Debug, Clone)]
pub struct EngineBuilder {
    tps: f64,
    channel_capacity: usize,
    window: WindowSettings,
    content_root: PathBuf,
    manager_config: ManagerConfig,
}

impl EngineBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            tps: 60.0,
            channel_capacity: 128,
            window: WindowSettings {
                title: "Aetheric Screens".to_string(),
                width: 800,
                height: 600,
            },
            content_root: PathBuf::from("Content"),
            manager_config: ManagerConfig::default(),
        }
    }

    /// Sets the target frames per second for the frame thread.
    ///
    /// # Panics
    ///
    /// Panics if `tps <= 0.0`.
    pub fn with_tps(mut self, tps: f64) -> Self {
        assert!(tps > 0.0, "TPS must be positive, got {}", tps);
        self.tps = tps;
        self
    }

    /// Sets the channel capacity for platform → frame thread events.
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.window.title = title.into();
        self
    }

    /// Sets the initial window size in logical pixels.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        assert!(
            width > 0 && height > 0,
            "Window size must be non-zero, got {}x{}",
            width,
            height
        );
        self.window.width = width;
        self.window.height = height;
        self
    }

    /// Sets the directory screens resolve assets against.
    pub fn with_content_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.content_root = root.into();
        self
    }

    pub fn with_manager_config(mut self, config: ManagerConfig) -> Self {
        self.manager_config = config;
        self
    }

    /// Builds the engine around `renderer`.
    ///
    /// The renderer is sized to the configured window until the platform
    /// reports the real surface size.
    pub fn build<R>(self, mut renderer: R) -> Engine<R>
    where
        R: Renderer + 'static,
    {
        info!(
            "Building engine (TPS: {}, channel: {}, window: {}x{})",
            self.tps, self.channel_capacity, self.window.width, self.window.height
        );

        renderer.set_viewport_size(self.window.width, self.window.height);
        let manager = ScreenManager::with_config(
            renderer,
            ContentManager::new(self.content_root),
            self.manager_config,
        );

        let (sender, receiver) = bounded(self.channel_capacity);

        Engine {
            frame_loop: FrameLoop::new(manager, receiver),
            sender,
            tps: self.tps,
            window: self.window,
        }
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// Screen-manager runtime.
///
/// # Architecture
///
/// ```text
/// Engine (Main Thread)
///   ├─► FrameLoop (Frame Thread @ TPS)
///   │     └─► ScreenManager: update → draw
///   │
///   └─► Platform (winit Event Loop)
///         └─► Window, input batching
///
/// Communication: bounded crossbeam channel (PlatformEvent)
/// ```
pub struct Engine<R: Renderer + 'static> {
    frame_loop: FrameLoop<R>,
    sender: Sender<PlatformEvent>,
    tps: f64,
    window: WindowSettings,
}

impl<R: Renderer + 'static> Engine<R> {
    //--- Initialization ---------------------------------------------------

    /// Gives the host access to the screen manager before running,
    /// typically to add the first screen.
    pub fn init<F>(mut self, init_fn: F) -> Self
    where
        F: FnOnce(&mut ScreenManager<R>),
    {
        info!("Initializing screens");
        init_fn(self.frame_loop.manager_mut());
        info!("Screen initialization complete");
        self
    }

    //--- Execution --------------------------------------------------------

    /// Starts the runtime and blocks until the window closes.
    ///
    /// # Lifecycle
    ///
    /// 1. Spawns the frame thread at the configured TPS
    /// 2. Runs the platform event loop on this thread (blocks here)
    /// 3. On window close the frame thread sees `WindowClosed` (or a
    ///    disconnected channel), drops the screen manager and exits
    /// 4. Joins the frame thread
    ///
    /// Platform failures and frame thread panics are logged, not returned.
    pub fn run(self) {
        info!("Starting engine runtime (TPS: {})", self.tps);

        let frame_handle = self.frame_loop.spawn(self.tps);
        info!("Frame thread spawned");

        let platform = Platform::new(self.sender, self.window);
        if let Err(e) = platform.run() {
            error!("Platform error: {}", e);
        }

        info!("Platform event loop exited");

        match frame_handle.join() {
            Ok(()) => info!("Frame thread terminated cleanly"),
            Err(e) => error!("Frame thread panicked: {:?}", e),
        }

        info!("Engine shutdown complete");
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
