//=========================================================================
// Recording Renderer
//=========================================================================
//
// A `Renderer` that stores every call as a `DrawCommand`.
//
// Architecture:
//   Screen::draw() → RecordingRenderer → Vec<DrawCommand>
//                                            ↓ end_frame()
//                               frame sink (host replays) or discarded
//
// Outside a frame loop the buffer is read with `commands()` /
// `take_commands()`.
//
// Texture bookkeeping is real (handles are allocated and released) so
// load/unload discipline can be checked without a GPU.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashSet;

use crossbeam_channel::{Sender, TrySendError};
use log::{debug, trace, warn};

//=== Internal Dependencies ===============================================

use super::{Color, Rect, Renderer, TextureHandle};

//=== DrawCommand =========================================================

/// One recorded renderer call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    BeginBatch,
    EndBatch,
    DrawRect {
        texture: TextureHandle,
        dest: Rect,
        tint: Color,
    },
}

//=== RecordingRenderer ===================================================

/// Headless renderer that records the frame's command stream.
///
/// At the end of every frame the recorded commands go to the frame sink
/// when one is attached and are discarded otherwise, so the buffer only
/// ever holds the frame in progress.
///
/// # Example
///
/// ```rust
/// # use aetheric_screens::prelude::*;
/// let (frames_tx, frames) = crossbeam_channel::bounded(2);
/// let mut renderer = RecordingRenderer::new(640, 480).with_frame_sink(frames_tx);
///
/// renderer.clear(Color::BLACK);
/// renderer.end_frame();
///
/// assert_eq!(frames.try_recv().unwrap().len(), 1);
/// assert!(renderer.commands().is_empty());
/// ```
#[derive(Debug)]
pub struct RecordingRenderer {
    viewport: (u32, u32),
    commands: Vec<DrawCommand>,
    frame_sink: Option<Sender<Vec<DrawCommand>>>,
    live_textures: HashSet<TextureHandle>,
    next_texture: u32,
    batch_open: bool,
}

impl RecordingRenderer {
    //--- Construction -----------------------------------------------------

    pub fn new(width: u32, height: u32) -> Self {
        Self {
            viewport: (width, height),
            commands: Vec::with_capacity(64),
            frame_sink: None,
            live_textures: HashSet::new(),
            next_texture: 1,
            batch_open: false,
        }
    }

    /// Delivers every finished frame to `sink`.
    ///
    /// Frames are dropped with a warning while the sink is full. Once the
    /// receiving side hangs up, frames are discarded.
    pub fn with_frame_sink(mut self, sink: Sender<Vec<DrawCommand>>) -> Self {
        self.frame_sink = Some(sink);
        self
    }

    //--- Inspection -------------------------------------------------------

    /// Commands recorded since the last [`take_commands`](Self::take_commands).
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Returns the recorded commands, leaving the buffer empty.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Number of textures created and not yet released.
    pub fn live_textures(&self) -> usize {
        self.live_textures.len()
    }

    pub fn is_texture_live(&self, texture: TextureHandle) -> bool {
        self.live_textures.contains(&texture)
    }
}

impl Default for RecordingRenderer {
    fn default() -> Self {
        Self::new(800, 600)
    }
}

//--- Renderer Implementation ---------------------------------------------

impl Renderer for RecordingRenderer {
    fn viewport_size(&self) -> (u32, u32) {
        self.viewport
    }

    fn set_viewport_size(&mut self, width: u32, height: u32) {
        self.viewport = (width, height);
    }

    fn clear(&mut self, color: Color) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn begin_batch(&mut self) {
        if self.batch_open {
            warn!("begin_batch called while a batch is already open");
        }
        self.batch_open = true;
        self.commands.push(DrawCommand::BeginBatch);
    }

    fn end_batch(&mut self) {
        if !self.batch_open {
            warn!("end_batch called without a matching begin_batch");
        }
        self.batch_open = false;
        self.commands.push(DrawCommand::EndBatch);
    }

    fn draw_rect(&mut self, texture: TextureHandle, dest: Rect, tint: Color) {
        self.commands.push(DrawCommand::DrawRect { texture, dest, tint });
    }

    fn create_texture(&mut self, width: u32, height: u32, pixels: &[Color]) -> TextureHandle {
        let handle = TextureHandle(self.next_texture);
        self.next_texture += 1;
        self.live_textures.insert(handle);
        trace!(
            "Created texture {:?} ({}x{}, {} pixels)",
            handle,
            width,
            height,
            pixels.len()
        );
        handle
    }

    fn release_texture(&mut self, texture: TextureHandle) {
        if !self.live_textures.remove(&texture) {
            warn!("Release of unknown texture {:?} ignored", texture);
        }
    }

    fn end_frame(&mut self) {
        if self.batch_open {
            warn!("Frame ended with an open batch");
            self.batch_open = false;
        }

        let Some(sink) = self.frame_sink.as_ref() else {
            self.commands.clear();
            return;
        };

        let frame = std::mem::replace(&mut self.commands, Vec::with_capacity(64));
        match sink.try_send(frame) {
            Ok(()) => {}
            Err(TrySendError::Full(frame)) => {
                warn!("Frame sink full, dropped {} command(s)", frame.len());
            }
            Err(TrySendError::Disconnected(_)) => {
                debug!("Frame sink disconnected, recording without delivery");
                self.frame_sink = None;
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
