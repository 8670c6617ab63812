//=========================================================================
// Screen Manager
//=========================================================================
//
// Owns the ordered screen sequence and drives every screen's lifecycle.
//
// Architecture:
//   screens  (live, index 0 = back)  ◄── flush ──  to_add
//                                     ──  flush ──► to_remove (ids)
//
// Frame lifecycle:
//   update(dt): flush → for each live screen (top to bottom):
//                 advance transition → reconcile state → Screen::update
//                 → apply that screen's queued commands
//   draw(dt):   Screen::draw back-to-front → overlay batch
//
// The live sequence only changes shape inside flush(). Everything else
// (including requests from screen callbacks) writes to the pending
// buffers or flips per-entry state in place.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, info, trace};

//=== Internal Dependencies ===============================================

use super::{
    DrawContext, LoadContext, ManagerConfig, Screen, ScreenCommand, ScreenCommands, ScreenContext,
    ScreenId,
};
use crate::core::content::ContentManager;
use crate::core::input::InputSnapshot;
use crate::core::render::{Color, Rect, Renderer, TextureHandle};
use crate::core::transition::{ScreenTransition, TransitionState};

//=== ScreenEntry =========================================================

/// A screen plus the bookkeeping the manager keeps for it.
struct ScreenEntry {
    id: ScreenId,
    screen: Box<dyn Screen>,
    transition: Option<ScreenTransition>,
    state: TransitionState,
    active: bool,
}

impl ScreenEntry {
    fn transition_alpha(&self) -> f32 {
        self.transition.as_ref().map_or(1.0, ScreenTransition::alpha)
    }

    fn is_drawn(&self) -> bool {
        match self.state {
            TransitionState::Hidden => false,
            TransitionState::TransitionOff => true,
            TransitionState::TransitionOn | TransitionState::Active => self.active,
        }
    }

    /// Popups dim the frame for as long as they are drawn, leaving included.
    fn is_visible_popup(&self) -> bool {
        self.screen.is_popup() && self.is_drawn()
    }

    /// Black overlay opacity while a fade-to-black transition is running.
    fn black_overlay_alpha(&self) -> Option<f32> {
        if !self.state.is_transitioning() {
            return None;
        }
        self.transition
            .as_ref()
            .and_then(ScreenTransition::black_overlay_alpha)
            .filter(|alpha| *alpha > 0.0)
    }
}

//=== ScreenManager =======================================================

/// Sequences screens, their transitions and the overlays between them.
///
/// Screens are drawn in insertion order (later screens on top) and
/// updated top to bottom.
///
/// # Example
///
/// ```rust
/// # use aetheric_screens::prelude::*;
/// # struct Title;
/// # impl Screen for Title {
/// #     fn update(&mut self, _dt: f32, _ctx: &mut ScreenContext<'_>) {}
/// #     fn draw(&mut self, _dt: f32, _ctx: &mut DrawContext<'_>) {}
/// # }
/// let mut manager = ScreenManager::new(RecordingRenderer::default(), ContentManager::default());
/// let title = manager.add_screen(Title, Some(ScreenTransition::fade(0.5)));
///
/// manager.update(0.5);
/// manager.draw(0.5);
/// assert_eq!(manager.state(title), Some(TransitionState::Active));
/// ```
pub struct ScreenManager<R: Renderer> {
    //--- Services ---------------------------------------------------------
    renderer: R,
    content: ContentManager,
    input: InputSnapshot,
    overlay_texture: TextureHandle,
    config: ManagerConfig,

    //--- Screen Sequence --------------------------------------------------
    screens: Vec<ScreenEntry>,
    to_add: Vec<ScreenEntry>,
    to_remove: Vec<ScreenId>,
    commands: ScreenCommands,
}

impl<R: Renderer> ScreenManager<R> {
    //--- Construction -----------------------------------------------------

    /// Creates an empty manager with the default configuration.
    pub fn new(renderer: R, content: ContentManager) -> Self {
        Self::with_config(renderer, content, ManagerConfig::default())
    }

    /// Creates an empty manager.
    ///
    /// Acquires the 1×1 white texture used for full-frame overlays.
    pub fn with_config(mut renderer: R, content: ContentManager, config: ManagerConfig) -> Self {
        let overlay_texture = renderer.create_texture(1, 1, &[Color::WHITE]);
        debug!("Screen manager created (content root {:?})", content.root());

        Self {
            renderer,
            content,
            input: InputSnapshot::new(),
            overlay_texture,
            config,
            screens: Vec::new(),
            to_add: Vec::new(),
            to_remove: Vec::new(),
            commands: ScreenCommands::new(),
        }
    }

    //--- Navigation -------------------------------------------------------

    /// Initializes and loads `screen`, then queues it for the live sequence.
    ///
    /// The screen starts in `TransitionOn` when a transition is supplied
    /// and in `Active` otherwise. It is first updated and drawn after the
    /// next [`update`](Self::update).
    pub fn add_screen<T>(&mut self, screen: T, transition: Option<ScreenTransition>) -> ScreenId
    where
        T: Screen + 'static,
    {
        let id = self.commands.allocate_id();
        self.register(id, Box::new(screen), transition);
        id
    }

    /// Starts removing a screen.
    ///
    /// Screens with a transition animate off and are unloaded when it
    /// finishes; others are unloaded immediately. A screen that has not
    /// reached the live sequence yet is unloaded and dropped at once.
    /// Repeated calls and unknown ids are no-ops.
    pub fn remove_screen(&mut self, id: ScreenId) {
        if self.to_remove.contains(&id) {
            return;
        }

        if let Some(index) = self.to_add.iter().position(|entry| entry.id == id) {
            let mut entry = self.to_add.remove(index);
            debug!("Cancelled pending screen {} ({})", id, entry.screen.name());
            entry.state = TransitionState::Hidden;
            let mut ctx = LoadContext::new(&mut self.renderer, &self.content);
            entry.screen.unload_content(&mut ctx);
            return;
        }

        let Some(entry) = self.screens.iter_mut().find(|entry| entry.id == id) else {
            debug!("Ignoring removal of unknown screen {}", id);
            return;
        };

        match entry.state {
            TransitionState::TransitionOff | TransitionState::Hidden => {}
            TransitionState::TransitionOn | TransitionState::Active => match entry.transition.as_mut() {
                Some(transition) => {
                    transition.start(false);
                    entry.state = TransitionState::TransitionOff;
                    debug!(
                        "Screen {} ({}) -> TransitionOff",
                        id,
                        entry.screen.name()
                    );
                }
                None => hide(entry, &mut self.renderer, &self.content, &mut self.to_remove),
            },
        }
    }

    /// Removes every live and pending screen without waiting for any
    /// transition to finish.
    pub fn remove_all_screens(&mut self) {
        let ids: Vec<ScreenId> = self
            .screens
            .iter()
            .chain(self.to_add.iter())
            .map(|entry| entry.id)
            .collect();

        debug!("Removing all screens ({})", ids.len());
        for id in ids {
            self.remove_screen(id);
        }
    }

    /// Removes every screen and adds `screen`.
    ///
    /// The outgoing transitions and the incoming one run side by side.
    pub fn transition_to<T>(&mut self, screen: T, transition: Option<ScreenTransition>) -> ScreenId
    where
        T: Screen + 'static,
    {
        self.remove_all_screens();
        self.add_screen(screen, transition)
    }

    /// Enables or disables update and draw calls for a screen.
    ///
    /// Transitions keep advancing while a screen is inactive.
    pub fn set_active(&mut self, id: ScreenId, active: bool) {
        match self.entry_mut(id) {
            Some(entry) => {
                entry.active = active;
                debug!("Screen {} active = {}", id, active);
            }
            None => debug!("Ignoring set_active on unknown screen {}", id),
        }
    }

    //--- Frame Loop -------------------------------------------------------

    /// Flushes pending changes, advances transitions and updates screens.
    ///
    /// `dt` is elapsed time in seconds and is used as given.
    pub fn update(&mut self, dt: f32) {
        self.flush();

        let popup = self.topmost_popup();
        for index in (0..self.screens.len()).rev() {
            self.update_entry(index, dt, popup);
            self.apply_commands();
        }
    }

    /// Draws visible screens back-to-front, then the overlay pass.
    ///
    /// The overlay pass dims the frame while a popup is visible and adds a
    /// black layer for every running fade-to-black transition.
    pub fn draw(&mut self, dt: f32) {
        let has_popup = self.topmost_popup().is_some();

        for entry in self.screens.iter_mut().filter(|entry| entry.is_drawn()) {
            let mut ctx = DrawContext {
                id: entry.id,
                state: entry.state,
                transition_alpha: entry.transition_alpha(),
                renderer: &mut self.renderer,
            };
            entry.screen.draw(dt, &mut ctx);
        }

        let fades: Vec<f32> = self
            .screens
            .iter()
            .filter_map(ScreenEntry::black_overlay_alpha)
            .collect();

        if !has_popup && fades.is_empty() {
            return;
        }

        let dest = Rect::viewport(self.renderer.viewport_size());
        self.renderer.begin_batch();
        if has_popup {
            let tint = Color::BLACK * self.config.effective_dim_alpha();
            self.renderer.draw_rect(self.overlay_texture, dest, tint);
        }
        for alpha in fades {
            self.renderer
                .draw_rect(self.overlay_texture, dest, Color::BLACK * alpha);
        }
        self.renderer.end_batch();
    }

    //--- Queries ----------------------------------------------------------

    /// Current phase of a live or pending screen.
    pub fn state(&self, id: ScreenId) -> Option<TransitionState> {
        self.entry(id).map(|entry| entry.state)
    }

    pub fn transition(&self, id: ScreenId) -> Option<&ScreenTransition> {
        self.entry(id).and_then(|entry| entry.transition.as_ref())
    }

    /// Alpha a screen is drawn with; 1.0 for screens without a transition.
    pub fn transition_alpha(&self, id: ScreenId) -> Option<f32> {
        self.entry(id).map(ScreenEntry::transition_alpha)
    }

    pub fn screen_name(&self, id: ScreenId) -> Option<&str> {
        self.entry(id).map(|entry| entry.screen.name())
    }

    pub fn is_active(&self, id: ScreenId) -> bool {
        self.entry(id).is_some_and(|entry| entry.active)
    }

    /// Returns `true` if the screen is live or waiting to become live.
    pub fn contains(&self, id: ScreenId) -> bool {
        self.entry(id).is_some()
    }

    /// Number of screens in the live sequence, including hidden ones not
    /// yet delisted.
    pub fn len(&self) -> usize {
        self.screens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.screens.is_empty()
    }

    /// Screens loaded but not yet flushed into the live sequence.
    pub fn pending_len(&self) -> usize {
        self.to_add.len()
    }

    /// Live screen ids, back to front.
    pub fn screen_ids(&self) -> impl Iterator<Item = ScreenId> + '_ {
        self.screens.iter().map(|entry| entry.id)
    }

    //--- Services ---------------------------------------------------------

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn content(&self) -> &ContentManager {
        &self.content
    }

    /// Input state screens see during `update`.
    pub fn input(&self) -> &InputSnapshot {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut InputSnapshot {
        &mut self.input
    }

    pub fn config(&self) -> &ManagerConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut ManagerConfig {
        &mut self.config
    }

    /// Forwards a new viewport size to the renderer.
    pub fn resize(&mut self, width: u32, height: u32) {
        debug!("Viewport resized to {}x{}", width, height);
        self.renderer.set_viewport_size(width, height);
    }

    //--- Internal Helpers -------------------------------------------------

    fn register(
        &mut self,
        id: ScreenId,
        mut screen: Box<dyn Screen>,
        mut transition: Option<ScreenTransition>,
    ) {
        let mut ctx = LoadContext::new(&mut self.renderer, &self.content);
        screen.initialize(&mut ctx);
        screen.load_content(&mut ctx);

        let state = match transition.as_mut() {
            Some(transition) => {
                transition.start(true);
                TransitionState::TransitionOn
            }
            None => TransitionState::Active,
        };

        debug!("Added screen {} ({}) in {:?}", id, screen.name(), state);
        self.to_add.push(ScreenEntry {
            id,
            screen,
            transition,
            state,
            active: true,
        });
    }

    fn flush(&mut self) {
        if !self.to_remove.is_empty() {
            let removed = std::mem::take(&mut self.to_remove);
            trace!("Delisting {} screen(s)", removed.len());
            self.screens.retain(|entry| !removed.contains(&entry.id));
        }

        if !self.to_add.is_empty() {
            trace!("Listing {} screen(s)", self.to_add.len());
            self.screens.append(&mut self.to_add);
        }
    }

    fn update_entry(&mut self, index: usize, dt: f32, popup: Option<usize>) {
        let viewport = self.renderer.viewport_size();
        let entry = &mut self.screens[index];

        if entry.state == TransitionState::Hidden {
            return;
        }

        if let Some(transition) = entry.transition.as_mut() {
            transition.update(dt);
        }

        match entry.state {
            TransitionState::TransitionOn
                if entry.transition.as_ref().map_or(true, ScreenTransition::is_complete) =>
            {
                entry.state = TransitionState::Active;
                debug!("Screen {} ({}) -> Active", entry.id, entry.screen.name());
            }
            TransitionState::TransitionOff
                if entry.transition.as_ref().map_or(true, |t| t.position() <= 0.0) =>
            {
                hide(entry, &mut self.renderer, &self.content, &mut self.to_remove);
                return;
            }
            _ => {}
        }

        if !entry.active {
            return;
        }
        if entry.state == TransitionState::TransitionOff && !entry.screen.update_while_leaving() {
            return;
        }

        let mut ctx = ScreenContext {
            id: entry.id,
            state: entry.state,
            transition_alpha: entry.transition_alpha(),
            covered_by_popup: popup.is_some_and(|top| top > index),
            viewport,
            input: &self.input,
            commands: &mut self.commands,
        };
        entry.screen.update(dt, &mut ctx);
    }

    fn apply_commands(&mut self) {
        if self.commands.is_empty() {
            return;
        }

        for command in self.commands.take() {
            trace!("Applying {:?}", command);
            match command {
                ScreenCommand::Add {
                    id,
                    screen,
                    transition,
                } => self.register(id, screen, transition),
                ScreenCommand::Remove(id) => self.remove_screen(id),
                ScreenCommand::RemoveAll => self.remove_all_screens(),
                ScreenCommand::TransitionTo {
                    id,
                    screen,
                    transition,
                } => {
                    self.remove_all_screens();
                    self.register(id, screen, transition);
                }
                ScreenCommand::SetActive(id, active) => self.set_active(id, active),
            }
        }
    }

    fn topmost_popup(&self) -> Option<usize> {
        self.screens.iter().rposition(ScreenEntry::is_visible_popup)
    }

    fn entry(&self, id: ScreenId) -> Option<&ScreenEntry> {
        self.screens
            .iter()
            .chain(self.to_add.iter())
            .find(|entry| entry.id == id)
    }

    fn entry_mut(&mut self, id: ScreenId) -> Option<&mut ScreenEntry> {
        self.screens
            .iter_mut()
            .chain(self.to_add.iter_mut())
            .find(|entry| entry.id == id)
    }
}

//=== Drop ================================================================

impl<R: Renderer> Drop for ScreenManager<R> {
    fn drop(&mut self) {
        let mut unloaded = 0;
        for entry in self.screens.iter_mut().chain(self.to_add.iter_mut()) {
            if entry.state != TransitionState::Hidden {
                entry.state = TransitionState::Hidden;
                let mut ctx = LoadContext::new(&mut self.renderer, &self.content);
                entry.screen.unload_content(&mut ctx);
                unloaded += 1;
            }
        }
        self.renderer.release_texture(self.overlay_texture);
        info!("Screen manager shut down ({} screen(s) unloaded)", unloaded);
    }
}

//=== Helpers =============================================================

/// Moves a screen to `Hidden`: unloads it and queues it for delisting.
///
/// Takes the manager's fields separately so it can run while the entry
/// itself is borrowed from the screen sequence.
fn hide(
    entry: &mut ScreenEntry,
    renderer: &mut dyn Renderer,
    content: &ContentManager,
    to_remove: &mut Vec<ScreenId>,
) {
    entry.state = TransitionState::Hidden;
    let mut ctx = LoadContext::new(renderer, content);
    entry.screen.unload_content(&mut ctx);
    to_remove.push(entry.id);
    debug!("Screen {} ({}) -> Hidden", entry.id, entry.screen.name());
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::core::render::{DrawCommand, RecordingRenderer};
    use crate::core::transition::TransitionDirection;

    //--- Traced Screen -----------------------------------------------------

    type Log = Arc<Mutex<Vec<String>>>;
    type UpdateHook = Box<dyn FnMut(&mut ScreenContext<'_>) + Send>;

    struct Traced {
        label: &'static str,
        log: Log,
        popup: bool,
        update_while_leaving: bool,
        texture: Option<TextureHandle>,
        on_update: Option<UpdateHook>,
    }

    impl Traced {
        fn new(label: &'static str, log: &Log) -> Self {
            Self {
                label,
                log: Arc::clone(log),
                popup: false,
                update_while_leaving: true,
                texture: None,
                on_update: None,
            }
        }

        fn popup(mut self) -> Self {
            self.popup = true;
            self
        }

        fn frozen_while_leaving(mut self) -> Self {
            self.update_while_leaving = false;
            self
        }

        fn on_update(mut self, hook: impl FnMut(&mut ScreenContext<'_>) + Send + 'static) -> Self {
            self.on_update = Some(Box::new(hook));
            self
        }

        fn record(&self, event: &str) {
            self.log.lock().unwrap().push(format!("{}:{}", self.label, event));
        }
    }

    impl Screen for Traced {
        fn initialize(&mut self, _ctx: &mut LoadContext<'_>) {
            self.record("init");
        }

        fn load_content(&mut self, ctx: &mut LoadContext<'_>) {
            self.texture = Some(ctx.renderer().create_texture(1, 1, &[Color::WHITE]));
            self.record("load");
        }

        fn unload_content(&mut self, ctx: &mut LoadContext<'_>) {
            if let Some(texture) = self.texture.take() {
                ctx.renderer().release_texture(texture);
            }
            self.record("unload");
        }

        fn update(&mut self, _dt: f32, ctx: &mut ScreenContext<'_>) {
            self.record("update");
            if let Some(hook) = self.on_update.as_mut() {
                hook(ctx);
            }
        }

        fn draw(&mut self, _dt: f32, ctx: &mut DrawContext<'_>) {
            self.record("draw");
            if let Some(texture) = self.texture {
                let dest = Rect::viewport(ctx.viewport_size());
                let tint = Color::WHITE * ctx.transition_alpha();
                ctx.renderer().draw_rect(texture, dest, tint);
            }
        }

        fn is_popup(&self) -> bool {
            self.popup
        }

        fn update_while_leaving(&self) -> bool {
            self.update_while_leaving
        }

        fn name(&self) -> &str {
            self.label
        }
    }

    //--- Helpers ----------------------------------------------------------

    fn manager() -> ScreenManager<RecordingRenderer> {
        ScreenManager::new(RecordingRenderer::new(800, 600), ContentManager::default())
    }

    fn new_log() -> Log {
        Arc::new(Mutex::new(Vec::new()))
    }

    fn count(log: &Log, event: &str) -> usize {
        log.lock().unwrap().iter().filter(|e| *e == event).count()
    }

    fn clear(log: &Log) {
        log.lock().unwrap().clear();
    }

    fn overlay_rects(commands: &[DrawCommand], overlay: TextureHandle) -> Vec<Color> {
        commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::DrawRect { texture, tint, .. } if *texture == overlay => Some(*tint),
                _ => None,
            })
            .collect()
    }

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    //--- Registration -----------------------------------------------------

    #[test]
    fn add_loads_synchronously_and_lists_on_update() {
        let log = new_log();
        let mut manager = manager();

        let a = manager.add_screen(Traced::new("A", &log), None);
        assert_eq!(*log.lock().unwrap(), vec!["A:init", "A:load"]);
        assert_eq!(manager.len(), 0);
        assert_eq!(manager.pending_len(), 1);
        assert_eq!(manager.state(a), Some(TransitionState::Active));

        manager.update(0.016);
        assert_eq!(manager.screen_ids().collect::<Vec<_>>(), vec![a]);
        assert_eq!(manager.state(a), Some(TransitionState::Active));
        assert_eq!(count(&log, "A:update"), 1);
    }

    #[test]
    fn add_with_transition_starts_transition_on() {
        let log = new_log();
        let mut manager = manager();

        let a = manager.add_screen(Traced::new("A", &log), Some(ScreenTransition::fade(0.5)));
        assert_eq!(manager.state(a), Some(TransitionState::TransitionOn));
        assert_eq!(
            manager.transition(a).map(ScreenTransition::direction),
            Some(TransitionDirection::Forward)
        );
    }

    #[test]
    fn fade_in_reaches_half_then_active() {
        let log = new_log();
        let mut manager = manager();
        let a = manager.add_screen(Traced::new("A", &log), Some(ScreenTransition::fade(0.5)));

        manager.update(0.25);
        assert!(approx(manager.transition_alpha(a).unwrap(), 0.5));
        assert_eq!(manager.state(a), Some(TransitionState::TransitionOn));

        manager.update(0.25);
        assert_eq!(manager.state(a), Some(TransitionState::Active));
        assert!(manager.transition(a).unwrap().is_complete());
    }

    #[test]
    fn instant_transition_is_active_after_one_update() {
        let log = new_log();
        let mut manager = manager();
        let a = manager.add_screen(Traced::new("A", &log), Some(ScreenTransition::instant()));

        manager.update(0.0);
        assert_eq!(manager.state(a), Some(TransitionState::Active));
        assert!(manager.transition(a).unwrap().is_complete());
        assert_eq!(manager.transition_alpha(a), Some(1.0));
    }

    //--- Deferred Mutation ------------------------------------------------

    #[test]
    fn screen_added_during_update_waits_for_next_update() {
        let log = new_log();
        let mut manager = manager();

        let inner = Arc::clone(&log);
        let mut added = false;
        let a = manager.add_screen(
            Traced::new("A", &log).on_update(move |ctx| {
                if !added {
                    added = true;
                    ctx.add_screen(Traced::new("B", &inner), None);
                }
            }),
            None,
        );

        manager.update(0.016);
        assert_eq!(count(&log, "B:load"), 1);
        assert_eq!(count(&log, "B:update"), 0);
        assert_eq!(manager.screen_ids().collect::<Vec<_>>(), vec![a]);
        assert_eq!(manager.pending_len(), 1);

        manager.update(0.016);
        assert_eq!(manager.len(), 2);
        assert_eq!(count(&log, "B:update"), 1);
    }

    #[test]
    fn screens_update_top_to_bottom() {
        let log = new_log();
        let mut manager = manager();
        manager.add_screen(Traced::new("A", &log), None);
        manager.add_screen(Traced::new("B", &log), None);
        manager.update(0.016);
        clear(&log);

        manager.update(0.016);
        assert_eq!(*log.lock().unwrap(), vec!["B:update", "A:update"]);
    }

    #[test]
    fn screen_removing_itself_is_hidden_within_the_pass() {
        let log = new_log();
        let mut manager = manager();
        let a = manager.add_screen(Traced::new("A", &log).on_update(|ctx| ctx.remove_self()), None);

        manager.update(0.016);
        assert_eq!(manager.state(a), Some(TransitionState::Hidden));
        assert_eq!(count(&log, "A:unload"), 1);
        assert_eq!(manager.len(), 1);

        manager.update(0.016);
        assert!(!manager.contains(a));
        assert_eq!(count(&log, "A:update"), 1);
        assert_eq!(count(&log, "A:unload"), 1);
    }

    #[test]
    fn screen_below_removed_mid_pass_is_not_updated() {
        let log = new_log();
        let mut manager = manager();
        let a = manager.add_screen(Traced::new("A", &log), None);
        manager.add_screen(Traced::new("B", &log).on_update(move |ctx| ctx.remove_screen(a)), None);

        manager.update(0.016);
        assert_eq!(count(&log, "A:update"), 0);
        assert_eq!(manager.state(a), Some(TransitionState::Hidden));
    }

    //--- Removal ----------------------------------------------------------

    #[test]
    fn remove_without_transition_unloads_immediately() {
        let log = new_log();
        let mut manager = manager();
        let a = manager.add_screen(Traced::new("A", &log), None);
        manager.update(0.016);

        manager.remove_screen(a);
        assert_eq!(manager.state(a), Some(TransitionState::Hidden));
        assert_eq!(count(&log, "A:unload"), 1);

        manager.update(0.016);
        assert!(manager.is_empty());
    }

    #[test]
    fn remove_is_idempotent() {
        let log = new_log();
        let mut manager = manager();
        let a = manager.add_screen(Traced::new("A", &log), Some(ScreenTransition::fade(0.5)));
        manager.update(0.5);

        manager.remove_screen(a);
        manager.remove_screen(a);
        assert_eq!(manager.state(a), Some(TransitionState::TransitionOff));
        assert_eq!(manager.transition(a).unwrap().position(), 1.0);

        manager.update(0.5);
        manager.remove_screen(a);
        manager.update(0.016);
        manager.remove_screen(a);

        assert!(!manager.contains(a));
        assert_eq!(count(&log, "A:unload"), 1);
    }

    #[test]
    fn remove_unknown_id_is_noop() {
        let log = new_log();
        let mut manager = manager();
        let a = manager.add_screen(Traced::new("A", &log), None);
        manager.update(0.016);

        manager.remove_screen(ScreenId(999));
        assert_eq!(manager.state(a), Some(TransitionState::Active));
        assert_eq!(count(&log, "A:unload"), 0);
    }

    #[test]
    fn removing_pending_screen_cancels_it() {
        let log = new_log();
        let mut manager = manager();
        let a = manager.add_screen(Traced::new("A", &log), Some(ScreenTransition::fade(0.5)));

        manager.remove_screen(a);
        assert_eq!(count(&log, "A:unload"), 1);
        assert!(!manager.contains(a));

        manager.update(0.016);
        assert!(manager.is_empty());
        assert_eq!(count(&log, "A:update"), 0);
    }

    #[test]
    fn removal_mid_fade_in_reverses_from_current_position() {
        let log = new_log();
        let mut manager = manager();
        let a = manager.add_screen(Traced::new("A", &log), Some(ScreenTransition::fade(1.0)));
        manager.update(0.25);

        manager.remove_screen(a);
        let transition = manager.transition(a).unwrap();
        assert_eq!(transition.direction(), TransitionDirection::Backward);
        assert!(approx(transition.position(), 0.25));

        manager.update(0.25);
        assert_eq!(manager.state(a), Some(TransitionState::Hidden));
        assert_eq!(count(&log, "A:unload"), 1);
    }

    #[test]
    fn remove_all_covers_live_and_pending() {
        let log = new_log();
        let mut manager = manager();
        let a = manager.add_screen(Traced::new("A", &log), Some(ScreenTransition::fade(0.5)));
        manager.update(0.5);
        let b = manager.add_screen(Traced::new("B", &log), None);

        manager.remove_all_screens();
        assert_eq!(manager.state(a), Some(TransitionState::TransitionOff));
        assert!(!manager.contains(b));
        assert_eq!(count(&log, "B:unload"), 1);
    }

    //--- Navigation -------------------------------------------------------

    #[test]
    fn transition_to_runs_outgoing_and_incoming_together() {
        let log = new_log();
        let mut manager = manager();
        let a = manager.add_screen(Traced::new("A", &log), Some(ScreenTransition::fade(0.5)));
        manager.update(0.5);
        assert_eq!(manager.state(a), Some(TransitionState::Active));

        let b = manager.transition_to(Traced::new("B", &log), Some(ScreenTransition::fade(0.5)));
        assert_eq!(manager.state(a), Some(TransitionState::TransitionOff));
        assert_eq!(manager.state(b), Some(TransitionState::TransitionOn));

        manager.update(0.25);
        assert!(approx(manager.transition_alpha(b).unwrap(), 0.5));
        assert_eq!(manager.state(a), Some(TransitionState::TransitionOff));

        manager.update(0.25);
        assert_eq!(manager.state(b), Some(TransitionState::Active));
        assert_eq!(manager.state(a), Some(TransitionState::Hidden));
        assert_eq!(count(&log, "A:unload"), 1);

        manager.update(0.016);
        assert_eq!(manager.screen_ids().collect::<Vec<_>>(), vec![b]);
    }

    #[test]
    fn transition_to_from_inside_update() {
        let log = new_log();
        let mut manager = manager();

        let inner = Arc::clone(&log);
        let mut requested = false;
        let a = manager.add_screen(
            Traced::new("A", &log).on_update(move |ctx| {
                if !requested {
                    requested = true;
                    ctx.transition_to(Traced::new("B", &inner), None);
                }
            }),
            None,
        );

        manager.update(0.016);
        assert_eq!(manager.state(a), Some(TransitionState::Hidden));
        assert_eq!(manager.len(), 1);

        manager.update(0.016);
        assert_eq!(manager.len(), 1);
        assert!(!manager.contains(a));
        assert_eq!(count(&log, "B:update"), 1);
    }

    #[test]
    fn inactive_screen_is_neither_updated_nor_drawn() {
        let log = new_log();
        let mut manager = manager();
        let a = manager.add_screen(Traced::new("A", &log), None);
        manager.set_active(a, false);

        manager.update(0.016);
        manager.draw(0.016);
        assert!(!manager.is_active(a));
        assert_eq!(count(&log, "A:update"), 0);
        assert_eq!(count(&log, "A:draw"), 0);

        manager.set_active(a, true);
        manager.update(0.016);
        assert_eq!(count(&log, "A:update"), 1);
    }

    //--- Leaving Screens --------------------------------------------------

    #[test]
    fn leaving_screen_is_updated_and_drawn_by_default() {
        let log = new_log();
        let mut manager = manager();
        let a = manager.add_screen(Traced::new("A", &log), Some(ScreenTransition::fade(1.0)));
        manager.update(1.0);
        manager.remove_screen(a);
        clear(&log);

        manager.update(0.5);
        manager.draw(0.5);
        assert_eq!(count(&log, "A:update"), 1);
        assert_eq!(count(&log, "A:draw"), 1);
    }

    #[test]
    fn leaving_screen_can_opt_out_of_updates() {
        let log = new_log();
        let mut manager = manager();
        let a = manager.add_screen(
            Traced::new("A", &log).frozen_while_leaving(),
            Some(ScreenTransition::fade(1.0)),
        );
        manager.update(1.0);
        manager.remove_screen(a);
        clear(&log);

        manager.update(0.5);
        manager.draw(0.5);
        assert_eq!(count(&log, "A:update"), 0);
        assert_eq!(count(&log, "A:draw"), 1);
    }

    //--- Drawing ----------------------------------------------------------

    #[test]
    fn empty_manager_draws_nothing() {
        let mut manager = manager();
        manager.update(0.016);
        manager.draw(0.016);
        assert!(manager.renderer().commands().is_empty());
    }

    #[test]
    fn popup_is_drawn_over_screen_then_dimmed() {
        let log = new_log();
        let mut manager = manager();
        manager.add_screen(Traced::new("A", &log), None);
        manager.add_screen(Traced::new("P", &log).popup(), None);
        manager.update(0.016);
        clear(&log);

        manager.draw(0.016);
        assert_eq!(*log.lock().unwrap(), vec!["A:draw", "P:draw"]);

        let overlay = manager.overlay_texture;
        let commands = manager.renderer_mut().take_commands();
        assert_eq!(commands.len(), 5);
        assert!(matches!(commands[0], DrawCommand::DrawRect { .. }));
        assert!(matches!(commands[1], DrawCommand::DrawRect { .. }));
        assert_eq!(commands[2], DrawCommand::BeginBatch);
        assert_eq!(
            commands[3],
            DrawCommand::DrawRect {
                texture: overlay,
                dest: Rect::new(0.0, 0.0, 800.0, 600.0),
                tint: Color::rgba(0.0, 0.0, 0.0, 0.5),
            }
        );
        assert_eq!(commands[4], DrawCommand::EndBatch);
    }

    #[test]
    fn dim_stays_while_popup_leaves_and_ends_when_hidden() {
        let log = new_log();
        let mut manager = manager();
        manager.add_screen(Traced::new("A", &log), None);
        let p = manager.add_screen(Traced::new("P", &log).popup(), Some(ScreenTransition::fade(0.5)));
        let overlay = manager.overlay_texture;
        let dim = Color::BLACK * 0.5;

        manager.update(0.5);
        manager.remove_screen(p);
        manager.update(0.25);
        assert_eq!(manager.state(p), Some(TransitionState::TransitionOff));
        manager.draw(0.25);
        assert_eq!(overlay_rects(&manager.renderer_mut().take_commands(), overlay), vec![dim]);

        manager.update(0.25);
        assert_eq!(manager.state(p), Some(TransitionState::Hidden));
        manager.draw(0.25);
        assert!(overlay_rects(&manager.renderer_mut().take_commands(), overlay).is_empty());
    }

    #[test]
    fn inactive_popup_does_not_dim() {
        let log = new_log();
        let mut manager = manager();
        manager.add_screen(Traced::new("A", &log), None);
        let p = manager.add_screen(Traced::new("P", &log).popup(), None);
        manager.set_active(p, false);
        manager.update(0.016);

        let overlay = manager.overlay_texture;
        manager.draw(0.016);
        assert!(overlay_rects(&manager.renderer_mut().take_commands(), overlay).is_empty());
    }

    #[test]
    fn underlying_screen_knows_it_is_covered() {
        let log = new_log();
        let mut manager = manager();

        let inner = Arc::clone(&log);
        manager.add_screen(
            Traced::new("A", &log).on_update(move |ctx| {
                let covered = ctx.is_covered_by_popup();
                inner.lock().unwrap().push(format!("covered={}", covered));
            }),
            None,
        );
        manager.update(0.016);
        assert_eq!(count(&log, "covered=false"), 1);

        let p = manager.add_screen(Traced::new("P", &log).popup(), None);
        manager.update(0.016);
        assert_eq!(count(&log, "covered=true"), 1);

        manager.remove_screen(p);
        manager.update(0.016);
        assert_eq!(count(&log, "covered=false"), 2);
    }

    #[test]
    fn fade_to_black_draws_black_overlay_until_complete() {
        let log = new_log();
        let mut manager = manager();
        let a = manager.add_screen(
            Traced::new("A", &log),
            Some(ScreenTransition::fade_to_black(1.0)),
        );
        let overlay = manager.overlay_texture;

        manager.update(0.0);
        manager.draw(0.0);
        let tints = overlay_rects(&manager.renderer_mut().take_commands(), overlay);
        assert_eq!(tints, vec![Color::BLACK]);

        manager.update(0.5);
        manager.draw(0.5);
        let tints = overlay_rects(&manager.renderer_mut().take_commands(), overlay);
        assert_eq!(tints.len(), 1);
        assert!(approx(tints[0].a, 0.5));

        manager.update(0.5);
        manager.draw(0.5);
        assert_eq!(manager.state(a), Some(TransitionState::Active));
        let commands = manager.renderer_mut().take_commands();
        assert!(overlay_rects(&commands, overlay).is_empty());
        assert!(!commands.contains(&DrawCommand::BeginBatch));
    }

    #[test]
    fn fade_to_black_overlay_returns_while_leaving() {
        let log = new_log();
        let mut manager = manager();
        let a = manager.add_screen(
            Traced::new("A", &log),
            Some(ScreenTransition::fade_to_black(1.0)),
        );
        manager.update(1.0);
        manager.remove_screen(a);
        let overlay = manager.overlay_texture;

        manager.update(0.25);
        manager.renderer_mut().take_commands();
        manager.draw(0.25);
        let tints = overlay_rects(&manager.renderer_mut().take_commands(), overlay);
        assert_eq!(tints.len(), 1);
        assert!(approx(tints[0].a, 0.75));
    }

    //--- Resources --------------------------------------------------------

    #[test]
    fn textures_balance_across_navigation() {
        let log = new_log();
        let mut manager = manager();
        manager.add_screen(Traced::new("A", &log), Some(ScreenTransition::fade(0.5)));
        manager.add_screen(Traced::new("B", &log).popup(), None);
        manager.update(0.5);
        assert_eq!(manager.renderer().live_textures(), 3);

        manager.transition_to(Traced::new("C", &log), Some(ScreenTransition::cross_fade(0.75)));
        for _ in 0..10 {
            manager.update(0.1);
        }

        assert_eq!(manager.len(), 1);
        assert_eq!(manager.renderer().live_textures(), 2);
        for label in ["A", "B"] {
            assert_eq!(count(&log, &format!("{}:unload", label)), 1);
        }
    }

    #[test]
    fn drop_unloads_remaining_screens() {
        let log = new_log();
        {
            let mut manager = manager();
            let a = manager.add_screen(Traced::new("A", &log), None);
            manager.add_screen(Traced::new("B", &log), None);
            manager.update(0.016);
            manager.remove_screen(a);
            manager.add_screen(Traced::new("C", &log), None);
        }

        assert_eq!(count(&log, "A:unload"), 1);
        assert_eq!(count(&log, "B:unload"), 1);
        assert_eq!(count(&log, "C:unload"), 1);
    }

    #[test]
    fn resize_reaches_renderer_and_screens() {
        let log = new_log();
        let mut manager = manager();

        let inner = Arc::clone(&log);
        manager.add_screen(
            Traced::new("A", &log).on_update(move |ctx| {
                let (w, h) = ctx.viewport_size();
                inner.lock().unwrap().push(format!("{}x{}", w, h));
            }),
            None,
        );

        manager.resize(1024, 768);
        manager.update(0.016);
        assert_eq!(manager.renderer().viewport_size(), (1024, 768));
        assert_eq!(count(&log, "1024x768"), 1);
    }
}
