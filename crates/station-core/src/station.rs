//! Session aggregate.
//!
//! `Station` owns every state machine plus the platform outputs, routes host
//! events to the right component, and pushes effective volumes to the
//! outputs after each mutation. Hosts call into it from event listeners and
//! re-render from its accessors afterwards.

use crate::ambient::{AmbientOutput, AmbientSoundManager};
use crate::calibration::{CoordinateCalibrationTool, CopyRequest, PointerSample};
use crate::catalog::Catalog;
use crate::error::StationError;
use crate::idle::IdleVisibilityController;
use crate::mixer::{displayed_music_volume, MixLevels};
use crate::modal::ModalKind;
use crate::playback::{AudioOutput, Direction, PlayTicket, PlaybackEngine};
use crate::scale::{DesignPoint, ScaleTransform};
use crate::session::{PersistenceProvider, SessionState};
use crate::settings::{AppSettings, SettingsStore};
use crate::state::{Scene, Track};
use instant::Instant;

/// Actions reachable from the keyboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortcut {
    TogglePlay,
    ToggleMute,
    ToggleDevMode,
    ToggleCalibration,
    ExportScene,
    ClearHistory,
    CloseModals,
}

impl Shortcut {
    /// Escape works regardless of settings and open modals.
    #[inline]
    fn always_enabled(self) -> bool {
        matches!(self, Shortcut::CloseModals)
    }

    #[inline]
    fn needs_dev_mode(self) -> bool {
        matches!(
            self,
            Shortcut::ToggleCalibration | Shortcut::ExportScene | Shortcut::ClearHistory
        )
    }
}

/// What a shortcut did. `Ignored` tells the host to leave the key event alone.
#[derive(Clone, Debug, PartialEq)]
pub enum ShortcutEffect {
    Ignored,
    Handled,
    Copy(CopyRequest),
}

pub struct Station {
    engine: PlaybackEngine,
    ambient: AmbientSoundManager,
    mix: MixLevels,
    idle: IdleVisibilityController,
    calibration: CoordinateCalibrationTool,
    settings: SettingsStore,
    session: SessionState,
    transform: ScaleTransform,
    loaded: bool,
    audio: Box<dyn AudioOutput>,
    ambience: Box<dyn AmbientOutput>,
    storage: Box<dyn PersistenceProvider>,
}

impl Station {
    /// Reads the visited flag once; a first visit opens the welcome modal.
    pub fn new(
        audio: Box<dyn AudioOutput>,
        ambience: Box<dyn AmbientOutput>,
        storage: Box<dyn PersistenceProvider>,
        seed: u64,
    ) -> Self {
        let settings = SettingsStore::new(AppSettings::default());
        let session = SessionState::load(storage.as_ref());
        let mut idle = IdleVisibilityController::new(settings.get());
        if session.is_first_visit() {
            idle.open_modal(ModalKind::Welcome);
        }
        let mut station = Self {
            engine: PlaybackEngine::new(),
            ambient: AmbientSoundManager::new(),
            mix: MixLevels::default(),
            idle,
            calibration: CoordinateCalibrationTool::new(seed),
            settings,
            session,
            transform: ScaleTransform::default(),
            loaded: false,
            audio,
            ambience,
            storage,
        };
        station.sync_audio();
        station
    }

    /// Install the fetched catalog and start the idle countdown.
    pub fn load_catalog(&mut self, catalog: Catalog, now: Instant) {
        self.engine
            .set_catalog(catalog.tracks, catalog.scenes, self.audio.as_mut());
        let scene = self.engine.current_scene().clone();
        self.ambient.on_scene_change(&scene);
        self.loaded = true;
        self.idle.start(now);
        self.sync_audio();
    }

    // ---- transport ----

    pub fn toggle_play(&mut self) {
        self.engine.toggle_play(self.audio.as_mut());
    }

    pub fn change_track(&mut self, direction: Direction) {
        self.engine.change_track(direction, self.audio.as_mut());
    }

    pub fn on_track_ended(&mut self) {
        self.engine.on_track_ended(self.audio.as_mut());
    }

    pub fn on_time_update(&mut self, current_time: f64, duration: f64) -> bool {
        self.engine.on_time_update(current_time, duration)
    }

    pub fn on_play_settled(&mut self, ticket: PlayTicket, result: Result<(), StationError>) -> bool {
        self.engine.on_play_settled(ticket, result)
    }

    // ---- scenes ----

    pub fn select_scene(&mut self, index: usize) -> bool {
        let changed = self.engine.select_scene(index);
        if changed {
            self.enter_current_scene();
        }
        changed
    }

    pub fn change_scene(&mut self, direction: Direction) -> bool {
        let changed = self.engine.change_scene(direction);
        if changed {
            self.enter_current_scene();
        }
        changed
    }

    pub fn toggle_day_mode(&mut self) {
        self.engine.toggle_day_mode();
    }

    // ---- mixing ----

    pub fn toggle_ambience(&mut self, id: &str) -> bool {
        let changed = self
            .ambient
            .toggle_ambience(id, self.calibration.is_collecting());
        if changed {
            self.sync_audio();
        }
        changed
    }

    pub fn set_ambient_volume(&mut self, id: &str, value: f32) {
        self.ambient.set_volume(id, value);
        self.sync_audio();
    }

    pub fn set_master_volume(&mut self, value: f32) {
        self.mix.set_master(value);
        self.sync_audio();
    }

    pub fn set_music_volume(&mut self, value: f32) {
        self.mix.set_music(value);
        self.sync_audio();
    }

    pub fn toggle_mute(&mut self) {
        self.mix.toggle_mute();
        log::info!("[keys] master -> {}", self.mix.master);
        self.sync_audio();
    }

    // ---- pointer, viewport and timers ----

    /// Any movement wakes the controls; in capture mode it also tracks the
    /// design-space position under the pointer.
    pub fn on_pointer_move(&mut self, sample: PointerSample, now: Instant) -> Option<DesignPoint> {
        self.idle.on_pointer_move(now);
        self.calibration.record_pointer(sample, &self.transform)
    }

    pub fn on_stage_click(&mut self, sample: PointerSample, timestamp_ms: u64) -> Option<CopyRequest> {
        self.calibration
            .capture_click(sample, &self.transform, timestamp_ms)
    }

    pub fn on_copy_settled(
        &mut self,
        request: &CopyRequest,
        result: Result<(), StationError>,
        now: Instant,
    ) {
        self.calibration.complete_copy(request, result, now);
    }

    pub fn on_resize(&mut self, viewport_width: f64, viewport_height: f64) -> ScaleTransform {
        self.transform = ScaleTransform::fit(viewport_width, viewport_height);
        self.transform
    }

    pub fn on_idle_timer(&mut self, generation: u64) -> bool {
        self.idle.on_timer_fired(generation)
    }

    /// Deadline polling for hosts without one-shot timers. Returns true when
    /// anything visible changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let hidden = self.idle.tick(now);
        let expired = self.calibration.tick(now);
        hidden || expired
    }

    // ---- modals and settings ----

    pub fn open_modal(&mut self, kind: ModalKind) -> bool {
        self.idle.open_modal(kind)
    }

    pub fn close_modal(&mut self, kind: ModalKind, now: Instant) -> bool {
        let closed = self.idle.close_modal(kind, now);
        if closed {
            match kind {
                ModalKind::Welcome => {
                    self.session.mark_visited(self.storage.as_mut());
                }
                ModalKind::Developer if self.calibration.is_dev_mode() => {
                    let scene = self.engine.current_scene().clone();
                    self.calibration.toggle_dev_mode(&scene);
                }
                _ => {}
            }
        }
        closed
    }

    pub fn close_all_modals(&mut self, now: Instant) -> bool {
        let open: Vec<ModalKind> = self.idle.modals().iter().collect();
        let mut any = false;
        for kind in open {
            any |= self.close_modal(kind, now);
        }
        any
    }

    pub fn update_settings(&mut self, edit: impl FnOnce(&mut AppSettings), now: Instant) -> bool {
        let changed = self.settings.update(edit);
        if changed {
            self.idle.apply_settings(self.settings.get(), now);
        }
        changed
    }

    pub fn set_hide_time_input(&mut self, input: &str, now: Instant) -> bool {
        let changed = self.settings.set_hide_time_input(input);
        if changed {
            self.idle.apply_settings(self.settings.get(), now);
        }
        changed
    }

    // ---- developer tools ----

    /// The developer panel is tracked as a modal so it holds the controls
    /// on screen while it is open.
    pub fn toggle_dev_mode(&mut self, now: Instant) -> bool {
        let scene = self.engine.current_scene().clone();
        let on = self.calibration.toggle_dev_mode(&scene);
        if on {
            self.idle.open_modal(ModalKind::Developer);
        } else {
            self.idle.close_modal(ModalKind::Developer, now);
        }
        on
    }

    pub fn toggle_calibration(&mut self) -> bool {
        self.calibration.toggle_collecting()
    }

    pub fn export_scene(&self) -> CopyRequest {
        self.calibration.export_scene(self.engine.current_scene())
    }

    pub fn copy_record(&self, id: &str) -> Option<CopyRequest> {
        self.calibration.copy_record(id)
    }

    pub fn remove_record(&mut self, id: &str) -> bool {
        self.calibration.remove_record(id)
    }

    pub fn clear_history(&mut self, confirm: impl FnOnce(usize) -> bool) -> bool {
        self.calibration.clear_history(confirm)
    }

    /// Dispatch a keyboard shortcut. Gated by the shortcuts setting and by
    /// open dialogs (the scene menu and developer panel do not count); Escape
    /// is never gated.
    pub fn handle_shortcut(
        &mut self,
        shortcut: Shortcut,
        now: Instant,
        confirm: impl FnOnce(usize) -> bool,
    ) -> ShortcutEffect {
        if !shortcut.always_enabled() && !self.shortcuts_live() {
            log::debug!("[keys] {shortcut:?} blocked");
            return ShortcutEffect::Ignored;
        }
        if shortcut.needs_dev_mode() && !self.calibration.is_dev_mode() {
            return ShortcutEffect::Ignored;
        }
        log::debug!("[keys] {shortcut:?}");
        match shortcut {
            Shortcut::TogglePlay => self.toggle_play(),
            Shortcut::ToggleMute => self.toggle_mute(),
            Shortcut::ToggleDevMode => {
                self.toggle_dev_mode(now);
            }
            Shortcut::ToggleCalibration => {
                self.toggle_calibration();
            }
            Shortcut::ExportScene => return ShortcutEffect::Copy(self.export_scene()),
            Shortcut::ClearHistory => {
                self.clear_history(confirm);
            }
            Shortcut::CloseModals => {
                if !self.close_all_modals(now) {
                    return ShortcutEffect::Ignored;
                }
            }
        }
        ShortcutEffect::Handled
    }

    pub fn shortcuts_live(&self) -> bool {
        self.settings.get().shortcuts && !self.idle.modals().blocks_shortcuts()
    }

    // ---- accessors ----

    pub fn engine(&self) -> &PlaybackEngine {
        &self.engine
    }

    pub fn ambient(&self) -> &AmbientSoundManager {
        &self.ambient
    }

    pub fn idle(&self) -> &IdleVisibilityController {
        &self.idle
    }

    pub fn calibration(&self) -> &CoordinateCalibrationTool {
        &self.calibration
    }

    pub fn settings(&self) -> &AppSettings {
        self.settings.get()
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn mix(&self) -> MixLevels {
        self.mix
    }

    pub fn transform(&self) -> ScaleTransform {
        self.transform
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn current_track(&self) -> &Track {
        self.engine.current_track()
    }

    pub fn current_scene(&self) -> &Scene {
        self.engine.current_scene()
    }

    /// Level for the control bar's music indicator.
    pub fn displayed_music_volume(&self) -> f32 {
        displayed_music_volume(self.mix.music, self.mix.master)
    }

    fn enter_current_scene(&mut self) {
        let scene = self.engine.current_scene().clone();
        self.ambient.on_scene_change(&scene);
        self.sync_audio();
    }

    fn sync_audio(&mut self) {
        self.audio.set_volume(self.mix.effective_music());
        let layers = self.ambient.layers(self.mix.master);
        self.ambience.sync_layers(&layers);
    }
}
