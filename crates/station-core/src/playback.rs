use crate::constants::{
    PLACEHOLDER_SCENE_ID, PLACEHOLDER_SCENE_NAME, PLACEHOLDER_THEME_COLOR,
    PLACEHOLDER_TRACK_ARTIST, PLACEHOLDER_TRACK_COVER, PLACEHOLDER_TRACK_TITLE,
};
use crate::error::StationError;
use crate::state::{Scene, Track};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}

impl Direction {
    #[inline]
    fn step(self) -> isize {
        match self {
            Direction::Next => 1,
            Direction::Prev => -1,
        }
    }
}

/// Identifies one `play()` request so its late settlement can be matched
/// against the most recent request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlayTicket(pub u64);

/// The music element the engine drives.
///
/// `play` is asynchronous on every real backend: implementations report the
/// outcome later through `Station::on_play_settled` with the same ticket.
/// `load` must stop the element and rewind it to the start of `url`.
pub trait AudioOutput {
    fn load(&mut self, url: &str);
    fn play(&mut self, ticket: PlayTicket);
    fn pause(&mut self);
    fn set_volume(&mut self, volume: f32);
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlaybackState {
    pub current_track_index: usize,
    pub current_scene_index: usize,
    pub is_playing: bool,
    pub progress: f32,
    pub is_day_mode: bool,
}

/// Transport state machine for the music track plus scene selection.
///
/// `is_playing` is the single authoritative playback intent. The output may
/// lag behind it while a `play()` is in flight; settlements are always
/// checked against the intent at settlement time.
pub struct PlaybackEngine {
    tracks: Vec<Track>,
    scenes: Vec<Scene>,
    state: PlaybackState,
    output_running: bool,
    latest_ticket: Option<PlayTicket>,
    next_ticket: u64,
    placeholder_track: Track,
    placeholder_scene: Scene,
}

impl Default for PlaybackEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaybackEngine {
    pub fn new() -> Self {
        Self {
            tracks: Vec::new(),
            scenes: Vec::new(),
            state: PlaybackState::default(),
            output_running: false,
            latest_ticket: None,
            next_ticket: 0,
            placeholder_track: Track {
                id: None,
                title: PLACEHOLDER_TRACK_TITLE.to_string(),
                artist: PLACEHOLDER_TRACK_ARTIST.to_string(),
                url: String::new(),
                cover: PLACEHOLDER_TRACK_COVER.to_string(),
            },
            placeholder_scene: Scene {
                id: PLACEHOLDER_SCENE_ID.to_string(),
                name: PLACEHOLDER_SCENE_NAME.to_string(),
                bg_day: String::new(),
                bg_night: String::new(),
                theme_color: PLACEHOLDER_THEME_COLOR.to_string(),
                sounds: Vec::new(),
            },
        }
    }

    /// Replace the playlist and scene list. Indices reset to the first
    /// entries and the first track is loaded paused.
    pub fn set_catalog(&mut self, tracks: Vec<Track>, scenes: Vec<Scene>, out: &mut dyn AudioOutput) {
        self.tracks = tracks;
        self.scenes = scenes;
        self.state.current_track_index = 0;
        self.state.current_scene_index = 0;
        self.state.is_playing = false;
        self.state.progress = 0.0;
        self.output_running = false;
        if let Some(track) = self.tracks.first() {
            out.load(&track.url);
        }
        log::info!(
            "[playback] catalog set: tracks={} scenes={}",
            self.tracks.len(),
            self.scenes.len()
        );
    }

    #[inline]
    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.state.is_playing
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn scenes(&self) -> &[Scene] {
        &self.scenes
    }

    pub fn current_track(&self) -> &Track {
        self.tracks
            .get(self.state.current_track_index)
            .unwrap_or(&self.placeholder_track)
    }

    pub fn current_scene(&self) -> &Scene {
        self.scenes
            .get(self.state.current_scene_index)
            .unwrap_or(&self.placeholder_scene)
    }

    pub fn toggle_play(&mut self, out: &mut dyn AudioOutput) {
        if self.tracks.is_empty() {
            log::warn!("[playback] nothing to play yet");
            self.state.is_playing = false;
            return;
        }
        self.state.is_playing = !self.state.is_playing;
        if self.state.is_playing {
            self.start_output(out);
        } else {
            self.stop_output(out);
        }
        log::info!("[playback] playing={}", self.state.is_playing);
    }

    pub fn change_track(&mut self, direction: Direction, out: &mut dyn AudioOutput) {
        if self.tracks.is_empty() {
            return;
        }
        let len = self.tracks.len() as isize;
        let mut index = self.state.current_track_index as isize + direction.step();
        if index >= len {
            index = 0;
        }
        if index < 0 {
            index = len - 1;
        }
        self.state.current_track_index = index as usize;
        self.state.is_playing = true;
        self.reload(out);
        log::info!(
            "[playback] track {} -> {:?}",
            self.state.current_track_index,
            self.current_track().title
        );
    }

    pub fn on_track_ended(&mut self, out: &mut dyn AudioOutput) {
        self.output_running = false;
        self.change_track(Direction::Next, out);
    }

    /// Returns true when progress changed.
    pub fn on_time_update(&mut self, current_time: f64, duration: f64) -> bool {
        if !(duration.is_finite() && duration > 0.0) || !current_time.is_finite() {
            return false;
        }
        let progress = ((current_time / duration) * 100.0).clamp(0.0, 100.0) as f32;
        if progress == self.state.progress {
            return false;
        }
        self.state.progress = progress;
        true
    }

    /// Apply the outcome of an earlier `play()`. Only a rejection of the most
    /// recent request while the intent is still "playing" rolls the intent
    /// back; anything else has been superseded. Returns true on rollback.
    pub fn on_play_settled(
        &mut self,
        ticket: PlayTicket,
        result: Result<(), StationError>,
    ) -> bool {
        if self.latest_ticket != Some(ticket) {
            log::debug!("[playback] ignoring stale settlement {:?}", ticket);
            return false;
        }
        match result {
            Ok(()) => false,
            Err(err) if self.state.is_playing => {
                log::warn!("[playback] {err}; reverting to paused");
                self.state.is_playing = false;
                self.output_running = false;
                true
            }
            Err(err) => {
                log::debug!("[playback] rejection after pause: {err}");
                false
            }
        }
    }

    /// Returns true when the scene index changed.
    pub fn select_scene(&mut self, index: usize) -> bool {
        if index >= self.scenes.len() || index == self.state.current_scene_index {
            return false;
        }
        self.state.current_scene_index = index;
        log::info!("[playback] scene -> {:?}", self.current_scene().name);
        true
    }

    pub fn change_scene(&mut self, direction: Direction) -> bool {
        if self.scenes.is_empty() {
            return false;
        }
        let len = self.scenes.len() as isize;
        let index = (self.state.current_scene_index as isize + direction.step()).rem_euclid(len);
        self.select_scene(index as usize)
    }

    pub fn toggle_day_mode(&mut self) {
        self.state.is_day_mode = !self.state.is_day_mode;
    }

    fn reload(&mut self, out: &mut dyn AudioOutput) {
        out.pause();
        self.output_running = false;
        let url = self.current_track().url.clone();
        out.load(&url);
        self.state.progress = 0.0;
        if self.state.is_playing {
            self.start_output(out);
        }
    }

    fn start_output(&mut self, out: &mut dyn AudioOutput) {
        if self.output_running {
            return;
        }
        let ticket = PlayTicket(self.next_ticket);
        self.next_ticket += 1;
        self.latest_ticket = Some(ticket);
        self.output_running = true;
        out.play(ticket);
    }

    fn stop_output(&mut self, out: &mut dyn AudioOutput) {
        if self.output_running {
            out.pause();
            self.output_running = false;
        }
    }
}
