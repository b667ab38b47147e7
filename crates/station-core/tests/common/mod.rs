// Recording doubles for the platform outputs. Each double shares its log
// through an `Rc` so tests can inspect it after handing the box to `Station`.

#![allow(dead_code)]

use station_core::{
    AmbientLayer, AmbientOutput, AmbientSound, AudioOutput, Catalog, MemoryStore,
    HotspotPosition, PersistenceProvider, PlayTicket, Scene, Station, Track,
};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq)]
pub enum AudioCall {
    Load(String),
    Play(PlayTicket),
    Pause,
    Volume(f32),
}

#[derive(Clone, Default)]
pub struct RecordingAudio {
    pub calls: Rc<RefCell<Vec<AudioCall>>>,
}

impl RecordingAudio {
    pub fn plays(&self) -> Vec<PlayTicket> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                AudioCall::Play(t) => Some(*t),
                _ => None,
            })
            .collect()
    }

    pub fn loads(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|c| matches!(c, AudioCall::Load(_)))
            .count()
    }

    pub fn last_volume(&self) -> Option<f32> {
        self.calls.borrow().iter().rev().find_map(|c| match c {
            AudioCall::Volume(v) => Some(*v),
            _ => None,
        })
    }

    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }
}

impl AudioOutput for RecordingAudio {
    fn load(&mut self, url: &str) {
        self.calls.borrow_mut().push(AudioCall::Load(url.to_string()));
    }
    fn play(&mut self, ticket: PlayTicket) {
        self.calls.borrow_mut().push(AudioCall::Play(ticket));
    }
    fn pause(&mut self) {
        self.calls.borrow_mut().push(AudioCall::Pause);
    }
    fn set_volume(&mut self, volume: f32) {
        self.calls.borrow_mut().push(AudioCall::Volume(volume));
    }
}

#[derive(Clone, Default)]
pub struct RecordingAmbience {
    pub last: Rc<RefCell<Vec<AmbientLayer>>>,
}

impl RecordingAmbience {
    pub fn volume_of(&self, id: &str) -> Option<f32> {
        self.last
            .borrow()
            .iter()
            .find(|l| l.id == id)
            .map(|l| l.volume)
    }
}

impl AmbientOutput for RecordingAmbience {
    fn sync_layers(&mut self, layers: &[AmbientLayer]) {
        *self.last.borrow_mut() = layers.to_vec();
    }
}

pub fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn track(n: usize) -> Track {
    Track {
        id: Some(n.to_string()),
        title: format!("Track {n}"),
        artist: "Artist".to_string(),
        url: format!("/music/{n}.mp3"),
        cover: String::new(),
    }
}

pub fn sound(id: &str, default_value: f32) -> AmbientSound {
    AmbientSound {
        id: id.to_string(),
        name: id.to_string(),
        src: format!("/ambient/{id}.mp3"),
        default_value,
        position: HotspotPosition { top: 40.0, left: 60.0 },
    }
}

pub fn scene(id: &str, sounds: Vec<AmbientSound>) -> Scene {
    Scene {
        id: id.to_string(),
        name: format!("Scene {id}"),
        bg_day: format!("/bg/{id}-day.gif"),
        bg_night: format!("/bg/{id}-night.gif"),
        theme_color: "#222".to_string(),
        sounds,
    }
}

/// Three tracks; scene A has rain (0.5) and fire (0.3), scene B has wind (0.4).
pub fn sample_catalog() -> Catalog {
    Catalog {
        tracks: (0..3).map(track).collect(),
        scenes: vec![
            scene("a", vec![sound("rain", 0.5), sound("fire", 0.3)]),
            scene("b", vec![sound("wind", 0.4)]),
        ],
    }
}

pub struct Rig {
    pub station: Station,
    pub audio: RecordingAudio,
    pub ambience: RecordingAmbience,
}

/// A station for a returning visitor (no welcome modal).
pub fn rig() -> Rig {
    rig_with_store(MemoryStore::visited())
}

pub fn rig_with_store(store: impl PersistenceProvider + 'static) -> Rig {
    init_logs();
    let audio = RecordingAudio::default();
    let ambience = RecordingAmbience::default();
    let station = Station::new(
        Box::new(audio.clone()),
        Box::new(ambience.clone()),
        Box::new(store),
        7,
    );
    Rig {
        station,
        audio,
        ambience,
    }
}

/// Persistence double whose contents stay visible to the test.
#[derive(Clone, Default)]
pub struct SharedStore(pub Rc<RefCell<MemoryStore>>);

impl PersistenceProvider for SharedStore {
    fn read_flag(&self, key: &str) -> station_core::Result<bool> {
        self.0.borrow().read_flag(key)
    }
    fn write_flag(&mut self, key: &str) -> station_core::Result<()> {
        self.0.borrow_mut().write_flag(key)
    }
}

pub fn pointer(x: f64, y: f64) -> station_core::PointerSample {
    station_core::PointerSample {
        client: glam::DVec2::new(x, y),
        origin: glam::DVec2::ZERO,
        over_panel: false,
    }
}
