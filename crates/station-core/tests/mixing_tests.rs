mod common;

use common::*;
use glam::DVec2;
use instant::Instant;
use station_core::{Direction, PointerSample};

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-6
}

fn loaded() -> Rig {
    let mut rig = rig();
    rig.station.load_catalog(sample_catalog(), Instant::now());
    rig
}

#[test]
fn scene_load_activates_every_sound_at_default_level() {
    let rig = loaded();
    assert!(rig.station.ambient().is_active("rain"));
    assert!(rig.station.ambient().is_active("fire"));
    assert!(close(rig.ambience.volume_of("rain").unwrap(), 0.5 * 0.8));
    assert!(close(rig.ambience.volume_of("fire").unwrap(), 0.3 * 0.8));
    assert!(close(rig.audio.last_volume().unwrap(), 0.5 * 0.8));
}

#[test]
fn master_zero_silences_music_and_ambience() {
    let mut rig = loaded();
    rig.station.set_music_volume(1.0);
    rig.station.set_ambient_volume("rain", 1.0);
    rig.station.set_master_volume(0.0);
    assert_eq!(rig.audio.last_volume(), Some(0.0));
    assert!(rig.ambience.last.borrow().iter().all(|l| l.volume == 0.0));
    assert_eq!(rig.station.displayed_music_volume(), 0.0);
}

#[test]
fn mute_toggle_round_trips_to_default_master() {
    let mut rig = loaded();
    rig.station.set_master_volume(0.4);
    rig.station.toggle_mute();
    assert_eq!(rig.station.mix().master, 0.0);
    rig.station.toggle_mute();
    assert!(close(rig.station.mix().master, 0.8));
}

#[test]
fn volumes_survive_a_round_trip_through_another_scene() {
    let mut rig = loaded();
    rig.station.set_ambient_volume("rain", 0.9);
    rig.station.toggle_ambience("fire");
    rig.station.change_scene(Direction::Next);
    assert!(!rig.station.ambient().is_active("rain"));
    assert!(rig.station.ambient().is_active("wind"));
    assert_eq!(rig.ambience.last.borrow().len(), 1);

    rig.station.change_scene(Direction::Next);
    assert_eq!(rig.station.ambient().volume("rain"), Some(0.9));
    // Returning to a scene turns all of its sounds back on.
    assert!(rig.station.ambient().is_active("fire"));
    assert!(close(rig.ambience.volume_of("rain").unwrap(), 0.9 * 0.8));
}

#[test]
fn toggled_off_sound_is_silent_but_keeps_its_level() {
    let mut rig = loaded();
    assert!(rig.station.toggle_ambience("rain"));
    assert_eq!(rig.ambience.volume_of("rain"), Some(0.0));
    assert_eq!(rig.station.ambient().volume("rain"), Some(0.5));
    rig.station.set_ambient_volume("rain", 0.2);
    assert_eq!(rig.ambience.volume_of("rain"), Some(0.0));
    assert!(rig.station.toggle_ambience("rain"));
    assert!(close(rig.ambience.volume_of("rain").unwrap(), 0.2 * 0.8));
}

#[test]
fn hotspots_are_inert_while_capturing_coordinates() {
    let mut rig = loaded();
    let now = Instant::now();
    rig.station.toggle_dev_mode(now);
    assert!(rig.station.toggle_calibration());
    assert!(!rig.station.toggle_ambience("rain"));
    assert!(rig.station.ambient().is_active("rain"));

    let sample = PointerSample {
        client: DVec2::new(960.0, 540.0),
        origin: DVec2::ZERO,
        over_panel: false,
    };
    assert!(rig.station.on_stage_click(sample, 1).is_some());
    assert!(rig.station.ambient().is_active("rain"));
}

#[test]
fn slider_values_are_clamped() {
    let mut rig = loaded();
    rig.station.set_ambient_volume("rain", 3.0);
    assert_eq!(rig.station.ambient().volume("rain"), Some(1.0));
    rig.station.set_ambient_volume("rain", -1.0);
    assert_eq!(rig.station.ambient().volume("rain"), Some(0.0));
}
