// Whole-session flows: catalog load, keyboard shortcuts and the welcome flag.

mod common;

use common::*;
use instant::Instant;
use station_core::{
    Catalog, CopyPurpose, MemoryStore, ModalKind, Shortcut, ShortcutEffect,
};
use std::cell::RefCell;
use std::rc::Rc;

const CATALOG_JSON: &str = r##"{
    "success": true,
    "tracks": [
        {"id": 1, "title": "Dawn", "artist": "Kumo", "url": "/music/dawn.mp3", "cover": "/c/1.png"},
        {"id": 2, "title": "Dusk", "artist": "Kumo", "url": "/music/dusk.mp3", "cover": "/c/2.png"}
    ],
    "scenes": [
        {
            "id": "1", "name": "Rainy Room",
            "bg_day": "/bg/day.gif", "bg_night": "/bg/night.gif", "theme_color": "#4A6FA5",
            "sounds": [
                {"id": "rain", "name": "Rain", "src": "/a/rain.mp3", "defaultValue": 0.5, "position": {"top": "45%", "left": "30%"}},
                {"id": "cat", "name": "Cat", "src": "/a/cat.mp3", "defaultValue": 0.2, "position": {"top": 70, "left": 55.5}},
                {"id": "fire", "name": "Fire", "src": "/a/fire.mp3", "defaultValue": 0.35, "position": {"top": "60%", "left": "80%"}}
            ]
        }
    ]
}"##;

#[test]
fn fresh_session_mixes_ambience_as_authored() {
    let mut rig = rig();
    let catalog = Catalog::or_empty(Catalog::from_json(CATALOG_JSON));
    assert_eq!(catalog.tracks.len(), 2);
    rig.station.load_catalog(catalog, Instant::now());

    let master = rig.station.mix().master;
    for (id, default) in [("rain", 0.5f32), ("cat", 0.2), ("fire", 0.35)] {
        assert!(rig.station.ambient().is_active(id));
        assert_eq!(rig.station.ambient().volume(id), Some(default));
        assert_eq!(rig.ambience.volume_of(id), Some(default * master));
    }

    let before = rig.ambience.volume_of("cat");
    assert!(rig.station.toggle_ambience("cat"));
    assert_eq!(rig.ambience.volume_of("cat"), Some(0.0));
    assert_eq!(rig.station.ambient().volume("cat"), Some(0.2));
    assert!(rig.station.toggle_ambience("cat"));
    assert_eq!(rig.ambience.volume_of("cat"), before);
}

#[test]
fn failed_catalog_leaves_placeholders() {
    let mut rig = rig();
    let catalog = Catalog::or_empty(Catalog::from_json(r#"{"success":false,"error":"timeout"}"#));
    rig.station.load_catalog(catalog, Instant::now());
    assert!(rig.station.is_loaded());
    assert!(rig.station.engine().tracks().is_empty());
    assert!(rig.ambience.last.borrow().is_empty());
}

#[test]
fn space_and_m_drive_transport_and_mute() {
    let now = Instant::now();
    let mut rig = rig();
    rig.station.load_catalog(sample_catalog(), now);
    assert_eq!(
        rig.station.handle_shortcut(Shortcut::TogglePlay, now, |_| true),
        ShortcutEffect::Handled
    );
    assert!(rig.station.engine().is_playing());
    rig.station.handle_shortcut(Shortcut::ToggleMute, now, |_| true);
    assert_eq!(rig.audio.last_volume(), Some(0.0));
}

#[test]
fn shortcuts_respect_the_setting_and_blocking_modals() {
    let now = Instant::now();
    let mut rig = rig();
    rig.station.load_catalog(sample_catalog(), now);

    rig.station.update_settings(|s| s.shortcuts = false, now);
    assert_eq!(
        rig.station.handle_shortcut(Shortcut::TogglePlay, now, |_| true),
        ShortcutEffect::Ignored
    );
    rig.station.update_settings(|s| s.shortcuts = true, now);

    rig.station.open_modal(ModalKind::Volume);
    assert_eq!(
        rig.station.handle_shortcut(Shortcut::TogglePlay, now, |_| true),
        ShortcutEffect::Ignored
    );
    assert!(!rig.station.engine().is_playing());

    // Escape is never gated and closes everything.
    rig.station.open_modal(ModalKind::Info);
    assert_eq!(
        rig.station.handle_shortcut(Shortcut::CloseModals, now, |_| true),
        ShortcutEffect::Handled
    );
    assert!(rig.station.idle().modals().is_empty());
    assert_eq!(
        rig.station.handle_shortcut(Shortcut::CloseModals, now, |_| true),
        ShortcutEffect::Ignored
    );

    // The scene menu leaves shortcuts live.
    rig.station.open_modal(ModalKind::SceneMenu);
    rig.station.handle_shortcut(Shortcut::TogglePlay, now, |_| true);
    assert!(rig.station.engine().is_playing());
}

#[test]
fn info_panel_leaves_shortcuts_live() {
    let now = Instant::now();
    let mut rig = rig();
    rig.station.load_catalog(sample_catalog(), now);

    rig.station.open_modal(ModalKind::Info);
    assert!(rig.station.shortcuts_live());
    assert_eq!(
        rig.station.handle_shortcut(Shortcut::TogglePlay, now, |_| true),
        ShortcutEffect::Handled
    );
    assert!(rig.station.engine().is_playing());
}

#[test]
fn developer_keys_need_developer_mode() {
    let now = Instant::now();
    let mut rig = rig();
    rig.station.load_catalog(sample_catalog(), now);

    for key in [
        Shortcut::ToggleCalibration,
        Shortcut::ExportScene,
        Shortcut::ClearHistory,
    ] {
        assert_eq!(
            rig.station.handle_shortcut(key, now, |_| true),
            ShortcutEffect::Ignored
        );
    }

    rig.station.handle_shortcut(Shortcut::ToggleDevMode, now, |_| true);
    assert!(rig.station.calibration().is_dev_mode());
    assert!(rig.station.idle().modals().contains(ModalKind::Developer));

    // The developer panel does not swallow developer keys.
    rig.station.handle_shortcut(Shortcut::ToggleCalibration, now, |_| true);
    assert!(rig.station.calibration().is_collecting());

    match rig.station.handle_shortcut(Shortcut::ExportScene, now, |_| true) {
        ShortcutEffect::Copy(request) => assert_eq!(request.purpose, CopyPurpose::SceneExport),
        other => panic!("expected a copy request, got {other:?}"),
    }

    rig.station.on_stage_click(pointer(10.0, 10.0), 1);
    let confirmed = Rc::new(RefCell::new(0usize));
    let seen = confirmed.clone();
    rig.station.handle_shortcut(Shortcut::ClearHistory, now, move |count| {
        *seen.borrow_mut() = count;
        true
    });
    assert_eq!(*confirmed.borrow(), 1);
    assert_eq!(rig.station.calibration().history_len(), 0);
}

#[test]
fn closing_the_developer_panel_leaves_developer_mode() {
    let now = Instant::now();
    let mut rig = rig();
    rig.station.load_catalog(sample_catalog(), now);
    rig.station.toggle_dev_mode(now);
    rig.station.toggle_calibration();
    assert!(rig.station.close_modal(ModalKind::Developer, now));
    assert!(!rig.station.calibration().is_dev_mode());
    assert!(!rig.station.calibration().is_collecting());
    assert!(rig.station.idle().armed_timer().is_some());
}

#[test]
fn first_visit_shows_welcome_and_stores_flag_once() {
    let store = SharedStore::default();
    let mut rig = rig_with_store(store.clone());
    let now = Instant::now();
    rig.station.load_catalog(sample_catalog(), now);

    assert!(rig.station.session().is_first_visit());
    assert!(rig.station.idle().modals().contains(ModalKind::Welcome));
    assert_eq!(rig.station.idle().armed_timer(), None);
    assert_eq!(
        rig.station.handle_shortcut(Shortcut::TogglePlay, now, |_| true),
        ShortcutEffect::Ignored
    );

    assert!(rig.station.close_modal(ModalKind::Welcome, now));
    rig.station.open_modal(ModalKind::Welcome);
    rig.station.close_modal(ModalKind::Welcome, now);
    assert_eq!(store.0.borrow().writes, 1);

    let returning = rig_with_store(store.clone());
    assert!(!returning.station.session().is_first_visit());
    assert!(returning.station.idle().modals().is_empty());
}

#[test]
fn returning_visitor_skips_welcome() {
    let rig = rig_with_store(MemoryStore::visited());
    assert!(!rig.station.idle().modals().contains(ModalKind::Welcome));
}
