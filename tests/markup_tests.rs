// Host-side tests for the HTML fragment builders.

#![allow(dead_code)]
mod markup {
    include!("../src/markup.rs");
}

use markup::*;
use station_core::{AmbientSound, CalibrationRecord, HotspotPosition, Scene};

fn sound(id: &str, name: &str) -> AmbientSound {
    AmbientSound {
        id: id.into(),
        name: name.into(),
        src: format!("/ambient/{id}.mp3"),
        default_value: 0.5,
        position: HotspotPosition {
            top: 40.0,
            left: 62.5,
        },
    }
}

fn scene(id: &str) -> Scene {
    Scene {
        id: id.into(),
        name: format!("Scene {id}"),
        bg_day: String::new(),
        bg_night: String::new(),
        theme_color: "#123456".into(),
        sounds: Vec::new(),
    }
}

#[test]
fn escape_covers_markup_characters() {
    assert_eq!(
        escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
        "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
    );
}

#[test]
fn hotspots_carry_position_and_active_state() {
    let sounds = [sound("rain", "Rain"), sound("fire", "Fire <hot>")];
    let html = hotspots(&sounds, |id| id == "rain");

    assert!(html.contains(
        "<button class=\"hotspot active\" data-sound-id=\"rain\" title=\"Rain\" style=\"top:40%;left:62.5%\"></button>"
    ));
    assert!(html.contains("class=\"hotspot\" data-sound-id=\"fire\""));
    assert!(html.contains("Fire &lt;hot&gt;"));
}

#[test]
fn scene_list_marks_current() {
    let html = scene_list(&[scene("a"), scene("b")], 1);
    assert!(html.contains("class=\"scene\" data-action=\"select-scene\" data-index=\"0\""));
    assert!(html.contains("class=\"scene active\" data-action=\"select-scene\" data-index=\"1\""));
    assert!(html.contains(">Scene b</li>"));
}

#[test]
fn sliders_show_current_volume() {
    let html = ambient_sliders(&[sound("wind", "Wind")], |_| 0.25);
    assert!(html.contains("data-volume=\"wind\" value=\"0.25\""));
}

#[test]
fn history_rows_link_back_to_records() {
    let records = [CalibrationRecord {
        id: "coord_1_abc".into(),
        top: 50.0,
        left: 25.0,
        timestamp_ms: 1,
    }];
    let html = history(records.iter());
    assert!(html.contains("<code>{ top: &#39;50%&#39;, left: &#39;25%&#39; }</code>"));
    assert!(html.contains("data-action=\"copy-record\" data-record-id=\"coord_1_abc\""));
    assert!(html.contains("data-action=\"remove-record\" data-record-id=\"coord_1_abc\""));
    assert_eq!(history(std::iter::empty()), "");
}

#[test]
fn clock_pads_to_two_digits() {
    assert_eq!(clock_text(7, 5), "07:05");
    assert_eq!(clock_text(23, 59), "23:59");
}

#[test]
fn progress_is_clamped_percentage() {
    assert_eq!(progress_width(42.0), "42.00%");
    assert_eq!(progress_width(-3.0), "0.00%");
    assert_eq!(progress_width(180.0), "100.00%");
}

#[test]
fn play_label_follows_state() {
    assert_eq!(play_label(true), "Pause");
    assert_eq!(play_label(false), "Play");
}
