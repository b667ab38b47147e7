//! Projects `Station` state onto the page.
//!
//! Cheap attribute and text updates run on every refresh; the hotspot,
//! scene-list, slider and history fragments are only rebuilt when their
//! inputs change, so sliders are not replaced under the user's pointer.

use crate::constants::*;
use crate::dom;
use crate::input::{modal_name, parse_slider};
use crate::markup;
use crate::overlay;
use station_core::{ModalKind, Station};
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Default)]
pub struct ViewCache {
    hotspots: String,
    scenes: String,
    sliders_scene: Option<String>,
    history: String,
    background: String,
}

pub fn render(document: &web::Document, station: &Station, cache: &mut ViewCache) {
    render_stage(document, station, cache);
    render_controls(document, station, cache);
    render_modals(document, station);
    render_sliders(document, station, cache);
    render_calibration(document, station, cache);
}

fn render_stage(document: &web::Document, station: &Station, cache: &mut ViewCache) {
    let transform = station.transform();
    dom::set_style(document, STAGE_ID, "transform", &transform.css_transform());

    let scene = station.current_scene();
    let background = scene.background(station.engine().state().is_day_mode);
    if cache.background != background {
        cache.background = background.to_string();
        dom::set_style(
            document,
            BACKGROUND_ID,
            "background-image",
            &format!("url(\"{}\")", background),
        );
    }
    dom::set_style(document, APP_ID, "--theme", &scene.theme_color);

    let ambient = station.ambient();
    let hotspots = markup::hotspots(ambient.sounds(), |id| ambient.is_active(id));
    if cache.hotspots != hotspots {
        dom::set_html(document, HOTSPOTS_ID, &hotspots);
        cache.hotspots = hotspots;
    }
    dom::toggle_class(
        document,
        STAGE_ID,
        CAPTURING_CLASS,
        station.calibration().is_collecting(),
    );
}

fn render_controls(document: &web::Document, station: &Station, cache: &mut ViewCache) {
    let settings = station.settings();
    let state = station.engine().state();
    let track = station.current_track();

    dom::toggle_class(document, CONTROLS_ID, IDLE_CLASS, !station.idle().controls_visible());
    overlay::set_visible(document, TITLES_ID, settings.show_titles);
    overlay::set_visible(document, CLOCK_ID, settings.show_clock);

    dom::set_text(document, TRACK_TITLE_ID, &track.title);
    dom::set_text(document, TRACK_ARTIST_ID, &track.artist);
    if !track.cover.is_empty() {
        dom::set_attr(document, TRACK_COVER_ID, "src", &track.cover);
    }
    dom::set_text(document, PLAY_BUTTON_ID, markup::play_label(state.is_playing));
    dom::toggle_class(document, PLAY_BUTTON_ID, ACTIVE_CLASS, state.is_playing);
    dom::set_style(document, PROGRESS_ID, "width", &markup::progress_width(state.progress));
    dom::set_style(
        document,
        MUSIC_LEVEL_ID,
        "width",
        &markup::progress_width(station.displayed_music_volume() * 100.0),
    );

    let mix = station.mix();
    set_slider(document, "master", mix.master);
    set_slider(document, "music", mix.music);

    let scenes = markup::scene_list(station.engine().scenes(), state.current_scene_index);
    if cache.scenes != scenes {
        dom::set_html(document, SCENE_LIST_ID, &scenes);
        cache.scenes = scenes;
    }
}

fn render_modals(document: &web::Document, station: &Station) {
    let modals = station.idle().modals();
    for kind in ModalKind::ALL {
        overlay::set_modal_visible(document, modal_name(kind), modals.contains(kind));
    }
}

/// The volume sliders are rebuilt only on scene change; values the user is
/// dragging must not be overwritten mid-drag.
fn render_sliders(document: &web::Document, station: &Station, cache: &mut ViewCache) {
    let scene_id = station.current_scene().id.clone();
    if cache.sliders_scene.as_deref() == Some(scene_id.as_str()) {
        return;
    }
    let ambient = station.ambient();
    let sliders = markup::ambient_sliders(ambient.sounds(), |id| ambient.volume(id).unwrap_or(0.0));
    dom::set_html(document, AMBIENT_SLIDERS_ID, &sliders);
    cache.sliders_scene = Some(scene_id);
}

fn render_calibration(document: &web::Document, station: &Station, cache: &mut ViewCache) {
    let calibration = station.calibration();
    let scene = station.current_scene();
    dom::set_text(document, DEV_SCENE_NAME_ID, &scene.name);
    dom::set_text(document, DEV_HOTSPOT_COUNT_ID, &scene.sounds.len().to_string());

    overlay::set_visible(document, CAL_PANEL_ID, calibration.is_collecting());
    overlay::set_visible(document, CAL_CROSSHAIR_ID, calibration.pointer().is_some());
    if let Some(point) = calibration.pointer() {
        let client = station
            .transform()
            .percent_to_client(point, stage_origin(document));
        dom::set_style(document, CAL_CROSSHAIR_ID, "left", &format!("{}px", client.x));
        dom::set_style(document, CAL_CROSSHAIR_ID, "top", &format!("{}px", client.y));
        dom::set_text(
            document,
            CAL_POINTER_ID,
            &format!("top {}%  left {}%", point.top, point.left),
        );
    }
    dom::set_text(
        document,
        CAL_LAST_ID,
        calibration.last_capture().map(|c| c.literal.as_str()).unwrap_or(""),
    );
    match calibration.copy_status() {
        Some(status) => {
            dom::set_text(document, CAL_STATUS_ID, &status.message);
            dom::toggle_class(document, CAL_STATUS_ID, "error", !status.success);
            overlay::show(document, CAL_STATUS_ID);
        }
        None => overlay::hide(document, CAL_STATUS_ID),
    }
    match calibration.manual_copy() {
        Some(text) => {
            dom::set_text(document, CAL_MANUAL_ID, text);
            overlay::show(document, CAL_MANUAL_ID);
        }
        None => overlay::hide(document, CAL_MANUAL_ID),
    }

    let history = markup::history(calibration.history());
    if cache.history != history {
        dom::set_html(document, CAL_HISTORY_ID, &history);
        cache.history = history;
    }
}

/// Keeps the static master/music sliders in step with shortcut changes.
fn set_slider(document: &web::Document, target: &str, value: f32) {
    let selector = format!("input[{VOLUME_ATTR}=\"{target}\"]");
    let Ok(Some(el)) = document.query_selector(&selector) else {
        return;
    };
    if let Ok(input) = el.dyn_into::<web::HtmlInputElement>() {
        if (parse_slider(&input.value()) - value).abs() > f32::EPSILON {
            input.set_value(&value.to_string());
        }
    }
}

/// Top-left of the scaled stage in client pixels.
pub fn stage_origin(document: &web::Document) -> glam::DVec2 {
    document
        .get_element_by_id(STAGE_ID)
        .map(|el| {
            let rect = el.get_bounding_client_rect();
            glam::DVec2::new(rect.left(), rect.top())
        })
        .unwrap_or(glam::DVec2::ZERO)
}
