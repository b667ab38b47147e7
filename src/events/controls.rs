use crate::app::App;
use crate::constants::{ACTION_ATTR, INDEX_ATTR, MODAL_ATTR, RECORD_ATTR, SETTING_ATTR, VOLUME_ATTR};
use crate::dom;
use crate::input::{parse_action, parse_slider, volume_target, UiAction, VolumeTarget};
use instant::Instant;
use station_core::{CopyPurpose, CopyRequest};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

fn run_action(app: &Rc<App>, action: UiAction) {
    let now = Instant::now();
    match action {
        UiAction::TogglePlay => app.update(|s| s.toggle_play()),
        UiAction::Track(direction) => app.update(|s| s.change_track(direction)),
        UiAction::Scene(direction) => {
            app.update(|s| s.change_scene(direction));
        }
        UiAction::SelectScene(index) => {
            app.update(|s| s.select_scene(index));
        }
        UiAction::ToggleDayMode => app.update(|s| s.toggle_day_mode()),
        UiAction::Open(kind) => {
            app.update(|s| s.open_modal(kind));
        }
        UiAction::Close(kind) => {
            app.update(|s| s.close_modal(kind, now));
        }
        UiAction::ToggleCalibration => {
            app.update(|s| s.toggle_calibration());
        }
        UiAction::ExportScene => {
            let request = app.station().export_scene();
            app.copy(request);
        }
        UiAction::CopyManual => {
            let text = {
                let station = app.station();
                let calibration = station.calibration();
                calibration
                    .manual_copy()
                    .map(str::to_string)
                    .or_else(|| calibration.last_capture().map(|c| c.literal.clone()))
            };
            if let Some(text) = text {
                app.copy(CopyRequest {
                    text,
                    purpose: CopyPurpose::Coordinate,
                });
            }
        }
        UiAction::CopyRecord(id) => {
            let request = app.station().copy_record(&id);
            if let Some(request) = request {
                app.copy(request);
            }
        }
        UiAction::RemoveRecord(id) => {
            app.update(|s| s.remove_record(&id));
        }
        UiAction::ClearHistory => {
            app.update(|s| s.clear_history(dom::confirm_clear));
        }
    }
}

fn wire_clicks(app: &Rc<App>) {
    let app_click = app.clone();
    dom::add_listener(&app.document, "click", move |ev: web::MouseEvent| {
        let Some(el) = dom::closest(&ev, &format!("[{ACTION_ATTR}]")) else {
            return;
        };
        let action = el.get_attribute(ACTION_ATTR).unwrap_or_default();
        let parsed = parse_action(
            &action,
            el.get_attribute(MODAL_ATTR).as_deref(),
            el.get_attribute(INDEX_ATTR).as_deref(),
            el.get_attribute(RECORD_ATTR).as_deref(),
        );
        match parsed {
            Some(action) => run_action(&app_click, action),
            None => log::warn!("unknown action {action:?}"),
        }
    });
}

fn wire_sliders(app: &Rc<App>) {
    let app_input = app.clone();
    dom::add_listener(&app.document, "input", move |ev: web::Event| {
        let Some(el) = dom::closest(&ev, &format!("input[{VOLUME_ATTR}]")) else {
            return;
        };
        let Ok(input) = el.dyn_into::<web::HtmlInputElement>() else {
            return;
        };
        let target = volume_target(&input.get_attribute(VOLUME_ATTR).unwrap_or_default());
        let value = parse_slider(&input.value());
        app_input.update(|s| match target {
            VolumeTarget::Master => s.set_master_volume(value),
            VolumeTarget::Music => s.set_music_volume(value),
            VolumeTarget::Ambient(id) => s.set_ambient_volume(&id, value),
        });
    });
}

/// Checkboxes carry `data-setting="hideElements"` and so on; the hide-time
/// field is `data-setting="hideTime"`.
fn wire_settings(app: &Rc<App>) {
    let app_change = app.clone();
    dom::add_listener(&app.document, "change", move |ev: web::Event| {
        let Some(el) = dom::closest(&ev, &format!("input[{SETTING_ATTR}]")) else {
            return;
        };
        let Ok(input) = el.dyn_into::<web::HtmlInputElement>() else {
            return;
        };
        let key = input.get_attribute(SETTING_ATTR).unwrap_or_default();
        let checked = input.checked();
        let now = Instant::now();
        let changed = match key.as_str() {
            "hideTime" => app_change.update(|s| s.set_hide_time_input(&input.value(), now)),
            "hideElements" => {
                app_change.update(|s| s.update_settings(|a| a.hide_elements = checked, now))
            }
            "showTitles" => {
                app_change.update(|s| s.update_settings(|a| a.show_titles = checked, now))
            }
            "showClock" => {
                app_change.update(|s| s.update_settings(|a| a.show_clock = checked, now))
            }
            "shortcuts" => {
                app_change.update(|s| s.update_settings(|a| a.shortcuts = checked, now))
            }
            other => {
                log::warn!("[settings] unknown setting {other:?}");
                false
            }
        };
        if key == "hideTime" {
            // Echo the clamped value back into the field.
            input.set_value(&app_change.station().settings().hide_time.to_string());
        }
        log::debug!("[settings] {key} changed={changed}");
    });
}

pub fn wire_controls(app: &Rc<App>) {
    wire_clicks(app);
    wire_sliders(app);
    wire_settings(app);
}
