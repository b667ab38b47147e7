use crate::app::App;
use crate::constants::{PANEL_SELECTOR, SOUND_ATTR, STAGE_ID};
use crate::dom;
use crate::render::stage_origin;
use glam::DVec2;
use instant::Instant;
use station_core::PointerSample;
use std::rc::Rc;
use web_sys as web;

fn sample(app: &App, ev: &web::MouseEvent) -> PointerSample {
    PointerSample {
        client: DVec2::new(f64::from(ev.client_x()), f64::from(ev.client_y())),
        origin: stage_origin(&app.document),
        over_panel: dom::closest(ev, PANEL_SELECTOR).is_some(),
    }
}

pub fn wire_pointer_handlers(app: &Rc<App>) {
    wire_pointermove(app);
    wire_stage_click(app);
}

fn wire_pointermove(app: &Rc<App>) {
    let Some(window) = web::window() else {
        return;
    };
    let app = app.clone();
    dom::add_listener(&window, "pointermove", move |ev: web::PointerEvent| {
        let sample = sample(&app, &ev);
        app.update(|station| station.on_pointer_move(sample, Instant::now()));
    });
}

/// In capture mode a click records a coordinate; otherwise a click on a
/// hotspot toggles its ambient layer.
fn wire_stage_click(app: &Rc<App>) {
    let Some(stage) = app.document.get_element_by_id(STAGE_ID) else {
        log::error!("missing #{STAGE_ID}");
        return;
    };
    let app = app.clone();
    dom::add_listener(&stage, "click", move |ev: web::MouseEvent| {
        let sample = sample(&app, &ev);
        let timestamp_ms = js_sys::Date::now() as u64;
        let request = app.update(|station| station.on_stage_click(sample, timestamp_ms));
        if let Some(request) = request {
            ev.prevent_default();
            app.copy(request);
            return;
        }
        let sound = dom::closest(&ev, &format!("[{SOUND_ATTR}]"))
            .and_then(|el| el.get_attribute(SOUND_ATTR));
        if let Some(id) = sound {
            let toggled = app.update(|station| station.toggle_ambience(&id));
            log::info!("[ambient] {id} toggled={toggled}");
        }
    });
}

pub fn wire_resize(app: &Rc<App>) {
    let Some(window) = web::window() else {
        return;
    };
    let fit = {
        let window = window.clone();
        move |app: &Rc<App>| {
            let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            let transform = app.update(|station| station.on_resize(width, height));
            log::debug!("[stage] {width}x{height} scale={:.4}", transform.scale);
        }
    };
    fit(app);
    let app = app.clone();
    dom::add_listener(&window, "resize", move |_: web::Event| fit(&app));
}
