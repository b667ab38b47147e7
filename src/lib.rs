#![cfg(target_arch = "wasm32")]
use instant::Instant;
use station_core::constants::LOADING_MIN_DISPLAY;
use station_core::{Catalog, Station, StationError};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

mod app;
mod audio;
mod clipboard;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod markup;
mod overlay;
mod render;
mod storage;
mod timers;

use app::App;
use constants::{APP_ID, CATALOG_URL, LOADING_ID, MUSIC_ELEMENT_ID};

/// One GET of the catalog endpoint, decoded into tracks and scenes.
async fn fetch_catalog(window: &web::Window) -> Result<Catalog, StationError> {
    let fail = |e: JsValue| StationError::Catalog(format!("{:?}", e));
    let response: web::Response = JsFuture::from(window.fetch_with_str(CATALOG_URL))
        .await
        .map_err(fail)?
        .dyn_into()
        .map_err(fail)?;
    if !response.ok() {
        return Err(StationError::Catalog(format!("HTTP {}", response.status())));
    }
    let body = JsFuture::from(response.text().map_err(fail)?)
        .await
        .map_err(fail)?
        .as_string()
        .unwrap_or_default();
    Catalog::from_json(&body)
}

/// The page's `<audio id="music">` if present, otherwise a detached element.
fn music_element(document: &web::Document) -> anyhow::Result<web::HtmlAudioElement> {
    if let Some(el) = document.get_element_by_id(MUSIC_ELEMENT_ID) {
        return el
            .dyn_into::<web::HtmlAudioElement>()
            .map_err(|e| anyhow::anyhow!("#{MUSIC_ELEMENT_ID} is not <audio>: {:?}", e));
    }
    audio::create_audio_element("music").map_err(|e| anyhow::anyhow!("{:?}", e))
}

fn build_app(document: web::Document) -> anyhow::Result<(Rc<App>, web::HtmlAudioElement)> {
    let element = music_element(&document)?;
    let slot: audio::AppSlot = Rc::new(RefCell::new(Weak::new()));
    let seed = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let station = Station::new(
        Box::new(audio::WebAudio::new(element.clone(), slot.clone())),
        Box::new(audio::WebAmbience::default()),
        Box::new(storage::LocalStore),
        seed,
    );
    let app = App::new(document, station);
    *slot.borrow_mut() = Rc::downgrade(&app);
    Ok((app, element))
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("station-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    overlay::show(&document, LOADING_ID);
    overlay::hide(&document, APP_ID);
    let started = Instant::now();

    let (app, music) = build_app(document.clone())?;
    audio::wire_music_events(&app, &music);
    events::wire_resize(&app);
    events::wire_pointer_handlers(&app);
    events::wire_global_keydown(&app);
    events::wire_controls(&app);

    let catalog = Catalog::or_empty(fetch_catalog(&window).await);
    log::info!(
        "[catalog] {} tracks, {} scenes",
        catalog.tracks.len(),
        catalog.scenes.len()
    );

    // The loading screen stays up for a minimum time even on a fast fetch.
    let elapsed = started.elapsed();
    if elapsed < LOADING_MIN_DISPLAY {
        let remaining = LOADING_MIN_DISPLAY - elapsed;
        timers::sleep(i32::try_from(remaining.as_millis()).unwrap_or(i32::MAX)).await;
    }

    app.update(|station| station.load_catalog(catalog, Instant::now()));
    overlay::hide(&document, LOADING_ID);
    overlay::show(&document, APP_ID);

    frame::start_loop(Rc::new(RefCell::new(frame::FrameContext::new(app))));
    Ok(())
}
