use crate::app::App;
use fnv::FnvHashMap;
use station_core::{AmbientLayer, AmbientOutput, AudioOutput, PlayTicket, StationError};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Filled in once the `App` exists, so play promises can report back.
pub type AppSlot = Rc<RefCell<Weak<App>>>;

fn describe(e: &JsValue) -> String {
    js_sys::Reflect::get(e, &JsValue::from_str("name"))
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_else(|| format!("{:?}", e))
}

pub fn create_audio_element(label: &str) -> Result<web::HtmlAudioElement, JsValue> {
    let element = web::HtmlAudioElement::new().map_err(|e| {
        log::error!("{} HtmlAudioElement error: {:?}", label, e);
        e
    })?;
    element.set_cross_origin(Some("anonymous"));
    element.set_preload("auto");
    Ok(element)
}

/// The music track, backed by one `<audio>` element.
pub struct WebAudio {
    element: web::HtmlAudioElement,
    app: AppSlot,
}

impl WebAudio {
    pub fn new(element: web::HtmlAudioElement, app: AppSlot) -> Self {
        Self { element, app }
    }
}

impl AudioOutput for WebAudio {
    fn load(&mut self, url: &str) {
        _ = self.element.pause();
        self.element.set_src(url);
        self.element.load();
    }

    fn play(&mut self, ticket: PlayTicket) {
        let app = self.app.clone();
        let pending = self.element.play();
        // Settle on the next microtask; the station is still borrowed here.
        spawn_local(async move {
            let result = match pending {
                Ok(promise) => JsFuture::from(promise)
                    .await
                    .map(|_| ())
                    .map_err(|e| StationError::Playback(describe(&e))),
                Err(e) => Err(StationError::Playback(describe(&e))),
            };
            let app = app.borrow().upgrade();
            if let Some(app) = app {
                app.update(|station| station.on_play_settled(ticket, result));
            }
        });
    }

    fn pause(&mut self) {
        _ = self.element.pause();
    }

    fn set_volume(&mut self, volume: f32) {
        self.element.set_volume(f64::from(volume));
    }
}

/// One looping `<audio>` per ambient layer of the current scene.
#[derive(Default)]
pub struct WebAmbience {
    elements: FnvHashMap<String, web::HtmlAudioElement>,
}

impl WebAmbience {
    fn start(id: &str, element: &web::HtmlAudioElement) {
        if let Ok(promise) = element.play() {
            let id = id.to_string();
            spawn_local(async move {
                if let Err(e) = JsFuture::from(promise).await {
                    // Autoplay policy; retried on the next sync after a gesture.
                    log::debug!("[ambient] {id} blocked: {}", describe(&e));
                }
            });
        }
    }
}

impl AmbientOutput for WebAmbience {
    fn sync_layers(&mut self, layers: &[AmbientLayer]) {
        self.elements.retain(|id, element| {
            let keep = layers.iter().any(|l| &l.id == id);
            if !keep {
                _ = element.pause();
                _ = element.remove_attribute("src");
                element.load();
            }
            keep
        });
        for layer in layers {
            if !self.elements.contains_key(&layer.id) {
                match create_audio_element("ambient") {
                    Ok(element) => {
                        element.set_loop(true);
                        element.set_src(&layer.src);
                        self.elements.insert(layer.id.clone(), element);
                    }
                    Err(_) => continue,
                }
            }
            if let Some(element) = self.elements.get(&layer.id) {
                element.set_volume(f64::from(layer.volume));
                if element.paused() {
                    Self::start(&layer.id, element);
                }
            }
        }
    }
}

/// `timeupdate` drives the progress bar; `ended` advances the playlist.
pub fn wire_music_events(app: &Rc<App>, element: &web::HtmlAudioElement) {
    let weak = Rc::downgrade(app);
    let source = element.clone();
    crate::dom::add_listener(element, "timeupdate", move |_: web::Event| {
        if let Some(app) = weak.upgrade() {
            app.update_if(|station| {
                station.on_time_update(source.current_time(), source.duration())
            });
        }
    });
    let weak = Rc::downgrade(app);
    crate::dom::add_listener(element, "ended", move |_: web::Event| {
        if let Some(app) = weak.upgrade() {
            log::info!("[playback] track ended");
            app.update(|station| station.on_track_ended());
        }
    });
}
