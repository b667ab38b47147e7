use crate::app::App;
use crate::constants::{CLOCK_ID, CLOCK_REFRESH_MS};
use crate::dom;
use crate::markup;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Per-frame housekeeping: deadline polling (copy status expiry, idle hide
/// as a fallback to the timer) and the wall clock.
pub struct FrameContext {
    pub app: Rc<App>,
    pub last_clock_ms: f64,
}

impl FrameContext {
    pub fn new(app: Rc<App>) -> Self {
        Self {
            app,
            last_clock_ms: f64::NEG_INFINITY,
        }
    }

    pub fn frame(&mut self, timestamp_ms: f64) {
        self.app.update_if(|station| station.tick(Instant::now()));

        if timestamp_ms - self.last_clock_ms >= CLOCK_REFRESH_MS {
            self.last_clock_ms = timestamp_ms;
            let date = js_sys::Date::new_0();
            let text = markup::clock_text(date.get_hours(), date.get_minutes());
            dom::set_text(&self.app.document, CLOCK_ID, &text);
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp_ms: f64| {
        frame_ctx.borrow_mut().frame(timestamp_ms);
        request_frame(&tick_clone);
    }) as Box<dyn FnMut(f64)>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>) {
    let Some(window) = web::window() else {
        return;
    };
    if let Some(closure) = tick.borrow().as_ref() {
        _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
    }
}
