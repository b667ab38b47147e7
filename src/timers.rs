use crate::app::App;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// The `setTimeout` currently standing in for the idle deadline.
#[derive(Default)]
pub struct IdleTimer {
    scheduled: Option<(u64, i32)>,
}

/// Match the browser timer to the controller's armed generation: keep it if
/// unchanged, otherwise clear it and schedule the new one.
pub fn sync_idle(app: &Rc<App>, timer: &mut IdleTimer) {
    let wanted = app.station().idle().armed_timer();
    if let (Some((generation, _)), Some(req)) = (timer.scheduled, wanted) {
        if generation == req.generation {
            return;
        }
    }
    let Some(window) = web::window() else {
        return;
    };
    if let Some((_, handle)) = timer.scheduled.take() {
        window.clear_timeout_with_handle(handle);
    }
    let Some(req) = wanted else {
        return;
    };
    let weak = Rc::downgrade(app);
    let callback = Closure::once_into_js(move || {
        if let Some(app) = weak.upgrade() {
            app.update(|station| station.on_idle_timer(req.generation));
        }
    });
    let delay_ms = i32::try_from(req.delay.as_millis()).unwrap_or(i32::MAX);
    match window.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        delay_ms,
    ) {
        Ok(handle) => timer.scheduled = Some((req.generation, handle)),
        Err(e) => log::error!("[idle] setTimeout failed: {:?}", e),
    }
}

/// Resolve after `ms` milliseconds.
pub async fn sleep(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if let Some(window) = web::window() {
            _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms.max(0));
        } else {
            _ = resolve.call0(&JsValue::NULL);
        }
    });
    _ = JsFuture::from(promise).await;
}
