use crate::app::App;
use instant::Instant;
use station_core::{CopyRequest, StationError};
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// `navigator.clipboard.writeText`, looked up dynamically so insecure
/// contexts (no clipboard object) fail into the manual fallback.
async fn write_text(text: &str) -> Result<(), StationError> {
    let window = web::window().ok_or_else(|| StationError::Clipboard("no window".into()))?;
    let navigator: JsValue = window.navigator().into();
    let clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
        .ok_or_else(|| StationError::Clipboard("clipboard API unavailable".into()))?;
    let write = js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText"))
        .ok()
        .and_then(|f| f.dyn_into::<js_sys::Function>().ok())
        .ok_or_else(|| StationError::Clipboard("writeText unavailable".into()))?;
    let promise = write
        .call1(&clipboard, &JsValue::from_str(text))
        .map_err(|e| StationError::Clipboard(format!("{:?}", e)))?
        .dyn_into::<js_sys::Promise>()
        .map_err(|e| StationError::Clipboard(format!("{:?}", e)))?;
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| StationError::Clipboard(format!("{:?}", e)))
}

pub fn write(app: Rc<App>, request: CopyRequest) {
    spawn_local(async move {
        let result = write_text(&request.text).await;
        app.update(|station| station.on_copy_settled(&request, result, Instant::now()));
    });
}
