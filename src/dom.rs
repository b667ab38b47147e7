use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn set_text(document: &web::Document, id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}

#[inline]
pub fn set_html(document: &web::Document, id: &str, html: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        el.set_inner_html(html);
    }
}

#[inline]
pub fn set_attr(document: &web::Document, id: &str, name: &str, value: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        _ = el.set_attribute(name, value);
    }
}

pub fn set_style(document: &web::Document, id: &str, property: &str, value: &str) {
    if let Some(el) = html_element(document, id) {
        _ = el.style().set_property(property, value);
    }
}

pub fn toggle_class(document: &web::Document, id: &str, class: &str, on: bool) {
    if let Some(el) = document.get_element_by_id(id) {
        _ = el.class_list().toggle_with_force(class, on);
    }
}

pub fn html_element(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

/// Nearest ancestor-or-self of the event target matching `selector`.
pub fn closest(ev: &web::Event, selector: &str) -> Option<web::Element> {
    let target = ev.target()?.dyn_into::<web::Element>().ok()?;
    target.closest(selector).ok().flatten()
}

pub fn target_tag(ev: &web::Event) -> Option<String> {
    let target = ev.target()?.dyn_into::<web::Element>().ok()?;
    Some(target.tag_name())
}

/// Blocking `window.confirm` for the bulk history clear.
pub fn confirm_clear(count: usize) -> bool {
    let message = format!("Delete all {count} saved coordinates?");
    web::window()
        .and_then(|w| w.confirm_with_message(&message).ok())
        .unwrap_or(false)
}

pub fn add_listener<E: FromWasmAbi + 'static>(
    target: &web::EventTarget,
    event: &str,
    f: impl FnMut(E) + 'static,
) {
    let closure = Closure::wrap(Box::new(f) as Box<dyn FnMut(E)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}
