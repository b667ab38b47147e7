use crate::constants::HIDDEN_CLASS;
use web_sys as web;

#[inline]
pub fn show(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        _ = el.class_list().remove_1(HIDDEN_CLASS);
        // fallback for environments without CSS class
        _ = el.remove_attribute("hidden");
    }
}

#[inline]
pub fn hide(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        _ = el.class_list().add_1(HIDDEN_CLASS);
        // fallback
        _ = el.set_attribute("hidden", "");
    }
}

#[inline]
pub fn set_visible(document: &web::Document, id: &str, visible: bool) {
    if visible {
        show(document, id);
    } else {
        hide(document, id);
    }
}

/// Modal containers are `<section data-modal-panel="settings">` and so on.
pub fn set_modal_visible(document: &web::Document, name: &str, visible: bool) {
    let selector = format!("[data-modal-panel=\"{name}\"]");
    if let Ok(Some(el)) = document.query_selector(&selector) {
        if visible {
            _ = el.class_list().remove_1(HIDDEN_CLASS);
        } else {
            _ = el.class_list().add_1(HIDDEN_CLASS);
        }
    }
}
