use crate::app::App;
use crate::dom;
use crate::input::{is_editable_tag, shortcut_for, KeyChord};
use instant::Instant;
use station_core::{Shortcut, ShortcutEffect};
use std::rc::Rc;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, app: &Rc<App>) {
    let code = ev.code();
    let chord = KeyChord {
        code: &code,
        ctrl: ev.ctrl_key(),
        meta: ev.meta_key(),
        shift: ev.shift_key(),
    };
    let Some(shortcut) = shortcut_for(chord) else {
        return;
    };
    if shortcut != Shortcut::CloseModals {
        let editing = dom::target_tag(ev).is_some_and(|tag| is_editable_tag(&tag));
        if editing {
            return;
        }
    }
    let now = Instant::now();
    let effect = app.update(|station| station.handle_shortcut(shortcut, now, dom::confirm_clear));
    match effect {
        ShortcutEffect::Ignored => {}
        ShortcutEffect::Handled => {
            log::info!("[keys] {:?}", shortcut);
            ev.prevent_default();
        }
        ShortcutEffect::Copy(request) => {
            ev.prevent_default();
            app.copy(request);
        }
    }
}

pub fn wire_global_keydown(app: &Rc<App>) {
    if let Some(window) = web::window() {
        let app = app.clone();
        dom::add_listener(&window, "keydown", move |ev: web::KeyboardEvent| {
            handle_global_keydown(&ev, &app);
        });
    }
}
