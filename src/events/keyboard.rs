use crate::app::AppState;
use gallery_core::{InputEvent, Key};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

fn handle_key(ev: &web::KeyboardEvent, state: &Rc<RefCell<AppState>>, pressed: bool) {
    // Ignore auto-repeat so reset fires once per press.
    if pressed && ev.repeat() {
        return;
    }
    let key = Key::from_code(&ev.code());
    if key == Key::Other {
        return;
    }
    if matches!(key, Key::Move(_)) {
        ev.prevent_default();
    }
    state
        .borrow_mut()
        .dispatch(InputEvent::KeyChange { key, pressed });
}

/// Key down/up on the window feed movement flags, cancel and reset.
pub fn wire_keyboard(state: Rc<RefCell<AppState>>) {
    let Some(window) = web::window() else {
        return;
    };
    for (name, pressed) in [("keydown", true), ("keyup", false)] {
        let state = state.clone();
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_key(&ev, &state, pressed);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
