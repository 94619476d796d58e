use crate::app::AppState;
use crate::dom;
use crate::input;
use gallery_core::InputEvent;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

fn canvas_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    input::client_to_canvas_px(
        Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
        Vec2::new(rect.left() as f32, rect.top() as f32),
    )
}

pub fn wire_pointer_handlers(state: Rc<RefCell<AppState>>) {
    wire_pointermove(state.clone());
    wire_mousedown(state);
}

fn wire_pointermove(state: Rc<RefCell<AppState>>) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let mut st = state.borrow_mut();
        let pos = canvas_px(&ev, &st.canvas);
        st.dispatch(InputEvent::PointerMove {
            x: pos.x,
            y: pos.y,
            dx: ev.movement_x() as f32,
            dy: ev.movement_y() as f32,
        });
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_mousedown(state: Rc<RefCell<AppState>>) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let Some(button) = input::pointer_button_from_dom(ev.button()) else {
            return;
        };
        let mut st = state.borrow_mut();
        let canvas: &web::Element = st.canvas.as_ref();
        let on_canvas = ev
            .target()
            .and_then(|t| t.dyn_into::<web::Element>().ok())
            .is_some_and(|el| &el == canvas);
        let region = input::press_region(on_canvas, dom::is_ui_target(ev.target()));
        let pos = canvas_px(&ev, &st.canvas);
        st.dispatch(InputEvent::PointerDown {
            x: pos.x,
            y: pos.y,
            button,
            region,
        });
    }) as Box<dyn FnMut(_)>);

    if let Some(doc) = dom::window_document() {
        _ = doc.add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Pointer Lock API notifications. The canvas holding the lock is the only
/// grant that counts.
pub fn wire_pointer_lock(state: Rc<RefCell<AppState>>) {
    let Some(doc) = dom::window_document() else {
        return;
    };

    let change_state = state.clone();
    let change_doc = doc.clone();
    let on_change = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        let mut st = change_state.borrow_mut();
        let canvas: &web::Element = st.canvas.as_ref();
        let locked = change_doc.pointer_lock_element().as_ref() == Some(canvas);
        st.dispatch(InputEvent::LockStateChanged { locked });
    }) as Box<dyn FnMut()>);
    _ = doc.add_event_listener_with_callback(
        "pointerlockchange",
        on_change.as_ref().unchecked_ref(),
    );
    on_change.forget();

    let on_error = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        log::warn!("[lock] pointer lock refused by the browser");
        state.borrow_mut().dispatch(InputEvent::LockError);
    }) as Box<dyn FnMut()>);
    _ = doc.add_event_listener_with_callback("pointerlockerror", on_error.as_ref().unchecked_ref());
    on_error.forget();
}
