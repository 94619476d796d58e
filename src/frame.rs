use crate::app::AppState;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub state: Rc<RefCell<AppState>>,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn new(state: Rc<RefCell<AppState>>) -> Self {
        Self {
            state,
            last_instant: Instant::now(),
        }
    }

    /// One `update(dt)` per animation frame. Clamping happens in the navigator,
    /// so a tab returning from the background does not teleport the viewer.
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        self.state.borrow_mut().nav.update(dt.as_secs_f32());
    }
}

fn schedule(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        schedule(&tick_clone);
    }) as Box<dyn FnMut()>));
    schedule(&tick);
}
