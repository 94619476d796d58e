use crate::dom::{self, DomDisplay};
use gallery_core::{HostRequest, InputEvent, Navigator};
use web_sys as web;

/// Everything the DOM callbacks and the frame loop share.
pub struct AppState {
    pub nav: Navigator,
    pub display: DomDisplay,
    pub canvas: web::HtmlCanvasElement,
}

impl AppState {
    pub fn dispatch(&mut self, event: InputEvent) {
        if let Some(req) = self.nav.handle_event(event, &mut self.display) {
            self.fulfil(req);
        }
    }

    pub fn reset(&mut self) {
        if let Some(req) = self.nav.reset(&mut self.display) {
            self.fulfil(req);
        }
    }

    /// Grant or denial arrives later through `pointerlockchange` /
    /// `pointerlockerror`.
    pub fn fulfil(&mut self, req: HostRequest) {
        match req {
            HostRequest::RequestPointerLock => self.canvas.request_pointer_lock(),
            HostRequest::ExitPointerLock => {
                if let Some(doc) = dom::window_document() {
                    doc.exit_pointer_lock();
                }
            }
        }
    }

    pub fn sync_viewport(&mut self) {
        let (w, h) = dom::sync_canvas_backing_size(&self.canvas);
        self.nav.handle_resize(w, h);
    }
}
