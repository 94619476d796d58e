use crate::constants::*;
use crate::input;
use gallery_core::{CursorKind, DisplaySink};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

fn html_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

fn set_text(document: &web::Document, id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}

fn set_visible_class(document: &web::Document, id: &str, visible: bool) {
    if let Some(el) = document.get_element_by_id(id) {
        let cl = el.class_list();
        if visible {
            _ = cl.add_1(VISIBLE_CLASS);
        } else {
            _ = cl.remove_1(VISIBLE_CLASS);
        }
    }
}

/// Match the canvas backing store to its CSS size times devicePixelRatio.
/// Returns the CSS size, which is what pointer coordinates are measured in.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> (f32, f32) {
    let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
    let css_w = canvas.client_width().max(1);
    let css_h = canvas.client_height().max(1);
    canvas.set_width((css_w as f64 * dpr) as u32);
    canvas.set_height((css_h as f64 * dpr) as u32);
    (css_w as f32, css_h as f32)
}

/// Whether a press target sits inside the info panel or controls overlay.
pub fn is_ui_target(target: Option<web::EventTarget>) -> bool {
    target
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .and_then(|el| el.closest(UI_REGION_SELECTOR).ok().flatten())
        .is_some()
}

/// Display sink backed by the page's overlay elements. Missing elements are
/// skipped silently.
pub struct DomDisplay {
    document: web::Document,
}

impl DomDisplay {
    pub fn new(document: web::Document) -> Self {
        Self { document }
    }
}

impl DisplaySink for DomDisplay {
    fn show_tooltip(&mut self, text: &str, x: f32, y: f32) {
        if let Some(el) = html_by_id(&self.document, TOOLTIP_ID) {
            el.set_text_content(Some(text));
            let style = el.style();
            _ = style.set_property("left", &format!("{}px", x));
            _ = style.set_property("top", &format!("{}px", y));
        }
        set_visible_class(&self.document, TOOLTIP_ID, true);
    }

    fn hide_tooltip(&mut self) {
        set_visible_class(&self.document, TOOLTIP_ID, false);
    }

    fn show_info_panel(&mut self, title: &str, artist: &str, description: &str) {
        set_text(&self.document, INFO_TITLE_ID, title);
        set_text(&self.document, INFO_ARTIST_ID, &input::artist_line(artist));
        set_text(&self.document, INFO_DESCRIPTION_ID, description);
        set_visible_class(&self.document, INFO_PANEL_ID, true);
    }

    fn hide_info_panel(&mut self) {
        set_visible_class(&self.document, INFO_PANEL_ID, false);
    }

    fn set_cursor_appearance(&mut self, kind: CursorKind) {
        if let Some(body) = self.document.body() {
            _ = body.style().set_property("cursor", input::cursor_css(kind));
        }
    }

    fn set_reticle_visible(&mut self, visible: bool) {
        if let Some(el) = html_by_id(&self.document, RETICLE_ID) {
            let display = if visible { "block" } else { "none" };
            _ = el.style().set_property("display", display);
        }
    }

    fn set_room_label(&mut self, text: &str) {
        set_text(&self.document, ROOM_LABEL_ID, text);
    }
}
