//! Display sink for the desktop host. There is no DOM, so the tooltip and
//! info panel become log lines and the room label goes in the window title.

use gallery_core::{CursorKind, DisplaySink};
use winit::window::{CursorGrabMode, CursorIcon, Window};

const TITLE: &str = "Gallery Walk (native)";

pub struct WindowDisplay {
    pub window: Window,
    room: String,
    tooltip: Option<String>,
}

impl WindowDisplay {
    pub fn new(window: Window) -> Self {
        window.set_title(TITLE);
        Self {
            window,
            room: String::new(),
            tooltip: None,
        }
    }

    /// Grab the cursor for mouselook. Some platforms only support confining.
    pub fn grab_cursor(&self) -> Result<(), winit::error::ExternalError> {
        self.window
            .set_cursor_grab(CursorGrabMode::Locked)
            .or_else(|_| self.window.set_cursor_grab(CursorGrabMode::Confined))
    }

    pub fn release_cursor(&self) {
        if let Err(e) = self.window.set_cursor_grab(CursorGrabMode::None) {
            log::warn!("[lock] release failed: {}", e);
        }
        self.window.set_cursor_visible(true);
    }

    fn refresh_title(&self) {
        if self.room.is_empty() {
            self.window.set_title(TITLE);
        } else {
            self.window.set_title(&format!("{} | {}", TITLE, self.room));
        }
    }
}

impl DisplaySink for WindowDisplay {
    fn show_tooltip(&mut self, text: &str, _x: f32, _y: f32) {
        // Pointer motion re-sends the tooltip every event; only log changes.
        if self.tooltip.as_deref() != Some(text) {
            log::info!("[ui] {}", text);
            self.tooltip = Some(text.to_string());
        }
    }

    fn hide_tooltip(&mut self) {
        self.tooltip = None;
    }

    fn show_info_panel(&mut self, title: &str, artist: &str, description: &str) {
        log::info!("[ui] {} / By {}\n    {}", title, artist, description);
    }

    fn hide_info_panel(&mut self) {}

    fn set_cursor_appearance(&mut self, kind: CursorKind) {
        match kind {
            CursorKind::Default => {
                self.window.set_cursor_visible(true);
                self.window.set_cursor_icon(CursorIcon::Crosshair);
            }
            CursorKind::Pointer => {
                self.window.set_cursor_visible(true);
                self.window.set_cursor_icon(CursorIcon::Pointer);
            }
            CursorKind::Hidden => self.window.set_cursor_visible(false),
        }
    }

    fn set_reticle_visible(&mut self, _visible: bool) {}

    fn set_room_label(&mut self, text: &str) {
        if self.room != text {
            log::info!("[ui] now in {}", text);
            self.room = text.to_string();
            self.refresh_title();
        }
    }
}
