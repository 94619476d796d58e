//! Outbound display port implemented by each front-end.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CursorKind {
    /// Crosshair cursor over the scene.
    #[default]
    Default,
    /// Hand cursor while an exhibit is under the pointer.
    Pointer,
    /// No cursor while the pointer is captured.
    Hidden,
}

pub trait DisplaySink {
    fn show_tooltip(&mut self, text: &str, x: f32, y: f32);
    fn hide_tooltip(&mut self);
    fn show_info_panel(&mut self, title: &str, artist: &str, description: &str);
    fn hide_info_panel(&mut self);
    fn set_cursor_appearance(&mut self, kind: CursorKind);
    fn set_reticle_visible(&mut self, visible: bool);
    fn set_room_label(&mut self, text: &str);
}

#[inline]
pub fn tooltip_text(title: &str) -> String {
    format!("Click to view: {}", title)
}
