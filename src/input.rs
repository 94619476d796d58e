// Pure conversions between DOM values and the navigator's input and output
// types. Kept free of `web_sys` so the host tests can include this file.

use gallery_core::{CursorKind, Material, Particle, PointerButton, SurfaceRegion};
use glam::{Quat, Vec2, Vec3};

/// Client coordinates to canvas-local CSS pixels.
#[inline]
pub fn client_to_canvas_px(client: Vec2, rect_origin: Vec2) -> Vec2 {
    client - rect_origin
}

/// `MouseEvent.button` to a pointer button. Back/forward buttons are dropped.
#[inline]
pub fn pointer_button_from_dom(button: i16) -> Option<PointerButton> {
    match button {
        0 => Some(PointerButton::Primary),
        1 => Some(PointerButton::Auxiliary),
        2 => Some(PointerButton::Secondary),
        _ => None,
    }
}

/// Region for a press. Only presses that land on the canvas itself, outside
/// the overlay UI, reach the scene.
#[inline]
pub fn press_region(on_canvas: bool, in_ui: bool) -> SurfaceRegion {
    if on_canvas && !in_ui {
        SurfaceRegion::Scene
    } else {
        SurfaceRegion::Ui
    }
}

/// CSS `cursor` value for the body element.
#[inline]
pub fn cursor_css(kind: CursorKind) -> &'static str {
    match kind {
        CursorKind::Default => "crosshair",
        CursorKind::Pointer => "pointer",
        CursorKind::Hidden => "none",
    }
}

#[inline]
pub fn artist_line(artist: &str) -> String {
    format!("By {}", artist)
}

/// Position followed by rotation as `x, y, z, w`.
pub fn pack_pose(position: Vec3, rotation: Quat) -> [f32; 7] {
    let [px, py, pz] = position.to_array();
    let [qx, qy, qz, qw] = rotation.to_array();
    [px, py, pz, qx, qy, qz, qw]
}

/// Base and emissive colour channels in [0, 1], then shininess
/// and opacity.
pub fn pack_material(m: &Material) -> [f32; 8] {
    let [r, g, b] = gallery_core::entity::rgb_from_hex(m.color);
    let [er, eg, eb] = gallery_core::entity::rgb_from_hex(m.emissive);
    [r, g, b, er, eg, eb, m.shininess, m.opacity]
}

/// Floats per particle in `pack_particles`: position xyz, opacity, scale.
pub const PARTICLE_STRIDE: usize = 5;

pub fn pack_particles<'a>(particles: impl Iterator<Item = &'a Particle>) -> Vec<f32> {
    let mut out = Vec::with_capacity(particles.size_hint().0 * PARTICLE_STRIDE);
    for p in particles {
        out.extend_from_slice(&[p.position.x, p.position.y, p.position.z, p.opacity, p.scale]);
    }
    out
}
