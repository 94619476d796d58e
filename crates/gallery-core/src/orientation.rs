//! Yaw/pitch look orientation driven by raw pointer motion.

use glam::{EulerRot, Quat, Vec3};
use std::f32::consts::FRAC_PI_2;

/// Look angles applied in Y-then-X order (yaw about world up, then pitch).
///
/// Yaw is left unbounded; pitch is kept `margin` radians away from the poles so
/// the view never flips over the top.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orientation {
    pub yaw: f32,
    pub pitch: f32,
}

impl Default for Orientation {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl Orientation {
    pub const fn new(yaw: f32, pitch: f32) -> Self {
        Self { yaw, pitch }
    }

    #[inline]
    pub fn pitch_limit(margin: f32) -> f32 {
        FRAC_PI_2 - margin
    }

    /// Turn by a raw pointer delta in pixels. Moving right turns right, moving
    /// down looks down.
    pub fn apply_pointer_delta(&mut self, dx: f32, dy: f32, sensitivity: f32, margin: f32) {
        if !dx.is_finite() || !dy.is_finite() {
            return;
        }
        self.yaw -= dx * sensitivity;
        self.pitch -= dy * sensitivity;
        self.clamp_pitch(margin);
    }

    /// Pull pitch back inside `±pitch_limit(margin)`. A non-finite pitch
    /// becomes level.
    pub fn clamp_pitch(&mut self, margin: f32) {
        let limit = Self::pitch_limit(margin);
        self.pitch = if self.pitch.is_finite() {
            self.pitch.clamp(-limit, limit)
        } else {
            0.0
        };
    }

    #[inline]
    pub fn quat(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0)
    }

    /// View direction, including pitch.
    #[inline]
    pub fn look_dir(&self) -> Vec3 {
        self.quat() * Vec3::NEG_Z
    }

    /// Horizontal walking direction: the look direction flattened onto the floor.
    pub fn forward(&self) -> Vec3 {
        let mut f = self.look_dir();
        f.y = 0.0;
        // Pitch never reaches the poles, so the flattened vector is non-zero;
        // fall back to yaw alone if a caller built an out-of-range pitch.
        f.try_normalize()
            .unwrap_or_else(|| Vec3::new(-self.yaw.sin(), 0.0, -self.yaw.cos()))
    }

    #[inline]
    pub fn right(&self) -> Vec3 {
        self.forward().cross(Vec3::Y).normalize()
    }
}
