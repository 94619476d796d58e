//! Keyboard walking: movement flags integrated into a clamped position.

use crate::config::WalkBounds;
use crate::orientation::Orientation;
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoveDirection {
    Forward,
    Backward,
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MovementFlags {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

impl MovementFlags {
    pub fn set(&mut self, dir: MoveDirection, active: bool) {
        match dir {
            MoveDirection::Forward => self.forward = active,
            MoveDirection::Backward => self.backward = active,
            MoveDirection::Left => self.left = active,
            MoveDirection::Right => self.right = active,
        }
    }
}

/// Advance `position` by one step.
///
/// Each active flag contributes `speed * dt` along its axis independently, so
/// diagonal walking is faster than straight walking. The result is clamped to
/// `bounds`. No state is kept between calls: replaying the same trace of
/// inputs yields the same path.
pub fn integrate(
    dt: f32,
    flags: MovementFlags,
    orientation: &Orientation,
    position: Vec3,
    speed: f32,
    bounds: &WalkBounds,
) -> Vec3 {
    let step = speed * dt;
    let forward = orientation.forward();
    let right = orientation.right();

    let mut p = position;
    if flags.forward {
        p += forward * step;
    }
    if flags.backward {
        p -= forward * step;
    }
    if flags.left {
        p -= right * step;
    }
    if flags.right {
        p += right * step;
    }
    bounds.clamp(p)
}
