use crate::config::NavigationConfig;
use crate::motion::MovementFlags;
use crate::orientation::Orientation;
use glam::{Quat, Vec3};

/// First-person viewer pose plus the keys currently held.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewer {
    pub position: Vec3,
    pub orientation: Orientation,
    pub speed: f32,
    pub flags: MovementFlags,
}

impl Viewer {
    pub fn from_config(cfg: &NavigationConfig) -> Self {
        let mut orientation = Orientation::new(cfg.start_yaw, cfg.start_pitch);
        orientation.clamp_pitch(cfg.pitch_margin);
        Self {
            position: cfg.bounds.clamp(cfg.start_position),
            orientation,
            speed: cfg.walk_speed,
            flags: MovementFlags::default(),
        }
    }

    #[inline]
    pub fn rotation(&self) -> Quat {
        self.orientation.quat()
    }
}
