//! Tunable parameters for the navigator.
//!
//! Defaults mirror `constants.rs`. Front-ends may override individual fields
//! before handing the config to [`crate::Navigator::new`], which validates it.

use crate::constants::*;
use crate::entity::Material;
use glam::Vec3;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("walk speed must be positive, got {0}")]
    NonPositiveSpeed(f32),
    #[error("look sensitivity must be positive, got {0}")]
    NonPositiveSensitivity(f32),
    #[error("pitch margin must lie in (0, pi/2), got {0}")]
    PitchMarginOutOfRange(f32),
    #[error("eye height band is empty: min {min} > max {max}")]
    InvertedHeightBand { min: f32, max: f32 },
    #[error("boundary half extent must be positive, got {0}")]
    NonPositiveBoundary(f32),
    #[error("max frame step must be positive, got {0}")]
    NonPositiveFrameStep(f32),
    #[error("field of view must lie in (0, 180) degrees, got {0}")]
    FieldOfViewOutOfRange(f32),
    #[error("click effects need at least one particle")]
    NoParticles,
    #[error("click effect duration must be positive, got {0}")]
    NonPositiveEffectDuration(f32),
}

/// Bounds applied to every integrated position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WalkBounds {
    pub min_height: f32,
    pub max_height: f32,
    pub half_extent: f32,
}

impl Default for WalkBounds {
    fn default() -> Self {
        Self {
            min_height: MIN_EYE_HEIGHT,
            max_height: MAX_EYE_HEIGHT,
            half_extent: BOUNDARY_HALF_EXTENT,
        }
    }
}

impl WalkBounds {
    #[inline]
    pub fn clamp(&self, p: Vec3) -> Vec3 {
        Vec3::new(
            p.x.clamp(-self.half_extent, self.half_extent),
            p.y.clamp(self.min_height, self.max_height),
            p.z.clamp(-self.half_extent, self.half_extent),
        )
    }

    #[inline]
    pub fn contains(&self, p: Vec3) -> bool {
        p.x.abs() <= self.half_extent
            && p.z.abs() <= self.half_extent
            && p.y >= self.min_height
            && p.y <= self.max_height
    }
}

#[derive(Clone, Copy, Debug)]
pub struct EffectParams {
    pub particle_count: usize,
    pub duration_sec: f32,
    pub spread: f32,
    pub rise_per_sec: f32,
    pub scale_growth: f32,
}

impl Default for EffectParams {
    fn default() -> Self {
        Self {
            particle_count: EFFECT_PARTICLE_COUNT,
            duration_sec: EFFECT_DURATION_SEC,
            spread: EFFECT_SPREAD,
            rise_per_sec: EFFECT_RISE_PER_SEC,
            scale_growth: EFFECT_SCALE_GROWTH,
        }
    }
}

#[derive(Clone, Debug)]
pub struct NavigationConfig {
    pub walk_speed: f32,
    pub look_sensitivity: f32,
    pub pitch_margin: f32,
    pub bounds: WalkBounds,
    pub max_frame_step_sec: f32,
    pub start_position: Vec3,
    pub start_yaw: f32,
    pub start_pitch: f32,
    pub fov_y_degrees: f32,
    pub room_threshold: f32,
    pub hover_material: Material,
    pub effects: EffectParams,
    pub effect_seed: u64,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            walk_speed: WALK_SPEED,
            look_sensitivity: LOOK_SENSITIVITY,
            pitch_margin: PITCH_MARGIN,
            bounds: WalkBounds::default(),
            max_frame_step_sec: MAX_FRAME_STEP_SEC,
            start_position: START_POSITION,
            start_yaw: START_YAW,
            start_pitch: START_PITCH,
            fov_y_degrees: FOV_Y_DEGREES,
            room_threshold: ROOM_THRESHOLD,
            hover_material: Material::HOVER,
            effects: EffectParams::default(),
            effect_seed: EFFECT_SEED,
        }
    }
}

impl NavigationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        // Negated comparisons so NaN fails too.
        if !(self.walk_speed > 0.0) {
            return Err(ConfigError::NonPositiveSpeed(self.walk_speed));
        }
        if !(self.look_sensitivity > 0.0) {
            return Err(ConfigError::NonPositiveSensitivity(self.look_sensitivity));
        }
        if !(self.pitch_margin > 0.0 && self.pitch_margin < std::f32::consts::FRAC_PI_2) {
            return Err(ConfigError::PitchMarginOutOfRange(self.pitch_margin));
        }
        if !(self.bounds.min_height <= self.bounds.max_height) {
            return Err(ConfigError::InvertedHeightBand {
                min: self.bounds.min_height,
                max: self.bounds.max_height,
            });
        }
        if !(self.bounds.half_extent > 0.0) {
            return Err(ConfigError::NonPositiveBoundary(self.bounds.half_extent));
        }
        if !(self.max_frame_step_sec > 0.0) {
            return Err(ConfigError::NonPositiveFrameStep(self.max_frame_step_sec));
        }
        if !(self.fov_y_degrees > 0.0 && self.fov_y_degrees < 180.0) {
            return Err(ConfigError::FieldOfViewOutOfRange(self.fov_y_degrees));
        }
        if self.effects.particle_count == 0 {
            return Err(ConfigError::NoParticles);
        }
        if !(self.effects.duration_sec > 0.0) {
            return Err(ConfigError::NonPositiveEffectDuration(
                self.effects.duration_sec,
            ));
        }
        Ok(())
    }
}
