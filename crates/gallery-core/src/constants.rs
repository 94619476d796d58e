use glam::Vec3;

// Navigation and interaction tuning shared by the web and native front-ends.

// Movement
pub const WALK_SPEED: f32 = 12.0; // world units per second, per active direction
pub const MIN_EYE_HEIGHT: f32 = 1.6;
pub const MAX_EYE_HEIGHT: f32 = 4.0;
pub const BOUNDARY_HALF_EXTENT: f32 = 38.0; // square walkable region on x and z
pub const MAX_FRAME_STEP_SEC: f32 = 0.1; // longer frames are clamped to this

// Mouse look
pub const LOOK_SENSITIVITY: f32 = 0.002; // radians per pixel of raw pointer motion
pub const PITCH_MARGIN: f32 = 0.1; // keeps pitch this far away from the poles

// Start pose: standing at the south end of the central hall, facing north (-Z)
pub const START_POSITION: Vec3 = Vec3::new(0.0, 1.6, 10.0);
pub const START_YAW: f32 = 0.0;
pub const START_PITCH: f32 = 0.0;

// Projection used by picking
pub const FOV_Y_DEGREES: f32 = 75.0;
pub const Z_NEAR: f32 = 0.1;
pub const Z_FAR: f32 = 1000.0;
pub const DEFAULT_VIEWPORT: [f32; 2] = [1280.0, 720.0];

// Rooms
pub const ROOM_THRESHOLD: f32 = 20.0;
pub const RESET_ROOM_LABEL: &str = "Main Gallery";

// Click confirmation effect
pub const EFFECT_PARTICLE_COUNT: usize = 15;
pub const EFFECT_DURATION_SEC: f32 = 1.5;
pub const EFFECT_SPREAD: f32 = 3.0; // side of the cube particles are scattered in
pub const EFFECT_RISE_PER_SEC: f32 = 1.2; // upward drift
pub const EFFECT_SCALE_GROWTH: f32 = 3.0; // scale reaches 1 + growth at the end
pub const EFFECT_PARTICLE_RADIUS: f32 = 0.08;
pub const EFFECT_COLOR: u32 = 0xffd700;
pub const EFFECT_SEED: u64 = 0x6a11_e7ff;

// Exhibit animation
pub const SPIN_RATE: f32 = 0.2; // radians per second
pub const HUE_CYCLE_RATE: f32 = 0.1; // full hue turns per second
pub const HUE_SATURATION: f32 = 0.7;
pub const HUE_LIGHTNESS: f32 = 0.5;

#[inline]
pub fn fov_y_radians() -> f32 {
    FOV_Y_DEGREES.to_radians()
}
