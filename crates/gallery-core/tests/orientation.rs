use gallery_core::constants::{LOOK_SENSITIVITY, PITCH_MARGIN};
use gallery_core::{NavigationConfig, Orientation, Viewer};
use rand::prelude::*;
use std::f32::consts::FRAC_PI_2;

#[test]
fn pitch_stays_inside_the_clamp_for_any_delta_sequence() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut o = Orientation::default();
    let limit = FRAC_PI_2 - PITCH_MARGIN;
    for _ in 0..5_000 {
        let dx = rng.gen_range(-500.0..500.0);
        let dy = rng.gen_range(-2_000.0..2_000.0);
        o.apply_pointer_delta(dx, dy, LOOK_SENSITIVITY, PITCH_MARGIN);
        assert!(o.pitch <= limit + 1e-6, "pitch {} above {}", o.pitch, limit);
        assert!(o.pitch >= -limit - 1e-6, "pitch {} below {}", o.pitch, -limit);
        assert!(o.pitch.abs() < FRAC_PI_2);
    }
}

#[test]
fn yaw_is_unbounded_and_follows_deltas() {
    let mut o = Orientation::default();
    for _ in 0..10 {
        o.apply_pointer_delta(-1_000.0, 0.0, LOOK_SENSITIVITY, PITCH_MARGIN);
    }
    assert!((o.yaw - 20.0).abs() < 1e-3);
    assert_eq!(o.pitch, 0.0);
}

#[test]
fn moving_pointer_right_turns_right() {
    let mut o = Orientation::default();
    o.apply_pointer_delta(100.0, 0.0, LOOK_SENSITIVITY, PITCH_MARGIN);
    assert!(o.forward().x > 0.0);
}

#[test]
fn moving_pointer_down_looks_down() {
    let mut o = Orientation::default();
    o.apply_pointer_delta(0.0, 100.0, LOOK_SENSITIVITY, PITCH_MARGIN);
    assert!(o.look_dir().y < 0.0);
}

#[test]
fn basis_stays_horizontal_and_unit_at_steep_pitch() {
    let mut o = Orientation::new(0.8, 0.0);
    o.apply_pointer_delta(0.0, -1.0e6, LOOK_SENSITIVITY, PITCH_MARGIN);
    let f = o.forward();
    let r = o.right();
    assert!(f.y.abs() < 1e-6);
    assert!((f.length() - 1.0).abs() < 1e-5);
    assert!((r.length() - 1.0).abs() < 1e-5);
    assert!(f.dot(r).abs() < 1e-5);
}

#[test]
fn quaternion_is_unit() {
    let o = Orientation::new(2.3, -0.7);
    assert!((o.quat().length() - 1.0).abs() < 1e-5);
}

#[test]
fn configured_start_pitch_is_clamped() {
    let limit = Orientation::pitch_limit(PITCH_MARGIN);
    for (pitch, want) in [(3.0, limit), (-3.0, -limit), (f32::NAN, 0.0), (0.4, 0.4)] {
        let cfg = NavigationConfig {
            start_pitch: pitch,
            ..NavigationConfig::default()
        };
        let viewer = Viewer::from_config(&cfg);
        assert_eq!(viewer.orientation.pitch, want, "start pitch {pitch}");
    }
}
