use gallery_core::motion::integrate;
use gallery_core::{MoveDirection, MovementFlags, Orientation, WalkBounds};
use glam::Vec3;
use rand::prelude::*;

const SPEED: f32 = 12.0;

fn flags(forward: bool, backward: bool, left: bool, right: bool) -> MovementFlags {
    MovementFlags {
        forward,
        backward,
        left,
        right,
    }
}

#[test]
fn forward_walks_along_negative_z() {
    let p = integrate(
        0.1,
        flags(true, false, false, false),
        &Orientation::default(),
        Vec3::new(0.0, 1.6, 10.0),
        SPEED,
        &WalkBounds::default(),
    );
    assert!((p - Vec3::new(0.0, 1.6, 8.8)).length() < 1e-5);
}

#[test]
fn looking_up_does_not_lift_the_viewer() {
    let o = Orientation::new(0.0, 1.2);
    let p = integrate(
        0.1,
        flags(true, false, false, false),
        &o,
        Vec3::new(0.0, 2.0, 0.0),
        SPEED,
        &WalkBounds::default(),
    );
    assert!((p.y - 2.0).abs() < 1e-6);
    assert!((p.z + 1.2).abs() < 1e-4);
}

#[test]
fn opposite_flags_cancel() {
    let start = Vec3::new(3.0, 2.0, -4.0);
    let p = integrate(
        0.05,
        flags(true, true, true, true),
        &Orientation::new(0.4, 0.0),
        start,
        SPEED,
        &WalkBounds::default(),
    );
    assert!((p - start).length() < 1e-5);
}

#[test]
fn diagonal_is_not_speed_corrected() {
    let start = Vec3::new(0.0, 2.0, 0.0);
    let straight = integrate(
        0.1,
        flags(true, false, false, false),
        &Orientation::default(),
        start,
        SPEED,
        &WalkBounds::default(),
    );
    let diagonal = integrate(
        0.1,
        flags(true, false, false, true),
        &Orientation::default(),
        start,
        SPEED,
        &WalkBounds::default(),
    );
    let d_straight = (straight - start).length();
    let d_diag = (diagonal - start).length();
    assert!((d_diag - d_straight * 2f32.sqrt()).abs() < 1e-4);
}

#[test]
fn height_band_is_enforced() {
    let b = WalkBounds::default();
    let low = integrate(0.0, MovementFlags::default(), &Orientation::default(), Vec3::new(0.0, -5.0, 0.0), SPEED, &b);
    let high = integrate(0.0, MovementFlags::default(), &Orientation::default(), Vec3::new(0.0, 50.0, 0.0), SPEED, &b);
    assert_eq!(low.y, b.min_height);
    assert_eq!(high.y, b.max_height);
}

#[test]
fn random_traces_stay_inside_bounds() {
    let b = WalkBounds::default();
    let mut rng = StdRng::seed_from_u64(42);
    let mut p = Vec3::new(0.0, 1.6, 10.0);
    let mut o = Orientation::default();
    let mut f = MovementFlags::default();
    let dirs = [
        MoveDirection::Forward,
        MoveDirection::Backward,
        MoveDirection::Left,
        MoveDirection::Right,
    ];
    for _ in 0..20_000 {
        f.set(dirs[rng.gen_range(0..4)], rng.gen_bool(0.6));
        o.apply_pointer_delta(rng.gen_range(-40.0..40.0), rng.gen_range(-40.0..40.0), 0.002, 0.1);
        let dt = rng.gen_range(0.0..0.1);
        p = integrate(dt, f, &o, p, SPEED, &b);
        assert!(b.contains(p), "escaped bounds at {:?}", p);
    }
}

#[test]
fn replaying_a_trace_is_deterministic() {
    let trace: Vec<(f32, MovementFlags, Orientation)> = (0..200)
        .map(|i| {
            let t = i as f32;
            (
                0.016,
                flags(i % 3 == 0, i % 7 == 0, i % 5 == 0, i % 2 == 0),
                Orientation::new(t * 0.05, 0.0),
            )
        })
        .collect();
    let run = || {
        trace.iter().fold(Vec3::new(0.0, 1.6, 10.0), |p, (dt, f, o)| {
            integrate(*dt, *f, o, p, SPEED, &WalkBounds::default())
        })
    };
    assert_eq!(run(), run());
}

#[test]
fn flags_track_set_and_release() {
    let mut f = MovementFlags::default();
    f.set(MoveDirection::Left, true);
    f.set(MoveDirection::Forward, true);
    assert!(f.left && f.forward);
    assert!(!f.right && !f.backward);
    f.set(MoveDirection::Left, false);
    assert!(!f.left && f.forward);
    f.set(MoveDirection::Forward, false);
    assert_eq!(f, MovementFlags::default());
}
