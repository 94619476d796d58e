use gallery_core::{ClickEffectSystem, EffectParams};
use glam::Vec3;

fn system() -> ClickEffectSystem {
    ClickEffectSystem::new(EffectParams::default(), 1234)
}

#[test]
fn spawn_yields_n_particles_then_none_after_duration() {
    let params = EffectParams::default();
    let mut fx = system();
    fx.spawn(Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(fx.live_particle_count(), params.particle_count);
    fx.advance(params.duration_sec * 0.5);
    assert_eq!(fx.live_particle_count(), params.particle_count);
    fx.advance(params.duration_sec * 0.6);
    assert_eq!(fx.live_particle_count(), 0);
    assert!(fx.effects().is_empty());
}

#[test]
fn particles_start_scattered_within_spread() {
    let params = EffectParams::default();
    let origin = Vec3::new(0.0, 2.5, -35.0);
    let mut fx = system();
    fx.spawn(origin);
    for p in fx.particles() {
        let off = p.position - origin;
        assert!(off.abs().max_element() <= params.spread * 0.5 + 1e-5);
        assert_eq!(p.opacity, 1.0);
        assert_eq!(p.scale, 1.0);
    }
}

#[test]
fn particles_fade_grow_and_rise() {
    let params = EffectParams::default();
    let origin = Vec3::ZERO;
    let mut fx = system();
    fx.spawn(origin);
    let half = params.duration_sec * 0.5;
    fx.advance(half);
    for p in fx.particles() {
        assert!((p.opacity - 0.5).abs() < 1e-5);
        assert!((p.scale - (1.0 + 0.5 * params.scale_growth)).abs() < 1e-5);
        let rise = params.rise_per_sec * half;
        assert!((p.position - (origin + p.offset + Vec3::Y * rise)).length() < 1e-5);
    }
}

#[test]
fn opacity_is_monotone_and_scale_grows() {
    let mut fx = system();
    fx.spawn(Vec3::ZERO);
    let mut last_opacity = 1.0;
    let mut last_scale = 1.0;
    while fx.live_particle_count() > 0 {
        fx.advance(0.1);
        if let Some(p) = fx.particles().next() {
            assert!(p.opacity < last_opacity);
            assert!(p.scale > last_scale);
            last_opacity = p.opacity;
            last_scale = p.scale;
        }
    }
}

#[test]
fn overlapping_effects_retire_independently() {
    let params = EffectParams::default();
    let mut fx = system();
    fx.spawn(Vec3::ZERO);
    fx.advance(1.0);
    fx.spawn(Vec3::X);
    assert_eq!(fx.effects().len(), 2);
    fx.advance(0.6);
    assert_eq!(fx.effects().len(), 1);
    assert_eq!(fx.live_particle_count(), params.particle_count);
    fx.advance(1.0);
    assert_eq!(fx.live_particle_count(), 0);
}

#[test]
fn rapid_spawns_do_not_leak() {
    let mut fx = system();
    for i in 0..200 {
        fx.spawn(Vec3::splat(i as f32));
        fx.advance(0.016);
    }
    fx.advance(2.0);
    assert_eq!(fx.live_particle_count(), 0);
}

#[test]
fn same_seed_same_scatter() {
    let mut a = system();
    let mut b = system();
    a.spawn(Vec3::ZERO);
    b.spawn(Vec3::ZERO);
    let pa: Vec<_> = a.particles().map(|p| p.offset).collect();
    let pb: Vec<_> = b.particles().map(|p| p.offset).collect();
    assert_eq!(pa, pb);
}
