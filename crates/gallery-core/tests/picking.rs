mod common;

use common::*;
use gallery_core::picking::{pick, pick_ray, ray_oriented_box, ray_sphere};
use gallery_core::*;
use glam::{Quat, Vec2, Vec3};

fn eye() -> Vec3 {
    Vec3::new(0.0, 1.6, 10.0)
}

#[test]
fn centre_pixel_hits_the_painting_ahead() {
    let cam = PickCamera::default();
    let entities = two_paintings();
    let hit = pick(&cam, Vec2::new(CENTER.0, CENTER.1), eye(), &Orientation::default(), &entities)
        .expect("painting straight ahead");
    assert_eq!(hit.entity, EntityId(1));
    assert!((hit.distance - 9.9).abs() < 1e-3);
    assert!((hit.point.z - 0.1).abs() < 1e-3);
}

#[test]
fn off_centre_pixel_hits_the_side_painting() {
    let cam = PickCamera::default();
    let entities = two_paintings();
    let hit = pick(
        &cam,
        Vec2::new(LEFT_OF_CENTER.0, LEFT_OF_CENTER.1),
        eye(),
        &Orientation::default(),
        &entities,
    );
    assert_eq!(hit.map(|h| h.entity), Some(EntityId(2)));
}

#[test]
fn nearest_entity_wins() {
    let entities = vec![
        painting(1, "Far", Vec3::new(0.0, 1.6, -10.0), 0x111111),
        painting(2, "Near", Vec3::new(0.0, 1.6, 2.0), 0x222222),
        painting(3, "Middle", Vec3::new(0.0, 1.6, -2.0), 0x333333),
    ];
    let ray = Ray {
        origin: eye(),
        dir: Vec3::NEG_Z,
    };
    let hit = pick_ray(&ray, &entities).expect("three stacked paintings");
    assert_eq!(hit.entity, EntityId(2));
}

#[test]
fn untitled_entities_are_transparent_to_picking() {
    let mut entities = two_paintings();
    entities.insert(0, scenery(9, Vec3::new(0.0, 1.6, 5.0)));
    entities.push(painting(10, "", Vec3::new(0.0, 1.6, 3.0), 0x000000));
    let ray = Ray {
        origin: eye(),
        dir: Vec3::NEG_Z,
    };
    let hit = pick_ray(&ray, &entities).expect("titled painting behind the scenery");
    assert_eq!(hit.entity, EntityId(1));
}

#[test]
fn empty_view_reports_no_hit() {
    let cam = PickCamera::default();
    let entities = two_paintings();
    assert!(pick(&cam, Vec2::new(TOP_LEFT.0, TOP_LEFT.1), eye(), &Orientation::default(), &entities).is_none());
    // Turned around: everything is behind the viewer.
    let back = Orientation::new(std::f32::consts::PI, 0.0);
    assert!(pick(&cam, Vec2::new(CENTER.0, CENTER.1), eye(), &back, &entities).is_none());
}

#[test]
fn sphere_hit_from_inside_reports_exit() {
    let t = ray_sphere(Vec3::ZERO, Vec3::X, Vec3::ZERO, 3.0).expect("inside");
    assert!((t - 3.0).abs() < 1e-5);
    assert!(ray_sphere(Vec3::ZERO, Vec3::X, Vec3::new(-10.0, 0.0, 0.0), 3.0).is_none());
}

#[test]
fn rotated_box_uses_its_own_axes() {
    // A long thin box along x, turned 90 degrees so it lies along z.
    let t = Transform {
        position: Vec3::ZERO,
        rotation: Quat::from_rotation_y(std::f32::consts::FRAC_PI_2),
    };
    let half = Vec3::new(4.0, 0.5, 0.5);
    let down_z = Ray {
        origin: Vec3::new(0.0, 0.0, 10.0),
        dir: Vec3::NEG_Z,
    };
    let hit = ray_oriented_box(&down_z, &t, half).expect("box lies along z");
    assert!((hit - 6.0).abs() < 1e-4);
    let offset = Ray {
        origin: Vec3::new(2.0, 0.0, 10.0),
        dir: Vec3::NEG_Z,
    };
    assert!(ray_oriented_box(&offset, &t, half).is_none());
}

#[test]
fn resize_changes_which_entity_is_under_a_pixel() {
    let entities = two_paintings();
    let mut cam = PickCamera::default();
    let px = Vec2::new(LEFT_OF_CENTER.0, LEFT_OF_CENTER.1);
    assert!(pick(&cam, px, eye(), &Orientation::default(), &entities).is_some());
    // A square viewport of the same height is narrower: the same pixel is now
    // right of centre.
    cam.resize(720.0, 720.0);
    assert!((cam.aspect() - 1.0).abs() < 1e-6);
    let hit = pick(&cam, px, eye(), &Orientation::default(), &entities);
    assert_ne!(hit.map(|h| h.entity), Some(EntityId(2)));
}

#[test]
fn degenerate_viewport_is_clamped() {
    let mut cam = PickCamera::default();
    cam.resize(0.0, f32::NAN);
    assert_eq!(cam.viewport(), Vec2::ONE);
    let ray = cam.ray_through(Vec2::ZERO, eye(), &Orientation::default());
    assert!(ray.dir.is_finite());
}
