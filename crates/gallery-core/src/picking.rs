//! Screen-point ray casting against exhibit bounds.

use crate::constants::{DEFAULT_VIEWPORT, Z_FAR, Z_NEAR};
use crate::entity::{Bounds, EntityId, PickableEntity, Transform};
use crate::orientation::Orientation;
use glam::{Mat4, Vec2, Vec3, Vec4};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.dir * t
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PickHit {
    pub entity: EntityId,
    pub point: Vec3,
    pub distance: f32,
}

/// Projection parameters needed to turn viewport pixels into rays.
#[derive(Clone, Debug)]
pub struct PickCamera {
    fov_y_radians: f32,
    width: f32,
    height: f32,
    inv_projection: Mat4,
}

impl PickCamera {
    pub fn new(fov_y_radians: f32, width: f32, height: f32) -> Self {
        let mut cam = Self {
            fov_y_radians,
            width: 1.0,
            height: 1.0,
            inv_projection: Mat4::IDENTITY,
        };
        cam.resize(width, height);
        cam
    }

    /// Recompute the cached inverse projection for a new viewport size.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = if width.is_finite() { width.max(1.0) } else { 1.0 };
        self.height = if height.is_finite() { height.max(1.0) } else { 1.0 };
        self.inv_projection = self.projection().inverse();
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }

    #[inline]
    pub fn viewport(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y_radians, self.aspect(), Z_NEAR, Z_FAR)
    }

    /// Normalized device coordinates for a pixel (origin top-left, y down).
    #[inline]
    pub fn ndc(&self, screen: Vec2) -> Vec2 {
        Vec2::new(
            2.0 * screen.x / self.width - 1.0,
            1.0 - 2.0 * screen.y / self.height,
        )
    }

    /// World-space ray from `eye` through a viewport pixel.
    pub fn ray_through(&self, screen: Vec2, eye: Vec3, orientation: &Orientation) -> Ray {
        let ndc = self.ndc(screen);
        let p_far = self.inv_projection * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let view_dir = (p_far.truncate() / p_far.w).normalize_or_zero();
        let dir = (orientation.quat() * view_dir).normalize_or_zero();
        Ray { origin: eye, dir }
    }
}

impl Default for PickCamera {
    fn default() -> Self {
        Self::new(
            crate::constants::fov_y_radians(),
            DEFAULT_VIEWPORT[0],
            DEFAULT_VIEWPORT[1],
        )
    }
}

/// Nearest positive hit of a normalized ray against a sphere. A ray starting
/// inside the sphere reports where it leaves.
#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let sq = disc.sqrt();
    let t_near = -b - sq;
    if t_near > 0.0 {
        return Some(t_near);
    }
    let t_far = -b + sq;
    (t_far > 0.0).then_some(t_far)
}

/// Slab test in the box's local frame.
pub fn ray_oriented_box(ray: &Ray, transform: &Transform, half: Vec3) -> Option<f32> {
    let inv = transform.rotation.inverse();
    let o = inv * (ray.origin - transform.position);
    let d = inv * ray.dir;

    let mut t_min = f32::NEG_INFINITY;
    let mut t_max = f32::INFINITY;
    for axis in 0..3 {
        let (oa, da, ha) = (o[axis], d[axis], half[axis]);
        if da.abs() < 1e-8 {
            if oa.abs() > ha {
                return None;
            }
            continue;
        }
        let t1 = (-ha - oa) / da;
        let t2 = (ha - oa) / da;
        t_min = t_min.max(t1.min(t2));
        t_max = t_max.min(t1.max(t2));
        if t_max < t_min {
            return None;
        }
    }
    if t_min > 0.0 {
        Some(t_min)
    } else if t_max > 0.0 {
        Some(t_max)
    } else {
        None
    }
}

/// Ray test against `entity`'s bounds placed at `transform`.
pub fn intersect(ray: &Ray, entity: &PickableEntity, transform: &Transform) -> Option<f32> {
    match entity.bounds {
        Bounds::Sphere { radius } => ray_sphere(ray.origin, ray.dir, transform.position, radius),
        Bounds::Box { half_extents } => ray_oriented_box(ray, transform, half_extents),
    }
}

/// Closest interactive exhibit along `ray`. Exhibits without a title are
/// skipped even when the ray passes through them.
pub fn pick_ray(ray: &Ray, entities: &[PickableEntity]) -> Option<PickHit> {
    pick_ray_with(ray, entities, |e| e.transform)
}

/// As [`pick_ray`], with each exhibit posed by `pose`.
pub fn pick_ray_with<F>(ray: &Ray, entities: &[PickableEntity], pose: F) -> Option<PickHit>
where
    F: Fn(&PickableEntity) -> Transform,
{
    if ray.dir == Vec3::ZERO {
        return None;
    }
    let mut best = None::<PickHit>;
    for e in entities.iter().filter(|e| e.is_interactive()) {
        if let Some(t) = intersect(ray, e, &pose(e)) {
            match best {
                Some(b) if t >= b.distance => {}
                _ => {
                    best = Some(PickHit {
                        entity: e.id,
                        point: ray.at(t),
                        distance: t,
                    })
                }
            }
        }
    }
    best
}

pub fn pick(
    camera: &PickCamera,
    screen: Vec2,
    eye: Vec3,
    orientation: &Orientation,
    entities: &[PickableEntity],
) -> Option<PickHit> {
    let ray = camera.ray_through(screen, eye, orientation);
    pick_ray(&ray, entities)
}
