//! Idle motion for sculptures and interactive pieces, driven by the
//! per-category behaviour table.

use crate::constants::{HUE_LIGHTNESS, HUE_SATURATION};
use crate::entity::{hex_from_rgb, EntityId, PickableEntity, Transform};
use fnv::FnvHashMap;
use glam::Quat;

/// Animation state owned by the navigator. Spin is kept here as an angle per
/// exhibit and composed on top of the scene's transform; only materials are
/// written back to the exhibits.
#[derive(Debug, Default)]
pub struct ExhibitAnimator {
    time: f32,
    spins: FnvHashMap<EntityId, f32>,
}

impl ExhibitAnimator {
    /// Accumulated spin about the vertical axis, radians.
    #[inline]
    fn spin(&self, id: EntityId) -> f32 {
        self.spins.get(&id).copied().unwrap_or(0.0)
    }

    /// The exhibit's transform with its idle spin applied.
    pub fn animated_transform(&self, entity: &PickableEntity) -> Transform {
        let spin = self.spin(entity.id);
        if spin == 0.0 {
            return entity.transform;
        }
        Transform {
            position: entity.transform.position,
            rotation: (Quat::from_rotation_y(spin) * entity.transform.rotation).normalize(),
        }
    }

    /// Spin animated exhibits (alternating direction) and cycle hues. The
    /// hovered exhibit keeps its highlight material.
    pub fn advance(&mut self, dt: f32, entities: &mut [PickableEntity], hovered: Option<EntityId>) {
        self.time += dt;
        let animated = entities
            .iter_mut()
            .filter_map(|e| e.category().map(|c| (c.behavior(), e)))
            .filter(|(b, _)| b.spin_rate != 0.0 || b.hue_cycle_rate != 0.0);
        for (index, (behavior, entity)) in animated.enumerate() {
            if behavior.spin_rate != 0.0 {
                let sign = if index % 2 == 0 { 1.0 } else { -1.0 };
                let angle = self.spins.entry(entity.id).or_insert(0.0);
                *angle = (*angle + dt * behavior.spin_rate * sign).rem_euclid(std::f32::consts::TAU);
            }
            if behavior.hue_cycle_rate != 0.0 && hovered != Some(entity.id) {
                let hue = (self.time * behavior.hue_cycle_rate).rem_euclid(1.0);
                entity.material.color =
                    hex_from_rgb(hsl_to_rgb(hue, HUE_SATURATION, HUE_LIGHTNESS));
            }
        }
    }
}

/// HSL with all components in [0, 1].
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> [f32; 3] {
    if s <= 0.0 {
        return [l, l, l];
    }
    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    let channel = |t: f32| {
        let t = t.rem_euclid(1.0);
        if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 0.5 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * (2.0 / 3.0 - t) * 6.0
        } else {
            p
        }
    };
    [channel(h + 1.0 / 3.0), channel(h), channel(h - 1.0 / 3.0)]
}
