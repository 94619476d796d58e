//! Exhibits supplied by the scene: transform, bounds, metadata and material.

use crate::constants::{HUE_CYCLE_RATE, SPIN_RATE};
use glam::{Quat, Vec3};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Painting,
    Sculpture,
    Interactive,
}

/// Idle animation for a category.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CategoryBehavior {
    /// Rotation about the vertical axis, radians per second.
    pub spin_rate: f32,
    /// Full hue turns per second applied to the material colour.
    pub hue_cycle_rate: f32,
}

impl Category {
    pub fn behavior(self) -> CategoryBehavior {
        match self {
            Category::Painting => CategoryBehavior::default(),
            Category::Sculpture => CategoryBehavior {
                spin_rate: SPIN_RATE,
                hue_cycle_rate: 0.0,
            },
            Category::Interactive => CategoryBehavior {
                spin_rate: SPIN_RATE,
                hue_cycle_rate: HUE_CYCLE_RATE,
            },
        }
    }

    #[inline]
    pub fn is_animated(self) -> bool {
        let b = self.behavior();
        b.spin_rate != 0.0 || b.hue_cycle_rate != 0.0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExhibitInfo {
    pub title: String,
    pub artist: String,
    pub description: String,
    pub category: Category,
}

/// Surface parameters the renderer reads back every frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub color: u32,
    pub emissive: u32,
    pub shininess: f32,
    pub opacity: f32,
}

impl Material {
    /// Shared highlight applied to the hovered exhibit.
    pub const HOVER: Material = Material {
        color: 0xffff00,
        emissive: 0x444400,
        shininess: 100.0,
        opacity: 0.9,
    };

    pub const fn solid(color: u32) -> Self {
        Self {
            color,
            emissive: 0x000000,
            shininess: 30.0,
            opacity: 1.0,
        }
    }

    #[inline]
    pub fn rgb(&self) -> [f32; 3] {
        rgb_from_hex(self.color)
    }
}

#[inline]
pub fn rgb_from_hex(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    ]
}

#[inline]
pub fn hex_from_rgb(rgb: [f32; 3]) -> u32 {
    let to_u8 = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u32;
    (to_u8(rgb[0]) << 16) | (to_u8(rgb[1]) << 8) | to_u8(rgb[2])
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Bounds {
    Sphere { radius: f32 },
    /// Oriented box, aligned with the exhibit's rotation.
    Box { half_extents: Vec3 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Transform {
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            rotation: Quat::IDENTITY,
        }
    }
}

#[derive(Clone, Debug)]
pub struct PickableEntity {
    pub id: EntityId,
    pub transform: Transform,
    pub bounds: Bounds,
    /// Exhibits without a title are treated as scenery and never picked.
    pub info: Option<ExhibitInfo>,
    pub material: Material,
}

impl PickableEntity {
    pub fn new(
        id: EntityId,
        transform: Transform,
        bounds: Bounds,
        info: Option<ExhibitInfo>,
        material: Material,
    ) -> Self {
        Self {
            id,
            transform,
            bounds,
            info,
            material,
        }
    }

    #[inline]
    pub fn is_interactive(&self) -> bool {
        self.info.as_ref().is_some_and(|i| !i.title.is_empty())
    }

    #[inline]
    pub fn title(&self) -> Option<&str> {
        self.info
            .as_ref()
            .map(|i| i.title.as_str())
            .filter(|t| !t.is_empty())
    }

    #[inline]
    pub fn category(&self) -> Option<Category> {
        self.info.as_ref().map(|i| i.category)
    }
}

#[inline]
pub fn find(entities: &[PickableEntity], id: EntityId) -> Option<&PickableEntity> {
    entities.iter().find(|e| e.id == id)
}

#[inline]
pub fn find_mut(entities: &mut [PickableEntity], id: EntityId) -> Option<&mut PickableEntity> {
    entities.iter_mut().find(|e| e.id == id)
}
