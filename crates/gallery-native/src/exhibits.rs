//! The demo collection the native host walks through: six named canvases on
//! the side walls, six collection pieces on the end walls, four sculptures on
//! pedestals and the installation in the centre.

use gallery_core::{Bounds, Category, EntityId, ExhibitInfo, Material, PickableEntity, Transform};
use glam::Vec3;

const CANVAS_HALF: Vec3 = Vec3::new(1.5, 1.1, 0.05);
const FRAME_COLOR: u32 = 0x8b4513;

struct Canvas {
    title: &'static str,
    artist: &'static str,
    description: &'static str,
    at: [f32; 3],
}

const CANVASES: [Canvas; 6] = [
    Canvas {
        title: "Abstract Harmony",
        artist: "Elena Vasquez",
        description: "A vibrant exploration of color and form, representing the harmony between chaos and order in modern life.",
        at: [-35.0, 2.5, -25.0],
    },
    Canvas {
        title: "Digital Dreams",
        artist: "Marcus Chen",
        description: "This piece explores the intersection of technology and human consciousness in the digital age.",
        at: [-35.0, 2.5, 0.0],
    },
    Canvas {
        title: "Ocean's Memory",
        artist: "Isabella Rossi",
        description: "Inspired by childhood memories of the Mediterranean, this artwork captures the eternal dance of waves.",
        at: [-35.0, 2.5, 25.0],
    },
    Canvas {
        title: "Urban Pulse",
        artist: "David Kim",
        description: "The rhythm and energy of city life translated into bold strokes and dynamic composition.",
        at: [35.0, 2.5, -25.0],
    },
    Canvas {
        title: "Quantum Fields",
        artist: "Dr. Sarah Williams",
        description: "A scientific visualization of quantum mechanics made beautiful through artistic interpretation.",
        at: [35.0, 2.5, 0.0],
    },
    Canvas {
        title: "Ancient Futures",
        artist: "Kofi Asante",
        description: "Bridging traditional African art with futuristic visions, exploring cultural continuity.",
        at: [35.0, 2.5, 25.0],
    },
];

const END_WALL: [[f32; 3]; 6] = [
    [-25.0, 2.5, -35.0],
    [0.0, 2.5, -35.0],
    [25.0, 2.5, -35.0],
    [-25.0, 2.5, 35.0],
    [0.0, 2.5, 35.0],
    [25.0, 2.5, 35.0],
];

struct Piece {
    title: &'static str,
    artist: &'static str,
    description: &'static str,
    at: [f32; 3],
    bounds: Bounds,
    material: Material,
}

fn sculptures() -> [Piece; 4] {
    [
        Piece {
            title: "Twisted Reality",
            artist: "Alberto Mendez",
            description: "A bronze sculpture exploring the malleability of perception and reality.",
            at: [-15.0, 1.5, -15.0],
            bounds: Bounds::Sphere { radius: 1.4 },
            material: Material {
                shininess: 100.0,
                ..Material::solid(0xcd7f32)
            },
        },
        Piece {
            title: "Crystalline Dreams",
            artist: "Yuki Tanaka",
            description: "Geometric forms that capture light and shadow in perpetual dance.",
            at: [15.0, 1.5, -15.0],
            bounds: Bounds::Sphere { radius: 1.5 },
            material: Material {
                shininess: 100.0,
                opacity: 0.8,
                ..Material::solid(0x87ceeb)
            },
        },
        Piece {
            title: "Flowing Time",
            artist: "Marie Dubois",
            description: "An exploration of temporal flow through fluid sculptural forms.",
            at: [-15.0, 1.5, 15.0],
            bounds: Bounds::Sphere { radius: 1.2 },
            material: Material {
                shininess: 100.0,
                ..Material::solid(0xffffff)
            },
        },
        Piece {
            title: "Digital Monolith",
            artist: "Alex Rodriguez",
            description: "A commentary on our digital age rendered in physical form.",
            at: [15.0, 1.5, 15.0],
            bounds: Bounds::Box {
                half_extents: Vec3::ONE,
            },
            material: Material {
                shininess: 50.0,
                ..Material::solid(0x333333)
            },
        },
    ]
}

fn exhibit(
    id: u32,
    at: [f32; 3],
    bounds: Bounds,
    info: ExhibitInfo,
    material: Material,
) -> PickableEntity {
    PickableEntity::new(
        EntityId(id),
        Transform::from_position(Vec3::from_array(at)),
        bounds,
        Some(info),
        material,
    )
}

pub fn demo_collection() -> Vec<PickableEntity> {
    let mut out = Vec::with_capacity(CANVASES.len() + END_WALL.len() + 5);
    let mut next_id = 1;

    for c in &CANVASES {
        out.push(exhibit(
            next_id,
            c.at,
            Bounds::Box {
                half_extents: CANVAS_HALF,
            },
            ExhibitInfo {
                title: c.title.into(),
                artist: c.artist.into(),
                description: c.description.into(),
                category: Category::Painting,
            },
            Material::solid(FRAME_COLOR),
        ));
        next_id += 1;
    }

    for (i, at) in END_WALL.iter().enumerate() {
        out.push(exhibit(
            next_id,
            *at,
            Bounds::Box {
                half_extents: CANVAS_HALF,
            },
            ExhibitInfo {
                title: format!("Gallery Collection {}", i + 7),
                artist: "Various Artists".into(),
                description: "Part of our permanent collection showcasing contemporary artistic expression.".into(),
                category: Category::Painting,
            },
            Material::solid(FRAME_COLOR),
        ));
        next_id += 1;
    }

    for p in sculptures() {
        out.push(exhibit(
            next_id,
            p.at,
            p.bounds,
            ExhibitInfo {
                title: p.title.into(),
                artist: p.artist.into(),
                description: p.description.into(),
                category: Category::Sculpture,
            },
            p.material,
        ));
        next_id += 1;
    }

    out.push(exhibit(
        next_id,
        [0.0, 2.0, 0.0],
        Bounds::Box {
            half_extents: Vec3::splat(2.0),
        },
        ExhibitInfo {
            title: "Interactive Harmony".into(),
            artist: "Virtual Gallery Collective".into(),
            description: "An interactive installation that responds to visitor presence. Watch as it changes color and form based on your position in the gallery.".into(),
            category: Category::Interactive,
        },
        Material {
            shininess: 100.0,
            ..Material::solid(0xff6b6b)
        },
    ));

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_every_piece_is_pickable() {
        let all = demo_collection();
        assert_eq!(all.len(), 17);
        let mut ids: Vec<_> = all.iter().map(|e| e.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), all.len());
        assert!(all.iter().all(|e| e.is_interactive()));
    }
}
