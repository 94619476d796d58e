// Shared fixtures for gallery-core integration tests.

#![allow(dead_code)]
use gallery_core::*;
use glam::Vec3;

#[derive(Debug, Default)]
pub struct RecordingDisplay {
    pub tooltip: Option<(String, f32, f32)>,
    pub info: Option<(String, String, String)>,
    pub cursor: CursorKind,
    pub reticle: bool,
    pub room: Option<String>,
    pub tooltip_shows: usize,
}

impl DisplaySink for RecordingDisplay {
    fn show_tooltip(&mut self, text: &str, x: f32, y: f32) {
        self.tooltip = Some((text.to_string(), x, y));
        self.tooltip_shows += 1;
    }
    fn hide_tooltip(&mut self) {
        self.tooltip = None;
    }
    fn show_info_panel(&mut self, title: &str, artist: &str, description: &str) {
        self.info = Some((title.into(), artist.into(), description.into()));
    }
    fn hide_info_panel(&mut self) {
        self.info = None;
    }
    fn set_cursor_appearance(&mut self, kind: CursorKind) {
        self.cursor = kind;
    }
    fn set_reticle_visible(&mut self, visible: bool) {
        self.reticle = visible;
    }
    fn set_room_label(&mut self, text: &str) {
        self.room = Some(text.to_string());
    }
}

pub fn info(title: &str, category: Category) -> ExhibitInfo {
    ExhibitInfo {
        title: title.to_string(),
        artist: format!("{} Artist", title),
        description: format!("About {}", title),
        category,
    }
}

/// A thin wall-hung canvas facing +Z.
pub fn painting(id: u32, title: &str, at: Vec3, color: u32) -> PickableEntity {
    PickableEntity::new(
        EntityId(id),
        Transform::from_position(at),
        Bounds::Box {
            half_extents: Vec3::new(1.0, 1.5, 0.1),
        },
        Some(info(title, Category::Painting)),
        Material::solid(color),
    )
}

pub fn sculpture(id: u32, title: &str, at: Vec3, category: Category) -> PickableEntity {
    PickableEntity::new(
        EntityId(id),
        Transform::from_position(at),
        Bounds::Sphere { radius: 1.0 },
        Some(info(title, category)),
        Material::solid(0x8e44ad),
    )
}

pub fn scenery(id: u32, at: Vec3) -> PickableEntity {
    PickableEntity::new(
        EntityId(id),
        Transform::from_position(at),
        Bounds::Box {
            half_extents: Vec3::new(1.0, 1.5, 0.1),
        },
        None,
        Material::solid(0x333333),
    )
}

// Viewer starts at (0, 1.6, 10) facing -Z with a 1280x720 viewport, so the
// centre pixel looks straight down the hall and x = 452 lands on x = -4.
pub const CENTER: (f32, f32) = (640.0, 360.0);
pub const LEFT_OF_CENTER: (f32, f32) = (452.0, 360.0);
pub const TOP_LEFT: (f32, f32) = (5.0, 5.0);

/// Painting A dead ahead and painting B to its left, both on the z = 0 plane.
pub fn two_paintings() -> Vec<PickableEntity> {
    vec![
        painting(1, "Abstract Harmony", Vec3::new(0.0, 1.6, 0.0), 0x4a90e2),
        painting(2, "Digital Dreams", Vec3::new(-4.0, 1.6, 0.0), 0xe94b3c),
    ]
}

pub fn navigator_with(entities: Vec<PickableEntity>) -> Navigator {
    Navigator::new(NavigationConfig::default(), entities).expect("default config is valid")
}

pub fn move_to(nav: &mut Navigator, d: &mut RecordingDisplay, at: (f32, f32)) {
    nav.handle_event(
        InputEvent::PointerMove {
            x: at.0,
            y: at.1,
            dx: 0.0,
            dy: 0.0,
        },
        d,
    );
}

pub fn press(nav: &mut Navigator, d: &mut RecordingDisplay, at: (f32, f32)) -> Option<HostRequest> {
    nav.handle_event(
        InputEvent::PointerDown {
            x: at.0,
            y: at.1,
            button: PointerButton::Primary,
            region: SurfaceRegion::Scene,
        },
        d,
    )
}

pub fn lock(nav: &mut Navigator, d: &mut RecordingDisplay) {
    let req = press(nav, d, TOP_LEFT);
    assert_eq!(req, Some(HostRequest::RequestPointerLock));
    nav.handle_event(InputEvent::LockStateChanged { locked: true }, d);
    assert_eq!(nav.lock_state(), PointerLockState::Locked);
}

pub fn key(nav: &mut Navigator, d: &mut RecordingDisplay, code: &str, pressed: bool) -> Option<HostRequest> {
    nav.handle_event(
        InputEvent::KeyChange {
            key: Key::from_code(code),
            pressed,
        },
        d,
    )
}
