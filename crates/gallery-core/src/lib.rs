pub mod animation;
pub mod config;
pub mod constants;
pub mod display;
pub mod effects;
pub mod entity;
pub mod hover;
pub mod input;
pub mod motion;
pub mod navigator;
pub mod orientation;
pub mod picking;
pub mod pointer_lock;
pub mod room;
pub mod viewer;

pub use config::{ConfigError, EffectParams, NavigationConfig, WalkBounds};
pub use display::{CursorKind, DisplaySink};
pub use effects::{ClickEffect, ClickEffectSystem, Particle};
pub use entity::{
    Bounds, Category, CategoryBehavior, EntityId, ExhibitInfo, Material, PickableEntity,
    Transform,
};
pub use hover::{HoverState, HoverStateMachine};
pub use input::{HostRequest, InputEvent, Key, PointerButton, SurfaceRegion};
pub use motion::{MoveDirection, MovementFlags};
pub use navigator::Navigator;
pub use orientation::Orientation;
pub use picking::{PickCamera, PickHit, Ray};
pub use pointer_lock::{PointerLockSession, PointerLockState};
pub use room::Room;
pub use viewer::Viewer;
