//! The navigation context: owns the viewer, capture session, hover state,
//! click effects and the exhibit list, and routes input between them.
//!
//! Pointer motion goes to exactly one consumer: look while captured, picking
//! and hover otherwise.

use crate::animation::ExhibitAnimator;
use crate::config::{ConfigError, NavigationConfig};
use crate::constants::{DEFAULT_VIEWPORT, RESET_ROOM_LABEL};
use crate::display::{CursorKind, DisplaySink};
use crate::effects::ClickEffectSystem;
use crate::entity::{find, EntityId, PickableEntity, Transform};
use crate::hover::{HoverState, HoverStateMachine};
use crate::input::{HostRequest, InputEvent, Key, PointerButton, SurfaceRegion};
use crate::motion;
use crate::picking::{self, PickCamera, PickHit};
use crate::pointer_lock::{LockTransition, PointerLockSession, PointerLockState};
use crate::room;
use crate::viewer::Viewer;
use glam::Vec2;

pub struct Navigator {
    config: NavigationConfig,
    viewer: Viewer,
    lock: PointerLockSession,
    hover: HoverStateMachine,
    effects: ClickEffectSystem,
    animator: ExhibitAnimator,
    camera: PickCamera,
    entities: Vec<PickableEntity>,
}

impl Navigator {
    pub fn new(
        config: NavigationConfig,
        entities: Vec<PickableEntity>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let dropped = entities.iter().filter(|e| !e.is_interactive()).count();
        if dropped > 0 {
            log::debug!("[nav] {} exhibits without a title will not be pickable", dropped);
        }
        let camera = PickCamera::new(
            config.fov_y_degrees.to_radians(),
            DEFAULT_VIEWPORT[0],
            DEFAULT_VIEWPORT[1],
        );
        Ok(Self {
            viewer: Viewer::from_config(&config),
            lock: PointerLockSession::default(),
            hover: HoverStateMachine::new(config.hover_material),
            effects: ClickEffectSystem::new(config.effects, config.effect_seed),
            animator: ExhibitAnimator::default(),
            camera,
            entities,
            config,
        })
    }

    #[inline]
    pub fn config(&self) -> &NavigationConfig {
        &self.config
    }

    #[inline]
    pub fn viewer(&self) -> &Viewer {
        &self.viewer
    }

    #[inline]
    pub fn lock_state(&self) -> PointerLockState {
        self.lock.state()
    }

    #[inline]
    pub fn hover_state(&self) -> HoverState {
        self.hover.state()
    }

    #[inline]
    pub fn hover(&self) -> &HoverStateMachine {
        &self.hover
    }

    #[inline]
    pub fn effects(&self) -> &ClickEffectSystem {
        &self.effects
    }

    #[inline]
    pub fn camera(&self) -> &PickCamera {
        &self.camera
    }

    #[inline]
    pub fn entities(&self) -> &[PickableEntity] {
        &self.entities
    }

    #[inline]
    pub fn entity(&self, id: EntityId) -> Option<&PickableEntity> {
        find(&self.entities, id)
    }

    /// Register an exhibit after construction. An exhibit with the same id
    /// replaces the previous one, and its material becomes the new restore
    /// target for hover.
    pub fn add_entity(&mut self, mut entity: PickableEntity) {
        if !entity.is_interactive() {
            log::debug!("[nav] {:?} has no title and will not be pickable", entity.id);
        }
        match self.entities.iter_mut().find(|e| e.id == entity.id) {
            Some(slot) => {
                self.hover.on_replaced(&mut entity);
                *slot = entity;
            }
            None => self.entities.push(entity),
        }
    }

    /// Room containing the viewer right now.
    #[inline]
    pub fn current_room(&self) -> room::Room {
        let p = self.viewer.position;
        room::classify_with_threshold(p.x, p.z, self.config.room_threshold)
    }

    /// Clamp a raw frame time into `[0, max_frame_step_sec]`; non-finite
    /// values count as zero.
    #[inline]
    pub fn clamp_step(&self, dt: f32) -> f32 {
        if dt.is_finite() {
            dt.clamp(0.0, self.config.max_frame_step_sec)
        } else {
            0.0
        }
    }

    /// Advance walking, click effects and exhibit animation by one frame.
    pub fn update(&mut self, dt: f32) {
        let dt = self.clamp_step(dt);
        self.viewer.position = motion::integrate(
            dt,
            self.viewer.flags,
            &self.viewer.orientation,
            self.viewer.position,
            self.viewer.speed,
            &self.config.bounds,
        );
        self.effects.advance(dt);
        self.animator
            .advance(dt, &mut self.entities, self.hover.hovered());
    }

    pub fn handle_resize(&mut self, width: f32, height: f32) {
        self.camera.resize(width, height);
        log::debug!(
            "[nav] viewport {}x{} aspect {:.3}",
            self.camera.viewport().x,
            self.camera.viewport().y,
            self.camera.aspect()
        );
    }

    /// Back to the start pose with the pointer released and overlays closed.
    pub fn reset(&mut self, display: &mut dyn DisplaySink) -> Option<HostRequest> {
        log::info!("[nav] reset");
        self.viewer = Viewer::from_config(&self.config);
        self.hover.clear(&mut self.entities, display);
        display.hide_info_panel();
        display.set_room_label(RESET_ROOM_LABEL);
        let was_locked = self.lock.cancel();
        apply_lock_appearance(PointerLockState::Unlocked, display);
        was_locked.then_some(HostRequest::ExitPointerLock)
    }

    pub fn handle_event(
        &mut self,
        event: InputEvent,
        display: &mut dyn DisplaySink,
    ) -> Option<HostRequest> {
        match event {
            InputEvent::PointerMove { x, y, dx, dy } => {
                self.on_pointer_move(Vec2::new(x, y), dx, dy, display);
                None
            }
            InputEvent::KeyChange { key, pressed } => self.on_key(key, pressed, display),
            InputEvent::PointerDown {
                x,
                y,
                button,
                region,
            } => self.on_pointer_down(Vec2::new(x, y), button, region, display),
            InputEvent::LockStateChanged { locked } => {
                match self.lock.on_host_change(locked) {
                    LockTransition::Acquired => {
                        self.hover.clear(&mut self.entities, display);
                        apply_lock_appearance(PointerLockState::Locked, display);
                    }
                    LockTransition::Released => {
                        apply_lock_appearance(PointerLockState::Unlocked, display);
                    }
                    LockTransition::Revoked => return Some(HostRequest::ExitPointerLock),
                    LockTransition::Unchanged => {}
                }
                None
            }
            InputEvent::LockError => {
                self.lock.on_host_error();
                None
            }
        }
    }

    /// Pick at a viewport point from the current viewer pose.
    pub fn pick_at(&self, screen: Vec2) -> Option<PickHit> {
        let ray = self
            .camera
            .ray_through(screen, self.viewer.position, &self.viewer.orientation);
        picking::pick_ray_with(&ray, &self.entities, |e| self.animator.animated_transform(e))
    }

    /// Where the exhibit currently stands, idle spin included.
    pub fn exhibit_transform(&self, id: EntityId) -> Option<Transform> {
        self.entity(id).map(|e| self.animator.animated_transform(e))
    }

    fn on_pointer_move(&mut self, cursor: Vec2, dx: f32, dy: f32, display: &mut dyn DisplaySink) {
        match self.lock.state() {
            PointerLockState::Locked => {
                self.viewer.orientation.apply_pointer_delta(
                    dx,
                    dy,
                    self.config.look_sensitivity,
                    self.config.pitch_margin,
                );
            }
            PointerLockState::Unlocked => {
                let hit = self.pick_at(cursor);
                self.hover
                    .on_pick(hit.as_ref(), cursor, &mut self.entities, display);
            }
        }
    }

    fn on_key(
        &mut self,
        key: Key,
        pressed: bool,
        display: &mut dyn DisplaySink,
    ) -> Option<HostRequest> {
        match key {
            Key::Move(dir) => {
                self.viewer.flags.set(dir, pressed);
                None
            }
            Key::Cancel if pressed => {
                display.hide_info_panel();
                if self.lock.cancel() {
                    apply_lock_appearance(PointerLockState::Unlocked, display);
                    Some(HostRequest::ExitPointerLock)
                } else {
                    None
                }
            }
            Key::Reset if pressed => self.reset(display),
            _ => None,
        }
    }

    fn on_pointer_down(
        &mut self,
        at: Vec2,
        button: PointerButton,
        region: SurfaceRegion,
        display: &mut dyn DisplaySink,
    ) -> Option<HostRequest> {
        if region == SurfaceRegion::Ui || button != PointerButton::Primary {
            return None;
        }
        if self.lock.is_locked() {
            return None;
        }
        match self.pick_at(at) {
            Some(hit) => {
                self.confirm_pick(&hit, display);
                None
            }
            None => {
                display.hide_info_panel();
                self.lock
                    .request()
                    .then_some(HostRequest::RequestPointerLock)
            }
        }
    }

    fn confirm_pick(&mut self, hit: &PickHit, display: &mut dyn DisplaySink) {
        let Some(entity) = find(&self.entities, hit.entity) else {
            return;
        };
        let Some(info) = entity.info.as_ref() else {
            return;
        };
        log::debug!("[pick] hit \"{}\" at {:.2}", info.title, hit.distance);
        display.show_info_panel(&info.title, &info.artist, &info.description);
        let p = entity.transform.position;
        let room = room::classify_with_threshold(p.x, p.z, self.config.room_threshold);
        display.set_room_label(room.label());
        self.effects.spawn(hit.point);
    }
}

fn apply_lock_appearance(state: PointerLockState, display: &mut dyn DisplaySink) {
    match state {
        PointerLockState::Locked => {
            display.set_cursor_appearance(CursorKind::Hidden);
            display.set_reticle_visible(true);
        }
        PointerLockState::Unlocked => {
            display.set_cursor_appearance(CursorKind::Default);
            display.set_reticle_visible(false);
        }
    }
}
