//! Hover highlight with exact material restore.
//!
//! The first time an exhibit is hovered its material is captured into a
//! per-exhibit table and never recaptured, so a restore always puts back the
//! material the scene originally supplied rather than a highlighted copy.

use crate::display::{tooltip_text, CursorKind, DisplaySink};
use crate::entity::{find_mut, EntityId, Material, PickableEntity};
use crate::picking::PickHit;
use fnv::FnvHashMap;
use glam::Vec2;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum HoverState {
    #[default]
    Idle,
    Hovering { entity: EntityId, base: Material },
}

#[derive(Debug)]
pub struct HoverStateMachine {
    state: HoverState,
    base_materials: FnvHashMap<EntityId, Material>,
    hover_material: Material,
}

impl HoverStateMachine {
    pub fn new(hover_material: Material) -> Self {
        Self {
            state: HoverState::Idle,
            base_materials: FnvHashMap::default(),
            hover_material,
        }
    }

    #[inline]
    pub fn state(&self) -> HoverState {
        self.state
    }

    #[inline]
    pub fn hovered(&self) -> Option<EntityId> {
        match self.state {
            HoverState::Hovering { entity, .. } => Some(entity),
            HoverState::Idle => None,
        }
    }

    /// The material captured for `id` before any highlight touched it.
    #[inline]
    pub fn base_material(&self, id: EntityId) -> Option<Material> {
        self.base_materials.get(&id).copied()
    }

    /// Feed one pick result taken at `cursor`.
    pub fn on_pick(
        &mut self,
        hit: Option<&PickHit>,
        cursor: Vec2,
        entities: &mut [PickableEntity],
        display: &mut dyn DisplaySink,
    ) {
        let target = hit.map(|h| h.entity);
        if target.is_some() && target == self.hovered() {
            // Same exhibit: only the tooltip follows the cursor.
            if let Some(title) = target
                .and_then(|id| entities.iter().find(|e| e.id == id))
                .and_then(|e| e.title())
            {
                display.show_tooltip(&tooltip_text(title), cursor.x, cursor.y);
            }
            return;
        }

        self.restore(entities);

        let Some(id) = target else {
            display.hide_tooltip();
            display.set_cursor_appearance(CursorKind::Default);
            return;
        };
        let Some(entity) = find_mut(entities, id) else {
            display.hide_tooltip();
            display.set_cursor_appearance(CursorKind::Default);
            return;
        };
        let base = *self
            .base_materials
            .entry(id)
            .or_insert(entity.material);
        entity.material = self.hover_material;
        self.state = HoverState::Hovering { entity: id, base };
        if let Some(title) = entity.title() {
            log::debug!("[hover] enter {:?} \"{}\"", id, title);
            display.show_tooltip(&tooltip_text(title), cursor.x, cursor.y);
        }
        display.set_cursor_appearance(CursorKind::Pointer);
    }

    /// Put back the hovered exhibit's material and return to `Idle`.
    pub fn restore(&mut self, entities: &mut [PickableEntity]) {
        if let HoverState::Hovering { entity, base } = std::mem::take(&mut self.state) {
            if let Some(e) = find_mut(entities, entity) {
                e.material = base;
            }
            log::debug!("[hover] leave {:?}", entity);
        }
    }

    /// The scene replaced exhibit `entity.id` with new data. Its old base is
    /// forgotten; if it is the hovered exhibit, the new material becomes the
    /// base and the highlight is reapplied.
    pub fn on_replaced(&mut self, entity: &mut PickableEntity) {
        self.base_materials.remove(&entity.id);
        if self.hovered() == Some(entity.id) {
            let base = entity.material;
            self.base_materials.insert(entity.id, base);
            entity.material = self.hover_material;
            self.state = HoverState::Hovering {
                entity: entity.id,
                base,
            };
        }
    }

    /// Drop the highlight and its tooltip without picking a new target.
    pub fn clear(&mut self, entities: &mut [PickableEntity], display: &mut dyn DisplaySink) {
        let was_hovering = self.hovered().is_some();
        self.restore(entities);
        display.hide_tooltip();
        if was_hovering {
            display.set_cursor_appearance(CursorKind::Default);
        }
    }
}
