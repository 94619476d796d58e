#![cfg(target_arch = "wasm32")]
//! Browser host for the gallery navigator.
//!
//! The page's renderer constructs a `GalleryApp`, registers its exhibits,
//! calls `start()`, and each frame reads back the camera pose, exhibit
//! materials and click-effect particles to draw.

use gallery_core::{
    Bounds, Category, EntityId, ExhibitInfo, Material, NavigationConfig, Navigator,
    PickableEntity, Transform,
};
use gallery_core::constants::{EFFECT_COLOR, EFFECT_PARTICLE_RADIUS};
use glam::{Quat, Vec3};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod app;
mod constants;
mod dom;
mod events;
mod frame;
mod input;

use app::AppState;

fn wire_canvas_resize(state: &Rc<RefCell<AppState>>) {
    state.borrow_mut().sync_viewport();
    let state_resize = state.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        state_resize.borrow_mut().sync_viewport();
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("gallery-web starting");
    Ok(())
}

#[wasm_bindgen]
#[derive(Clone, Copy, Debug)]
pub enum ExhibitKind {
    Painting,
    Sculpture,
    Interactive,
}

impl From<ExhibitKind> for Category {
    fn from(k: ExhibitKind) -> Self {
        match k {
            ExhibitKind::Painting => Category::Painting,
            ExhibitKind::Sculpture => Category::Sculpture,
            ExhibitKind::Interactive => Category::Interactive,
        }
    }
}

#[wasm_bindgen]
#[derive(Clone, Copy, Debug)]
pub enum ExhibitShape {
    /// `size_x` is the radius; the other sizes are ignored.
    Sphere,
    /// Sizes are half extents along the exhibit's local axes.
    Box,
}

fn init(canvas_id: &str) -> anyhow::Result<AppState> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", canvas_id))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let nav = Navigator::new(NavigationConfig::default(), Vec::new())?;
    Ok(AppState {
        nav,
        display: dom::DomDisplay::new(document),
        canvas,
    })
}

#[wasm_bindgen]
pub struct GalleryApp {
    state: Rc<RefCell<AppState>>,
    started: bool,
}

#[wasm_bindgen]
impl GalleryApp {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<GalleryApp, JsValue> {
        let state = init(canvas_id).map_err(|e| {
            log::error!("init error: {:?}", e);
            JsValue::from_str(&e.to_string())
        })?;
        Ok(GalleryApp {
            state: Rc::new(RefCell::new(state)),
            started: false,
        })
    }

    /// Register or replace an exhibit. An empty title makes it scenery that
    /// picking ignores.
    #[allow(clippy::too_many_arguments)]
    pub fn add_exhibit(
        &self,
        id: u32,
        kind: ExhibitKind,
        shape: ExhibitShape,
        x: f32,
        y: f32,
        z: f32,
        yaw: f32,
        size_x: f32,
        size_y: f32,
        size_z: f32,
        title: String,
        artist: String,
        description: String,
        color: u32,
    ) {
        let bounds = match shape {
            ExhibitShape::Sphere => Bounds::Sphere { radius: size_x },
            ExhibitShape::Box => Bounds::Box {
                half_extents: Vec3::new(size_x, size_y, size_z),
            },
        };
        let transform = Transform {
            position: Vec3::new(x, y, z),
            rotation: Quat::from_rotation_y(yaw),
        };
        let info = ExhibitInfo {
            title,
            artist,
            description,
            category: kind.into(),
        };
        self.state.borrow_mut().nav.add_entity(PickableEntity::new(
            EntityId(id),
            transform,
            bounds,
            Some(info),
            Material::solid(color),
        ));
    }

    /// Wire DOM input and start the frame loop. Calling again is a no-op.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        wire_canvas_resize(&self.state);
        events::wire_keyboard(self.state.clone());
        events::wire_pointer_handlers(self.state.clone());
        events::wire_pointer_lock(self.state.clone());
        self.state.borrow_mut().reset();
        let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(self.state.clone())));
        frame::start_loop(frame_ctx);
        log::info!(
            "[nav] started with {} exhibits",
            self.state.borrow().nav.entities().len()
        );
    }

    pub fn reset(&self) {
        self.state.borrow_mut().reset();
    }

    /// Override the viewport used for picking, in CSS pixels.
    pub fn resize(&self, width: f32, height: f32) {
        self.state.borrow_mut().nav.handle_resize(width, height);
    }

    pub fn camera_pose(&self) -> js_sys::Float32Array {
        let st = self.state.borrow();
        let v = st.nav.viewer();
        js_sys::Float32Array::from(&input::pack_pose(v.position, v.rotation())[..])
    }

    pub fn exhibit_color(&self, id: u32) -> Option<u32> {
        self.state
            .borrow()
            .nav
            .entity(EntityId(id))
            .map(|e| e.material.color)
    }

    /// Empty when the id is unknown.
    pub fn exhibit_material(&self, id: u32) -> js_sys::Float32Array {
        let st = self.state.borrow();
        match st.nav.entity(EntityId(id)) {
            Some(e) => js_sys::Float32Array::from(&input::pack_material(&e.material)[..]),
            None => js_sys::Float32Array::new_with_length(0),
        }
    }

    /// Position and rotation; animated exhibits turn every frame.
    pub fn exhibit_transform(&self, id: u32) -> js_sys::Float32Array {
        let st = self.state.borrow();
        match st.nav.exhibit_transform(EntityId(id)) {
            Some(t) => {
                js_sys::Float32Array::from(&input::pack_pose(t.position, t.rotation)[..])
            }
            None => js_sys::Float32Array::new_with_length(0),
        }
    }

    pub fn particles(&self) -> js_sys::Float32Array {
        let st = self.state.borrow();
        js_sys::Float32Array::from(&input::pack_particles(st.nav.effects().particles())[..])
    }

    /// Particle colour (rgb) and base radius for drawing `particles()`.
    pub fn effect_style(&self) -> js_sys::Float32Array {
        let [r, g, b] = gallery_core::entity::rgb_from_hex(EFFECT_COLOR);
        js_sys::Float32Array::from(&[r, g, b, EFFECT_PARTICLE_RADIUS][..])
    }

    pub fn room_label(&self) -> String {
        self.state.borrow().nav.current_room().label().to_string()
    }
}
