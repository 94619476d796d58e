//! Desktop host: drives the gallery navigator from winit input.
//!
//! Controls: click empty space to capture the mouse, WASD or arrows to walk,
//! Escape to release, R to reset. Click an exhibit (while free) to inspect it.

mod display;
mod exhibits;

use std::time::Instant;

use display::WindowDisplay;
use gallery_core::{
    CursorKind, DisplaySink, HostRequest, InputEvent, Key, NavigationConfig, Navigator, PointerButton, PointerLockState,
    SurfaceRegion,
};
use winit::{
    event::*,
    event_loop::{ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::WindowBuilder,
};

/// Host key code names understood by `Key::from_code`.
fn key_code_name(code: KeyCode) -> &'static str {
    match code {
        KeyCode::KeyW => "KeyW",
        KeyCode::KeyA => "KeyA",
        KeyCode::KeyS => "KeyS",
        KeyCode::KeyD => "KeyD",
        KeyCode::KeyR => "KeyR",
        KeyCode::ArrowUp => "ArrowUp",
        KeyCode::ArrowDown => "ArrowDown",
        KeyCode::ArrowLeft => "ArrowLeft",
        KeyCode::ArrowRight => "ArrowRight",
        KeyCode::Escape => "Escape",
        _ => "",
    }
}

fn pointer_button(button: MouseButton) -> Option<PointerButton> {
    match button {
        MouseButton::Left => Some(PointerButton::Primary),
        MouseButton::Right => Some(PointerButton::Secondary),
        MouseButton::Middle => Some(PointerButton::Auxiliary),
        _ => None,
    }
}

struct Host {
    nav: Navigator,
    display: WindowDisplay,
    cursor: (f32, f32),
    last_frame: Instant,
}

impl Host {
    fn dispatch(&mut self, event: InputEvent) {
        if let Some(req) = self.nav.handle_event(event, &mut self.display) {
            self.fulfil(req);
        }
    }

    fn fulfil(&mut self, req: HostRequest) {
        match req {
            HostRequest::RequestPointerLock => match self.display.grab_cursor() {
                Ok(()) => self.dispatch(InputEvent::LockStateChanged { locked: true }),
                Err(e) => {
                    log::warn!("[lock] cursor grab unavailable: {}", e);
                    self.dispatch(InputEvent::LockError);
                }
            },
            HostRequest::ExitPointerLock => self.display.release_cursor(),
        }
    }

    fn tick(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.nav.update(dt);
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_inner_size(winit::dpi::LogicalSize::new(1280.0, 720.0))
        .build(&event_loop)?;
    let size = window.inner_size();

    let nav = Navigator::new(NavigationConfig::default(), exhibits::demo_collection())?;
    log::info!("[nav] {} exhibits registered", nav.entities().len());
    let mut host = Host {
        nav,
        display: WindowDisplay::new(window),
        cursor: (0.0, 0.0),
        last_frame: Instant::now(),
    };
    host.nav.handle_resize(size.width as f32, size.height as f32);
    host.display
        .set_room_label(host.nav.current_room().label());
    host.display.set_cursor_appearance(CursorKind::Default);

    event_loop.set_control_flow(ControlFlow::Poll);
    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::Resized(size) => {
                host.nav
                    .handle_resize(size.width as f32, size.height as f32);
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(code) = event.physical_key {
                    if event.repeat {
                        return;
                    }
                    host.dispatch(InputEvent::KeyChange {
                        key: Key::from_code(key_code_name(code)),
                        pressed: event.state == ElementState::Pressed,
                    });
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                host.cursor = (position.x as f32, position.y as f32);
                if host.nav.lock_state() == PointerLockState::Unlocked {
                    host.dispatch(InputEvent::PointerMove {
                        x: host.cursor.0,
                        y: host.cursor.1,
                        dx: 0.0,
                        dy: 0.0,
                    });
                }
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button,
                ..
            } => {
                if let Some(button) = pointer_button(button) {
                    host.dispatch(InputEvent::PointerDown {
                        x: host.cursor.0,
                        y: host.cursor.1,
                        button,
                        region: SurfaceRegion::Scene,
                    });
                }
            }
            WindowEvent::Focused(false) if host.nav.lock_state() == PointerLockState::Locked => {
                // The platform drops the grab with focus; mirror that as a revoke.
                host.display.release_cursor();
                host.dispatch(InputEvent::LockStateChanged { locked: false });
            }
            _ => {}
        },
        Event::DeviceEvent {
            event: DeviceEvent::MouseMotion { delta },
            ..
        } if host.nav.lock_state() == PointerLockState::Locked => {
            host.dispatch(InputEvent::PointerMove {
                x: host.cursor.0,
                y: host.cursor.1,
                dx: delta.0 as f32,
                dy: delta.1 as f32,
            });
        }
        Event::AboutToWait => host.tick(),
        _ => {}
    })?;
    Ok(())
}
