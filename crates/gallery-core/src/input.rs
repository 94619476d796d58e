//! Inbound input port: typed events produced by a host binding.

use crate::motion::MoveDirection;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Move(MoveDirection),
    /// Release pointer capture and close the info panel.
    Cancel,
    Reset,
    Other,
}

impl Key {
    /// Map a physical key code (`KeyboardEvent.code` naming).
    pub fn from_code(code: &str) -> Key {
        match code {
            "KeyW" | "ArrowUp" => Key::Move(MoveDirection::Forward),
            "KeyS" | "ArrowDown" => Key::Move(MoveDirection::Backward),
            "KeyA" | "ArrowLeft" => Key::Move(MoveDirection::Left),
            "KeyD" | "ArrowRight" => Key::Move(MoveDirection::Right),
            "Escape" => Key::Cancel,
            "KeyR" => Key::Reset,
            _ => Key::Other,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PointerButton {
    #[default]
    Primary,
    Secondary,
    Auxiliary,
}

/// Where a pointer press landed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SurfaceRegion {
    #[default]
    Scene,
    /// Anywhere off the canvas, overlay UI included. Presses here never reach
    /// the scene.
    Ui,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// Pointer motion. `x`/`y` are viewport pixels; `dx`/`dy` are raw deltas
    /// that only mean something while captured.
    PointerMove { x: f32, y: f32, dx: f32, dy: f32 },
    KeyChange { key: Key, pressed: bool },
    PointerDown {
        x: f32,
        y: f32,
        button: PointerButton,
        region: SurfaceRegion,
    },
    LockStateChanged { locked: bool },
    LockError,
}

/// Work the host must do on the navigator's behalf.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostRequest {
    RequestPointerLock,
    ExitPointerLock,
}
