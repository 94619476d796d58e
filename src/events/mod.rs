pub mod keyboard;
pub mod pointer;

pub use keyboard::wire_keyboard;
pub use pointer::{wire_pointer_handlers, wire_pointer_lock};
