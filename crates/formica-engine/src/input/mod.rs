//! Input subsystem.
//!
//! Public API is platform-agnostic. `platform::winit` translates window-system events
//! into `InputEvent`s; hosts on other backends construct the events themselves.

mod frame;
pub mod platform;
mod state;
mod types;

pub use frame::InputFrame;
pub use state::InputState;
pub use types::{
    InputEvent,
    Key,
    KeyState,
    Modifiers,
    MouseButton,
    MouseButtonState,
    MouseWheelDelta,
    PointerButtonEvent,
    PointerMoveEvent,
};
