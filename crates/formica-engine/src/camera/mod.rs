//! Viewport transform.
//!
//! Owns the scale/offset pair that maps world units to screen pixels, and the rules
//! that move it: cursor-anchored zoom, drag and keyboard pan, exponential smoothing,
//! and clamping to the bordered world.
//!
//! The camera is exclusively owned by the frame loop. Hand copies of
//! [`CameraSnapshot`] to other threads, never the camera itself.

mod config;
mod controls;
mod drag;
mod events;
mod transform;

pub use config::{CameraConfig, PanMode};
pub use controls::{BoundInput, CameraControl, CameraControls, ControlBindings, Controls};
pub use drag::DragState;
pub use transform::{Camera, CameraSnapshot, WheelDirection};
