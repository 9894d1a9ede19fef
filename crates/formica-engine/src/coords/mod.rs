//! Coordinate and geometry types shared by the camera and the stroke batcher.
//!
//! Two spaces exist:
//! - world units (creature positions, world size, border margin)
//! - screen pixels (origin top-left, +X right, +Y down)
//!
//! Only `camera::Camera` converts between them.

mod color;
mod rect;
mod vec2;
mod viewport;

pub use color::ColorRgba;
pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;
