//! Formica engine crate.
//!
//! Viewport camera and stroke geometry for the creature viewer: a smoothed,
//! world-clamped 2D camera driven by platform-agnostic input, a thick-segment quad
//! batcher, and a frame loop that hands settled geometry to a consumer thread.

pub mod camera;
pub mod coords;
pub mod frame;
pub mod input;
pub mod time;

pub mod logging;
pub mod stroke;
