//! Time subsystem.
//!
//! Frame timing decoupled from any runtime: one `FrameClock` per loop, `tick()` once
//! per frame.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
