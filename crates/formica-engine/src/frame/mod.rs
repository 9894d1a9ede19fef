//! Frame loop and cross-thread handoff.
//!
//! The camera and stroke list are mutated on the loop thread only. Once a tick has
//! settled, its screen-space geometry is copied into a [`FramePacket`] and pushed
//! through a bounded queue that never blocks the loop.

mod driver;
pub mod handoff;
mod stop;

pub use driver::{AppControl, FrameDriver};
pub use handoff::{FramePacket, FrameReceiver, FrameSender, PublishStatus, channel};
pub use stop::StopSignal;
