use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared request to end the frame loop.
///
/// Any clone may request the stop; the loop observes it at the start of its next
/// frame and does not touch the camera afterwards.
#[derive(Debug, Clone, Default)]
pub struct StopSignal {
    requested: Arc<AtomicBool>,
}

impl StopSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request_stop(&self) {
        self.requested.store(true, Ordering::Release);
    }

    pub fn is_stop_requested(&self) -> bool {
        self.requested.load(Ordering::Acquire)
    }
}
