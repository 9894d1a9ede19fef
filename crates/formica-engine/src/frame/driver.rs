use anyhow::{Context, Result};

use crate::camera::{Camera, CameraConfig, ControlBindings};
use crate::input::{InputEvent, InputFrame, InputState, Key};
use crate::stroke::StrokeList;
use crate::time::{FrameClock, FrameTime};

use super::handoff::{FramePacket, FrameSender, PublishStatus};
use super::stop::StopSignal;

/// Control directive returned by [`FrameDriver::frame`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Single-threaded frame loop around one camera.
///
/// Each frame folds the pending input into the camera, ticks it once, lets the host
/// stroke geometry against the settled camera and publishes the result. The camera
/// never leaves this thread; consumers only see [`FramePacket`]s.
#[derive(Debug)]
pub struct FrameDriver {
    camera: Camera,
    input: InputState,
    input_frame: InputFrame,
    bindings: ControlBindings,
    pan_toggle_key: Option<Key>,
    clock: FrameClock,
    last_time: Option<FrameTime>,
    strokes: StrokeList,
    sender: FrameSender,
    stop: StopSignal,
    stopped: bool,
}

impl FrameDriver {
    pub fn new(config: CameraConfig, sender: FrameSender, stop: StopSignal) -> Result<Self> {
        let camera = Camera::new(config).context("failed to create frame driver camera")?;

        Ok(Self {
            camera,
            input: InputState::default(),
            input_frame: InputFrame::default(),
            bindings: ControlBindings::default(),
            pan_toggle_key: None,
            clock: FrameClock::new(),
            last_time: None,
            strokes: StrokeList::new(),
            sender,
            stop,
            stopped: false,
        })
    }

    pub fn with_bindings(mut self, bindings: ControlBindings) -> Self {
        self.bindings = bindings;
        self
    }

    pub fn with_clock(mut self, clock: FrameClock) -> Self {
        self.clock = clock;
        self
    }

    /// A key that flips between screen-space and world-space panning when pressed.
    pub fn with_pan_toggle_key(mut self, key: Key) -> Self {
        self.pan_toggle_key = Some(key);
        self
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Direct access for host-driven moves (`focus_on`, `set_world_size`, ...).
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    /// Timing of the most recent completed frame.
    pub fn last_time(&self) -> Option<FrameTime> {
        self.last_time
    }

    pub fn stop_signal(&self) -> StopSignal {
        self.stop.clone()
    }

    /// Runs one frame.
    ///
    /// Returns `Exit` without touching the camera once a stop has been requested, or
    /// after the consumer has gone away.
    pub fn frame<I, F>(&mut self, events: I, draw: F) -> AppControl
    where
        I: IntoIterator<Item = InputEvent>,
        F: FnOnce(&Camera, &mut StrokeList),
    {
        if self.stop.is_stop_requested() {
            if !self.stopped {
                self.stopped = true;
                log::info!("stop requested, frame loop exiting");
            }
            return AppControl::Exit;
        }

        self.input_frame.clear();
        for ev in events {
            self.input.apply_event(&mut self.input_frame, ev.clone());
            self.camera.handle_event(&ev, self.input.pointer_pos);
        }

        if let Some(key) = self.pan_toggle_key {
            if self.input_frame.key_pressed(key) {
                self.camera.toggle_pan_mode();
            }
        }

        let time = self.clock.tick();
        self.camera
            .tick(&self.bindings.bound(&self.input), self.input.pointer_pos);

        draw(&self.camera, &mut self.strokes);

        let packet = FramePacket {
            frame_index: time.frame_index,
            camera: self.camera.snapshot(),
            batches: self.strokes.take(),
        };
        self.last_time = Some(time);

        match self.sender.publish(packet) {
            PublishStatus::Sent | PublishStatus::Dropped => AppControl::Continue,
            PublishStatus::Disconnected => {
                log::info!("frame consumer gone, frame loop exiting");
                AppControl::Exit
            }
        }
    }
}
