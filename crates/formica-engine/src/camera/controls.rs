use std::collections::HashMap;

use crate::input::{InputState, Key};

/// Continuous controls sampled once per camera tick.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum CameraControl {
    PanLeft,
    PanRight,
    PanUp,
    PanDown,
    ZoomIn,
    ZoomOut,
    /// Moves the zoom anchor from the pointer to the screen centre.
    Modifier,
}

/// Boolean "is this control held" query.
///
/// The camera knows nothing else about input devices.
pub trait Controls {
    fn is_active(&self, control: CameraControl) -> bool;
}

/// Plain held-control snapshot.
///
/// Useful for hosts that already track their own key state, and for tests.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct CameraControls {
    pub pan_left: bool,
    pub pan_right: bool,
    pub pan_up: bool,
    pub pan_down: bool,
    pub zoom_in: bool,
    pub zoom_out: bool,
    pub modifier: bool,
}

impl CameraControls {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with(mut self, control: CameraControl) -> Self {
        *self.slot(control) = true;
        self
    }

    fn slot(&mut self, control: CameraControl) -> &mut bool {
        match control {
            CameraControl::PanLeft => &mut self.pan_left,
            CameraControl::PanRight => &mut self.pan_right,
            CameraControl::PanUp => &mut self.pan_up,
            CameraControl::PanDown => &mut self.pan_down,
            CameraControl::ZoomIn => &mut self.zoom_in,
            CameraControl::ZoomOut => &mut self.zoom_out,
            CameraControl::Modifier => &mut self.modifier,
        }
    }
}

impl Controls for CameraControls {
    fn is_active(&self, control: CameraControl) -> bool {
        match control {
            CameraControl::PanLeft => self.pan_left,
            CameraControl::PanRight => self.pan_right,
            CameraControl::PanUp => self.pan_up,
            CameraControl::PanDown => self.pan_down,
            CameraControl::ZoomIn => self.zoom_in,
            CameraControl::ZoomOut => self.zoom_out,
            CameraControl::Modifier => self.modifier,
        }
    }
}

/// Key → control map.
///
/// Several keys may drive the same control; a control is active if any of its keys is held.
#[derive(Debug, Clone)]
pub struct ControlBindings {
    keys: HashMap<Key, CameraControl>,
}

impl Default for ControlBindings {
    fn default() -> Self {
        let mut b = Self::empty();
        b.bind(Key::ArrowLeft, CameraControl::PanLeft);
        b.bind(Key::ArrowRight, CameraControl::PanRight);
        b.bind(Key::ArrowUp, CameraControl::PanUp);
        b.bind(Key::ArrowDown, CameraControl::PanDown);
        b.bind(Key::Equal, CameraControl::ZoomIn);
        b.bind(Key::Minus, CameraControl::ZoomOut);
        b.bind(Key::Shift, CameraControl::Modifier);
        b
    }
}

impl ControlBindings {
    pub fn empty() -> Self {
        Self { keys: HashMap::new() }
    }

    /// Binds `key` to `control`, replacing any previous binding for that key.
    pub fn bind(&mut self, key: Key, control: CameraControl) -> &mut Self {
        self.keys.insert(key, control);
        self
    }

    pub fn unbind(&mut self, key: Key) -> &mut Self {
        self.keys.remove(&key);
        self
    }

    pub fn control_for(&self, key: Key) -> Option<CameraControl> {
        self.keys.get(&key).copied()
    }

    /// Views `state` through these bindings.
    pub fn bound<'a>(&'a self, state: &'a InputState) -> BoundInput<'a> {
        BoundInput { state, bindings: self }
    }
}

/// An `InputState` read through a `ControlBindings` map.
#[derive(Debug, Copy, Clone)]
pub struct BoundInput<'a> {
    state: &'a InputState,
    bindings: &'a ControlBindings,
}

impl Controls for BoundInput<'_> {
    fn is_active(&self, control: CameraControl) -> bool {
        if control == CameraControl::Modifier && self.state.modifiers.shift {
            return true;
        }
        self.state
            .keys_down
            .iter()
            .any(|&k| self.bindings.control_for(k) == Some(control))
    }
}
