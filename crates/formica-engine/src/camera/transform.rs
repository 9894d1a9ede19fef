use anyhow::{Result, ensure};
use bytemuck::{Pod, Zeroable};

use crate::coords::{Rect, Vec2, Viewport};

use super::config::{CameraConfig, PanMode, min_scale_for};
use super::controls::{CameraControl, Controls};
use super::drag::DragState;

/// Direction of a single wheel notch.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum WheelDirection {
    In,
    Out,
}

impl WheelDirection {
    /// Positive deltas zoom in, negative zoom out, zero is not a notch.
    pub fn from_delta(dy: f32) -> Option<Self> {
        if dy > 0.0 {
            Some(WheelDirection::In)
        } else if dy < 0.0 {
            Some(WheelDirection::Out)
        } else {
            None
        }
    }
}

/// Camera state published to the host once a tick has completed.
///
/// Laid out for direct upload as a uniform (`offset.xy, scale, pad`).
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct CameraSnapshot {
    pub offset: Vec2,
    pub scale: f32,
    pub _pad: f32,
}

impl CameraSnapshot {
    #[inline]
    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        world * self.scale - self.offset
    }
}

/// Smoothed 2D camera over a bounded world.
///
/// Projection: `screen = world * scale - offset`.
///
/// `scale`/`offset` chase `target_scale`/`target_offset` exponentially, one step per
/// [`Camera::tick`]. Both scales stay inside `[min_scale, max_scale]` after every tick and
/// `target_offset` is kept inside the padded world (see [`Camera::clamp_to_world`]);
/// `offset` may lag outside that range for a few ticks.
#[derive(Debug, Clone)]
pub struct Camera {
    world_size: Vec2,
    border_margin: f32,
    screen: Viewport,

    scale: f32,
    target_scale: f32,
    min_scale: f32,
    max_scale: f32,

    offset: Vec2,
    target_offset: Vec2,

    pan_speed: f32,
    zoom_speed: f32,
    smoothing: f32,
    wheel_zoom_step: f32,

    drag: DragState,
    pan_mode: PanMode,
}

impl Camera {
    /// Builds a camera from a validated configuration.
    pub fn new(config: CameraConfig) -> Result<Self> {
        config.validate()?;

        let mut camera = Self {
            world_size: config.world_size,
            border_margin: config.border_margin,
            screen: config.screen,
            scale: config.initial_scale,
            target_scale: config.initial_scale,
            min_scale: 0.0,
            max_scale: config.max_scale,
            offset: Vec2::ZERO,
            target_offset: Vec2::ZERO,
            pan_speed: config.pan_speed,
            zoom_speed: config.zoom_speed,
            smoothing: config.smoothing,
            wheel_zoom_step: config.wheel_zoom_step,
            drag: DragState::Idle,
            pan_mode: config.pan_mode,
        };
        camera.recompute_min_scale();

        if config.start_zoomed_out {
            camera.target_scale = camera.min_scale;
        }

        log::debug!(
            "camera created: world={:?} screen={:?} scale={} range=[{}, {}]",
            camera.world_size,
            camera.screen,
            camera.scale,
            camera.min_scale,
            camera.max_scale
        );

        Ok(camera)
    }

    // ── accessors ─────────────────────────────────────────────────────────

    pub fn world_size(&self) -> Vec2 {
        self.world_size
    }

    pub fn border_margin(&self) -> f32 {
        self.border_margin
    }

    pub fn screen(&self) -> Viewport {
        self.screen
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn target_scale(&self) -> f32 {
        self.target_scale
    }

    pub fn min_scale(&self) -> f32 {
        self.min_scale
    }

    pub fn max_scale(&self) -> f32 {
        self.max_scale
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    pub fn target_offset(&self) -> Vec2 {
        self.target_offset
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn pan_mode(&self) -> PanMode {
        self.pan_mode
    }

    pub fn snapshot(&self) -> CameraSnapshot {
        CameraSnapshot { offset: self.offset, scale: self.scale, _pad: 0.0 }
    }

    // ── projection ────────────────────────────────────────────────────────

    #[inline]
    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        world * self.scale - self.offset
    }

    #[inline]
    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        (screen + self.offset) / self.scale
    }

    /// The current screen rectangle expressed in world units.
    pub fn visible_world_rect(&self) -> Rect {
        Rect::from_corners(
            self.screen_to_world(Vec2::ZERO),
            self.screen_to_world(self.screen.size()),
        )
    }

    // ── bounds ────────────────────────────────────────────────────────────

    /// Recomputes the zoom-out bound from the world size and border.
    ///
    /// Current scales are not re-clamped here; the next [`Camera::tick`] does that.
    pub fn recompute_min_scale(&mut self) {
        self.min_scale = min_scale_for(self.world_size, self.border_margin, self.screen);
    }

    /// Changes the world extent and recomputes `min_scale`.
    pub fn set_world_size(&mut self, world_size: Vec2) -> Result<()> {
        ensure!(
            world_size.is_finite() && world_size.x > 0.0 && world_size.y > 0.0,
            "world size must be positive, got {:?}",
            world_size
        );
        self.world_size = world_size;
        self.recompute_min_scale();
        log::debug!("world resized to {:?}; min scale now {}", world_size, self.min_scale);
        Ok(())
    }

    /// Clamps `target_offset` so the view never reveals more than one border width
    /// before the world origin, nor anything past the far border.
    ///
    /// The near bound is `-border_margin * scale` while the far bound is derived from
    /// `world + 2 * border_margin`; the asymmetry is intentional. If the range is
    /// inverted (tiny scales) the near bound wins.
    pub fn clamp_to_world(&mut self) {
        let padded = self.world_size + Vec2::splat(self.border_margin * 2.0);
        let max_off = padded * self.scale - self.screen.size();
        let min_off = -self.border_margin * self.scale;

        self.target_offset.x = self.target_offset.x.min(max_off.x).max(min_off);
        self.target_offset.y = self.target_offset.y.min(max_off.y).max(min_off);
    }

    /// `min_scale` wins when the range is inverted.
    #[inline]
    fn clamp_scale(&self, scale: f32) -> f32 {
        scale.min(self.max_scale).max(self.min_scale)
    }

    // ── zoom ──────────────────────────────────────────────────────────────

    /// Multiplies `target_scale` by `factor` while keeping the world point under
    /// `anchor` (screen pixels) fixed once the target is reached.
    pub fn zoom(&mut self, factor: f32, anchor: Vec2) {
        let world_before = self.screen_to_world(anchor);
        self.target_scale = self.clamp_scale(self.target_scale * factor);
        self.target_offset = world_before * self.target_scale - anchor;
        log::trace!("zoom x{factor} at {anchor:?} -> target scale {}", self.target_scale);
    }

    /// One wheel notch. With `shift_held` the zoom is centred on the screen instead of the pointer.
    pub fn apply_wheel(
        &mut self,
        direction: WheelDirection,
        shift_held: bool,
        pointer: Vec2,
        screen_center: Vec2,
    ) {
        let factor = match direction {
            WheelDirection::In => self.wheel_zoom_step,
            WheelDirection::Out => 1.0 / self.wheel_zoom_step,
        };
        let anchor = if shift_held { screen_center } else { pointer };
        self.zoom(factor, anchor);
    }

    /// Jumps current and target state to `scale` (clamped) and `offset`, skipping smoothing.
    ///
    /// The offset is taken as given; the next tick clamps the target if needed.
    pub fn snap_to(&mut self, scale: f32, offset: Vec2) {
        self.target_scale = self.clamp_scale(scale);
        self.scale = self.target_scale;
        self.target_offset = offset;
        self.offset = offset;
    }

    /// Sets `target_scale` to the zoom-out bound.
    pub fn zoom_to_fit(&mut self) {
        self.target_scale = self.min_scale;
    }

    /// Centres `world_point` on screen, optionally retargeting the zoom first.
    ///
    /// The offset is computed from the current `scale`, so a simultaneous zoom change
    /// converges over a few calls rather than in one.
    pub fn focus_on(&mut self, world_point: Vec2, target_scale: Option<f32>) {
        if let Some(scale) = target_scale {
            self.target_scale = self.clamp_scale(scale);
        }
        self.target_offset = world_point * self.scale - self.screen.center();
    }

    // ── drag / pan ────────────────────────────────────────────────────────

    pub fn begin_drag(&mut self, pointer: Vec2) {
        self.drag = DragState::Dragging { last_pointer: pointer };
        log::trace!("drag started at {pointer:?}");
    }

    pub fn end_drag(&mut self) {
        if self.drag.is_dragging() {
            log::trace!("drag ended at offset {:?}", self.offset);
        }
        self.drag = DragState::Idle;
    }

    pub fn toggle_pan_mode(&mut self) {
        self.pan_mode = self.pan_mode.toggled();
        log::info!("panning mode: {}", self.pan_mode.label());
    }

    // ── tick ──────────────────────────────────────────────────────────────

    /// Fixed-step update.
    ///
    /// `pointer` is the cursor position in screen pixels; it anchors held-key zoom and
    /// drives the drag.
    pub fn tick(&mut self, controls: &impl Controls, pointer: Vec2) {
        let movement = match self.pan_mode {
            PanMode::Screen => self.pan_speed,
            PanMode::World => self.pan_speed * self.scale,
        };

        let mut factor = 1.0;
        if controls.is_active(CameraControl::ZoomIn) {
            factor += self.zoom_speed;
        }
        if controls.is_active(CameraControl::ZoomOut) {
            factor -= self.zoom_speed;
        }
        if factor != 1.0 {
            let anchor = if controls.is_active(CameraControl::Modifier) {
                self.screen.center()
            } else {
                pointer
            };
            self.zoom(factor, anchor);
        }

        if let Some(delta) = self.drag.advance(pointer) {
            // Drag overrides any pending target so the view does not spring back afterwards.
            self.offset -= delta;
            self.target_offset = self.offset;
        } else {
            if controls.is_active(CameraControl::PanLeft) {
                self.target_offset.x -= movement;
            }
            if controls.is_active(CameraControl::PanRight) {
                self.target_offset.x += movement;
            }
            if controls.is_active(CameraControl::PanUp) {
                self.target_offset.y -= movement;
            }
            if controls.is_active(CameraControl::PanDown) {
                self.target_offset.y += movement;
            }
        }

        self.offset += (self.target_offset - self.offset) * self.smoothing;
        self.scale += (self.target_scale - self.scale) * self.smoothing;

        self.target_scale = self.clamp_scale(self.target_scale);
        self.scale = self.clamp_scale(self.scale);
        self.clamp_to_world();
    }
}
