use anyhow::{Result, ensure};

use crate::coords::{Vec2, Viewport};

/// How keyboard pan speed relates to zoom.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum PanMode {
    /// Fixed pixels per tick regardless of zoom.
    #[default]
    Screen,
    /// Pixels per tick scaled by the current zoom, so pans cover a fixed world distance.
    World,
}

impl PanMode {
    pub fn toggled(self) -> Self {
        match self {
            PanMode::Screen => PanMode::World,
            PanMode::World => PanMode::Screen,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PanMode::Screen => "screen-space",
            PanMode::World => "world-space",
        }
    }
}

/// Construction-time camera options.
///
/// Every field affects only the camera computations that name it; nothing here can be
/// changed after construction except through the dedicated `Camera` operations
/// (`set_world_size`, `toggle_pan_mode`).
#[derive(Debug, Clone)]
pub struct CameraConfig {
    /// World extent in world units.
    pub world_size: Vec2,
    /// Screen extent in pixels.
    pub screen: Viewport,
    /// Padding kept visible around the world on every side.
    pub border_margin: f32,
    /// Starting value for both `scale` and `target_scale`.
    pub initial_scale: f32,
    pub max_scale: f32,
    /// Keyboard pan step per tick.
    pub pan_speed: f32,
    /// Held-key zoom rate; each tick multiplies by `1 ± zoom_speed`.
    pub zoom_speed: f32,
    /// Exponential smoothing rate per tick, in `(0, 1]`.
    pub smoothing: f32,
    /// Multiplicative zoom per wheel notch. Zooming out uses the reciprocal.
    pub wheel_zoom_step: f32,
    pub pan_mode: PanMode,
    /// Start with `target_scale` at the fully zoomed-out bound.
    pub start_zoomed_out: bool,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            world_size: Vec2::new(1875.0, 1250.0),
            screen: Viewport::new(750.0, 500.0),
            border_margin: 50.0,
            initial_scale: 1.0,
            max_scale: 5.0,
            pan_speed: 5.0,
            zoom_speed: 0.1,
            smoothing: 0.15,
            wheel_zoom_step: 1.1,
            pan_mode: PanMode::Screen,
            start_zoomed_out: false,
        }
    }
}

impl CameraConfig {
    pub fn new(world_size: Vec2, screen: Viewport) -> Self {
        Self {
            world_size,
            screen,
            ..Self::default()
        }
    }

    pub fn with_border_margin(mut self, margin: f32) -> Self {
        self.border_margin = margin;
        self
    }

    pub fn with_initial_scale(mut self, scale: f32) -> Self {
        self.initial_scale = scale;
        self
    }

    pub fn with_max_scale(mut self, max_scale: f32) -> Self {
        self.max_scale = max_scale;
        self
    }

    pub fn with_pan_speed(mut self, pan_speed: f32) -> Self {
        self.pan_speed = pan_speed;
        self
    }

    pub fn with_zoom_speed(mut self, zoom_speed: f32) -> Self {
        self.zoom_speed = zoom_speed;
        self
    }

    pub fn with_smoothing(mut self, smoothing: f32) -> Self {
        self.smoothing = smoothing;
        self
    }

    pub fn with_wheel_zoom_step(mut self, step: f32) -> Self {
        self.wheel_zoom_step = step;
        self
    }

    pub fn with_pan_mode(mut self, mode: PanMode) -> Self {
        self.pan_mode = mode;
        self
    }

    pub fn zoomed_out(mut self) -> Self {
        self.start_zoomed_out = true;
        self
    }

    /// Rejects configurations that would leave the camera with a non-finite or
    /// non-positive scale bound.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.world_size.is_finite() && self.world_size.x > 0.0 && self.world_size.y > 0.0,
            "world size must be positive, got {:?}",
            self.world_size
        );
        ensure!(self.screen.is_valid(), "screen size must be positive, got {:?}", self.screen);
        ensure!(
            self.border_margin.is_finite() && self.border_margin >= 0.0,
            "border margin must be non-negative, got {}",
            self.border_margin
        );
        ensure!(
            self.max_scale.is_finite() && self.max_scale > 0.0,
            "max scale must be positive, got {}",
            self.max_scale
        );
        ensure!(
            self.initial_scale.is_finite() && self.initial_scale > 0.0,
            "initial scale must be positive, got {}",
            self.initial_scale
        );
        ensure!(
            self.smoothing > 0.0 && self.smoothing <= 1.0,
            "smoothing factor must be in (0, 1], got {}",
            self.smoothing
        );
        ensure!(
            self.pan_speed.is_finite() && self.pan_speed >= 0.0,
            "pan speed must be non-negative, got {}",
            self.pan_speed
        );
        ensure!(
            (0.0..1.0).contains(&self.zoom_speed),
            "zoom speed must be in [0, 1), got {}",
            self.zoom_speed
        );
        ensure!(
            self.wheel_zoom_step.is_finite() && self.wheel_zoom_step > 0.0,
            "wheel zoom step must be positive, got {}",
            self.wheel_zoom_step
        );

        let min_scale = min_scale_for(self.world_size, self.border_margin, self.screen);
        ensure!(
            min_scale.is_finite() && min_scale > 0.0,
            "derived min scale is degenerate ({min_scale})"
        );

        Ok(())
    }
}

/// Smallest scale at which the padded world still covers the screen on both axes.
pub(crate) fn min_scale_for(world_size: Vec2, border_margin: f32, screen: Viewport) -> f32 {
    let padded = world_size + Vec2::splat(border_margin * 2.0);
    (screen.width / padded.x).min(screen.height / padded.y)
}
