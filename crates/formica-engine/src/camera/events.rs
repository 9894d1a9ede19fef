use crate::coords::Vec2;
use crate::input::{InputEvent, MouseButton, MouseButtonState, MouseWheelDelta, PointerButtonEvent};

use super::transform::{Camera, WheelDirection};

impl Camera {
    /// Applies a discrete input event.
    ///
    /// Left button starts/ends a drag at the event position; a wheel notch zooms at
    /// `pointer`, or at the screen centre while shift is held. Losing focus ends a drag.
    /// Other events are ignored.
    /// Returns `true` if the camera consumed the event.
    pub fn handle_event(&mut self, event: &InputEvent, pointer: Vec2) -> bool {
        match event {
            InputEvent::PointerButton(PointerButtonEvent {
                button: MouseButton::Left,
                state,
                x,
                y,
                ..
            }) => {
                match state {
                    MouseButtonState::Pressed => self.begin_drag(Vec2::new(*x, *y)),
                    MouseButtonState::Released => self.end_drag(),
                }
                true
            }

            InputEvent::MouseWheel { delta, modifiers } => {
                let dy = match delta {
                    MouseWheelDelta::Line { y, .. } | MouseWheelDelta::Pixel { y, .. } => *y,
                };
                let Some(direction) = WheelDirection::from_delta(dy) else {
                    return false;
                };
                let centre = self.screen().center();
                self.apply_wheel(direction, modifiers.shift, pointer, centre);
                true
            }

            // The release is never delivered once focus is gone.
            InputEvent::Focused(false) => {
                let was_dragging = self.drag_state().is_dragging();
                self.end_drag();
                was_dragging
            }

            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::{CameraConfig, DragState};
    use crate::coords::Viewport;
    use crate::input::Modifiers;

    fn camera() -> Camera {
        let cfg = CameraConfig::new(Vec2::new(1000.0, 1000.0), Viewport::new(400.0, 300.0))
            .with_border_margin(10.0);
        let mut cam = Camera::new(cfg).unwrap();
        cam.snap_to(1.0, Vec2::new(100.0, 100.0));
        cam
    }

    fn button(button: MouseButton, state: MouseButtonState, x: f32, y: f32) -> InputEvent {
        InputEvent::PointerButton(PointerButtonEvent { button, state, x, y, modifiers: Modifiers::default() })
    }

    fn wheel(y: f32, shift: bool) -> InputEvent {
        InputEvent::MouseWheel {
            delta: MouseWheelDelta::Line { x: 0.0, y },
            modifiers: Modifiers { shift, ..Modifiers::default() },
        }
    }

    #[test]
    fn left_button_toggles_drag() {
        let mut cam = camera();
        assert!(cam.handle_event(&button(MouseButton::Left, MouseButtonState::Pressed, 7.0, 9.0), Vec2::ZERO));
        assert_eq!(cam.drag_state(), DragState::Dragging { last_pointer: Vec2::new(7.0, 9.0) });

        assert!(cam.handle_event(&button(MouseButton::Left, MouseButtonState::Released, 7.0, 9.0), Vec2::ZERO));
        assert_eq!(cam.drag_state(), DragState::Idle);
    }

    #[test]
    fn other_buttons_are_ignored() {
        let mut cam = camera();
        assert!(!cam.handle_event(&button(MouseButton::Right, MouseButtonState::Pressed, 1.0, 1.0), Vec2::ZERO));
        assert_eq!(cam.drag_state(), DragState::Idle);
    }

    #[test]
    fn wheel_up_zooms_in_at_pointer() {
        let mut cam = camera();
        let pointer = Vec2::new(50.0, 60.0);
        let world = cam.screen_to_world(pointer);

        assert!(cam.handle_event(&wheel(1.0, false), pointer));
        assert!((cam.target_scale() - 1.1).abs() < 1e-6);
        let after = (pointer + cam.target_offset()) / cam.target_scale();
        assert!((after - world).length() < 1e-3);
    }

    #[test]
    fn shifted_wheel_zooms_at_screen_centre() {
        let mut cam = camera();
        let centre = Vec2::new(200.0, 150.0);
        let world = cam.screen_to_world(centre);

        assert!(cam.handle_event(&wheel(-1.0, true), Vec2::new(3.0, 4.0)));
        assert!(cam.target_scale() < 1.0);
        let after = (centre + cam.target_offset()) / cam.target_scale();
        assert!((after - world).length() < 1e-3);
    }

    #[test]
    fn focus_loss_ends_drag() {
        let mut cam = camera();
        cam.handle_event(&button(MouseButton::Left, MouseButtonState::Pressed, 100.0, 100.0), Vec2::ZERO);
        assert!(cam.handle_event(&InputEvent::Focused(false), Vec2::ZERO));
        assert_eq!(cam.drag_state(), DragState::Idle);

        // Hovering after focus returns must not pan.
        assert!(!cam.handle_event(&InputEvent::Focused(true), Vec2::ZERO));
        cam.tick(&crate::camera::CameraControls::none(), Vec2::new(300.0, 300.0));
        assert_eq!(cam.offset(), Vec2::new(100.0, 100.0));
    }

    #[test]
    fn focus_loss_without_drag_is_not_consumed() {
        let mut cam = camera();
        assert!(!cam.handle_event(&InputEvent::Focused(false), Vec2::ZERO));
    }

    #[test]
    fn flat_wheel_delta_is_not_consumed() {
        let mut cam = camera();
        assert!(!cam.handle_event(&wheel(0.0, false), Vec2::ZERO));
        assert_eq!(cam.target_scale(), 1.0);
    }
}
