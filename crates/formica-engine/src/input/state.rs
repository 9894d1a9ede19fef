use std::collections::HashSet;

use crate::coords::Vec2;

use super::frame::InputFrame;
use super::types::{
    InputEvent, Key, KeyState, Modifiers, MouseButton, MouseButtonState, PointerButtonEvent,
    PointerMoveEvent,
};

/// Current input state for one window.
///
/// Holds "is down" information and the pointer position.
/// Per-frame transitions are recorded into an `InputFrame`.
#[derive(Debug, Default)]
pub struct InputState {
    pub modifiers: Modifiers,

    pub focused: bool,

    /// Last known pointer position in logical pixels. Kept after the pointer leaves
    /// the window so a drag in progress does not jump.
    pub pointer_pos: Vec2,

    pub pointer_inside: bool,

    pub keys_down: HashSet<Key>,

    pub buttons_down: HashSet<MouseButton>,
}

impl InputState {
    /// Applies a platform-agnostic input event to the current state and writes deltas to `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match &ev {
            InputEvent::ModifiersChanged(m) => {
                self.modifiers = *m;
            }

            InputEvent::Focused(f) => {
                self.focused = *f;
                if !*f {
                    // Focus loss never delivers the matching releases.
                    self.keys_down.clear();
                    self.buttons_down.clear();
                }
            }

            InputEvent::PointerMoved(PointerMoveEvent { x, y }) => {
                self.pointer_pos = Vec2::new(*x, *y);
                self.pointer_inside = true;
            }

            InputEvent::PointerLeft => {
                self.pointer_inside = false;
            }

            InputEvent::Key { key, state, modifiers, .. } => {
                self.modifiers = *modifiers;

                match state {
                    KeyState::Pressed => {
                        if self.keys_down.insert(*key) {
                            frame.keys_pressed.insert(*key);
                        }
                    }
                    KeyState::Released => {
                        if self.keys_down.remove(key) {
                            frame.keys_released.insert(*key);
                        }
                    }
                }
            }

            InputEvent::PointerButton(PointerButtonEvent { button, state, x, y, modifiers }) => {
                self.pointer_pos = Vec2::new(*x, *y);
                self.modifiers = *modifiers;

                match state {
                    MouseButtonState::Pressed => {
                        if self.buttons_down.insert(*button) {
                            frame.buttons_pressed.insert(*button);
                        }
                    }
                    MouseButtonState::Released => {
                        if self.buttons_down.remove(button) {
                            frame.buttons_released.insert(*button);
                        }
                    }
                }
            }

            InputEvent::MouseWheel { modifiers, .. } => {
                self.modifiers = *modifiers;
            }
        }

        frame.push_event(ev);
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    pub fn button_down(&self, btn: MouseButton) -> bool {
        self.buttons_down.contains(&btn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(key: Key, state: KeyState, repeat: bool) -> InputEvent {
        InputEvent::Key { key, state, modifiers: Modifiers::default(), code: 0, repeat }
    }

    #[test]
    fn key_transitions_are_recorded_once() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, key(Key::ArrowLeft, KeyState::Pressed, false));
        state.apply_event(&mut frame, key(Key::ArrowLeft, KeyState::Pressed, true));
        assert!(state.key_down(Key::ArrowLeft));
        assert_eq!(frame.keys_pressed.len(), 1);
        assert_eq!(frame.events.len(), 2);

        frame.clear();
        state.apply_event(&mut frame, key(Key::ArrowLeft, KeyState::Released, false));
        assert!(!state.key_down(Key::ArrowLeft));
        assert!(frame.keys_released.contains(&Key::ArrowLeft));
    }

    #[test]
    fn focus_loss_releases_everything() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, key(Key::Equal, KeyState::Pressed, false));
        state.apply_event(
            &mut frame,
            InputEvent::PointerButton(PointerButtonEvent {
                button: MouseButton::Left,
                state: MouseButtonState::Pressed,
                x: 4.0,
                y: 5.0,
                modifiers: Modifiers::default(),
            }),
        );
        assert!(state.button_down(MouseButton::Left));
        assert_eq!(state.pointer_pos, Vec2::new(4.0, 5.0));

        state.apply_event(&mut frame, InputEvent::Focused(false));
        assert!(state.keys_down.is_empty());
        assert!(state.buttons_down.is_empty());
    }

    #[test]
    fn pointer_position_survives_leaving_the_window() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, InputEvent::PointerMoved(PointerMoveEvent { x: 30.0, y: 40.0 }));
        state.apply_event(&mut frame, InputEvent::PointerLeft);
        assert!(!state.pointer_inside);
        assert_eq!(state.pointer_pos, Vec2::new(30.0, 40.0));
    }
}
