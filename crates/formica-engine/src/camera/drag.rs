use crate::coords::Vec2;

/// Exclusive pan mode: either the pointer drives the offset or the keyboard does.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging { last_pointer: Vec2 },
}

impl DragState {
    #[inline]
    pub fn is_dragging(self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }

    /// Records `pointer` as the new reference and returns the movement since the last one.
    ///
    /// Returns `None` when idle.
    pub fn advance(&mut self, pointer: Vec2) -> Option<Vec2> {
        match self {
            DragState::Idle => None,
            DragState::Dragging { last_pointer } => {
                let delta = pointer - *last_pointer;
                *last_pointer = pointer;
                Some(delta)
            }
        }
    }
}
