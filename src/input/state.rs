//! Input state machine - gesture tracking for pointer interactions.
//!
//! ## State Transitions
//!
//! ```text
//! Idle     -> Selected   (pointer down on an unselected item)
//! Selected -> Selected   (pointer down on a different item)
//! Selected -> Dragging   (pointer down on the selected item)
//! Dragging -> Selected   (pointer up)
//! Any      -> Idle       (pointer down on empty board, delete, clear)
//! ```
//!
//! Selection itself lives on the board; this enum only carries the transient
//! drag tracking so that a drag without a selection cannot be represented.

use serde::Serialize;

/// Transient pointer gesture state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    /// No gesture in progress
    #[default]
    Idle,

    /// Dragging the selected item; the pointer is captured
    Dragging {
        /// Item being dragged
        item_id: u64,
        /// Last pointer position for delta calculation
        last_pos: (f32, f32),
    },
}

/// Externally visible interaction phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GesturePhase {
    Idle,
    Selected,
    Dragging,
}

impl InputState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Get the item ID being dragged, if any
    pub fn dragged_item_id(&self) -> Option<u64> {
        match self {
            Self::Dragging { item_id, .. } => Some(*item_id),
            Self::Idle => None,
        }
    }

    pub fn last_pos(&self) -> Option<(f32, f32)> {
        match self {
            Self::Dragging { last_pos, .. } => Some(*last_pos),
            Self::Idle => None,
        }
    }

    pub fn start_dragging(&mut self, item_id: u64, pos: (f32, f32)) {
        *self = Self::Dragging {
            item_id,
            last_pos: pos,
        };
    }

    /// Record a new pointer position and return the delta since the last one.
    pub fn advance(&mut self, pos: (f32, f32)) -> Option<(u64, f32, f32)> {
        match self {
            Self::Dragging { item_id, last_pos } => {
                let delta = (pos.0 - last_pos.0, pos.1 - last_pos.1);
                *last_pos = pos;
                Some((*item_id, delta.0, delta.1))
            }
            Self::Idle => None,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}
