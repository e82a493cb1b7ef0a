//! Drag operations - moving the selected item with the pointer.
//!
//! ## Performance Notes
//!
//! Pointer move is called very frequently during a drag. Non-drag states
//! exit immediately and each move updates a single item and its index entry.

use crate::board::Board;
use crate::input::InputResponse;
use crate::profile_scope;
use crate::types::is_finite_point;

impl Board {
    /// Move the dragged item by the pointer delta since the last event.
    ///
    /// Moves outside a drag are ignored, including plain hovering.
    pub fn handle_pointer_move(&mut self, pos: (f32, f32)) -> InputResponse {
        profile_scope!("handle_pointer_move");

        // Leaves the drag anchor untouched so the next valid move still works
        if !is_finite_point(pos) {
            return InputResponse::Ignored;
        }
        let Some((item_id, dx, dy)) = self.input_state.advance(pos) else {
            return InputResponse::Ignored;
        };
        if dx == 0.0 && dy == 0.0 {
            return InputResponse::Ignored;
        }

        if self.translate_item(item_id, dx, dy) {
            return InputResponse::Handled;
        }
        if self.get_item(item_id).is_none() {
            // Item vanished under the drag
            self.input_state.reset();
        }
        InputResponse::Ignored
    }
}
