//! Pointer up handling - end of drag.

use crate::board::Board;
use crate::input::{InputResponse, PointerButton};
use tracing::debug;

impl Board {
    /// Release the pointer capture. The item stays where the last move left
    /// it and remains selected.
    pub fn handle_pointer_up(&mut self, _pos: (f32, f32), button: PointerButton) -> InputResponse {
        if button != PointerButton::Primary {
            return InputResponse::Ignored;
        }
        match self.input_state.dragged_item_id() {
            Some(item_id) => {
                self.input_state.reset();
                debug!("Finished dragging item {}", item_id);
                InputResponse::Handled
            }
            None => InputResponse::Ignored,
        }
    }
}
