//! Pointer down handling - selection, drag initiation, context menu.
//!
//! ## Performance Notes
//!
//! Pointer down runs a hit test, which queries the R-tree spatial index for
//! candidates before resolving z-order among them.
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use crate::board::Board;
use crate::input::{ContextMenu, InputResponse, PointerButton};
use crate::profile_scope;
use crate::types::is_finite_point;
use tracing::debug;

impl Board {
    pub fn handle_pointer_down(&mut self, pos: (f32, f32), button: PointerButton) -> InputResponse {
        profile_scope!("handle_pointer_down");

        if !is_finite_point(pos) {
            debug!("Ignoring pointer down at non-finite {:?}", pos);
            return InputResponse::Ignored;
        }

        match button {
            PointerButton::Primary => self.primary_down(pos),
            PointerButton::Secondary => self.secondary_down(pos),
            PointerButton::Middle => InputResponse::Ignored,
        }
    }

    /// Two-step gesture: the first press selects, a press on the already
    /// selected item starts dragging it.
    fn primary_down(&mut self, pos: (f32, f32)) -> InputResponse {
        // A press while dragging means the release was lost
        if self.input_state.is_dragging() {
            debug!("Pointer down during drag, ending stale drag");
            self.input_state.reset();
        }

        match self.hit_test(pos.0, pos.1) {
            Some(item_id) if self.selected == Some(item_id) => {
                self.input_state.start_dragging(item_id, pos);
                debug!("Started dragging item {} at {:?}", item_id, pos);
                InputResponse::Handled
            }
            Some(item_id) => {
                self.select(Some(item_id));
                InputResponse::Handled
            }
            None => InputResponse::from_changed(self.select(None)),
        }
    }

    /// Secondary press on an item selects it and asks for the context menu.
    /// A press on empty board does nothing.
    fn secondary_down(&mut self, pos: (f32, f32)) -> InputResponse {
        let Some(item_id) = self.hit_test(pos.0, pos.1) else {
            return InputResponse::Ignored;
        };
        self.select(Some(item_id));

        let can_edit_text = self
            .get_item(item_id)
            .is_some_and(|item| item.content.is_text());
        InputResponse::ContextMenu(ContextMenu {
            item_id,
            can_edit_text,
        })
    }
}
