//! Pointer, wheel and keyboard input handling for the board.
//!
//! ## Architecture
//!
//! The host surface translates its native events into [`InputEvent`]s in board
//! coordinates and hands them to [`Board::handle_input`]. Gesture tracking is
//! an explicit state machine (`InputState`) so a drag without a selection
//! cannot be represented.
//!
//! ## Modules
//!
//! - `state` - Gesture state machine enum and helper methods
//! - `events` - Input events, context menu and handler responses
//! - `mouse_down` - Pointer down (selection, drag start, context menu)
//! - `drag` - Pointer move while dragging
//! - `mouse_up` - Pointer up (end drag)
//! - `keyboard` - Key bindings and Ctrl+wheel resize

mod drag;
mod events;
mod keyboard;
mod mouse_down;
mod mouse_up;
mod state;

pub use events::{ContextMenu, InputEvent, InputResponse, Key, MenuAction, Modifiers, PointerButton};
pub use state::{GesturePhase, InputState};

use crate::board::Board;

impl Board {
    /// Route one input event to its handler.
    pub fn handle_input(&mut self, event: InputEvent) -> InputResponse {
        match event {
            InputEvent::PointerDown { pos, button } => self.handle_pointer_down(pos, button),
            InputEvent::PointerMove { pos } => self.handle_pointer_move(pos),
            InputEvent::PointerUp { pos, button } => self.handle_pointer_up(pos, button),
            InputEvent::Wheel { delta, modifiers } => self.handle_wheel(delta, modifiers),
            InputEvent::Key { key, modifiers } => self.handle_key(key, modifiers),
        }
    }
}
