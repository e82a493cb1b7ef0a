//! Keyboard bindings and Ctrl+wheel resize.
//!
//! | Input                     | Effect                          |
//! |---------------------------|---------------------------------|
//! | `Delete`                  | delete the selection            |
//! | `+` / keypad `+`          | grow by the resize step         |
//! | `-` / keypad `-`          | shrink by the resize step       |
//! | arrows                    | nudge by the nudge step         |
//! | Ctrl + wheel              | grow (up) or shrink (down)      |

use crate::board::Board;
use crate::input::{InputResponse, Key, Modifiers};

impl Board {
    pub fn handle_key(&mut self, key: Key, _modifiers: Modifiers) -> InputResponse {
        let step = self.settings.resize_step;
        let nudge = self.settings.nudge_step;

        let changed = match key {
            Key::Delete => self.delete_selected(),
            Key::Plus | Key::KeypadPlus => self.resize_selected_by(step),
            Key::Minus | Key::KeypadMinus => self.resize_selected_by(1.0 / step),
            Key::Left => self.nudge_selected(-nudge, 0.0),
            Key::Right => self.nudge_selected(nudge, 0.0),
            Key::Up => self.nudge_selected(0.0, -nudge),
            Key::Down => self.nudge_selected(0.0, nudge),
        };
        InputResponse::from_changed(changed)
    }

    /// Resize on Ctrl+wheel; a plain wheel is left to the host for scrolling.
    pub fn handle_wheel(&mut self, delta: f32, modifiers: Modifiers) -> InputResponse {
        if !modifiers.control || delta == 0.0 || !delta.is_finite() {
            return InputResponse::Ignored;
        }
        let step = self.settings.resize_step;
        let factor = if delta > 0.0 { step } else { 1.0 / step };
        InputResponse::from_changed(self.resize_selected_by(factor))
    }
}
