//! Input events delivered by the host surface.

/// Pointer buttons the board reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// Keys with a board binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Delete,
    Plus,
    Minus,
    KeypadPlus,
    KeypadMinus,
    Left,
    Right,
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub control: bool,
    pub shift: bool,
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        control: false,
        shift: false,
        alt: false,
    };

    pub const CONTROL: Modifiers = Modifiers {
        control: true,
        shift: false,
        alt: false,
    };
}

/// One input event in board coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown {
        pos: (f32, f32),
        button: PointerButton,
    },
    PointerMove {
        pos: (f32, f32),
    },
    PointerUp {
        pos: (f32, f32),
        button: PointerButton,
    },
    /// Wheel rotation; positive `delta` scrolls up / away from the user
    Wheel {
        delta: f32,
        modifiers: Modifiers,
    },
    Key {
        key: Key,
        modifiers: Modifiers,
    },
}

/// Commands offered by the item context menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Start editing the label; only offered for text items
    EditText,
    Duplicate,
    BringToFront,
    SendToBack,
    Delete,
}

/// Context menu to show after a secondary click on an item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextMenu {
    pub item_id: u64,
    pub can_edit_text: bool,
}

impl ContextMenu {
    /// Entries in display order, with `EditText` disabled for images.
    pub fn entries(&self) -> Vec<(MenuAction, bool)> {
        vec![
            (MenuAction::EditText, self.can_edit_text),
            (MenuAction::Duplicate, true),
            (MenuAction::BringToFront, true),
            (MenuAction::SendToBack, true),
            (MenuAction::Delete, true),
        ]
    }
}

/// What the board did with an input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputResponse {
    /// The event had no effect
    Ignored,
    /// The event changed board or gesture state
    Handled,
    /// The host should show this menu
    ContextMenu(ContextMenu),
}

impl InputResponse {
    pub fn is_handled(&self) -> bool {
        !matches!(self, InputResponse::Ignored)
    }

    pub(crate) fn from_changed(changed: bool) -> Self {
        if changed {
            InputResponse::Handled
        } else {
            InputResponse::Ignored
        }
    }
}
