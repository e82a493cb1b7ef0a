//! Inspector - the side panel that mirrors board state.
//!
//! The inspector never owns item data. It subscribes to board events and
//! rebuilds an [`InspectorView`] from the board on each one, and it changes
//! the board only through ordinary board operations.
//!
//! While the host pushes a freshly derived view into its widgets, setting a
//! slider programmatically usually fires the widget's change callback. The
//! inspector holds a [`SyncGuard`] during its own refresh and exposes
//! [`Inspector::sync_guard`] for the host, and [`Inspector::slider_moved`]
//! ignores input while either is held.

use crate::board::Board;
use crate::events::SubscriptionId;
use crate::types::ItemContent;
use serde::Serialize;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tracing::{debug, warn};

pub const SLIDER_MIN_PERCENT: f32 = 20.0;
pub const SLIDER_MAX_PERCENT: f32 = 400.0;
pub const NO_SELECTION_LABEL: &str = "(none selected)";

/// Everything the inspector panel displays, derived from the board.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InspectorView {
    /// One line per placed item, in insertion order
    pub lines: Vec<String>,
    pub selection_label: String,
    /// Slider value in percent; 100 when nothing is selected
    pub slider_percent: u32,
    /// Label of the selected text item, empty otherwise
    pub text_value: String,
    pub text_controls_enabled: bool,
}

impl Default for InspectorView {
    fn default() -> Self {
        Self {
            lines: Vec::new(),
            selection_label: NO_SELECTION_LABEL.to_string(),
            slider_percent: 100,
            text_value: String::new(),
            text_controls_enabled: false,
        }
    }
}

impl InspectorView {
    pub fn from_board(board: &Board) -> Self {
        let lines = board
            .summaries()
            .iter()
            .enumerate()
            .map(|(i, s)| {
                let label = match &s.text {
                    Some(text) => format!("{}: \"{}\"", s.name, text),
                    None => s.name.clone(),
                };
                format!("{}. {} @ ({}, {})", i + 1, label, s.x as i64, s.y as i64)
            })
            .collect();

        let Some(item) = board.selected_item() else {
            return Self {
                lines,
                ..Self::default()
            };
        };

        let slider_percent = (item.scale * 100.0).round() as u32;
        match &item.content {
            ItemContent::Text { text, .. } => Self {
                lines,
                selection_label: format!("{} (text)", item.name),
                slider_percent,
                text_value: text.clone(),
                text_controls_enabled: true,
            },
            ItemContent::Image { .. } => Self {
                lines,
                selection_label: item.name.clone(),
                slider_percent,
                text_value: String::new(),
                text_controls_enabled: false,
            },
        }
    }

    /// The full listing panel text.
    pub fn listing(&self) -> String {
        let mut out = String::from("Placed symbols:\n\n");
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}

/// Marks the inspector as syncing until dropped. Nests safely.
#[derive(Debug)]
pub struct SyncGuard {
    flag: Rc<Cell<bool>>,
    previous: bool,
}

impl SyncGuard {
    fn enter(flag: &Rc<Cell<bool>>) -> Self {
        let previous = flag.replace(true);
        Self {
            flag: Rc::clone(flag),
            previous,
        }
    }
}

impl Drop for SyncGuard {
    fn drop(&mut self) {
        self.flag.set(self.previous);
    }
}

/// Board observer holding the derived view.
///
/// Call [`Inspector::detach`] to remove its listener. An inspector dropped
/// while attached frees its view, and the listener it leaves behind does
/// nothing.
#[derive(Debug)]
pub struct Inspector {
    view: Rc<RefCell<InspectorView>>,
    syncing: Rc<Cell<bool>>,
    refreshes: Rc<Cell<u64>>,
    subscription: Option<SubscriptionId>,
}

impl Inspector {
    /// Subscribe to `board` and derive the initial view.
    pub fn attach(board: &mut Board) -> Self {
        let view = Rc::new(RefCell::new(InspectorView::from_board(board)));
        let syncing = Rc::new(Cell::new(false));
        let refreshes = Rc::new(Cell::new(0));

        let subscription = {
            let view = Rc::downgrade(&view);
            let syncing = Rc::downgrade(&syncing);
            let refreshes = Rc::downgrade(&refreshes);
            board.subscribe(move |event, board| {
                let (Some(view), Some(syncing), Some(refreshes)) =
                    (view.upgrade(), syncing.upgrade(), refreshes.upgrade())
                else {
                    return;
                };
                let _guard = SyncGuard::enter(&syncing);
                match view.try_borrow_mut() {
                    Ok(mut view) => *view = InspectorView::from_board(board),
                    Err(_) => {
                        warn!("Inspector view busy, skipped refresh for {:?}", event.kind());
                        return;
                    }
                }
                refreshes.set(refreshes.get() + 1);
            })
        };
        debug!("Inspector attached ({:?})", subscription);

        Self {
            view,
            syncing,
            refreshes,
            subscription: Some(subscription),
        }
    }

    /// Stop listening to `board`. The last view stays readable.
    pub fn detach(&mut self, board: &mut Board) -> bool {
        match self.subscription.take() {
            Some(id) => board.unsubscribe(id),
            None => false,
        }
    }

    pub fn is_attached(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn view(&self) -> InspectorView {
        self.view.borrow().clone()
    }

    /// Number of refreshes since attaching.
    pub fn refresh_count(&self) -> u64 {
        self.refreshes.get()
    }

    pub fn is_syncing(&self) -> bool {
        self.syncing.get()
    }

    /// Hold while writing the view into widgets.
    pub fn sync_guard(&self) -> SyncGuard {
        SyncGuard::enter(&self.syncing)
    }

    // ==================== Writes ====================

    /// Slider input from the user, in percent.
    ///
    /// Returns false when ignored: during sync, or with nothing selected.
    pub fn slider_moved(&self, board: &mut Board, percent: f32) -> bool {
        if self.is_syncing() {
            debug!("Slider change ignored during sync");
            return false;
        }
        if !percent.is_finite() {
            return false;
        }
        let percent = percent.clamp(SLIDER_MIN_PERCENT, SLIDER_MAX_PERCENT);
        board.set_selected_scale_absolute(percent / 100.0)
    }

    pub fn duplicate(&self, board: &mut Board) -> Option<u64> {
        board.duplicate_selected()
    }

    pub fn delete(&self, board: &mut Board) -> bool {
        board.delete_selected()
    }

    pub fn apply_text(&self, board: &mut Board, text: &str) -> bool {
        board.edit_selected_text(text)
    }
}
