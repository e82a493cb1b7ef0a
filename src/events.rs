//! Board change notifications.
//!
//! A closed set of event kinds delivered synchronously, in operation order,
//! after the mutation that caused them has completed. Listeners receive the
//! board itself so they can re-derive whatever they display.

use crate::board::Board;

/// A change to the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardEvent {
    /// A new item was added (placement or duplication)
    Placed { id: u64 },
    /// An item's geometry, text or stacking changed
    Moved { id: u64 },
    /// Items were deleted; `ids` is empty when clearing an empty board
    Removed { ids: Vec<u64> },
    /// The selection changed to `selected`
    SelectionChanged { selected: Option<u64> },
}

impl BoardEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            BoardEvent::Placed { .. } => EventKind::Placed,
            BoardEvent::Moved { .. } => EventKind::Moved,
            BoardEvent::Removed { .. } => EventKind::Removed,
            BoardEvent::SelectionChanged { .. } => EventKind::SelectionChanged,
        }
    }
}

/// Discriminant of [`BoardEvent`], handy for filtering and assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Placed,
    Moved,
    Removed,
    SelectionChanged,
}

/// Handle returned by [`EventBus::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub type Listener = Box<dyn FnMut(&BoardEvent, &Board)>;

/// Listener registry owned by the board.
#[derive(Default)]
pub struct EventBus {
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("listeners", &format!("<{} listeners>", self.listeners.len()))
            .finish()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, listener: Listener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, listener));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Detach every listener so they can be called with a shared borrow of
    /// the board that owns this bus.
    pub(crate) fn take(&mut self) -> Vec<(SubscriptionId, Listener)> {
        std::mem::take(&mut self.listeners)
    }

    /// Reattach listeners after delivery, keeping their subscription order.
    pub(crate) fn restore(&mut self, mut listeners: Vec<(SubscriptionId, Listener)>) {
        listeners.append(&mut self.listeners);
        self.listeners = listeners;
    }
}
