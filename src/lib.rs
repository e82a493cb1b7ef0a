//! Editor core for composing unit symbols on a 2D board.
//!
//! The [`Board`] owns placed items, the single selection and the pointer
//! gesture state; observers such as the [`Inspector`] follow it through
//! [`BoardEvent`]s. The [`composite`] module builds frame-and-slot symbols
//! from a typed manifest and exports them as JSON.

pub mod assets;
pub mod board;
pub mod composite;
pub mod constants;
pub mod error;
pub mod events;
pub mod input;
pub mod inspector;
pub mod library;
pub mod logging;
pub mod palette;
pub mod perf;
pub mod settings;
pub mod spatial_index;
pub mod text_metrics;
pub mod types;

pub use board::Board;
pub use composite::{Affiliation, CompositeSymbol, SymbolKind, SymbolManifest};
pub use error::{AssetError, ExportError, SettingsError};
pub use events::{BoardEvent, EventKind, SubscriptionId};
pub use input::{ContextMenu, GesturePhase, InputEvent, InputResponse, Key, MenuAction, Modifiers, PointerButton};
pub use inspector::{Inspector, InspectorView};
pub use palette::{Palette, PaletteDrag, PlacementRequest};
pub use settings::Settings;
pub use types::{AssetRef, BoardItem, Bounds, ItemContent, ItemSummary, SelectionOutline, SourceRef};
