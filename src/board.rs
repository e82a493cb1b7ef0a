//! The board - owner of all placed items, the selection and gesture state.
//!
//! Every mutation goes through a method on [`Board`]. Each method finishes its
//! mutation (items, spatial index, selection) before notifying listeners, so
//! a listener reading the board always sees the post-mutation state.
//!
//! Pointer and keyboard handling lives in [`crate::input`] as further `impl
//! Board` blocks.

use crate::assets::{placeholder, rescale_or_placeholder, FileRescaler, ImageRescaler};
use crate::constants::{PLACEHOLDER_ASPECT, SCALE_EPSILON, SELECTION_COLOR, SELECTION_DASH};
use crate::events::{BoardEvent, EventBus, SubscriptionId};
use crate::input::{GesturePhase, InputState, MenuAction};
use crate::palette::PlacementRequest;
use crate::settings::Settings;
use crate::spatial_index::SpatialIndex;
use crate::text_metrics::{render_font_px, ApproxTextMetrics, TextMetrics};
use crate::types::{
    clamp_scale_to, is_finite_point, AssetRef, BoardItem, Bounds, ItemContent, ItemSummary,
    SelectionOutline, SourceRef,
};
use image::RgbaImage;
use tracing::{debug, warn};

pub struct Board {
    /// Items in insertion order; paint order is derived from `z_order`
    pub(crate) items: Vec<BoardItem>,
    /// The single selected item, if any
    pub(crate) selected: Option<u64>,
    /// Transient drag tracking
    pub(crate) input_state: InputState,
    /// Next id to hand out; never rewound, so ids are not reused
    pub(crate) next_item_id: u64,
    pub(crate) index: SpatialIndex,
    pub(crate) settings: Settings,
    images: Box<dyn ImageRescaler>,
    metrics: Box<dyn TextMetrics>,
    bus: EventBus,
}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Board")
            .field("items", &self.items)
            .field("selected", &self.selected)
            .field("input_state", &self.input_state)
            .field("next_item_id", &self.next_item_id)
            .field("bus", &self.bus)
            .finish()
    }
}

impl Board {
    /// A board reading images from disk and estimating text extents.
    pub fn new(settings: Settings) -> Self {
        Self::with_services(settings, Box::new(FileRescaler), Box::new(ApproxTextMetrics))
    }

    pub fn with_services(
        settings: Settings,
        images: Box<dyn ImageRescaler>,
        metrics: Box<dyn TextMetrics>,
    ) -> Self {
        Self {
            items: Vec::new(),
            selected: None,
            input_state: InputState::Idle,
            next_item_id: 0,
            index: SpatialIndex::new(),
            settings: settings.normalized(),
            images,
            metrics,
            bus: EventBus::new(),
        }
    }

    /// A board with default settings, for tests and previews.
    pub fn new_for_test() -> Self {
        Self::new(Settings::default())
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    // ==================== Observers ====================

    /// Register a listener called synchronously after every change.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&BoardEvent, &Board) + 'static,
    {
        self.bus.subscribe(Box::new(listener))
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.bus.unsubscribe(id)
    }

    pub(crate) fn notify(&mut self, event: BoardEvent) {
        let mut listeners = self.bus.take();
        for (_, listener) in listeners.iter_mut() {
            listener(&event, self);
        }
        self.bus.restore(listeners);
    }

    // ==================== Queries ====================

    pub fn items(&self) -> &[BoardItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get_item(&self, id: u64) -> Option<&BoardItem> {
        self.items.iter().find(|item| item.id == id)
    }

    fn item_mut(&mut self, id: u64) -> Option<&mut BoardItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    pub fn selected_id(&self) -> Option<u64> {
        self.selected
    }

    pub fn selected_item(&self) -> Option<&BoardItem> {
        self.selected.and_then(|id| self.get_item(id))
    }

    pub fn selected_scale(&self) -> Option<f32> {
        self.selected_item().map(|item| item.scale)
    }

    pub fn phase(&self) -> GesturePhase {
        if self.input_state.is_dragging() {
            GesturePhase::Dragging
        } else if self.selected.is_some() {
            GesturePhase::Selected
        } else {
            GesturePhase::Idle
        }
    }

    /// True while a drag holds the pointer; the host must route every pointer
    /// move and release to the board regardless of what lies under it.
    pub fn has_pointer_capture(&self) -> bool {
        self.input_state.is_dragging()
    }

    /// Items bottom to top. Equal z-orders keep insertion order.
    pub fn items_in_paint_order(&self) -> Vec<&BoardItem> {
        let mut ordered: Vec<&BoardItem> = self.items.iter().collect();
        ordered.sort_by_key(|item| item.z_order);
        ordered
    }

    /// Current bounding box of an item.
    pub fn item_bounds(&self, id: u64) -> Option<Bounds> {
        self.get_item(id).map(|item| self.compute_bounds(item))
    }

    fn compute_bounds(&self, item: &BoardItem) -> Bounds {
        match &item.content {
            ItemContent::Image {
                base_display_size, ..
            } => Bounds::centered(
                item.position,
                (
                    base_display_size.0 * item.scale,
                    base_display_size.1 * item.scale,
                ),
            ),
            ItemContent::Text {
                text,
                font_family,
                base_font_size,
            } => {
                let font_px = render_font_px(*base_font_size as f32 * item.scale);
                let size = self.metrics.measure(text, font_family, font_px);
                Bounds::centered(item.position, size)
            }
        }
    }

    /// Topmost item under the point, honoring z-order.
    pub fn hit_test(&self, x: f32, y: f32) -> Option<u64> {
        crate::profile_scope!("hit_test");

        let candidates = self.index.query_point(x, y);
        if candidates.is_empty() {
            return None;
        }

        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| candidates.contains(&item.id))
            .max_by_key(|(i, item)| (item.z_order, *i))
            .map(|(_, item)| item.id)
    }

    /// Dashed outline around the selection, sized to its current bounds.
    pub fn selection_outline(&self) -> Option<SelectionOutline> {
        let item = self.selected_item()?;
        Some(SelectionOutline {
            item_id: item.id,
            bounds: self.compute_bounds(item),
            dash: SELECTION_DASH,
            color: SELECTION_COLOR,
        })
    }

    /// Read-only listing of placed items in insertion order.
    pub fn summaries(&self) -> Vec<ItemSummary> {
        self.items
            .iter()
            .map(|item| ItemSummary {
                id: item.id,
                name: item.name.clone(),
                text: item.text().map(str::to_string),
                x: item.position.0,
                y: item.position.1,
            })
            .collect()
    }

    /// Bitmap for an image item at its displayed size. Text items have none.
    pub fn rendition(&self, id: u64) -> Option<RgbaImage> {
        let item = self.get_item(id)?;
        let size = item.rendition_size()?;
        match &item.content {
            ItemContent::Image {
                placeholder: true, ..
            } => Some(placeholder(size)),
            ItemContent::Image { asset, .. } => match asset.source.image_path() {
                Some(path) => Some(rescale_or_placeholder(self.images.as_ref(), path, size)),
                None => Some(placeholder(size)),
            },
            ItemContent::Text { .. } => None,
        }
    }

    fn top_z(&self) -> i64 {
        self.items
            .iter()
            .map(|item| item.z_order)
            .max()
            .map_or(0, |z| z + 1)
    }

    fn bottom_z(&self) -> i64 {
        self.items
            .iter()
            .map(|item| item.z_order)
            .min()
            .map_or(0, |z| z - 1)
    }

    fn clamp(&self, scale: f32) -> f32 {
        clamp_scale_to(scale, self.settings.min_scale, self.settings.max_scale)
    }

    fn reindex(&mut self, id: u64) {
        if let Some(bounds) = self.item_bounds(id) {
            self.index.upsert(id, bounds);
        }
    }

    // ==================== Selection ====================

    /// Make `id` the sole selection (or clear it with `None`).
    ///
    /// Unknown ids clear the selection. Changing the selection ends any drag.
    /// Returns true if the selection changed.
    pub fn select(&mut self, id: Option<u64>) -> bool {
        let id = id.filter(|id| self.get_item(*id).is_some());
        if id == self.selected {
            return false;
        }
        self.selected = id;
        self.input_state.reset();
        debug!("Selection changed to {:?}", id);
        self.notify(BoardEvent::SelectionChanged { selected: id });
        true
    }

    // ==================== Placement ====================

    /// Place an asset centered on `drop_point` using the configured base size.
    pub fn place(&mut self, asset: &AssetRef, drop_point: (f32, f32)) -> u64 {
        let base_px = self.settings.base_px;
        self.place_with_base(asset, drop_point, base_px)
    }

    pub fn place_request(&mut self, request: &PlacementRequest) -> u64 {
        self.place(&request.asset, request.drop_point)
    }

    /// Place an asset with images capped to `base_px` on their longest side.
    pub fn place_with_base(&mut self, asset: &AssetRef, drop_point: (f32, f32), base_px: f32) -> u64 {
        let base_px = if base_px.is_finite() && base_px > 0.0 {
            base_px
        } else {
            self.settings.base_px
        };
        let drop_point = if is_finite_point(drop_point) {
            drop_point
        } else {
            warn!("Non-finite drop point {:?}, placing at the origin", drop_point);
            (0.0, 0.0)
        };

        let (content, scale) = match &asset.source {
            SourceRef::TextTool => (
                ItemContent::Text {
                    text: self.settings.default_text.clone(),
                    font_family: self.settings.font_family.clone(),
                    base_font_size: self.settings.base_font_size,
                },
                1.0,
            ),
            SourceRef::Image(path) => {
                let (intrinsic_size, is_placeholder) = match self.images.intrinsic_size(path) {
                    Ok((w, h)) if w > 0 && h > 0 => ((w, h), false),
                    Ok(size) => {
                        warn!("Image {} reports empty size {:?}", path.display(), size);
                        (placeholder_size(base_px), true)
                    }
                    Err(e) => {
                        warn!("Placing placeholder for {}: {}", path.display(), e);
                        (placeholder_size(base_px), true)
                    }
                };
                let longest = intrinsic_size.0.max(intrinsic_size.1).max(1) as f32;
                let scale = (base_px / longest).min(1.0);
                (
                    ItemContent::Image {
                        asset: asset.clone(),
                        intrinsic_size,
                        base_display_size: (intrinsic_size.0 as f32, intrinsic_size.1 as f32),
                        placeholder: is_placeholder,
                    },
                    scale,
                )
            }
        };

        let item = BoardItem {
            id: self.next_item_id,
            name: asset.display_name.clone(),
            position: drop_point,
            scale: self.clamp(scale),
            z_order: self.top_z(),
            content,
        };
        self.insert_new(item)
    }

    /// Add a fully built item on top, select it and announce it.
    fn insert_new(&mut self, item: BoardItem) -> u64 {
        let id = item.id;
        self.next_item_id = self.next_item_id.max(id) + 1;
        debug!(
            "Placed {} item {} '{}' at {:?} (scale {:.3}, z {})",
            item.content.type_label(),
            id,
            item.name,
            item.position,
            item.scale,
            item.z_order
        );
        self.items.push(item);
        self.reindex(id);
        self.notify(BoardEvent::Placed { id });
        self.select(Some(id));
        id
    }

    // ==================== Transforms ====================

    /// Multiply the selected item's scale by `factor`, clamped.
    ///
    /// Changes below `SCALE_EPSILON` are dropped without an event, so wheel
    /// ticks against a bound do not flood listeners.
    pub fn resize_selected_by(&mut self, factor: f32) -> bool {
        let Some(item) = self.selected_item() else {
            return false;
        };
        if !factor.is_finite() {
            return false;
        }
        let (id, current) = (item.id, item.scale);
        let next = self.clamp(current * factor);
        if (next - current).abs() < SCALE_EPSILON {
            return false;
        }
        self.apply_scale(id, next);
        true
    }

    /// Set the selected item's scale directly, clamped. Always applies.
    pub fn set_selected_scale_absolute(&mut self, value: f32) -> bool {
        let Some(id) = self.selected else {
            return false;
        };
        let next = self.clamp(value);
        self.apply_scale(id, next);
        true
    }

    fn apply_scale(&mut self, id: u64, scale: f32) {
        let Some(item) = self.item_mut(id) else {
            return;
        };
        item.scale = scale;
        self.reindex(id);
        self.notify(BoardEvent::Moved { id });
    }

    /// Translate the selected item.
    pub fn nudge_selected(&mut self, dx: f32, dy: f32) -> bool {
        let Some(id) = self.selected else {
            return false;
        };
        self.translate_item(id, dx, dy)
    }

    /// Returns false, leaving the item in place, if the move is not finite.
    pub(crate) fn translate_item(&mut self, id: u64, dx: f32, dy: f32) -> bool {
        let Some(item) = self.item_mut(id) else {
            return false;
        };
        let next = (item.position.0 + dx, item.position.1 + dy);
        if !is_finite_point((dx, dy)) || !is_finite_point(next) {
            debug!("Rejected non-finite move of item {} by ({}, {})", id, dx, dy);
            return false;
        }
        item.translate(dx, dy);
        self.reindex(id);
        self.notify(BoardEvent::Moved { id });
        true
    }

    // ==================== Duplicate / Arrange ====================

    /// Copy the selected item, offset it and select the copy.
    pub fn duplicate_selected(&mut self) -> Option<u64> {
        let source = self.selected_item()?.clone();
        let (dx, dy) = self.settings.duplicate_offset;
        let offset = (source.position.0 + dx, source.position.1 + dy);
        let copy = BoardItem {
            id: self.next_item_id,
            position: if is_finite_point(offset) { offset } else { source.position },
            z_order: self.top_z(),
            ..source
        };
        Some(self.insert_new(copy))
    }

    pub fn bring_to_front(&mut self) -> bool {
        let z = self.top_z();
        self.restack_selected(z)
    }

    pub fn send_to_back(&mut self) -> bool {
        let z = self.bottom_z();
        self.restack_selected(z)
    }

    fn restack_selected(&mut self, z: i64) -> bool {
        let Some(id) = self.selected else {
            return false;
        };
        let Some(item) = self.item_mut(id) else {
            return false;
        };
        item.z_order = z;
        debug!("Item {} restacked to z {}", id, z);
        self.notify(BoardEvent::Moved { id });
        true
    }

    // ==================== Delete / Clear ====================

    pub fn delete_selected(&mut self) -> bool {
        match self.selected {
            Some(id) => self.delete_item(id),
            None => false,
        }
    }

    /// Remove any item. The selection is cleared only if it was this item.
    pub fn delete_item(&mut self, id: u64) -> bool {
        let Some(pos) = self.items.iter().position(|item| item.id == id) else {
            return false;
        };
        self.items.remove(pos);
        self.index.remove(id);
        if self.input_state.dragged_item_id() == Some(id) {
            self.input_state.reset();
        }
        let was_selected = self.selected == Some(id);
        if was_selected {
            self.selected = None;
        }
        debug!("Deleted item {}", id);
        self.notify(BoardEvent::Removed { ids: vec![id] });
        if was_selected {
            self.notify(BoardEvent::SelectionChanged { selected: None });
        }
        true
    }

    /// Remove every item and reset selection and gesture state.
    pub fn clear(&mut self) {
        let ids: Vec<u64> = self.items.iter().map(|item| item.id).collect();
        self.items.clear();
        self.index.clear();
        self.input_state.reset();
        let had_selection = self.selected.take().is_some();
        debug!("Cleared {} items", ids.len());
        self.notify(BoardEvent::Removed { ids });
        if had_selection {
            self.notify(BoardEvent::SelectionChanged { selected: None });
        }
    }

    // ==================== Text ====================

    /// Replace the selected text item's label.
    ///
    /// Input is trimmed; an empty result becomes the default label. Image or
    /// empty selections are left untouched.
    pub fn edit_selected_text(&mut self, new_text: &str) -> bool {
        let Some(id) = self.selected else {
            return false;
        };
        let trimmed = new_text.trim();
        let label = if trimmed.is_empty() {
            self.settings.default_text.clone()
        } else {
            trimmed.to_string()
        };

        let Some(item) = self.item_mut(id) else {
            return false;
        };
        match &mut item.content {
            ItemContent::Text { text, .. } => *text = label,
            ItemContent::Image { .. } => {
                debug!("Ignoring text edit on image item {}", id);
                return false;
            }
        }
        self.reindex(id);
        self.notify(BoardEvent::Moved { id });
        true
    }

    // ==================== Context Menu ====================

    /// Run a context menu command against the selection.
    ///
    /// `EditText` only reports whether a label editor may be opened; the host
    /// then calls [`Board::edit_selected_text`] with the result.
    pub fn apply_menu_action(&mut self, action: MenuAction) -> bool {
        match action {
            MenuAction::EditText => self.selected_item().is_some_and(|item| item.content.is_text()),
            MenuAction::Duplicate => self.duplicate_selected().is_some(),
            MenuAction::BringToFront => self.bring_to_front(),
            MenuAction::SendToBack => self.send_to_back(),
            MenuAction::Delete => self.delete_selected(),
        }
    }
}

fn placeholder_size(base_px: f32) -> (u32, u32) {
    let w = (base_px.floor() as u32).max(1);
    let h = ((base_px * PLACEHOLDER_ASPECT).floor() as u32).max(1);
    (w, h)
}
