//! Core types for the symbol board.
//!
//! This module defines the fundamental data structures placed on the board:
//! asset references coming from the palette and the board items built from
//! them. Displayed sizes are always derived from the stored base values and
//! the item scale, never stored themselves.

use crate::constants::MAX_RENDITION_PX;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Where an asset's content comes from.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceRef {
    /// An image file in the symbol library
    Image(PathBuf),
    /// The synthetic text tool entry
    TextTool,
}

impl SourceRef {
    pub fn is_text_tool(&self) -> bool {
        matches!(self, SourceRef::TextTool)
    }

    pub fn image_path(&self) -> Option<&Path> {
        match self {
            SourceRef::Image(path) => Some(path),
            SourceRef::TextTool => None,
        }
    }
}

/// An immutable palette entry: a glyph image or the text tool.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetRef {
    /// Human-readable name shown in the palette and inspector
    pub display_name: String,
    /// Content source
    pub source: SourceRef,
}

impl AssetRef {
    pub fn image(display_name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            display_name: display_name.into(),
            source: SourceRef::Image(path.into()),
        }
    }

    pub fn text_tool(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            source: SourceRef::TextTool,
        }
    }
}

/// Axis-aligned bounds in board coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl Bounds {
    /// Bounds of a box of `size` centred on `center`.
    pub fn centered(center: (f32, f32), size: (f32, f32)) -> Self {
        let half_w = size.0 / 2.0;
        let half_h = size.1 / 2.0;
        Self {
            min_x: center.0 - half_w,
            min_y: center.1 - half_h,
            max_x: center.0 + half_w,
            max_y: center.1 + half_h,
        }
    }

    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }

    #[inline]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

/// What a board item shows.
///
/// The variant decides hit-testing, resizing, duplication and rendering, so
/// every operation that varies by kind matches on it exhaustively.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ItemContent {
    /// A glyph image
    Image {
        /// Palette entry this item was placed from
        asset: AssetRef,
        /// Natural pixel size of the bitmap, read once at placement
        intrinsic_size: (u32, u32),
        /// Unscaled reference size the item scale multiplies
        base_display_size: (f32, f32),
        /// True when the asset could not be read and a blank stand-in is shown
        placeholder: bool,
    },
    /// A free-text label (unit code)
    Text {
        /// Label text, never empty
        text: String,
        /// Font family used to render the label
        font_family: String,
        /// Unscaled font size in points
        base_font_size: u32,
    },
}

impl ItemContent {
    pub fn type_label(&self) -> &'static str {
        match self {
            ItemContent::Image { .. } => "IMAGE",
            ItemContent::Text { .. } => "TEXT",
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, ItemContent::Text { .. })
    }
}

/// One placed item on the board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardItem {
    /// Unique identifier, never reused within a session
    pub id: u64,
    /// Palette name the item was placed from
    pub name: String,
    /// Centre of the item in board coordinates (x, y)
    pub position: (f32, f32),
    /// Scale relative to the base size, within [MIN_SCALE, MAX_SCALE]
    pub scale: f32,
    /// Paint and hit-test priority; higher is on top
    pub z_order: i64,
    /// The content this item displays
    pub content: ItemContent,
}

impl BoardItem {
    /// Displayed image size, `None` for text items.
    pub fn display_size(&self) -> Option<(f32, f32)> {
        match &self.content {
            ItemContent::Image {
                base_display_size, ..
            } => Some((
                base_display_size.0 * self.scale,
                base_display_size.1 * self.scale,
            )),
            ItemContent::Text { .. } => None,
        }
    }

    /// Pixel size of the bitmap to request from the rescaler.
    ///
    /// The longest side is capped at `MAX_RENDITION_PX`, keeping the aspect.
    pub fn rendition_size(&self) -> Option<(u32, u32)> {
        self.display_size().map(|(w, h)| {
            let cap = MAX_RENDITION_PX as f32;
            let px = |v: f32| (v.floor() as u32).clamp(1, MAX_RENDITION_PX);
            if w.max(h) <= cap {
                (px(w), px(h))
            } else if w >= h {
                (MAX_RENDITION_PX, px(h * cap / w))
            } else {
                (px(w * cap / h), MAX_RENDITION_PX)
            }
        })
    }

    /// Displayed font size, `None` for image items.
    pub fn font_size(&self) -> Option<f32> {
        match &self.content {
            ItemContent::Text { base_font_size, .. } => Some(*base_font_size as f32 * self.scale),
            ItemContent::Image { .. } => None,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match &self.content {
            ItemContent::Text { text, .. } => Some(text),
            ItemContent::Image { .. } => None,
        }
    }

    pub fn asset(&self) -> Option<&AssetRef> {
        match &self.content {
            ItemContent::Image { asset, .. } => Some(asset),
            ItemContent::Text { .. } => None,
        }
    }

    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.position.0 += dx;
        self.position.1 += dy;
    }
}

/// Clamp a scale value into `[min, max]`.
///
/// NaN input collapses to the lower bound so a bad slider value can never
/// poison the item.
pub fn clamp_scale_to(value: f32, min: f32, max: f32) -> f32 {
    if value.is_nan() {
        return min;
    }
    value.clamp(min, max)
}

/// True when both coordinates are finite. Anything else is kept out of the
/// spatial index.
pub fn is_finite_point(point: (f32, f32)) -> bool {
    point.0.is_finite() && point.1.is_finite()
}

/// Read-only per-item tuple consumed by the inspector listing.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ItemSummary {
    pub id: u64,
    pub name: String,
    pub text: Option<String>,
    pub x: f32,
    pub y: f32,
}

/// Dashed rectangle drawn around the current selection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SelectionOutline {
    pub item_id: u64,
    pub bounds: Bounds,
    pub dash: (u8, u8),
    pub color: &'static str,
}
