//! Application-wide constants.
//!
//! Centralizes the magic numbers of the board model so that the settings
//! defaults, the interaction state machine and the tests agree on them.

// ============================================================================
// Placement
// ============================================================================

/// Largest displayed dimension of a freshly placed image, in board pixels
pub const DEFAULT_BASE_PX: f32 = 160.0;

/// Height ratio of the placeholder used when an image cannot be read
pub const PLACEHOLDER_ASPECT: f32 = 0.7;

/// Longest side of a rendered image bitmap, in pixels
pub const MAX_RENDITION_PX: u32 = 4096;

/// Palette label of the synthetic text tool
pub const TEXT_TOOL_NAME: &str = "Text Box (Unit Code)";

// ============================================================================
// Scale
// ============================================================================

/// Smallest allowed item scale
pub const MIN_SCALE: f32 = 0.2;

/// Largest allowed item scale
pub const MAX_SCALE: f32 = 4.0;

/// Scale changes smaller than this are dropped by `resize_selected_by`
pub const SCALE_EPSILON: f32 = 1e-4;

/// Factor applied per `+`/`-` key press or wheel tick
pub const RESIZE_STEP: f32 = 1.15;

// ============================================================================
// Movement
// ============================================================================

/// Distance moved per arrow key press
pub const NUDGE_STEP: f32 = 5.0;

/// Offset applied to duplicates relative to their source
pub const DUPLICATE_OFFSET: (f32, f32) = (25.0, 25.0);

// ============================================================================
// Text Items
// ============================================================================

/// Label given to new text items and to labels edited down to nothing
pub const DEFAULT_TEXT: &str = "UNIT";

/// Font family for new text items
pub const DEFAULT_FONT_FAMILY: &str = "Segoe UI";

/// Base font size for new text items, in points
pub const DEFAULT_FONT_SIZE: u32 = 18;

/// Smallest font size a text item is rendered (and measured) at
pub const MIN_RENDER_FONT_SIZE: f32 = 8.0;

// ============================================================================
// Selection Outline
// ============================================================================

/// Dash pattern (on, off) of the selection outline
pub const SELECTION_DASH: (u8, u8) = (3, 2);

/// Selection outline color
pub const SELECTION_COLOR: &str = "#4A90E2";

// ============================================================================
// Symbol Library
// ============================================================================

/// File extensions recognised as symbol images (lowercase, without dot)
pub const ALLOWED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "bmp"];

/// Manifest file listing typed symbols for the composite builder
pub const MANIFEST_FILE: &str = "symbols_manifest.json";

/// Environment variable overriding the symbol library folder
pub const SYMBOLS_DIR_ENV: &str = "SYMBOLS_DIR";
