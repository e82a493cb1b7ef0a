//! The palette - the list of assets a user can drag onto the board.
//!
//! The first entry is always the text tool; library images follow in the
//! order they were supplied (natural file order when scanned from a folder).

use crate::constants::TEXT_TOOL_NAME;
use crate::error::AssetError;
use crate::library::{filename_to_name, list_symbol_files};
use crate::types::AssetRef;
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    entries: Vec<AssetRef>,
}

/// A placement gesture started from a palette entry.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteDrag {
    asset: AssetRef,
}

/// A finished palette drag, ready for [`crate::Board::place_request`].
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementRequest {
    pub asset: AssetRef,
    pub drop_point: (f32, f32),
}

impl Palette {
    /// Build a palette from image assets, with the text tool prepended.
    pub fn new(images: impl IntoIterator<Item = AssetRef>) -> Self {
        let mut entries = vec![AssetRef::text_tool(TEXT_TOOL_NAME)];
        entries.extend(images.into_iter().filter(|a| !a.source.is_text_tool()));
        Self { entries }
    }

    /// Scan a library folder for symbol images.
    pub fn load_folder(folder: &Path) -> Result<Self, AssetError> {
        let files = list_symbol_files(folder).map_err(|source| AssetError::Io {
            path: folder.to_path_buf(),
            source,
        })?;
        info!("Loaded {} symbols from {}", files.len(), folder.display());
        Ok(Self::new(
            files
                .into_iter()
                .map(|path| AssetRef::image(filename_to_name(&path), path)),
        ))
    }

    pub fn entries(&self) -> &[AssetRef] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&AssetRef> {
        self.entries.get(index)
    }

    /// Number of image symbols, excluding the text tool.
    pub fn symbol_count(&self) -> usize {
        self.entries.len() - 1
    }

    pub fn title(&self) -> String {
        format!("Palette ({} symbols)", self.symbol_count())
    }

    /// Palette row label; image rows are numbered from 1.
    pub fn label(&self, index: usize) -> Option<String> {
        let asset = self.entries.get(index)?;
        if asset.source.is_text_tool() {
            Some(asset.display_name.clone())
        } else {
            Some(format!("{}. {}", index, asset.display_name))
        }
    }

    pub fn begin_drag(&self, index: usize) -> Option<PaletteDrag> {
        let asset = self.entries.get(index)?.clone();
        debug!("Palette drag started for '{}'", asset.display_name);
        Some(PaletteDrag { asset })
    }
}

impl PaletteDrag {
    pub fn asset(&self) -> &AssetRef {
        &self.asset
    }

    /// Finish the gesture over the board at `drop_point`.
    pub fn drop_at(self, drop_point: (f32, f32)) -> PlacementRequest {
        PlacementRequest {
            asset: self.asset,
            drop_point,
        }
    }
}
