//! Composite unit symbols - a frame plus typed slots filled from a manifest.
//!
//! A composite has an affiliation (the frame shape) and one slot per symbol
//! kind that can be placed in the frame. A complete composite (echelon and
//! role set) can be exported as a flat JSON record.

use crate::constants::MANIFEST_FILE;
use crate::error::{ExportError, ExportResult, SettingsError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Role suffix dropped from summaries.
const ARTILLERY_NOTE: &str = "(Round dot inside the rectangle represents an artillery unit)";

/// Frame shape of the composite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Affiliation {
    /// Rectangle frame
    #[default]
    Friendly,
    /// Rhombus frame
    Hostile,
}

impl Affiliation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Affiliation::Friendly => "Friendly",
            Affiliation::Hostile => "Hostile",
        }
    }
}

/// Symbol categories found in a manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SymbolKind {
    Echelon,
    Role,
    Status,
    Mobility,
    Capability,
    Amplifier,
    Graphic,
}

impl SymbolKind {
    pub const ALL: [SymbolKind; 7] = [
        SymbolKind::Echelon,
        SymbolKind::Role,
        SymbolKind::Status,
        SymbolKind::Mobility,
        SymbolKind::Capability,
        SymbolKind::Amplifier,
        SymbolKind::Graphic,
    ];

    /// Case-insensitive parse of a manifest `type` value.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_uppercase().as_str() {
            "ECHELON" => Some(SymbolKind::Echelon),
            "ROLE" => Some(SymbolKind::Role),
            "STATUS" => Some(SymbolKind::Status),
            "MOBILITY" => Some(SymbolKind::Mobility),
            "CAPABILITY" => Some(SymbolKind::Capability),
            "AMPLIFIER" => Some(SymbolKind::Amplifier),
            "GRAPHIC" => Some(SymbolKind::Graphic),
            _ => None,
        }
    }

    /// Whether the composite frame has a slot for this kind.
    pub fn has_slot(&self) -> bool {
        !matches!(self, SymbolKind::Amplifier | SymbolKind::Graphic)
    }

    /// Slot hint shown while the slot is empty.
    pub fn slot_hint(&self) -> &'static str {
        match self {
            SymbolKind::Echelon => "Echelon",
            SymbolKind::Role => "Role (Branch)",
            SymbolKind::Status => "Status",
            SymbolKind::Mobility => "Mobility",
            SymbolKind::Capability => "Capability",
            SymbolKind::Amplifier => "Amplifier",
            SymbolKind::Graphic => "Graphic",
        }
    }
}

/// Short in-frame badge for a status name, if it has one.
pub fn status_badge(name: &str) -> Option<&'static str> {
    match name {
        "Reinforced (Attached)" => Some("+"),
        "Reduced (Detached)" => Some("\u{2212}"),
        "Reinforced and Reduced" => Some("\u{b1}"),
        _ => None,
    }
}

// ==================== Manifest ====================

#[derive(Debug, Deserialize)]
struct RawManifest {
    #[serde(default)]
    items: Vec<RawEntry>,
}

#[derive(Debug, Deserialize)]
struct RawEntry {
    #[serde(rename = "type")]
    kind: String,
    name: String,
    path: PathBuf,
}

/// A typed library entry with its path resolved against the library folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    pub kind: SymbolKind,
    pub name: String,
    pub path: PathBuf,
}

/// Contents of `symbols_manifest.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolManifest {
    pub entries: Vec<ManifestEntry>,
}

impl SymbolManifest {
    /// Load the manifest in `folder`.
    ///
    /// A missing manifest yields an empty one. Entries with an unknown type
    /// or whose file does not exist are skipped.
    pub fn load(folder: &Path) -> Result<Self, SettingsError> {
        let manifest_path = folder.join(MANIFEST_FILE);
        if !manifest_path.exists() {
            warn!("{} not found in {}", MANIFEST_FILE, folder.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&manifest_path)?;
        let raw: RawManifest = serde_json::from_str(&content)?;

        let mut entries = Vec::with_capacity(raw.items.len());
        for item in raw.items {
            let Some(kind) = SymbolKind::parse(&item.kind) else {
                debug!("Skipping '{}' with unknown type '{}'", item.name, item.kind);
                continue;
            };
            let path = folder.join(&item.path);
            if !path.exists() {
                debug!("Skipping '{}', missing file {}", item.name, path.display());
                continue;
            }
            entries.push(ManifestEntry {
                kind,
                name: item.name,
                path,
            });
        }
        info!("Loaded {} manifest entries from {}", entries.len(), folder.display());
        Ok(Self { entries })
    }

    pub fn by_kind(&self, kind: SymbolKind) -> impl Iterator<Item = &ManifestEntry> {
        self.entries.iter().filter(move |e| e.kind == kind)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ==================== Composite ====================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompositeSymbol {
    pub affiliation: Affiliation,
    echelon: Option<String>,
    role: Option<String>,
    status: Option<String>,
    mobility: Option<String>,
    capability: Option<String>,
    unit_name: String,
}

/// Exported composite; field order is the on-disk key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositeRecord {
    pub affiliation: Affiliation,
    pub echelon: Option<String>,
    pub role: Option<String>,
    pub status: Option<String>,
    pub mobility: Option<String>,
    pub capability: Option<String>,
    pub unit_name: Option<String>,
}

impl CompositeSymbol {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot_mut(&mut self, kind: SymbolKind) -> Option<&mut Option<String>> {
        match kind {
            SymbolKind::Echelon => Some(&mut self.echelon),
            SymbolKind::Role => Some(&mut self.role),
            SymbolKind::Status => Some(&mut self.status),
            SymbolKind::Mobility => Some(&mut self.mobility),
            SymbolKind::Capability => Some(&mut self.capability),
            SymbolKind::Amplifier | SymbolKind::Graphic => None,
        }
    }

    pub fn slot(&self, kind: SymbolKind) -> Option<&str> {
        match kind {
            SymbolKind::Echelon => self.echelon.as_deref(),
            SymbolKind::Role => self.role.as_deref(),
            SymbolKind::Status => self.status.as_deref(),
            SymbolKind::Mobility => self.mobility.as_deref(),
            SymbolKind::Capability => self.capability.as_deref(),
            SymbolKind::Amplifier | SymbolKind::Graphic => None,
        }
    }

    /// Fill the slot for `kind`, replacing any previous value.
    /// Returns false for kinds without a slot.
    pub fn assign(&mut self, kind: SymbolKind, name: impl Into<String>) -> bool {
        match self.slot_mut(kind) {
            Some(slot) => {
                let name = name.into();
                debug!("Assigned {:?} = '{}'", kind, name);
                *slot = Some(name);
                true
            }
            None => {
                debug!("No slot accepts {:?}", kind);
                false
            }
        }
    }

    pub fn assign_entry(&mut self, entry: &ManifestEntry) -> bool {
        self.assign(entry.kind, entry.name.clone())
    }

    pub fn clear_slot(&mut self, kind: SymbolKind) -> bool {
        self.slot_mut(kind).and_then(Option::take).is_some()
    }

    /// Empty every slot and the unit name. Affiliation is kept.
    pub fn clear(&mut self) {
        *self = Self {
            affiliation: self.affiliation,
            ..Self::default()
        };
    }

    pub fn set_affiliation(&mut self, affiliation: Affiliation) {
        self.affiliation = affiliation;
    }

    pub fn set_unit_name(&mut self, name: impl Into<String>) {
        self.unit_name = name.into();
    }

    pub fn unit_name(&self) -> Option<&str> {
        Some(self.unit_name.trim()).filter(|s| !s.is_empty())
    }

    /// Label shown in a filled slot: status badges replace their names.
    pub fn slot_label(&self, kind: SymbolKind) -> Option<&str> {
        let name = self.slot(kind)?;
        if kind == SymbolKind::Status {
            return Some(status_badge(name).unwrap_or(name));
        }
        Some(name)
    }

    pub fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.echelon.is_none() {
            missing.push("echelon");
        }
        if self.role.is_none() {
            missing.push("role");
        }
        missing
    }

    pub fn is_complete(&self) -> bool {
        self.missing_required().is_empty()
    }

    /// One-line description, e.g. `Friendly Infantry Battalion Reinforced (Attached) — 1-22`.
    pub fn summary(&self) -> String {
        let (Some(role), Some(echelon)) = (self.role.as_deref(), self.echelon.as_deref()) else {
            return "(Place Role and Echelon)".to_string();
        };
        let role = role.replace(ARTILLERY_NOTE, "");
        let mut out = format!("{} {} {}", self.affiliation.as_str(), role.trim(), echelon);
        if let Some(status) = self.status.as_deref().filter(|s| !s.is_empty()) {
            out.push(' ');
            out.push_str(status);
        }
        if let Some(unit) = self.unit_name() {
            out.push_str(" \u{2014} ");
            out.push_str(unit);
        }
        out
    }

    /// The export record, or `Incomplete` if echelon or role is empty.
    pub fn export_record(&self) -> ExportResult<CompositeRecord> {
        let missing = self.missing_required();
        if !missing.is_empty() {
            return Err(ExportError::Incomplete { missing });
        }
        Ok(CompositeRecord {
            affiliation: self.affiliation,
            echelon: self.echelon.clone(),
            role: self.role.clone(),
            status: self.status.clone(),
            mobility: self.mobility.clone(),
            capability: self.capability.clone(),
            unit_name: self.unit_name().map(str::to_string),
        })
    }

    pub fn export_json(&self) -> ExportResult<String> {
        Ok(serde_json::to_string_pretty(&self.export_record()?)?)
    }

    /// Write the export record as pretty JSON. Nothing is written when the
    /// composite is incomplete.
    pub fn export_to(&self, path: &Path) -> ExportResult<()> {
        let json = match self.export_json() {
            Ok(json) => json,
            Err(e) => {
                warn!("Export refused: {}", e);
                return Err(e);
            }
        };
        fs::write(path, json)?;
        info!("Exported composite symbol to {}", path.display());
        Ok(())
    }
}
