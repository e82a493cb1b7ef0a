//! Headless front end: loads settings, scans the symbol library and prints
//! the palette (and the manifest, when the library has one).

use anyhow::{Context, Result};
use std::path::PathBuf;
use symbolboard::{Palette, Settings, SymbolKind, SymbolManifest};

fn main() -> Result<()> {
    symbolboard::logging::init();

    let settings = Settings::load();
    let library_dir = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| settings.resolve_library_dir())
        .context("no symbol library folder configured")?;

    tracing::info!("Using symbol library {}", library_dir.display());

    let palette = Palette::load_folder(&library_dir)
        .with_context(|| format!("failed to scan {}", library_dir.display()))?;

    println!("{}", palette.title());
    for index in 0..palette.entries().len() {
        if let Some(label) = palette.label(index) {
            println!("  {}", label);
        }
    }
    if palette.symbol_count() == 0 {
        println!("  No images found. Add PNG/JPG symbols to the folder.");
    }

    let manifest = SymbolManifest::load(&library_dir).context("failed to read symbol manifest")?;
    if !manifest.is_empty() {
        println!();
        for kind in SymbolKind::ALL {
            let names: Vec<&str> = manifest.by_kind(kind).map(|e| e.name.as_str()).collect();
            if !names.is_empty() {
                println!("{:?}: {}", kind, names.join(", "));
            }
        }
    }

    Ok(())
}
