//! Symbol library folder scanning.
//!
//! A library is a flat folder of glyph images. File names become display
//! names and files are listed in natural order, so `2_Armor` sorts before
//! `10_Infantry`.

use crate::constants::ALLOWED_EXTENSIONS;
use std::cmp::Ordering;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// One run of a natural sort key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum KeyPart {
    Number(u128),
    Text(String),
}

/// Split a name into alternating text and number runs. Text is lowercased.
pub fn natural_key(s: &str) -> Vec<KeyPart> {
    let mut parts = Vec::new();
    let mut text = String::new();
    let mut digits = String::new();

    for c in s.chars() {
        if c.is_ascii_digit() {
            if !text.is_empty() {
                parts.push(KeyPart::Text(std::mem::take(&mut text)));
            }
            digits.push(c);
        } else {
            if !digits.is_empty() {
                parts.push(number_part(&std::mem::take(&mut digits)));
            }
            text.extend(c.to_lowercase());
        }
    }
    if !digits.is_empty() {
        parts.push(number_part(&digits));
    }
    if !text.is_empty() {
        parts.push(KeyPart::Text(text));
    }
    parts
}

fn number_part(digits: &str) -> KeyPart {
    // Runs too long for u128 fall back to text comparison
    digits
        .parse()
        .map(KeyPart::Number)
        .unwrap_or_else(|_| KeyPart::Text(digits.to_string()))
}

pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    natural_key(a).cmp(&natural_key(b))
}

/// Display name for a symbol file: the stem with runs of `_` and `-`
/// replaced by a single space.
pub fn filename_to_name(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();

    let mut name = String::with_capacity(stem.len());
    let mut in_separator = false;
    for c in stem.chars() {
        if c == '_' || c == '-' {
            if !in_separator {
                name.push(' ');
            }
            in_separator = true;
        } else {
            name.push(c);
            in_separator = false;
        }
    }
    name.trim().to_string()
}

pub fn has_allowed_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            ALLOWED_EXTENSIONS
                .iter()
                .any(|allowed| ext.eq_ignore_ascii_case(allowed))
        })
}

/// Image files directly inside `folder`, in natural order of their names.
pub fn list_symbol_files(folder: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = fs::read_dir(folder)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && has_allowed_extension(path))
        .collect();

    files.sort_by_cached_key(|path| {
        natural_key(&path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default())
    });
    Ok(files)
}
