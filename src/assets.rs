//! Image assets - intrinsic size queries and rescaled renditions.
//!
//! The board treats an image as an opaque path with a known intrinsic size
//! and asks an [`ImageRescaler`] for bitmaps at the size it displays them.
//! Decoding failures never reach the user: callers substitute a transparent
//! [`placeholder`] of the requested size.

use crate::error::AssetError;
use image::imageops::FilterType;
use image::RgbaImage;
use std::path::Path;

/// External image service used by the board.
///
/// Implementations are pure: the same inputs produce the same output and no
/// state is kept between calls.
pub trait ImageRescaler {
    /// Natural pixel size of the image at `path`.
    fn intrinsic_size(&self, path: &Path) -> Result<(u32, u32), AssetError>;

    /// A bitmap of the image at `path` resized to exactly `size`.
    fn rescale(&self, path: &Path, size: (u32, u32)) -> Result<RgbaImage, AssetError>;
}

/// Reads images from disk with the `image` crate.
#[derive(Clone, Copy, Debug, Default)]
pub struct FileRescaler;

impl FileRescaler {
    fn classify(path: &Path, err: image::ImageError) -> AssetError {
        match err {
            image::ImageError::IoError(source) => AssetError::Io {
                path: path.to_path_buf(),
                source,
            },
            other => AssetError::Decode {
                path: path.to_path_buf(),
                source: other,
            },
        }
    }
}

impl ImageRescaler for FileRescaler {
    fn intrinsic_size(&self, path: &Path) -> Result<(u32, u32), AssetError> {
        image::image_dimensions(path).map_err(|e| Self::classify(path, e))
    }

    fn rescale(&self, path: &Path, size: (u32, u32)) -> Result<RgbaImage, AssetError> {
        let img = image::open(path).map_err(|e| Self::classify(path, e))?;
        let (w, h) = (size.0.max(1), size.1.max(1));
        Ok(img.resize_exact(w, h, FilterType::Lanczos3).to_rgba8())
    }
}

/// Transparent stand-in bitmap used when an asset cannot be read.
pub fn placeholder(size: (u32, u32)) -> RgbaImage {
    RgbaImage::new(size.0.max(1), size.1.max(1))
}

/// Rescale `path`, falling back to a placeholder on any failure.
pub fn rescale_or_placeholder(
    rescaler: &dyn ImageRescaler,
    path: &Path,
    size: (u32, u32),
) -> RgbaImage {
    match rescaler.rescale(path, size) {
        Ok(img) => img,
        Err(e) => {
            tracing::warn!("Using placeholder for {}: {}", path.display(), e);
            placeholder(size)
        }
    }
}
