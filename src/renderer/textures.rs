//! Texture loading and caching.
//!
//! Images are decoded on first use and kept for the lifetime of the cache,
//! which is owned by the render loop.

use crate::core::error::{JudoError, Result};
use ahash::{AHashMap, AHashSet};
use std::path::{Path, PathBuf};

/// Bytes per pixel for RGBA images.
const BYTES_PER_PIXEL: usize = 4;

/// Build an egui image from raw RGBA bytes.
pub fn color_image_from_rgba(rgba: &[u8], dimensions: (u32, u32)) -> Result<egui::ColorImage> {
    let (width, height) = dimensions;
    if width == 0 || height == 0 {
        return Err(JudoError::Render(format!(
            "Invalid texture dimensions: {}x{}",
            width, height
        )));
    }

    let expected = (width as usize)
        .checked_mul(height as usize)
        .and_then(|pixels| pixels.checked_mul(BYTES_PER_PIXEL))
        .ok_or_else(|| {
            JudoError::Render(format!("Invalid texture dimensions: {}x{}", width, height))
        })?;

    if rgba.len() != expected {
        return Err(JudoError::Render(format!(
            "Buffer size mismatch: expected {} bytes, got {}",
            expected,
            rgba.len()
        )));
    }

    Ok(egui::ColorImage::from_rgba_unmultiplied(
        [width as usize, height as usize],
        rgba,
    ))
}

/// Decode an image file.
pub fn load_color_image(path: &Path) -> Result<egui::ColorImage> {
    let rgba = image::open(path)?.to_rgba8();
    let dimensions = rgba.dimensions();
    color_image_from_rgba(rgba.as_raw(), dimensions)
}

/// Lazily filled cache of GPU textures keyed by media-relative path.
pub struct TextureCache {
    root: PathBuf,
    textures: AHashMap<PathBuf, egui::TextureHandle>,
    failed: AHashSet<PathBuf>,
}

impl TextureCache {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            textures: AHashMap::new(),
            failed: AHashSet::new(),
        }
    }

    /// Texture for `relative`, loading it on first request.
    ///
    /// A file that fails to load is reported once and then skipped.
    pub fn get_or_load(
        &mut self,
        ctx: &egui::Context,
        relative: &Path,
    ) -> Option<&egui::TextureHandle> {
        if !self.textures.contains_key(relative) {
            if self.failed.contains(relative) {
                return None;
            }

            match load_color_image(&self.root.join(relative)) {
                Ok(image) => {
                    let handle = ctx.load_texture(
                        relative.display().to_string(),
                        image,
                        egui::TextureOptions::LINEAR,
                    );
                    tracing::debug!("Loaded texture {}", relative.display());
                    self.textures.insert(relative.to_path_buf(), handle);
                }
                Err(e) => {
                    tracing::warn!("Failed to load {}: {}", relative.display(), e);
                    self.failed.insert(relative.to_path_buf());
                    return None;
                }
            }
        }

        self.textures.get(relative)
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}
