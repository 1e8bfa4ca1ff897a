use std::path::{Path, PathBuf};

use image::RgbaImage;

use super::AssetError;

/// Base directory that relative asset paths are resolved against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRoot {
    root: PathBuf,
}

impl AssetRoot {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Joins `relative` onto the root. Absolute paths pass through unchanged.
    pub fn resolve(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.root.join(relative)
    }
}

/// Reads a WGSL source file as UTF-8 text.
pub fn read_shader_source(path: &Path) -> Result<String, AssetError> {
    std::fs::read_to_string(path).map_err(|source| AssetError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads and decodes an image file into bottom-up RGBA8 rows.
pub fn load_rgba_image(path: &Path) -> Result<RgbaImage, AssetError> {
    let bytes = std::fs::read(path).map_err(|source| AssetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    decode_rgba_image(path, &bytes)
}

/// Decodes an in-memory image into RGBA8, flipped vertically.
///
/// Texture coordinates in the tutorial meshes put `(0, 0)` at the bottom-left
/// corner, while images and wgpu textures both store the top row first, so
/// rows are reversed before upload.
pub fn decode_rgba_image(path: &Path, bytes: &[u8]) -> Result<RgbaImage, AssetError> {
    let decoded = image::load_from_memory(bytes).map_err(|source| AssetError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let mut rgba = decoded.into_rgba8();
    image::imageops::flip_vertical_in_place(&mut rgba);
    Ok(rgba)
}
