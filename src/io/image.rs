//! Image decoding, encoding and output file naming

use crate::io::configuration::FALLBACK_FORMAT;
use crate::io::error::{Result, UnshredError, file_system_error};
use crate::spatial::PixelGrid;
use image::ImageFormat;
use std::path::{Path, PathBuf};

/// Decode any supported image file into an RGB grid, discarding alpha
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a decodable image
pub fn load_image(path: impl AsRef<Path>) -> Result<PixelGrid> {
    let path = path.as_ref();
    let img = image::open(path).map_err(|source| UnshredError::ImageLoad {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(PixelGrid::from_rgb_image(&img.to_rgb8()))
}

/// Encode `grid` to `path`, overwriting any existing file
///
/// The format follows the file extension; paths without a recognised
/// extension are written as PNG.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written
pub fn save_image(grid: &PixelGrid, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(file_system_error(parent, "create directory"))?;
    }

    let format = ImageFormat::from_path(path).unwrap_or(FALLBACK_FORMAT);
    grid.to_rgb_image()
        .save_with_format(path, format)
        .map_err(|source| UnshredError::ImageExport {
            path: path.to_path_buf(),
            source,
        })
}

/// Insert `suffix` before the last extension of `input`
///
/// `photo.png` becomes `photo<suffix>.png`; a path with no extension gets the
/// suffix appended. A leading dot is part of the stem, so `.photo` becomes
/// `.photo<suffix>` and stays hidden.
pub fn suffixed_path(input: &Path, suffix: &str) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    let name = match input.extension() {
        Some(extension) => format!("{stem}{suffix}.{}", extension.to_string_lossy()),
        None => format!("{stem}{suffix}"),
    };

    match input.parent() {
        Some(parent) => parent.join(name),
        None => PathBuf::from(name),
    }
}

/// True when `path` has an extension the image codecs recognise
pub fn is_supported_image(path: &Path) -> bool {
    ImageFormat::from_path(path).is_ok_and(|format| format.reading_enabled())
}
