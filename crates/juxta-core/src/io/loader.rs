use std::path::Path;
use std::sync::Arc;

use image::ImageFormat;
use tracing::debug;

use crate::asset::{DisplaySource, ImageAsset};
use crate::error::{JuxtaError, Result};
use crate::io::validate::{validate, FileCandidate};

/// Container formats the loader will decode.
pub const SUPPORTED_FORMATS: &[ImageFormat] = &[
    ImageFormat::Jpeg,
    ImageFormat::Png,
    ImageFormat::Gif,
    ImageFormat::Bmp,
    ImageFormat::Tiff,
    ImageFormat::WebP,
];

/// Stage 1: wrap raw bytes into a pending asset.
///
/// The container format is sniffed from the bytes; anything that is not a
/// supported image fails with [`JuxtaError::Decode`] before a slot is touched.
pub fn read_bytes(bytes: Vec<u8>, file_name: impl Into<String>, byte_size: u64) -> Result<ImageAsset> {
    let file_name = file_name.into();
    let format = image::guess_format(&bytes)
        .map_err(|_| JuxtaError::Decode(format!("{file_name}: not a recognised image")))?;
    if !SUPPORTED_FORMATS.contains(&format) {
        return Err(JuxtaError::Decode(format!(
            "{file_name}: unsupported format {format:?}"
        )));
    }
    debug!(file = %file_name, ?format, byte_size, "Image bytes read");
    Ok(ImageAsset::pending(file_name, byte_size, format, Arc::from(bytes)))
}

/// Stage 2: decode a pending asset into a ready one. Ready assets are
/// returned unchanged.
pub fn decode(asset: &ImageAsset) -> Result<ImageAsset> {
    let bytes = match asset.source() {
        DisplaySource::Encoded(bytes) => bytes,
        DisplaySource::Decoded(_) => return Ok(asset.clone()),
    };

    let img = image::load_from_memory_with_format(bytes, asset.format)
        .map_err(|e| JuxtaError::Decode(format!("{}: {e}", asset.file_name)))?;
    let rgba = img.to_rgba8();
    let (w, h) = rgba.dimensions();
    if w == 0 || h == 0 {
        return Err(JuxtaError::Decode(format!(
            "{}: image has no pixels",
            asset.file_name
        )));
    }

    debug!(file = %asset.file_name, width = w, height = h, "Image decoded");
    Ok(ImageAsset::from_bitmap(
        asset.file_name.clone(),
        asset.byte_size,
        asset.format,
        rgba,
    ))
}

/// Validate a file on disk, read it, and run stage 1.
pub fn read_file(path: &Path, max_bytes: u64) -> Result<ImageAsset> {
    let candidate = FileCandidate::from_path(path)?;
    validate(Some(&candidate), max_bytes).into_result()?;
    let bytes = std::fs::read(path)?;
    read_bytes(bytes, candidate.file_name, candidate.byte_size)
}

/// Both stages back to back.
pub fn load_path(path: &Path, max_bytes: u64) -> Result<ImageAsset> {
    let pending = read_file(path, max_bytes)?;
    decode(&pending)
}
