mod common;

use std::borrow::Cow;
use std::path::Path;

use image::ImageFormat;

use juxta_core::asset::AssetPhase;
use juxta_core::consts::MAX_FILE_SIZE_BYTES;
use juxta_core::error::JuxtaError;
use juxta_core::io::loader::{decode, load_path, read_bytes, read_file};
use juxta_core::io::validate::{
    mime_from_extension, too_large_message, validate, FileCandidate, INVALID_TYPE_MESSAGE,
    NO_FILE_MESSAGE,
};

use common::{encoded, pending_asset, png_bytes, ready_asset, write_png, BLUE, RED};

fn candidate(name: &str, size: u64) -> FileCandidate {
    FileCandidate {
        file_name: name.to_string(),
        byte_size: size,
        mime: mime_from_extension(Path::new(name)).map(str::to_string),
    }
}

#[test]
fn test_validate_no_file() {
    let v = validate(None, MAX_FILE_SIZE_BYTES);
    assert!(!v.valid);
    assert_eq!(v.error.as_deref(), Some("No file selected"));
    assert_eq!(NO_FILE_MESSAGE, "No file selected");
}

#[test]
fn test_validate_rejects_wrong_type() {
    let v = validate(Some(&candidate("notes.txt", 10)), MAX_FILE_SIZE_BYTES);
    assert!(!v.valid);
    assert_eq!(
        v.error.as_deref(),
        Some("Invalid file type. Please select a valid image file (JPEG, PNG, GIF, BMP, TIFF, WebP)")
    );
    assert_eq!(v.error.as_deref(), Some(INVALID_TYPE_MESSAGE));
}

#[test]
fn test_validate_rejects_oversize() {
    let v = validate(Some(&candidate("huge.png", MAX_FILE_SIZE_BYTES + 1)), MAX_FILE_SIZE_BYTES);
    assert!(!v.valid);
    assert_eq!(
        v.error.as_deref(),
        Some("File too large. Please select an image smaller than 10MB")
    );
}

#[test]
fn test_validate_accepts_limit_exactly() {
    let v = validate(Some(&candidate("edge.jpg", MAX_FILE_SIZE_BYTES)), MAX_FILE_SIZE_BYTES);
    assert!(v.valid);
    assert!(v.error.is_none());
}

#[test]
fn test_validate_custom_limit() {
    let v = validate(Some(&candidate("photo.webp", 3 * 1024 * 1024)), 2 * 1024 * 1024);
    assert_eq!(
        v.error.as_deref(),
        Some("File too large. Please select an image smaller than 2MB")
    );
}

#[test]
fn test_small_limits_are_not_reported_as_zero_mb() {
    assert_eq!(
        too_large_message(512 * 1024),
        "File too large. Please select an image smaller than 512KB"
    );
    assert_eq!(
        too_large_message(100),
        "File too large. Please select an image smaller than 100 bytes"
    );
    let v = validate(Some(&candidate("photo.png", 600 * 1024)), 500 * 1024);
    assert_eq!(
        v.error.as_deref(),
        Some("File too large. Please select an image smaller than 500KB")
    );
}

#[test]
fn test_type_checked_before_size() {
    let v = validate(Some(&candidate("big.exe", MAX_FILE_SIZE_BYTES * 2)), MAX_FILE_SIZE_BYTES);
    assert_eq!(v.error.as_deref(), Some(INVALID_TYPE_MESSAGE));
}

#[test]
fn test_mime_from_extension() {
    assert_eq!(mime_from_extension(Path::new("a.JPG")), Some("image/jpeg"));
    assert_eq!(mime_from_extension(Path::new("a.tif")), Some("image/tiff"));
    assert_eq!(mime_from_extension(Path::new("a.webp")), Some("image/webp"));
    assert_eq!(mime_from_extension(Path::new("a")), None);
    assert_eq!(mime_from_extension(Path::new("a.svg")), None);
}

#[test]
fn test_validation_into_result() {
    let err = validate(None, MAX_FILE_SIZE_BYTES).into_result().unwrap_err();
    assert!(matches!(err, JuxtaError::Validation(_)));
    assert_eq!(err.user_message(), "No file selected");
}

#[test]
fn test_read_bytes_is_pending() {
    let bytes = png_bytes(5, 3, RED);
    let len = bytes.len() as u64;
    let asset = read_bytes(bytes, "red.png", len).unwrap();
    assert_eq!(asset.phase(), AssetPhase::Pending);
    assert_eq!(asset.format, ImageFormat::Png);
    assert_eq!(asset.natural_size(), None);
}

#[test]
fn test_read_bytes_rejects_garbage() {
    let err = read_bytes(b"definitely not an image".to_vec(), "x.png", 23).unwrap_err();
    assert!(matches!(err, JuxtaError::Decode(_)));
}

#[test]
fn test_decode_produces_ready_bitmap() {
    let bytes = png_bytes(5, 3, BLUE);
    let len = bytes.len() as u64;
    let pending = read_bytes(bytes, "blue.png", len).unwrap();
    let ready = decode(&pending).unwrap();
    assert!(ready.is_ready());
    assert_eq!(ready.natural_size(), Some((5, 3)));
    assert_eq!(ready.bitmap().unwrap().get_pixel(2, 1), &BLUE);
    assert_eq!(ready.file_name, "blue.png");
}

#[test]
fn test_decode_truncated_fails() {
    let mut bytes = png_bytes(16, 16, RED);
    bytes.truncate(40);
    let pending = read_bytes(bytes, "cut.png", 40).unwrap();
    let err = decode(&pending).unwrap_err();
    assert!(matches!(err, JuxtaError::Decode(_)));
}

#[test]
fn test_decode_other_formats() {
    for format in [ImageFormat::Bmp, ImageFormat::Tiff] {
        let bytes = encoded(4, 4, RED, format);
        let len = bytes.len() as u64;
        let asset = decode(&read_bytes(bytes, "img", len).unwrap()).unwrap();
        assert_eq!(asset.format, format);
        assert_eq!(asset.natural_size(), Some((4, 4)));
    }
}

#[test]
fn test_load_path_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_png(dir.path(), "disk.png", 7, 2, RED);
    let asset = load_path(&path, MAX_FILE_SIZE_BYTES).unwrap();
    assert!(asset.is_ready());
    assert_eq!(asset.natural_size(), Some((7, 2)));
    assert_eq!(asset.file_name, "disk.png");
}

#[test]
fn test_read_file_validates_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("image.dat");
    std::fs::write(&path, png_bytes(2, 2, RED)).unwrap();
    let err = read_file(&path, MAX_FILE_SIZE_BYTES).unwrap_err();
    assert_eq!(err.user_message(), INVALID_TYPE_MESSAGE);
}

#[test]
fn test_read_file_enforces_size() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_png(dir.path(), "small.png", 8, 8, RED);
    let err = read_file(&path, 10).unwrap_err();
    assert!(matches!(err, JuxtaError::Validation(_)));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = read_file(Path::new("/nonexistent/nothing.png"), MAX_FILE_SIZE_BYTES).unwrap_err();
    assert!(matches!(err, JuxtaError::Io(_)));
}

#[test]
fn test_preview_shrinks_oversized_bitmap() {
    let asset = ready_asset("wide.png", 400, 100, RED);
    let preview = asset.preview(64).unwrap();
    assert!(matches!(preview, Cow::Owned(_)));
    assert_eq!(preview.dimensions(), (64, 16));
    assert_eq!(preview.get_pixel(30, 8), &RED);
    // The full-resolution pixels stay untouched for export.
    assert_eq!(asset.natural_size(), Some((400, 100)));
}

#[test]
fn test_preview_keeps_bitmap_within_limit() {
    let asset = ready_asset("small.png", 32, 16, BLUE);
    let preview = asset.preview(32).unwrap();
    assert!(matches!(preview, Cow::Borrowed(_)));
    assert_eq!(preview.dimensions(), (32, 16));
}

#[test]
fn test_preview_of_thin_image_keeps_one_pixel() {
    let asset = ready_asset("line.png", 1000, 1, RED);
    assert_eq!(asset.preview(100).unwrap().dimensions(), (100, 1));
}

#[test]
fn test_preview_pending_is_none() {
    assert!(pending_asset("p.png", 4, 4, RED).preview(16).is_none());
}
