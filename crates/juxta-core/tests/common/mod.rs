#![allow(dead_code)]

use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};

use juxta_core::asset::ImageAsset;
use juxta_core::io::loader::read_bytes;

pub const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
pub const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);

pub fn solid(width: u32, height: u32, color: Rgba<u8>) -> RgbaImage {
    RgbaImage::from_pixel(width, height, color)
}

/// Encode a solid-color image in the given container format.
pub fn encoded(width: u32, height: u32, color: Rgba<u8>, format: ImageFormat) -> Vec<u8> {
    let mut bytes = Vec::new();
    DynamicImage::ImageRgba8(solid(width, height, color))
        .write_to(&mut Cursor::new(&mut bytes), format)
        .unwrap();
    bytes
}

pub fn png_bytes(width: u32, height: u32, color: Rgba<u8>) -> Vec<u8> {
    encoded(width, height, color, ImageFormat::Png)
}

/// A decoded asset ready for display.
pub fn ready_asset(name: &str, width: u32, height: u32, color: Rgba<u8>) -> ImageAsset {
    ImageAsset::from_bitmap(name, 1024, ImageFormat::Png, solid(width, height, color))
}

/// An asset whose bytes are read but not yet decoded.
pub fn pending_asset(name: &str, width: u32, height: u32, color: Rgba<u8>) -> ImageAsset {
    let bytes = png_bytes(width, height, color);
    let len = bytes.len() as u64;
    read_bytes(bytes, name, len).unwrap()
}

/// Write a PNG into `dir` and return its path.
pub fn write_png(dir: &Path, name: &str, width: u32, height: u32, color: Rgba<u8>) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, png_bytes(width, height, color)).unwrap();
    path
}
