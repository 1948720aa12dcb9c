use juxta_core::asset::ImageAsset;

/// Convert a decoded asset into an egui ColorImage no larger than
/// `max_side` on either axis. Pending assets have no pixels yet.
pub fn asset_to_color_image(asset: &ImageAsset, max_side: usize) -> Option<egui::ColorImage> {
    let max_side = u32::try_from(max_side).unwrap_or(u32::MAX);
    let bitmap = asset.preview(max_side)?;
    let size = [bitmap.width() as usize, bitmap.height() as usize];
    Some(egui::ColorImage::from_rgba_unmultiplied(size, bitmap.as_raw()))
}
