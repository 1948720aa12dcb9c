use std::borrow::Cow;
use std::sync::Arc;

use image::imageops::{self, FilterType};
use image::{ImageFormat, RgbaImage};

/// Which side of the comparison an image belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    Before,
    After,
}

impl Slot {
    pub const BOTH: [Slot; 2] = [Slot::Before, Slot::After];

    pub fn label(self) -> &'static str {
        match self {
            Self::Before => "BEFORE",
            Self::After => "AFTER",
        }
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Before => write!(f, "before"),
            Self::After => write!(f, "after"),
        }
    }
}

/// Lifecycle phase of an [`ImageAsset`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssetPhase {
    /// Bytes read, dimensions unknown.
    Pending,
    /// Decoded, dimensions known.
    Ready,
}

/// Bitmap handle. Raw bytes until decoded, shared RGBA8 pixels afterwards.
#[derive(Clone)]
pub enum DisplaySource {
    Encoded(Arc<[u8]>),
    Decoded(Arc<RgbaImage>),
}

impl std::fmt::Debug for DisplaySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Encoded(bytes) => write!(f, "Encoded({} bytes)", bytes.len()),
            Self::Decoded(img) => write!(f, "Decoded({}x{})", img.width(), img.height()),
        }
    }
}

/// One loaded image. Never mutated in place: decoding produces a new value.
#[derive(Clone, Debug)]
pub struct ImageAsset {
    pub file_name: String,
    pub byte_size: u64,
    pub format: ImageFormat,
    source: DisplaySource,
}

impl ImageAsset {
    pub(crate) fn pending(
        file_name: String,
        byte_size: u64,
        format: ImageFormat,
        bytes: Arc<[u8]>,
    ) -> Self {
        Self {
            file_name,
            byte_size,
            format,
            source: DisplaySource::Encoded(bytes),
        }
    }

    /// Wrap an already decoded bitmap.
    pub fn from_bitmap(
        file_name: impl Into<String>,
        byte_size: u64,
        format: ImageFormat,
        bitmap: RgbaImage,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            byte_size,
            format,
            source: DisplaySource::Decoded(Arc::new(bitmap)),
        }
    }

    pub fn phase(&self) -> AssetPhase {
        match self.source {
            DisplaySource::Encoded(_) => AssetPhase::Pending,
            DisplaySource::Decoded(_) => AssetPhase::Ready,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.phase() == AssetPhase::Ready
    }

    pub fn source(&self) -> &DisplaySource {
        &self.source
    }

    /// Decoded pixels, `None` while pending.
    pub fn bitmap(&self) -> Option<&Arc<RgbaImage>> {
        match &self.source {
            DisplaySource::Decoded(img) => Some(img),
            DisplaySource::Encoded(_) => None,
        }
    }

    pub fn natural_width(&self) -> Option<u32> {
        self.bitmap().map(|img| img.width())
    }

    pub fn natural_height(&self) -> Option<u32> {
        self.bitmap().map(|img| img.height())
    }

    pub fn natural_size(&self) -> Option<(u32, u32)> {
        self.bitmap().map(|img| img.dimensions())
    }

    /// Decoded pixels shrunk to fit `max_side` on both axes, for display
    /// surfaces with a size cap. The aspect ratio is kept. `None` while
    /// pending.
    pub fn preview(&self, max_side: u32) -> Option<Cow<'_, RgbaImage>> {
        let bitmap = self.bitmap()?;
        let (w, h) = bitmap.dimensions();
        let longest = w.max(h);
        if max_side == 0 || longest <= max_side {
            return Some(Cow::Borrowed(bitmap.as_ref()));
        }
        let factor = max_side as f64 / longest as f64;
        let fit = |side: u32| ((side as f64 * factor).round() as u32).clamp(1, max_side);
        Some(Cow::Owned(imageops::resize(
            bitmap.as_ref(),
            fit(w),
            fit(h),
            FilterType::Triangle,
        )))
    }

    /// Size in whole KiB, rounded, as shown next to the file name.
    pub fn size_kib(&self) -> u64 {
        (self.byte_size + 512) / 1024
    }
}
