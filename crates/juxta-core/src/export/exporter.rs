use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use image::{DynamicImage, ImageFormat, RgbaImage};
use tracing::info;

use crate::asset::ImageAsset;
use crate::consts::EXPORT_FILE_PREFIX;
use crate::error::{JuxtaError, Result};
use crate::viewport::ViewportState;

use super::compose::compose;
use super::types::{ExportFrame, ExportStage, ProgressReporter};

/// `comparison-<unix-millis>.png`
pub fn export_file_name(unix_millis: u128) -> String {
    format!("{EXPORT_FILE_PREFIX}-{unix_millis}.png")
}

fn now_millis() -> Result<u128> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .map_err(|e| JuxtaError::Export(format!("system clock before Unix epoch: {e}")))
}

/// Encode an RGBA canvas as PNG bytes.
pub fn encode_png(canvas: &RgbaImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    DynamicImage::ImageRgba8(canvas.clone())
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|e| JuxtaError::Export(format!("PNG encoding failed: {e}")))?;
    Ok(bytes)
}

/// A finished export, held in memory until written.
#[derive(Clone, Debug)]
pub struct ExportedImage {
    pub file_name: String,
    pub width: u32,
    pub height: u32,
    pub png: Vec<u8>,
}

impl ExportedImage {
    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, &self.png)
            .map_err(|e| JuxtaError::Export(format!("could not write {}: {e}", path.display())))?;
        info!(path = %path.display(), bytes = self.png.len(), "Export written");
        Ok(())
    }

    /// Write into `dir` under the generated file name.
    pub fn save_in(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(&self.file_name);
        self.save(&path)?;
        Ok(path)
    }
}

/// Held while an export runs. Dropping it frees the exporter, so a host
/// can claim it on one thread and run the export on another.
#[derive(Debug)]
pub struct ExportGuard {
    flag: Arc<AtomicBool>,
}

impl ExportGuard {
    /// Composite both images as currently displayed and encode the result.
    ///
    /// `displayed` is the on-screen size of the comparison area in pixels. A
    /// plain `(width, height)` means scroll offsets are already in pixels.
    pub fn export(
        &self,
        before: Option<&ImageAsset>,
        after: Option<&ImageAsset>,
        state: &ViewportState,
        displayed: impl Into<ExportFrame>,
        reporter: &dyn ProgressReporter,
    ) -> Result<ExportedImage> {
        reporter.begin_stage(ExportStage::Preparing);
        let (before_px, after_px) = match (
            before.and_then(ImageAsset::bitmap),
            after.and_then(ImageAsset::bitmap),
        ) {
            (Some(b), Some(a)) => (b.clone(), a.clone()),
            _ => return Err(JuxtaError::ExportNotReady),
        };
        let file_name = export_file_name(now_millis()?);
        reporter.finish_stage();

        reporter.begin_stage(ExportStage::Compositing);
        let canvas = compose(&before_px, &after_px, state, displayed)?;
        reporter.finish_stage();

        reporter.begin_stage(ExportStage::Encoding);
        let png = encode_png(&canvas)?;
        reporter.finish_stage();

        info!(
            file = %file_name,
            width = canvas.width(),
            height = canvas.height(),
            "Comparison exported"
        );

        Ok(ExportedImage {
            file_name,
            width: canvas.width(),
            height: canvas.height(),
            png,
        })
    }
}

impl Drop for ExportGuard {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

/// Runs exports one at a time. Clones share the in-flight flag.
#[derive(Clone, Debug, Default)]
pub struct Exporter {
    in_flight: Arc<AtomicBool>,
}

impl Exporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Claim the exporter, failing with [`JuxtaError::ExportInProgress`]
    /// while another export holds it.
    pub fn try_begin(&self) -> Result<ExportGuard> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| JuxtaError::ExportInProgress)?;
        Ok(ExportGuard {
            flag: self.in_flight.clone(),
        })
    }

    /// Claim the exporter and run one export.
    pub fn export(
        &self,
        before: Option<&ImageAsset>,
        after: Option<&ImageAsset>,
        state: &ViewportState,
        displayed: impl Into<ExportFrame>,
        reporter: &dyn ProgressReporter,
    ) -> Result<ExportedImage> {
        self.try_begin()?
            .export(before, after, state, displayed, reporter)
    }
}
