use std::path::{Path, PathBuf};
use std::sync::mpsc;

use juxta_core::asset::ImageAsset;
use juxta_core::error::Result;
use juxta_core::export::{
    ExportFrame, ExportGuard, ExportStage, ExportedImage, ProgressReporter,
};
use juxta_core::viewport::ViewportState;
use tracing::error;

use crate::messages::WorkerResult;
use crate::progress::ChannelProgressReporter;

use super::send;

#[allow(clippy::too_many_arguments)]
pub(super) fn handle_export(
    guard: ExportGuard,
    before: &ImageAsset,
    after: &ImageAsset,
    state: &ViewportState,
    displayed: ExportFrame,
    directory: Option<&Path>,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    let reporter = ChannelProgressReporter::new(tx.clone(), ctx.clone());
    let outcome = guard
        .export(Some(before), Some(after), state, displayed, &reporter)
        .and_then(|exported| write(&exported, directory, &reporter));

    let result = match outcome {
        Ok(Some(path)) => WorkerResult::ExportComplete { path },
        Ok(None) => WorkerResult::ExportCancelled,
        Err(e) => {
            error!("Export failed: {e}");
            WorkerResult::ExportFailed {
                message: e.user_message(),
            }
        }
    };
    // Free the exporter before the UI hears about the outcome.
    drop(guard);
    send(tx, ctx, result);
}

/// Save into the configured directory, or ask for a path. `None` when the
/// dialog is dismissed.
fn write(
    exported: &ExportedImage,
    directory: Option<&Path>,
    reporter: &dyn ProgressReporter,
) -> Result<Option<PathBuf>> {
    let path = match directory {
        Some(dir) => dir.join(&exported.file_name),
        None => match rfd::FileDialog::new()
            .add_filter("PNG", &["png"])
            .set_file_name(&exported.file_name)
            .save_file()
        {
            Some(path) => path,
            None => return Ok(None),
        },
    };
    reporter.begin_stage(ExportStage::Writing);
    exported.save(&path)?;
    Ok(Some(path))
}
