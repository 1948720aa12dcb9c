use std::path::PathBuf;

use juxta_core::asset::{ImageAsset, Slot};
use juxta_core::error::Result;
use juxta_core::export::{ExportFrame, ExportGuard, ExportStage};
use juxta_core::stage::LoadTicket;
use juxta_core::viewport::ViewportState;

/// Commands sent from UI thread to worker thread.
pub enum WorkerCommand {
    /// Validate and read a file, then decode it on the rayon pool.
    LoadImage {
        ticket: LoadTicket,
        path: PathBuf,
        max_bytes: u64,
    },

    /// Composite and save. The guard is claimed on the UI thread and held
    /// until the file is written.
    Export {
        guard: ExportGuard,
        before: ImageAsset,
        after: ImageAsset,
        state: ViewportState,
        displayed: ExportFrame,
        directory: Option<PathBuf>,
    },
}

/// Results sent back to the UI thread.
pub enum WorkerResult {
    /// A file dialog returned a path for a slot.
    FileChosen { slot: Slot, path: PathBuf },

    /// Stage 1: bytes read, asset pending.
    ImageRead {
        ticket: LoadTicket,
        result: Result<ImageAsset>,
    },

    /// Stage 2: decode finished.
    ImageDecoded {
        ticket: LoadTicket,
        result: Result<ImageAsset>,
    },

    ExportProgress { stage: ExportStage },

    ExportComplete { path: PathBuf },

    /// Export finished without writing a file (dialog dismissed).
    ExportCancelled,

    ExportFailed { message: String },

    Log { message: String },
}
