use std::sync::mpsc;

use juxta_core::export::{ExportStage, ProgressReporter};

use crate::messages::WorkerResult;

/// Progress reporter that sends export stages over an mpsc channel to the UI thread.
pub struct ChannelProgressReporter {
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
}

impl ChannelProgressReporter {
    pub fn new(tx: mpsc::Sender<WorkerResult>, ctx: egui::Context) -> Self {
        Self { tx, ctx }
    }
}

impl ProgressReporter for ChannelProgressReporter {
    fn begin_stage(&self, stage: ExportStage) {
        let _ = self.tx.send(WorkerResult::ExportProgress { stage });
        self.ctx.request_repaint();
    }
}
