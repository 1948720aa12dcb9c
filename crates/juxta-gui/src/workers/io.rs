use std::path::Path;
use std::sync::mpsc;
use std::time::Instant;

use juxta_core::io::loader::{decode, read_file};
use juxta_core::stage::LoadTicket;
use tracing::debug;

use crate::messages::WorkerResult;

use super::{send, send_log};

/// Stage 1 runs here; stage 2 is handed to the rayon pool so a large decode
/// does not hold up the other slot or an export.
pub(super) fn handle_load_image(
    ticket: LoadTicket,
    path: &Path,
    max_bytes: u64,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    let result = read_file(path, max_bytes);
    let pending = result.as_ref().ok().cloned();
    send(tx, ctx, WorkerResult::ImageRead { ticket, result });

    let Some(pending) = pending else {
        return;
    };

    let tx = tx.clone();
    let ctx = ctx.clone();
    rayon::spawn(move || {
        let start = Instant::now();
        let result = decode(&pending);
        let elapsed = start.elapsed();
        debug!(slot = %ticket.slot, ?elapsed, "Decode finished");
        if let Ok(ref asset) = result {
            if let Some((w, h)) = asset.natural_size() {
                send_log(
                    &tx,
                    &ctx,
                    format!(
                        "Decoded {} ({w}x{h}) in {}ms",
                        asset.file_name,
                        elapsed.as_millis()
                    ),
                );
            }
        }
        send(&tx, &ctx, WorkerResult::ImageDecoded { ticket, result });
    });
}
