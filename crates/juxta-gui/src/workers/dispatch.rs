use std::sync::mpsc;

use crate::messages::{WorkerCommand, WorkerResult};

use super::{export, io};

/// Spawn the worker thread. Returns the command sender.
pub fn spawn_worker(
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) -> std::io::Result<mpsc::Sender<WorkerCommand>> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();

    std::thread::Builder::new()
        .name("juxta-worker".into())
        .spawn(move || {
            worker_loop(cmd_rx, result_tx, ctx);
        })?;

    Ok(cmd_tx)
}

pub(crate) fn send(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, result: WorkerResult) {
    let _ = tx.send(result);
    ctx.request_repaint();
}

pub(crate) fn send_log(
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
    msg: impl Into<String>,
) {
    send(
        tx,
        ctx,
        WorkerResult::Log {
            message: msg.into(),
        },
    );
}

fn worker_loop(
    cmd_rx: mpsc::Receiver<WorkerCommand>,
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) {
    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            WorkerCommand::LoadImage {
                ticket,
                path,
                max_bytes,
            } => {
                io::handle_load_image(ticket, &path, max_bytes, &tx, &ctx);
            }
            WorkerCommand::Export {
                guard,
                before,
                after,
                state,
                displayed,
                directory,
            } => {
                export::handle_export(
                    guard,
                    &before,
                    &after,
                    &state,
                    displayed,
                    directory.as_deref(),
                    &tx,
                    &ctx,
                );
            }
        }
    }
}
