use std::path::PathBuf;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use juxta_core::asset::Slot;
use juxta_core::config::ViewerConfig;
use juxta_core::error::{JuxtaError, Result as CoreResult};
use juxta_core::export::{ExportFrame, ExportStage, Exporter};
use juxta_core::geometry::DisplayMode;
use juxta_core::io::validate::ALLOWED_MIME_TYPES;
use juxta_core::notify::{Notifier, Severity};
use juxta_core::stage::{Applied, LoadTicket, Stage};
use juxta_core::viewport::ComparisonViewport;
use tracing::{info, warn};

use crate::convert::asset_to_color_image;
use crate::messages::{WorkerCommand, WorkerResult};
use crate::panels;
use crate::states::{SlotTexture, SlotTextures, UIState};
use crate::workers;

/// Extensions offered in the file dialog, matching the accepted MIME types.
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp", "tif", "tiff", "webp"];

/// Repaint interval while a load is outstanding, so slow decodes get noticed.
const LOADING_POLL: Duration = Duration::from_millis(500);

pub struct JuxtaApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    pub result_tx: mpsc::Sender<WorkerResult>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub config: ViewerConfig,
    pub stage: Stage,
    pub viewport: ComparisonViewport,
    pub exporter: Exporter,
    pub notifier: Notifier,
    pub textures: SlotTextures,
    pub ui_state: UIState,
}

impl JuxtaApp {
    pub fn new(ctx: &egui::Context, config: ViewerConfig) -> std::io::Result<Self> {
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = workers::spawn_worker(result_tx.clone(), ctx.clone())?;
        info!(
            mode = %config.display.initial_mode,
            divider = config.display.initial_divider,
            "Viewer started"
        );

        Ok(Self {
            cmd_tx,
            result_tx,
            result_rx,
            viewport: config.viewport(),
            notifier: Notifier::new(config.notifications.duration()),
            config,
            stage: Stage::new(),
            exporter: Exporter::new(),
            textures: SlotTextures::default(),
            ui_state: UIState::default(),
        })
    }

    /// Drain all pending results from the worker.
    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::FileChosen { slot, path } => {
                    self.load(slot, path);
                }
                WorkerResult::ImageRead { ticket, result } => {
                    let outcome = self.stage.apply_read(ticket, result);
                    self.after_load_step(ticket, outcome);
                }
                WorkerResult::ImageDecoded { ticket, result } => {
                    let outcome = self.stage.apply_decoded(ticket, result);
                    if let Ok(Applied::Updated) = outcome {
                        self.upload_texture(ctx, ticket);
                    }
                    self.after_load_step(ticket, outcome);
                }
                WorkerResult::ExportProgress { stage } => {
                    self.ui_state.export_stage = Some(stage);
                }
                WorkerResult::ExportComplete { path } => {
                    self.ui_state.export_stage = None;
                    self.ui_state.add_log(format!("Saved: {}", path.display()));
                    let name = path
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_default();
                    self.notifier.push(format!("Saved {name}"), Severity::Success);
                }
                WorkerResult::ExportCancelled => {
                    self.ui_state.export_stage = None;
                    self.ui_state.add_log("Export cancelled".into());
                }
                WorkerResult::ExportFailed { message } => {
                    self.ui_state.export_stage = None;
                    self.ui_state.add_log(format!("ERROR: {message}"));
                    self.notifier.push(message, Severity::Error);
                }
                WorkerResult::Log { message } => {
                    self.ui_state.add_log(message);
                }
            }
        }
    }

    fn after_load_step(&mut self, ticket: LoadTicket, outcome: CoreResult<Applied>) {
        if let Err(e) = outcome {
            warn!(slot = %ticket.slot, "Load failed: {e}");
            self.ui_state.add_log(format!("ERROR: {} image: {e}", ticket.slot));
            let message = match e {
                JuxtaError::Validation(msg) => msg,
                _ => format!("Failed to load {} image", ticket.slot),
            };
            self.notifier.push(message, Severity::Error);
        }
        self.viewport.sync_stage(self.stage.state());
    }

    fn upload_texture(&mut self, ctx: &egui::Context, ticket: LoadTicket) {
        let Some(asset) = self.stage.get(ticket.slot) else {
            return;
        };
        let Some((width, height)) = asset.natural_size() else {
            return;
        };
        let max_side = ctx.input(|i| i.max_texture_side);
        let Some(image) = asset_to_color_image(asset, max_side) else {
            return;
        };
        if image.size != [width as usize, height as usize] {
            info!(
                slot = %ticket.slot,
                width,
                height,
                max_side,
                "Downscaled preview to fit the GPU texture limit"
            );
        }
        let size = [width as usize, height as usize];
        let handle = ctx.load_texture(
            format!("{}-{}", ticket.slot, ticket.token),
            image,
            egui::TextureOptions::LINEAR,
        );
        self.ui_state.add_log(format!(
            "Loaded {}: {} ({}x{}, {} KB)",
            ticket.slot,
            asset.file_name,
            size[0],
            size[1],
            asset.size_kib()
        ));
        self.notifier.push(
            format!("{} image loaded successfully", capitalize(ticket.slot.label())),
            Severity::Success,
        );
        self.textures.set(ticket.slot, SlotTexture { handle, size });
    }

    fn report_error(&mut self, context: &str, err: &JuxtaError) {
        warn!("{context}: {err}");
        self.ui_state.add_log(format!("ERROR: {context}: {err}"));
        self.notifier.push_error(err);
    }

    /// Open a file dialog for `slot` off the UI thread.
    pub fn pick_file(&self, slot: Slot, ctx: &egui::Context) {
        let result_tx = self.result_tx.clone();
        let ctx = ctx.clone();
        std::thread::spawn(move || {
            if let Some(path) = rfd::FileDialog::new()
                .set_title(format!("Select {} image", slot.label()))
                .add_filter("Images", IMAGE_EXTENSIONS)
                .pick_file()
            {
                let _ = result_tx.send(WorkerResult::FileChosen { slot, path });
                ctx.request_repaint();
            }
        });
    }

    /// Start loading `path` into `slot`, superseding any earlier request.
    pub fn load(&mut self, slot: Slot, path: PathBuf) {
        let ticket = self.stage.begin_load(slot);
        info!(%slot, path = %path.display(), "Loading image");
        self.ui_state
            .add_log(format!("Opening {slot}: {}", path.display()));
        self.send_command(WorkerCommand::LoadImage {
            ticket,
            path,
            max_bytes: self.config.validation.max_file_bytes,
        });
    }

    /// The first dropped file fills the empty slot, before first, or
    /// replaces `after` when both are filled.
    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let (hovering, dropped) = ctx.input(|i| {
            (
                !i.raw.hovered_files.is_empty(),
                i.raw.dropped_files.iter().find_map(|f| f.path.clone()),
            )
        });
        self.ui_state.drop_hover = hovering;

        if let Some(path) = dropped {
            let slot = if self.stage.before().is_none() {
                Slot::Before
            } else {
                Slot::After
            };
            self.load(slot, path);
        }
    }

    /// Empty both slots and reset the view. In-flight loads are discarded
    /// when they arrive.
    pub fn clear(&mut self) {
        self.stage.clear();
        self.viewport.reset();
        self.textures.clear();
        self.ui_state.add_log("Stage cleared".into());
        self.notifier.push("Stage cleared", Severity::Info);
    }

    pub fn set_mode(&mut self, mode: DisplayMode) {
        if self.viewport.set_display_mode(mode) {
            self.ui_state.add_log(format!("Display mode: {mode}"));
        }
    }

    /// Both images decoded and no export running.
    pub fn can_export(&self) -> bool {
        !self.exporter.is_busy()
            && self
                .stage
                .pair()
                .is_some_and(|(b, a)| b.is_ready() && a.is_ready())
    }

    pub fn start_export(&mut self) {
        let guard = match self.exporter.try_begin() {
            Ok(guard) => guard,
            Err(e) => {
                self.report_error("Export", &e);
                return;
            }
        };
        let Some((before, after)) = self.stage.pair().map(|(b, a)| (b.clone(), a.clone())) else {
            self.notifier.push("No images to download", Severity::Warning);
            return;
        };
        if !before.is_ready() || !after.is_ready() {
            self.report_error("Export", &JuxtaError::ExportNotReady);
            return;
        }

        info!(
            width = self.ui_state.frame_px.0,
            height = self.ui_state.frame_px.1,
            "Export requested"
        );
        // Scroll is tracked in points; the export canvas is in pixels.
        let displayed = ExportFrame::new(self.ui_state.frame_px, self.ui_state.pixels_per_point);

        self.ui_state.export_stage = Some(ExportStage::Preparing);
        self.notifier.push("Generating download...", Severity::Info);
        self.send_command(WorkerCommand::Export {
            guard,
            before,
            after,
            state: *self.viewport.state(),
            displayed,
            directory: self.config.export.directory.clone(),
        });
    }

    /// Log each load that has been pending longer than the configured threshold.
    fn check_slow_loads(&mut self) {
        let threshold = self.config.loading.slow_decode_warn();
        for slot in self.stage.take_slow_loads(threshold) {
            warn!(%slot, ?threshold, "Image still loading");
            self.ui_state
                .add_log(format!("{slot} image is taking a long time to load"));
        }
    }

    /// Follow the display mode with the window's fullscreen state.
    fn sync_fullscreen(&mut self, ctx: &egui::Context) {
        let want = self.viewport.state().display_mode() == DisplayMode::Fullscreen;
        if want != self.ui_state.window_fullscreen {
            ctx.send_viewport_cmd(egui::ViewportCommand::Fullscreen(want));
            self.ui_state.window_fullscreen = want;
        }
    }

    fn schedule_repaint(&mut self, ctx: &egui::Context) {
        let now = Instant::now();
        self.notifier.prune(now);
        if let Some(wait) = self.notifier.next_expiry(now) {
            ctx.request_repaint_after(wait);
        }
        if Slot::BOTH.iter().any(|&s| self.stage.is_loading(s)) {
            ctx.request_repaint_after(LOADING_POLL);
        }
    }

    pub fn send_command(&self, cmd: WorkerCommand) {
        let _ = self.cmd_tx.send(cmd);
    }
}

impl eframe::App for JuxtaApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results(ctx);
        self.handle_dropped_files(ctx);
        self.check_slow_loads();
        self.sync_fullscreen(ctx);

        if self.viewport.state().display_mode() != DisplayMode::Fullscreen {
            panels::menu_bar::show(ctx, self);
            panels::toolbar::show(ctx, self);
        }
        panels::status::show(ctx, self);
        panels::viewport::show(ctx, self);
        panels::notifications::show(ctx, self);

        if self.ui_state.show_about {
            egui::Window::new("About Juxta")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Juxta");
                        ui.label("Before/after image comparison");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.small(format!("Accepts: {}", ALLOWED_MIME_TYPES.join(", ")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.ui_state.show_about = false;
                        }
                    });
                });
        }

        self.schedule_repaint(ctx);
    }
}

fn capitalize(label: &str) -> String {
    let lower = label.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
