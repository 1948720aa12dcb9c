use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{Args, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use juxta_core::asset::ImageAsset;
use juxta_core::config::ViewerConfig;
use juxta_core::export::{ExportStage, Exporter, ProgressReporter};
use juxta_core::geometry::DisplayMode;
use juxta_core::io::loader::load_path;
use juxta_core::viewport::ViewportState;
use tracing::info;

use crate::summary::print_compose_summary;

#[derive(Clone, Copy, ValueEnum)]
pub enum ModeArg {
    Fit,
    OneToOne,
    Fullscreen,
}

impl From<ModeArg> for DisplayMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Fit => DisplayMode::Fit,
            ModeArg::OneToOne => DisplayMode::OneToOne,
            ModeArg::Fullscreen => DisplayMode::Fullscreen,
        }
    }
}

#[derive(Args)]
pub struct ComposeArgs {
    /// Image shown left of the divider
    pub before: PathBuf,

    /// Image shown right of the divider
    pub after: PathBuf,

    /// Divider position in percent (0-100)
    #[arg(long)]
    pub divider: Option<f32>,

    /// Display mode
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Zoom step (-3..3), ignored in fit mode
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub zoom: i32,

    /// Vertical pan in pixels, ignored in fit mode
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub scroll: f32,

    /// Output area as WxH (defaults to the before image's size)
    #[arg(long, value_parser = parse_size)]
    pub size: Option<(u32, u32)>,

    /// Output file path (defaults to comparison-<millis>.png)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Viewer config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn parse_size(s: &str) -> std::result::Result<(u32, u32), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WxH, got '{s}'"))?;
    let w: u32 = w.trim().parse().map_err(|_| format!("bad width '{w}'"))?;
    let h: u32 = h.trim().parse().map_err(|_| format!("bad height '{h}'"))?;
    if w == 0 || h == 0 {
        return Err("width and height must be positive".into());
    }
    Ok((w, h))
}

/// Drives an indicatif spinner from export stages.
struct SpinnerReporter {
    pb: ProgressBar,
}

impl ProgressReporter for SpinnerReporter {
    fn begin_stage(&self, stage: ExportStage) {
        self.pb.set_message(stage.to_string());
    }

    fn finish_stage(&self) {
        self.pb.tick();
    }
}

pub fn run(args: &ComposeArgs) -> Result<()> {
    let config = match args.config {
        Some(ref path) => super::config::load(path)?,
        None => ViewerConfig::default(),
    };
    let max_bytes = config.validation.max_file_bytes;

    let (before, after) = rayon::join(
        || load_path(&args.before, max_bytes),
        || load_path(&args.after, max_bytes),
    );
    let before = before.with_context(|| format!("Failed to load {}", args.before.display()))?;
    let after = after.with_context(|| format!("Failed to load {}", args.after.display()))?;

    let mode = args
        .mode
        .map(DisplayMode::from)
        .unwrap_or(config.display.initial_mode);
    let state = ViewportState::new()
        .with_mode(mode)
        .with_divider(args.divider.unwrap_or(config.display.initial_divider))
        .with_zoom(args.zoom)
        .with_scroll(args.scroll);

    let size = match args.size {
        Some(size) => size,
        None => natural_size(&before)?,
    };

    print_compose_summary(&before, &after, &state, size);

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner} {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(100));
    let reporter = SpinnerReporter { pb };

    let exported = Exporter::new().export(Some(&before), Some(&after), &state, size, &reporter)?;

    reporter.begin_stage(ExportStage::Writing);
    let path = match args.output {
        Some(ref path) => {
            exported.save(path)?;
            path.clone()
        }
        None => {
            let dir = config
                .export
                .directory
                .clone()
                .unwrap_or_else(|| PathBuf::from("."));
            exported.save_in(&dir)?
        }
    };
    reporter.pb.finish_with_message("Done");

    info!(path = %path.display(), "Comparison saved");
    println!("\nOutput saved to {}", display_path(&path));

    Ok(())
}

fn natural_size(asset: &ImageAsset) -> Result<(u32, u32)> {
    match asset.natural_size() {
        Some(size) => Ok(size),
        None => bail!("{} has not been decoded", asset.file_name),
    }
}

fn display_path(path: &Path) -> String {
    path.strip_prefix(".").unwrap_or(path).display().to_string()
}
