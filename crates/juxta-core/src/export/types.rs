/// Export step, used for progress reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportStage {
    Preparing,
    Compositing,
    Encoding,
    Writing,
}

impl std::fmt::Display for ExportStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Preparing => write!(f, "Preparing images"),
            Self::Compositing => write!(f, "Compositing"),
            Self::Encoding => write!(f, "Encoding PNG"),
            Self::Writing => write!(f, "Writing file"),
        }
    }
}

/// Canvas size of an export, plus how many canvas pixels one unit of the
/// view's scroll offset covers (the display's pixels-per-point for a GUI).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExportFrame {
    pub width: u32,
    pub height: u32,
    pub scroll_scale: f32,
}

impl ExportFrame {
    /// A non-positive or non-finite scale falls back to 1.
    pub fn new((width, height): (u32, u32), scroll_scale: f32) -> Self {
        let scroll_scale = if scroll_scale.is_finite() && scroll_scale > 0.0 {
            scroll_scale
        } else {
            1.0
        };
        Self {
            width,
            height,
            scroll_scale,
        }
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

impl From<(u32, u32)> for ExportFrame {
    fn from(size: (u32, u32)) -> Self {
        Self::new(size, 1.0)
    }
}

/// Thread-safe progress reporting for exports.
///
/// All methods have default no-op implementations.
pub trait ProgressReporter: Send + Sync {
    /// A new step has started.
    fn begin_stage(&self, _stage: ExportStage) {}

    /// The current step is finished.
    fn finish_stage(&self) {}
}

/// Reporter that ignores every update.
pub struct NoOpReporter;
impl ProgressReporter for NoOpReporter {}
