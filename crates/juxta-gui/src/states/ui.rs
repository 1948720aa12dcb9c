use juxta_core::export::ExportStage;

/// Overall UI state.
#[derive(Default)]
pub struct UIState {
    /// Log messages.
    pub log_messages: Vec<String>,

    /// Current export step (None = idle).
    pub export_stage: Option<ExportStage>,

    /// Comparison area in physical pixels, as last drawn. Exports use it.
    pub frame_px: (u32, u32),

    /// Scale of the comparison area when `frame_px` was taken.
    pub pixels_per_point: f32,

    /// Whether the window was last asked to go fullscreen.
    pub window_fullscreen: bool,

    /// Files are being dragged over the window.
    pub drop_hover: bool,

    pub show_about: bool,
}

impl UIState {
    pub fn is_exporting(&self) -> bool {
        self.export_stage.is_some()
    }

    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }
}
