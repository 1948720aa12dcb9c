use crate::consts::DEFAULT_DIVIDER_PERCENT;
use crate::geometry::{clamp_divider, clamp_scroll, clamp_zoom_level, DisplayMode};

/// Render state of the comparison viewport. Every setter clamps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportState {
    divider_percent: f32,
    display_mode: DisplayMode,
    zoom_level: i32,
    scroll_offset: f32,
    is_dragging: bool,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            divider_percent: DEFAULT_DIVIDER_PERCENT,
            display_mode: DisplayMode::Fit,
            zoom_level: 0,
            scroll_offset: 0.0,
            is_dragging: false,
        }
    }
}

impl ViewportState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_divider(mut self, percent: f32) -> Self {
        self.set_divider(percent);
        self
    }

    pub fn with_mode(mut self, mode: DisplayMode) -> Self {
        self.set_display_mode(mode);
        self
    }

    /// Ignored in fit mode, where zoom is fixed at 0.
    pub fn with_zoom(mut self, level: i32) -> Self {
        self.set_zoom_level(level);
        self
    }

    /// Ignored in fit mode, where scroll is fixed at 0.
    pub fn with_scroll(mut self, offset: f32) -> Self {
        self.set_scroll_offset(offset);
        self
    }

    pub fn divider_percent(&self) -> f32 {
        self.divider_percent
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.display_mode
    }

    pub fn zoom_level(&self) -> i32 {
        self.zoom_level
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    pub(crate) fn set_dragging(&mut self, dragging: bool) {
        self.is_dragging = dragging;
    }

    pub fn set_divider(&mut self, percent: f32) -> bool {
        let new = clamp_divider(percent);
        let changed = new != self.divider_percent;
        self.divider_percent = new;
        changed
    }

    /// Change mode. Any actual change resets zoom and scroll.
    pub fn set_display_mode(&mut self, mode: DisplayMode) -> bool {
        if mode == self.display_mode {
            return false;
        }
        self.display_mode = mode;
        self.reset_zoom();
        true
    }

    pub fn set_zoom_level(&mut self, level: i32) -> bool {
        if !self.display_mode.is_zoomable() {
            return false;
        }
        let new = clamp_zoom_level(level);
        let changed = new != self.zoom_level;
        self.zoom_level = new;
        changed
    }

    pub fn set_scroll_offset(&mut self, offset: f32) -> bool {
        if !self.display_mode.is_zoomable() {
            return false;
        }
        let new = clamp_scroll(offset);
        let changed = new != self.scroll_offset;
        self.scroll_offset = new;
        changed
    }

    /// Zoom and scroll back to 0. Returns whether anything changed.
    pub fn reset_zoom(&mut self) -> bool {
        let changed = self.zoom_level != 0 || self.scroll_offset != 0.0;
        self.zoom_level = 0;
        self.scroll_offset = 0.0;
        changed
    }
}
