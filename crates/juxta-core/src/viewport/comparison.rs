use tracing::debug;

use crate::consts::{DEFAULT_DIVIDER_PERCENT, SCROLL_STEP, WHEEL_SCROLL_FACTOR};
use crate::geometry::{
    label_visibility, layout, pointer_to_percent, DisplayMode, ImageLayout, LabelVisibility, Size,
};
use crate::stage::StageState;

use super::drag::{DragSession, PointerCapture};
use super::input::{Container, InputResponse, ViewportEvent, ViewportKey};
use super::state::ViewportState;

/// The comparison viewport state machine.
///
/// Pointer input only acts while the stage is paired. Keyboard and wheel
/// input only act in zoomable modes.
pub struct ComparisonViewport {
    state: ViewportState,
    stage: StageState,
    drag: Option<DragSession>,
    capture: PointerCapture,
    initial_divider: f32,
}

impl Default for ComparisonViewport {
    fn default() -> Self {
        Self::new(DisplayMode::Fit, DEFAULT_DIVIDER_PERCENT)
    }
}

impl ComparisonViewport {
    pub fn new(mode: DisplayMode, initial_divider: f32) -> Self {
        let state = ViewportState::new()
            .with_mode(mode)
            .with_divider(initial_divider);
        Self {
            initial_divider: state.divider_percent(),
            state,
            stage: StageState::Empty,
            drag: None,
            capture: PointerCapture::new(),
        }
    }

    pub fn state(&self) -> &ViewportState {
        &self.state
    }

    pub fn stage_state(&self) -> StageState {
        self.stage
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Handle the host polls to decide whether to forward window-wide
    /// pointer moves and releases.
    pub fn pointer_capture(&self) -> PointerCapture {
        self.capture.clone()
    }

    /// Record which slots are filled. Leaving the paired state ends any drag.
    pub fn sync_stage(&mut self, stage: StageState) {
        if stage != self.stage {
            debug!(from = ?self.stage, to = ?stage, "Stage state changed");
            self.stage = stage;
        }
        if !stage.is_paired() {
            self.end_drag();
        }
    }

    /// Reset after a stage-clear. The display mode is kept.
    pub fn reset(&mut self) {
        self.end_drag();
        self.stage = StageState::Empty;
        self.state.set_divider(self.initial_divider);
        self.state.reset_zoom();
    }

    pub fn set_display_mode(&mut self, mode: DisplayMode) -> bool {
        let changed = self.state.set_display_mode(mode);
        if changed {
            debug!(%mode, "Display mode changed");
        }
        changed
    }

    pub fn handle(&mut self, event: ViewportEvent) -> InputResponse {
        match event {
            ViewportEvent::Press { x, container } => self.press(x, container),
            ViewportEvent::Move { x, container } => self.pointer_move(x, container),
            ViewportEvent::Release { x, container } => self.release(x, container),
            ViewportEvent::Key(key) => self.key(key),
            ViewportEvent::Wheel { delta_y } => self.wheel(delta_y),
        }
    }

    /// Open a drag session and jump the divider to the press location.
    pub fn press(&mut self, x: f32, container: Container) -> InputResponse {
        if !self.stage.is_paired() {
            return InputResponse::IGNORED;
        }
        self.update_divider(x, container);
        // Drop the old guard first; its release would clear the new capture.
        self.drag = None;
        self.drag = Some(DragSession::open(
            &self.capture,
            self.state.divider_percent(),
        ));
        self.state.set_dragging(true);
        InputResponse::consumed(true)
    }

    pub fn pointer_move(&mut self, x: f32, container: Container) -> InputResponse {
        if self.drag.is_none() {
            return InputResponse::IGNORED;
        }
        InputResponse::consumed(self.update_divider(x, container))
    }

    /// Close the drag session, moving the divider to `x` first when given.
    /// A press and release at the same spot is a plain click.
    pub fn release(&mut self, x: Option<f32>, container: Container) -> InputResponse {
        if self.drag.is_none() {
            return InputResponse::IGNORED;
        }
        if let Some(x) = x {
            self.update_divider(x, container);
        }
        self.end_drag();
        InputResponse::consumed(true)
    }

    pub fn key(&mut self, key: ViewportKey) -> InputResponse {
        let mode = self.state.display_mode();
        if !mode.is_zoomable() {
            return InputResponse::IGNORED;
        }
        let changed = match key {
            ViewportKey::ArrowUp => {
                let offset = self.state.scroll_offset() - SCROLL_STEP;
                self.state.set_scroll_offset(offset)
            }
            ViewportKey::ArrowDown => {
                let offset = self.state.scroll_offset() + SCROLL_STEP;
                self.state.set_scroll_offset(offset)
            }
            ViewportKey::ZoomIn => {
                let level = self.state.zoom_level() + 1;
                self.state.set_zoom_level(level)
            }
            ViewportKey::ZoomOut => {
                let level = self.state.zoom_level() - 1;
                self.state.set_zoom_level(level)
            }
            ViewportKey::ResetZoom => self.state.reset_zoom(),
            ViewportKey::Escape => {
                if mode != DisplayMode::Fullscreen {
                    return InputResponse::IGNORED;
                }
                self.set_display_mode(DisplayMode::Fit)
            }
        };
        InputResponse::consumed(changed)
    }

    pub fn wheel(&mut self, delta_y: f32) -> InputResponse {
        if !self.state.display_mode().is_zoomable() {
            return InputResponse::IGNORED;
        }
        let offset = self.state.scroll_offset() + delta_y * WHEEL_SCROLL_FACTOR;
        InputResponse::consumed(self.state.set_scroll_offset(offset))
    }

    /// Layout of an image of natural size `image` inside `frame`.
    pub fn layout_for(&self, image: Size, frame: Size) -> ImageLayout {
        layout(
            self.state.display_mode(),
            self.state.zoom_level(),
            self.state.scroll_offset(),
            self.state.divider_percent(),
            image,
            frame,
        )
    }

    pub fn labels(&self) -> LabelVisibility {
        label_visibility(self.state.divider_percent(), self.stage.is_paired())
    }

    fn update_divider(&mut self, x: f32, container: Container) -> bool {
        match pointer_to_percent(x, container.left, container.width) {
            Some(percent) => self.state.set_divider(percent),
            None => false,
        }
    }

    fn end_drag(&mut self) {
        self.drag = None;
        self.state.set_dragging(false);
    }
}
