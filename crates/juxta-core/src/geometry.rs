//! Pure layout math shared by the live viewport and the exporter.
//!
//! Nothing here holds state. All coordinates are in frame-local pixels with
//! the origin at the frame's top-left corner.

use serde::{Deserialize, Serialize};

use crate::consts::{
    FULLSCREEN_ZOOM_TABLE, LABEL_FADE_MARGIN, MAX_SCROLL_OFFSET, MAX_ZOOM_LEVEL, MIN_ZOOM_LEVEL,
    ONE_TO_ONE_ZOOM_TABLE,
};

/// How images are scaled inside the comparison frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    /// Contain-fit inside the frame, no zoom or scroll.
    #[default]
    Fit,
    /// Native pixel size times the zoom factor.
    OneToOne,
    /// Frame width times the zoom factor.
    Fullscreen,
}

impl DisplayMode {
    pub const ALL: [DisplayMode; 3] = [Self::Fit, Self::OneToOne, Self::Fullscreen];

    /// Whether zoom, scroll and the keyboard/wheel bindings apply.
    pub fn is_zoomable(self) -> bool {
        matches!(self, Self::OneToOne | Self::Fullscreen)
    }

    /// Short lowercase name used in the status line.
    pub fn short_name(self) -> &'static str {
        match self {
            Self::Fit => "fit",
            Self::OneToOne => "1:1",
            Self::Fullscreen => "fullscreen",
        }
    }
}

impl std::fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fit => write!(f, "Scale to Fit"),
            Self::OneToOne => write!(f, "1:1 Ratio"),
            Self::Fullscreen => write!(f, "Fullscreen"),
        }
    }
}

/// Width and height in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

impl From<(u32, u32)> for Size {
    fn from((w, h): (u32, u32)) -> Self {
        Self::new(w as f32, h as f32)
    }
}

/// Axis-aligned rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Where one image lands in the frame and which part of the frame shows "after".
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImageLayout {
    /// Image pixels per source pixel.
    pub scale: f32,
    /// Destination rectangle of the whole image; may extend past the frame.
    pub draw_rect: Rect,
    /// Region right of the divider, full frame height.
    pub clip_rect: Rect,
    /// Horizontal divider position in frame pixels.
    pub divider_x: f32,
}

/// Convert a pointer x coordinate into a divider percentage in [0, 100].
///
/// Returns `None` for a zero-width or non-finite container; callers keep
/// their previous divider value in that case.
pub fn pointer_to_percent(pointer_x: f32, container_left: f32, container_width: f32) -> Option<f32> {
    if !(container_width > 0.0) || !container_width.is_finite() || !pointer_x.is_finite() {
        return None;
    }
    let percent = (pointer_x - container_left) / container_width * 100.0;
    Some(clamp_divider(percent))
}

/// Scale factor for a zoom step. Out-of-range levels are clamped first.
pub fn zoom_level_to_scale(level: i32, mode: DisplayMode) -> f32 {
    let index = (clamp_zoom_level(level) - MIN_ZOOM_LEVEL) as usize;
    match mode {
        DisplayMode::Fit => 1.0,
        DisplayMode::OneToOne => ONE_TO_ONE_ZOOM_TABLE[index],
        DisplayMode::Fullscreen => FULLSCREEN_ZOOM_TABLE[index],
    }
}

pub fn clamp_divider(percent: f32) -> f32 {
    if percent.is_nan() {
        return 0.0;
    }
    percent.clamp(0.0, 100.0)
}

pub fn clamp_zoom_level(level: i32) -> i32 {
    level.clamp(MIN_ZOOM_LEVEL, MAX_ZOOM_LEVEL)
}

pub fn clamp_scroll(offset: f32) -> f32 {
    if offset.is_nan() {
        return 0.0;
    }
    offset.clamp(-MAX_SCROLL_OFFSET, MAX_SCROLL_OFFSET)
}

/// Scale that fits `image` inside `frame` preserving aspect ratio, never
/// enlarging past native size.
pub fn contain_scale(image: Size, frame: Size) -> f32 {
    if image.is_empty() || frame.is_empty() {
        return 1.0;
    }
    let fit_x = frame.width / image.width;
    let fit_y = frame.height / image.height;
    fit_x.min(fit_y).min(1.0)
}

/// Compute the layout of one image for the given view parameters.
pub fn layout(
    mode: DisplayMode,
    zoom_level: i32,
    scroll_offset: f32,
    divider_percent: f32,
    image: Size,
    frame: Size,
) -> ImageLayout {
    layout_scaled(mode, zoom_level, scroll_offset, divider_percent, image, frame, 1.0)
}

/// [`layout`] for a frame measured in finer units than the scroll offset,
/// such as physical pixels for a view scrolled in points. The offset is
/// clamped first, then multiplied by `scroll_scale`.
pub fn layout_scaled(
    mode: DisplayMode,
    zoom_level: i32,
    scroll_offset: f32,
    divider_percent: f32,
    image: Size,
    frame: Size,
    scroll_scale: f32,
) -> ImageLayout {
    let (scale, offset_y) = match mode {
        DisplayMode::Fit => (contain_scale(image, frame), 0.0),
        DisplayMode::OneToOne => (
            zoom_level_to_scale(zoom_level, mode),
            clamp_scroll(scroll_offset),
        ),
        DisplayMode::Fullscreen => {
            let base = if image.width > 0.0 {
                frame.width / image.width
            } else {
                1.0
            };
            (
                base * zoom_level_to_scale(zoom_level, mode),
                clamp_scroll(scroll_offset),
            )
        }
    };

    let draw_w = image.width * scale;
    let draw_h = image.height * scale;
    let draw_rect = Rect::new(
        (frame.width - draw_w) / 2.0,
        (frame.height - draw_h) / 2.0 + offset_y * scroll_scale,
        draw_w,
        draw_h,
    );

    let divider_x = frame.width * clamp_divider(divider_percent) / 100.0;
    let clip_rect = Rect::new(divider_x, 0.0, frame.width - divider_x, frame.height);

    ImageLayout {
        scale,
        draw_rect,
        clip_rect,
        divider_x,
    }
}

/// Visibility of the corner labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LabelVisibility {
    pub before: bool,
    pub after: bool,
}

/// Hide a label when the divider would cover it. Labels always show when
/// the divider is inactive.
pub fn label_visibility(divider_percent: f32, divider_active: bool) -> LabelVisibility {
    if !divider_active {
        return LabelVisibility {
            before: true,
            after: true,
        };
    }
    LabelVisibility {
        before: divider_percent > LABEL_FADE_MARGIN,
        after: divider_percent < 100.0 - LABEL_FADE_MARGIN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contain_scale_never_enlarges() {
        let s = contain_scale(Size::new(100.0, 50.0), Size::new(1000.0, 1000.0));
        assert_eq!(s, 1.0);
    }
}
