/// Default divider position, in percent of the frame width.
pub const DEFAULT_DIVIDER_PERCENT: f32 = 50.0;

/// Lowest reachable zoom step.
pub const MIN_ZOOM_LEVEL: i32 = -3;

/// Highest reachable zoom step.
pub const MAX_ZOOM_LEVEL: i32 = 3;

/// Vertical pan limit in pixels, applied symmetrically.
pub const MAX_SCROLL_OFFSET: f32 = 1000.0;

/// Pan distance for one arrow key press.
pub const SCROLL_STEP: f32 = 50.0;

/// Multiplier applied to wheel `delta_y` before it is added to the scroll offset.
pub const WHEEL_SCROLL_FACTOR: f32 = 0.5;

/// Corner labels hide when the divider is within this many percentage
/// points of the label's edge.
pub const LABEL_FADE_MARGIN: f32 = 5.0;

/// Scale factors for zoom levels -3..=3 in 1:1 mode (relative to native pixels).
pub const ONE_TO_ONE_ZOOM_TABLE: [f32; 7] = [0.25, 0.5, 0.75, 1.0, 1.25, 1.5, 2.0];

/// Scale factors for zoom levels -3..=3 in fullscreen mode (relative to fill-width).
pub const FULLSCREEN_ZOOM_TABLE: [f32; 7] = [0.4, 0.6, 0.8, 1.0, 1.3, 1.6, 2.0];

/// Largest accepted input file: 10 MiB.
pub const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// How long a notification stays visible unless dismissed.
pub const DEFAULT_NOTIFICATION_MS: u64 = 3000;

/// A decode pending for longer than this is logged as a possible hang.
pub const DEFAULT_SLOW_DECODE_WARN_MS: u64 = 10_000;

/// Width of the exported divider line in pixels.
pub const DIVIDER_LINE_WIDTH: u32 = 3;

/// Extra pixels on each side of the divider line covered by its shadow.
pub const DIVIDER_SHADOW_SPREAD: u32 = 2;

/// Minimum pixel count (w*h) to composite rows in parallel with Rayon.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// File name prefix for exported composites.
pub const EXPORT_FILE_PREFIX: &str = "comparison";
