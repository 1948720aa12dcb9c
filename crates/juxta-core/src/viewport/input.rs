/// Keys the viewport reacts to in zoomable modes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewportKey {
    ArrowUp,
    ArrowDown,
    /// `+` or `=`
    ZoomIn,
    /// `-` or `_`
    ZoomOut,
    /// `0`
    ResetZoom,
    Escape,
}

impl ViewportKey {
    /// Map a typed character to a key binding.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' | '=' => Some(Self::ZoomIn),
            '-' | '_' => Some(Self::ZoomOut),
            '0' => Some(Self::ResetZoom),
            _ => None,
        }
    }
}

/// Horizontal extent of the comparison surface in host coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Container {
    pub left: f32,
    pub width: f32,
}

impl Container {
    pub fn new(left: f32, width: f32) -> Self {
        Self { left, width }
    }
}

/// Input delivered to [`super::ComparisonViewport::handle`]. Touch input
/// maps onto the same press/move/release events.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ViewportEvent {
    Press { x: f32, container: Container },
    Move { x: f32, container: Container },
    /// `x` is the release location when the host knows it.
    Release {
        x: Option<f32>,
        container: Container,
    },
    Key(ViewportKey),
    Wheel { delta_y: f32 },
}

/// What handling an event did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputResponse {
    /// Viewport state changed.
    pub changed: bool,
    /// The host should suppress its own handling (page scroll, key default).
    pub consumed: bool,
}

impl InputResponse {
    pub const IGNORED: Self = Self {
        changed: false,
        consumed: false,
    };

    pub(crate) fn consumed(changed: bool) -> Self {
        Self {
            changed,
            consumed: true,
        }
    }
}
