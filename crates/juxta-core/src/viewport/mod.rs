mod comparison;
mod drag;
mod input;
mod state;
mod status;

pub use comparison::ComparisonViewport;
pub use drag::{DragSession, PointerCapture};
pub use input::{Container, InputResponse, ViewportEvent, ViewportKey};
pub use state::ViewportState;
pub use status::status_line;
