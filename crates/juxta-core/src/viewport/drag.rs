use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::trace;

/// Shared flag telling the host to route pointer moves and releases from
/// anywhere in the window to the viewport.
///
/// Only a live [`DragSession`] sets it.
#[derive(Clone, Debug, Default)]
pub struct PointerCapture(Arc<AtomicBool>);

impl PointerCapture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// One open drag. Acquires the pointer capture on creation and releases it
/// on drop, whichever way the session ends.
#[derive(Debug)]
pub struct DragSession {
    capture: PointerCapture,
}

impl DragSession {
    pub(crate) fn open(capture: &PointerCapture, start_percent: f32) -> Self {
        capture.0.store(true, Ordering::Release);
        trace!(start_percent, "Drag session opened");
        Self {
            capture: capture.clone(),
        }
    }
}

impl Drop for DragSession {
    fn drop(&mut self) {
        self.capture.0.store(false, Ordering::Release);
        trace!("Drag session closed");
    }
}
