use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_DIVIDER_PERCENT, DEFAULT_NOTIFICATION_MS, DEFAULT_SLOW_DECODE_WARN_MS,
    MAX_FILE_SIZE_BYTES,
};
use crate::geometry::DisplayMode;
use crate::viewport::ComparisonViewport;

/// Viewer settings. Every section may be omitted from a config file.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewerConfig {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub validation: ValidationConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub notifications: NotificationConfig,
    #[serde(default)]
    pub loading: LoadingConfig,
}

impl ViewerConfig {
    /// A viewport set up with the configured initial mode and divider.
    pub fn viewport(&self) -> ComparisonViewport {
        ComparisonViewport::new(self.display.initial_mode, self.display.initial_divider)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub initial_mode: DisplayMode,
    /// Divider position restored on start and on stage-clear, 0..=100.
    pub initial_divider: f32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            initial_mode: DisplayMode::Fit,
            initial_divider: DEFAULT_DIVIDER_PERCENT,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    pub max_file_bytes: u64,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_file_bytes: MAX_FILE_SIZE_BYTES,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Where exports are written. `None` asks each time (GUI) or uses the
    /// working directory (CLI).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    pub duration_ms: u64,
}

impl NotificationConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_NOTIFICATION_MS,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadingConfig {
    /// Pending decodes older than this are logged once as possibly stuck.
    pub slow_decode_warn_ms: u64,
}

impl LoadingConfig {
    pub fn slow_decode_warn(&self) -> Duration {
        Duration::from_millis(self.slow_decode_warn_ms)
    }
}

impl Default for LoadingConfig {
    fn default() -> Self {
        Self {
            slow_decode_warn_ms: DEFAULT_SLOW_DECODE_WARN_MS,
        }
    }
}
