mod compose;
mod exporter;
mod types;

pub use compose::{compose, draw_divider};
pub use exporter::{encode_png, export_file_name, ExportGuard, ExportedImage, Exporter};
pub use types::{ExportFrame, ExportStage, NoOpReporter, ProgressReporter};
