use thiserror::Error;

#[derive(Error, Debug)]
pub enum JuxtaError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Validation(String),

    #[error("Could not decode image: {0}")]
    Decode(String),

    #[error("Both images must finish loading before export")]
    ExportNotReady,

    #[error("An export is already in progress")]
    ExportInProgress,

    #[error("Export failed: {0}")]
    Export(String),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),
}

impl JuxtaError {
    /// Message suitable for a notification. Validation errors are passed
    /// through verbatim.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(msg) => msg.clone(),
            Self::Decode(_) => {
                "Could not read this image. The file may be corrupt or unsupported.".into()
            }
            Self::ExportNotReady => "Images are still loading. Try again in a moment.".into(),
            Self::ExportInProgress => "An export is already running.".into(),
            Self::Export(_) | Self::ImageError(_) => {
                "Failed to generate download. Please try again.".into()
            }
            Self::Io(e) => format!("An error occurred while accessing the file: {e}"),
        }
    }
}

pub type Result<T> = std::result::Result<T, JuxtaError>;
