use std::path::Path;

use crate::error::{JuxtaError, Result};

/// MIME types the viewer accepts.
pub const ALLOWED_MIME_TYPES: &[&str] = &[
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/gif",
    "image/bmp",
    "image/tiff",
    "image/webp",
];

pub const NO_FILE_MESSAGE: &str = "No file selected";
pub const INVALID_TYPE_MESSAGE: &str =
    "Invalid file type. Please select a valid image file (JPEG, PNG, GIF, BMP, TIFF, WebP)";

/// A file the user picked, described before any bytes are read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileCandidate {
    pub file_name: String,
    pub byte_size: u64,
    pub mime: Option<String>,
}

impl FileCandidate {
    /// Describe a file on disk. The MIME type comes from the extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let metadata = std::fs::metadata(path)?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self {
            mime: mime_from_extension(path).map(str::to_string),
            file_name,
            byte_size: metadata.len(),
        })
    }
}

/// Outcome of [`validate`]: `valid` plus the user-facing reason when invalid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Validation {
    pub valid: bool,
    pub error: Option<String>,
}

impl Validation {
    fn ok() -> Self {
        Self {
            valid: true,
            error: None,
        }
    }

    fn rejected(msg: impl Into<String>) -> Self {
        Self {
            valid: false,
            error: Some(msg.into()),
        }
    }

    pub fn into_result(self) -> Result<()> {
        match self.error {
            Some(msg) if !self.valid => Err(JuxtaError::Validation(msg)),
            _ => Ok(()),
        }
    }
}

/// Map a file extension to its image MIME type.
pub fn mime_from_extension(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "bmp" => Some("image/bmp"),
        "tif" | "tiff" => Some("image/tiff"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}

/// Limits below 1 MB are given in KB (or bytes) so the figure never reads 0.
/// Rounds down: every file under the stated size passes.
pub fn too_large_message(max_bytes: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = 1024 * KIB;
    let limit = match max_bytes {
        b if b >= MIB => format!("{}MB", b / MIB),
        b if b >= KIB => format!("{}KB", b / KIB),
        b => format!("{b} bytes"),
    };
    format!("File too large. Please select an image smaller than {limit}")
}

/// Check type first, then size, against `max_bytes`.
pub fn validate(candidate: Option<&FileCandidate>, max_bytes: u64) -> Validation {
    let Some(file) = candidate else {
        return Validation::rejected(NO_FILE_MESSAGE);
    };

    let type_ok = file
        .mime
        .as_deref()
        .is_some_and(|m| ALLOWED_MIME_TYPES.contains(&m));
    if !type_ok {
        return Validation::rejected(INVALID_TYPE_MESSAGE);
    }

    if file.byte_size > max_bytes {
        return Validation::rejected(too_large_message(max_bytes));
    }

    Validation::ok()
}
