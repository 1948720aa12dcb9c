use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Args;
use juxta_core::asset::ImageAsset;
use juxta_core::consts::MAX_FILE_SIZE_BYTES;
use juxta_core::error::JuxtaError;
use juxta_core::io::loader::{decode, read_file};
use juxta_core::io::validate::FileCandidate;

#[derive(Args)]
pub struct InfoArgs {
    /// Input image file
    pub file: PathBuf,

    /// Size limit in bytes used for validation
    #[arg(long, default_value_t = MAX_FILE_SIZE_BYTES)]
    pub max_bytes: u64,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let candidate = FileCandidate::from_path(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;

    println!("File:        {}", candidate.file_name);
    println!("Type:        {}", candidate.mime.as_deref().unwrap_or("unknown"));
    println!("Size:        {:.1} KB", candidate.byte_size as f64 / 1024.0);

    let asset = inspect(&args.file, args.max_bytes)?;

    println!("Format:      {:?}", asset.format);
    if let Some((w, h)) = asset.natural_size() {
        println!("Dimensions:  {}x{}", w, h);
    }

    Ok(())
}

/// Validate, read and decode through the same loader the viewer uses.
fn inspect(path: &Path, max_bytes: u64) -> Result<ImageAsset> {
    let pending = match read_file(path, max_bytes) {
        Ok(pending) => pending,
        Err(JuxtaError::Validation(reason)) => {
            println!("Valid:       no");
            bail!(reason);
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to read {}", path.display()));
        }
    };
    println!("Valid:       yes");

    decode(&pending).with_context(|| format!("Failed to decode {}", path.display()))
}
