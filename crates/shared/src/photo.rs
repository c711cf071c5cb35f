//! Photo file encoding for pet profiles.
//!
//! The backend accepts pet photos as embeddable data URIs. Files are
//! size-checked before they are read so an oversized photo never reaches
//! the wire.

use std::path::Path;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use thiserror::Error;

/// Maximum accepted photo size in bytes (5 MB).
pub const MAX_PHOTO_BYTES: u64 = 5 * 1024 * 1024;

/// Errors that can occur while preparing a photo for upload.
#[derive(Debug, Error)]
pub enum PhotoError {
    #[error("Photo must be smaller than 5MB")]
    TooLarge { size: u64 },

    #[error("Failed to read photo file: {0}")]
    Io(#[from] std::io::Error),
}

/// Reads an image file and encodes it as a `data:` URI.
///
/// Rejects files larger than [`MAX_PHOTO_BYTES`] without reading their
/// contents. The mime type is guessed from the file extension and falls
/// back to `application/octet-stream`.
pub fn encode_data_uri(path: &Path) -> Result<String, PhotoError> {
    let size = std::fs::metadata(path)?.len();
    if size > MAX_PHOTO_BYTES {
        return Err(PhotoError::TooLarge { size });
    }

    let bytes = std::fs::read(path)?;
    let mime = mime_guess::from_path(path).first_or_octet_stream();

    Ok(format!("data:{};base64,{}", mime, STANDARD.encode(bytes)))
}
