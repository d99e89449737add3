// Image loading: read the file, base64-encode it and pick the MIME type
// the endpoint expects from the file extension.

use crate::error::{ProbeError, Result};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// MIME type sent when the extension is missing or not in the table.
pub const DEFAULT_MIME_TYPE: &str = "image/png";

/// Lower-cased extension (without the dot) to MIME type.
static MIME_TYPES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("jpg", "image/jpeg"),
        ("jpeg", "image/jpeg"),
        ("png", "image/png"),
        ("gif", "image/gif"),
        ("webp", "image/webp"),
    ])
});

/// An image ready to be embedded in a JSON request.
#[derive(Debug, Clone)]
pub struct ImagePayload {
    pub path: PathBuf,
    pub base64: String,
    pub mime_type: &'static str,
}

impl ImagePayload {
    /// Read `path` fully and encode it. The file handle is released before
    /// this returns.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ProbeError::ImageNotFound(path.to_path_buf()));
        }
        let bytes = std::fs::read(path).map_err(|source| ProbeError::ImageRead {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "read image");

        Ok(ImagePayload {
            path: path.to_path_buf(),
            base64: encode(&bytes),
            mime_type: mime_type_for(path),
        })
    }

    /// Length of the encoded text in characters.
    pub fn encoded_len(&self) -> usize {
        self.base64.len()
    }
}

/// Standard, padded base64.
pub fn encode(bytes: &[u8]) -> String {
    BASE64.encode(bytes)
}

/// Case-insensitive extension lookup, falling back to `image/png`.
pub fn mime_type_for(path: &Path) -> &'static str {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .and_then(|ext| MIME_TYPES.get(ext.as_str()).copied())
        .unwrap_or(DEFAULT_MIME_TYPE)
}
