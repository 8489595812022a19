//! Base64 data-URL conversion for previews

use crate::utils::error_helpers::convert_file_error;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::path::{Path, PathBuf};

/// A file together with its `data:` URL
#[derive(Debug, Clone, PartialEq)]
pub struct FileWithDataUrl {
    pub file: PathBuf,
    pub result: String,
}

pub fn to_data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// MIME type guessed from the file name
pub fn mime_for_path(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}

/// Read a file and return it with its base64 data URL.
///
/// # Errors
/// Returns a storage error when the file cannot be read.
pub async fn get_base64_with_file(path: impl AsRef<Path>) -> crate::Result<FileWithDataUrl> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| convert_file_error(e, path))?;

    Ok(FileWithDataUrl {
        file: path.to_path_buf(),
        result: to_data_url(&mime_for_path(path), &bytes),
    })
}
