//! Extension to MIME type lookup used for the `Content-Type` of signed PUTs

pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// MIME type for a file extension, with or without a leading dot.
/// Unknown extensions map to [`DEFAULT_CONTENT_TYPE`].
pub fn content_type_for(suffix: &str) -> String {
    let suffix = suffix.trim_start_matches('.');
    mime_guess::from_ext(suffix)
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}

/// Extension after the last `.` of a file name, if any
pub fn suffix_of(name: &str) -> Option<&str> {
    name.rsplit_once('.')
        .map(|(_, ext)| ext)
        .filter(|ext| !ext.is_empty())
}
