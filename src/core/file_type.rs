//! File-type checks for upload widgets.
//!
//! A name is accepted when it ends with `.<ext>` for one of the accepted
//! extensions, compared case-insensitively. An empty accept list selects a
//! fixed default set.

pub const DEFAULT_PICTURE_TYPES: &[&str] = &["jpg", "jpeg", "png", "gif"];

pub const DEFAULT_FILE_TYPES: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "doc", "docx", "pdf", "excel", "xlsx", "ppt", "pptx", "mp4",
];

/// Extensions recognised by [`is_img_type_by_name`]. Office and PDF
/// documents are part of this list as well.
pub const IMG_TYPES_BY_NAME: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "doc", "docx", "pdf", "excel", "xlsx", "ppt", "pptx",
];

fn has_extension<S: AsRef<str>>(name: &str, extensions: &[S]) -> bool {
    let name = name.to_lowercase();
    extensions.iter().any(|ext| {
        let ext = ext.as_ref().trim().trim_start_matches('.').to_lowercase();
        !ext.is_empty()
            && name.len() > ext.len()
            && name.ends_with(&ext)
            && name[..name.len() - ext.len()].ends_with('.')
    })
}

fn check_with_default<S: AsRef<str>>(name: &str, accepts: &[S], default: &[&str]) -> bool {
    if accepts.is_empty() {
        has_extension(name, default)
    } else {
        has_extension(name, accepts)
    }
}

/// Check a picture name against `accepts`, or jpg/jpeg/png/gif when empty
pub fn check_picture_type<S: AsRef<str>>(name: &str, accepts: &[S]) -> bool {
    check_with_default(name, accepts, DEFAULT_PICTURE_TYPES)
}

/// Check a file name against `accepts`, or [`DEFAULT_FILE_TYPES`] when empty
pub fn check_file_type<S: AsRef<str>>(name: &str, accepts: &[S]) -> bool {
    check_with_default(name, accepts, DEFAULT_FILE_TYPES)
}

pub fn check_img_type(name: &str) -> bool {
    is_img_type_by_name(name)
}

pub fn is_img_type_by_name(name: &str) -> bool {
    has_extension(name, IMG_TYPES_BY_NAME)
}
