//! Seams to the host runtime: user notices, file pickers and image probing.
//!
//! The CLI host treats the paths given on the command line as the picked
//! files and prints notices to the terminal.

use crate::core::content_type::suffix_of;
use crate::core::file_type::check_file_type;
use crate::core::services::types::{FileOptions, MediaKind, MediaOptions, PickedFile};
use crate::error::{AppError, UploadError};
use crate::utils::error_helpers::convert_file_error;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Short user-facing notices and a blocking loading indicator
pub trait Notifier: Send + Sync {
    fn toast(&self, message: &str);
    fn show_loading(&self, title: &str);
    fn hide_loading(&self);
}

#[async_trait]
pub trait FilePicker: Send + Sync {
    async fn choose_media(&self, options: &MediaOptions) -> Result<Vec<PickedFile>, AppError>;
    async fn choose_file(&self, options: &FileOptions) -> Result<Vec<PickedFile>, AppError>;
}

/// Image-info lookup; returns the image format as an extension (`png`, `jpeg`, ...)
#[async_trait]
pub trait ImageProbe: Send + Sync {
    async fn image_type(&self, path: &Path, bytes: &[u8]) -> Result<String, AppError>;
}

/// Detects the image format from magic bytes
#[derive(Debug, Clone, Copy, Default)]
pub struct MagicBytesProbe;

impl MagicBytesProbe {
    pub fn sniff(bytes: &[u8]) -> Option<&'static str> {
        if bytes.starts_with(&[0x89, 0x50, 0x4E, 0x47]) {
            Some("png")
        } else if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
            Some("jpeg")
        } else if bytes.starts_with(b"GIF8") {
            Some("gif")
        } else if bytes.starts_with(b"RIFF") && bytes.len() >= 12 && &bytes[8..12] == b"WEBP" {
            Some("webp")
        } else if bytes.starts_with(b"BM") {
            Some("bmp")
        } else {
            None
        }
    }
}

#[async_trait]
impl ImageProbe for MagicBytesProbe {
    async fn image_type(&self, path: &Path, bytes: &[u8]) -> Result<String, AppError> {
        Self::sniff(bytes).map(str::to_string).ok_or_else(|| {
            UploadError::ImageProbe {
                path: path.to_string_lossy().to_string(),
                reason: "unrecognized image format".to_string(),
            }
            .into()
        })
    }
}

/// Prints notices to the terminal
#[derive(Debug, Clone, Default)]
pub struct ConsoleNotifier {
    quiet: bool,
}

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }
}

impl Notifier for ConsoleNotifier {
    fn toast(&self, message: &str) {
        if !self.quiet {
            println!("{}", message);
        }
    }

    fn show_loading(&self, title: &str) {
        if !self.quiet {
            println!("⏳ {}", title);
        }
    }

    fn hide_loading(&self) {}
}

const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "avi", "webm", "m4v"];
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "bmp"];

/// Classify a file name the way a media picker reports it
pub fn media_kind_of(name: &str) -> MediaKind {
    match suffix_of(name).map(str::to_ascii_lowercase) {
        Some(ext) if IMAGE_EXTENSIONS.contains(&ext.as_str()) => MediaKind::Image,
        Some(ext) if VIDEO_EXTENSIONS.contains(&ext.as_str()) => MediaKind::Video,
        _ => MediaKind::File,
    }
}

/// Picker over a fixed list of local paths
#[derive(Debug, Clone, Default)]
pub struct PathPicker {
    paths: Vec<PathBuf>,
}

impl PathPicker {
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self { paths }
    }

    async fn pick(&self, path: &Path) -> Result<PickedFile, AppError> {
        let metadata = tokio::fs::metadata(path)
            .await
            .map_err(|e| convert_file_error(e, path))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        Ok(PickedFile {
            path: path.to_path_buf(),
            kind: media_kind_of(&name),
            name,
            size: metadata.len(),
        })
    }
}

#[async_trait]
impl FilePicker for PathPicker {
    async fn choose_media(&self, options: &MediaOptions) -> Result<Vec<PickedFile>, AppError> {
        if self.paths.is_empty() {
            return Err(UploadError::PickerCancelled.into());
        }
        debug!(
            size_type = ?options.size_type,
            source_type = ?options.source_type,
            "choosing media from paths"
        );

        let mut picked = Vec::new();
        for path in &self.paths {
            let file = self.pick(path).await?;
            if file.kind == MediaKind::File {
                continue;
            }
            if !options.media_type.is_empty() && !options.media_type.contains(&file.kind) {
                continue;
            }
            picked.push(file);
            if picked.len() == options.effective_count() {
                break;
            }
        }
        Ok(picked)
    }

    async fn choose_file(&self, options: &FileOptions) -> Result<Vec<PickedFile>, AppError> {
        if self.paths.is_empty() {
            return Err(UploadError::PickerCancelled.into());
        }

        let mut picked = Vec::new();
        for path in &self.paths {
            let file = self.pick(path).await?;
            if !options.extension.is_empty() && !check_file_type(&file.name, &options.extension) {
                debug!(name = %file.name, "skipping file outside extension filter");
                continue;
            }
            picked.push(file);
            if picked.len() == options.effective_count() {
                break;
            }
        }
        Ok(picked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, bytes: &[u8]) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, bytes).unwrap();
        path
    }

    #[test]
    fn test_sniff() {
        assert_eq!(MagicBytesProbe::sniff(&[0x89, 0x50, 0x4E, 0x47, 0x0D]), Some("png"));
        assert_eq!(MagicBytesProbe::sniff(&[0xFF, 0xD8, 0xFF, 0xE0]), Some("jpeg"));
        assert_eq!(MagicBytesProbe::sniff(b"GIF89a"), Some("gif"));
        assert_eq!(MagicBytesProbe::sniff(b"RIFF\0\0\0\0WEBPVP8 "), Some("webp"));
        assert_eq!(MagicBytesProbe::sniff(b"%PDF-1.7"), None);
    }

    #[test]
    fn test_probe_rejects_non_image() {
        let result = tokio_test::block_on(
            MagicBytesProbe.image_type(Path::new("doc.pdf"), b"%PDF-1.7"),
        );
        assert!(matches!(
            result,
            Err(AppError::Upload(UploadError::ImageProbe { .. }))
        ));
    }

    #[test]
    fn test_media_kind_of() {
        assert_eq!(media_kind_of("a.JPG"), MediaKind::Image);
        assert_eq!(media_kind_of("clip.mov"), MediaKind::Video);
        assert_eq!(media_kind_of("notes.txt"), MediaKind::File);
        assert_eq!(media_kind_of("noext"), MediaKind::File);
    }

    #[tokio::test]
    async fn test_choose_file_respects_count_and_extension() {
        let dir = TempDir::new().unwrap();
        let a = write(&dir, "a.pdf", b"1");
        let b = write(&dir, "b.txt", b"22");
        let c = write(&dir, "c.pdf", b"333");
        let picker = PathPicker::new(vec![a.clone(), b, c.clone()]);

        let picked = picker.choose_file(&FileOptions::default()).await.unwrap();
        assert_eq!(picked.len(), 1);
        assert_eq!(picked[0].path, a);

        let options = FileOptions {
            count: Some(9),
            extension: vec!["pdf".to_string()],
        };
        let picked = picker.choose_file(&options).await.unwrap();
        assert_eq!(picked.len(), 2);
        assert_eq!(picked[1].path, c);
        assert_eq!(picked[1].size, 3);
    }

    #[tokio::test]
    async fn test_choose_media_filters_kinds() {
        let dir = TempDir::new().unwrap();
        let img = write(&dir, "a.png", b"x");
        let vid = write(&dir, "b.mp4", b"y");
        let doc = write(&dir, "c.pdf", b"z");
        let picker = PathPicker::new(vec![doc, vid, img]);

        let options = MediaOptions {
            count: Some(9),
            ..Default::default()
        };
        let picked = picker.choose_media(&options).await.unwrap();
        assert_eq!(picked.len(), 2);
        assert_eq!(picked[0].kind, MediaKind::Video);

        let options = MediaOptions {
            count: Some(9),
            media_type: vec![MediaKind::Image],
            ..Default::default()
        };
        let picked = picker.choose_media(&options).await.unwrap();
        assert_eq!(picked.len(), 1);
        assert_eq!(picked[0].name, "a.png");
    }

    #[tokio::test]
    async fn test_empty_picker_is_cancelled() {
        let picker = PathPicker::default();
        let result = picker.choose_file(&FileOptions::default()).await;
        assert!(matches!(
            result,
            Err(AppError::Upload(UploadError::PickerCancelled))
        ));
    }

    #[tokio::test]
    async fn test_missing_path_is_storage_error() {
        let dir = TempDir::new().unwrap();
        let picker = PathPicker::new(vec![dir.path().join("gone.png")]);
        let result = picker.choose_media(&MediaOptions::default()).await;
        assert!(matches!(result, Err(AppError::Storage(_))));
    }
}
