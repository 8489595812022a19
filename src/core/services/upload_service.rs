use super::types::{FileCandidate, FileOptions, MediaKind, MediaOptions, PickedFile};
use crate::AppError;
use crate::api::client::UploadClient;
use crate::api::models::{SignUploadUrlRequest, UploadedFile};
use crate::core::content_type::{content_type_for, suffix_of};
use crate::core::host::{FilePicker, ImageProbe, MagicBytesProbe, Notifier};
use crate::error::UploadError;
use crate::utils::data::size_in_mb;
use crate::utils::error_helpers::convert_file_error;
use std::path::Path;
use tracing::{debug, info, instrument, warn};

pub const DEFAULT_MAX_SIZE_MB: f64 = 15.0;

pub const MSG_UPLOAD_FAILED: &str = "Upload failed";
pub const MSG_UPLOAD_SUCCEEDED: &str = "Upload succeeded";
pub const MSG_UPLOADING: &str = "Uploading..";

/// Signed-URL upload flow: check, sign, PUT, report
pub struct UploadService {
    client: UploadClient,
    upload_type: String,
    notifier: Box<dyn Notifier>,
    picker: Box<dyn FilePicker>,
    probe: Box<dyn ImageProbe>,
}

impl UploadService {
    /// Create new UploadService for one upload type (the backend's storage category)
    pub fn new(
        client: UploadClient,
        upload_type: impl Into<String>,
        notifier: impl Notifier + 'static,
        picker: impl FilePicker + 'static,
    ) -> Self {
        Self {
            client,
            upload_type: upload_type.into(),
            notifier: Box::new(notifier),
            picker: Box::new(picker),
            probe: Box::new(MagicBytesProbe),
        }
    }

    pub fn with_picker(mut self, picker: impl FilePicker + 'static) -> Self {
        self.picker = Box::new(picker);
        self
    }

    pub fn with_probe(mut self, probe: impl ImageProbe + 'static) -> Self {
        self.probe = Box::new(probe);
        self
    }

    /// Client-side size and format gate. Shows a notice and returns false
    /// when the file is too large or its extension is not in `accept`.
    pub fn before_upload(&self, file: &FileCandidate, accept: &[String], max_size_mb: f64) -> bool {
        let size = size_in_mb(file.size);
        if size > max_size_mb {
            self.notifier
                .toast(&format!("File must not be larger than {}M", max_size_mb));
            debug!(name = %file.name, size, max_size_mb, "file rejected: too large");
            return false;
        }

        let suffix = suffix_of(&file.name).unwrap_or(file.name.as_str());
        let accepted = accept.iter().any(|ext| ext == suffix);
        if !accepted {
            self.notifier.toast(&format!(
                "File format must be one of {}",
                accept.join(",")
            ));
            debug!(name = %file.name, suffix, "file rejected: format");
        }
        accepted
    }

    /// Request a signed target, PUT the bytes, and return where the file landed
    #[instrument(skip(self, bytes), fields(upload_type = %self.upload_type, len = bytes.len()))]
    pub async fn upload(&self, bytes: Vec<u8>, suffix: &str) -> Result<UploadedFile, AppError> {
        let request = SignUploadUrlRequest {
            suffix: suffix.to_string(),
            upload_type: self.upload_type.clone(),
            size: size_in_mb(bytes.len() as u64),
        };

        let result = self.sign_and_put(&request, bytes).await;
        if let Err(e) = &result {
            warn!(error = %e, "upload failed");
            self.notifier.toast(MSG_UPLOAD_FAILED);
        }
        result
    }

    async fn sign_and_put(
        &self,
        request: &SignUploadUrlRequest,
        bytes: Vec<u8>,
    ) -> Result<UploadedFile, AppError> {
        let target = self.client.sign_upload_url(request).await?;
        self.client
            .put_object(
                &target.sign_upload_url,
                bytes,
                &content_type_for(&request.suffix),
            )
            .await?;

        info!(file_path = %target.file_path, "file uploaded");
        Ok(UploadedFile::from(target))
    }

    /// Upload a local image, using its detected format as the suffix
    pub async fn image_upload(&self, path: &Path) -> Result<UploadedFile, AppError> {
        let result = self.image_upload_inner(path).await;
        self.notifier.hide_loading();
        result
    }

    async fn image_upload_inner(&self, path: &Path) -> Result<UploadedFile, AppError> {
        let bytes = match tokio::fs::read(path).await {
            Ok(bytes) => bytes,
            Err(e) => {
                self.notifier.toast(MSG_UPLOAD_FAILED);
                return Err(convert_file_error(e, path).into());
            }
        };

        let image_type = match self.probe.image_type(path, &bytes).await {
            Ok(image_type) => image_type,
            Err(e) => {
                self.notifier.toast(MSG_UPLOAD_FAILED);
                return Err(e);
            }
        };

        let mut uploaded = self.upload(bytes, &image_type).await?;
        uploaded.url = Some(path.to_string_lossy().to_string());
        self.notifier.toast(MSG_UPLOAD_SUCCEEDED);
        Ok(uploaded)
    }

    /// Pick media and upload every picked image; other media kinds are skipped
    pub async fn media_upload(&self, options: &MediaOptions) -> Result<Vec<UploadedFile>, AppError> {
        let picked = match self.picker.choose_media(options).await {
            Ok(picked) => picked,
            Err(e) => {
                self.notifier.hide_loading();
                return Err(e);
            }
        };

        let mut results = Vec::new();
        for file in &picked {
            if file.kind != MediaKind::Image {
                debug!(name = %file.name, kind = ?file.kind, "skipping non-image media");
                continue;
            }
            results.push(self.image_upload(&file.path).await);
        }
        settle(results)
    }

    /// Pick documents and upload each one with the suffix taken from its name
    pub async fn file_upload(&self, options: &FileOptions) -> Result<Vec<UploadedFile>, AppError> {
        self.notifier.show_loading(MSG_UPLOADING);

        let picked = match self.picker.choose_file(options).await {
            Ok(picked) => picked,
            Err(e) => {
                self.notifier.hide_loading();
                return Err(e);
            }
        };

        let mut results = Vec::with_capacity(picked.len());
        for file in &picked {
            results.push(self.upload_picked_file(file).await);
        }
        self.notifier.hide_loading();
        settle(results)
    }

    async fn upload_picked_file(&self, file: &PickedFile) -> Result<UploadedFile, AppError> {
        let bytes = tokio::fs::read(&file.path).await.map_err(|e| {
            self.notifier.toast(MSG_UPLOAD_FAILED);
            convert_file_error(e, &file.path)
        })?;
        let suffix = suffix_of(&file.name).unwrap_or(file.name.as_str());

        let mut uploaded = self.upload(bytes, suffix).await?;
        uploaded.url = Some(file.path.to_string_lossy().to_string());
        self.notifier.toast(MSG_UPLOAD_SUCCEEDED);
        Ok(uploaded)
    }
}

/// Successful uploads, or the first error when nothing succeeded.
/// Individual failures have already been reported to the user.
fn settle(results: Vec<Result<UploadedFile, AppError>>) -> Result<Vec<UploadedFile>, AppError> {
    if results.is_empty() {
        return Err(UploadError::NoFilesSelected.into());
    }

    let mut uploaded = Vec::new();
    let mut first_error = None;
    for result in results {
        match result {
            Ok(file) => uploaded.push(file),
            Err(e) if first_error.is_none() => first_error = Some(e),
            Err(e) => warn!(error = %e, "additional upload failure"),
        }
    }

    match first_error {
        Some(e) if uploaded.is_empty() => Err(e),
        Some(e) => {
            warn!(error = %e, succeeded = uploaded.len(), "some uploads failed");
            Ok(uploaded)
        }
        None => Ok(uploaded),
    }
}
