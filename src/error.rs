use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("CliError: {0}")]
    Cli(#[from] CliError),
    #[error("ApiError: {0}")]
    Api(#[from] ApiError),
    #[error("ConfigError: {0}")]
    Config(#[from] ConfigError),
    #[error("StorageError: {0}")]
    Storage(#[from] StorageError),
    #[error("UploadError: {0}")]
    Upload(#[from] UploadError),
    #[error("UtilsError: {0}")]
    Utils(#[from] UtilsError),
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
    #[error("Upload endpoint is not configured")]
    UrlNotConfigured { hint: String },
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64, endpoint: String },
    #[error("HTTP error: {status} {message}")]
    Http {
        status: u16,
        endpoint: String,
        message: String,
    },
    #[error("Authentication failed")]
    Unauthorized {
        status: u16,
        endpoint: String,
        server_message: String,
    },
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("File I/O error at {path}: {source}")]
    FileIo {
        path: String,
        source: std::io::Error,
    },
    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },
    #[error("Configuration directory not found")]
    ConfigDirNotFound,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration value for '{field}': {value}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Error, Debug)]
pub enum UploadError {
    #[error("File '{name}' rejected: {reason}")]
    Rejected { name: String, reason: String },
    #[error("Upload target missing in response from {endpoint}")]
    MissingUploadTarget { endpoint: String },
    #[error("File selection was cancelled")]
    PickerCancelled,
    #[error("No files were selected")]
    NoFilesSelected,
    #[error("Could not read image info for {path}: {reason}")]
    ImageProbe { path: String, reason: String },
}

#[derive(Error, Debug)]
pub enum UtilsError {
    #[error("Validation error: {message}")]
    Validation { message: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ErrorSeverity {
    Critical,
    High,
    Medium,
    Low,
}

impl ErrorSeverity {
    pub fn emoji(&self) -> &'static str {
        match self {
            ErrorSeverity::Critical => "🚨",
            ErrorSeverity::High => "❌",
            ErrorSeverity::Medium => "⚠️",
            ErrorSeverity::Low => "ℹ️",
        }
    }
}

impl AppError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AppError::Cli(_) => ErrorSeverity::Medium,
            AppError::Api(api_error) => match api_error {
                ApiError::Unauthorized { .. } => ErrorSeverity::High,
                ApiError::Timeout { .. } => ErrorSeverity::Medium,
                ApiError::Http { status, .. } if *status >= 500 => ErrorSeverity::High,
                _ => ErrorSeverity::Medium,
            },
            AppError::Config(_) => ErrorSeverity::High,
            AppError::Storage(_) => ErrorSeverity::Medium,
            AppError::Upload(upload_error) => match upload_error {
                UploadError::MissingUploadTarget { .. } => ErrorSeverity::High,
                UploadError::PickerCancelled | UploadError::NoFilesSelected => ErrorSeverity::Low,
                _ => ErrorSeverity::Medium,
            },
            AppError::Utils(_) => ErrorSeverity::Low,
        }
    }

    pub fn display_friendly(&self) -> String {
        match self {
            AppError::Upload(UploadError::MissingUploadTarget { .. }) => {
                "Upload failed: the server did not return an upload target".to_string()
            }
            AppError::Upload(UploadError::Rejected { name, reason }) => {
                format!("{} was not uploaded: {}", name, reason)
            }
            AppError::Cli(CliError::UrlNotConfigured { .. }) => {
                "Upload endpoint is not configured".to_string()
            }
            _ => format!("{}", self),
        }
    }

    pub fn troubleshooting_hint(&self) -> Option<String> {
        match self {
            AppError::Cli(CliError::UrlNotConfigured { hint }) => Some(hint.clone()),
            AppError::Api(ApiError::Unauthorized { .. }) => {
                Some("Check SIGNED_UPLOAD_TOKEN or pass --token".to_string())
            }
            AppError::Api(ApiError::Timeout { .. }) => {
                Some("Check your internet connection and try again".to_string())
            }
            AppError::Upload(UploadError::MissingUploadTarget { .. }) => Some(
                "Verify that the upload type is accepted by the server (--type)".to_string(),
            ),
            AppError::Storage(StorageError::ConfigParseError { .. }) => {
                Some("Fix or remove ~/.config/signed-upload/config.toml".to_string())
            }
            _ => None,
        }
    }
}
