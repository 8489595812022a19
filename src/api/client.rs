use crate::api::models::{ApiEnvelope, SignUploadUrlRequest, SignUploadUrlResponse};
use crate::error::{ApiError, AppError, UploadError};
use crate::utils::error_helpers::*;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, RequestBuilder, Response};
use std::time::Duration;
use tracing::{debug, instrument};

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const SIGN_UPLOAD_URL_ENDPOINT: &str = "/system/file-management/sign-upload-url-suffix-size";
const USER_AGENT: &str = concat!("signed-upload/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct UploadClient {
    client: Client,
    pub base_url: String,
    pub token: Option<String>,
    timeout_secs: u64,
}

impl UploadClient {
    // Create baseClient with default settings
    pub fn new(base_url: String) -> Result<Self, ApiError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT_SECS)
    }

    pub fn with_timeout(base_url: String, timeout_secs: u64) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| convert_request_error(e, "client_init"))?;

        Ok(UploadClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
            timeout_secs,
        })
    }

    pub fn with_token(mut self, token: String) -> Self {
        self.token = Some(token);
        self
    }

    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }

    pub fn build_request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.request(method, url);

        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        request
    }

    fn map_send_error(&self, error: reqwest::Error, endpoint: &str) -> ApiError {
        if error.is_timeout() {
            convert_timeout_error(endpoint, self.timeout_secs)
        } else {
            convert_request_error(error, endpoint)
        }
    }

    pub async fn handle_response<T>(
        &self,
        response: Response,
        endpoint: &str,
    ) -> Result<T, ApiError>
    where
        T: serde::de::DeserializeOwned,
    {
        let status = response.status();

        if status.is_success() {
            response
                .json::<T>()
                .await
                .map_err(|e| convert_json_error(e, endpoint))
        } else {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            match status.as_u16() {
                401 | 403 => Err(ApiError::Unauthorized {
                    status: status.as_u16(),
                    endpoint: endpoint.to_string(),
                    server_message: error_text,
                }),
                408 | 504 => Err(convert_timeout_error(endpoint, self.timeout_secs)),
                _ => Err(ApiError::Http {
                    status: status.as_u16(),
                    endpoint: endpoint.to_string(),
                    message: error_text,
                }),
            }
        }
    }

    /// Ask the backend for a signed upload target
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    pub async fn sign_upload_url(
        &self,
        request: &SignUploadUrlRequest,
    ) -> Result<SignUploadUrlResponse, AppError> {
        let endpoint = SIGN_UPLOAD_URL_ENDPOINT;

        let response = self
            .build_request(Method::GET, endpoint)
            .query(request)
            .send()
            .await
            .map_err(|e| self.map_send_error(e, endpoint))?;

        let envelope: ApiEnvelope<SignUploadUrlResponse> =
            self.handle_response(response, endpoint).await?;

        match envelope.data {
            Some(target) => {
                debug!(file_path = %target.file_path, "received signed upload target");
                Ok(target)
            }
            None => {
                debug!(code = ?envelope.code, msg = ?envelope.msg, "signing response carried no data");
                Err(UploadError::MissingUploadTarget {
                    endpoint: endpoint.to_string(),
                }
                .into())
            }
        }
    }

    /// PUT raw bytes to a signed URL. The URL carries its own authorization,
    /// so no token header is attached.
    #[instrument(skip(self, bytes), fields(len = bytes.len()))]
    pub async fn put_object(
        &self,
        signed_url: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), ApiError> {
        let endpoint = "signed_upload_url";

        let response = self
            .client
            .put(signed_url)
            .header(CONTENT_TYPE, content_type)
            .body(bytes)
            .send()
            .await
            .map_err(|e| self.map_send_error(e, endpoint))?;

        let status = response.status();
        if status.is_success() {
            debug!(status = status.as_u16(), "object stored");
            return Ok(());
        }

        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        Err(ApiError::Http {
            status: status.as_u16(),
            endpoint: endpoint.to_string(),
            message,
        })
    }
}
