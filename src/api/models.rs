use serde::{Deserialize, Serialize};

/// Query parameters of the signing endpoint
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct SignUploadUrlRequest {
    pub suffix: String,
    #[serde(rename = "type")]
    pub upload_type: String,
    /// Size in megabytes, rounded to 3 decimals
    pub size: f64,
}

/// Backend response wrapper: `{ code, msg, data }`
#[derive(Debug, Deserialize, Clone)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub msg: Option<String>,
    pub data: Option<T>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SignUploadUrlResponse {
    pub sign_upload_url: String,
    pub file_path: String,
    pub file_name: String,
    #[serde(rename = "type")]
    pub file_type: String,
}

/// Outcome of one successful upload
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UploadedFile {
    pub file_name: String,
    pub file_path: String,
    pub file_type: String,
    /// Local source of the upload, set by picker-driven flows
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl From<SignUploadUrlResponse> for UploadedFile {
    fn from(target: SignUploadUrlResponse) -> Self {
        UploadedFile {
            file_name: target.file_name,
            file_path: target.file_path,
            file_type: target.file_type,
            url: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_with_data() {
        let json = r#"{
            "code": 200,
            "msg": "ok",
            "data": {
                "signUploadUrl": "https://bucket.example.test/a.png?sig=1",
                "filePath": "uploads/a.png",
                "fileName": "a.png",
                "type": "avatar"
            }
        }"#;
        let envelope: ApiEnvelope<SignUploadUrlResponse> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.code, Some(200));
        let data = envelope.data.unwrap();
        assert_eq!(data.sign_upload_url, "https://bucket.example.test/a.png?sig=1");
        assert_eq!(data.file_type, "avatar");
    }

    #[test]
    fn test_envelope_without_data() {
        // Null and missing data both deserialize to None
        let json = r#"{ "code": 500, "msg": "denied", "data": null }"#;
        let envelope: ApiEnvelope<SignUploadUrlResponse> = serde_json::from_str(json).unwrap();
        assert!(envelope.data.is_none());

        let envelope: ApiEnvelope<SignUploadUrlResponse> = serde_json::from_str("{}").unwrap();
        assert!(envelope.data.is_none());
        assert!(envelope.msg.is_none());
    }

    #[test]
    fn test_request_serialization_renames_type() {
        let request = SignUploadUrlRequest {
            suffix: "png".to_string(),
            upload_type: "avatar".to_string(),
            size: 0.5,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["type"], "avatar");
        assert_eq!(json["suffix"], "png");
    }

    #[test]
    fn test_uploaded_file_from_target() {
        let target = SignUploadUrlResponse {
            sign_upload_url: "https://x".to_string(),
            file_path: "p/a.pdf".to_string(),
            file_name: "a.pdf".to_string(),
            file_type: "doc".to_string(),
        };
        let uploaded = UploadedFile::from(target);
        assert_eq!(uploaded.file_name, "a.pdf");
        assert_eq!(uploaded.file_path, "p/a.pdf");
        assert!(uploaded.url.is_none());

        let json = serde_json::to_string(&uploaded).unwrap();
        assert!(json.contains("\"fileType\":\"doc\""));
        assert!(!json.contains("url"));
    }
}
