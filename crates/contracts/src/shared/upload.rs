use serde::{Deserialize, Serialize};

/// Result of uploading one file through the backend's storage proxy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadedFile {
    /// Public URL of the stored asset.
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_id: Option<String>,
}
