//! File upload, document generation, and data export payloads.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::{Deserialize, Serialize};

/// Input for uploading a file to the backend.
///
/// The file content travels base64-encoded inside the GraphQL variables;
/// the content type is guessed from the file name when not set explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileUploadInput {
    /// Original file name.
    pub file_name: String,
    /// MIME content type.
    pub content_type: String,
    /// Base64-encoded file content.
    pub data: String,
}

impl FileUploadInput {
    /// Builds an upload input from raw bytes, guessing the content type
    /// from the file name.
    #[must_use]
    pub fn from_bytes(file_name: impl Into<String>, bytes: &[u8]) -> Self {
        let file_name = file_name.into();
        let content_type = mime_guess::from_path(&file_name)
            .first_or(mime::APPLICATION_OCTET_STREAM)
            .essence_str()
            .to_string();
        Self {
            content_type,
            data: BASE64.encode(bytes),
            file_name,
        }
    }

    /// Overrides the guessed content type.
    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }
}

/// Payload returned by the file upload mutation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileUploadPayload {
    /// Whether the upload succeeded.
    #[serde(default)]
    pub success: bool,
    /// Optional human-readable detail.
    #[serde(default)]
    pub message: Option<String>,
    /// Public URL of the stored file.
    #[serde(default)]
    pub file_url: Option<String>,
}

/// Payload returned by the document PDF generation mutation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentPdfPayload {
    /// Whether generation succeeded.
    #[serde(default)]
    pub success: bool,
    /// Optional human-readable detail.
    #[serde(default)]
    pub message: Option<String>,
    /// URL of the generated document.
    #[serde(default)]
    pub document_url: Option<String>,
}

/// Payload returned by the account data export mutation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDataPayload {
    /// Whether the export was scheduled.
    #[serde(default)]
    pub success: bool,
    /// Optional human-readable detail.
    #[serde(default)]
    pub message: Option<String>,
    /// URL the export can be downloaded from.
    #[serde(default)]
    pub download_url: Option<String>,
}
