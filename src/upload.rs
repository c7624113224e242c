/**
 * Image Upload
 * Pre-flight validation plus the Cloudinary unsigned-upload client. A failed
 * upload aborts the create/update that depended on it; there is no retry.
 */
use async_trait::async_trait;
use serde::Deserialize;

use crate::config::AdminConfig;

const MAX_FILE_SIZE: usize = 5 * 1024 * 1024; // 5MB
const ALLOWED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif"];

/// An image picked in the admin UI, not yet hosted anywhere.
#[derive(Debug, Clone)]
pub struct ImageFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Upload failure with a human-readable message, surfaced to the user
/// distinctly from generic save failures.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct UploadError(pub String);

fn validate_image_magic_bytes(bytes: &[u8]) -> Option<&'static str> {
    if bytes.len() < 4 {
        return None;
    }
    match bytes {
        // JPEG: FF D8 FF
        [0xFF, 0xD8, 0xFF, ..] => Some("image/jpeg"),
        // PNG: 89 50 4E 47
        [0x89, 0x50, 0x4E, 0x47, ..] => Some("image/png"),
        // GIF: 47 49 46 38
        [0x47, 0x49, 0x46, 0x38, ..] => Some("image/gif"),
        // WebP: 52 49 46 46 ... 57 45 42 50
        [0x52, 0x49, 0x46, 0x46, _, _, _, _, 0x57, 0x45, 0x42, 0x50, ..] => Some("image/webp"),
        _ => None,
    }
}

/// Reject a file before any network call: wrong extension, oversized, empty,
/// or content that does not match an allowed image type.
pub fn validate_image(file: &ImageFile) -> Result<&'static str, UploadError> {
    let ext = file
        .filename
        .rsplit('.')
        .next()
        .unwrap_or("")
        .to_lowercase();
    if !ALLOWED_EXTENSIONS.contains(&ext.as_str()) {
        return Err(UploadError(
            "Unsupported file type. Allowed: JPEG, PNG, WebP, GIF.".to_string(),
        ));
    }
    if file.bytes.is_empty() {
        return Err(UploadError("Empty file".to_string()));
    }
    if file.bytes.len() > MAX_FILE_SIZE {
        return Err(UploadError(
            "File too large. Maximum size is 5MB.".to_string(),
        ));
    }
    validate_image_magic_bytes(&file.bytes).ok_or_else(|| {
        UploadError("File content does not match an allowed image type.".to_string())
    })
}

/// Image host collaborator: takes a file, returns a stable URL or fails.
#[async_trait]
pub trait ImageUploader: Send + Sync {
    async fn upload(&self, file: &ImageFile) -> Result<String, UploadError>;
}

// ============================================================================
// Cloudinary
// ============================================================================

#[derive(Debug, Deserialize)]
struct CloudinaryResponse {
    secure_url: Option<String>,
    error: Option<CloudinaryError>,
}

#[derive(Debug, Deserialize)]
struct CloudinaryError {
    message: String,
}

/// Unsigned-preset upload to Cloudinary's image endpoint.
pub struct CloudinaryUploader {
    client: reqwest::Client,
    upload_url: String,
    upload_preset: String,
}

impl CloudinaryUploader {
    pub fn new(config: &AdminConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            upload_url: format!(
                "https://api.cloudinary.com/v1_1/{}/image/upload",
                config.cloudinary_cloud_name
            ),
            upload_preset: config.cloudinary_upload_preset.clone(),
        }
    }
}

#[async_trait]
impl ImageUploader for CloudinaryUploader {
    async fn upload(&self, file: &ImageFile) -> Result<String, UploadError> {
        let mime = validate_image(file)?;

        let part = reqwest::multipart::Part::bytes(file.bytes.clone())
            .file_name(file.filename.clone())
            .mime_str(mime)
            .map_err(|e| UploadError(format!("Cloudinary upload failed: {}", e)))?;
        let form = reqwest::multipart::Form::new()
            .part("file", part)
            .text("upload_preset", self.upload_preset.clone());

        let res = self
            .client
            .post(&self.upload_url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| UploadError(format!("Cloudinary upload failed: {}", e)))?;

        if !res.status().is_success() {
            return Err(UploadError(format!(
                "Cloudinary upload failed: HTTP error! status: {}",
                res.status().as_u16()
            )));
        }

        let body: CloudinaryResponse = res
            .json()
            .await
            .map_err(|e| UploadError(format!("Cloudinary upload failed: {}", e)))?;

        match body.secure_url {
            Some(url) => {
                tracing::info!("Image uploaded: {} ({} bytes)", file.filename, file.bytes.len());
                Ok(url)
            }
            None => Err(UploadError(
                body.error
                    .map(|e| e.message)
                    .unwrap_or_else(|| "Image upload failed".to_string()),
            )),
        }
    }
}
