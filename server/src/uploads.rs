//! Upload storage: multipart file payloads land in the uploads directory
//! under a generated unique name and are served back at `/uploads/...`.
//!
//! File writes are not transactional with the database; the employee
//! endpoint compensates by removing every file written during a request
//! whose database work failed.

use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::warn;

use api::ApiError;

/// A file persisted for the current request.
#[derive(Debug, Clone)]
pub struct SavedUpload {
    pub field: String,
    pub filename: String,
    pub path: PathBuf,
}

impl SavedUpload {
    /// The relative path stored in the database and served statically.
    pub fn public_path(&self) -> String {
        format!("/uploads/{}", self.filename)
    }
}

/// `{field}-{millis}{original extension}`, e.g. `image-1714651234567.png`.
pub fn upload_filename(field: &str, original: &str, millis: i64) -> String {
    let ext = Path::new(original)
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();
    format!("{field}-{millis}{ext}")
}

/// Create the uploads directory if it does not exist.
pub async fn ensure_dir(dir: &Path) -> std::io::Result<()> {
    fs::create_dir_all(dir).await
}

/// Write one multipart file field to disk.
pub async fn save(
    dir: &Path,
    field: &str,
    original: &str,
    bytes: &[u8],
) -> Result<SavedUpload, ApiError> {
    let filename = upload_filename(field, original, chrono::Utc::now().timestamp_millis());
    let path = dir.join(&filename);
    fs::write(&path, bytes)
        .await
        .map_err(|e| ApiError::Internal(format!("failed to store upload: {e}")))?;
    Ok(SavedUpload {
        field: field.to_string(),
        filename,
        path,
    })
}

/// Best-effort removal of files written during a failed request.
pub async fn remove_all(uploads: &[SavedUpload]) {
    for upload in uploads {
        if let Err(e) = fs::remove_file(&upload.path).await {
            warn!(path = %upload.path.display(), error = %e, "failed to remove upload");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_keeps_field_and_extension() {
        assert_eq!(
            upload_filename("image", "avatar.png", 1714651234567),
            "image-1714651234567.png"
        );
        assert_eq!(
            upload_filename("video_file", "clip.final.mp4", 1),
            "video_file-1.mp4"
        );
        assert_eq!(upload_filename("image", "no_extension", 2), "image-2");
    }

    #[tokio::test]
    async fn save_then_remove_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let saved = save(dir.path(), "image", "a.png", b"bytes").await.unwrap();
        assert!(saved.path.exists());
        assert!(saved.public_path().starts_with("/uploads/image-"));
        assert!(saved.public_path().ends_with(".png"));

        remove_all(&[saved.clone()]).await;
        assert!(!saved.path.exists());
    }
}
