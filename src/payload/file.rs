//! File selection and download boundaries

use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};

use crate::error::{AppError, Result};
use crate::payload::ImagePayload;

/// Fixed filename for downloaded results
pub const RESULT_FILENAME: &str = "hairstyle-ai-result.jpg";

/// Handler for reading uploads and writing results
pub struct FileHandler {
    download_dir: PathBuf,
}

impl FileHandler {
    /// Create a new file handler
    pub fn new(download_dir: impl Into<PathBuf>) -> Self {
        Self {
            download_dir: download_dir.into(),
        }
    }

    /// Ensure the download directory exists
    pub async fn ensure_download_dir(&self) -> Result<()> {
        if !self.download_dir.exists() {
            fs::create_dir_all(&self.download_dir).await?;
            debug!(path = ?self.download_dir, "Created download directory");
        }
        Ok(())
    }

    /// Read a user-selected file into an embeddable payload.
    ///
    /// The file must declare an image media type (judged by its name). When
    /// the bytes are a recognizable image of another format, the sniffed type
    /// is what gets sent.
    pub async fn load_upload(&self, path: impl AsRef<Path>) -> Result<ImagePayload> {
        let path = path.as_ref();
        let declared = declared_media_type(path).ok_or_else(|| {
            warn!(path = ?path, "Rejected non-image upload");
            AppError::NotAnImage(path.display().to_string())
        })?;

        let data = fs::read(path).await?;
        let media_type = match sniff_media_type(&data) {
            Some(sniffed) if sniffed != declared => {
                debug!(path = ?path, declared = %declared, sniffed, "Extension disagrees with content");
                sniffed.to_string()
            }
            _ => declared,
        };

        debug!(path = ?path, size = data.len(), media_type = %media_type, "Loaded upload");
        Ok(ImagePayload::from_bytes(&data, &media_type))
    }

    /// Write a result to `<download_dir>/hairstyle-ai-result.jpg`
    pub async fn save_result(&self, payload: &ImagePayload) -> Result<PathBuf> {
        self.ensure_download_dir().await?;

        let image_data = payload.decode()?;
        let file_path = self.download_dir.join(RESULT_FILENAME);

        fs::write(&file_path, &image_data).await?;

        debug!(path = ?file_path, size = image_data.len(), "Saved result image");

        Ok(file_path)
    }
}

/// Media type a file declares through its name, if it is an image type
pub fn declared_media_type(path: &Path) -> Option<String> {
    mime_guess::from_path(path)
        .iter()
        .find(|m| m.type_() == mime_guess::mime::IMAGE)
        .map(|m| m.essence_str().to_string())
}

/// Image media type recognized from leading bytes
pub fn sniff_media_type(data: &[u8]) -> Option<&'static str> {
    let media_type = if data.starts_with(b"\x89PNG\r\n\x1a\n") {
        "image/png"
    } else if data.starts_with(b"\xff\xd8\xff") {
        "image/jpeg"
    } else if data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a") {
        "image/gif"
    } else if data.len() >= 12 && data.starts_with(b"RIFF") && &data[8..12] == b"WEBP" {
        "image/webp"
    } else if data.starts_with(b"BM") {
        "image/bmp"
    } else {
        return None;
    };
    Some(media_type)
}
