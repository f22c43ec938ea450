//! Functional tests for the upload and download boundaries

use tempfile::TempDir;

use hairstyle_studio::payload::file::{FileHandler, RESULT_FILENAME};
use hairstyle_studio::payload::ImagePayload;
use hairstyle_studio::AppError;

const PNG_BYTES: [u8; 12] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0];

#[tokio::test]
async fn test_load_image_upload() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("me.png");
    std::fs::write(&path, PNG_BYTES).unwrap();

    let handler = FileHandler::new(dir.path());
    let payload = handler.load_upload(&path).await.unwrap();

    assert_eq!(payload.media_type(), "image/png");
    assert_eq!(payload.decode().unwrap(), PNG_BYTES);
    assert!(payload.to_data_url().starts_with("data:image/png;base64,"));
}

#[tokio::test]
async fn test_content_overrides_misleading_extension() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("renamed.jpg");
    std::fs::write(&path, PNG_BYTES).unwrap();

    let handler = FileHandler::new(dir.path());
    let payload = handler.load_upload(&path).await.unwrap();
    assert_eq!(payload.media_type(), "image/png");
}

#[tokio::test]
async fn test_unrecognized_content_keeps_declared_type() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("photo.webp");
    std::fs::write(&path, b"not really an image").unwrap();

    let handler = FileHandler::new(dir.path());
    let payload = handler.load_upload(&path).await.unwrap();
    assert_eq!(payload.media_type(), "image/webp");
}

#[tokio::test]
async fn test_reject_non_image_upload() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, b"hello").unwrap();

    let handler = FileHandler::new(dir.path());
    assert!(matches!(
        handler.load_upload(&path).await,
        Err(AppError::NotAnImage(_))
    ));
}

#[tokio::test]
async fn test_missing_upload_is_io_error() {
    let dir = TempDir::new().unwrap();
    let handler = FileHandler::new(dir.path());
    assert!(matches!(
        handler.load_upload(dir.path().join("gone.jpg")).await,
        Err(AppError::Io(_))
    ));
}

#[tokio::test]
async fn test_save_result_uses_fixed_name() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("downloads");
    let handler = FileHandler::new(&target);

    let path = handler
        .save_result(&ImagePayload::generated("SGVsbG8="))
        .await
        .unwrap();

    assert_eq!(path, target.join(RESULT_FILENAME));
    assert_eq!(std::fs::read(&path).unwrap(), b"Hello");
}
