//! Functional tests for the interactive console

use std::sync::Arc;
use tempfile::TempDir;

use hairstyle_studio::catalog::{Catalog, Gender};
use hairstyle_studio::console::{Command, Console};
use hairstyle_studio::i18n::Language;
use hairstyle_studio::payload::file::{FileHandler, RESULT_FILENAME};
use hairstyle_studio::studio::{Phase, Session};

use crate::support::FakeBackend;

fn console(backend: Arc<FakeBackend>, download_dir: &std::path::Path) -> Console<'static> {
    let session = Session::new(Catalog::builtin().unwrap(), Language::En, Gender::Female);
    Console::new(session, backend, FileHandler::new(download_dir))
}

#[tokio::test]
async fn test_full_session_script() {
    let dir = TempDir::new().unwrap();
    let photo = dir.path().join("me.jpg");
    std::fs::write(&photo, [0xFF, 0xD8, 0xFF, 0xE0, 0, 0x10, 0x4A, 0x46]).unwrap();

    let backend = Arc::new(FakeBackend::succeeding());
    let mut console = console(backend.clone(), dir.path());

    let script = format!(
        "generate\nupload {}\ngenerate\nselect u-buzz-cut\ngenerate\nsave\nquit\nstatus\n",
        photo.display()
    );
    let mut output = Vec::new();
    console.run(script.as_bytes(), &mut output).await.unwrap();
    let output = String::from_utf8(output).unwrap();

    assert!(output.contains("Please upload an image first."));
    assert!(output.contains("Please select a style first."));
    assert!(output.contains("Creating your new look"));
    assert!(output.contains(RESULT_FILENAME));
    assert_eq!(backend.calls(), 1);
    assert_eq!(
        std::fs::read(dir.path().join(RESULT_FILENAME)).unwrap(),
        b"EDITED"
    );
    assert!(matches!(console.session().phase(), Phase::Succeeded(_)));
}

#[tokio::test]
async fn test_localized_errors() {
    let dir = TempDir::new().unwrap();
    let backend = Arc::new(FakeBackend::succeeding());
    let mut console = console(backend.clone(), dir.path());

    console.execute(Command::Language(Language::Zh)).await;
    let text = console.execute(Command::Generate).await;

    assert_eq!(text, "请先上传一张照片。");
    assert_eq!(backend.calls(), 0);
}

#[tokio::test]
async fn test_non_image_upload_rejected() {
    let dir = TempDir::new().unwrap();
    let notes = dir.path().join("notes.txt");
    std::fs::write(&notes, "not a photo").unwrap();

    let backend = Arc::new(FakeBackend::succeeding());
    let mut console = console(backend, dir.path());

    let text = console.execute(Command::Upload(notes)).await;
    assert_eq!(text, "Please upload an image file.");
    assert!(console.session().upload().is_none());
}

#[tokio::test]
async fn test_hidden_style_and_empty_filters() {
    let dir = TempDir::new().unwrap();
    let backend = Arc::new(FakeBackend::succeeding());
    let mut console = console(backend, dir.path());

    // Male-only style while browsing female styles
    let text = console.execute(Command::Select("m-crew-cut".to_string())).await;
    assert_eq!(text, "Please select a style first.");

    console.execute("length long".parse().unwrap()).await;
    let text = console.execute("color silver".parse().unwrap()).await;
    assert!(text.contains("No styles match."));

    let text = console.execute(Command::ClearFilters).await;
    assert!(text.contains("f-classic-bob"));
}

#[tokio::test]
async fn test_save_without_result() {
    let dir = TempDir::new().unwrap();
    let backend = Arc::new(FakeBackend::succeeding());
    let mut console = console(backend, dir.path());

    let text = console.execute(Command::Save(None)).await;
    assert!(text.starts_with("Select a style and click Generate"));
    assert!(!dir.path().join(RESULT_FILENAME).exists());
}

#[tokio::test]
async fn test_bad_lines_reported() {
    let dir = TempDir::new().unwrap();
    let backend = Arc::new(FakeBackend::succeeding());
    let mut console = console(backend, dir.path());

    let mut output = Vec::new();
    console
        .run(&b"dance\ngender unisex\n"[..], &mut output)
        .await
        .unwrap();
    let output = String::from_utf8(output).unwrap();

    assert!(output.contains("unknown command 'dance'"));
    assert!(output.contains("gender must be female or male"));
}
