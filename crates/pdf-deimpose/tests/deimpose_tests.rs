use pdf_deimpose::{DeimposeError, DeimposeOptions, process_folder};
use std::path::PathBuf;

#[tokio::test]
async fn test_missing_folder_is_fatal() {
    let result = process_folder(
        PathBuf::from("no-such-folder"),
        &DeimposeOptions::default(),
    )
    .await;

    match result {
        Err(DeimposeError::FolderNotFound(path)) => {
            assert_eq!(path, PathBuf::from("no-such-folder"));
        }
        other => panic!("expected FolderNotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_empty_folder_is_a_no_op() {
    let dir = tempfile::tempdir().unwrap();

    let summary = process_folder(dir.path(), &DeimposeOptions::default())
        .await
        .unwrap();

    assert_eq!(summary.documents_found, 0);
    assert!(summary.generated.is_empty());
    assert!(summary.failed.is_empty());
}

#[tokio::test]
async fn test_non_pdf_files_are_ignored() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("notes.txt"), b"not a pdf").unwrap();
    std::fs::create_dir(dir.path().join("nested.pdf")).unwrap();

    let summary = process_folder(dir.path(), &DeimposeOptions::default())
        .await
        .unwrap();

    assert_eq!(summary.documents_found, 0);
}

#[tokio::test]
async fn test_outputs_from_an_earlier_run_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("book-processed.pdf"), b"%PDF-1.4").unwrap();

    let summary = process_folder(dir.path(), &DeimposeOptions::default())
        .await
        .unwrap();

    assert_eq!(summary.documents_found, 0);
}

#[tokio::test]
async fn test_unreadable_document_is_contained() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("bad.pdf"), b"this is not a pdf").unwrap();

    let summary = process_folder(dir.path(), &DeimposeOptions::default())
        .await
        .unwrap();

    assert_eq!(summary.documents_found, 1);
    assert!(summary.generated.is_empty());
    assert_eq!(summary.failed.len(), 1);
    assert!(summary.failed[0].input.ends_with("bad.pdf"));
    assert!(!dir.path().join("bad-processed.pdf").exists());
}

#[tokio::test]
async fn test_invalid_options_abort_before_any_work() {
    let dir = tempfile::tempdir().unwrap();
    let options = DeimposeOptions {
        render_scale: -1.0,
        ..Default::default()
    };

    match process_folder(dir.path(), &options).await {
        Err(DeimposeError::Config(_)) => {}
        other => panic!("expected Config error, got {other:?}"),
    }
}
