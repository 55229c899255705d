//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use essentials_catalog::error::CatalogError;
use essentials_catalog::pipeline::{self, PipelineOptions};
use essentials_catalog::reader;
use std::path::Path;
use tempfile::tempdir;

/// 存在しない入力ファイル
#[test]
fn test_missing_input_file() {
    let result = pipeline::run(Path::new("/nonexistent/products.csv"), &PipelineOptions::default());

    let err = result.unwrap_err();
    assert!(matches!(err, CatalogError::FileNotFound(_)));
}

/// ディレクトリを入力に指定した場合
#[test]
fn test_directory_as_input() {
    let dir = tempdir().expect("Failed to create temp dir");
    let result = reader::open_input(dir.path());

    assert!(matches!(result, Err(CatalogError::InvalidInput(_))));
}

/// 名前付きパイプ（FIFO）経由で読み込める
#[cfg(unix)]
#[test]
fn test_fifo_input() {
    use std::io::Write;

    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("in.tsv");
    let status = std::process::Command::new("mkfifo")
        .arg(&path)
        .status()
        .expect("mkfifo実行失敗");
    assert!(status.success());

    let writer_path = path.clone();
    let writer = std::thread::spawn(move || {
        // 読み込み側が開くまでブロックする
        let mut fifo = std::fs::OpenOptions::new()
            .write(true)
            .open(&writer_path)
            .expect("FIFOを開けない");
        fifo.write_all(
            b"code\tproduct_name\tcountries_tags\tenergy-kcal_100g\n\
              12345678\tPiped Soup\ten:united-states\t50\n",
        )
        .expect("FIFO書き込み失敗");
    });

    let (catalog, stats) = pipeline::run(&path, &PipelineOptions::default()).unwrap();
    writer.join().expect("書き込みスレッド失敗");

    assert_eq!(stats.rows_read, 1);
    assert_eq!(catalog.product_count, 1);
    assert_eq!(catalog.products[0].name, "Piped Soup");
}

/// 空の入力ファイル
#[test]
fn test_empty_input_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("empty.csv");
    std::fs::write(&path, "").unwrap();

    let result = pipeline::run(&path, &PipelineOptions::default());
    assert!(matches!(result, Err(CatalogError::InvalidInput(_))));
}

/// ヘッダーのみのファイルは空のカタログ
#[test]
fn test_header_only_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("header.csv");
    std::fs::write(&path, "code\tproduct_name\tcountries_tags\n").unwrap();

    let (catalog, stats) = pipeline::run(&path, &PipelineOptions::default()).unwrap();
    assert_eq!(catalog.product_count, 0);
    assert!(catalog.products.is_empty());
    assert_eq!(stats.rows_read, 0);
}

/// 壊れたgzipファイル
#[test]
fn test_corrupted_gzip() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("products.csv.gz");
    std::fs::write(&path, b"not a gzip stream").unwrap();

    assert!(pipeline::run(&path, &PipelineOptions::default()).is_err());
}

/// CatalogErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        CatalogError::Config("テスト設定エラー".to_string()),
        CatalogError::FileNotFound("products.csv".to_string()),
        CatalogError::InvalidInput("ヘッダー行がありません".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: CatalogError = io_err.into();

    assert!(matches!(err, CatalogError::Io(_)));
    assert!(format!("{}", err).contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: CatalogError = json_err.into();

    assert!(matches!(err, CatalogError::JsonParse(_)));
}

/// common::Errorからの変換（透過的エラー）
#[test]
fn test_common_error_transparent() {
    let common_err =
        essentials_catalog_common::Error::InvalidCatalog("productCount 1 != 0 products".to_string());
    let err: CatalogError = common_err.into();

    assert!(matches!(err, CatalogError::Common(_)));
    assert!(format!("{}", err).contains("productCount 1 != 0 products"));
}
