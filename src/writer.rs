//! カタログJSONの書き出し・読み戻し

use crate::error::Result;
use chrono::{DateTime, SecondsFormat, Utc};
use essentials_catalog_common::Catalog;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// 生成日時の文字列（ISO-8601, UTC, マイクロ秒, "+00:00"）
pub fn format_generated_at(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, false)
}

/// 現在時刻の生成日時文字列
pub fn generated_at_now() -> String {
    format_generated_at(Utc::now())
}

/// カタログをJSONで書き出す
///
/// インデント2スペース、非ASCII文字はエスケープしない。
///
/// # Returns
/// 書き出したファイルのサイズ（バイト）
pub fn write_catalog(catalog: &Catalog, path: &Path) -> Result<u64> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, catalog)?;
    writer.flush()?;

    Ok(std::fs::metadata(path)?.len())
}

/// カタログJSONを読み込んで検証する
pub fn read_catalog(path: &Path) -> Result<Catalog> {
    let file = File::open(path)?;
    let catalog: Catalog = serde_json::from_reader(BufReader::new(file))?;
    catalog.validate()?;
    Ok(catalog)
}
