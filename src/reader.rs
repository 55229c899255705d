//! 入力ファイル読み込み
//!
//! タブ区切り（先頭行がヘッダー）のエクスポートを1行ずつ `RawRecord` にする。
//! `.gz` は展開しながら読む。不正なUTF-8は置換文字に置き換える。

use crate::error::{CatalogError, Result};
use csv::{ByteRecord, Reader, ReaderBuilder};
use essentials_catalog_common::RawRecord;
use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;

/// gzip圧縮ファイルか（拡張子で判定）
pub fn is_gzip_path(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("gz"))
        .unwrap_or(false)
}

/// 入力ファイルを開く
///
/// 通常ファイル以外（FIFO、/dev/stdin、プロセス置換）も読める。
/// ディレクトリのみエラー。
pub fn open_input(path: &Path) -> Result<Box<dyn Read>> {
    if path.is_dir() {
        return Err(CatalogError::InvalidInput(format!(
            "ディレクトリは読み込めません: {}",
            path.display()
        )));
    }

    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => CatalogError::FileNotFound(path.display().to_string()),
        _ => CatalogError::Io(e),
    })?;
    if is_gzip_path(path) {
        Ok(Box::new(MultiGzDecoder::new(BufReader::new(file))))
    } else {
        Ok(Box::new(file))
    }
}

/// ファイルを開いてレコードのイテレータを返す
pub fn open_records(path: &Path) -> Result<TsvRecords<Box<dyn Read>>> {
    TsvRecords::new(open_input(path)?)
}

/// タブ区切りストリームのレコードイテレータ
pub struct TsvRecords<R: Read> {
    reader: Reader<R>,
    headers: Vec<String>,
    row: ByteRecord,
}

impl<R: Read> TsvRecords<R> {
    /// ヘッダー行を読み込んでイテレータを作成
    pub fn new(input: R) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(true)
            .flexible(true)
            .from_reader(input);

        let headers: Vec<String> = reader
            .byte_headers()?
            .iter()
            .map(|h| String::from_utf8_lossy(h).trim().to_string())
            .collect();

        if headers.iter().all(|h| h.is_empty()) {
            return Err(CatalogError::InvalidInput("ヘッダー行がありません".into()));
        }

        Ok(Self {
            reader,
            headers,
            row: ByteRecord::new(),
        })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    fn to_record(&self) -> RawRecord {
        // ヘッダーより列が多い行は余分な列を無視する
        self.headers
            .iter()
            .zip(self.row.iter())
            .map(|(name, value)| (name.as_str(), String::from_utf8_lossy(value).into_owned()))
            .collect()
    }
}

impl<R: Read> Iterator for TsvRecords<R> {
    type Item = Result<RawRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.read_byte_record(&mut self.row) {
            Ok(true) => Some(Ok(self.to_record())),
            Ok(false) => None,
            Err(e) => Some(Err(e.into())),
        }
    }
}
