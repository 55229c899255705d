//! カタログ生成パイプライン
//!
//! ## 処理フロー
//! 1. 国フィルタ（対象国以外の行を除外）
//! 2. 行の正規化（不正な行を除外）
//! 3. スキャン数でランキング・上位N件に切り詰め
//! 4. カタログ組み立て

use crate::error::Result;
use crate::reader;
use crate::writer;
use essentials_catalog_common::{
    fields, normalize_record, parse_scan_count, Catalog, CountryFilter, RawRecord, Ranker,
    Rejection, DEFAULT_COUNTRY, DEFAULT_LIMIT,
};
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

/// スピナー更新間隔（行数）
const PROGRESS_INTERVAL: u64 = 10_000;

/// パイプライン設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineOptions {
    /// 対象国タグ
    pub country: String,
    /// 最大商品数
    pub limit: usize,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            country: DEFAULT_COUNTRY.to_string(),
            limit: DEFAULT_LIMIT,
        }
    }
}

/// 処理件数の統計
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineStats {
    /// 読み込んだ行数
    pub rows_read: usize,
    /// 対象国以外で除外した行数
    pub not_in_country: usize,
    /// 正規化で除外した行数
    pub rejected: usize,
    /// 除外理由ごとの件数
    pub rejections: BTreeMap<Rejection, usize>,
    /// 正規化に成功した行数
    pub accepted: usize,
    /// カタログに含めた件数
    pub selected: usize,
}

impl PipelineStats {
    /// 除外した行の合計
    pub fn skipped(&self) -> usize {
        self.not_in_country + self.rejected
    }

    fn record_rejection(&mut self, rejection: Rejection) {
        self.rejected += 1;
        *self.rejections.entry(rejection).or_insert(0) += 1;
    }
}

/// レコード列からカタログを組み立てる
///
/// # Arguments
/// * `records` - 入力レコード（読み込みエラーがあれば中断）
/// * `options` - 対象国・最大件数
/// * `generated_at` - 生成日時（全行の読み込み後に呼ぶ）
pub fn build_catalog<I, T>(
    records: I,
    options: &PipelineOptions,
    generated_at: T,
) -> Result<(Catalog, PipelineStats)>
where
    I: IntoIterator<Item = Result<RawRecord>>,
    T: FnOnce() -> String,
{
    let filter = CountryFilter::new(&options.country);
    let mut ranker = Ranker::new();
    let mut stats = PipelineStats::default();

    for record in records {
        let record = record?;
        stats.rows_read += 1;

        if !filter.matches(&record) {
            stats.not_in_country += 1;
            continue;
        }

        match normalize_record(&record) {
            Ok(item) => {
                let score = parse_scan_count(record.get(fields::UNIQUE_SCANS));
                ranker.push(score, item);
            }
            Err(rejection) => {
                debug!(
                    row = stats.rows_read,
                    code = record.get(fields::CODE),
                    reason = %rejection,
                    "row skipped"
                );
                stats.record_rejection(rejection);
            }
        }
    }

    stats.accepted = ranker.len();
    info!(
        rows = stats.rows_read,
        accepted = stats.accepted,
        not_in_country = stats.not_in_country,
        rejected = stats.rejected,
        "rows processed"
    );

    let products = ranker.into_top(options.limit);
    stats.selected = products.len();

    Ok((Catalog::new(products, generated_at()), stats))
}

/// 入力ファイルを読み込んでカタログを生成する
pub fn run(input: &Path, options: &PipelineOptions) -> Result<(Catalog, PipelineStats)> {
    let records = reader::open_records(input)?;
    info!(path = %input.display(), columns = records.headers().len(), "input opened");

    let progress = ProgressBar::new_spinner();
    progress.set_style(
        ProgressStyle::with_template("{spinner} {msg}").unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    progress.enable_steady_tick(Duration::from_millis(120));

    let mut rows: u64 = 0;
    let records = records.inspect(|_| {
        rows += 1;
        if rows % PROGRESS_INTERVAL == 0 {
            progress.set_message(format!("{}行 読み込み済み", rows));
        }
    });

    let result = build_catalog(records, options, writer::generated_at_now);
    progress.finish_and_clear();
    result
}
