use crate::config::Config;
use crate::pipeline::PipelineOptions;
use clap::Parser;
use std::path::PathBuf;

/// --verbose 指定時のログフィルタ
pub const VERBOSE_LOG_FILTER: &str = "essentials_catalog=debug";

/// 既定のログフィルタ
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Parser, Debug)]
#[command(name = "essentials-catalog")]
#[command(about = "OpenFoodFactsのエクスポートから人気商品カタログJSONを生成", long_about = None)]
pub struct Cli {
    /// OpenFoodFactsのTSVファイル（.gz可）
    #[arg(required = true)]
    pub input: PathBuf,

    /// 出力JSONファイル（デフォルト: essentials_catalog.json）
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// 最大商品数（デフォルト: 5000）
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// 対象国タグ（デフォルト: united-states）
    #[arg(short, long)]
    pub country: Option<String>,

    /// 設定ファイル（省略時は ~/.config/essentials-catalog/config.json）
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// 詳細ログを出力
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// CLI引数と設定ファイルから出力先を決定
    pub fn resolve_output(&self, config: &Config) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| config.output_or_default())
    }

    /// ログフィルタの指定を決定
    ///
    /// `--verbose` > `RUST_LOG` > "warn" の順に優先する。
    pub fn log_filter(&self, rust_log: Option<&str>) -> String {
        if self.verbose {
            return VERBOSE_LOG_FILTER.to_string();
        }
        rust_log
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .unwrap_or(DEFAULT_LOG_FILTER)
            .to_string()
    }

    /// CLI引数と設定ファイルからパイプライン設定を決定
    pub fn resolve_options(&self, config: &Config) -> PipelineOptions {
        PipelineOptions {
            country: self
                .country
                .clone()
                .unwrap_or_else(|| config.country_or_default()),
            limit: self.limit.unwrap_or_else(|| config.limit_or_default()),
        }
    }
}
