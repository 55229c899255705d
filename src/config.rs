use crate::error::{CatalogError, Result};
use essentials_catalog_common::{DEFAULT_COUNTRY, DEFAULT_LIMIT};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 既定の出力ファイル
pub const DEFAULT_OUTPUT: &str = "essentials_catalog.json";

/// 設定ファイルの内容
///
/// すべて省略可能。CLI引数 > 設定ファイル > 既定値 の順に優先する。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub output: Option<PathBuf>,
    pub limit: Option<usize>,
    pub country: Option<String>,
}

impl Config {
    /// 設定を読み込む
    ///
    /// `path` 指定時はそのファイル（なければエラー）、
    /// 未指定時は `~/.config/essentials-catalog/config.json`（なければ既定値）。
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(CatalogError::FileNotFound(path.display().to_string()));
                }
                Self::load_from(path)
            }
            None => match Self::config_path() {
                Ok(path) if path.exists() => Self::load_from(&path),
                Ok(_) => Ok(Self::default()),
                Err(e) => {
                    tracing::warn!("{}", e);
                    Ok(Self::default())
                }
            },
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            CatalogError::Config(format!("{}: {}", path.display(), e))
        })
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CatalogError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("essentials-catalog").join("config.json"))
    }

    pub fn output_or_default(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT))
    }

    pub fn limit_or_default(&self) -> usize {
        self.limit.unwrap_or(DEFAULT_LIMIT)
    }

    pub fn country_or_default(&self) -> String {
        self.country
            .clone()
            .unwrap_or_else(|| DEFAULT_COUNTRY.to_string())
    }
}
