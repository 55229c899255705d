//! 国フィルタ
//!
//! `countries_tags` 列に対象国のタグ（"united-states" / "en:united-states"）を
//! 含む行だけを残す。

use crate::types::{fields, RawRecord};

/// 既定の対象国
pub const DEFAULT_COUNTRY: &str = "united-states";

/// 対象国で行を絞り込むフィルタ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryFilter {
    tag: String,
    namespaced_tag: String,
}

impl CountryFilter {
    pub fn new(country: &str) -> Self {
        let tag = country.trim().to_lowercase();
        let namespaced_tag = format!("en:{}", tag);
        Self { tag, namespaced_tag }
    }

    /// 対象国のタグ（小文字）
    pub fn country(&self) -> &str {
        &self.tag
    }

    /// 行が対象国の商品か判定
    pub fn matches(&self, record: &RawRecord) -> bool {
        self.matches_tags(record.get(fields::COUNTRIES_TAGS))
    }

    /// タグ文字列に対象国が含まれるか（大文字小文字は区別しない）
    pub fn matches_tags(&self, countries_tags: &str) -> bool {
        if self.tag.is_empty() {
            return false;
        }
        let tags = countries_tags.to_lowercase();
        tags.contains(&self.tag) || tags.contains(&self.namespaced_tag)
    }
}

impl Default for CountryFilter {
    fn default() -> Self {
        Self::new(DEFAULT_COUNTRY)
    }
}
