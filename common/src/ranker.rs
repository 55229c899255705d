//! スキャン数によるランキング
//!
//! 全候補を保持したうえで、スキャン数の降順に安定ソートして上位N件を取る。
//! 同スコア（特に0）の商品は入力順を保つ。

use crate::types::CatalogItem;

/// 既定の最大件数
pub const DEFAULT_LIMIT: usize = 5000;

/// (スコア, 商品) の蓄積
#[derive(Debug, Clone, Default)]
pub struct Ranker {
    entries: Vec<(i64, CatalogItem)>,
}

impl Ranker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, score: i64, item: CatalogItem) {
        self.entries.push((score, item));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// スコア降順で上位 `limit` 件を返す
    pub fn into_top(mut self, limit: usize) -> Vec<CatalogItem> {
        // sort_by は安定ソート
        self.entries.sort_by(|a, b| b.0.cmp(&a.0));
        self.entries
            .into_iter()
            .take(limit)
            .map(|(_, item)| item)
            .collect()
    }
}
