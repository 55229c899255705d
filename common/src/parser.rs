//! 入力フィールドのパーサー
//!
//! OpenFoodFactsのエクスポートは値の揺れが大きいため、
//! どのパーサーも失敗せず既定値（0, 空リスト）に落とす。

use crate::types::MAX_INGREDIENTS;

/// 原材料の区切り文字（優先順）
const INGREDIENT_SEPARATORS: &[&str] = &[", ", "; ", " - "];

/// 栄養成分値をパース
///
/// 先頭のトークンだけを数値として読む（"10 g" → 10.0）。
/// 空・不正値・負数・非有限値は0.0。
///
/// # Examples
/// ```
/// use essentials_catalog_common::parse_nutrition_value;
///
/// assert_eq!(parse_nutrition_value("10 g"), 10.0);
/// assert_eq!(parse_nutrition_value("abc"), 0.0);
/// ```
pub fn parse_nutrition_value(value: &str) -> f64 {
    let Some(token) = value.split_whitespace().next() else {
        return 0.0;
    };

    match token.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => v,
        _ => 0.0,
    }
}

/// スキャン数（人気スコア）をパース
///
/// 空・不正値は0。
pub fn parse_scan_count(value: &str) -> i64 {
    value.trim().parse().unwrap_or(0)
}

/// 原材料テキストをリストに分解
///
/// 1. 区切り文字を優先順に探し、最初に見つかったもので分割
/// 2. 各要素をtrim・小文字化し、空要素は除外
/// 3. 分割できなければ全体を1要素とする
/// 4. 先頭20件まで
pub fn parse_ingredients(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let mut ingredients: Vec<String> = INGREDIENT_SEPARATORS
        .iter()
        .find(|sep| text.contains(**sep))
        .map(|sep| {
            text.split(*sep)
                .map(str::trim)
                .filter(|part| !part.is_empty())
                .map(str::to_lowercase)
                .collect()
        })
        .unwrap_or_default();

    if ingredients.is_empty() {
        ingredients.push(text.trim().to_lowercase());
    }

    ingredients.truncate(MAX_INGREDIENTS);
    ingredients
}
