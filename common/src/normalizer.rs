//! 行の正規化
//!
//! 国フィルタを通過した行を `CatalogItem` に変換する。
//! バーコード・商品名・主要栄養成分が揃わない行は `Rejection` を返す。

use crate::parser::{parse_ingredients, parse_nutrition_value};
use crate::types::{
    fields, CatalogItem, Nutrition, RawRecord, FALLBACK_CATEGORY, MIN_BARCODE_LEN,
};

/// ナトリウムの単位変換（mg → g）
const MG_PER_G: f64 = 1000.0;

/// 行を除外した理由
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rejection {
    /// バーコードなし
    MissingBarcode,
    /// バーコードが8文字未満
    ShortBarcode,
    /// 商品名なし
    MissingName,
    /// カロリー・タンパク質・炭水化物がすべて0
    NoNutrition,
}

impl Rejection {
    pub const ALL: [Rejection; 4] = [
        Rejection::MissingBarcode,
        Rejection::ShortBarcode,
        Rejection::MissingName,
        Rejection::NoNutrition,
    ];
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rejection::MissingBarcode => write!(f, "missing barcode"),
            Rejection::ShortBarcode => write!(f, "barcode shorter than {}", MIN_BARCODE_LEN),
            Rejection::MissingName => write!(f, "missing name"),
            Rejection::NoNutrition => write!(f, "no nutrition data"),
        }
    }
}

/// 行を商品に変換する
///
/// # Returns
/// * `Ok(CatalogItem)` - 正規化済みの商品
/// * `Err(Rejection)` - 除外理由
pub fn normalize_record(record: &RawRecord) -> Result<CatalogItem, Rejection> {
    let barcode = record.get(fields::CODE).trim();
    if barcode.is_empty() {
        return Err(Rejection::MissingBarcode);
    }
    if barcode.chars().count() < MIN_BARCODE_LEN {
        return Err(Rejection::ShortBarcode);
    }

    let name = record.get(fields::PRODUCT_NAME).trim();
    if name.is_empty() {
        return Err(Rejection::MissingName);
    }

    let nutrition = parse_nutrition(record);
    if !nutrition.has_core_values() {
        return Err(Rejection::NoNutrition);
    }

    let ingredients = parse_ingredients(record.get(fields::INGREDIENTS));

    Ok(CatalogItem {
        barcode: barcode.to_string(),
        name: name.to_string(),
        brand: non_blank(record.get(fields::BRANDS)),
        category: derive_category(record.get(fields::CATEGORIES)),
        nutrition,
        serving_size: non_blank(record.get(fields::SERVING_SIZE)),
        ingredients: (!ingredients.is_empty()).then_some(ingredients),
    })
}

fn parse_nutrition(record: &RawRecord) -> Nutrition {
    let value = |field: &str| parse_nutrition_value(record.get(field));

    Nutrition {
        calories: value(fields::ENERGY_KCAL),
        protein: value(fields::PROTEINS),
        carbohydrates: value(fields::CARBOHYDRATES),
        fat: value(fields::FAT),
        saturated_fat: value(fields::SATURATED_FAT),
        fiber: value(fields::FIBER),
        sugar: value(fields::SUGARS),
        sodium: value(fields::SODIUM) / MG_PER_G,
    }
}

/// カテゴリタグの先頭要素（小文字）、なければ "other"
fn derive_category(categories: &str) -> String {
    categories
        .split(',')
        .next()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_lowercase)
        .unwrap_or_else(|| FALLBACK_CATEGORY.to_string())
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
