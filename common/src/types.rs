//! カタログの型定義
//!
//! - RawRecord: 入力TSVの1行（列名 → 生の文字列）
//! - Nutrition / CatalogItem: 正規化後の商品
//! - Catalog: 最終出力（メタデータ + 商品リスト）

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// カタログのスキーマバージョン
pub const CATALOG_VERSION: &str = "1.0.0";

/// バーコードの最小文字数
pub const MIN_BARCODE_LEN: usize = 8;

/// 原材料リストの最大件数
pub const MAX_INGREDIENTS: usize = 20;

/// カテゴリ未設定時のカテゴリ名
pub const FALLBACK_CATEGORY: &str = "other";

/// 入力ファイルの列名（OpenFoodFactsエクスポート）
pub mod fields {
    pub const CODE: &str = "code";
    pub const PRODUCT_NAME: &str = "product_name";
    pub const BRANDS: &str = "brands";
    pub const CATEGORIES: &str = "categories_en";
    pub const SERVING_SIZE: &str = "serving_size";
    pub const INGREDIENTS: &str = "ingredients_text";
    pub const ENERGY_KCAL: &str = "energy-kcal_100g";
    pub const PROTEINS: &str = "proteins_100g";
    pub const CARBOHYDRATES: &str = "carbohydrates_100g";
    pub const FAT: &str = "fat_100g";
    pub const SATURATED_FAT: &str = "saturated-fat_100g";
    pub const FIBER: &str = "fiber_100g";
    pub const SUGARS: &str = "sugars_100g";
    pub const SODIUM: &str = "sodium_100g";
    pub const COUNTRIES_TAGS: &str = "countries_tags";
    pub const UNIQUE_SCANS: &str = "unique_scans_n";
}

/// 入力の1行
///
/// 存在しない列は空文字列として扱う。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    values: HashMap<String, String>,
}

impl RawRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// 列の値を取得（なければ空文字列）
    pub fn get(&self, field: &str) -> &str {
        self.values.get(field).map(String::as_str).unwrap_or("")
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.values.insert(field.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for RawRecord
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// 100gあたりの栄養成分
///
/// ナトリウムのみグラム単位（入力はミリグラム）。
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Nutrition {
    pub calories: f64,
    pub protein: f64,
    pub carbohydrates: f64,
    pub fat: f64,
    pub saturated_fat: f64,
    pub fiber: f64,
    pub sugar: f64,
    pub sodium: f64,
}

impl Nutrition {
    /// カロリー・タンパク質・炭水化物のいずれかが0以外
    pub fn has_core_values(&self) -> bool {
        self.calories != 0.0 || self.protein != 0.0 || self.carbohydrates != 0.0
    }

    fn values(&self) -> [f64; 8] {
        [
            self.calories,
            self.protein,
            self.carbohydrates,
            self.fat,
            self.saturated_fat,
            self.fiber,
            self.sugar,
            self.sodium,
        ]
    }
}

/// カタログの商品1件
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub barcode: String,
    pub name: String,
    pub brand: Option<String>,
    pub category: String,
    pub nutrition: Nutrition,
    pub serving_size: Option<String>,
    pub ingredients: Option<Vec<String>>,
}

impl CatalogItem {
    /// 商品の不変条件を検証
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.barcode.chars().count() < MIN_BARCODE_LEN {
            return Err(format!("barcode too short: {:?}", self.barcode));
        }
        if self.name.trim().is_empty() {
            return Err(format!("{}: empty name", self.barcode));
        }
        if self.category.is_empty() || self.category != self.category.to_lowercase() {
            return Err(format!("{}: category not lowercase: {:?}", self.barcode, self.category));
        }
        if self
            .nutrition
            .values()
            .iter()
            .any(|v| !v.is_finite() || *v < 0.0)
        {
            return Err(format!("{}: negative or non-finite nutrition value", self.barcode));
        }
        if !self.nutrition.has_core_values() {
            return Err(format!("{}: no core nutrition values", self.barcode));
        }
        if let Some(ingredients) = &self.ingredients {
            if ingredients.is_empty() || ingredients.len() > MAX_INGREDIENTS {
                return Err(format!(
                    "{}: {} ingredients",
                    self.barcode,
                    ingredients.len()
                ));
            }
            if ingredients
                .iter()
                .any(|i| i.is_empty() || i.trim() != i || *i != i.to_lowercase())
            {
                return Err(format!("{}: ingredient not normalized", self.barcode));
            }
        }
        Ok(())
    }
}

/// 出力カタログ
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub version: String,
    pub generated_at: String,
    pub product_count: usize,
    pub products: Vec<CatalogItem>,
}

impl Catalog {
    /// ランキング済みの商品リストからカタログを作成
    pub fn new(products: Vec<CatalogItem>, generated_at: impl Into<String>) -> Self {
        Self {
            version: CATALOG_VERSION.to_string(),
            generated_at: generated_at.into(),
            product_count: products.len(),
            products,
        }
    }

    /// 件数と各商品の不変条件を検証
    pub fn validate(&self) -> Result<()> {
        if self.product_count != self.products.len() {
            return Err(Error::InvalidCatalog(format!(
                "productCount {} != {} products",
                self.product_count,
                self.products.len()
            )));
        }
        for item in &self.products {
            item.validate().map_err(Error::InvalidCatalog)?;
        }
        Ok(())
    }
}
