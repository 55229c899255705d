//! Essentials Catalog Common Library
//!
//! 商品エクスポートの行を正規化・ランキングしてカタログにするための
//! 型と変換（I/Oなし）

pub mod types;
pub mod error;
pub mod parser;
pub mod filter;
pub mod normalizer;
pub mod ranker;

pub use types::{fields, Catalog, CatalogItem, Nutrition, RawRecord, CATALOG_VERSION};
pub use error::{Error, Result};
pub use parser::{parse_ingredients, parse_nutrition_value, parse_scan_count};
pub use filter::{CountryFilter, DEFAULT_COUNTRY};
pub use normalizer::{normalize_record, Rejection};
pub use ranker::{Ranker, DEFAULT_LIMIT};
