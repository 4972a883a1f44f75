//! 외부 파일 일괄 등록

pub mod product_import;

pub use product_import::{ImportSummary, ProductRecord, import_products, parse_products};
