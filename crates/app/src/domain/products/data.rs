//! Product Data

use crate::domain::{categories::records::CategoryUuid, products::records::ProductUuid};

/// New Product Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub uuid: ProductUuid,
    pub name: String,
    pub description: String,
    pub price: u64,
    pub weight_grams: Option<u32>,
    pub featured: bool,
    pub category_uuid: Option<CategoryUuid>,
}

/// Product Update Data
#[derive(Debug, Clone, PartialEq)]
pub struct ProductUpdate {
    pub name: String,
    pub description: String,
    pub price: u64,
    pub weight_grams: Option<u32>,
    pub featured: bool,
    pub category_uuid: Option<CategoryUuid>,
}
