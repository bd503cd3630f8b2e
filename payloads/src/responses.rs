use crate::ProductId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A product as listed by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: Decimal,
    pub image_url: String,
    #[serde(default)]
    pub category: u32,
    #[serde(default)]
    pub rating: u32,
    /// Available sizes, in centimetres.
    #[serde(default)]
    pub sizes: Vec<u32>,
    /// Indices into the storefront's dough type names.
    #[serde(default)]
    pub types: Vec<u32>,
}
