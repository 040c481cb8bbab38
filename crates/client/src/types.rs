//! Response payloads of the catalog API.
//!
//! Every field is defaulted: on a 200/201 the status code alone decides
//! success, and the payload is best-effort metadata (see
//! [`crate::CatalogClient::create_product`]).

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Category summary nested inside a created product.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CategorySummary {
    pub id: u64,
    pub name: String,
    pub image: String,
}

/// Product record as echoed back by the create endpoint.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreatedProduct {
    pub id: u64,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub images: Vec<String>,
    pub category: Option<CategorySummary>,
    pub creation_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}
