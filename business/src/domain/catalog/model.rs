use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use super::value_objects::{ImageRole, ProductStatus, ProductVisibility};
use crate::domain::shared::value_objects::ProductId;

#[derive(Debug, Clone, PartialEq)]
pub struct ProductImage {
    pub role: ImageRole,
    /// Path relative to the product media directory, e.g. `/a/b/ab-shirt.jpg`.
    pub file: String,
}

/// Catalog entry as materialized by a [`CatalogQuery`](super::query::CatalogQuery).
#[derive(Debug, Clone)]
pub struct CatalogProduct {
    pub id: ProductId,
    pub sku: String,
    pub name: String,
    pub status: ProductStatus,
    pub visibility: ProductVisibility,
    /// Request path of the store URL rewrite, when one was resolved.
    pub url_path: Option<String>,
    pub minimal_price: Option<BigDecimal>,
    pub images: Vec<ProductImage>,
    /// Remaining catalog attributes, passed through to the storefront untouched.
    pub attributes: Map<String, Value>,
    pub created_at: DateTime<Utc>,
}

impl CatalogProduct {
    /// Returns the image file assigned to `role`, if any.
    pub fn image(&self, role: ImageRole) -> Option<&str> {
        self.images
            .iter()
            .find(|image| image.role == role)
            .map(|image| image.file.as_str())
    }

    pub fn is_visible(&self) -> bool {
        ProductStatus::visible().contains(&self.status)
            && ProductVisibility::visible_in_site().contains(&self.visibility)
    }
}
