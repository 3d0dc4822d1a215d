use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use sqlx::FromRow;
use sqlx::types::Json;

use business::domain::catalog::model::{CatalogProduct, ProductImage};
use business::domain::catalog::value_objects::{ImageRole, ProductStatus, ProductVisibility};
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::ProductId;

#[derive(Debug, FromRow)]
pub struct CatalogProductEntity {
    pub entity_id: i64,
    pub sku: String,
    pub name: String,
    pub status: String,
    pub visibility: String,
    pub attributes: Json<Map<String, Value>>,
    pub created_at: DateTime<Utc>,
    pub url_path: Option<String>,
    pub minimal_price: Option<BigDecimal>,
}

#[derive(Debug, FromRow)]
pub struct ProductImageEntity {
    pub product_id: i64,
    pub role: String,
    pub file: String,
}

impl ProductImageEntity {
    /// Rows with a role the domain does not know are skipped.
    pub fn into_domain(self) -> Option<ProductImage> {
        Some(ProductImage {
            role: self.role.parse::<ImageRole>().ok()?,
            file: self.file,
        })
    }
}

impl CatalogProductEntity {
    pub fn into_domain(self, images: Vec<ProductImage>) -> Result<CatalogProduct, RepositoryError> {
        Ok(CatalogProduct {
            id: ProductId::new(self.entity_id),
            sku: self.sku,
            name: self.name,
            status: self
                .status
                .parse::<ProductStatus>()
                .map_err(|_| RepositoryError::InvalidData)?,
            visibility: self
                .visibility
                .parse::<ProductVisibility>()
                .map_err(|_| RepositoryError::InvalidData)?,
            url_path: self.url_path,
            minimal_price: self.minimal_price,
            images,
            attributes: self.attributes.0,
            created_at: self.created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn entity(status: &str, visibility: &str) -> CatalogProductEntity {
        CatalogProductEntity {
            entity_id: 12,
            sku: "24-MB01".to_string(),
            name: "Joust Duffle Bag".to_string(),
            status: status.to_string(),
            visibility: visibility.to_string(),
            attributes: Json(Map::new()),
            created_at: Utc::now(),
            url_path: Some("joust-duffle-bag.html".to_string()),
            minimal_price: Some(BigDecimal::from_str("34.00").unwrap()),
        }
    }

    #[test]
    fn should_map_row_into_catalog_product() {
        let images = vec![ProductImage {
            role: ImageRole::Base,
            file: "/m/b/mb01-blue-0.jpg".to_string(),
        }];

        let product = entity("enabled", "catalog_search")
            .into_domain(images.clone())
            .unwrap();

        assert_eq!(product.id, ProductId::new(12));
        assert_eq!(product.status, ProductStatus::Enabled);
        assert_eq!(product.visibility, ProductVisibility::CatalogSearch);
        assert_eq!(product.images, images);
        assert_eq!(product.url_path.as_deref(), Some("joust-duffle-bag.html"));
    }

    #[test]
    fn should_reject_unknown_status() {
        let result = entity("archived", "catalog").into_domain(vec![]);
        assert_eq!(result.unwrap_err(), RepositoryError::InvalidData);
    }

    #[test]
    fn should_skip_image_with_unknown_role() {
        let image = ProductImageEntity {
            product_id: 12,
            role: "swatch".to_string(),
            file: "/s/w.jpg".to_string(),
        };
        assert!(image.into_domain().is_none());
    }
}
