use std::env;

use business::domain::catalog::decorator::ProductDecorator;
use business::domain::catalog::money::CurrencyFormatter;
use business::domain::shared::value_objects::StoreId;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum StorefrontConfigError {
    #[error("config.invalid_currency: {0}")]
    InvalidCurrency(String),
    #[error("config.invalid_storefront_url: {0}")]
    InvalidUrl(String),
}

/// Storefront settings used to turn catalog rows into displayable products.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    pub base_url: String,
    pub media_url: Option<String>,
    pub placeholder_image_url: Option<String>,
    pub currency: String,
    pub default_store_id: StoreId,
}

impl StorefrontConfig {
    /// Load storefront configuration from environment variables
    ///
    /// Environment variables:
    /// - STOREFRONT_BASE_URL (default: "http://localhost/")
    /// - STOREFRONT_MEDIA_URL (default: "{base}media/")
    /// - STOREFRONT_PLACEHOLDER_IMAGE_URL (default: "{media}catalog/product/placeholder/image.jpg")
    /// - STOREFRONT_CURRENCY (default: "USD")
    /// - DEFAULT_STORE_ID: store used when a request names none (default: 1)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            base_url: value("STOREFRONT_BASE_URL").unwrap_or_else(|| "http://localhost/".to_string()),
            media_url: value("STOREFRONT_MEDIA_URL"),
            placeholder_image_url: value("STOREFRONT_PLACEHOLDER_IMAGE_URL"),
            currency: value("STOREFRONT_CURRENCY").unwrap_or_else(|| "USD".to_string()),
            default_store_id: value("DEFAULT_STORE_ID")
                .and_then(|id| id.trim().parse::<i64>().ok())
                .map(StoreId::new)
                .unwrap_or(StoreId::new(1)),
        }
    }

    pub fn product_decorator(&self) -> Result<ProductDecorator, StorefrontConfigError> {
        let currency = CurrencyFormatter::for_code(&self.currency)
            .map_err(StorefrontConfigError::InvalidCurrency)?;

        ProductDecorator::new(
            &self.base_url,
            self.media_url.as_deref(),
            self.placeholder_image_url.as_deref(),
            currency,
        )
        .map_err(|e| StorefrontConfigError::InvalidUrl(e.to_string()))
    }
}
