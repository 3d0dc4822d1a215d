use serde_json::{Map, Value};
use url::Url;

use super::model::CatalogProduct;
use super::money::CurrencyFormatter;
use super::value_objects::ImageRole;
use crate::domain::shared::value_objects::ProductId;

const PRODUCT_MEDIA_PATH: &str = "catalog/product/";
const PRODUCT_VIEW_PATH: &str = "catalog/product/view/id/";
const DEFAULT_PLACEHOLDER_PATH: &str = "catalog/product/placeholder/image.jpg";

/// Catalog entry with everything a storefront widget needs to render it.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayableProduct {
    pub id: ProductId,
    pub sku: String,
    pub name: String,
    pub product_url: String,
    pub product_image: String,
    pub product_price: String,
    pub attributes: Map<String, Value>,
}

/// Resolves storefront URLs and prices for catalog rows.
#[derive(Debug, Clone)]
pub struct ProductDecorator {
    base_url: Url,
    media_url: Url,
    placeholder_image_url: Url,
    currency: CurrencyFormatter,
}

impl ProductDecorator {
    /// `media_url` defaults to `{base_url}media/` and the placeholder to the
    /// stock placeholder image under the media directory.
    pub fn new(
        base_url: &str,
        media_url: Option<&str>,
        placeholder_image_url: Option<&str>,
        currency: CurrencyFormatter,
    ) -> Result<Self, url::ParseError> {
        let base_url = Url::parse(&with_trailing_slash(base_url))?;
        let media_url = match media_url {
            Some(url) => Url::parse(&with_trailing_slash(url))?,
            None => base_url.join("media/")?,
        };
        let placeholder_image_url = match placeholder_image_url {
            Some(url) => Url::parse(url)?,
            None => media_url.join(DEFAULT_PLACEHOLDER_PATH)?,
        };

        Ok(Self {
            base_url,
            media_url,
            placeholder_image_url,
            currency,
        })
    }

    pub fn decorate(
        &self,
        product: CatalogProduct,
        role: ImageRole,
    ) -> Result<DisplayableProduct, url::ParseError> {
        let product_url = self.product_url(&product)?;
        let product_image = self.image_url(&product, role)?;
        let product_price = self.currency.format(product.minimal_price.as_ref());

        Ok(DisplayableProduct {
            id: product.id,
            sku: product.sku,
            name: product.name,
            product_url,
            product_image,
            product_price,
            attributes: product.attributes,
        })
    }

    /// Rewritten path when the catalog resolved one, the canonical view route otherwise.
    pub fn product_url(&self, product: &CatalogProduct) -> Result<String, url::ParseError> {
        let url = match product.url_path.as_deref().map(str::trim) {
            Some(path) if !path.is_empty() => join_under(&self.base_url, path)?,
            _ => join_under(
                &self.base_url,
                &format!("{}{}", PRODUCT_VIEW_PATH, product.id),
            )?,
        };
        Ok(url.to_string())
    }

    pub fn image_url(
        &self,
        product: &CatalogProduct,
        role: ImageRole,
    ) -> Result<String, url::ParseError> {
        match product.image(role).map(str::trim) {
            Some(file) if !file.is_empty() && file != "no_selection" => {
                let url = join_under(&self.media_url.join(PRODUCT_MEDIA_PATH)?, file)?;
                Ok(url.to_string())
            }
            _ => Ok(self.placeholder_image_url.to_string()),
        }
    }
}

/// Resolves `path` below `base` even when its first segment looks like a scheme (`sale:50-off.html`).
fn join_under(base: &Url, path: &str) -> Result<Url, url::ParseError> {
    base.join(&format!("./{}", path.trim_start_matches('/')))
}

fn with_trailing_slash(url: &str) -> String {
    let url = url.trim();
    if url.ends_with('/') {
        url.to_string()
    } else {
        format!("{}/", url)
    }
}
