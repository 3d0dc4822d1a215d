use std::collections::BTreeMap;

use poem_openapi::Object;
use serde_json::Value;

use business::domain::catalog::decorator::DisplayableProduct;
use business::domain::popup_cart::model::SectionPayload;

/// Product ready to render in the popup carousel.
///
/// Catalog attributes are serialized next to the fixed keys; a fixed key always
/// wins over an attribute of the same name.
#[derive(Debug, Clone, Object)]
pub struct CarouselProductResponse {
    /// Catalog attributes passed through untouched
    #[oai(flatten)]
    pub attributes: BTreeMap<String, Value>,
    pub entity_id: i64,
    pub sku: String,
    pub name: String,
    pub product_url: String,
    pub product_image: String,
    /// Formatted minimal price, e.g. `$1,234.50`
    pub product_price: String,
}

impl From<DisplayableProduct> for CarouselProductResponse {
    fn from(product: DisplayableProduct) -> Self {
        Self {
            attributes: product.attributes.into_iter().collect(),
            entity_id: product.id.value(),
            sku: product.sku,
            name: product.name,
            product_url: product.product_url,
            product_image: product.product_image,
            product_price: product.product_price,
        }
    }
}

/// Data of the `cartpopup` customer section.
#[derive(Debug, Clone, Object)]
pub struct SectionPayloadResponse {
    #[oai(rename = "cartTotalCount")]
    pub cart_total_count: u32,
    pub products: Vec<CarouselProductResponse>,
}

impl From<SectionPayload> for SectionPayloadResponse {
    fn from(payload: SectionPayload) -> Self {
        Self {
            cart_total_count: payload.cart_total_count,
            products: payload.products.into_iter().map(|p| p.into()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::shared::value_objects::ProductId;
    use poem_openapi::types::ToJSON;
    use serde_json::{Map, json};

    fn duffle(attributes: Map<String, Value>) -> DisplayableProduct {
        DisplayableProduct {
            id: ProductId::new(14),
            sku: "24-WB04".to_string(),
            name: "Overnight Duffle".to_string(),
            product_url: "https://shop.example.com/overnight-duffle.html".to_string(),
            product_image: "https://shop.example.com/media/catalog/product/w/b/wb04.jpg"
                .to_string(),
            product_price: "$45.00".to_string(),
            attributes,
        }
    }

    #[test]
    fn should_serialize_attributes_next_to_fixed_keys() {
        let mut attributes = Map::new();
        attributes.insert("color".to_string(), json!("gray"));
        attributes.insert("activity".to_string(), json!(["Gym", "Travel"]));

        let json = CarouselProductResponse::from(duffle(attributes))
            .to_json()
            .unwrap();

        assert_eq!(json["entity_id"], json!(14));
        assert_eq!(json["color"], json!("gray"));
        assert_eq!(json["activity"], json!(["Gym", "Travel"]));
        assert!(json.get("attributes").is_none());
        assert!(json.get("id").is_none());
    }

    #[test]
    fn should_not_let_attributes_overwrite_fixed_keys() {
        let mut attributes = Map::new();
        attributes.insert("sku".to_string(), json!("raw-sku"));
        attributes.insert("entity_id".to_string(), json!(999));

        let json = CarouselProductResponse::from(duffle(attributes))
            .to_json()
            .unwrap();

        assert_eq!(json["sku"], json!("24-WB04"));
        assert_eq!(json["entity_id"], json!(14));
    }
}
