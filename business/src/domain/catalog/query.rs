use super::value_objects::{ProductStatus, ProductVisibility};
use crate::domain::shared::value_objects::{ProductId, StoreId};

/// Row ordering requested from the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductOrder {
    /// Whatever order the catalog uses by default.
    Position,
    /// Order of the ids given to [`CatalogQuery::with_product_ids`].
    CandidateOrder,
    /// Highest entity id first.
    NewestFirst,
    Random,
}

/// Immutable description of a catalog read.
///
/// The base query is built once with [`CatalogQuery::visible_in_store`] and every
/// narrowing step returns a new value, so the order in which selection steps run
/// can never leak state into another request.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogQuery {
    store_id: StoreId,
    statuses: Vec<ProductStatus>,
    visibilities: Vec<ProductVisibility>,
    product_ids: Option<Vec<ProductId>>,
    order: ProductOrder,
    page_size: Option<usize>,
    with_url_rewrites: bool,
    with_minimal_price: bool,
}

impl CatalogQuery {
    /// Every product a customer of `store_id` may see, with URL rewrites and
    /// minimal prices resolved.
    pub fn visible_in_store(store_id: StoreId) -> Self {
        Self {
            store_id,
            statuses: ProductStatus::visible(),
            visibilities: ProductVisibility::visible_in_site(),
            product_ids: None,
            order: ProductOrder::Position,
            page_size: None,
            with_url_rewrites: true,
            with_minimal_price: true,
        }
    }

    pub fn with_product_ids(&self, ids: Vec<ProductId>) -> Self {
        Self {
            product_ids: Some(ids),
            ..self.clone()
        }
    }

    pub fn ordered_by(&self, order: ProductOrder) -> Self {
        Self {
            order,
            ..self.clone()
        }
    }

    pub fn limited_to(&self, page_size: usize) -> Self {
        Self {
            page_size: Some(page_size),
            ..self.clone()
        }
    }

    pub fn store_id(&self) -> StoreId {
        self.store_id
    }

    pub fn statuses(&self) -> &[ProductStatus] {
        &self.statuses
    }

    pub fn visibilities(&self) -> &[ProductVisibility] {
        &self.visibilities
    }

    pub fn product_ids(&self) -> Option<&[ProductId]> {
        self.product_ids.as_deref()
    }

    pub fn order(&self) -> ProductOrder {
        self.order
    }

    pub fn page_size(&self) -> Option<usize> {
        self.page_size
    }

    pub fn with_url_rewrites(&self) -> bool {
        self.with_url_rewrites
    }

    pub fn with_minimal_price(&self) -> bool {
        self.with_minimal_price
    }
}
