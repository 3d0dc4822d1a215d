use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::ProductId;

use super::model::CatalogProduct;
use super::query::CatalogQuery;
use super::value_objects::LinkType;

#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Materializes the rows matched by `query`, in the order it requests.
    async fn find(&self, query: &CatalogQuery) -> Result<Vec<CatalogProduct>, RepositoryError>;
    async fn get_by_id(&self, id: ProductId) -> Result<CatalogProduct, RepositoryError>;
    /// Ids linked from `id` with `link_type`, in configured position order.
    async fn linked_product_ids(
        &self,
        id: ProductId,
        link_type: LinkType,
    ) -> Result<Vec<ProductId>, RepositoryError>;
}
