use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::CartId;

use super::model::Cart;

#[async_trait]
pub trait CartRepository: Send + Sync {
    /// `None` when the session never created a cart.
    async fn find_by_id(&self, id: CartId) -> Result<Option<Cart>, RepositoryError>;
}
