use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::cart::model::Cart;
use business::domain::cart::repository::CartRepository;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::CartId;

use super::entity::{CartEntity, CartItemEntity};

pub struct CartRepositoryPostgres {
    pool: PgPool,
}

impl CartRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CartRepository for CartRepositoryPostgres {
    async fn find_by_id(&self, id: CartId) -> Result<Option<Cart>, RepositoryError> {
        let Some(entity) = sqlx::query_as::<_, CartEntity>(
            "SELECT id, store_id, last_added_product_id, updated_at FROM carts WHERE id = $1",
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?
        else {
            return Ok(None);
        };

        let items = sqlx::query_as::<_, CartItemEntity>(
            "SELECT product_id, qty FROM cart_items WHERE cart_id = $1 ORDER BY id ASC",
        )
        .bind(id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?
        .into_iter()
        .map(|item| item.into_domain())
        .collect::<Result<Vec<_>, _>>()?;

        Ok(Some(entity.into_domain(items)))
    }
}
