use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::cart::model::{Cart, CartItem};
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::{CartId, ProductId, StoreId};

#[derive(Debug, FromRow)]
pub struct CartEntity {
    pub id: Uuid,
    pub store_id: i64,
    pub last_added_product_id: Option<i64>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, FromRow)]
pub struct CartItemEntity {
    pub product_id: i64,
    pub qty: i32,
}

impl CartItemEntity {
    pub fn into_domain(self) -> Result<CartItem, RepositoryError> {
        Ok(CartItem {
            product_id: ProductId::new(self.product_id),
            qty: u32::try_from(self.qty).map_err(|_| RepositoryError::InvalidData)?,
        })
    }
}

impl CartEntity {
    pub fn into_domain(self, items: Vec<CartItem>) -> Cart {
        Cart {
            id: CartId::new(self.id),
            store_id: StoreId::new(self.store_id),
            items,
            last_added_product_id: self.last_added_product_id.map(ProductId::new),
            updated_at: self.updated_at,
        }
    }
}
