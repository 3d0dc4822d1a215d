use bigdecimal::BigDecimal;
use sqlx::FromRow;

use business::domain::sales::model::BestSeller;
use business::domain::shared::value_objects::ProductId;

#[derive(Debug, FromRow)]
pub struct BestSellerEntity {
    pub product_id: i64,
    pub product_name: String,
    pub qty_ordered: BigDecimal,
    pub rating_pos: i32,
}

impl BestSellerEntity {
    pub fn into_domain(self) -> BestSeller {
        BestSeller {
            product_id: ProductId::new(self.product_id),
            product_name: self.product_name,
            qty_ordered: self.qty_ordered,
            rating_pos: self.rating_pos,
        }
    }
}
