use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::sales::model::{BestSeller, ReportPeriod};
use business::domain::sales::repository::BestSellersRepository;
use business::domain::shared::value_objects::StoreId;

use super::entity::BestSellerEntity;

pub struct BestSellersRepositoryPostgres {
    pool: PgPool,
}

impl BestSellersRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BestSellersRepository for BestSellersRepositoryPostgres {
    async fn top_sellers(
        &self,
        period: ReportPeriod,
        period_start: NaiveDate,
        store_id: StoreId,
    ) -> Result<Vec<BestSeller>, RepositoryError> {
        let entities = sqlx::query_as::<_, BestSellerEntity>(
            "SELECT product_id, product_name, qty_ordered, rating_pos \
             FROM sales_bestsellers_aggregated \
             WHERE period_type = $1 AND period = $2 AND store_id = $3 \
             ORDER BY rating_pos ASC",
        )
        .bind(period.to_string())
        .bind(period_start)
        .bind(store_id.value())
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }
}
