use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::StoreId;

use super::model::{BestSeller, ReportPeriod};

#[async_trait]
pub trait BestSellersRepository: Send + Sync {
    /// Best sellers of the period starting at `period_start`, best ranked first.
    async fn top_sellers(
        &self,
        period: ReportPeriod,
        period_start: NaiveDate,
        store_id: StoreId,
    ) -> Result<Vec<BestSeller>, RepositoryError>;
}
