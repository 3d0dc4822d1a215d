use async_trait::async_trait;

use crate::domain::popup_cart::errors::PopupCartError;
use crate::domain::popup_cart::model::SectionPayload;
use crate::domain::shared::value_objects::{CartId, StoreId};

pub struct GetSectionDataParams {
    pub store_id: StoreId,
    /// Cart of the calling session; `None` for visitors without a cart.
    pub cart_id: Option<CartId>,
}

#[async_trait]
pub trait GetSectionDataUseCase: Send + Sync {
    async fn execute(&self, params: GetSectionDataParams)
    -> Result<SectionPayload, PopupCartError>;
}
