use async_trait::async_trait;

use crate::domain::cart::model::CartSummaryMode;
use crate::domain::popup_cart::errors::PopupCartError;
use crate::domain::popup_cart::settings::PopupCartSettings;
use crate::domain::shared::value_objects::StoreId;

/// Values left as `None` keep whatever the store currently resolves to.
pub struct UpdatePopupCartSettingsParams {
    pub store_id: StoreId,
    pub strategy: Option<String>,
    pub page_size: Option<usize>,
    pub summary_mode: Option<CartSummaryMode>,
}

/// Provided values are stored together; a failed write leaves the previous settings in place.
#[async_trait]
pub trait UpdatePopupCartSettingsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: UpdatePopupCartSettingsParams,
    ) -> Result<PopupCartSettings, PopupCartError>;
}
