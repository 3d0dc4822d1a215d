use async_trait::async_trait;

use crate::domain::popup_cart::errors::PopupCartError;
use crate::domain::popup_cart::settings::PopupCartSettings;
use crate::domain::shared::value_objects::StoreId;

pub struct GetPopupCartSettingsParams {
    pub store_id: StoreId,
}

#[async_trait]
pub trait GetPopupCartSettingsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetPopupCartSettingsParams,
    ) -> Result<PopupCartSettings, PopupCartError>;
}
