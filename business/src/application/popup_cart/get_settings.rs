use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::popup_cart::errors::PopupCartError;
use crate::domain::popup_cart::repository::SettingsRepository;
use crate::domain::popup_cart::settings::PopupCartSettings;
use crate::domain::popup_cart::use_cases::get_settings::{
    GetPopupCartSettingsParams, GetPopupCartSettingsUseCase,
};

pub struct GetPopupCartSettingsUseCaseImpl {
    pub repository: Arc<dyn SettingsRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetPopupCartSettingsUseCase for GetPopupCartSettingsUseCaseImpl {
    async fn execute(
        &self,
        params: GetPopupCartSettingsParams,
    ) -> Result<PopupCartSettings, PopupCartError> {
        self.logger.info(&format!(
            "Fetching popup cart settings for store {}",
            params.store_id
        ));
        PopupCartSettings::load(self.repository.as_ref(), params.store_id).await
    }
}
