use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::popup_cart::errors::PopupCartError;
use crate::domain::popup_cart::repository::{SettingChange, SettingsRepository};
use crate::domain::popup_cart::settings::{
    CONFIG_CAROUSEL_STRATEGY, CONFIG_CART_SUMMARY_USE_QTY, CONFIG_PRODUCT_LIMIT,
    PopupCartSettings, validate_page_size,
};
use crate::domain::popup_cart::strategy::CarouselStrategy;
use crate::domain::popup_cart::use_cases::update_settings::{
    UpdatePopupCartSettingsParams, UpdatePopupCartSettingsUseCase,
};

pub struct UpdatePopupCartSettingsUseCaseImpl {
    pub repository: Arc<dyn SettingsRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdatePopupCartSettingsUseCase for UpdatePopupCartSettingsUseCaseImpl {
    async fn execute(
        &self,
        params: UpdatePopupCartSettingsParams,
    ) -> Result<PopupCartSettings, PopupCartError> {
        self.logger.info(&format!(
            "Updating popup cart settings for store {}",
            params.store_id
        ));

        // Everything is validated before the first write.
        let strategy = params
            .strategy
            .as_deref()
            .map(str::parse::<CarouselStrategy>)
            .transpose()
            .inspect_err(|e| self.logger.warn(&format!("Rejected strategy: {}", e)))?;
        let page_size = params.page_size.map(validate_page_size).transpose()?;

        let mut changes = Vec::new();
        if let Some(strategy) = strategy {
            changes.push(SettingChange::new(CONFIG_CAROUSEL_STRATEGY, strategy.value()));
        }
        if let Some(page_size) = page_size {
            changes.push(SettingChange::new(CONFIG_PRODUCT_LIMIT, page_size.to_string()));
        }
        if let Some(summary_mode) = params.summary_mode {
            changes.push(SettingChange::new(
                CONFIG_CART_SUMMARY_USE_QTY,
                summary_mode.as_flag(),
            ));
        }
        if !changes.is_empty() {
            self.repository
                .set_values(params.store_id, &changes)
                .await
                .inspect_err(|e| {
                    self.logger
                        .error(&format!("Failed to store popup cart settings: {}", e))
                })?;
        }

        let settings = PopupCartSettings::load(self.repository.as_ref(), params.store_id).await?;
        self.logger.info(&format!(
            "Popup cart settings for store {} now use {} strategy with {} products",
            params.store_id, settings.strategy, settings.page_size
        ));
        Ok(settings)
    }
}
