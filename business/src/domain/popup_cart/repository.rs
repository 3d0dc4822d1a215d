use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::StoreId;

/// New value for one configuration path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingChange {
    pub path: &'static str,
    pub value: String,
}

impl SettingChange {
    pub fn new(path: &'static str, value: impl Into<String>) -> Self {
        Self {
            path,
            value: value.into(),
        }
    }
}

/// Store-scoped key/value configuration.
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Value saved for `store_id`, falling back to the admin scope.
    async fn get_value(
        &self,
        store_id: StoreId,
        path: &str,
    ) -> Result<Option<String>, RepositoryError>;
    /// Stores every change or none of them.
    async fn set_values(
        &self,
        store_id: StoreId,
        changes: &[SettingChange],
    ) -> Result<(), RepositoryError>;
}
