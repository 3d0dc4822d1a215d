use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::popup_cart::repository::{SettingChange, SettingsRepository};
use business::domain::shared::value_objects::StoreId;

const UPSERT_VALUE: &str = r#"INSERT INTO core_config_data (scope_id, path, value, updated_at)
    VALUES ($1, $2, $3, NOW())
    ON CONFLICT (scope_id, path) DO UPDATE SET
        value = EXCLUDED.value,
        updated_at = EXCLUDED.updated_at"#;

/// Scoped key/value settings. A store scope row wins over the default scope row.
pub struct SettingsRepositoryPostgres {
    pool: PgPool,
}

impl SettingsRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SettingsRepository for SettingsRepositoryPostgres {
    async fn get_value(
        &self,
        store_id: StoreId,
        path: &str,
    ) -> Result<Option<String>, RepositoryError> {
        let value = sqlx::query_scalar::<_, Option<String>>(
            "SELECT value FROM core_config_data \
             WHERE path = $1 AND scope_id IN ($2, $3) \
             ORDER BY (scope_id = $2) DESC LIMIT 1",
        )
        .bind(path)
        .bind(store_id.value())
        .bind(StoreId::ADMIN.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(value.flatten())
    }

    async fn set_values(
        &self,
        store_id: StoreId,
        changes: &[SettingChange],
    ) -> Result<(), RepositoryError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|_| RepositoryError::Persistence)?;

        for change in changes {
            sqlx::query(UPSERT_VALUE)
                .bind(store_id.value())
                .bind(change.path)
                .bind(&change.value)
                .execute(&mut *tx)
                .await
                .map_err(|_| RepositoryError::Persistence)?;
        }

        // Dropping the transaction on an early return rolls it back.
        tx.commit().await.map_err(|_| RepositoryError::Persistence)
    }
}
