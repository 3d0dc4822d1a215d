use std::sync::Arc;

use logger::TracingLogger;
use persistence::cart::repository::CartRepositoryPostgres;
use persistence::catalog::repository::CatalogRepositoryPostgres;
use persistence::sales::repository::BestSellersRepositoryPostgres;
use persistence::settings::repository::SettingsRepositoryPostgres;

use business::application::popup_cart::get_carousel_options::GetCarouselOptionsUseCaseImpl;
use business::application::popup_cart::get_section_data::GetSectionDataUseCaseImpl;
use business::application::popup_cart::get_settings::GetPopupCartSettingsUseCaseImpl;
use business::application::popup_cart::update_settings::UpdatePopupCartSettingsUseCaseImpl;

use crate::api::admin::routes::AdminApi;
use crate::api::health::routes::HealthApi;
use crate::api::popup_cart::routes::PopupCartApi;
use crate::config::storefront_config::StorefrontConfig;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub popup_cart_api: PopupCartApi,
    pub admin_api: AdminApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool, storefront: &StorefrontConfig) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let decorator = Arc::new(storefront.product_decorator()?);

        // Infrastructure adapters
        let settings_repository = Arc::new(SettingsRepositoryPostgres::new(pool.clone()));
        let catalog_repository = Arc::new(CatalogRepositoryPostgres::new(pool.clone()));
        let best_sellers_repository = Arc::new(BestSellersRepositoryPostgres::new(pool.clone()));
        let cart_repository = Arc::new(CartRepositoryPostgres::new(pool));

        // Storefront use cases
        let get_section_data_use_case = Arc::new(GetSectionDataUseCaseImpl {
            settings: settings_repository.clone(),
            catalog: catalog_repository,
            best_sellers: best_sellers_repository,
            carts: cart_repository,
            decorator,
            logger: logger.clone(),
        });

        // Admin use cases
        let get_carousel_options_use_case = Arc::new(GetCarouselOptionsUseCaseImpl {
            logger: logger.clone(),
        });
        let get_settings_use_case = Arc::new(GetPopupCartSettingsUseCaseImpl {
            repository: settings_repository.clone(),
            logger: logger.clone(),
        });
        let update_settings_use_case = Arc::new(UpdatePopupCartSettingsUseCaseImpl {
            repository: settings_repository,
            logger,
        });

        Ok(Self {
            health_api: HealthApi,
            popup_cart_api: PopupCartApi::new(
                get_section_data_use_case,
                storefront.default_store_id,
            ),
            admin_api: AdminApi::new(
                get_carousel_options_use_case,
                get_settings_use_case,
                update_settings_use_case,
            ),
        })
    }
}
