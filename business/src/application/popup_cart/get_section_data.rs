use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::catalog::decorator::{DisplayableProduct, ProductDecorator};
use crate::domain::catalog::query::CatalogQuery;
use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::catalog::value_objects::{ImageRole, LinkType};
use crate::domain::logger::Logger;
use crate::domain::popup_cart::errors::PopupCartError;
use crate::domain::popup_cart::model::SectionPayload;
use crate::domain::popup_cart::repository::SettingsRepository;
use crate::domain::popup_cart::selection::{CandidateSource, Selection};
use crate::domain::popup_cart::settings::PopupCartSettings;
use crate::domain::popup_cart::strategy::CarouselStrategy;
use crate::domain::popup_cart::use_cases::get_section_data::{
    GetSectionDataParams, GetSectionDataUseCase,
};
use crate::domain::sales::repository::BestSellersRepository;
use crate::domain::shared::value_objects::{ProductId, StoreId};

pub struct GetSectionDataUseCaseImpl {
    pub settings: Arc<dyn SettingsRepository>,
    pub catalog: Arc<dyn CatalogRepository>,
    pub best_sellers: Arc<dyn BestSellersRepository>,
    pub carts: Arc<dyn CartRepository>,
    pub decorator: Arc<ProductDecorator>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetSectionDataUseCase for GetSectionDataUseCaseImpl {
    async fn execute(
        &self,
        params: GetSectionDataParams,
    ) -> Result<SectionPayload, PopupCartError> {
        let settings = PopupCartSettings::load(self.settings.as_ref(), params.store_id)
            .await
            .inspect_err(|e| {
                self.logger
                    .error(&format!("Popup cart settings unusable: {} ({:?})", e, e))
            })?;
        self.logger.info(&format!(
            "Building popup cart section for store {} using {} strategy",
            params.store_id, settings.strategy
        ));

        let base = CatalogQuery::visible_in_store(params.store_id);
        let cart = match params.cart_id {
            Some(cart_id) => self.carts.find_by_id(cart_id).await?,
            None => None,
        };

        let selection = self
            .select(settings.strategy, params.store_id, cart.as_ref())
            .await?;
        if selection.is_fallback() {
            self.logger.warn(&format!(
                "No candidates for {} strategy, showing random products",
                settings.strategy
            ));
        } else {
            self.logger.debug(&format!("Carousel selection: {:?}", selection));
        }

        let mut rows = self
            .catalog
            .find(&selection.apply(&base).limited_to(settings.page_size))
            .await?;

        // Candidates may all be hidden in this store; the popup must still show something.
        if rows.is_empty() && matches!(selection, Selection::Candidates(_)) {
            self.logger.warn(&format!(
                "Candidates of {} strategy are not visible, showing random products",
                settings.strategy
            ));
            rows = self
                .catalog
                .find(
                    &Selection::RandomFallback
                        .apply(&base)
                        .limited_to(settings.page_size),
                )
                .await?;
        }
        rows.truncate(settings.page_size);

        let products = rows
            .into_iter()
            .map(|row| self.decorator.decorate(row, ImageRole::Base))
            .collect::<Result<Vec<DisplayableProduct>, _>>()?;

        let cart_total_count = cart
            .map(|cart| cart.summary_count(settings.summary_mode))
            .unwrap_or(0);

        self.logger.info(&format!(
            "Popup cart section ready with {} products and {} cart items",
            products.len(),
            cart_total_count
        ));

        Ok(SectionPayload {
            cart_total_count,
            products,
        })
    }
}

impl GetSectionDataUseCaseImpl {
    async fn select(
        &self,
        strategy: CarouselStrategy,
        store_id: StoreId,
        cart: Option<&Cart>,
    ) -> Result<Selection, PopupCartError> {
        match strategy.candidate_source() {
            CandidateSource::Catalog(order) => Ok(Selection::Ordered(order)),
            CandidateSource::BestSellers(period) => {
                let period_start = period.period_start(Utc::now().date_naive());
                let sellers = self
                    .best_sellers
                    .top_sellers(period, period_start, store_id)
                    .await?;
                Ok(Selection::from_candidates(
                    sellers.into_iter().map(|seller| seller.product_id),
                ))
            }
            CandidateSource::LinkedToLastAdded(link_type) => {
                let last_added = cart.and_then(|cart| cart.last_added_product_id);
                self.linked_candidates(link_type, last_added).await
            }
        }
    }

    /// Shared by the up-sell, related and cross-sell strategies.
    async fn linked_candidates(
        &self,
        link_type: LinkType,
        last_added: Option<ProductId>,
    ) -> Result<Selection, PopupCartError> {
        let Some(product_id) = last_added else {
            return Ok(Selection::RandomFallback);
        };

        let product = self.catalog.get_by_id(product_id).await?;
        let linked = self
            .catalog
            .linked_product_ids(product.id, link_type)
            .await?;

        Ok(Selection::from_candidates(linked))
    }
}
