use std::collections::HashSet;

use crate::domain::catalog::query::{CatalogQuery, ProductOrder};
use crate::domain::catalog::value_objects::LinkType;
use crate::domain::sales::model::ReportPeriod;
use crate::domain::shared::value_objects::ProductId;

use super::strategy::CarouselStrategy;

/// Where a strategy takes its candidate products from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateSource {
    /// No candidate ids; the whole visible catalog in the given order.
    Catalog(ProductOrder),
    BestSellers(ReportPeriod),
    /// Links of the product last added to the cart.
    LinkedToLastAdded(LinkType),
}

impl CarouselStrategy {
    pub fn candidate_source(&self) -> CandidateSource {
        match self {
            CarouselStrategy::Random => CandidateSource::Catalog(ProductOrder::Random),
            CarouselStrategy::Latest => CandidateSource::Catalog(ProductOrder::NewestFirst),
            CarouselStrategy::BestSellers => CandidateSource::BestSellers(ReportPeriod::Month),
            CarouselStrategy::UpSell => CandidateSource::LinkedToLastAdded(LinkType::UpSell),
            CarouselStrategy::Related => CandidateSource::LinkedToLastAdded(LinkType::Related),
            CarouselStrategy::CrossSell => CandidateSource::LinkedToLastAdded(LinkType::CrossSell),
        }
    }
}

/// Outcome of running a strategy, before the catalog is queried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Ordered(ProductOrder),
    /// Non-empty, duplicate-free candidate ids in priority order.
    Candidates(Vec<ProductId>),
    /// A data-driven strategy found no candidates; random products are shown instead.
    RandomFallback,
}

impl Selection {
    /// Keeps the first occurrence of every id and falls back to random
    /// selection when nothing is left.
    pub fn from_candidates(ids: impl IntoIterator<Item = ProductId>) -> Self {
        let mut seen = HashSet::new();
        let unique: Vec<ProductId> = ids.into_iter().filter(|id| seen.insert(*id)).collect();

        if unique.is_empty() {
            Selection::RandomFallback
        } else {
            Selection::Candidates(unique)
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Selection::RandomFallback)
    }

    /// Narrows `base` without modifying it.
    pub fn apply(&self, base: &CatalogQuery) -> CatalogQuery {
        match self {
            Selection::Ordered(order) => base.ordered_by(*order),
            Selection::Candidates(ids) => base
                .with_product_ids(ids.clone())
                .ordered_by(ProductOrder::CandidateOrder),
            Selection::RandomFallback => base.ordered_by(ProductOrder::Random),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::value_objects::StoreId;
    use strum::IntoEnumIterator;

    fn ids(values: &[i64]) -> Vec<ProductId> {
        values.iter().copied().map(ProductId::new).collect()
    }

    #[test]
    fn should_give_every_strategy_a_candidate_source() {
        let sources: Vec<CandidateSource> = CarouselStrategy::iter()
            .map(|strategy| strategy.candidate_source())
            .collect();

        assert_eq!(
            sources,
            vec![
                CandidateSource::BestSellers(ReportPeriod::Month),
                CandidateSource::Catalog(ProductOrder::NewestFirst),
                CandidateSource::Catalog(ProductOrder::Random),
                CandidateSource::LinkedToLastAdded(LinkType::UpSell),
                CandidateSource::LinkedToLastAdded(LinkType::Related),
                CandidateSource::LinkedToLastAdded(LinkType::CrossSell),
            ]
        );
    }

    #[test]
    fn should_fall_back_to_random_when_no_candidates() {
        let selection = Selection::from_candidates(Vec::new());
        assert!(selection.is_fallback());
    }

    #[test]
    fn should_deduplicate_candidates_preserving_first_occurrence() {
        let selection = Selection::from_candidates(ids(&[5, 3, 5, 9, 3]));
        assert_eq!(selection, Selection::Candidates(ids(&[5, 3, 9])));
    }

    #[test]
    fn should_filter_base_query_by_candidates() {
        let base = CatalogQuery::visible_in_store(StoreId::new(1));

        let query = Selection::Candidates(ids(&[3, 5])).apply(&base);

        assert_eq!(query.product_ids(), Some(ids(&[3, 5]).as_slice()));
        assert_eq!(query.order(), ProductOrder::CandidateOrder);
    }

    #[test]
    fn should_order_whole_catalog_randomly_on_fallback() {
        let base = CatalogQuery::visible_in_store(StoreId::new(1));

        let query = Selection::RandomFallback.apply(&base);

        assert!(query.product_ids().is_none());
        assert_eq!(query.order(), ProductOrder::Random);
        assert_eq!(query.statuses(), base.statuses());
        assert_eq!(query.visibilities(), base.visibilities());
    }

    #[test]
    fn should_apply_requested_order_without_id_filter() {
        let base = CatalogQuery::visible_in_store(StoreId::new(2));

        let query = Selection::Ordered(ProductOrder::NewestFirst).apply(&base);

        assert!(query.product_ids().is_none());
        assert_eq!(query.order(), ProductOrder::NewestFirst);
        assert_eq!(query.store_id(), StoreId::new(2));
    }
}
