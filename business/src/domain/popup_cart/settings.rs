use crate::domain::cart::model::CartSummaryMode;
use crate::domain::shared::value_objects::StoreId;

use super::errors::PopupCartError;
use super::repository::SettingsRepository;
use super::strategy::CarouselStrategy;

pub const CONFIG_CAROUSEL_STRATEGY: &str = "cartpopup/settings/product_carousel";
pub const CONFIG_PRODUCT_LIMIT: &str = "cartpopup/settings/product_limit";
pub const CONFIG_CART_SUMMARY_USE_QTY: &str = "checkout/cart_link/use_qty";

pub const DEFAULT_PRODUCT_LIMIT: usize = 4;
pub const MAX_PRODUCT_LIMIT: usize = 12;

#[derive(Debug, Clone, PartialEq)]
pub struct PopupCartSettings {
    pub strategy: CarouselStrategy,
    /// Maximum number of carousel products, within 1..=[`MAX_PRODUCT_LIMIT`].
    pub page_size: usize,
    pub summary_mode: CartSummaryMode,
}

impl Default for PopupCartSettings {
    fn default() -> Self {
        Self {
            strategy: CarouselStrategy::default(),
            page_size: DEFAULT_PRODUCT_LIMIT,
            summary_mode: CartSummaryMode::default(),
        }
    }
}

impl PopupCartSettings {
    /// Resolves the settings of `store_id`. Missing values take their defaults;
    /// values that are present but unusable are rejected.
    pub async fn load(
        repository: &dyn SettingsRepository,
        store_id: StoreId,
    ) -> Result<Self, PopupCartError> {
        let strategy = repository
            .get_value(store_id, CONFIG_CAROUSEL_STRATEGY)
            .await?;
        let page_size = repository.get_value(store_id, CONFIG_PRODUCT_LIMIT).await?;
        let use_qty = repository
            .get_value(store_id, CONFIG_CART_SUMMARY_USE_QTY)
            .await?;

        Self::from_values(strategy.as_deref(), page_size.as_deref(), use_qty.as_deref())
    }

    pub fn from_values(
        strategy: Option<&str>,
        page_size: Option<&str>,
        use_qty: Option<&str>,
    ) -> Result<Self, PopupCartError> {
        let defaults = Self::default();

        let strategy = match strategy.map(str::trim).filter(|s| !s.is_empty()) {
            Some(token) => token.parse()?,
            None => defaults.strategy,
        };
        let page_size = match page_size.map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => {
                let parsed = raw
                    .parse::<usize>()
                    .map_err(|_| PopupCartError::InvalidPageSize(raw.to_string()))?;
                validate_page_size(parsed)?
            }
            None => defaults.page_size,
        };
        let summary_mode = use_qty
            .map(CartSummaryMode::from_flag)
            .unwrap_or(defaults.summary_mode);

        Ok(Self {
            strategy,
            page_size,
            summary_mode,
        })
    }
}

pub fn validate_page_size(page_size: usize) -> Result<usize, PopupCartError> {
    if (1..=MAX_PRODUCT_LIMIT).contains(&page_size) {
        Ok(page_size)
    } else {
        Err(PopupCartError::InvalidPageSize(page_size.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_use_defaults_when_nothing_configured() {
        let settings = PopupCartSettings::from_values(None, None, None).unwrap();

        assert_eq!(settings, PopupCartSettings::default());
        assert_eq!(settings.strategy, CarouselStrategy::Random);
        assert_eq!(settings.page_size, 4);
        assert_eq!(settings.summary_mode, CartSummaryMode::Quantity);
    }

    #[test]
    fn should_read_configured_values() {
        let settings =
            PopupCartSettings::from_values(Some("cross_sell"), Some("6"), Some("0")).unwrap();

        assert_eq!(settings.strategy, CarouselStrategy::CrossSell);
        assert_eq!(settings.page_size, 6);
        assert_eq!(settings.summary_mode, CartSummaryMode::Lines);
    }

    #[test]
    fn should_treat_blank_values_as_missing() {
        let settings = PopupCartSettings::from_values(Some("  "), Some(""), None).unwrap();
        assert_eq!(settings, PopupCartSettings::default());
    }

    #[test]
    fn should_reject_unknown_strategy_token() {
        let result = PopupCartSettings::from_values(Some("most_viewed"), None, None);

        assert!(matches!(
            result.unwrap_err(),
            PopupCartError::UnknownStrategy(token) if token == "most_viewed"
        ));
    }

    #[test]
    fn should_reject_non_numeric_page_size() {
        let result = PopupCartSettings::from_values(None, Some("four"), None);
        assert!(matches!(
            result.unwrap_err(),
            PopupCartError::InvalidPageSize(_)
        ));
    }

    #[test]
    fn should_reject_page_size_outside_bounds() {
        assert!(validate_page_size(0).is_err());
        assert!(validate_page_size(MAX_PRODUCT_LIMIT + 1).is_err());
        assert_eq!(validate_page_size(1).unwrap(), 1);
        assert_eq!(validate_page_size(MAX_PRODUCT_LIMIT).unwrap(), MAX_PRODUCT_LIMIT);
    }
}
