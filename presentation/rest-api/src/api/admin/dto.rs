use std::collections::BTreeMap;

use poem_openapi::{Enum, Object};

use business::domain::cart::model::CartSummaryMode;
use business::domain::popup_cart::settings::PopupCartSettings;
use business::domain::popup_cart::strategy::CarouselOption;
use business::domain::shared::value_objects::StoreId;

#[derive(Debug, Clone, Object)]
pub struct CarouselOptionResponse {
    pub value: String,
    pub label: String,
}

impl From<CarouselOption> for CarouselOptionResponse {
    fn from(option: CarouselOption) -> Self {
        Self {
            value: option.value,
            label: option.label,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CarouselOptionsResponse {
    /// Options in display order
    pub options: Vec<CarouselOptionResponse>,
    /// Same options keyed by value
    pub labels: BTreeMap<String, String>,
}

impl From<Vec<CarouselOption>> for CarouselOptionsResponse {
    fn from(options: Vec<CarouselOption>) -> Self {
        let labels = options
            .iter()
            .map(|o| (o.value.clone(), o.label.clone()))
            .collect();
        Self {
            options: options.into_iter().map(|o| o.into()).collect(),
            labels,
        }
    }
}

#[derive(Debug, Clone, Copy, Enum)]
pub enum CartSummaryModeDto {
    /// Sum of item quantities
    #[oai(rename = "quantity")]
    Quantity,
    /// Number of cart lines
    #[oai(rename = "lines")]
    Lines,
}

impl From<CartSummaryMode> for CartSummaryModeDto {
    fn from(mode: CartSummaryMode) -> Self {
        match mode {
            CartSummaryMode::Quantity => CartSummaryModeDto::Quantity,
            CartSummaryMode::Lines => CartSummaryModeDto::Lines,
        }
    }
}

impl From<CartSummaryModeDto> for CartSummaryMode {
    fn from(dto: CartSummaryModeDto) -> Self {
        match dto {
            CartSummaryModeDto::Quantity => CartSummaryMode::Quantity,
            CartSummaryModeDto::Lines => CartSummaryMode::Lines,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct PopupCartSettingsResponse {
    pub store_id: i64,
    /// Machine value of the carousel strategy
    pub strategy: String,
    pub strategy_label: String,
    pub page_size: u32,
    pub cart_summary: CartSummaryModeDto,
}

impl PopupCartSettingsResponse {
    pub fn new(store_id: StoreId, settings: PopupCartSettings) -> Self {
        Self {
            store_id: store_id.value(),
            strategy: settings.strategy.value().to_string(),
            strategy_label: settings.strategy.label().to_string(),
            page_size: u32::try_from(settings.page_size).unwrap_or(u32::MAX),
            cart_summary: settings.summary_mode.into(),
        }
    }
}

/// Omitted fields keep their current value.
#[derive(Debug, Clone, Object)]
pub struct UpdatePopupCartSettingsRequest {
    /// Carousel strategy value, see `/admin/popup-cart/carousel-options`
    pub strategy: Option<String>,
    /// Number of carousel products, 1 to 12
    pub page_size: Option<u32>,
    pub cart_summary: Option<CartSummaryModeDto>,
}
