use strum::IntoEnumIterator;
use strum_macros::EnumIter;

use super::errors::PopupCartError;

/// Product-selection strategy of the cart popup carousel.
///
/// Declaration order is the order of the admin option list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter)]
pub enum CarouselStrategy {
    BestSellers,
    Latest,
    #[default]
    Random,
    UpSell,
    Related,
    CrossSell,
}

impl CarouselStrategy {
    /// Stable machine value stored in configuration.
    pub fn value(&self) -> &'static str {
        match self {
            CarouselStrategy::BestSellers => "best_sellers",
            CarouselStrategy::Latest => "latest",
            CarouselStrategy::Random => "random",
            CarouselStrategy::UpSell => "up_sell",
            CarouselStrategy::Related => "related",
            CarouselStrategy::CrossSell => "cross_sell",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CarouselStrategy::BestSellers => "Best Sellers",
            CarouselStrategy::Latest => "Latest Products",
            CarouselStrategy::Random => "Random Products",
            CarouselStrategy::UpSell => "Up-Sell Products",
            CarouselStrategy::Related => "Related Products",
            CarouselStrategy::CrossSell => "Cross-Sell Products",
        }
    }

    /// Token written by earlier releases of the extension, still accepted on read.
    fn legacy_value(&self) -> &'static str {
        match self {
            CarouselStrategy::BestSellers => "_bestSellerProducts",
            CarouselStrategy::Latest => "_latestProducts",
            CarouselStrategy::Random => "_randomProducts",
            CarouselStrategy::UpSell => "_upSellingProducts",
            CarouselStrategy::Related => "_relatedProducts",
            CarouselStrategy::CrossSell => "_crossSellProducts",
        }
    }
}

impl std::fmt::Display for CarouselStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl std::str::FromStr for CarouselStrategy {
    type Err = PopupCartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        CarouselStrategy::iter()
            .find(|strategy| strategy.value() == token || strategy.legacy_value() == token)
            .ok_or_else(|| PopupCartError::UnknownStrategy(token.to_string()))
    }
}

/// Entry of the admin carousel select box.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselOption {
    pub value: String,
    pub label: String,
}

impl From<CarouselStrategy> for CarouselOption {
    fn from(strategy: CarouselStrategy) -> Self {
        Self {
            value: strategy.value().to_string(),
            label: strategy.label().to_string(),
        }
    }
}

/// Every selectable strategy, in display order.
pub fn carousel_options() -> Vec<CarouselOption> {
    CarouselStrategy::iter().map(CarouselOption::from).collect()
}
