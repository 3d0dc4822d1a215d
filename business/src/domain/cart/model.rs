use chrono::{DateTime, Utc};

use crate::domain::shared::value_objects::{CartId, ProductId, StoreId};

/// How the cart link counts its contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CartSummaryMode {
    /// Sum of item quantities.
    #[default]
    Quantity,
    /// Number of distinct lines.
    Lines,
}

impl CartSummaryMode {
    /// Reads the stored `use_qty` flag: `"0"` counts lines, anything else quantities.
    pub fn from_flag(flag: &str) -> Self {
        match flag.trim() {
            "0" => CartSummaryMode::Lines,
            _ => CartSummaryMode::Quantity,
        }
    }

    pub fn as_flag(&self) -> &'static str {
        match self {
            CartSummaryMode::Quantity => "1",
            CartSummaryMode::Lines => "0",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub product_id: ProductId,
    pub qty: u32,
}

#[derive(Debug, Clone)]
pub struct Cart {
    pub id: CartId,
    pub store_id: StoreId,
    pub items: Vec<CartItem>,
    pub last_added_product_id: Option<ProductId>,
    pub updated_at: DateTime<Utc>,
}

impl Cart {
    pub fn summary_count(&self, mode: CartSummaryMode) -> u32 {
        match mode {
            CartSummaryMode::Quantity => self
                .items
                .iter()
                .fold(0u32, |total, item| total.saturating_add(item.qty)),
            CartSummaryMode::Lines => u32::try_from(self.items.len()).unwrap_or(u32::MAX),
        }
    }
}
