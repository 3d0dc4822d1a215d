use crate::domain::catalog::decorator::DisplayableProduct;

/// Data rendered by the cart popup: cart count plus the carousel products.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionPayload {
    pub cart_total_count: u32,
    /// Carousel products, in catalog query order.
    pub products: Vec<DisplayableProduct>,
}
