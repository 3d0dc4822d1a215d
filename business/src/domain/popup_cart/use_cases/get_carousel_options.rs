use async_trait::async_trait;

use crate::domain::popup_cart::strategy::CarouselOption;

#[async_trait]
pub trait GetCarouselOptionsUseCase: Send + Sync {
    async fn execute(&self) -> Vec<CarouselOption>;
}
