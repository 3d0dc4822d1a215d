use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::popup_cart::strategy::{CarouselOption, carousel_options};
use crate::domain::popup_cart::use_cases::get_carousel_options::GetCarouselOptionsUseCase;

pub struct GetCarouselOptionsUseCaseImpl {
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCarouselOptionsUseCase for GetCarouselOptionsUseCaseImpl {
    async fn execute(&self) -> Vec<CarouselOption> {
        let options = carousel_options();
        self.logger
            .debug(&format!("Listing {} carousel options", options.len()));
        options
    }
}
