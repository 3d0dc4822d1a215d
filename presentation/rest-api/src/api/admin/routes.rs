use std::sync::Arc;

use poem_openapi::{OpenApi, param::Query, payload::Json};

use business::domain::popup_cart::use_cases::get_carousel_options::GetCarouselOptionsUseCase;
use business::domain::popup_cart::use_cases::get_settings::{
    GetPopupCartSettingsParams, GetPopupCartSettingsUseCase,
};
use business::domain::popup_cart::use_cases::update_settings::{
    UpdatePopupCartSettingsParams, UpdatePopupCartSettingsUseCase,
};
use business::domain::shared::value_objects::StoreId;

use crate::api::admin::dto::{
    CarouselOptionsResponse, PopupCartSettingsResponse, UpdatePopupCartSettingsRequest,
};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::AdminApiKey;
use crate::api::tags::ApiTags;

pub struct AdminApi {
    get_carousel_options_use_case: Arc<dyn GetCarouselOptionsUseCase>,
    get_settings_use_case: Arc<dyn GetPopupCartSettingsUseCase>,
    update_settings_use_case: Arc<dyn UpdatePopupCartSettingsUseCase>,
}

impl AdminApi {
    pub fn new(
        get_carousel_options_use_case: Arc<dyn GetCarouselOptionsUseCase>,
        get_settings_use_case: Arc<dyn GetPopupCartSettingsUseCase>,
        update_settings_use_case: Arc<dyn UpdatePopupCartSettingsUseCase>,
    ) -> Self {
        Self {
            get_carousel_options_use_case,
            get_settings_use_case,
            update_settings_use_case,
        }
    }
}

/// Settings scope of a request; omitted means the default scope shared by all stores.
fn scope(store_id: Option<i64>) -> Result<StoreId, Json<ErrorResponse>> {
    match store_id {
        Some(id) if id < 0 => Err(ErrorResponse::json(
            "ValidationError",
            "popup_cart.invalid_store_id",
        )),
        Some(id) => Ok(StoreId::new(id)),
        None => Ok(StoreId::ADMIN),
    }
}

/// Popup cart administration API
///
/// Every endpoint requires the `X-Api-Key` header.
#[OpenApi]
impl AdminApi {
    /// List carousel strategies
    ///
    /// Options for the carousel select box, in display order.
    #[oai(
        path = "/admin/popup-cart/carousel-options",
        method = "get",
        tag = "ApiTags::Admin"
    )]
    async fn get_carousel_options(&self, _auth: AdminApiKey) -> Json<CarouselOptionsResponse> {
        Json(self.get_carousel_options_use_case.execute().await.into())
    }

    /// Get popup cart settings
    ///
    /// Settings as resolved for the store, falling back to the default scope.
    #[oai(path = "/admin/popup-cart/settings", method = "get", tag = "ApiTags::Admin")]
    async fn get_settings(
        &self,
        _auth: AdminApiKey,
        /// Store scope (default: the scope shared by all stores)
        store_id: Query<Option<i64>>,
    ) -> GetSettingsResponse {
        let store_id = match scope(store_id.0) {
            Ok(store_id) => store_id,
            Err(json) => return GetSettingsResponse::BadRequest(json),
        };

        match self
            .get_settings_use_case
            .execute(GetPopupCartSettingsParams { store_id })
            .await
        {
            Ok(settings) => {
                GetSettingsResponse::Ok(Json(PopupCartSettingsResponse::new(store_id, settings)))
            }
            Err(err) => {
                let (_, json) = err.into_error_response();
                GetSettingsResponse::InternalError(json)
            }
        }
    }

    /// Update popup cart settings
    ///
    /// Validates every provided value before storing any of them.
    #[oai(path = "/admin/popup-cart/settings", method = "put", tag = "ApiTags::Admin")]
    async fn update_settings(
        &self,
        _auth: AdminApiKey,
        /// Store scope (default: the scope shared by all stores)
        store_id: Query<Option<i64>>,
        body: Json<UpdatePopupCartSettingsRequest>,
    ) -> UpdateSettingsResponse {
        let store_id = match scope(store_id.0) {
            Ok(store_id) => store_id,
            Err(json) => return UpdateSettingsResponse::BadRequest(json),
        };

        let params = UpdatePopupCartSettingsParams {
            store_id,
            strategy: body.0.strategy,
            page_size: body.0.page_size.map(|size| size as usize),
            summary_mode: body.0.cart_summary.map(|mode| mode.into()),
        };

        match self.update_settings_use_case.execute(params).await {
            Ok(settings) => UpdateSettingsResponse::Ok(Json(PopupCartSettingsResponse::new(
                store_id, settings,
            ))),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateSettingsResponse::BadRequest(json),
                    _ => UpdateSettingsResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetSettingsResponse {
    #[oai(status = 200)]
    Ok(Json<PopupCartSettingsResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateSettingsResponse {
    #[oai(status = 200)]
    Ok(Json<PopupCartSettingsResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
