use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Header, Query},
    payload::Json,
};

use business::domain::popup_cart::errors::PopupCartError;
use business::domain::popup_cart::use_cases::get_section_data::{
    GetSectionDataParams, GetSectionDataUseCase,
};
use business::domain::shared::value_objects::{CartId, StoreId};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::popup_cart::dto::SectionPayloadResponse;
use crate::api::tags::ApiTags;

pub struct PopupCartApi {
    get_section_data_use_case: Arc<dyn GetSectionDataUseCase>,
    default_store_id: StoreId,
}

impl PopupCartApi {
    pub fn new(
        get_section_data_use_case: Arc<dyn GetSectionDataUseCase>,
        default_store_id: StoreId,
    ) -> Self {
        Self {
            get_section_data_use_case,
            default_store_id,
        }
    }
}

/// Popup cart storefront API
#[OpenApi]
impl PopupCartApi {
    /// Get popup cart section data
    ///
    /// Returns the cart item count and the carousel products chosen by the
    /// configured strategy. Visitors without a cart omit `X-Cart-Id` and get a
    /// count of zero.
    #[oai(path = "/popup-cart/section", method = "get", tag = "ApiTags::PopupCart")]
    async fn get_section(
        &self,
        /// Store view to render for (default: DEFAULT_STORE_ID)
        store_id: Query<Option<i64>>,
        /// Cart of the calling session
        #[oai(name = "X-Cart-Id")]
        cart_id: Header<Option<String>>,
    ) -> GetSectionResponse {
        let store_id = match store_id.0 {
            Some(id) if id < 0 => {
                return GetSectionResponse::BadRequest(ErrorResponse::json(
                    "ValidationError",
                    "popup_cart.invalid_store_id",
                ));
            }
            Some(id) => StoreId::new(id),
            None => self.default_store_id,
        };

        let cart_id = match cart_id.0.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => match raw.parse::<CartId>() {
                Ok(id) => Some(id),
                Err(_) => {
                    return GetSectionResponse::BadRequest(ErrorResponse::json(
                        "ValidationError",
                        "popup_cart.invalid_cart_id",
                    ));
                }
            },
        };

        match self
            .get_section_data_use_case
            .execute(GetSectionDataParams { store_id, cart_id })
            .await
        {
            Ok(payload) => GetSectionResponse::Ok(Json(payload.into())),
            // Stored settings are broken; the caller cannot fix that.
            Err(
                err @ (PopupCartError::UnknownStrategy(_) | PopupCartError::InvalidPageSize(_)),
            ) => GetSectionResponse::InternalError(ErrorResponse::json(
                "ConfigurationError",
                err.to_string(),
            )),
            Err(err) => {
                let (_, json) = err.into_error_response();
                GetSectionResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetSectionResponse {
    #[oai(status = 200)]
    Ok(Json<SectionPayloadResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use business::domain::catalog::decorator::DisplayableProduct;
    use business::domain::errors::RepositoryError;
    use business::domain::popup_cart::model::SectionPayload;
    use business::domain::shared::value_objects::ProductId;
    use poem::Route;
    use poem::http::StatusCode;
    use poem::test::TestClient;
    use poem_openapi::OpenApiService;
    use serde_json::{Map, Value};
    use std::sync::Mutex;

    enum Outcome {
        Payload,
        Error(PopupCartError),
    }

    struct StubSectionData {
        outcome: Mutex<Option<Outcome>>,
        received: Mutex<Option<(StoreId, Option<CartId>)>>,
    }

    impl StubSectionData {
        fn new(outcome: Outcome) -> Arc<Self> {
            Arc::new(Self {
                outcome: Mutex::new(Some(outcome)),
                received: Mutex::new(None),
            })
        }
    }

    #[async_trait]
    impl GetSectionDataUseCase for StubSectionData {
        async fn execute(
            &self,
            params: GetSectionDataParams,
        ) -> Result<SectionPayload, PopupCartError> {
            *self.received.lock().unwrap() = Some((params.store_id, params.cart_id));
            match self.outcome.lock().unwrap().take() {
                Some(Outcome::Error(err)) => Err(err),
                _ => Ok(SectionPayload {
                    cart_total_count: 3,
                    products: vec![DisplayableProduct {
                        id: ProductId::new(14),
                        sku: "24-WB04".to_string(),
                        name: "Overnight Duffle".to_string(),
                        product_url: "https://shop.example.com/overnight-duffle.html".to_string(),
                        product_image: "https://shop.example.com/media/catalog/product/w/b/wb04.jpg"
                            .to_string(),
                        product_price: "$45.00".to_string(),
                        attributes: Map::from_iter([(
                            "color".to_string(),
                            Value::String("gray".to_string()),
                        )]),
                    }],
                }),
            }
        }
    }

    fn client(stub: Arc<StubSectionData>) -> TestClient<Route> {
        let api = OpenApiService::new(PopupCartApi::new(stub, StoreId::new(1)), "test", "0.1.0");
        TestClient::new(Route::new().nest("/", api))
    }

    #[tokio::test]
    async fn should_return_section_payload() {
        let stub = StubSectionData::new(Outcome::Payload);
        let client = client(stub.clone());

        let response = client
            .get("/popup-cart/section")
            .query("store_id", &2)
            .header("X-Cart-Id", "4f9c1a8e-2c1b-4c7a-9a55-0c2d3b9f6e11")
            .send()
            .await;

        response.assert_status_is_ok();
        let json = response.json().await;
        let body = json.value().object();
        body.get("cartTotalCount").assert_i64(3);
        let products = body.get("products").array();
        products.assert_len(1);
        let product = products.get(0).object();
        product.get("entity_id").assert_i64(14);
        product.get("product_price").assert_string("$45.00");
        product.get("color").assert_string("gray");

        let (store_id, cart_id) = stub.received.lock().unwrap().take().unwrap();
        assert_eq!(store_id, StoreId::new(2));
        assert!(cart_id.is_some());
    }

    #[tokio::test]
    async fn should_use_default_store_and_no_cart_when_omitted() {
        let stub = StubSectionData::new(Outcome::Payload);
        let client = client(stub.clone());

        client
            .get("/popup-cart/section")
            .send()
            .await
            .assert_status_is_ok();

        let (store_id, cart_id) = stub.received.lock().unwrap().take().unwrap();
        assert_eq!(store_id, StoreId::new(1));
        assert!(cart_id.is_none());
    }

    #[tokio::test]
    async fn should_reject_malformed_cart_id() {
        let stub = StubSectionData::new(Outcome::Payload);
        let client = client(stub.clone());

        let response = client
            .get("/popup-cart/section")
            .header("X-Cart-Id", "not-a-uuid")
            .send()
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert!(stub.received.lock().unwrap().is_none());
    }

    #[tokio::test]
    async fn should_report_unknown_strategy_as_configuration_error() {
        let stub = StubSectionData::new(Outcome::Error(PopupCartError::UnknownStrategy(
            "_mostViewedProducts".to_string(),
        )));
        let client = client(stub);

        let response = client.get("/popup-cart/section").send().await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let json = response.json().await;
        let body = json.value().object();
        body.get("name").assert_string("ConfigurationError");
        body.get("message").assert_string("popup_cart.unknown_strategy");
    }

    #[tokio::test]
    async fn should_report_repository_failure_as_internal_error() {
        let stub = StubSectionData::new(Outcome::Error(PopupCartError::Repository(
            RepositoryError::DatabaseError,
        )));
        let client = client(stub);

        let response = client.get("/popup-cart/section").send().await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        response
            .json()
            .await
            .value()
            .object()
            .get("name")
            .assert_string("InternalError");
    }
}
