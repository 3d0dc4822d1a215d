use poem::Request;
use poem_openapi::SecurityScheme;
use poem_openapi::auth::ApiKey;

use crate::config::admin_config::AdminConfig;

/// Admin API key sent in the `X-Api-Key` header.
#[derive(SecurityScheme)]
#[oai(
    ty = "api_key",
    key_name = "X-Api-Key",
    key_in = "header",
    checker = "admin_api_key_checker"
)]
pub struct AdminApiKey(pub ());

async fn admin_api_key_checker(req: &Request, api_key: ApiKey) -> Option<()> {
    let Some(config) = req.data::<AdminConfig>() else {
        tracing::error!("Admin configuration missing from request data");
        return None;
    };

    if config.accepts(&api_key.key) {
        Some(())
    } else {
        tracing::warn!("Rejected admin request with invalid API key");
        None
    }
}
