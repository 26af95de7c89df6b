use serde_json::json;

use crate::adapters::object_store::AssetStore;
use crate::config::{ConfigError, ASSET_BUCKET_VAR};
use crate::error::HandlerError;
use crate::handlers::response::{
    error_response, html_response, misconfiguration_response, ApiGatewayResponse,
};

/// Serves the configured HTML object. Without a bucket the handler answers
/// with a configuration error and never calls the store.
pub fn handle_static_asset_request(
    bucket: Option<&str>,
    key: &str,
    store: &impl AssetStore,
) -> ApiGatewayResponse {
    match load_asset(bucket, key, store) {
        Ok(html) => {
            tracing::info!(
                component = "static_asset_handler",
                event = "asset_served",
                bucket = bucket.unwrap_or_default(),
                key = key,
                bytes = html.len(),
                "served static asset"
            );
            html_response(200, html)
        }
        Err(HandlerError::Misconfiguration(error)) => {
            misconfiguration_response(&error).with_cors()
        }
        Err(HandlerError::NotFound { resource }) => {
            tracing::warn!(
                component = "static_asset_handler",
                event = "asset_missing",
                bucket = bucket.unwrap_or_default(),
                key = %resource,
                "static asset not found"
            );
            error_response(
                404,
                json!({"error": "not_found", "message": "Asset not found"}),
            )
            .with_cors()
        }
        Err(error) => {
            tracing::error!(
                component = "static_asset_handler",
                event = "asset_failed",
                bucket = bucket.unwrap_or_default(),
                key = key,
                error = %error,
                "failed to load static asset"
            );
            error_response(
                500,
                json!({"error": "internal_error", "message": "Failed to load asset"}),
            )
            .with_cors()
        }
    }
}

pub fn load_asset(
    bucket: Option<&str>,
    key: &str,
    store: &impl AssetStore,
) -> Result<String, HandlerError> {
    let bucket = bucket
        .filter(|value| !value.trim().is_empty())
        .ok_or(ConfigError::Missing {
            variable: ASSET_BUCKET_VAR,
        })?;

    let bytes = store.get_object(bucket, key)?;
    String::from_utf8(bytes).map_err(|error| HandlerError::Storage {
        message: format!("object {key} is not UTF-8 text: {error}"),
    })
}
