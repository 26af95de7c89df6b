use campus_api_core::contract::{ItemCreatedResponse, ITEM_CREATED_MESSAGE};
use campus_api_core::items::{prepare_new_item, resolve_item_route, ItemId, ItemRoute};
use campus_api_core::storage_keys::item_key;
use campus_api_core::stored_value::{record_from_json, record_to_json};
use serde_json::{json, Value};

use crate::adapters::key_value_store::KeyValueStore;
use crate::error::HandlerError;
use crate::handlers::event::HttpApiEvent;
use crate::handlers::response::{error_response, json_response, ApiGatewayResponse};

const CREATE_FAILED_MESSAGE: &str = "Failed to create item";
const READ_FAILED_MESSAGE: &str = "Failed to read item";

pub fn handle_items_event(event: Value, table: &impl KeyValueStore) -> ApiGatewayResponse {
    let event = match HttpApiEvent::from_value(event) {
        Ok(value) => value,
        Err(error) => {
            return error_response(
                400,
                json!({
                    "message": "Malformed request",
                    "error": "validation_error",
                    "detail": error.message(),
                }),
            )
        }
    };

    match resolve_item_route(event.method(), event.path(), event.path_parameter("id")) {
        ItemRoute::Create => match create_item(&event, table) {
            Ok(created) => {
                tracing::info!(
                    component = "items_handler",
                    event = "item_created",
                    id = %created.id,
                    "item created"
                );
                json_response(201, &created)
            }
            Err(error) => failure_response(CREATE_FAILED_MESSAGE, &error),
        },
        ItemRoute::Read { id } => match read_item(&id, table) {
            Ok(item) => {
                tracing::info!(
                    component = "items_handler",
                    event = "item_read",
                    id = %id,
                    "item read"
                );
                json_response(200, &item)
            }
            Err(HandlerError::NotFound { resource }) => {
                tracing::info!(
                    component = "items_handler",
                    event = "item_missing",
                    id = %resource,
                    "item not found"
                );
                error_response(
                    404,
                    json!({"message": format!("Item with ID {resource} not found")}),
                )
            }
            Err(error) => failure_response(READ_FAILED_MESSAGE, &error),
        },
        ItemRoute::Unsupported => {
            let error = HandlerError::UnsupportedRoute {
                method: event.method().to_string(),
                path: event.path().to_string(),
            };
            tracing::warn!(
                component = "items_handler",
                event = "unsupported_route",
                error = %error,
                "unsupported method/path"
            );
            error_response(400, json!({"message": error.to_string()}))
        }
    }
}

/// Stamps the body with a fresh id and writes it in a single put.
pub fn create_item(
    event: &HttpApiEvent,
    table: &impl KeyValueStore,
) -> Result<ItemCreatedResponse, HandlerError> {
    let body = event.body_text()?;
    let id = ItemId::generate();
    let item = prepare_new_item(&body, &id)?;

    table.put_record(&record_from_json(&item))?;

    Ok(ItemCreatedResponse {
        message: ITEM_CREATED_MESSAGE.to_string(),
        id: id.to_string(),
        item,
    })
}

pub fn read_item(id: &str, table: &impl KeyValueStore) -> Result<Value, HandlerError> {
    table
        .get_record(&item_key(id))?
        .map(|record| record_to_json(&record))
        .ok_or_else(|| HandlerError::NotFound {
            resource: id.to_string(),
        })
}

/// Client mistakes are reported as such; internal failures are logged in
/// full and answered without detail.
fn failure_response(message: &str, error: &HandlerError) -> ApiGatewayResponse {
    match error {
        HandlerError::InvalidInput(validation) => {
            tracing::warn!(
                component = "items_handler",
                event = "validation_failed",
                error = %validation,
                "rejected item request"
            );
            error_response(
                400,
                json!({
                    "message": message,
                    "error": "validation_error",
                    "detail": validation.message(),
                }),
            )
        }
        _ => {
            tracing::error!(
                component = "items_handler",
                event = "storage_failed",
                error = %error,
                "{message}"
            );
            error_response(500, json!({"message": message, "error": "storage_error"}))
        }
    }
}
