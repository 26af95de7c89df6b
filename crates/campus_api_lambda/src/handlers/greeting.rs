use campus_api_core::contract::{GreetingResponse, GREETING_MESSAGE};
use serde_json::Value;

use crate::handlers::event::HttpApiEvent;
use crate::handlers::response::{json_response, ApiGatewayResponse};

pub fn handle_greeting_event(event: Value) -> ApiGatewayResponse {
    let request = HttpApiEvent::from_value(event).unwrap_or_default();
    tracing::info!(
        component = "greeting_handler",
        event = "greeting_served",
        method = request.method(),
        path = request.path(),
        "greeting served"
    );

    json_response(
        200,
        &GreetingResponse {
            message: GREETING_MESSAGE.to_string(),
        },
    )
}
