use campus_api_lambda::handlers::greeting::handle_greeting_event;
use campus_api_lambda::handlers::response::ApiGatewayResponse;
use campus_api_lambda::logging::init_logging;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;

async fn handle_request(event: LambdaEvent<Value>) -> Result<ApiGatewayResponse, Error> {
    Ok(handle_greeting_event(event.payload))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_logging();
    lambda_runtime::run(service_fn(handle_request)).await
}
