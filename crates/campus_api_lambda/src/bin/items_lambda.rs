use campus_api_lambda::adapters::dynamodb::DynamoDbTable;
use campus_api_lambda::config::{ConfigError, RuntimeConfig};
use campus_api_lambda::handlers::items::handle_items_event;
use campus_api_lambda::handlers::response::{misconfiguration_response, ApiGatewayResponse};
use campus_api_lambda::logging::init_logging;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;

async fn handle_request(
    event: LambdaEvent<Value>,
    table: &Result<DynamoDbTable, ConfigError>,
) -> Result<ApiGatewayResponse, Error> {
    let response = match table {
        Ok(table) => handle_items_event(event.payload, table),
        Err(error) => misconfiguration_response(error),
    };
    Ok(response)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_logging();

    let config = RuntimeConfig::from_env();
    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let dynamodb_client = aws_sdk_dynamodb::Client::new(&aws_config);

    let table = config
        .items_table()
        .map(|name| DynamoDbTable::new(dynamodb_client, name));
    tracing::info!(
        component = "items_lambda",
        event = "runtime_started",
        table = table.as_ref().map(DynamoDbTable::table_name).unwrap_or("<unset>"),
        "items lambda started"
    );

    let table = &table;
    lambda_runtime::run(service_fn(move |event| handle_request(event, table))).await
}
