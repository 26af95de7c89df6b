use campus_api_core::schedule::ResponseProfile;
use campus_api_lambda::adapters::dynamodb::DynamoDbTable;
use campus_api_lambda::config::{ConfigError, RuntimeConfig};
use campus_api_lambda::handlers::response::{misconfiguration_response, ApiGatewayResponse};
use campus_api_lambda::handlers::schedule::handle_schedule_event;
use campus_api_lambda::logging::init_logging;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;

struct RuntimeDependencies {
    table: Result<DynamoDbTable, ConfigError>,
    profile: ResponseProfile,
}

async fn handle_request(
    event: LambdaEvent<Value>,
    deps: &RuntimeDependencies,
) -> Result<ApiGatewayResponse, Error> {
    let response = match &deps.table {
        Ok(table) => handle_schedule_event(event.payload, table, deps.profile),
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

    let deps = RuntimeDependencies {
        table: config
            .schedule_table()
            .map(|name| DynamoDbTable::new(dynamodb_client, name)),
        profile: config.response_profile,
    };
    tracing::info!(
        component = "schedule_lambda",
        event = "runtime_started",
        table = deps.table.as_ref().map(DynamoDbTable::table_name).unwrap_or("<unset>"),
        profile = deps.profile.as_str(),
        "schedule lambda started"
    );

    let deps = &deps;
    lambda_runtime::run(service_fn(move |event| handle_request(event, deps))).await
}
