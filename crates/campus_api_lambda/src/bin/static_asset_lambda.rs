use campus_api_lambda::adapters::s3::S3AssetStore;
use campus_api_lambda::config::RuntimeConfig;
use campus_api_lambda::handlers::response::ApiGatewayResponse;
use campus_api_lambda::handlers::static_asset::handle_static_asset_request;
use campus_api_lambda::logging::init_logging;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;

struct RuntimeDependencies {
    bucket: Option<String>,
    key: String,
    store: S3AssetStore,
}

async fn handle_request(
    _event: LambdaEvent<Value>,
    deps: &RuntimeDependencies,
) -> Result<ApiGatewayResponse, Error> {
    Ok(handle_static_asset_request(
        deps.bucket.as_deref(),
        &deps.key,
        &deps.store,
    ))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_logging();

    let config = RuntimeConfig::from_env();
    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;

    let deps = RuntimeDependencies {
        bucket: config.asset_bucket,
        key: config.asset_key,
        store: S3AssetStore::new(aws_sdk_s3::Client::new(&aws_config)),
    };
    tracing::info!(
        component = "static_asset_lambda",
        event = "runtime_started",
        bucket = deps.bucket.as_deref().unwrap_or("<unset>"),
        key = %deps.key,
        "static asset lambda started"
    );

    let deps = &deps;
    lambda_runtime::run(service_fn(move |event| handle_request(event, deps))).await
}
