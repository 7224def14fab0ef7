use lambda_runtime::{Error, LambdaEvent, service_fn};
use serde_json::Value;
use tldr_form::ai::InferenceClient;
use tldr_form::api::handler;
use tldr_form::core::config::AppConfig;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Error> {
    tldr_form::setup_logging();

    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;

    // Built once per execution environment and borrowed by every invocation.
    let summarizer = InferenceClient::from_config(&config)?;
    info!(endpoint = %summarizer.endpoint(), "Summarizer ready");

    let summarizer = &summarizer;
    let config = &config;
    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        handler(summarizer, config, event).await
    }))
    .await
}
