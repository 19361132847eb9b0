use aws_config::BehaviorVersion;
use aws_sdk_s3::Client as S3Client;
use aws_types::{region::Region, SdkConfig};
use lambda_runtime::{run, service_fn, tracing, Error, LambdaEvent};
use reqwest::Client as HttpClient;

mod config;
mod handler;
mod s3;
mod snapshot;
mod tfl;

use config::Config;
use handler::Response;
use s3::S3Store;
use snapshot::SystemClock;
use tfl::TflClient;

struct ClientHandler {
    tfl: TflClient,
    s3: S3Store,
}

impl ClientHandler {
    pub fn new(sdk_config: &SdkConfig, config: &Config) -> Self {
        Self {
            tfl: TflClient::new(HttpClient::new(), config.api_base.clone()),
            s3: S3Store::new(S3Client::new(sdk_config)),
        }
    }
}

async fn handler(
    _event: LambdaEvent<serde_json::Value>,
    config: &Config,
    clients: &ClientHandler,
) -> Result<Response, Error> {
    match handler::save_arrivals(config, &clients.tfl, &clients.s3, &SystemClock).await {
        Ok(response) => Ok(response),
        Err(e) => {
            tracing::error!("failed to save arrivals for {} :: {e:#}", config.line_id);
            Err(e.into())
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();

    let config = Config::from_env();
    let sdk_config = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(config.region.clone()))
        .load()
        .await;
    let clients = ClientHandler::new(&sdk_config, &config);
    tracing::info!(
        "saving {} arrivals to bucket {}",
        config.line_id,
        config.bucket
    );

    run(service_fn(|event| handler(event, &config, &clients))).await?;

    Ok(())
}
