use anyhow::Result;
use lambda_runtime::tracing;
use serde::Serialize;

use crate::{
    config::Config,
    s3::{self, SnapshotStore},
    snapshot::{self, Clock},
    tfl::ArrivalSource,
};

/// Gateway-shaped result of one invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub status_code: u16,
    pub body: String,
}

/// Fetches the configured line's arrivals and stores them as a timestamped snapshot.
///
/// A non-success answer from TfL is reported in the response and nothing is
/// written. Transport, decoding and storage failures are returned as errors.
pub async fn save_arrivals(
    config: &Config,
    source: &dyn ArrivalSource,
    store: &dyn SnapshotStore,
    clock: &dyn Clock,
) -> Result<Response> {
    let line_id = config.line_id.as_str();
    let arrivals = source.fetch_arrivals(line_id).await?;

    if !arrivals.is_success() {
        let message = arrivals.error_message();
        tracing::warn!(
            "tfl rejected arrivals request for {line_id} :: {} :: {message}",
            arrivals.status
        );
        return Ok(Response {
            status_code: arrivals.status.as_u16(),
            body: format!("Failed to fetch arrivals for line {line_id}. Error: {message}"),
        });
    }

    let key = snapshot::snapshot_key(line_id, clock.now());
    s3::upload_snapshot(store, &config.bucket, &key, &arrivals.body).await?;
    tracing::info!("uploaded arrivals to s3://{}/{key}", config.bucket);

    Ok(Response {
        status_code: 200,
        body: format!("Arrivals data for {line_id} saved as {key}"),
    })
}
