use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use lambda_runtime::tracing;
use reqwest::{Client, StatusCode, Url};
use serde_json::Value;

/// Decoded arrivals body along with the status TfL answered with.
#[derive(Debug, Clone)]
pub struct Arrivals {
    pub status: StatusCode,
    pub body: Value,
}

impl Arrivals {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// The `message` field of a TfL error envelope.
    pub fn error_message(&self) -> &str {
        self.body
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("Unknown error")
    }
}

#[async_trait]
pub trait ArrivalSource: Send + Sync {
    async fn fetch_arrivals(&self, line_id: &str) -> Result<Arrivals>;
}

pub struct TflClient {
    http: Client,
    api_base: String,
}

impl TflClient {
    pub fn new(http: Client, api_base: impl Into<String>) -> Self {
        Self {
            http,
            api_base: api_base.into().trim_end_matches('/').to_string(),
        }
    }

    /// `line_id` always lands in a single path segment, percent-encoded.
    fn arrivals_url(&self, line_id: &str) -> Result<Url> {
        let mut url = Url::parse(&self.api_base)
            .with_context(|| format!("invalid TfL api base {}", self.api_base))?;
        url.path_segments_mut()
            .map_err(|_| anyhow!("TfL api base {} cannot take a path", self.api_base))?
            .pop_if_empty()
            .extend(["line", line_id, "arrivals"]);

        Ok(url)
    }
}

#[async_trait]
impl ArrivalSource for TflClient {
    async fn fetch_arrivals(&self, line_id: &str) -> Result<Arrivals> {
        let url = self.arrivals_url(line_id)?;
        let response = self
            .http
            .get(url.clone())
            .header("accept", "application/json")
            .header("user-agent", "reqwest")
            .send()
            .await
            .with_context(|| format!("GET {url}"))?;

        let status = response.status();
        let data = response
            .bytes()
            .await
            .with_context(|| format!("reading body of {url}"))?;
        // Error pages from gateways in front of TfL are not always JSON.
        let body: Value = if status.is_success() {
            serde_json::from_slice(&data)
                .with_context(|| format!("decoding arrivals from {url}"))?
        } else {
            serde_json::from_slice(&data).unwrap_or(Value::Null)
        };
        tracing::info!("fetched arrivals for {line_id} :: status {status}");

        Ok(Arrivals { status, body })
    }
}
