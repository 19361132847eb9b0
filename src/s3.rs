use anyhow::{Context, Result};
use async_trait::async_trait;
use aws_sdk_s3::{primitives::ByteStream, Client};
use serde::Serialize;

pub const JSON_CONTENT_TYPE: &str = "application/json";

#[async_trait]
pub trait SnapshotStore: Send + Sync {
    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<()>;
}

pub struct S3Store {
    client: Client,
}

impl S3Store {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SnapshotStore for S3Store {
    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<()> {
        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .content_type(content_type)
            .body(ByteStream::from(body))
            .send()
            .await
            .with_context(|| format!("writing s3://{bucket}/{key}"))?;

        Ok(())
    }
}

/// Serializes `data` compactly and writes it as a single JSON object.
pub async fn upload_snapshot<T: Serialize + ?Sized>(
    store: &dyn SnapshotStore,
    bucket: &str,
    key: &str,
    data: &T,
) -> Result<()> {
    let body = serde_json::to_vec(data).context("serializing snapshot")?;
    store.put_object(bucket, key, body, JSON_CONTENT_TYPE).await
}
