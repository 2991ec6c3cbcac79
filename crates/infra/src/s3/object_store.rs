use anyhow::{Context, Result};
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_s3::{Client, primitives::ByteStream};

use domain::repositories::object_store::ObjectStore;

pub struct S3ObjectStore {
    client: Client,
    bucket: String,
}

impl S3ObjectStore {
    pub async fn new(bucket: String) -> Self {
        let shared_config = aws_config::defaults(BehaviorVersion::latest()).load().await;
        Self {
            client: Client::new(&shared_config),
            bucket,
        }
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn put_object(&self, key: String, body: Vec<u8>, content_type: String) -> Result<()> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(&key)
            .body(ByteStream::from(body))
            .content_type(content_type)
            .send()
            .await
            .with_context(|| format!("failed to put {} to bucket {}", key, self.bucket))?;

        Ok(())
    }
}
