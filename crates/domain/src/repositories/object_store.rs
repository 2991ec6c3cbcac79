use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

/// Write-once blob storage. Nothing written here is ever read back by
/// this system.
#[async_trait]
#[automock]
pub trait ObjectStore {
    async fn put_object(&self, key: String, body: Vec<u8>, content_type: String) -> Result<()>;
}
