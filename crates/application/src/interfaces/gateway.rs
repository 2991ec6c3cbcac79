use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use domain::value_objects::recording_requests::RecordingRequest;

#[derive(Debug, Clone)]
pub struct GatewayResponse {
    pub status: u16,
    pub body: String,
}

/// Proxy to the autoscaling-group-fronted launcher function. `Err` is
/// transport failure; non-200 statuses come back as responses and the
/// use case decides whether to retry them.
#[async_trait]
#[automock]
pub trait GatewayClient {
    async fn invoke(&self, request: &RecordingRequest) -> Result<GatewayResponse>;
}
