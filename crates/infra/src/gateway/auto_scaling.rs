use anyhow::{Context, Result};
use async_trait::async_trait;

use application::interfaces::gateway::{GatewayClient, GatewayResponse};
use domain::value_objects::recording_requests::RecordingRequest;

/// Forwards the recording request to the autoscaling-group-fronted
/// launcher function over HTTP.
pub struct AutoScalingGateway {
    http: reqwest::Client,
    url: String,
}

impl AutoScalingGateway {
    pub fn new(http: reqwest::Client, url: String) -> Self {
        Self { http, url }
    }
}

#[async_trait]
impl GatewayClient for AutoScalingGateway {
    async fn invoke(&self, request: &RecordingRequest) -> Result<GatewayResponse> {
        let payload = serde_json::json!({
            "name": request.platform.to_string(),
            "meeting_id": request.meeting_id,
            "host_access_token": request.host_access_token,
        });

        let response = self
            .http
            .post(&self.url)
            .json(&payload)
            .send()
            .await
            .context("auto scaling request failed")?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .context("failed to read auto scaling response body")?;

        Ok(GatewayResponse { status, body })
    }
}
