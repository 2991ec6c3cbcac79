use anyhow::{Context, Result};
use async_trait::async_trait;

use application::interfaces::providers::ProviderProbe;
use domain::value_objects::{recording_requests::RecordingRequest, timelines::Timeline};

/// Fetches recording metadata for the meeting using the host's bearer
/// token from the request itself.
pub struct ZoomProbe {
    http: reqwest::Client,
}

impl ZoomProbe {
    pub fn new(http: reqwest::Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl ProviderProbe for ZoomProbe {
    async fn probe(&self, request: &RecordingRequest, timeline: &mut Timeline) -> Result<()> {
        timeline.log_event("Zoom meeting recording started");

        let url = format!(
            "https://api.zoom.us/v2/meetings/{}/recordings",
            request.meeting_id
        );
        let response = self
            .http
            .get(url)
            .bearer_auth(&request.host_access_token)
            .send()
            .await
            .context("Zoom recordings request failed")?;

        let status = response.status();
        if status.is_success() {
            timeline.log_event("Zoom meeting details fetched successfully");
        } else {
            let body = response.text().await.unwrap_or_default();
            timeline.log_event(format!(
                "Failed to fetch meeting details. Status Code: {}, Response: {}",
                status.as_u16(),
                body
            ));
        }

        Ok(())
    }
}
