use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use domain::value_objects::{recording_requests::RecordingRequest, timelines::Timeline};

/// Lightweight live probe against one provider's API. Implementations
/// append one timeline entry per step; outcomes the provider reports
/// (missing meeting, auth rejection) are timeline events, not errors.
/// Only transport-level failures return `Err`.
#[async_trait]
#[automock]
pub trait ProviderProbe {
    async fn probe(&self, request: &RecordingRequest, timeline: &mut Timeline) -> Result<()>;
}
