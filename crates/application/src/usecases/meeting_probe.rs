use anyhow::Context;
use std::sync::Arc;
use tracing::info;

use domain::{
    errors::DispatchError,
    repositories::object_store::ObjectStore,
    value_objects::{
        enums::platforms::Platform, executions::ExecutionContext,
        recording_requests::RecordingRequest, timelines::Timeline,
    },
};

use crate::interfaces::providers::ProviderProbe;

/// Dispatches a validated request to the matching provider probe,
/// collects the probe's timeline, and flushes it exactly once to the
/// object store. A flush failure is reported to the caller even when
/// the provider interaction itself succeeded.
pub struct MeetingProbeUseCase<G, T, Z, O>
where
    G: ProviderProbe + Send + Sync + 'static,
    T: ProviderProbe + Send + Sync + 'static,
    Z: ProviderProbe + Send + Sync + 'static,
    O: ObjectStore + Send + Sync + 'static,
{
    google_meet: Arc<G>,
    teams: Arc<T>,
    zoom: Arc<Z>,
    object_store: Arc<O>,
}

impl<G, T, Z, O> MeetingProbeUseCase<G, T, Z, O>
where
    G: ProviderProbe + Send + Sync + 'static,
    T: ProviderProbe + Send + Sync + 'static,
    Z: ProviderProbe + Send + Sync + 'static,
    O: ObjectStore + Send + Sync + 'static,
{
    pub fn new(google_meet: Arc<G>, teams: Arc<T>, zoom: Arc<Z>, object_store: Arc<O>) -> Self {
        Self {
            google_meet,
            teams,
            zoom,
            object_store,
        }
    }

    pub async fn record(
        &self,
        request: &RecordingRequest,
        context: &ExecutionContext,
    ) -> Result<Timeline, DispatchError> {
        let mut timeline = Timeline::new();

        match request.platform {
            Platform::GoogleMeet => self.google_meet.probe(request, &mut timeline).await,
            Platform::Teams => self.teams.probe(request, &mut timeline).await,
            Platform::Zoom => self.zoom.probe(request, &mut timeline).await,
        }
        .with_context(|| format!("{} probe failed", request.platform))?;

        let key = Timeline::storage_key(&request.meeting_id, request.platform);
        self.object_store
            .put_object(
                key.clone(),
                timeline.to_json()?,
                "application/json".to_string(),
            )
            .await
            .with_context(|| format!("Failed to save timeline: {}", key))?;

        info!(
            execution_id = %context.execution_id,
            key = %key,
            "Timeline saved"
        );

        Ok(timeline)
    }
}
