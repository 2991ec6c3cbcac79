use std::sync::Arc;

use axum::{
    Json, Router, body::Bytes, extract::State, response::IntoResponse, routing::post,
};
use tracing::{error, info, warn};

use application::{interfaces::providers::ProviderProbe, usecases::meeting_probe::MeetingProbeUseCase};
use domain::{
    repositories::object_store::ObjectStore,
    value_objects::{
        executions::ExecutionContext,
        recording_requests::{RecordingRequest, RecordingRequestPayload},
    },
};
use infra::{
    providers::{google_meet::GoogleMeetProbe, teams::TeamsProbe, zoom::ZoomProbe},
    s3::object_store::S3ObjectStore,
};

use crate::{axum_http::error_responses::AppError, config::config_model::DotEnvyConfig};

pub async fn routes(config: Arc<DotEnvyConfig>) -> Router {
    let http = reqwest::Client::new();
    let google_meet = GoogleMeetProbe::new(http.clone(), config.google_meet.clone());
    let teams = TeamsProbe::new(http.clone(), config.azure.clone());
    let zoom = ZoomProbe::new(http);
    let object_store = S3ObjectStore::new(config.storage.timeline_bucket.clone()).await;

    let usecase = MeetingProbeUseCase::new(
        Arc::new(google_meet),
        Arc::new(teams),
        Arc::new(zoom),
        Arc::new(object_store),
    );

    Router::new()
        .route("/record", post(record_meeting))
        .with_state(Arc::new(usecase))
}

pub async fn record_meeting<G, T, Z, O>(
    State(usecase): State<Arc<MeetingProbeUseCase<G, T, Z, O>>>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError>
where
    G: ProviderProbe + Send + Sync + 'static,
    T: ProviderProbe + Send + Sync + 'static,
    Z: ProviderProbe + Send + Sync + 'static,
    O: ObjectStore + Send + Sync + 'static,
{
    let context = ExecutionContext::new();
    info!(
        execution_id = %context.execution_id,
        "Received a request to record a meeting"
    );

    let request = RecordingRequestPayload::from_json(&body)
        .and_then(RecordingRequest::parse)
        .map_err(|error| {
            warn!(execution_id = %context.execution_id, "{}", error);
            AppError::from(error)
        })?;

    usecase.record(&request, &context).await.map_err(|error| {
        error!(execution_id = %context.execution_id, "{}", error);
        AppError::from(error)
    })?;

    info!(
        execution_id = %context.execution_id,
        "Recording completed successfully"
    );

    Ok(Json(serde_json::json!({
        "message": "Recording completed successfully"
    })))
}
