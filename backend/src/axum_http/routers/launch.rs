use std::sync::Arc;
use std::time::Duration;

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use tracing::{error, info, warn};

use application::{
    interfaces::gateway::GatewayClient,
    retry::RetryPolicy,
    usecases::{gateway_launch::GatewayLaunchUseCase, task_launch::TaskLaunchUseCase},
};
use domain::{
    repositories::{object_store::ObjectStore, task_scheduler::TaskScheduler},
    value_objects::{
        executions::{ExecutionContext, ExecutionLog},
        recording_requests::{RecordingRequest, RecordingRequestPayload},
    },
};
use infra::{
    ecs::task_scheduler::EcsTaskScheduler, gateway::auto_scaling::AutoScalingGateway,
    s3::object_store::S3ObjectStore,
};

use crate::{axum_http::error_responses::AppError, config::config_model::DotEnvyConfig};

/// The gateway variant retries the whole invocation, not the task
/// launch: 2 extra attempts on any failure or non-200 status.
const GATEWAY_ATTEMPTS: u32 = 3;

pub struct DirectLaunchState<S, O>
where
    S: TaskScheduler + Send + Sync + 'static,
    O: ObjectStore + Send + Sync + 'static,
{
    usecase: TaskLaunchUseCase<S>,
    log_store: Option<Arc<O>>,
}

pub struct GatewayLaunchState<G, O>
where
    G: GatewayClient + Send + Sync + 'static,
    O: ObjectStore + Send + Sync + 'static,
{
    usecase: GatewayLaunchUseCase<G>,
    log_store: Option<Arc<O>>,
}

pub async fn routes(config: Arc<DotEnvyConfig>) -> Router {
    let retry_delay = Duration::from_secs(config.launcher.retry_delay_secs);

    let log_store = match &config.storage.log_bucket {
        Some(bucket) => Some(Arc::new(S3ObjectStore::new(bucket.clone()).await)),
        None => None,
    };

    match &config.auto_scaling.url {
        Some(url) => {
            let gateway = AutoScalingGateway::new(reqwest::Client::new(), url.clone());
            let usecase = GatewayLaunchUseCase::new(
                Arc::new(gateway),
                RetryPolicy::new(GATEWAY_ATTEMPTS, retry_delay),
            );

            Router::new()
                .route("/launch", post(launch_via_gateway))
                .with_state(Arc::new(GatewayLaunchState { usecase, log_store }))
        }
        None => {
            let scheduler = EcsTaskScheduler::new().await;
            let usecase = TaskLaunchUseCase::new(
                Arc::new(scheduler),
                config.launcher.parameters.clone(),
                config.launcher.launch_type,
                config.launcher.container_name.clone(),
                RetryPolicy::new(config.launcher.retry_count, retry_delay),
            );

            Router::new()
                .route("/launch", post(launch_task))
                .with_state(Arc::new(DirectLaunchState { usecase, log_store }))
        }
    }
}

pub async fn launch_task<S, O>(
    State(state): State<Arc<DirectLaunchState<S, O>>>,
    body: Bytes,
) -> Response
where
    S: TaskScheduler + Send + Sync + 'static,
    O: ObjectStore + Send + Sync + 'static,
{
    let context = ExecutionContext::new();
    let mut log = ExecutionLog::new(&context);

    let request = match parse_request(&body, &context, &mut log) {
        Ok(request) => request,
        Err(error) => {
            flush_execution_log(&state.log_store, &log).await;
            return error.into_response();
        }
    };

    match state.usecase.launch(&request, &context).await {
        Ok(handle) => {
            log.push(format!(
                "Worker task started successfully. Task ARN: {}",
                handle.task_arn
            ));
            flush_execution_log(&state.log_store, &log).await;

            Json(serde_json::json!({
                "message": "Worker task started successfully.",
                "taskArn": handle.task_arn,
            }))
            .into_response()
        }
        Err(error) => {
            error!(execution_id = %context.execution_id, "{}", error);
            log.push(error.to_string());
            flush_execution_log(&state.log_store, &log).await;
            AppError::from(error).into_response()
        }
    }
}

pub async fn launch_via_gateway<G, O>(
    State(state): State<Arc<GatewayLaunchState<G, O>>>,
    body: Bytes,
) -> Response
where
    G: GatewayClient + Send + Sync + 'static,
    O: ObjectStore + Send + Sync + 'static,
{
    let context = ExecutionContext::new();
    let mut log = ExecutionLog::new(&context);

    let request = match parse_request(&body, &context, &mut log) {
        Ok(request) => request,
        Err(error) => {
            flush_execution_log(&state.log_store, &log).await;
            return error.into_response();
        }
    };

    match state.usecase.launch(&request, &context).await {
        Ok(response) => {
            log.push("Auto scaling launcher accepted the request".to_string());
            flush_execution_log(&state.log_store, &log).await;
            (StatusCode::OK, response.body).into_response()
        }
        Err(error) => {
            error!(execution_id = %context.execution_id, "{}", error);
            log.push(error.to_string());
            flush_execution_log(&state.log_store, &log).await;
            AppError::from(error).into_response()
        }
    }
}

fn parse_request(
    body: &[u8],
    context: &ExecutionContext,
    log: &mut ExecutionLog,
) -> Result<RecordingRequest, AppError> {
    match RecordingRequestPayload::from_json(body).and_then(RecordingRequest::parse) {
        Ok(request) => {
            info!(
                execution_id = %context.execution_id,
                provider = %request.platform,
                meeting_id = %request.meeting_id,
                "Launch request received"
            );
            log.push(format!("Provider: {}", request.platform));
            log.push(format!("Meeting ID: {}", request.meeting_id));
            Ok(request)
        }
        Err(error) => {
            warn!(execution_id = %context.execution_id, "{}", error);
            log.push(error.to_string());
            Err(AppError::from(error))
        }
    }
}

/// Best-effort: a launch that succeeded is still reported as success
/// when the log upload fails.
async fn flush_execution_log<O>(store: &Option<Arc<O>>, log: &ExecutionLog)
where
    O: ObjectStore + Send + Sync + 'static,
{
    let Some(store) = store else {
        return;
    };

    if let Err(error) = store
        .put_object(
            log.storage_key(),
            log.to_text().into_bytes(),
            "text/plain".to_string(),
        )
        .await
    {
        error!("Failed to upload execution log: {:#}", error);
    }
}
