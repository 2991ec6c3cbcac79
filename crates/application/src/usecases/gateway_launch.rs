use anyhow::anyhow;
use std::sync::Arc;
use tracing::info;

use domain::{
    errors::DispatchError,
    value_objects::{executions::ExecutionContext, recording_requests::RecordingRequest},
};

use crate::{
    interfaces::gateway::{GatewayClient, GatewayResponse},
    retry::RetryPolicy,
};

/// Launch variant that proxies the request to an autoscaling-fronted
/// function instead of calling the scheduler directly. The invocation
/// itself is retried: any transport error or non-200 status counts as
/// a failed attempt, and exhaustion surfaces as a gateway failure.
pub struct GatewayLaunchUseCase<G>
where
    G: GatewayClient + Send + Sync + 'static,
{
    gateway: Arc<G>,
    retry_policy: RetryPolicy,
}

impl<G> GatewayLaunchUseCase<G>
where
    G: GatewayClient + Send + Sync + 'static,
{
    pub fn new(gateway: Arc<G>, retry_policy: RetryPolicy) -> Self {
        Self {
            gateway,
            retry_policy,
        }
    }

    pub async fn launch(
        &self,
        request: &RecordingRequest,
        context: &ExecutionContext,
    ) -> Result<GatewayResponse, DispatchError> {
        let response = self
            .retry_policy
            .run(|attempt| async move {
                info!(
                    execution_id = %context.execution_id,
                    attempt,
                    "Invoking auto scaling launcher"
                );
                let response = self.gateway.invoke(request).await?;
                if response.status == 200 {
                    Ok(response)
                } else {
                    Err(anyhow!(
                        "auto scaling launcher returned status {}",
                        response.status
                    ))
                }
            })
            .await
            .map_err(|exhausted| DispatchError::GatewayUnavailable {
                attempts: exhausted.attempts,
                last_error: format!("{:#}", exhausted.last_error),
            })?;

        info!(
            execution_id = %context.execution_id,
            "Auto scaling launcher accepted the request"
        );

        Ok(response)
    }
}
