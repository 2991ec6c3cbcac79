use anyhow::Result;
use std::sync::Arc;
use tracing::info;

use domain::{
    errors::DispatchError,
    repositories::task_scheduler::TaskScheduler,
    value_objects::{
        enums::launch_types::LaunchType,
        executions::ExecutionContext,
        launches::{LaunchParameters, TaskHandle, TaskLaunchSpec},
        recording_requests::RecordingRequest,
    },
};

use crate::retry::RetryPolicy;

/// Turns a validated recording request into a running worker task, or
/// fails with a retries-exhausted error. Launch parameters are checked
/// before any network call; scheduler failures are treated as
/// transient and retried under the policy.
///
/// A retry may, in rare races, start a second task if a prior attempt
/// partially succeeded after an apparent client-side timeout. Accepted
/// limitation.
pub struct TaskLaunchUseCase<S>
where
    S: TaskScheduler + Send + Sync + 'static,
{
    scheduler: Arc<S>,
    parameters: LaunchParameters,
    launch_type: LaunchType,
    container_name: String,
    retry_policy: RetryPolicy,
}

impl<S> TaskLaunchUseCase<S>
where
    S: TaskScheduler + Send + Sync + 'static,
{
    pub fn new(
        scheduler: Arc<S>,
        parameters: LaunchParameters,
        launch_type: LaunchType,
        container_name: String,
        retry_policy: RetryPolicy,
    ) -> Self {
        Self {
            scheduler,
            parameters,
            launch_type,
            container_name,
            retry_policy,
        }
    }

    pub async fn launch(
        &self,
        request: &RecordingRequest,
        context: &ExecutionContext,
    ) -> Result<TaskHandle, DispatchError> {
        self.parameters.validate()?;

        let spec = TaskLaunchSpec::new(
            &self.parameters,
            self.launch_type,
            &self.container_name,
            request,
        );

        let handle = self
            .retry_policy
            .run(|attempt| {
                let spec = spec.clone();
                async move {
                    info!(
                        execution_id = %context.execution_id,
                        attempt,
                        "Starting {} worker task",
                        self.launch_type
                    );
                    self.scheduler.run_task(spec).await
                }
            })
            .await
            .map_err(|exhausted| DispatchError::RetriesExhausted {
                attempts: exhausted.attempts,
                last_error: format!("{:#}", exhausted.last_error),
            })?;

        info!(
            execution_id = %context.execution_id,
            task_arn = %handle.task_arn,
            "{} worker task started successfully",
            self.launch_type
        );

        Ok(handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::repositories::task_scheduler::MockTaskScheduler;
    use domain::value_objects::enums::platforms::Platform;
    use std::time::Duration;

    fn sample_request() -> RecordingRequest {
        RecordingRequest {
            platform: Platform::Zoom,
            meeting_id: "123-456-789".to_string(),
            host_access_token: "token".to_string(),
        }
    }

    fn sample_parameters() -> LaunchParameters {
        LaunchParameters {
            cluster_name: "test-cluster".to_string(),
            task_definition: "test-task".to_string(),
            subnet_id: "subnet-12345".to_string(),
            security_group_id: "sg-12345".to_string(),
        }
    }

    fn usecase(
        scheduler: MockTaskScheduler,
        parameters: LaunchParameters,
        max_attempts: u32,
    ) -> TaskLaunchUseCase<MockTaskScheduler> {
        TaskLaunchUseCase::new(
            Arc::new(scheduler),
            parameters,
            LaunchType::Fargate,
            "bot-container".to_string(),
            RetryPolicy::new(max_attempts, Duration::ZERO),
        )
    }

    #[tokio::test]
    async fn launches_on_first_attempt() {
        let mut scheduler = MockTaskScheduler::new();
        scheduler.expect_run_task().times(1).returning(|spec| {
            assert_eq!(spec.cluster_name, "test-cluster");
            assert_eq!(spec.launch_type, LaunchType::Fargate);
            Box::pin(async {
                Ok(TaskHandle {
                    task_arn: "arn:aws:ecs:region:account:task/test-cluster/abc".to_string(),
                })
            })
        });

        let handle = usecase(scheduler, sample_parameters(), 3)
            .launch(&sample_request(), &ExecutionContext::new())
            .await
            .unwrap();

        assert!(handle.task_arn.ends_with("/abc"));
    }

    #[tokio::test]
    async fn succeeds_on_third_attempt_after_two_transient_failures() {
        let mut scheduler = MockTaskScheduler::new();
        let mut calls = 0u32;
        scheduler
            .expect_run_task()
            .times(3)
            .returning_st(move |_| {
                calls += 1;
                if calls < 3 {
                    Box::pin(async { Err(anyhow::anyhow!("scheduler client error")) })
                } else {
                    Box::pin(async {
                        Ok(TaskHandle {
                            task_arn: "arn:task/third".to_string(),
                        })
                    })
                }
            });

        let handle = usecase(scheduler, sample_parameters(), 3)
            .launch(&sample_request(), &ExecutionContext::new())
            .await
            .unwrap();

        assert_eq!(handle.task_arn, "arn:task/third");
    }

    #[tokio::test]
    async fn exhausts_exactly_the_configured_attempt_bound() {
        let mut scheduler = MockTaskScheduler::new();
        scheduler
            .expect_run_task()
            .times(3)
            .returning(|_| Box::pin(async { Err(anyhow::anyhow!("scheduler client error")) }));

        let error = usecase(scheduler, sample_parameters(), 3)
            .launch(&sample_request(), &ExecutionContext::new())
            .await
            .unwrap_err();

        match error {
            DispatchError::RetriesExhausted { attempts, .. } => assert_eq!(attempts, 3),
            other => panic!("expected RetriesExhausted, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn missing_parameters_fail_before_any_scheduler_call() {
        let mut scheduler = MockTaskScheduler::new();
        scheduler.expect_run_task().never();

        let parameters = LaunchParameters {
            subnet_id: String::new(),
            ..sample_parameters()
        };

        let error = usecase(scheduler, parameters, 3)
            .launch(&sample_request(), &ExecutionContext::new())
            .await
            .unwrap_err();

        assert!(matches!(error, DispatchError::Configuration(_)));
        assert!(error.to_string().contains("SUBNET_ID"));
    }
}
