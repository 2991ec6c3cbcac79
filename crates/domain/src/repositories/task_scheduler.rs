use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::value_objects::launches::{TaskHandle, TaskLaunchSpec};

/// Remote task-scheduling API. Any error from a call is treated as
/// transient by the launch workflow and goes through the retry policy.
#[async_trait]
#[automock]
pub trait TaskScheduler {
    async fn run_task(&self, spec: TaskLaunchSpec) -> Result<TaskHandle>;
}
