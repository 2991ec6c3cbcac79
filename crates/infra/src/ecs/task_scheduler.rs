use anyhow::{Context, Result};
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_ecs::{
    Client,
    types::{
        AssignPublicIp, AwsVpcConfiguration, ContainerOverride, KeyValuePair,
        LaunchType as EcsLaunchType, NetworkConfiguration, TaskOverride,
    },
};

use domain::{
    repositories::task_scheduler::TaskScheduler,
    value_objects::{
        enums::launch_types::LaunchType,
        launches::{TaskHandle, TaskLaunchSpec},
    },
};

pub struct EcsTaskScheduler {
    client: Client,
}

impl EcsTaskScheduler {
    /// Credentials and region come from the default provider chain.
    pub async fn new() -> Self {
        let shared_config = aws_config::defaults(BehaviorVersion::latest()).load().await;
        Self {
            client: Client::new(&shared_config),
        }
    }
}

#[async_trait]
impl TaskScheduler for EcsTaskScheduler {
    async fn run_task(&self, spec: TaskLaunchSpec) -> Result<TaskHandle> {
        let vpc_configuration = AwsVpcConfiguration::builder()
            .subnets(&spec.subnet_id)
            .security_groups(&spec.security_group_id)
            .assign_public_ip(AssignPublicIp::Enabled)
            .build()
            .context("invalid awsvpc network configuration")?;

        let environment: Vec<KeyValuePair> = spec
            .environment
            .iter()
            .map(|var| {
                KeyValuePair::builder()
                    .name(&var.name)
                    .value(&var.value)
                    .build()
            })
            .collect();

        let container_override = ContainerOverride::builder()
            .name(&spec.container_name)
            .set_environment(Some(environment))
            .build();

        let launch_type = match spec.launch_type {
            LaunchType::Ec2 => EcsLaunchType::Ec2,
            LaunchType::Fargate => EcsLaunchType::Fargate,
        };

        let response = self
            .client
            .run_task()
            .cluster(&spec.cluster_name)
            .launch_type(launch_type)
            .task_definition(&spec.task_definition)
            .network_configuration(
                NetworkConfiguration::builder()
                    .awsvpc_configuration(vpc_configuration)
                    .build(),
            )
            .overrides(
                TaskOverride::builder()
                    .container_overrides(container_override)
                    .build(),
            )
            .send()
            .await
            .with_context(|| format!("run_task failed on cluster {}", spec.cluster_name))?;

        let task_arn = response
            .tasks()
            .first()
            .and_then(|task| task.task_arn())
            .context("run_task response contained no tasks")?;

        Ok(TaskHandle {
            task_arn: task_arn.to_string(),
        })
    }
}
