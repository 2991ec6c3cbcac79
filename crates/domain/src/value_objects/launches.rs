use serde::{Deserialize, Serialize};

use crate::errors::DispatchError;
use crate::value_objects::enums::launch_types::LaunchType;
use crate::value_objects::recording_requests::RecordingRequest;

/// Deployment parameters for the worker cluster, sourced from process
/// configuration. All four must be present before any network call.
#[derive(Debug, Clone, Default)]
pub struct LaunchParameters {
    pub cluster_name: String,
    pub task_definition: String,
    pub subnet_id: String,
    pub security_group_id: String,
}

impl LaunchParameters {
    /// Names the originating environment variables so a missing value
    /// points straight at the deployment knob to fix.
    pub fn validate(&self) -> Result<(), DispatchError> {
        let required = [
            ("CLUSTER_NAME", &self.cluster_name),
            ("TASK_DEFINITION", &self.task_definition),
            ("SUBNET_ID", &self.subnet_id),
            ("SECURITY_GROUP_ID", &self.security_group_id),
        ];

        let missing: Vec<&str> = required
            .iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(name, _)| *name)
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(DispatchError::Configuration(missing.join(", ")))
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContainerEnvVar {
    pub name: String,
    pub value: String,
}

/// Everything the scheduler needs for one `run_task` call. The
/// environment is passed verbatim to the worker container.
#[derive(Debug, Clone)]
pub struct TaskLaunchSpec {
    pub cluster_name: String,
    pub task_definition: String,
    pub subnet_id: String,
    pub security_group_id: String,
    pub launch_type: LaunchType,
    pub container_name: String,
    pub environment: Vec<ContainerEnvVar>,
}

impl TaskLaunchSpec {
    pub fn new(
        parameters: &LaunchParameters,
        launch_type: LaunchType,
        container_name: &str,
        request: &RecordingRequest,
    ) -> Self {
        let environment = vec![
            ContainerEnvVar {
                name: "PROVIDER".to_string(),
                value: request.platform.to_string(),
            },
            ContainerEnvVar {
                name: "MEETING_ID".to_string(),
                value: request.meeting_id.clone(),
            },
            ContainerEnvVar {
                name: "HOST_ACCESS_TOKEN".to_string(),
                value: request.host_access_token.clone(),
            },
        ];

        Self {
            cluster_name: parameters.cluster_name.clone(),
            task_definition: parameters.task_definition.clone(),
            subnet_id: parameters.subnet_id.clone(),
            security_group_id: parameters.security_group_id.clone(),
            launch_type,
            container_name: container_name.to_string(),
            environment,
        }
    }
}

/// Opaque identifier returned by the scheduler. The launched worker
/// owns itself; no further lifecycle is managed here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskHandle {
    pub task_arn: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::enums::platforms::Platform;

    fn complete_parameters() -> LaunchParameters {
        LaunchParameters {
            cluster_name: "test-cluster".to_string(),
            task_definition: "test-task".to_string(),
            subnet_id: "subnet-12345".to_string(),
            security_group_id: "sg-12345".to_string(),
        }
    }

    #[test]
    fn validates_complete_parameters() {
        assert!(complete_parameters().validate().is_ok());
    }

    #[test]
    fn names_each_missing_parameter() {
        let cases = [
            (
                LaunchParameters {
                    cluster_name: String::new(),
                    ..complete_parameters()
                },
                "CLUSTER_NAME",
            ),
            (
                LaunchParameters {
                    task_definition: String::new(),
                    ..complete_parameters()
                },
                "TASK_DEFINITION",
            ),
            (
                LaunchParameters {
                    subnet_id: String::new(),
                    ..complete_parameters()
                },
                "SUBNET_ID",
            ),
            (
                LaunchParameters {
                    security_group_id: String::new(),
                    ..complete_parameters()
                },
                "SECURITY_GROUP_ID",
            ),
        ];

        for (parameters, expected) in cases {
            let error = parameters.validate().unwrap_err();
            assert!(matches!(error, DispatchError::Configuration(_)));
            assert!(error.to_string().contains(expected));
        }
    }

    #[test]
    fn lists_all_missing_parameters_at_once() {
        let error = LaunchParameters::default().validate().unwrap_err();
        let message = error.to_string();
        for name in [
            "CLUSTER_NAME",
            "TASK_DEFINITION",
            "SUBNET_ID",
            "SECURITY_GROUP_ID",
        ] {
            assert!(message.contains(name));
        }
    }

    #[test]
    fn builds_environment_in_order() {
        let request = RecordingRequest {
            platform: Platform::Zoom,
            meeting_id: "m1".to_string(),
            host_access_token: "t1".to_string(),
        };
        let spec = TaskLaunchSpec::new(
            &complete_parameters(),
            LaunchType::Fargate,
            "bot-container",
            &request,
        );

        let names: Vec<&str> = spec
            .environment
            .iter()
            .map(|var| var.name.as_str())
            .collect();
        assert_eq!(names, ["PROVIDER", "MEETING_ID", "HOST_ACCESS_TOKEN"]);
        assert_eq!(spec.environment[0].value, "zoom");
        assert_eq!(spec.environment[1].value, "m1");
        assert_eq!(spec.environment[2].value, "t1");
    }
}
