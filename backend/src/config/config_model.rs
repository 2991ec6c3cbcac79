use domain::value_objects::{enums::launch_types::LaunchType, launches::LaunchParameters};
use infra::providers::{google_meet::GoogleMeetConfig, teams::AzureConfig};

#[derive(Debug, Clone)]
pub struct DotEnvyConfig {
    pub server: Server,
    pub launcher: Launcher,
    pub storage: Storage,
    pub auto_scaling: AutoScaling,
    pub google_meet: GoogleMeetConfig,
    pub azure: AzureConfig,
}

#[derive(Debug, Clone)]
pub struct Server {
    pub port: u16,
    pub body_limit: u64,
    pub timeout: u64,
}

/// Launch parameters are loaded permissively and validated by the
/// launch workflow itself, so a missing deployment knob surfaces as a
/// configuration error on the request instead of a startup panic.
#[derive(Debug, Clone)]
pub struct Launcher {
    pub parameters: LaunchParameters,
    pub launch_type: LaunchType,
    pub container_name: String,
    pub retry_count: u32,
    pub retry_delay_secs: u64,
}

#[derive(Debug, Clone)]
pub struct Storage {
    pub timeline_bucket: String,
    pub log_bucket: Option<String>,
}

/// When the URL is set, `/launch` proxies to the autoscaling-fronted
/// launcher instead of calling the scheduler directly.
#[derive(Debug, Clone)]
pub struct AutoScaling {
    pub url: Option<String>,
}
