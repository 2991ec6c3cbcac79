use anyhow::{Context, Result};
use domain::value_objects::{enums::launch_types::LaunchType, launches::LaunchParameters};
use infra::providers::{google_meet::GoogleMeetConfig, teams::AzureConfig};

use super::config_model::{AutoScaling, DotEnvyConfig, Launcher, Server, Storage};

pub fn load() -> Result<DotEnvyConfig> {
    dotenvy::dotenv().ok();

    let server = Server {
        port: std::env::var("SERVER_PORT")
            .expect("SERVER_PORT is invalid")
            .parse()?,
        body_limit: std::env::var("SERVER_BODY_LIMIT")
            .expect("SERVER_BODY_LIMIT is invalid")
            .parse()?,
        timeout: std::env::var("SERVER_TIMEOUT")
            .expect("SERVER_TIMEOUT is invalid")
            .parse()?,
    };

    let parameters = LaunchParameters {
        cluster_name: std::env::var("CLUSTER_NAME").unwrap_or_default(),
        task_definition: std::env::var("TASK_DEFINITION").unwrap_or_default(),
        subnet_id: std::env::var("SUBNET_ID").unwrap_or_default(),
        security_group_id: std::env::var("SECURITY_GROUP_ID").unwrap_or_default(),
    };

    let launch_type = std::env::var("LAUNCH_TYPE")
        .map(|raw| LaunchType::try_from(raw.as_str()))
        .unwrap_or(Ok(LaunchType::Fargate))
        .context("LAUNCH_TYPE is invalid")?;

    let launcher = Launcher {
        parameters,
        launch_type,
        container_name: std::env::var("CONTAINER_NAME")
            .unwrap_or_else(|_| "bot-container".to_string()),
        retry_count: std::env::var("LAUNCH_RETRY_COUNT")
            .unwrap_or_else(|_| "3".to_string())
            .parse()
            .context("LAUNCH_RETRY_COUNT is invalid")?,
        retry_delay_secs: std::env::var("LAUNCH_RETRY_DELAY_SECS")
            .unwrap_or_else(|_| "2".to_string())
            .parse()
            .context("LAUNCH_RETRY_DELAY_SECS is invalid")?,
    };

    let storage = Storage {
        timeline_bucket: std::env::var("TIMELINE_BUCKET_NAME")
            .expect("TIMELINE_BUCKET_NAME is invalid"),
        log_bucket: std::env::var("LOG_BUCKET_NAME").ok().and_then(|v| {
            let trimmed = v.trim().to_string();
            (!trimmed.is_empty()).then_some(trimmed)
        }),
    };

    let auto_scaling = AutoScaling {
        url: std::env::var("AUTO_SCALING_URL").ok().and_then(|v| {
            let trimmed = v.trim().to_string();
            (!trimmed.is_empty()).then_some(trimmed)
        }),
    };

    Ok(DotEnvyConfig {
        server,
        launcher,
        storage,
        auto_scaling,
        google_meet: GoogleMeetConfig::from_env(),
        azure: AzureConfig::from_env(),
    })
}
