use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Compute substrate the worker task runs on. The two variants are
/// mutually exclusive deployment choices selected by configuration,
/// never at request time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum LaunchType {
    Ec2,
    #[default]
    Fargate,
}

impl Display for LaunchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let launch_type = match self {
            LaunchType::Ec2 => "EC2",
            LaunchType::Fargate => "FARGATE",
        };
        write!(f, "{}", launch_type)
    }
}

impl TryFrom<&str> for LaunchType {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_ascii_lowercase().as_str() {
            "ec2" => Ok(LaunchType::Ec2),
            "fargate" => Ok(LaunchType::Fargate),
            other => Err(anyhow::anyhow!("unknown launch type: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitive() {
        assert_eq!(LaunchType::try_from("EC2").unwrap(), LaunchType::Ec2);
        assert_eq!(LaunchType::try_from("fargate").unwrap(), LaunchType::Fargate);
        assert!(LaunchType::try_from("lambda").is_err());
    }
}
