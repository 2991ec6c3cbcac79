use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

use crate::errors::DispatchError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Platform {
    GoogleMeet,
    Teams,
    Zoom,
}

impl Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let platform = match self {
            Platform::GoogleMeet => "google_meet",
            Platform::Teams => "teams",
            Platform::Zoom => "zoom",
        };
        write!(f, "{}", platform)
    }
}

impl FromStr for Platform {
    type Err = DispatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "google_meet" => Ok(Platform::GoogleMeet),
            "teams" => Ok(Platform::Teams),
            "zoom" => Ok(Platform::Zoom),
            other => Err(DispatchError::UnsupportedPlatform(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_platforms() {
        assert_eq!("google_meet".parse::<Platform>().unwrap(), Platform::GoogleMeet);
        assert_eq!("teams".parse::<Platform>().unwrap(), Platform::Teams);
        assert_eq!("zoom".parse::<Platform>().unwrap(), Platform::Zoom);
    }

    #[test]
    fn rejects_unknown_platforms() {
        for raw in ["webex", "GOOGLE_MEET", "meet", ""] {
            let result = raw.parse::<Platform>();
            assert!(matches!(
                result,
                Err(DispatchError::UnsupportedPlatform(_))
            ));
        }
    }

    #[test]
    fn display_round_trips() {
        for platform in [Platform::GoogleMeet, Platform::Teams, Platform::Zoom] {
            assert_eq!(platform.to_string().parse::<Platform>().unwrap(), platform);
        }
    }
}
