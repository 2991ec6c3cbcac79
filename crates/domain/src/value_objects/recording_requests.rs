use serde::Deserialize;

use crate::errors::DispatchError;
use crate::value_objects::enums::platforms::Platform;

/// Raw inbound body. The event-driven deployments used `provider` and
/// `meeting_link` for the same slots, so both spellings are accepted.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordingRequestPayload {
    #[serde(alias = "provider")]
    pub name: Option<String>,
    pub meeting_id: Option<String>,
    #[serde(alias = "meeting_link")]
    pub host_access_token: Option<String>,
}

impl RecordingRequestPayload {
    /// Parses a raw JSON body. A malformed or type-mismatched body is a
    /// caller error, not a server error.
    pub fn from_json(body: &[u8]) -> Result<Self, DispatchError> {
        serde_json::from_slice(body).map_err(|error| DispatchError::Input(error.to_string()))
    }
}

/// A validated recording request: every field non-empty and the
/// platform a recognized member of the closed set.
#[derive(Debug, Clone)]
pub struct RecordingRequest {
    pub platform: Platform,
    pub meeting_id: String,
    pub host_access_token: String,
}

impl RecordingRequest {
    pub fn parse(payload: RecordingRequestPayload) -> Result<Self, DispatchError> {
        let name = payload.name.unwrap_or_default();
        let meeting_id = payload.meeting_id.unwrap_or_default();
        let host_access_token = payload.host_access_token.unwrap_or_default();

        if name.is_empty() || meeting_id.is_empty() || host_access_token.is_empty() {
            return Err(DispatchError::Input(
                "Missing required fields".to_string(),
            ));
        }

        let platform = name.parse::<Platform>()?;

        Ok(Self {
            platform,
            meeting_id,
            host_access_token,
        })
    }
}
