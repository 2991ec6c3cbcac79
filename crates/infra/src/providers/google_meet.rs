use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;

use application::interfaces::providers::ProviderProbe;
use domain::value_objects::{recording_requests::RecordingRequest, timelines::Timeline};

const CALENDAR_EVENTS_URL: &str =
    "https://www.googleapis.com/calendar/v3/calendars/primary/events";

#[derive(Debug, Clone)]
pub struct GoogleMeetConfig {
    pub access_token: String,
}

impl GoogleMeetConfig {
    pub fn from_env() -> Self {
        Self {
            access_token: std::env::var("GOOGLE_ACCESS_TOKEN").unwrap_or_default(),
        }
    }
}

/// Probes the primary Google Calendar for upcoming meeting events.
pub struct GoogleMeetProbe {
    http: reqwest::Client,
    config: GoogleMeetConfig,
    events_url: String,
}

impl GoogleMeetProbe {
    pub fn new(http: reqwest::Client, config: GoogleMeetConfig) -> Self {
        Self {
            http,
            config,
            events_url: CALENDAR_EVENTS_URL.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct CalendarEventList {
    #[serde(default)]
    items: Vec<serde_json::Value>,
}

#[async_trait]
impl ProviderProbe for GoogleMeetProbe {
    async fn probe(&self, _request: &RecordingRequest, timeline: &mut Timeline) -> Result<()> {
        timeline.log_event("Google Meet recording started");

        let response = self
            .http
            .get(&self.events_url)
            .bearer_auth(&self.config.access_token)
            .send()
            .await
            .context("Google Calendar request failed")?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("Google Calendar returned status {}", status.as_u16());
        }

        let events: CalendarEventList = response
            .json()
            .await
            .context("invalid Google Calendar response")?;

        if events.items.is_empty() {
            timeline.log_event("No recordings found for this meeting.");
        } else {
            timeline.log_event("Meeting event found in Google Calendar");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::value_objects::enums::platforms::Platform;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn request() -> RecordingRequest {
        RecordingRequest {
            platform: Platform::GoogleMeet,
            meeting_id: "m1".to_string(),
            host_access_token: "t1".to_string(),
        }
    }

    fn probe_against(server: &MockServer) -> GoogleMeetProbe {
        GoogleMeetProbe {
            http: reqwest::Client::new(),
            config: GoogleMeetConfig {
                access_token: "token".to_string(),
            },
            events_url: format!("{}/calendar/v3/calendars/primary/events", server.uri()),
        }
    }

    #[tokio::test]
    async fn logs_a_found_event_when_the_calendar_lists_items() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/calendar/v3/calendars/primary/events"))
            .and(header("authorization", "Bearer token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "items": [{"id": "evt-1"}]
            })))
            .mount(&server)
            .await;

        let mut timeline = Timeline::new();
        probe_against(&server)
            .probe(&request(), &mut timeline)
            .await
            .unwrap();

        assert!(timeline.contains_event("Google Meet recording started"));
        assert!(timeline.contains_event("Meeting event found in Google Calendar"));
    }

    #[tokio::test]
    async fn calendar_error_status_fails_the_probe() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/calendar/v3/calendars/primary/events"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let mut timeline = Timeline::new();
        let error = probe_against(&server)
            .probe(&request(), &mut timeline)
            .await
            .unwrap_err();

        assert!(error.to_string().contains("500"));
        // Only the start event; the failure is not logged as a timeline
        // entry, it surfaces to the caller.
        assert_eq!(timeline.entries().len(), 1);
    }
}
