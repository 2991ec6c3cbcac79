use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;

use application::interfaces::providers::ProviderProbe;
use domain::value_objects::{recording_requests::RecordingRequest, timelines::Timeline};

const GRAPH_SCOPE: &str = "https://graph.microsoft.com/.default";

#[derive(Debug, Clone)]
pub struct AzureConfig {
    pub client_id: String,
    pub client_secret: String,
    pub tenant_id: String,
}

impl AzureConfig {
    pub fn from_env() -> Self {
        Self {
            client_id: std::env::var("AZURE_CLIENT_ID").unwrap_or_default(),
            client_secret: std::env::var("AZURE_CLIENT_SECRET").unwrap_or_default(),
            tenant_id: std::env::var("AZURE_TENANT_ID").unwrap_or_default(),
        }
    }
}

/// Exchanges service-principal credentials for a Graph token, then
/// fetches the meeting event from Microsoft Graph.
pub struct TeamsProbe {
    http: reqwest::Client,
    config: AzureConfig,
}

impl TeamsProbe {
    pub fn new(http: reqwest::Client, config: AzureConfig) -> Self {
        Self { http, config }
    }

    fn token_url(&self) -> String {
        format!(
            "https://login.microsoftonline.com/{}/oauth2/v2.0/token",
            self.config.tenant_id
        )
    }

    async fn acquire_graph_token(&self) -> Result<Option<String>> {
        let form = [
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
            ("scope", GRAPH_SCOPE),
            ("grant_type", "client_credentials"),
        ];

        let response = self
            .http
            .post(self.token_url())
            .form(&form)
            .send()
            .await
            .context("Microsoft identity token request failed")?;

        if !response.status().is_success() {
            return Ok(None);
        }

        let token: TokenResponse = response
            .json()
            .await
            .context("invalid Microsoft identity token response")?;

        Ok(token.access_token)
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
}

#[async_trait]
impl ProviderProbe for TeamsProbe {
    async fn probe(&self, request: &RecordingRequest, timeline: &mut Timeline) -> Result<()> {
        timeline.log_event("Teams meeting recording started");

        let Some(access_token) = self.acquire_graph_token().await? else {
            timeline.log_event("Authentication failed for Microsoft Graph");
            return Ok(());
        };

        let event_url = format!(
            "https://graph.microsoft.com/v1.0/me/events/{}",
            request.meeting_id
        );
        let response = self
            .http
            .get(event_url)
            .bearer_auth(access_token)
            .send()
            .await
            .context("Microsoft Graph request failed")?;

        if response.status().is_success() {
            timeline.log_event("Meeting details retrieved successfully");
        } else {
            timeline.log_event(format!(
                "Failed to retrieve meeting details: {}",
                response.status().as_u16()
            ));
        }

        Ok(())
    }
}
