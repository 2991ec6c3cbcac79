use anyhow::{Context, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::value_objects::enums::platforms::Platform;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimelineEntry {
    pub timestamp: String,
    pub event: String,
}

/// Ordered, append-only event log captured during one provider
/// interaction. Flushed exactly once at the end of the interaction.
#[derive(Debug, Default)]
pub struct Timeline {
    entries: Vec<TimelineEntry>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log_event(&mut self, event: impl Into<String>) {
        let entry = TimelineEntry {
            timestamp: Utc::now().to_rfc3339(),
            event: event.into(),
        };
        info!(timestamp = %entry.timestamp, "Logged event: {}", entry.event);
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[TimelineEntry] {
        &self.entries
    }

    pub fn contains_event(&self, event: &str) -> bool {
        self.entries.iter().any(|entry| entry.event == event)
    }

    pub fn storage_key(meeting_id: &str, platform: Platform) -> String {
        format!("{}_{}_timeline.json", meeting_id, platform)
    }

    pub fn to_json(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(&self.entries).context("failed to serialize timeline")
    }
}
