//! HTTP source adapter for day-partitioned schedule documents.

use anyhow::{Context, Result};
use async_trait::async_trait;
use confab_core::{DataSourceError, DaySchedule, ScheduleSource, Slot};
use futures::future::try_join_all;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};

/// Source adapter configuration.
#[derive(Debug, Clone)]
pub struct ScheduleSourceConfig {
    /// Conference API root, e.g.
    /// `https://cfp.devoxx.co.uk/api/conferences/DV17`.
    pub base_url: String,
    /// Day identifiers, in the order their slots are concatenated.
    pub days: Vec<String>,
    /// Request timeout (seconds)
    pub timeout_secs: u64,
}

impl Default for ScheduleSourceConfig {
    fn default() -> Self {
        Self {
            base_url: "https://cfp.devoxx.co.uk/api/conferences/DV17".to_string(),
            days: vec!["thursday".to_string(), "friday".to_string()],
            timeout_secs: 10,
        }
    }
}

/// Fetches day documents over HTTP and normalizes them into one flat,
/// ordered slot collection.
pub struct HttpScheduleSource {
    client: Client,
    config: ScheduleSourceConfig,
}

impl HttpScheduleSource {
    pub fn new(config: ScheduleSourceConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, config })
    }

    async fn fetch_day(&self, day: &str) -> Result<Vec<Slot>, DataSourceError> {
        let url = format!("{}/schedules/{day}", self.config.base_url);
        debug!("Fetching day document: {url}");

        let body = self
            .client
            .get(&url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| DataSourceError::http(&url, &e))?
            .text()
            .await
            .map_err(|e| DataSourceError::http(&url, &e))?;

        let document: DaySchedule =
            serde_json::from_str(&body).map_err(|e| DataSourceError::parse(&url, &e))?;

        Ok(document.slots)
    }
}

#[async_trait]
impl ScheduleSource for HttpScheduleSource {
    async fn fetch(&self) -> Result<Vec<Slot>, DataSourceError> {
        info!(
            "Fetching schedule for {} day(s) from {}",
            self.config.days.len(),
            self.config.base_url
        );

        // All days or nothing: one failed day aborts the population.
        let fetches = self.config.days.iter().map(|day| self.fetch_day(day));
        let days = try_join_all(fetches).await?;

        let slots: Vec<Slot> = days.into_iter().flatten().collect();
        info!("Normalized {} slots", slots.len());
        Ok(slots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = ScheduleSourceConfig::default();
        assert_eq!(config.days.len(), 2);
        assert_eq!(config.timeout_secs, 10);
        assert!(config.base_url.starts_with("https://"));
    }

    #[test]
    fn source_builds_with_defaults() {
        let source = HttpScheduleSource::new(ScheduleSourceConfig::default());
        assert!(source.is_ok());
    }

    #[test]
    fn day_document_parses() {
        let json = r#"{"slots": [
            {"day": "thursday", "fromTime": "09:00", "toTime": "09:50",
             "roomName": "Room A",
             "talk": {"id": "A-1", "title": "T", "track": "Cloud",
                      "talkType": "Conference", "summary": "s", "speakers": []}},
            {"day": "thursday", "fromTime": "10:00", "toTime": "10:30",
             "roomName": "Hall"}
        ]}"#;
        let Ok(document) = serde_json::from_str::<DaySchedule>(json) else {
            panic!("day document should deserialize");
        };
        assert_eq!(document.slots.len(), 2);
        assert!(document.slots[1].talk.is_none());
    }
}
