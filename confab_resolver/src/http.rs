//! HTTP source for the split sessions/speakers/schedule resources.

use anyhow::{Context, Result};
use async_trait::async_trait;
use confab_core::{DataSourceError, ScheduleDay, Session, SpeakerDirectory, SpeakerProfile};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::collections::{BTreeMap, HashMap};
use std::time::Duration;
use tracing::debug;

/// The three resource URLs behind one split-resource deployment.
#[derive(Debug, Clone)]
pub struct DirectoryEndpoints {
    pub sessions_url: String,
    pub speakers_url: String,
    pub schedule_url: String,
    /// Request timeout (seconds)
    pub timeout_secs: u64,
}

impl Default for DirectoryEndpoints {
    fn default() -> Self {
        Self {
            sessions_url: "https://ngvikings-81b48.firebaseio.com/sessions.json".to_string(),
            speakers_url: "https://ngvikings-81b48.firebaseio.com/speakers.json".to_string(),
            schedule_url: "https://ngvikings-81b48.firebaseio.com/schedule.json".to_string(),
            timeout_secs: 10,
        }
    }
}

/// Fetches the three split resources over HTTP.
///
/// Sessions and speakers arrive keyed by directory id; the schedule is an
/// array of day buckets in feed order (earliest day first).
pub struct HttpDirectorySource {
    client: Client,
    endpoints: DirectoryEndpoints,
}

impl HttpDirectorySource {
    pub fn new(endpoints: DirectoryEndpoints) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(endpoints.timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, endpoints })
    }

    async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, DataSourceError> {
        debug!("Fetching directory resource: {url}");

        let body = self
            .client
            .get(url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| DataSourceError::http(url, &e))?
            .text()
            .await
            .map_err(|e| DataSourceError::http(url, &e))?;

        serde_json::from_str(&body).map_err(|e| DataSourceError::parse(url, &e))
    }
}

#[async_trait]
impl SpeakerDirectory for HttpDirectorySource {
    async fn sessions(&self) -> Result<BTreeMap<String, Session>, DataSourceError> {
        self.fetch_json(&self.endpoints.sessions_url).await
    }

    async fn speakers(&self) -> Result<HashMap<String, SpeakerProfile>, DataSourceError> {
        self.fetch_json(&self.endpoints.speakers_url).await
    }

    async fn schedule(&self) -> Result<Vec<ScheduleDay>, DataSourceError> {
        self.fetch_json(&self.endpoints.schedule_url).await
    }
}
