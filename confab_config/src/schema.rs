use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub schedule: ScheduleConfig,
    #[serde(default)]
    pub directory: DirectoryConfig,
}

/// Unified-schedule source: one document per day under `base_url`.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ScheduleConfig {
    #[serde(default = "ScheduleConfig::default_base_url")]
    pub base_url: String,
    #[serde(default = "ScheduleConfig::default_days")]
    pub days: Vec<String>,
    #[serde(default = "ScheduleConfig::default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            base_url: Self::default_base_url(),
            days: Self::default_days(),
            timeout_secs: Self::default_timeout_secs(),
        }
    }
}

impl ScheduleConfig {
    fn default_base_url() -> String {
        "https://cfp.devoxx.co.uk/api/conferences/DV17".to_string()
    }

    fn default_days() -> Vec<String> {
        vec!["thursday".to_string(), "friday".to_string()]
    }

    const fn default_timeout_secs() -> u64 {
        10
    }
}

/// Split-resource variant: sessions, speakers and schedule as three
/// independent documents.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DirectoryConfig {
    #[serde(default = "DirectoryConfig::default_sessions_url")]
    pub sessions_url: String,
    #[serde(default = "DirectoryConfig::default_speakers_url")]
    pub speakers_url: String,
    #[serde(default = "DirectoryConfig::default_schedule_url")]
    pub schedule_url: String,
    #[serde(default = "DirectoryConfig::default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            sessions_url: Self::default_sessions_url(),
            speakers_url: Self::default_speakers_url(),
            schedule_url: Self::default_schedule_url(),
            timeout_secs: Self::default_timeout_secs(),
        }
    }
}

impl DirectoryConfig {
    fn default_sessions_url() -> String {
        "https://ngvikings-81b48.firebaseio.com/sessions.json".to_string()
    }

    fn default_speakers_url() -> String {
        "https://ngvikings-81b48.firebaseio.com/speakers.json".to_string()
    }

    fn default_schedule_url() -> String {
        "https://ngvikings-81b48.firebaseio.com/schedule.json".to_string()
    }

    const fn default_timeout_secs() -> u64 {
        10
    }
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let config_dir = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("confab");

        let config_path = config_dir.join("config.json");

        if !config_path.exists() {
            anyhow::bail!(
                "Config file not found at: {}. Please run 'confab init' to create config.",
                config_path.display()
            );
        }

        let content = std::fs::read_to_string(&config_path)?;
        let config: Self = serde_json::from_str(&content)?;
        info!("Loaded config from {}", config_path.display());

        Ok(config)
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("confab");

        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    pub fn create_config() -> anyhow::Result<()> {
        let config_dir = Self::ensure_config_dir()?;
        let config_path = config_dir.join("config.json");

        if config_path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                config_path.display()
            );
        }

        let config_template = r#"{
  "schedule": {
    "base_url": "https://cfp.devoxx.co.uk/api/conferences/DV17",
    "days": ["thursday", "friday"],
    "timeout_secs": 10
  },
  "directory": {
    "sessions_url": "https://ngvikings-81b48.firebaseio.com/sessions.json",
    "speakers_url": "https://ngvikings-81b48.firebaseio.com/speakers.json",
    "schedule_url": "https://ngvikings-81b48.firebaseio.com/schedule.json",
    "timeout_secs": 10
  }
}"#;

        std::fs::write(&config_path, config_template)?;

        println!("✅ Created config file at: {}", config_path.display());
        println!();
        println!("📝 Next steps:");
        println!("   1. Point schedule.base_url at your conference API and list its days");
        println!("   2. Point the directory URLs at the split sessions/speakers/schedule feeds");
        println!("   3. Run 'confab chat' to start asking about the schedule");
        println!();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_fills_every_default() {
        let Ok(config) = serde_json::from_str::<Config>("{}") else {
            panic!("empty config should deserialize");
        };
        assert_eq!(config.schedule.days, vec!["thursday", "friday"]);
        assert_eq!(config.schedule.timeout_secs, 10);
        assert!(config.directory.sessions_url.ends_with("sessions.json"));
    }

    #[test]
    fn partial_document_keeps_remaining_defaults() {
        let json = r#"{"schedule": {"base_url": "http://localhost:9000"}}"#;
        let Ok(config) = serde_json::from_str::<Config>(json) else {
            panic!("partial config should deserialize");
        };
        assert_eq!(config.schedule.base_url, "http://localhost:9000");
        assert_eq!(config.schedule.days, vec!["thursday", "friday"]);
    }
}
