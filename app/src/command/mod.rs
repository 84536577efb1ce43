//! Static strategy pattern for CLI commands.
//!
//! Each command is a separate strategy with its own input type, resolved
//! by static dispatch at compile time.

use confab_config::Config;
use confab_dialogue::TurnHandler;
use confab_resolver::{CrossReference, DirectoryEndpoints, HttpDirectorySource};
use confab_schedule::{HttpScheduleSource, ScheduleCache, ScheduleSourceConfig};
use std::sync::Arc;

mod ask;
mod chat;
mod init;
mod version;

pub use ask::{AskInput, AskStrategy};
pub use chat::ChatStrategy;
pub use init::InitStrategy;
pub use version::VersionStrategy;

/// Core trait defining the contract for all command strategies.
///
/// Each strategy defines its own input type via the associated type,
/// enabling type-safe parameter passing without boxing.
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    async fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}

/// Wire the configured sources, cache and resolver into a turn handler.
fn build_handler(config: &Config) -> anyhow::Result<TurnHandler> {
    let source = HttpScheduleSource::new(ScheduleSourceConfig {
        base_url: config.schedule.base_url.clone(),
        days: config.schedule.days.clone(),
        timeout_secs: config.schedule.timeout_secs,
    })?;
    let cache = Arc::new(ScheduleCache::new(Arc::new(source)));

    let directory = HttpDirectorySource::new(DirectoryEndpoints {
        sessions_url: config.directory.sessions_url.clone(),
        speakers_url: config.directory.speakers_url.clone(),
        schedule_url: config.directory.schedule_url.clone(),
        timeout_secs: config.directory.timeout_secs,
    })?;
    let cross = CrossReference::new(Arc::new(directory));

    Ok(TurnHandler::new(cache, cross))
}
