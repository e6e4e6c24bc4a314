//! Command execution context
//!
//! Provides a unified context for command execution: configuration loading,
//! API URL resolution and client construction.

use std::sync::Arc;
use std::time::Duration;

use log::debug;

use crate::cli::{GlobalOptions, OutputFormat};
use crate::client::{DashboardApi, DashboardClient};
use crate::config::Config;
use crate::error::Result;
use crate::views::TerminalNotifier;

/// Context for command execution containing config, client, and runtime options.
pub struct CommandContext {
    /// Loaded configuration with the API URL override applied
    pub config: Config,
    /// API client shared by every view the command mounts
    pub api: Arc<dyn DashboardApi>,
    /// Output format preference
    pub format: OutputFormat,
    /// Toast sink
    pub notifier: TerminalNotifier,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// # Errors
    /// Returns error if no API URL can be resolved or the client cannot be
    /// built.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Config::load_with_override(opts.config_ref(), opts.api_url_ref())?;
        let api_url = config.require_api_url()?;

        debug!("Using dashboard API at {}", api_url);
        let client = DashboardClient::new(
            api_url,
            config.preferences.requests_per_second,
            Duration::from_secs(config.preferences.timeout_secs),
        )?;

        let format = opts
            .format
            .or_else(|| config.preferences.output_format())
            .unwrap_or_default();

        Ok(Self {
            api: Arc::new(client),
            format,
            config,
            notifier: TerminalNotifier,
        })
    }

    /// Build a context around an existing client.
    #[cfg(test)]
    pub fn with_api(api: Arc<dyn DashboardApi>, format: OutputFormat) -> Self {
        Self {
            config: Config::default(),
            api,
            format,
            notifier: TerminalNotifier,
        }
    }
}
