//! Dashboard configuration
//!
//! Bind address, refresh cadence and the team that owns pipelines nobody
//! registered explicitly.

use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server binds to (e.g., "0.0.0.0:8080")
    pub bind_addr: String,

    /// How often every pipeline is re-derived and the board republished
    pub refresh_interval: Duration,

    /// Team assigned to pipelines first seen through an event
    pub default_team: String,
}

impl Config {
    pub fn new(bind_addr: String) -> Self {
        Self {
            bind_addr,
            refresh_interval: Duration::from_secs(5),
            default_team: "main".to_string(),
        }
    }

    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - DASHBOARD_BIND_ADDR (optional, default: 0.0.0.0:8080)
    /// - REFRESH_INTERVAL (optional, seconds, default: 5)
    /// - DEFAULT_TEAM (optional, default: main)
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr =
            std::env::var("DASHBOARD_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        let refresh_interval = match std::env::var("REFRESH_INTERVAL") {
            Ok(s) => Duration::from_secs(s.parse::<u64>().map_err(|e| {
                anyhow::anyhow!("REFRESH_INTERVAL must be a number of seconds: {}", e)
            })?),
            Err(_) => Duration::from_secs(5),
        };

        let default_team = std::env::var("DEFAULT_TEAM").unwrap_or_else(|_| "main".to_string());

        Ok(Self {
            bind_addr,
            refresh_interval,
            default_team,
        })
    }

    pub fn with_refresh_interval(mut self, interval: Duration) -> Self {
        self.refresh_interval = interval;
        self
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.bind_addr.is_empty() {
            anyhow::bail!("bind_addr cannot be empty");
        }

        if self.refresh_interval.is_zero() {
            anyhow::bail!("refresh_interval must be greater than 0");
        }

        lumen_core::error::validate_team_name(&self.default_team)
            .map_err(|e| anyhow::anyhow!("default_team is invalid: {}", e))?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new("0.0.0.0:8080".to_string())
    }
}
