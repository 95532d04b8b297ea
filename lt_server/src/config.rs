//! Server configuration management.
//!
//! Consolidates all environment variable reads and provides validated configuration.

use league_table::StandingsConfig;
use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// Default server bind address
pub const DEFAULT_BIND: SocketAddr = SocketAddr::new(
    std::net::IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)),
    7878,
);

/// Complete server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server bind address
    pub bind: SocketAddr,
    /// Snapshot JSON file loaded at startup; an empty snapshot when unset
    pub snapshot_path: Option<PathBuf>,
    /// Prometheus listener address; metrics are not exported when unset
    pub metrics_bind: Option<SocketAddr>,
    /// Scoring rules handed to the standings engine
    pub standings: StandingsConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Arguments
    ///
    /// * `bind_override` - Optional bind address override (from CLI args)
    /// * `snapshot_override` - Optional snapshot path override (from CLI args)
    ///
    /// # Errors
    ///
    /// Returns error if a variable is set but cannot be parsed
    pub fn from_env(
        bind_override: Option<SocketAddr>,
        snapshot_override: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        Self::from_lookup(bind_override, snapshot_override, |key| {
            std::env::var(key).ok()
        })
    }

    /// Load configuration from any key/value source
    pub fn from_lookup<F>(
        bind_override: Option<SocketAddr>,
        snapshot_override: Option<PathBuf>,
        lookup: F,
    ) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = EnvReader { lookup };

        // Bind address
        let bind = match bind_override {
            Some(bind) => bind,
            None => env.parse_or("SERVER_BIND", DEFAULT_BIND)?,
        };

        let snapshot_path = snapshot_override.or_else(|| env.raw("SNAPSHOT_PATH").map(PathBuf::from));

        let metrics_bind = env.parse("METRICS_BIND")?;

        // Scoring rules
        let defaults = StandingsConfig::default();
        let standings = StandingsConfig {
            points_for_win: env.parse_or("POINTS_FOR_WIN", defaults.points_for_win)?,
            points_for_draw: env.parse_or("POINTS_FOR_DRAW", defaults.points_for_draw)?,
            points_for_loss: env.parse_or("POINTS_FOR_LOSS", defaults.points_for_loss)?,
            yellow_card_weight: env.parse_or("YELLOW_CARD_WEIGHT", defaults.yellow_card_weight)?,
            red_card_weight: env.parse_or("RED_CARD_WEIGHT", defaults.red_card_weight)?,
            leaderboard_limit: env.parse_or("LEADERBOARD_LIMIT", defaults.leaderboard_limit)?,
        };

        Ok(ServerConfig {
            bind,
            snapshot_path,
            metrics_bind,
            standings,
        })
    }

    /// Validate configuration after loading
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.metrics_bind == Some(self.bind) {
            return Err(ConfigError::Invalid {
                var: "METRICS_BIND".to_string(),
                reason: format!("Must differ from the server bind address ({})", self.bind),
            });
        }

        self.standings.validate().map_err(ConfigError::Rules)
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },

    #[error("Invalid scoring rules: {0}")]
    Rules(String),
}

/// Typed reads over a key/value source
struct EnvReader<F> {
    lookup: F,
}

impl<F> EnvReader<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn raw(&self, key: &str) -> Option<String> {
        (self.lookup)(key)
    }

    /// Parse an optional variable; set but unparsable is an error
    fn parse<T>(&self, key: &str) -> Result<Option<T>, ConfigError>
    where
        T: std::str::FromStr,
    {
        self.raw(key)
            .map(|value| {
                value.trim().parse().map_err(|_| ConfigError::Invalid {
                    var: key.to_string(),
                    reason: format!("Cannot parse '{}'", value),
                })
            })
            .transpose()
    }

    /// Parse a variable, falling back to `default` when unset
    fn parse_or<T>(&self, key: &str, default: T) -> Result<T, ConfigError>
    where
        T: std::str::FromStr,
    {
        Ok(self.parse(key)?.unwrap_or(default))
    }
}
