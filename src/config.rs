use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};

/// Prefix for environment overrides, e.g. `SKILL_RECAP_DATABASE_URL`.
pub const ENV_PREFIX: &str = "SKILL_RECAP_";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// sqlx connection string; the SQLite file is created if missing.
    pub database_url: String,
    pub listen_addr: String,
    /// Fallback filter when `RUST_LOG` is unset.
    pub loglevel: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite://skill_recap.db".to_string(),
            listen_addr: "0.0.0.0:8080".to_string(),
            loglevel: "info".to_string(),
        }
    }
}

impl Config {
    /// Built-in defaults overlaid with `SKILL_RECAP_*` environment variables.
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default())).merge(Env::prefixed(ENV_PREFIX))
    }

    pub fn load() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }
}
