//! Runtime configuration loaded from the environment.
//!
//! `main` calls `dotenvy::dotenv()` first, so a local `.env` file works the
//! same as exported variables.

use std::collections::HashMap;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Configuration loading error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },

    #[error("Invalid AVAILABILITY_OVERRIDES: {0}")]
    Overrides(#[from] serde_json::Error),

    #[error("Deposit bounds are inconsistent: min {min}, default {default}, max {max}")]
    DepositBounds { min: u32, default: u32, max: u32 },
}

/// Allowed deposit amounts, whole dollars
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepositPolicy {
    pub default: u32,
    pub min: u32,
    pub max: u32,
}

impl Default for DepositPolicy {
    fn default() -> Self {
        Self {
            default: 199,
            min: 50,
            max: 500,
        }
    }
}

impl DepositPolicy {
    pub fn allows(&self, amount: i64) -> bool {
        amount >= i64::from(self.min) && amount <= i64::from(self.max)
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Postgres URL; the in-memory store is used when absent
    pub database_url: Option<String>,
    pub static_dir: PathBuf,
    /// URL handed back by the mocked checkout gateway
    pub checkout_url: String,
    /// Address that receives a copy of every lead
    pub operations_email: String,
    pub deposit: DepositPolicy,
    /// Date key (YYYY-MM-DD) -> slots offered that day
    pub availability_overrides: HashMap<String, Vec<String>>,
    pub availability_cache_ttl: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            database_url: None,
            static_dir: PathBuf::from("static"),
            checkout_url: "#".to_string(),
            operations_email: "ops@urbanbrush.co".to_string(),
            deposit: DepositPolicy::default(),
            availability_overrides: HashMap::new(),
            availability_cache_ttl: Duration::from_secs(5 * 60),
        }
    }
}

impl Config {
    /// Load from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let deposit = DepositPolicy {
            default: parse_or(&lookup, "DEPOSIT_DEFAULT", defaults.deposit.default)?,
            min: parse_or(&lookup, "DEPOSIT_MIN", defaults.deposit.min)?,
            max: parse_or(&lookup, "DEPOSIT_MAX", defaults.deposit.max)?,
        };
        if deposit.min > deposit.max || !deposit.allows(i64::from(deposit.default)) {
            return Err(ConfigError::DepositBounds {
                min: deposit.min,
                default: deposit.default,
                max: deposit.max,
            });
        }

        let availability_overrides = match lookup("AVAILABILITY_OVERRIDES") {
            Some(raw) if !raw.trim().is_empty() => serde_json::from_str(&raw)?,
            _ => HashMap::new(),
        };

        let ttl_secs: u64 = parse_or(
            &lookup,
            "AVAILABILITY_CACHE_TTL_SECS",
            defaults.availability_cache_ttl.as_secs(),
        )?;

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: parse_or(&lookup, "PORT", defaults.port)?,
            database_url: lookup("DATABASE_URL").filter(|url| !url.is_empty()),
            static_dir: lookup("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            checkout_url: lookup("CHECKOUT_URL").unwrap_or(defaults.checkout_url),
            operations_email: lookup("OPERATIONS_EMAIL").unwrap_or(defaults.operations_email),
            deposit,
            availability_overrides,
            availability_cache_ttl: Duration::from_secs(ttl_secs),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
        None => Ok(default),
    }
}
