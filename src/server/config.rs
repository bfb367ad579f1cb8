use std::{str::FromStr, time::Duration};

use url::Url;

use crate::server::{
    error::{config::ConfigError, AppError},
    model::sync::PageRange,
    wot::MAX_CLAN_IDS_PER_REQUEST,
};

const DEFAULT_API_URL: &str = "https://api.worldoftanks.eu/wot";
const DEFAULT_API_TIMEOUT_SECS: u64 = 10;
const DEFAULT_API_CONNECT_RETRIES: u32 = 5;
const DEFAULT_SYNC_START_PAGE: u32 = 1;
const DEFAULT_SYNC_CHUNK_SIZE: usize = 50;
const DEFAULT_SYNC_RATE_LIMIT: u32 = 8;
const DEFAULT_SYNC_MAX_CONCURRENT: usize = 8;
const DEFAULT_SYNC_SCHEDULE: &str = "0 0 */6 * * *";
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    pub api: ApiConfig,
    pub sync: SyncConfig,
}

/// Remote clan API connection settings.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: Url,
    /// Application id sent as `application_id` on every request.
    pub application_id: String,
    pub timeout: Duration,
    /// Transparent retries on connect failures before `ConnectionFailure` is returned.
    pub max_connect_retries: u32,
}

/// Sync pass settings.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    pub page_range: PageRange,
    /// Clans per `clan/info/` request.
    pub chunk_size: usize,
    /// Units of fan-out work started per second.
    pub requests_per_second: u32,
    pub max_concurrent: usize,
    /// Six-field cron expression (with seconds).
    pub schedule: String,
    pub on_startup: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self::from_lookup(|name| std::env::var(name).ok())?)
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url: String = parse_or(&lookup, "WOT_API_URL", DEFAULT_API_URL.to_string())?;
        let base_url = Url::parse(&api_url).map_err(|e| ConfigError::InvalidValue {
            name: "WOT_API_URL".to_string(),
            value: api_url.clone(),
            reason: e.to_string(),
        })?;

        let start = parse_or(&lookup, "SYNC_START_PAGE", DEFAULT_SYNC_START_PAGE)?;
        let page_range = match parse_opt::<u32, _>(&lookup, "SYNC_END_PAGE")? {
            Some(end) if end < start => {
                return Err(ConfigError::InvalidValue {
                    name: "SYNC_END_PAGE".to_string(),
                    value: end.to_string(),
                    reason: format!("must not be lower than SYNC_START_PAGE ({})", start),
                })
            }
            Some(end) => PageRange::Fixed { start, end },
            None => PageRange::Discover { start },
        };

        let chunk_size = parse_or(&lookup, "SYNC_CHUNK_SIZE", DEFAULT_SYNC_CHUNK_SIZE)?;
        if chunk_size == 0 || chunk_size > MAX_CLAN_IDS_PER_REQUEST {
            return Err(ConfigError::InvalidValue {
                name: "SYNC_CHUNK_SIZE".to_string(),
                value: chunk_size.to_string(),
                reason: format!("must be between 1 and {}", MAX_CLAN_IDS_PER_REQUEST),
            });
        }

        let requests_per_second = parse_or(&lookup, "SYNC_RATE_LIMIT", DEFAULT_SYNC_RATE_LIMIT)?;
        if requests_per_second == 0 {
            return Err(ConfigError::InvalidValue {
                name: "SYNC_RATE_LIMIT".to_string(),
                value: "0".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        let max_concurrent =
            parse_or(&lookup, "SYNC_MAX_CONCURRENT", DEFAULT_SYNC_MAX_CONCURRENT)?.max(1);

        Ok(Self {
            database_url: required(&lookup, "DATABASE_URL")?,
            bind_address: parse_or(&lookup, "BIND_ADDRESS", DEFAULT_BIND_ADDRESS.to_string())?,
            api: ApiConfig {
                base_url,
                application_id: required(&lookup, "WOT_API_TOKEN")?,
                timeout: Duration::from_secs(parse_or(
                    &lookup,
                    "WOT_API_TIMEOUT_SECS",
                    DEFAULT_API_TIMEOUT_SECS,
                )?),
                max_connect_retries: parse_or(
                    &lookup,
                    "WOT_API_CONNECT_RETRIES",
                    DEFAULT_API_CONNECT_RETRIES,
                )?,
            },
            sync: SyncConfig {
                page_range,
                chunk_size,
                requests_per_second,
                max_concurrent,
                schedule: parse_or(&lookup, "SYNC_SCHEDULE", DEFAULT_SYNC_SCHEDULE.to_string())?,
                on_startup: parse_or(&lookup, "SYNC_ON_STARTUP", false)?,
            },
        })
    }
}

fn required<F>(lookup: &F, name: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
}

fn parse_opt<T, F>(lookup: &F, name: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| ConfigError::InvalidValue {
                name: name.to_string(),
                value: value.clone(),
                reason: e.to_string(),
            }),
    }
}

fn parse_or<T, F>(lookup: &F, name: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    Ok(parse_opt(lookup, name)?.unwrap_or(default))
}
