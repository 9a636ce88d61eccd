use std::{env, fmt::Display, str::FromStr};

use tracing::{info, warn};

use crate::error::AppError;

pub struct Config {
    pub port: u16,
    pub max_batch: usize,
    pub cors_max_age_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 1111,
            max_batch: 500,
            cors_max_age_secs: 60 * 60,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, AppError> {
        Self::from_lookup(|key| var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            port: try_load(&lookup, "RUST_PORT", defaults.port)?,
            max_batch: try_load(&lookup, "RUST_MAX_BATCH", defaults.max_batch)?,
            cors_max_age_secs: try_load(&lookup, "RUST_CORS_MAX_AGE", defaults.cors_max_age_secs)?,
        })
    }
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| {
        warn!("Environment variable {key} not found, using default");
    })
}

fn try_load<T, F>(lookup: &F, key: &str, default: T) -> Result<T, AppError>
where
    T: FromStr + Display,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        info!("{key} not set, using default: {default}");
        return Ok(default);
    };

    raw.trim().parse().map_err(|e| {
        warn!("Invalid {key} value: {e}");
        AppError::Misconfigured(format!("{key}={raw}: {e}"))
    })
}
