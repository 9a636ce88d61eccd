use std::sync::Arc;

use tracing::info;

use super::{config::Config, error::AppError, keywords::KEYWORDS};

pub struct State {
    pub config: Config,
}

impl State {
    pub fn new() -> Result<Arc<Self>, AppError> {
        let config = Config::load()?;

        info!("Loaded {} keyword entries", KEYWORDS.len());

        Ok(Self::with_config(config))
    }

    pub fn with_config(config: Config) -> Arc<Self> {
        Arc::new(Self { config })
    }
}
