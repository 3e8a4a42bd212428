use crate::error::Result;
use config::{Config, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub backend: BackendConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BackendConfig {
    pub base_url: String,
    pub rate_limit_per_minute: u32,
}

impl Settings {
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let config = Config::builder()
            .set_default("backend.base_url", "http://localhost:5000")?
            .set_default("backend.rate_limit_per_minute", 120)?
            .add_source(File::with_name("config/default").required(false))
            .build()?;

        let mut settings: Settings = config.try_deserialize()?;

        // 允许用环境变量覆盖后端地址
        if let Ok(url) = env::var("BACKEND_BASE_URL") {
            settings.backend.base_url = url;
        }

        Ok(settings)
    }
}
