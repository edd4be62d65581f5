// Runtime settings, loaded with the 'config' crate plus dotenv.

use anyhow::Result;
use config::{Config, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub server_address: String,
    // Per-request bound for provider fetches. The aggregation layer never
    // cancels, so this is what keeps a hung provider from stalling the
    // whole result.
    pub fetch_timeout_secs: u64,
}

impl Settings {
    pub fn new() -> Result<Self> {
        dotenv::dotenv().ok(); // Load .env file if present

        let builder = Config::builder()
            .set_default("server_address", "127.0.0.1:3000")?
            .set_default("fetch_timeout_secs", 12)?
            // Load from a configuration file (e.g., config.toml)
            .add_source(File::with_name("config").required(false))
            // Load from environment variables. No separator: the keys are
            // flat, so APP_SERVER_ADDRESS maps to server_address.
            .add_source(Environment::with_prefix("APP"));

        let settings = builder.build()?.try_deserialize()?;
        Ok(settings)
    }
}
