use std::collections::HashMap;

use config::{Config as ConfigLib, ConfigError, Environment, File};
use serde::Deserialize;

/// Application id of the CRLSet release channel: the hex(ish) encoded hash
/// of the public key the sets are signed with.
pub const CRL_SET_APP_ID: &str = "hfnkpimlhhgieaddgfemjhofmfblmnib";

const DEFAULT_ENDPOINT: &str = "https://clients2.google.com/service/update2/crx";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub update: UpdateConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateConfig {
    /// Omaha endpoint queried for the current version.
    pub endpoint: String,
    /// App id selecting the CRLSet release channel.
    pub app_id: String,
    pub timeout_secs: u64,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with_sources(None)
    }

    pub fn load_with_sources(
        env_vars: Option<HashMap<String, String>>,
    ) -> Result<Self, ConfigError> {
        let mut builder = ConfigLib::builder()
            .set_default("update.endpoint", DEFAULT_ENDPOINT)?
            .set_default("update.app_id", CRL_SET_APP_ID)?
            .set_default("update.timeout_secs", 30)?
            .add_source(File::with_name("config/settings").required(false));

        // If env_vars is provided, we use it instead of system environment
        // This is to avoid systems variables pollution across tests
        if let Some(vars) = env_vars {
            for (key, value) in vars {
                builder = builder.set_override(&key, value)?;
            }
        } else {
            // Should be in the format CRLSET_UPDATE__ENDPOINT
            builder = builder.add_source(
                Environment::with_prefix("CRLSET")
                    .prefix_separator("_")
                    .separator("__"),
            );
        }

        builder.build()?.try_deserialize()
    }
}
