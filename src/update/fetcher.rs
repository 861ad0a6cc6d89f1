use std::time::Duration;

use quick_xml::de::from_str;
use reqwest::Client;
use tracing::{debug, info};
use url::Url;

use super::errors::UpdateError;
use super::types::{CrlSetVersion, UpdateResponse};
use crate::config::UpdateConfig;
use crate::crx;

/// Client for the Omaha update service.
pub struct UpdateClient {
    client: Client,
    config: UpdateConfig,
}

impl UpdateClient {
    pub fn new(config: UpdateConfig) -> Result<Self, UpdateError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client, config })
    }

    /// URL the current version information is fetched from.
    ///
    /// The update protocol packs the per-app arguments into a single `x`
    /// query parameter, form-encoded as one value.
    pub fn version_request_url(&self) -> Result<Url, UpdateError> {
        let mut url = Url::parse(&self.config.endpoint)?;
        let args = format!("id={}&v=&uc&acceptformat=crx3", self.config.app_id);
        url.query_pairs_mut().append_pair("x", &args);
        Ok(url)
    }

    /// Ask the update service for the current CRLSet release.
    pub async fn check(&self) -> Result<CrlSetVersion, UpdateError> {
        let url = self.version_request_url()?;
        debug!(%url, "checking for current CRLSet version");

        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(UpdateError::Status(response.status()));
        }
        let body = response.text().await?;
        let reply: UpdateResponse = from_str(&body)?;

        let check = reply
            .apps
            .into_iter()
            .find(|app| app.app_id == self.config.app_id)
            .and_then(|app| app.update_check)
            .ok_or(UpdateError::MissingUpdate)?;
        let url = check
            .codebase
            .filter(|codebase| !codebase.is_empty())
            .ok_or(UpdateError::MissingUpdate)?;

        Ok(CrlSetVersion {
            url,
            version: check.version.unwrap_or_default(),
        })
    }

    /// Download the current release and unwrap it to raw CRLSet bytes.
    pub async fn fetch(&self) -> Result<Vec<u8>, UpdateError> {
        let current = self.check().await?;
        info!(version = %current.version, "downloading CRLSet");

        let response = self.client.get(&current.url).send().await?;
        if !response.status().is_success() {
            return Err(UpdateError::Status(response.status()));
        }
        // The ZIP reader needs to seek around, so the container is buffered
        // whole before unwrapping.
        let crx_bytes = response.bytes().await?;

        Ok(crx::extract_crl_set(&crx_bytes)?)
    }
}
