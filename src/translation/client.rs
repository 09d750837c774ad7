use anyhow::{Context, Result};
use reqwest::{Client, StatusCode, Url};
use thiserror::Error;
use tracing::debug;

use super::Translate;
use super::pairs::TranslationPair;
use super::response::parse_candidates;

/// Glosbe's public translate endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://glosbe.com/gapi/translate";

/// Why a lookup could not produce an answer from the service.
///
/// "No translations" is not an error: it is an empty candidate list.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("server responded with {0}")]
    Status(StatusCode),
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

pub struct GlosbeClient {
    client: Client,
    endpoint: Url,
}

impl GlosbeClient {
    pub fn new(endpoint: &str) -> Result<Self> {
        Self::with_client(endpoint, Client::new())
    }

    /// Uses a preconfigured HTTP client (proxy, TLS or timeout settings).
    pub fn with_client(endpoint: &str, client: Client) -> Result<Self> {
        let endpoint =
            Url::parse(endpoint).with_context(|| format!("Invalid endpoint URL: {endpoint}"))?;

        Ok(Self { client, endpoint })
    }

    /// Builds the GET URL for `phrase`; the phrase is form-encoded.
    pub fn request_url(&self, pair: &TranslationPair, phrase: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("from", &pair.source.short)
            .append_pair("dest", &pair.target.short)
            .append_pair("format", "json")
            .append_pair("phrase", phrase)
            .append_pair("pretty", "false");
        url
    }

    pub async fn lookup(
        &self,
        pair: &TranslationPair,
        phrase: &str,
    ) -> Result<Vec<String>, LookupError> {
        let url = self.request_url(pair, phrase);
        debug!(%url, "querying translate endpoint");

        let response = self.client.get(url).send().await?;

        let status = response.status();
        debug!(%status, "translate endpoint responded");
        if !status.is_success() {
            return Err(LookupError::Status(status));
        }

        let body = response.text().await?;
        let candidates = parse_candidates(&body)?;
        debug!(count = candidates.len(), %pair, "parsed candidates");

        Ok(candidates)
    }
}

impl Translate for GlosbeClient {
    async fn translate(
        &self,
        pair: &TranslationPair,
        phrase: &str,
    ) -> Result<Vec<String>, LookupError> {
        self.lookup(pair, phrase).await
    }
}
