//! Glosbe `gapi/translate` response shape.
//!
//! Only the fields needed to extract candidates are modelled; anything else
//! in the payload (meanings, authors, examples) is ignored.

use serde::Deserialize;

const RESULT_OK: &str = "ok";

#[derive(Debug, Deserialize)]
pub struct TranslateResponse {
    #[serde(default)]
    result: Option<String>,
    #[serde(default)]
    tuc: Vec<TucEntry>,
}

#[derive(Debug, Deserialize)]
struct TucEntry {
    #[serde(default)]
    phrase: Option<Phrase>,
}

#[derive(Debug, Deserialize)]
struct Phrase {
    #[serde(default)]
    text: Option<String>,
}

impl TranslateResponse {
    pub fn is_ok(&self) -> bool {
        self.result.as_deref() == Some(RESULT_OK)
    }

    /// Phrase texts in API order. A non-"ok" result has no candidates.
    pub fn into_candidates(self) -> Vec<String> {
        if !self.is_ok() {
            return Vec::new();
        }

        self.tuc
            .into_iter()
            .filter_map(|entry| entry.phrase.and_then(|p| p.text))
            .collect()
    }
}

/// Decodes a response body into its candidate list.
pub fn parse_candidates(body: &str) -> Result<Vec<String>, serde_json::Error> {
    let response: TranslateResponse = serde_json::from_str(body)?;
    Ok(response.into_candidates())
}
