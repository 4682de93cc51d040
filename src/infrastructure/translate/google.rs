//! Client for the public `translate_a/single` endpoint.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use url::Url;

use super::service::{TranslateError, TranslateResult, Translator};
use crate::domain::entities::LanguageCode;

/// Default endpoint used when `TRANSLATE_ENDPOINT` is not set.
pub const DEFAULT_ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";

/// HTTP translator backed by the `gtx` client of the Google endpoint.
///
/// One GET per call:
/// `?client=gtx&sl=auto&tl={target}&dt=t&q={text}`.
#[derive(Debug, Clone)]
pub struct GoogleTranslator {
    client: Client,
    endpoint: Url,
}

impl GoogleTranslator {
    /// Creates a translator for `endpoint` with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`TranslateError::Transport`] if the endpoint is not a valid
    /// URL or the HTTP client cannot be built.
    pub fn new(endpoint: &str, timeout: Duration) -> TranslateResult<Self> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| TranslateError::Transport(format!("invalid endpoint: {e}")))?;

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TranslateError::Transport(e.to_string()))?;

        Ok(Self { client, endpoint })
    }

    /// Builds the request URL with every query value percent-encoded.
    pub fn request_url(&self, text: &str, target: &LanguageCode) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("client", "gtx")
            .append_pair("sl", "auto")
            .append_pair("tl", target.as_str())
            .append_pair("dt", "t")
            .append_pair("q", text);
        url
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn translate(&self, text: &str, target: &LanguageCode) -> TranslateResult<String> {
        let url = self.request_url(text, target);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| TranslateError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TranslateError::Status(status.as_u16()));
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|e| TranslateError::Malformed(e.to_string()))?;

        parse_segments(&payload)
            .ok_or_else(|| TranslateError::Malformed("no translated segments".to_string()))
    }
}

/// Concatenates the translated segments of an endpoint payload.
///
/// The payload is a nested list; its first element lists segments, each of
/// which starts with a translated chunk:
///
/// ```text
/// [[["Hola","Hello",null,null,1], ...], ...]
/// ```
///
/// Returns `None` when the structure is missing or every chunk is empty.
pub fn parse_segments(payload: &Value) -> Option<String> {
    let segments = payload.get(0)?.as_array()?;

    let translated: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect();

    (!translated.is_empty()).then_some(translated)
}
