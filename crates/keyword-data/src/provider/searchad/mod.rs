//! Naver SearchAd keyword-tool provider.
//!
//! Every call is a signed GET (see [`signature`](crate::provider::signature))
//! with a fresh millisecond timestamp. The hint term must not contain
//! whitespace; the service rejects embedded spaces.

pub mod normalize;

use async_trait::async_trait;
use chrono::Utc;
use log::{debug, warn};
use reqwest::{Client, StatusCode, Url};
use serde_json::{json, Value};
use std::time::Duration;

use crate::config::SearchAdCredentials;
use crate::errors::KeywordDataError;
use crate::models::{VolumeLookup, VolumeProbe};
use crate::provider::signature::sign;
use crate::provider::VolumeSource;

const PROVIDER_ID: &str = "SEARCHAD";

/// Transport timeout for a single call.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const KEYWORD_TOOL_URI: &str = "/keywordstool";
const METHOD: &str = "GET";

/// SearchAd monthly volume provider.
pub struct SearchAdProvider {
    client: Client,
    credentials: SearchAdCredentials,
    base_url: String,
}

impl SearchAdProvider {
    /// Create a provider against `base_url` (e.g. `https://api.searchad.naver.com`).
    pub fn new(credentials: SearchAdCredentials, base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            credentials,
            base_url: base_url.into(),
        }
    }

    /// Build the keyword-tool URL for `hint`.
    fn build_url(&self, hint: &str) -> Result<Url, KeywordDataError> {
        let endpoint = format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            KEYWORD_TOOL_URI
        );
        Url::parse_with_params(&endpoint, &[("hintKeywords", hint), ("showDetail", "1")])
            .map_err(|e| KeywordDataError::provider(PROVIDER_ID, format!("Failed to build URL: {}", e)))
    }

    /// Send one signed request and return the status with the raw body.
    async fn send(&self, hint: &str) -> Result<(StatusCode, String), KeywordDataError> {
        let url = self.build_url(hint)?;
        let timestamp = Utc::now().timestamp_millis().to_string();
        let signature = sign(
            &timestamp,
            METHOD,
            KEYWORD_TOOL_URI,
            self.credentials.secret_key.as_bytes(),
        );

        debug!("SearchAd request: {}", url.as_str());

        let response = self
            .client
            .get(url)
            .header("X-Timestamp", &timestamp)
            .header("X-API-KEY", &self.credentials.access_license)
            .header("X-Customer", &self.credentials.customer_id)
            .header("X-Signature", signature)
            .send()
            .await
            .map_err(|e| KeywordDataError::from_transport(PROVIDER_ID, e))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| KeywordDataError::from_transport(PROVIDER_ID, e))?;
        Ok((status, text))
    }

    /// Fetch and normalize the record for one hint term.
    async fn request_lookup(
        &self,
        hint: &str,
        capture_raw: bool,
    ) -> Result<VolumeLookup, KeywordDataError> {
        let (status, text) = self.send(hint).await?;

        if !status.is_success() {
            let excerpt: String = text.chars().take(300).collect();
            warn!("SearchAd non-success status {}: {}", status, excerpt);
            return Ok(VolumeLookup {
                record: None,
                raw: capture_raw.then(|| json!({ "ok": false, "status": status.as_u16() })),
            });
        }

        let payload: Value = match serde_json::from_str(&text) {
            Ok(payload) => payload,
            Err(e) => {
                warn!("SearchAd returned an unparseable body: {}", e);
                return Ok(VolumeLookup {
                    record: None,
                    raw: capture_raw.then_some(Value::Null),
                });
            }
        };

        let record = normalize::select_record(&payload, hint);
        if record.is_none() {
            debug!(
                "SearchAd: no items for '{}', top-level keys: {:?}",
                hint,
                payload.as_object().map(|o| o.keys().collect::<Vec<_>>())
            );
        }

        Ok(VolumeLookup {
            record,
            raw: capture_raw.then_some(payload),
        })
    }
}

/// Remove every whitespace character from `term`.
pub fn strip_whitespace(term: &str) -> String {
    term.chars().filter(|c| !c.is_whitespace()).collect()
}

#[async_trait]
impl VolumeSource for SearchAdProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn fetch_volume(&self, hint: &str, capture_raw: bool) -> VolumeLookup {
        let hint = strip_whitespace(hint);
        match self.request_lookup(&hint, capture_raw).await {
            Ok(lookup) => lookup,
            Err(e) => {
                warn!("SearchAd lookup for '{}' failed: {}", hint, e);
                VolumeLookup::empty()
            }
        }
    }

    async fn probe(&self, hint: &str) -> Result<VolumeProbe, KeywordDataError> {
        let hint = strip_whitespace(hint);
        let (status, text) = self.send(&hint).await?;
        let response = serde_json::from_str(&text)
            .unwrap_or_else(|_| json!({ "_raw": text, "_status": status.as_u16() }));

        Ok(VolumeProbe {
            hint_keyword: hint,
            status: status.as_u16(),
            ok: status.is_success(),
            response,
        })
    }
}
