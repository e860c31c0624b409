//! Naver DataLab search trend provider.
//!
//! Queries the trailing calendar month at weekly granularity, one call per
//! device, and reduces the returned ratios to a single scalar.

mod models;

use async_trait::async_trait;
use chrono::{Months, NaiveDate, Utc};
use log::{debug, warn};
use reqwest::Client;
use std::time::Duration;

use crate::config::DatalabCredentials;
use crate::errors::KeywordDataError;
use crate::models::{Device, TrendSample};
use crate::provider::TrendSource;

use models::{KeywordGroup, TrendRequest, TrendResponse};

const PROVIDER_ID: &str = "DATALAB";

/// Transport timeout for a single call.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const TIME_UNIT: &str = "week";

/// DataLab search trend provider.
pub struct DatalabProvider {
    client: Client,
    credentials: DatalabCredentials,
    url: String,
}

impl DatalabProvider {
    /// Create a provider that posts to `url` with the given credentials.
    pub fn new(credentials: DatalabCredentials, url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            credentials,
            url: url.into(),
        }
    }

    /// Build the request body for one device over the trailing month.
    fn build_request<'a>(term: &'a str, device: Device, today: NaiveDate) -> TrendRequest<'a> {
        let (start, end) = trailing_month(today);
        TrendRequest {
            start_date: start.format("%Y-%m-%d").to_string(),
            end_date: end.format("%Y-%m-%d").to_string(),
            time_unit: TIME_UNIT,
            keyword_groups: vec![KeywordGroup {
                group_name: term,
                keywords: vec![term],
            }],
            device: device.as_param(),
        }
    }

    /// Turn a parsed response into samples for the first keyword group.
    fn samples(response: TrendResponse, device: Device) -> Vec<TrendSample> {
        response
            .results
            .into_iter()
            .next()
            .map(|group| {
                group
                    .data
                    .into_iter()
                    .enumerate()
                    .map(|(week_index, point)| TrendSample {
                        device,
                        ratio: point.ratio.unwrap_or(0.0),
                        week_index,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Fetch the weekly series for one device.
    async fn request_series(
        &self,
        term: &str,
        device: Device,
    ) -> Result<Vec<TrendSample>, KeywordDataError> {
        let body = Self::build_request(term, device, Utc::now().date_naive());

        debug!(
            "DataLab request: device={} range={}..{}",
            body.device, body.start_date, body.end_date
        );

        let response = self
            .client
            .post(&self.url)
            .header("X-Naver-Client-Id", &self.credentials.client_id)
            .header("X-Naver-Client-Secret", &self.credentials.client_secret)
            .json(&body)
            .send()
            .await
            .map_err(|e| KeywordDataError::from_transport(PROVIDER_ID, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(KeywordDataError::provider(
                PROVIDER_ID,
                format!("HTTP {}", status),
            ));
        }

        let text = response
            .text()
            .await
            .map_err(|e| KeywordDataError::from_transport(PROVIDER_ID, e))?;
        let parsed: TrendResponse = serde_json::from_str(&text)
            .map_err(|e| KeywordDataError::parse(PROVIDER_ID, e.to_string()))?;

        Ok(Self::samples(parsed, device))
    }
}

#[async_trait]
impl TrendSource for DatalabProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn fetch_trend(&self, term: &str, device: Device) -> Option<f64> {
        match self.request_series(term, device).await {
            Ok(series) => {
                debug!("DataLab series for '{}': {}", term, describe_series(&series));
                let ratios: Vec<f64> = series.iter().map(|s| s.ratio).collect();
                reduce_ratios(&ratios)
            }
            Err(e) => {
                warn!("DataLab trend for device '{}' failed: {}", device.as_param(), e);
                None
            }
        }
    }
}

/// Compact form of a series for logs, e.g. `pc w0=80.5 w1=0`.
fn describe_series(series: &[TrendSample]) -> String {
    match series.first() {
        None => "empty".to_string(),
        Some(first) => {
            let points: Vec<String> = series
                .iter()
                .map(|s| format!("w{}={}", s.week_index, s.ratio))
                .collect();
            format!("{} {}", first.device.as_param(), points.join(" "))
        }
    }
}

/// Inclusive date range covering the calendar month before `today`.
pub fn trailing_month(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = today.checked_sub_months(Months::new(1)).unwrap_or(today);
    (start, today)
}

/// Arithmetic mean rounded to one decimal place.
///
/// An empty series has no data and yields `None`; zero is a real value.
pub fn reduce_ratios(ratios: &[f64]) -> Option<f64> {
    if ratios.is_empty() {
        return None;
    }
    let avg = ratios.iter().sum::<f64>() / ratios.len() as f64;
    Some((avg * 10.0).round() / 10.0)
}
