//! Source trait definitions.
//!
//! Each trait is the seam between the [`Aggregator`](crate::Aggregator) and
//! one upstream service. Implementations must never fail: every method
//! returns the provider's null/empty sentinel instead of an error.

use async_trait::async_trait;

use crate::errors::KeywordDataError;
use crate::models::{Device, DeviceTrends, SuggestionSet, VolumeLookup, VolumeProbe};

/// Search-trend source.
#[async_trait]
pub trait TrendSource: Send + Sync {
    /// Unique identifier for this source, used for logging.
    fn id(&self) -> &'static str;

    /// Trailing-month trend for one device, reduced to a single scalar.
    ///
    /// Returns `None` when the series is empty or the call failed.
    async fn fetch_trend(&self, term: &str, device: Device) -> Option<f64>;

    /// Trends for both devices. The two calls run concurrently.
    async fn fetch_trends(&self, term: &str) -> DeviceTrends {
        let (pc, mobile) = tokio::join!(
            self.fetch_trend(term, Device::Pc),
            self.fetch_trend(term, Device::Mobile)
        );
        DeviceTrends { pc, mobile }
    }
}

/// Monthly search volume source.
#[async_trait]
pub trait VolumeSource: Send + Sync {
    /// Unique identifier for this source, used for logging.
    fn id(&self) -> &'static str;

    /// Look up the best-matching record for a single hint term.
    ///
    /// `hint` must already be whitespace-free. When `capture_raw` is set the
    /// raw provider payload is returned alongside the record.
    async fn fetch_volume(&self, hint: &str, capture_raw: bool) -> VolumeLookup;

    /// Issue one unprocessed call and return what the service answered.
    ///
    /// Default implementation reports that probing is unsupported.
    async fn probe(&self, hint: &str) -> Result<VolumeProbe, KeywordDataError> {
        let _ = hint;
        Err(KeywordDataError::provider(self.id(), "probe not supported"))
    }
}

/// Keyword suggestion source.
#[async_trait]
pub trait SuggestionSource: Send + Sync {
    /// Unique identifier for this source, used for logging.
    fn id(&self) -> &'static str;

    /// Ask for up to `count` related and `count` popular keywords.
    async fn fetch_suggestions(&self, term: &str, count: usize) -> SuggestionSet;
}
