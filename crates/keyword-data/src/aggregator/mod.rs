//! Aggregation of the three keyword data sources.
//!
//! One run per request:
//! 1. Skip every source whose credentials are missing
//! 2. Start trends (both devices), volume and suggestions concurrently
//! 3. Volume tries its hint candidates one after another
//! 4. Suggestions issue at most one degraded retry
//! 5. Merge everything, plus notes and provenance flags, into one result
//!
//! Sources never fail, so step 5 is always reached.

pub mod notes;

use std::sync::Arc;
use std::time::Duration;

use log::{debug, info};

use crate::config::KeywordDataConfig;
use crate::errors::KeywordDataError;
use crate::models::{
    AggregatedResult, DeviceTrends, KeysConfigured, KeywordQuery, SuggestionSet, VolumeLookup,
    VolumeProbe,
};
use crate::provider::datalab::{self, DatalabProvider};
use crate::provider::openai::{self, OpenAiProvider};
use crate::provider::searchad::{self, strip_whitespace, SearchAdProvider};
use crate::provider::{SuggestionSource, TrendSource, VolumeSource};

/// Suggestions requested on the first attempt.
pub const FULL_SUGGESTION_COUNT: usize = 15;
/// Suggestions requested on the degraded retry.
pub const DEGRADED_SUGGESTION_COUNT: usize = 3;
/// A list shorter than this triggers the degraded retry.
pub const MIN_SUGGESTIONS: usize = 3;
/// Upper bound on volume lookups per run (whole term, then first word).
pub const MAX_VOLUME_ATTEMPTS: u32 = 2;
/// Upper bound on suggestion calls per run (full request plus one retry).
pub const MAX_SUGGESTION_ATTEMPTS: u32 = 2;

/// Longest a single run can take when every call runs into its transport
/// timeout.
///
/// The two trend calls overlap, while volume and suggestion attempts run
/// back to back. Anything wrapping [`Aggregator::aggregate`] in its own
/// deadline must allow at least this much.
pub fn max_aggregation_time() -> Duration {
    let trend = datalab::REQUEST_TIMEOUT;
    let volume = searchad::REQUEST_TIMEOUT * MAX_VOLUME_ATTEMPTS;
    let suggestions = openai::REQUEST_TIMEOUT * MAX_SUGGESTION_ATTEMPTS;
    trend.max(volume).max(suggestions)
}

/// Coordinates the configured sources for one query at a time.
///
/// Holds no per-request state, so a single instance can serve concurrent
/// requests.
pub struct Aggregator {
    trend: Option<Arc<dyn TrendSource>>,
    volume: Option<Arc<dyn VolumeSource>>,
    suggestions: Option<Arc<dyn SuggestionSource>>,
}

impl Aggregator {
    /// Create an aggregator from explicit sources. `None` means unconfigured.
    pub fn new(
        trend: Option<Arc<dyn TrendSource>>,
        volume: Option<Arc<dyn VolumeSource>>,
        suggestions: Option<Arc<dyn SuggestionSource>>,
    ) -> Self {
        Self {
            trend,
            volume,
            suggestions,
        }
    }

    /// Build the real providers for every configured credential group.
    pub fn from_config(config: &KeywordDataConfig) -> Self {
        let trend = config.datalab.configured().map(|creds| {
            Arc::new(DatalabProvider::new(
                creds.clone(),
                config.endpoints.datalab_url.clone(),
            )) as Arc<dyn TrendSource>
        });
        let volume = config.searchad.configured().map(|creds| {
            Arc::new(SearchAdProvider::new(
                creds.clone(),
                config.endpoints.searchad_base_url.clone(),
            )) as Arc<dyn VolumeSource>
        });
        let suggestions = config.openai.configured().map(|creds| {
            Arc::new(OpenAiProvider::new(
                creds.clone(),
                config.endpoints.openai_base_url.clone(),
                config.openai_settings.clone(),
            )) as Arc<dyn SuggestionSource>
        });

        let aggregator = Self::new(trend, volume, suggestions);
        info!(
            "Keyword aggregator ready: {:?}",
            aggregator.keys_configured()
        );
        aggregator
    }

    /// Which sources are configured.
    pub fn keys_configured(&self) -> KeysConfigured {
        KeysConfigured {
            datalab: self.trend.is_some(),
            openai: self.suggestions.is_some(),
            searchad: self.volume.is_some(),
        }
    }

    /// Run every configured source for `query` and merge the outcomes.
    ///
    /// With `debug` set, the raw keyword-tool payload of the last volume
    /// attempt is attached to the result.
    pub async fn aggregate(&self, query: &KeywordQuery, debug: bool) -> AggregatedResult {
        let term = query.term();
        let keys = self.keys_configured();

        let trend_task = async {
            match &self.trend {
                Some(source) => source.fetch_trends(term).await,
                None => DeviceTrends::default(),
            }
        };
        let volume_task = async {
            match &self.volume {
                Some(source) => fetch_volume_with_fallback(source.as_ref(), term, debug).await,
                None => VolumeLookup::empty(),
            }
        };
        let suggestion_task = async {
            match &self.suggestions {
                Some(source) => fetch_suggestions_with_retry(source.as_ref(), term).await,
                None => SuggestionSet::default(),
            }
        };

        let (trends, volume, suggestions) = tokio::join!(trend_task, volume_task, suggestion_task);

        let (pc_monthly_volume, mobile_monthly_volume) = match volume.record {
            Some(record) => (record.pc_volume, record.mobile_volume),
            None => (None, None),
        };
        let volume_found = pc_monthly_volume.is_some() || mobile_monthly_volume.is_some();

        info!(
            "Aggregated '{}': trend={:?}/{:?} volume_found={} related={} popular={}",
            term,
            trends.pc,
            trends.mobile,
            volume_found,
            suggestions.related.len(),
            suggestions.popular.len()
        );

        AggregatedResult {
            keyword: term.to_string(),
            pc_trend: trends.pc,
            mobile_trend: trends.mobile,
            pc_volume: trends.pc,
            mobile_volume: trends.mobile,
            pc_monthly_volume,
            mobile_monthly_volume,
            trend_note: notes::trend_note(keys.datalab).to_string(),
            volume_note: notes::volume_note(keys.searchad, volume_found).to_string(),
            keyword_note: notes::keyword_note(keys.openai, !suggestions.is_empty()).to_string(),
            related_keywords: suggestions.related,
            popular_keywords: suggestions.popular,
            keys_configured: keys,
            debug_search_ad_response: if debug { volume.raw } else { None },
        }
    }

    /// Send one unprocessed keyword-tool request for diagnostics.
    pub async fn probe_volume(&self, hint: &str) -> Result<VolumeProbe, KeywordDataError> {
        match &self.volume {
            Some(source) => source.probe(hint).await,
            None => Err(KeywordDataError::NotConfigured("SEARCHAD".to_string())),
        }
    }
}

/// Hint candidates for the volume lookup, in the order they are tried.
///
/// First the whole term with whitespace removed, then its first word.
/// Duplicates and empty candidates are dropped.
pub fn volume_candidates(term: &str) -> Vec<String> {
    let joined = strip_whitespace(term);
    let first_word = term
        .split_whitespace()
        .next()
        .map(str::to_string)
        .unwrap_or_else(|| joined.clone());

    let mut candidates: Vec<String> = Vec::with_capacity(MAX_VOLUME_ATTEMPTS as usize);
    for candidate in [joined, first_word] {
        if !candidate.is_empty() && !candidates.contains(&candidate) {
            candidates.push(candidate);
        }
    }
    candidates
}

/// Try each hint candidate in turn, stopping at the first usable volume.
///
/// Attempts are strictly sequential. The returned raw payload is the one of
/// the last attempt that produced one.
pub async fn fetch_volume_with_fallback(
    source: &dyn VolumeSource,
    term: &str,
    capture_raw: bool,
) -> VolumeLookup {
    let mut raw = None;

    for hint in volume_candidates(term) {
        let VolumeLookup {
            record,
            raw: attempt_raw,
        } = source.fetch_volume(&hint, capture_raw).await;

        if attempt_raw.is_some() {
            raw = attempt_raw;
        }

        if let Some(record) = record.filter(|r| r.has_volume()) {
            debug!(
                "{}: volume for '{}' found under hint '{}'",
                source.id(),
                term,
                hint
            );
            return VolumeLookup {
                record: Some(record),
                raw,
            };
        }

        debug!("{}: no volume under hint '{}'", source.id(), hint);
    }

    VolumeLookup { record: None, raw }
}

/// Fetch suggestions with the single degraded retry.
///
/// If either list from the full request is shorter than
/// [`MIN_SUGGESTIONS`], one smaller request is made and its lists replace
/// only the short ones. At most two calls are made.
pub async fn fetch_suggestions_with_retry(
    source: &dyn SuggestionSource,
    term: &str,
) -> SuggestionSet {
    let mut result = source.fetch_suggestions(term, FULL_SUGGESTION_COUNT).await;

    let related_short = result.related.len() < MIN_SUGGESTIONS;
    let popular_short = result.popular.len() < MIN_SUGGESTIONS;

    if related_short || popular_short {
        debug!(
            "{}: short suggestion lists (related={}, popular={}), retrying with {}",
            source.id(),
            result.related.len(),
            result.popular.len(),
            DEGRADED_SUGGESTION_COUNT
        );
        let fallback = source
            .fetch_suggestions(term, DEGRADED_SUGGESTION_COUNT)
            .await;
        if related_short {
            result.related = fallback.related;
        }
        if popular_short {
            result.popular = fallback.popular;
        }
    }

    result.capped(FULL_SUGGESTION_COUNT)
}
