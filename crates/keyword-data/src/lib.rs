//! Keywordlab Keyword Data Crate
//!
//! This crate gathers keyword-intelligence data for a single query term from
//! three independent providers and merges it into one result.
//!
//! # Overview
//!
//! The keyword data crate supports:
//! - Search-trend ratios per device (Naver DataLab)
//! - Monthly search volume via a signed request (Naver SearchAd keyword tool)
//! - Related/popular keyword suggestions (OpenAI chat completions)
//! - Graceful degradation when a provider is unconfigured or failing
//!
//! # Architecture
//!
//! ```text
//!                       +------------------+
//!                       |  KeywordQuery    |  (validated term)
//!                       +------------------+
//!                                |
//!                                v
//!                       +------------------+
//!                       |   Aggregator     |  (fan-out / fan-in)
//!                       +------------------+
//!                      /         |          \
//!                     v          v           v
//!          +-------------+ +-------------+ +----------------+
//!          | TrendSource | | VolumeSource| |SuggestionSource|
//!          +-------------+ +-------------+ +----------------+
//!            (DataLab)      (SearchAd,       (OpenAI)
//!                            HMAC signed)
//!                      \         |          /
//!                       v        v         v
//!                       +------------------+
//!                       | AggregatedResult |  (data + provenance)
//!                       +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`KeywordQuery`] - Trimmed, non-empty query term
//! - [`KeywordDataConfig`] - Per-provider credentials, resolved once per process
//! - [`Aggregator`] - Runs every configured provider concurrently
//! - [`AggregatedResult`] - The externally visible response payload
//!
//! Provider failures never escape as errors: each source recovers into its
//! null/empty sentinel and the aggregator always assembles a full result.

pub mod aggregator;
pub mod config;
pub mod errors;
pub mod models;
pub mod provider;

pub use aggregator::{
    fetch_suggestions_with_retry, fetch_volume_with_fallback, max_aggregation_time,
    volume_candidates, Aggregator,
};
pub use config::{
    Credential, DatalabCredentials, Endpoints, KeywordDataConfig, OpenAiCredentials,
    OpenAiSettings, SearchAdCredentials,
};
pub use errors::KeywordDataError;
pub use models::{
    AggregatedResult, Device, DeviceTrends, KeysConfigured, KeywordQuery, SuggestionSet,
    TrendSample, VolumeLookup, VolumeProbe, VolumeRecord, EMPTY_KEYWORD_MESSAGE,
};
pub use provider::datalab::DatalabProvider;
pub use provider::openai::OpenAiProvider;
pub use provider::searchad::SearchAdProvider;
pub use provider::{SuggestionSource, TrendSource, VolumeSource};
