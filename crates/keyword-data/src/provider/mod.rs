//! Keyword data provider abstractions and implementations.
//!
//! This module contains:
//! - The source traits the aggregator depends on
//! - Request signing for the SearchAd API
//! - Concrete provider implementations (DataLab, SearchAd, OpenAI)
//!
//! # Failure policy
//!
//! Providers use `Result<_, KeywordDataError>` internally. The trait methods
//! are the recovery boundary: a failed call is logged and turned into the
//! provider's sentinel (`None`, an empty lookup, or an empty suggestion set).

mod traits;

pub mod datalab;
pub mod openai;
pub mod searchad;
pub mod signature;

pub use traits::{SuggestionSource, TrendSource, VolumeSource};
