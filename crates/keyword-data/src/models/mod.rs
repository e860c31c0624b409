//! Data models for keyword intelligence results.

mod query;
mod result;
mod suggestion;
mod trend;
mod volume;

pub use query::{KeywordQuery, EMPTY_KEYWORD_MESSAGE};
pub use result::{AggregatedResult, KeysConfigured};
pub use suggestion::SuggestionSet;
pub use trend::{Device, DeviceTrends, TrendSample};
pub use volume::{VolumeLookup, VolumeProbe, VolumeRecord};
