use serde::{Deserialize, Serialize};

/// Related and popular keyword suggestions. Empty lists are a valid outcome.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionSet {
    pub related: Vec<String>,
    pub popular: Vec<String>,
}

impl SuggestionSet {
    pub fn new(related: Vec<String>, popular: Vec<String>) -> Self {
        Self { related, popular }
    }

    pub fn is_empty(&self) -> bool {
        self.related.is_empty() && self.popular.is_empty()
    }

    /// Truncate both lists to `count` entries.
    pub fn capped(mut self, count: usize) -> Self {
        self.related.truncate(count);
        self.popular.truncate(count);
        self
    }
}
