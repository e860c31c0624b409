use serde::Serialize;

use crate::errors::KeywordDataError;

/// Message returned to callers that submit a blank keyword.
pub const EMPTY_KEYWORD_MESSAGE: &str = "키워드를 입력해 주세요.";

/// A validated query term: trimmed and non-empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct KeywordQuery {
    term: String,
}

impl KeywordQuery {
    /// Trim `raw` and reject it when nothing remains.
    pub fn parse(raw: &str) -> Result<Self, KeywordDataError> {
        let term = raw.trim();
        if term.is_empty() {
            return Err(KeywordDataError::invalid_input(EMPTY_KEYWORD_MESSAGE));
        }
        Ok(Self {
            term: term.to_string(),
        })
    }

    pub fn term(&self) -> &str {
        &self.term
    }
}
