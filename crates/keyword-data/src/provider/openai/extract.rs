//! Best-effort extraction of the suggestion JSON from model output.
//!
//! Models often wrap the requested object in prose or code fences. The
//! first balanced `{...}` block is taken and parsed; any failure yields an
//! empty [`SuggestionSet`].

use log::debug;
use serde_json::Value;

use crate::models::SuggestionSet;

/// Return the first balanced `{...}` substring of `text`.
///
/// Braces inside JSON string literals are ignored. `None` when no opening
/// brace exists or the first one is never closed.
pub fn find_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    let end = start + offset + ch.len_utf8();
                    return Some(&text[start..end]);
                }
            }
            _ => {}
        }
    }

    None
}

fn string_list(parsed: &Value, key: &str, count: usize) -> Vec<String> {
    parsed
        .get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .take(count)
                .collect()
        })
        .unwrap_or_default()
}

/// Parse the `{"related": [...], "popular": [...]}` object out of `text`.
///
/// Each list is capped at `count`. Missing or mistyped lists come back
/// empty; nothing here returns an error.
pub fn parse_suggestions(text: &str, count: usize) -> SuggestionSet {
    let Some(raw) = find_json_object(text) else {
        debug!("OpenAI: no JSON object in completion");
        return SuggestionSet::default();
    };

    let parsed: Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(e) => {
            debug!("OpenAI: completion JSON did not parse: {}", e);
            return SuggestionSet::default();
        }
    };

    SuggestionSet::new(
        string_list(&parsed, "related", count),
        string_list(&parsed, "popular", count),
    )
}
