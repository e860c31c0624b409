//! Keyword-tool payload normalization.
//!
//! The keyword tool has shipped several response shapes: a bare array, or an
//! object holding the array under one of a few keys, with item fields in
//! camelCase or snake_case. Each concern is an ordered accessor list tried
//! in priority order. Nothing dynamic leaves this module: callers get a
//! [`VolumeRecord`] or `None`.

use serde_json::{Map, Value};

use crate::models::VolumeRecord;

type Item = Map<String, Value>;

/// Keys that may hold the item list when the payload is an object.
const LIST_KEYS: &[&str] = &["keywordList", "keywords"];

/// Keys naming the keyword an item refers to.
const TERM_KEYS: &[&str] = &["relKeyword", "rel_keyword", "keyword"];

const PC_KEYS: &[&str] = &["monthlyPcQcCnt", "monthly_pc_qc_cnt", "pcQcCnt"];

const MOBILE_KEYS: &[&str] = &["monthlyMobileQcCnt", "monthly_mobile_qc_cnt", "mobileQcCnt"];

/// Locate the item list in any known payload shape.
///
/// Returns an empty list when no known shape matches. Entries that are not
/// JSON objects are skipped.
pub fn extract_items(payload: &Value) -> Vec<&Item> {
    let list = match payload {
        Value::Array(items) => Some(items),
        Value::Object(obj) => LIST_KEYS
            .iter()
            .find_map(|key| obj.get(*key).and_then(Value::as_array)),
        _ => None,
    };

    list.map(|items| items.iter().filter_map(Value::as_object).collect())
        .unwrap_or_default()
}

/// First value under `keys` that is neither null nor an empty string.
fn field<'a>(item: &'a Item, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| item.get(*key))
        .find(|value| match value {
            Value::Null => false,
            Value::String(s) => !s.is_empty(),
            _ => true,
        })
}

/// Render a field as an opaque string.
///
/// Strings are trimmed and passed through untouched otherwise, so
/// sentinels like `"<10"` survive. Whole numbers lose any `.0` suffix.
fn render(value: &Value) -> Option<String> {
    let text = match value {
        Value::Null => return None,
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i.to_string()
            } else if let Some(u) = n.as_u64() {
                u.to_string()
            } else {
                match n.as_f64() {
                    Some(f) if f.fract() == 0.0 && f.abs() < 1e15 => (f as i64).to_string(),
                    Some(f) => f.to_string(),
                    None => n.to_string(),
                }
            }
        }
        other => other.to_string(),
    };

    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

fn has_volume(item: &Item) -> bool {
    field(item, PC_KEYS).is_some() || field(item, MOBILE_KEYS).is_some()
}

fn matches_term(item: &Item, term_lower: &str) -> bool {
    field(item, TERM_KEYS)
        .and_then(render)
        .map_or(false, |t| t.to_lowercase() == term_lower)
}

/// Pick the best item for `term`.
///
/// Preference order:
/// 1. exact (case-insensitive) term match that carries a volume
/// 2. exact term match
/// 3. any item carrying a volume
/// 4. the first item
///
/// Ties keep the provider's own list order.
pub fn select_item<'a>(items: &[&'a Item], term: &str) -> Option<&'a Item> {
    let term_lower = term.trim().to_lowercase();

    items
        .iter()
        .find(|item| matches_term(item, &term_lower) && has_volume(item))
        .or_else(|| items.iter().find(|item| matches_term(item, &term_lower)))
        .or_else(|| items.iter().find(|item| has_volume(item)))
        .or_else(|| items.first())
        .copied()
}

/// Convert one raw item into a strict record.
pub fn to_record(item: &Item, term: &str) -> VolumeRecord {
    VolumeRecord {
        matched_term: field(item, TERM_KEYS)
            .and_then(render)
            .unwrap_or_else(|| term.to_string()),
        pc_volume: field(item, PC_KEYS).and_then(render),
        mobile_volume: field(item, MOBILE_KEYS).and_then(render),
    }
}

/// Normalize a whole payload and select the record for `term`.
///
/// `None` means the payload held no items at all.
pub fn select_record(payload: &Value, term: &str) -> Option<VolumeRecord> {
    let items = extract_items(payload);
    select_item(&items, term).map(|item| to_record(item, term))
}
