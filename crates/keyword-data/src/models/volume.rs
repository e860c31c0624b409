use serde::Serialize;
use serde_json::Value;

/// Normalized keyword-tool row.
///
/// Volumes stay strings: low-volume terms come back as sentinels such as
/// `"<10"` that must reach the caller untouched.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeRecord {
    pub matched_term: String,
    pub pc_volume: Option<String>,
    pub mobile_volume: Option<String>,
}

impl VolumeRecord {
    /// True when at least one device carries a volume.
    pub fn has_volume(&self) -> bool {
        self.pc_volume.is_some() || self.mobile_volume.is_some()
    }
}

/// Outcome of one volume lookup for a single hint term.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VolumeLookup {
    pub record: Option<VolumeRecord>,
    /// Raw provider payload, captured only in diagnostic mode.
    pub raw: Option<Value>,
}

impl VolumeLookup {
    pub fn empty() -> Self {
        Self::default()
    }

    /// The record, when it carries a usable volume.
    pub fn usable(&self) -> Option<&VolumeRecord> {
        self.record.as_ref().filter(|r| r.has_volume())
    }
}

/// Unmodified response of a single diagnostic keyword-tool call.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeProbe {
    pub hint_keyword: String,
    pub status: u16,
    pub ok: bool,
    pub response: Value,
}
