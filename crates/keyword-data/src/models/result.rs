use serde::Serialize;
use serde_json::Value;

/// Which providers had a complete credential group for this run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct KeysConfigured {
    pub datalab: bool,
    pub openai: bool,
    pub searchad: bool,
}

/// The externally visible response of one aggregation run.
///
/// Every data field is independently nullable or empty, so the struct can
/// always be built no matter how many providers failed.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedResult {
    pub keyword: String,
    pub pc_trend: Option<f64>,
    pub mobile_trend: Option<f64>,
    /// Legacy alias of `pc_trend`.
    pub pc_volume: Option<f64>,
    /// Legacy alias of `mobile_trend`.
    pub mobile_volume: Option<f64>,
    pub pc_monthly_volume: Option<String>,
    pub mobile_monthly_volume: Option<String>,
    pub trend_note: String,
    pub volume_note: String,
    pub keyword_note: String,
    pub related_keywords: Vec<String>,
    pub popular_keywords: Vec<String>,
    pub keys_configured: KeysConfigured,
    #[serde(
        rename = "_debugSearchAdResponse",
        skip_serializing_if = "Option::is_none"
    )]
    pub debug_search_ad_response: Option<Value>,
}
