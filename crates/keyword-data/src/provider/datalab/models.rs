//! DataLab search trend wire models.

use serde::{Deserialize, Serialize};

/// POST body of the search trend endpoint
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendRequest<'a> {
    pub start_date: String,
    pub end_date: String,
    pub time_unit: &'static str,
    pub keyword_groups: Vec<KeywordGroup<'a>>,
    pub device: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordGroup<'a> {
    pub group_name: &'a str,
    pub keywords: Vec<&'a str>,
}

/// Response wrapper; only the ratios are read.
#[derive(Debug, Deserialize)]
pub struct TrendResponse {
    #[serde(default)]
    pub results: Vec<TrendGroupResult>,
}

#[derive(Debug, Deserialize)]
pub struct TrendGroupResult {
    #[serde(default)]
    pub data: Vec<TrendPoint>,
}

#[derive(Debug, Deserialize)]
pub struct TrendPoint {
    pub ratio: Option<f64>,
}
