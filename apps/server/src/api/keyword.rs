use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use keywordlab_keyword_data::{
    provider::searchad::strip_whitespace, AggregatedResult, KeywordDataError, KeywordQuery,
    VolumeProbe, EMPTY_KEYWORD_MESSAGE,
};
use serde::Deserialize;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};

const SEARCHAD_UNCONFIGURED_MESSAGE: &str =
    "검색광고 API 키가 없습니다. .env.local에 NAVER_SEARCHAD_* 를 설정하세요.";
const DEFAULT_PROBE_HINT: &str = "키워드";

#[derive(Debug, Deserialize)]
pub struct KeywordRequest {
    #[serde(default, alias = "term")]
    keyword: Option<String>,
    #[serde(default)]
    debug: bool,
}

#[derive(Debug, Deserialize)]
pub struct ProbeParams {
    keyword: Option<String>,
}

/// Accepts a JSON body whatever its `Content-Type`.
async fn lookup_keyword(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> ApiResult<Json<AggregatedResult>> {
    let request: KeywordRequest = serde_json::from_slice(&body).map_err(|e| {
        tracing::warn!("Rejected keyword request body: {}", e);
        ApiError::BadRequest(EMPTY_KEYWORD_MESSAGE.to_string())
    })?;
    let query = KeywordQuery::parse(request.keyword.as_deref().unwrap_or_default())?;
    let result = state.aggregator.aggregate(&query, request.debug).await;
    Ok(Json(result))
}

async fn probe_volume(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ProbeParams>,
) -> ApiResult<Json<VolumeProbe>> {
    let hint = params
        .keyword
        .as_deref()
        .map(strip_whitespace)
        .filter(|hint| !hint.is_empty())
        .unwrap_or_else(|| DEFAULT_PROBE_HINT.to_string());

    match state.aggregator.probe_volume(&hint).await {
        Ok(probe) => Ok(Json(probe)),
        Err(KeywordDataError::NotConfigured(_)) => Err(ApiError::BadRequest(
            SEARCHAD_UNCONFIGURED_MESSAGE.to_string(),
        )),
        Err(e) => Err(e.into()),
    }
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/keyword", post(lookup_keyword))
        .route("/keyword/debug", get(probe_volume))
}
