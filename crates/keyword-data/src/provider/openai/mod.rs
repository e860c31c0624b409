//! OpenAI keyword suggestion provider.
//!
//! One chat completion per call. The system prompt pins the business domain
//! and the output shape; [`extract`] turns whatever the model wrote into a
//! [`SuggestionSet`].

pub mod extract;
mod models;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;
use std::time::Duration;

use crate::config::{OpenAiCredentials, OpenAiSettings};
use crate::errors::KeywordDataError;
use crate::models::SuggestionSet;
use crate::provider::SuggestionSource;

use models::{ChatMessage, ChatRequest, ChatResponse};

const PROVIDER_ID: &str = "OPENAI";

/// Transport timeout for a single call.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

const SYSTEM_PROMPT: &str = "당신은 네이버 블로그·검색 SEO 전문가입니다.
사업 분야: 인쇄/디자인/스티커/DTF/UV/배너/실사출력/의류/명함.
주어진 키워드에 대해 JSON만 출력하세요. 다른 설명 없이 JSON만.
형식: {\"related\": [\"연관1\",\"연관2\",...], \"popular\": [\"인기1\",\"인기2\",...]}
- related: 검색 시 함께 찾는 연관 키워드 (블로그 제목·본문에 쓸 수 있는).
- popular: 블로그 주 키워드로 썼을 때 방문자가 늘 수 있는 인기 검색어.";

/// Build the user instruction for `term` and `count`.
fn user_prompt(term: &str, count: usize) -> String {
    format!(
        "키워드: \"{}\"\n연관키워드 {}개, 인기키워드 {}개를 각각 추천해 주세요. JSON만 출력.",
        term, count, count
    )
}

/// OpenAI chat completion provider.
pub struct OpenAiProvider {
    client: Client,
    credentials: OpenAiCredentials,
    base_url: String,
    settings: OpenAiSettings,
}

impl OpenAiProvider {
    /// Create a provider against `base_url` (e.g. `https://api.openai.com/v1`).
    pub fn new(
        credentials: OpenAiCredentials,
        base_url: impl Into<String>,
        settings: OpenAiSettings,
    ) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            credentials,
            base_url: base_url.into(),
            settings,
        }
    }

    fn build_request<'a>(&'a self, term: &str, count: usize) -> ChatRequest<'a> {
        ChatRequest {
            model: &self.settings.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: user_prompt(term, count),
                },
            ],
            temperature: self.settings.temperature,
        }
    }

    /// Run one completion and return the trimmed message text.
    async fn request_completion(
        &self,
        term: &str,
        count: usize,
    ) -> Result<String, KeywordDataError> {
        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));
        let body = self.build_request(term, count);

        debug!(
            "OpenAI request: model={} count={}",
            self.settings.model, count
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.credentials.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| KeywordDataError::from_transport(PROVIDER_ID, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(KeywordDataError::provider(
                PROVIDER_ID,
                format!("HTTP {}", status),
            ));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| KeywordDataError::parse(PROVIDER_ID, e.to_string()))?;

        Ok(parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .map(|content| content.trim().to_string())
            .unwrap_or_default())
    }
}

#[async_trait]
impl SuggestionSource for OpenAiProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn fetch_suggestions(&self, term: &str, count: usize) -> SuggestionSet {
        match self.request_completion(term, count).await {
            Ok(text) => extract::parse_suggestions(&text, count),
            Err(e) => {
                warn!("OpenAI suggestions for count {} failed: {}", count, e);
                SuggestionSet::default()
            }
        }
    }
}
