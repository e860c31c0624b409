//! Provider configuration.
//!
//! Credentials are resolved once per process into a [`KeywordDataConfig`]
//! and passed by reference into the [`Aggregator`](crate::Aggregator).
//! A provider whose credential group is incomplete is
//! [`Credential::Unconfigured`] and is never called.

use std::fmt;

pub const DEFAULT_DATALAB_URL: &str = "https://openapi.naver.com/v1/datalab/search";
pub const DEFAULT_SEARCHAD_BASE_URL: &str = "https://api.searchad.naver.com";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_OPENAI_TEMPERATURE: f32 = 0.5;

/// A credential group that is either fully present or absent.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum Credential<T> {
    Configured(T),
    #[default]
    Unconfigured,
}

impl<T> Credential<T> {
    pub fn is_configured(&self) -> bool {
        matches!(self, Credential::Configured(_))
    }

    pub fn configured(&self) -> Option<&T> {
        match self {
            Credential::Configured(value) => Some(value),
            Credential::Unconfigured => None,
        }
    }
}

impl<T> From<Option<T>> for Credential<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Credential::Unconfigured, Credential::Configured)
    }
}

/// Naver DataLab (search trend) credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct DatalabCredentials {
    pub client_id: String,
    pub client_secret: String,
}

/// Naver SearchAd (keyword tool) credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct SearchAdCredentials {
    pub customer_id: String,
    pub access_license: String,
    /// Used as raw UTF-8 bytes for signing, never base64-decoded.
    pub secret_key: String,
}

/// OpenAI credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct OpenAiCredentials {
    pub api_key: String,
}

// Secrets must not end up in logs.
impl fmt::Debug for DatalabCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatalabCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"***")
            .finish()
    }
}

impl fmt::Debug for SearchAdCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchAdCredentials")
            .field("customer_id", &self.customer_id)
            .field("access_license", &"***")
            .field("secret_key", &"***")
            .finish()
    }
}

impl fmt::Debug for OpenAiCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiCredentials")
            .field("api_key", &"***")
            .finish()
    }
}

/// Upstream base URLs. Overridable so the providers can be pointed at a
/// local stand-in.
#[derive(Clone, Debug, PartialEq)]
pub struct Endpoints {
    /// Full URL of the DataLab search trend endpoint.
    pub datalab_url: String,
    /// Base URL of the SearchAd API (the signed path is appended).
    pub searchad_base_url: String,
    /// Base URL of the OpenAI API (`/chat/completions` is appended).
    pub openai_base_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            datalab_url: DEFAULT_DATALAB_URL.to_string(),
            searchad_base_url: DEFAULT_SEARCHAD_BASE_URL.to_string(),
            openai_base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
        }
    }
}

/// Chat model settings for the suggestion provider.
#[derive(Clone, Debug, PartialEq)]
pub struct OpenAiSettings {
    pub model: String,
    pub temperature: f32,
}

impl Default for OpenAiSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_OPENAI_MODEL.to_string(),
            temperature: DEFAULT_OPENAI_TEMPERATURE,
        }
    }
}

/// Process-wide provider configuration.
#[derive(Clone, Debug, Default)]
pub struct KeywordDataConfig {
    pub datalab: Credential<DatalabCredentials>,
    pub searchad: Credential<SearchAdCredentials>,
    pub openai: Credential<OpenAiCredentials>,
    pub endpoints: Endpoints,
    pub openai_settings: OpenAiSettings,
}

impl KeywordDataConfig {
    /// Build the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    ///
    /// Blank values are treated as missing. A credential group is
    /// configured only when every one of its variables is present.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let datalab = match (get("NAVER_CLIENT_ID"), get("NAVER_CLIENT_SECRET")) {
            (Some(client_id), Some(client_secret)) => Some(DatalabCredentials {
                client_id,
                client_secret,
            }),
            _ => None,
        };

        let searchad = match (
            get("NAVER_SEARCHAD_CUSTOMER_ID"),
            get("NAVER_SEARCHAD_ACCESS_LICENSE"),
            get("NAVER_SEARCHAD_SECRET_KEY"),
        ) {
            (Some(customer_id), Some(access_license), Some(secret_key)) => {
                Some(SearchAdCredentials {
                    customer_id,
                    access_license,
                    secret_key,
                })
            }
            _ => None,
        };

        let openai = get("OPENAI_API_KEY").map(|api_key| OpenAiCredentials { api_key });

        let defaults = Endpoints::default();
        let endpoints = Endpoints {
            datalab_url: get("NAVER_DATALAB_URL").unwrap_or(defaults.datalab_url),
            searchad_base_url: get("NAVER_SEARCHAD_BASE_URL")
                .unwrap_or(defaults.searchad_base_url),
            openai_base_url: get("OPENAI_BASE_URL").unwrap_or(defaults.openai_base_url),
        };

        let openai_settings = OpenAiSettings {
            model: get("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string()),
            temperature: DEFAULT_OPENAI_TEMPERATURE,
        };

        Self {
            datalab: datalab.into(),
            searchad: searchad.into(),
            openai: openai.into(),
            endpoints,
            openai_settings,
        }
    }
}
