//! LINE Messaging API client.
//!
//! Two sends exist: `reply`, bound to a triggering event's one-shot reply
//! token, and `push`, addressed to a user id at any time.

use reqwest::header::{HeaderMap, HeaderValue};
use serde_json::json;

use super::error::LineError;
use super::types::Message;

/// Default base URL for the LINE Messaging API.
const DEFAULT_BASE_URL: &str = "https://api.line.me";

/// Configuration for the LINE client.
#[derive(Debug, Clone)]
pub struct LineConfig {
    /// Channel access token for bearer authentication
    pub channel_access_token: String,
    /// Base URL for the API (defaults to production LINE)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl LineConfig {
    /// Create a new config with the given channel access token.
    pub fn new(channel_access_token: impl Into<String>) -> Self {
        Self {
            channel_access_token: channel_access_token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

/// LINE Messaging API client.
#[derive(Debug, Clone)]
pub struct LineClient {
    http: reqwest::Client,
    base_url: String,
}

impl LineClient {
    /// Create a new LINE client with the given configuration.
    pub fn new(config: LineConfig) -> Result<Self, LineError> {
        let mut headers = HeaderMap::new();

        let bearer = format!("Bearer {}", config.channel_access_token);
        let bearer = HeaderValue::from_str(&bearer).map_err(|_| LineError::Api {
            status: 0,
            message: "Invalid channel access token format".to_string(),
        })?;
        headers.insert(reqwest::header::AUTHORIZATION, bearer);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Reply to the event that carried `reply_token`. Each token works
    /// exactly once.
    pub async fn reply(&self, reply_token: &str, messages: &[Message]) -> Result<(), LineError> {
        self.post(
            "/v2/bot/message/reply",
            &json!({
                "replyToken": reply_token,
                "messages": messages,
            }),
        )
        .await
    }

    /// Push messages to a user, independent of any event.
    pub async fn push(&self, to: &str, messages: &[Message]) -> Result<(), LineError> {
        self.post(
            "/v2/bot/message/push",
            &json!({
                "to": to,
                "messages": messages,
            }),
        )
        .await
    }

    async fn post(&self, path: &str, body: &serde_json::Value) -> Result<(), LineError> {
        let url = format!("{}{}", self.base_url, path);

        let response = self.http.post(&url).json(body).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(LineError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(LineError::RateLimited);
        }

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(LineError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(())
    }
}
