use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::AdminConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::{Booking, MovieSummary, ShowCreationRequest};

const NOW_PLAYING_PATH: &str = "/api/show/now-playing";
const ADD_SHOW_PATH: &str = "/api/show/add";
const ALL_BOOKINGS_PATH: &str = "/api/admin/all-bookings";

/// Hands out a bearer token for each request. Implementations talk to the
/// identity provider; the client never caches what they return.
#[async_trait]
pub trait TokenSource: Send + Sync {
    async fn token(&self) -> Result<String>;
}

/// A fixed token, for service accounts and the CLI.
#[derive(Debug, Clone)]
pub struct StaticToken(String);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

#[async_trait]
impl TokenSource for StaticToken {
    async fn token(&self) -> Result<String> {
        Ok(self.0.clone())
    }
}

#[async_trait]
pub trait ShowApi: Send + Sync {
    async fn now_playing(&self) -> ApiResult<Vec<MovieSummary>>;
    /// Returns the backend's confirmation message.
    async fn add_show(&self, request: &ShowCreationRequest) -> ApiResult<String>;
    async fn all_bookings(&self) -> ApiResult<Vec<Booking>>;
}

#[derive(Clone)]
pub struct ShowClient {
    client: Client,
    base_url: String,
    tokens: Arc<dyn TokenSource>,
}

impl ShowClient {
    pub fn new(base_url: &str, tokens: Arc<dyn TokenSource>) -> Result<Self> {
        let user_agent = format!("marquee/{}", env!("CARGO_PKG_VERSION"));
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(30))
            .user_agent(user_agent)
            .build()
            .context("Failed to build backend HTTP client")?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            tokens,
        })
    }

    pub fn from_config(config: &AdminConfig) -> Result<Self> {
        let tokens: Arc<dyn TokenSource> = Arc::new(StaticToken::new(config.api_token.clone()));
        Self::new(&config.api_url, tokens)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn authorized(&self, builder: RequestBuilder) -> ApiResult<RequestBuilder> {
        let token = self
            .tokens
            .token()
            .await
            .map_err(|e| ApiError::Token(e.to_string()))?;
        Ok(builder.bearer_auth(token))
    }

    async fn send(&self, builder: RequestBuilder, path: &str) -> ApiResult<Envelope> {
        let res = self.authorized(builder).await?.send().await?;
        let status = res.status();
        let text = res.text().await?;
        if !status.is_success() {
            warn!("{} -> {}", path, status);
            return Err(ApiError::Status { status, body: text });
        }
        let envelope: Envelope = serde_json::from_str(&text)?;
        debug!(path, success = envelope.success, "Backend replied");
        Ok(envelope)
    }

    async fn get_envelope(&self, path: &str) -> ApiResult<Envelope> {
        let builder = self.client.get(self.url(path));
        self.send(builder, path).await
    }
}

#[async_trait]
impl ShowApi for ShowClient {
    async fn now_playing(&self) -> ApiResult<Vec<MovieSummary>> {
        self.get_envelope(NOW_PLAYING_PATH)
            .await?
            .into_field("movies")
    }

    async fn add_show(&self, request: &ShowCreationRequest) -> ApiResult<String> {
        let builder = self.client.post(self.url(ADD_SHOW_PATH)).json(request);
        self.send(builder, ADD_SHOW_PATH).await?.into_message()
    }

    async fn all_bookings(&self) -> ApiResult<Vec<Booking>> {
        self.get_envelope(ALL_BOOKINGS_PATH)
            .await?
            .into_field("bookings")
    }
}

/// `{ success, message?, ...payload }` as every backend route answers.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope {
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(flatten)]
    rest: Map<String, Value>,
}

impl Envelope {
    fn rejection(self) -> ApiError {
        ApiError::Rejected(
            self.message
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| "Request failed".to_string()),
        )
    }

    pub(crate) fn into_field<T: DeserializeOwned>(mut self, field: &str) -> ApiResult<T> {
        if !self.success {
            return Err(self.rejection());
        }
        let value = self.rest.remove(field).unwrap_or(Value::Null);
        Ok(serde_json::from_value(value)?)
    }

    pub(crate) fn into_message(self) -> ApiResult<String> {
        if !self.success {
            return Err(self.rejection());
        }
        Ok(self.message.unwrap_or_default())
    }
}
