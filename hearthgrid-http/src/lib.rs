use async_trait::async_trait;
use hearthgrid_core::{browsable, repo::CardSource, Card, CoreError};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info, warn};

pub mod endpoints;

pub use endpoints::DEFAULT_API_URL;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP error! status: {status}")]
    Status { status: StatusCode, body: String },

    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<FetchError> for CoreError {
    fn from(e: FetchError) -> Self {
        CoreError::Source(e.to_string())
    }
}

/// Reads card lists from a HearthstoneJSON-compatible server.
pub struct HttpCardSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCardSource {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let user_agent = format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        let client = reqwest::Client::builder()
            .connect_timeout(timeout)
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client, base_url: base_url.into() })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn download<T>(&self, url: &str) -> Result<T, FetchError>
    where
        T: DeserializeOwned,
    {
        debug!(%url, "fetching");
        let res = self.client.get(url).send().await?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            warn!(%url, %status, "card source returned an error");
            return Err(FetchError::Status { status, body });
        }

        let bytes = res.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    pub async fn catalog(&self) -> Result<Vec<Card>, FetchError> {
        let url = endpoints::catalog_url(&self.base_url);
        let cards: Vec<Card> = self.download(&url).await?;
        let fetched = cards.len();
        let cards = browsable(cards);
        info!(fetched, kept = cards.len(), "loaded card catalog");
        Ok(cards)
    }

    pub async fn all_cards(&self) -> Result<Vec<Card>, FetchError> {
        let url = endpoints::all_cards_url(&self.base_url);
        let cards: Vec<Card> = self.download(&url).await?;
        info!(fetched = cards.len(), "loaded full card list");
        Ok(cards)
    }
}

#[async_trait]
impl CardSource for HttpCardSource {
    async fn fetch_cards(&self) -> Result<Vec<Card>, CoreError> {
        Ok(self.catalog().await?)
    }

    async fn fetch_draw_pool(&self) -> Result<Vec<Card>, CoreError> {
        Ok(self.all_cards().await?)
    }
}
