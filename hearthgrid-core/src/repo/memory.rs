use crate::{browsable, Card, CoreError};
use async_trait::async_trait;

/// Serves a fixed card list. Used for fixtures and for replaying a list
/// read from disk.
#[derive(Default)]
pub struct MemorySource {
    cards: Vec<Card>,
}

impl MemorySource {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Parses a HearthstoneJSON-style array.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let cards: Vec<Card> =
            serde_json::from_str(json).map_err(|e| CoreError::Source(e.to_string()))?;
        Ok(Self::new(cards))
    }
}

#[async_trait]
impl crate::repo::CardSource for MemorySource {
    /// Same catalog rules as the remote feed: hero records and id-less
    /// entries are not browsable.
    async fn fetch_cards(&self) -> Result<Vec<Card>, CoreError> {
        Ok(browsable(self.cards.clone()))
    }

    async fn fetch_draw_pool(&self) -> Result<Vec<Card>, CoreError> {
        Ok(self.cards.clone())
    }
}
