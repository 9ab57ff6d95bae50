use crate::{Card, CoreError};
use async_trait::async_trait;

pub mod memory;

/// Where the card list comes from. Implementations return the full list in
/// one call; callers fetch once per session.
#[async_trait]
pub trait CardSource: Send + Sync {
    /// Browsable catalog cards.
    async fn fetch_cards(&self) -> Result<Vec<Card>, CoreError>;

    /// Cards eligible for a random draw. Defaults to the catalog list.
    async fn fetch_draw_pool(&self) -> Result<Vec<Card>, CoreError> {
        self.fetch_cards().await
    }
}
