use crate::{Card, RARITY_COMMON, RARITY_EPIC, RARITY_FREE, RARITY_LEGENDARY, RARITY_RARE};
use rand::seq::SliceRandom;
use rand::Rng;

/// Picks one collectible, named card uniformly at random.
pub fn draw_random<'a, R: Rng + ?Sized>(cards: &'a [Card], rng: &mut R) -> Option<&'a Card> {
    let pool: Vec<&Card> = cards
        .iter()
        .filter(|c| c.is_collectible() && !c.name.is_empty())
        .collect();
    pool.choose(rng).copied()
}

/// Display colour for a rarity as an RGB hex string. Unknown rarities are white.
pub fn rarity_color(rarity: Option<&str>) -> &'static str {
    match rarity {
        Some(RARITY_LEGENDARY) => "#ff8c00",
        Some(RARITY_EPIC) => "#a335ee",
        Some(RARITY_RARE) => "#0070dd",
        Some(RARITY_COMMON) => "#ffffff",
        Some(RARITY_FREE) => "#808080",
        _ => "#ffffff",
    }
}
