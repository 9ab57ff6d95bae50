pub const ART_BASE: &str = "https://art.hearthstonejson.com/v1";

/// Full card render, 256px wide.
pub fn render_url(card_id: &str) -> String {
    format!("{ART_BASE}/render/latest/enUS/256x/{card_id}.png")
}

/// Deck-list tile art.
pub fn tile_url(card_id: &str) -> String {
    format!("{ART_BASE}/tiles/{card_id}.png")
}
