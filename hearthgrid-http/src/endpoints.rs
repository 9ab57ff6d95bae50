pub const DEFAULT_API_URL: &str = "https://api.hearthstonejson.com";

const CATALOG_PATH: &str = "v1/latest/enUS/cards.collectible.json";
const ALL_CARDS_PATH: &str = "v1/latest/enUS/cards.json";

fn join(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path)
}

/// Collectible cards only; the gallery's source.
pub fn catalog_url(base: &str) -> String {
    join(base, CATALOG_PATH)
}

/// Every card record, collectible or not; the draw filters it.
pub fn all_cards_url(base: &str) -> String {
    join(base, ALL_CARDS_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_tolerated() {
        assert_eq!(
            catalog_url("https://api.hearthstonejson.com/"),
            "https://api.hearthstonejson.com/v1/latest/enUS/cards.collectible.json"
        );
        assert_eq!(all_cards_url("http://127.0.0.1:9"), "http://127.0.0.1:9/v1/latest/enUS/cards.json");
    }
}
