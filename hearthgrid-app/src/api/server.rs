use axum::{routing::get, Router};
use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::api::routes::{draw, list_cards, list_classes, list_sets, AppState};
use hearthgrid_core::{Card, SetTable};

pub fn router(cards: Vec<Card>, sets: SetTable) -> Router {
    let state = Arc::new(AppState { cards: Arc::new(cards), sets: Arc::new(sets) });

    Router::new()
        .route("/cards", get(list_cards))
        .route("/sets", get(list_sets))
        .route("/classes", get(list_classes))
        .route("/draw", get(draw))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

pub async fn run(cards: Vec<Card>, sets: SetTable, addr: SocketAddr) -> anyhow::Result<()> {
    let app = router(cards, sets);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::{Request, StatusCode}};
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    fn fixture() -> Router {
        let mut cards = Vec::new();
        for (id, name, class, cost) in [
            ("OG_134", "Yogg-Saron, Hope's End", "NEUTRAL", 10),
            ("CS2_024", "Frostbolt", "MAGE", 2),
            ("CS2_029", "Fireball", "MAGE", 4),
        ] {
            let mut c = Card::new(id, name);
            c.card_class = Some(class.into());
            c.cost = Some(cost);
            c.collectible = Some(true);
            cards.push(c);
        }
        router(cards, SetTable::standard())
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let res = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = res.status();
        let bytes = res.into_body().collect().await.unwrap().to_bytes();
        let v = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, v)
    }

    #[tokio::test]
    async fn cards_are_filtered_and_sorted() {
        let (status, v) = get_json(fixture(), "/cards?class=MAGE&sort=cost&order=desc").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(v["total"], 2);
        assert_eq!(v["has_more"], false);
        assert_eq!(v["cards"][0]["name"], "Fireball");
        assert_eq!(v["cards"][1]["name"], "Frostbolt");
        assert_eq!(
            v["cards"][1]["image_url"],
            "https://art.hearthstonejson.com/v1/render/latest/enUS/256x/CS2_024.png"
        );
    }

    #[tokio::test]
    async fn bad_criteria_is_400() {
        let (status, _) = get_json(fixture(), "/cards?mana=lots").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let (status, _) = get_json(fixture(), "/cards?set=ATLANTIS").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn sets_and_classes() {
        let (_, sets) = get_json(fixture(), "/sets").await;
        assert_eq!(sets[0]["key"], "HEROES_OF_STARCRAFT");
        assert_eq!(sets[0]["name"], "Heroes Of Starcraft (Mini-set)");
        let (_, classes) = get_json(fixture(), "/classes").await;
        assert_eq!(classes, serde_json::json!(["MAGE", "NEUTRAL"]));
    }

    #[tokio::test]
    async fn draw_returns_a_card() {
        let (status, v) = get_json(fixture(), "/draw").await;
        assert_eq!(status, StatusCode::OK);
        assert!(v["id"].is_string());
    }
}
