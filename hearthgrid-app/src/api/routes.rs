use axum::{extract::{Query, State}, http::StatusCode, Json};
use chrono::Utc;
use std::sync::Arc;
use tracing::debug;

use hearthgrid_core::{classes, compute_page, draw_random, Card, CriteriaInput, SetTable};

use crate::api::dto::{sets_out, CardOut, PageOut, SetOut};

/// The card list is fetched once at startup and only read afterwards.
#[derive(Clone)]
pub struct AppState {
    pub cards: Arc<Vec<Card>>,
    pub sets: Arc<SetTable>,
}

pub async fn list_cards(State(st): State<Arc<AppState>>, Query(q): Query<CriteriaInput>)
    -> Result<Json<PageOut>, StatusCode>
{
    let criteria = q.into_criteria(&st.sets).map_err(|_| StatusCode::BAD_REQUEST)?;
    debug!(?criteria, "list cards");
    let page = compute_page(&st.cards, &criteria, &st.sets, Utc::now());
    Ok(Json(page.into()))
}

pub async fn list_sets(State(st): State<Arc<AppState>>) -> Json<Vec<SetOut>> {
    Json(sets_out(&st.sets, Utc::now().date_naive()))
}

pub async fn list_classes(State(st): State<Arc<AppState>>) -> Json<Vec<String>> {
    Json(classes(&st.cards))
}

pub async fn draw(State(st): State<Arc<AppState>>) -> Result<Json<CardOut>, StatusCode> {
    let card = draw_random(&st.cards, &mut rand::thread_rng())
        .cloned()
        .ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(card.into()))
}
