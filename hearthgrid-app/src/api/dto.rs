use hearthgrid_core::{images, CatalogPage, Card, SetTable};
use serde::Serialize;

#[derive(Serialize)]
pub struct CardOut {
    pub id: String,
    pub name: String,
    pub cost: Option<u32>,
    pub attack: Option<u32>,
    pub health: Option<u32>,
    pub text: Option<String>,
    pub flavor: Option<String>,
    pub rarity: Option<String>,
    #[serde(rename = "type")]
    pub card_type: Option<String>,
    pub card_class: Option<String>,
    pub set: Option<String>,
    pub image_url: String,
    pub tile_url: String,
}

impl From<Card> for CardOut {
    fn from(c: Card) -> Self {
        let image_url = images::render_url(&c.id);
        let tile_url = images::tile_url(&c.id);
        Self {
            id: c.id,
            name: c.name,
            cost: c.cost,
            attack: c.attack,
            health: c.health,
            text: c.text,
            flavor: c.flavor,
            rarity: c.rarity,
            card_type: c.card_type,
            card_class: c.card_class,
            set: c.set,
            image_url,
            tile_url,
        }
    }
}

#[derive(Serialize)]
pub struct PageOut {
    pub cards: Vec<CardOut>,
    pub displayed: usize,
    pub total: usize,
    pub page: usize,
    pub has_more: bool,
}

impl From<CatalogPage> for PageOut {
    fn from(p: CatalogPage) -> Self {
        Self {
            cards: p.cards.into_iter().map(CardOut::from).collect(),
            displayed: p.displayed,
            total: p.total,
            page: p.page,
            has_more: p.has_more,
        }
    }
}

#[derive(Serialize)]
pub struct SetOut {
    pub key: String,
    pub name: String,
    pub order: i32,
    pub date: String,
    pub is_mini_set: bool,
    pub in_rotation: bool,
}

pub fn sets_out(sets: &SetTable, today: chrono::NaiveDate) -> Vec<SetOut> {
    sets.newest_first()
        .into_iter()
        .filter_map(|key| sets.get(key))
        .map(|s| SetOut {
            key: s.key.clone(),
            name: sets.format_name(&s.key),
            order: s.order,
            date: s.date.clone(),
            is_mini_set: s.is_mini_set,
            in_rotation: sets.is_in_rotation(&s.key, today),
        })
        .collect()
}
