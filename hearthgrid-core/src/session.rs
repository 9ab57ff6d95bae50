use crate::{
    classes, compute_page, CatalogPage, Card, FilterCriteria, ManaBucket, SetTable, SortField,
};
use chrono::{DateTime, Utc};
use tracing::debug;

/// Browsing state for one user: the fetched card list (never mutated after
/// construction) plus the current criteria.
pub struct CatalogSession {
    cards: Vec<Card>,
    sets: SetTable,
    criteria: FilterCriteria,
}

impl CatalogSession {
    pub fn new(cards: Vec<Card>, sets: SetTable) -> Self {
        Self { cards, sets, criteria: FilterCriteria::default() }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn sets(&self) -> &SetTable {
        &self.sets
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn classes(&self) -> Vec<String> {
        classes(&self.cards)
    }

    fn changed(&mut self) {
        self.criteria.page = 1;
        debug!(criteria = ?self.criteria, "criteria changed");
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.criteria.search = term.into();
        self.changed();
    }

    pub fn set_class(&mut self, class: impl Into<String>) {
        self.criteria.class = class.into();
        self.changed();
    }

    pub fn set_set_key(&mut self, key: impl Into<String>) {
        self.criteria.set_key = key.into();
        self.changed();
    }

    pub fn set_mana(&mut self, bucket: ManaBucket) {
        self.criteria.mana = bucket;
        self.changed();
    }

    pub fn set_rotation_only(&mut self, on: bool) {
        self.criteria.rotation_only = on;
        self.changed();
    }

    /// Same field flips direction; a new field starts ascending.
    pub fn toggle_sort(&mut self, field: SortField) {
        if self.criteria.sort_by == field {
            self.criteria.sort_order = self.criteria.sort_order.flipped();
        } else {
            self.criteria.sort_by = field;
            self.criteria.sort_order = Default::default();
        }
        self.changed();
    }

    pub fn reset(&mut self) {
        self.criteria = FilterCriteria::default();
    }

    pub fn load_more(&mut self) {
        self.criteria.page += 1;
    }

    pub fn view(&self, now: DateTime<Utc>) -> CatalogPage {
        compute_page(&self.cards, &self.criteria, &self.sets, now)
    }
}
