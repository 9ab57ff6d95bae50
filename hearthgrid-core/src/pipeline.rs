//! Filter, sort, then paginate.
//!
//! Everything here is a pure function of its inputs. `now` is passed in so
//! the rotation window follows the caller's clock.

use crate::{filter_cards, sort_cards, Card, FilterCriteria, SetTable, PAGE_SIZE};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One rendered page of the catalog: the first `page * PAGE_SIZE` matches.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogPage {
    pub cards: Vec<Card>,
    pub displayed: usize,
    pub total: usize,
    pub page: usize,
    pub has_more: bool,
}

/// Every card that passes the filters, in display order.
pub fn filter_and_sort(
    cards: &[Card],
    criteria: &FilterCriteria,
    sets: &SetTable,
    now: DateTime<Utc>,
) -> Vec<Card> {
    let mut out = filter_cards(cards, criteria, sets, now.date_naive());
    sort_cards(&mut out, criteria.sort_by, criteria.sort_order);
    out
}

/// Number of cards shown for `page`, where pages below 1 count as 1.
pub fn visible_len(page: usize, total: usize) -> usize {
    page.max(1).saturating_mul(PAGE_SIZE).min(total)
}

pub fn paginate(mut sorted: Vec<Card>, page: usize) -> CatalogPage {
    let total = sorted.len();
    let displayed = visible_len(page, total);
    sorted.truncate(displayed);
    CatalogPage {
        cards: sorted,
        displayed,
        total,
        page: page.max(1),
        has_more: total > displayed,
    }
}

pub fn compute_page(
    cards: &[Card],
    criteria: &FilterCriteria,
    sets: &SetTable,
    now: DateTime<Utc>,
) -> CatalogPage {
    paginate(filter_and_sort(cards, criteria, sets, now), criteria.page)
}

pub fn compute_visible_cards(
    cards: &[Card],
    criteria: &FilterCriteria,
    sets: &SetTable,
    now: DateTime<Utc>,
) -> Vec<Card> {
    compute_page(cards, criteria, sets, now).cards
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(n: usize) -> Vec<Card> {
        (0..n)
            .map(|i| {
                let mut c = Card::new(format!("C{i:03}"), format!("Card {i:03}"));
                c.cost = Some((i % 10) as u32);
                c
            })
            .collect()
    }

    #[test]
    fn pagination_lengths() {
        let sets = SetTable::standard();
        let cards = numbered(45);
        let now = Utc::now();
        for (page, want, more) in [(1, 20, true), (2, 40, true), (3, 45, false), (9, 45, false)] {
            let criteria = FilterCriteria { page, ..FilterCriteria::default() };
            let p = compute_page(&cards, &criteria, &sets, now);
            assert_eq!(p.cards.len(), want);
            assert_eq!(p.displayed, want);
            assert_eq!(p.total, 45);
            assert_eq!(p.has_more, more);
        }
    }

    #[test]
    fn page_zero_behaves_like_first_page() {
        let p = paginate(numbered(30), 0);
        assert_eq!(p.page, 1);
        assert_eq!(p.displayed, 20);
    }

    #[test]
    fn empty_catalog() {
        let p = paginate(Vec::new(), 1);
        assert!(p.cards.is_empty());
        assert!(!p.has_more);
        assert_eq!(p.total, 0);
    }
}
