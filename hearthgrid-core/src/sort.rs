use crate::{Card, SortField, SortOrder};
use std::cmp::{Ordering, Reverse};
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Primary collation key: decomposed, accents dropped, lowercased.
fn collation_key(s: &str) -> String {
    s.nfkd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Full sort key for a name: the folded key, then the raw string.
fn name_key(name: &str) -> (String, String) {
    (collation_key(name), name.to_string())
}

/// Locale-style name comparison. Letters compare without regard to case or
/// accents first; exact-string order breaks the remaining ties.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    name_key(a).cmp(&name_key(b))
}

pub fn compare_cards(a: &Card, b: &Card, field: SortField) -> Ordering {
    match field {
        SortField::Name => compare_names(&a.name, &b.name),
        SortField::Cost => a.cost_or_zero().cmp(&b.cost_or_zero()),
        SortField::Attack => a.attack_or_zero().cmp(&b.attack_or_zero()),
        SortField::Health => a.health_or_zero().cmp(&b.health_or_zero()),
    }
}

/// Stable in both directions: descending reverses the comparator, not the
/// output, so equal cards keep their input order. Name keys are built once
/// per card.
pub fn sort_cards(cards: &mut [Card], field: SortField, order: SortOrder) {
    match (field, order) {
        (SortField::Name, SortOrder::Asc) => cards.sort_by_cached_key(|c| name_key(&c.name)),
        (SortField::Name, SortOrder::Desc) => {
            cards.sort_by_cached_key(|c| Reverse(name_key(&c.name)))
        }
        (_, SortOrder::Asc) => cards.sort_by(|a, b| compare_cards(a, b, field)),
        (_, SortOrder::Desc) => cards.sort_by(|a, b| compare_cards(a, b, field).reverse()),
    }
}
