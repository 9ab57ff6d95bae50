use crate::{Card, FilterCriteria, ManaBucket, SetTable};
use chrono::NaiveDate;

pub fn matches_class(card: &Card, class: &str) -> bool {
    class.is_empty() || card.card_class.as_deref() == Some(class)
}

/// A selected set with no API name matches nothing.
pub fn matches_set(card: &Card, set_key: &str, sets: &SetTable) -> bool {
    if set_key.is_empty() {
        return true;
    }
    match (sets.api_name(set_key), card.set.as_deref()) {
        (Some(api), Some(set)) => api == set,
        _ => false,
    }
}

pub fn matches_mana(card: &Card, bucket: ManaBucket) -> bool {
    bucket.matches(card.cost)
}

pub fn matches_rotation(card: &Card, sets: &SetTable, today: NaiveDate) -> bool {
    card.set
        .as_deref()
        .and_then(|api| sets.key_for_api_name(api))
        .map(|key| sets.is_in_rotation(key, today))
        .unwrap_or(false)
}

/// Case-insensitive substring match over name, text, flavor, rarity and
/// type. An empty query matches everything.
pub fn matches_search(card: &Card, query: &str) -> bool {
    let q = query.to_lowercase();
    if q.is_empty() {
        return true;
    }
    card.name.to_lowercase().contains(&q)
        || [&card.text, &card.flavor, &card.rarity, &card.card_type]
            .into_iter()
            .flatten()
            .any(|field| field.to_lowercase().contains(&q))
}

/// All active predicates must hold. Search is one more conjunct, it does
/// not override the other filters.
pub fn card_passes(card: &Card, criteria: &FilterCriteria, sets: &SetTable, today: NaiveDate) -> bool {
    matches_class(card, &criteria.class)
        && matches_set(card, &criteria.set_key, sets)
        && matches_mana(card, criteria.mana)
        && (!criteria.rotation_only || matches_rotation(card, sets, today))
        && matches_search(card, &criteria.search)
}

pub fn filter_cards(cards: &[Card], criteria: &FilterCriteria, sets: &SetTable, today: NaiveDate) -> Vec<Card> {
    cards
        .iter()
        .filter(|c| card_passes(c, criteria, sets, today))
        .cloned()
        .collect()
}

/// Distinct non-empty classes present in `cards`, sorted.
pub fn classes(cards: &[Card]) -> Vec<String> {
    let mut v: Vec<String> = cards
        .iter()
        .filter_map(|c| c.card_class.clone())
        .filter(|c| !c.is_empty())
        .collect();
    v.sort();
    v.dedup();
    v
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(name: &str, class: Option<&str>, set: Option<&str>, cost: Option<u32>) -> Card {
        let mut c = Card::new(name.to_lowercase(), name);
        c.card_class = class.map(Into::into);
        c.set = set.map(Into::into);
        c.cost = cost;
        c
    }

    #[test]
    fn class_filter_is_exact() {
        let c = card("Frostbolt", Some("MAGE"), None, Some(2));
        assert!(matches_class(&c, ""));
        assert!(matches_class(&c, "MAGE"));
        assert!(!matches_class(&c, "mage"));
        let neutral = card("Wisp", None, None, Some(0));
        assert!(!matches_class(&neutral, "MAGE"));
    }

    #[test]
    fn set_filter_uses_api_name() {
        let sets = SetTable::standard();
        let c = card("Boom", None, Some("BOOMS_INVENTIONS"), None);
        assert!(matches_set(&c, "DR_BOOMS_INCREDIBLE_INVENTIONS", &sets));
        assert!(!matches_set(&c, "BOOMS_INVENTIONS", &sets));
        assert!(!matches_set(&c, "UNKNOWN_SET", &sets));
    }

    #[test]
    fn set_without_api_name_matches_nothing() {
        let sets = SetTable::new(vec![crate::SetInfo::new("LOST", 0, "", false, None)]);
        let c = card("Any", None, Some("LOST"), None);
        assert!(!matches_set(&c, "LOST", &sets));
    }

    #[test]
    fn search_skips_absent_fields() {
        let mut c = card("Frostbolt", Some("MAGE"), None, Some(2));
        assert!(matches_search(&c, "FROST"));
        assert!(!matches_search(&c, "freeze"));
        c.text = Some("Deal 3 damage and <b>Freeze</b> it.".into());
        assert!(matches_search(&c, "freeze"));
        c.rarity = Some("FREE".into());
        assert!(matches_search(&c, "free"));
    }

    #[test]
    fn search_does_not_bypass_other_filters() {
        let sets = SetTable::standard();
        let today = NaiveDate::from_ymd_opt(2026, 10, 15).unwrap();
        let c = card("Frostbolt", Some("MAGE"), Some("CORE"), Some(2));
        let criteria = FilterCriteria {
            search: "frost".into(),
            class: "WARRIOR".into(),
            ..FilterCriteria::default()
        };
        assert!(!card_passes(&c, &criteria, &sets, today));
    }

    #[test]
    fn class_facets() {
        let v = vec![
            card("a", Some("MAGE"), None, None),
            card("b", None, None, None),
            card("c", Some("DRUID"), None, None),
            card("d", Some("MAGE"), None, None),
        ];
        assert_eq!(classes(&v), vec!["DRUID".to_string(), "MAGE".to_string()]);
    }
}
