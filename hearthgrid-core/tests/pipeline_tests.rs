use chrono::{Duration, Months, Utc};
use hearthgrid_core::{
    compute_page, compute_visible_cards, filter_and_sort, Card, FilterCriteria, ManaBucket,
    SetInfo, SetTable, SortField, SortOrder, PAGE_SIZE,
};

fn card(name: &str, class: &str, cost: Option<u32>) -> Card {
    let mut c = Card::new(name.replace(' ', "_").to_uppercase(), name);
    if !class.is_empty() {
        c.card_class = Some(class.into());
    }
    c.cost = cost;
    c
}

fn yogg_and_frostbolt() -> Vec<Card> {
    vec![card("Yogg-Saron", "NEUTRAL", Some(10)), card("Frostbolt", "MAGE", Some(2))]
}

fn big_catalog() -> Vec<Card> {
    let classes = ["MAGE", "ROGUE", "NEUTRAL", ""];
    (0..137)
        .map(|i| {
            let mut c = card(&format!("Card {}", (i * 37) % 137), classes[i % 4], None);
            c.cost = if i % 5 == 0 { None } else { Some((i % 11) as u32) };
            c.attack = Some((i % 7) as u32);
            c.set = Some(if i % 3 == 0 { "CORE" } else { "GVG" }.into());
            c
        })
        .collect()
}

#[test]
fn class_filter_example() {
    let sets = SetTable::standard();
    let criteria = FilterCriteria { class: "MAGE".into(), ..FilterCriteria::default() };
    let out = compute_visible_cards(&yogg_and_frostbolt(), &criteria, &sets, Utc::now());
    let names: Vec<_> = out.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Frostbolt"]);
}

#[test]
fn search_example_is_case_insensitive() {
    let sets = SetTable::standard();
    let criteria = FilterCriteria { search: "frost".into(), ..FilterCriteria::default() };
    let out = compute_visible_cards(&yogg_and_frostbolt(), &criteria, &sets, Utc::now());
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].name, "Frostbolt");
}

#[test]
fn seven_plus_bucket() {
    let sets = SetTable::standard();
    let cards = vec![card("Big", "", Some(10)), card("Six", "", Some(6))];
    let criteria = FilterCriteria { mana: ManaBucket::SevenPlus, ..FilterCriteria::default() };
    let out = compute_visible_cards(&cards, &criteria, &sets, Utc::now());
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].name, "Big");
}

#[test]
fn rotation_boundaries_follow_the_clock() {
    let now = Utc::now();
    let cutoff = now.date_naive().checked_sub_months(Months::new(24)).unwrap();
    let fmt = |d: chrono::NaiveDate| d.format("%B %d, %Y").to_string();
    let sets = SetTable::new(vec![
        SetInfo::new("FRESH", 3, &fmt(cutoff + Duration::days(1)), false, Some("FRESH_API")),
        SetInfo::new("STALE", 2, &fmt(cutoff - Duration::days(1)), false, Some("STALE_API")),
        SetInfo::new("CORE", 1, "", false, Some("CORE")),
        SetInfo::new("LEGACY", 0, "", false, Some("LEGACY")),
    ]);
    let mut cards = Vec::new();
    for (name, set) in [("fresh", "FRESH_API"), ("stale", "STALE_API"), ("core", "CORE"), ("legacy", "LEGACY"), ("lost", "NOWHERE")] {
        let mut c = card(name, "", None);
        c.set = Some(set.into());
        cards.push(c);
    }
    cards.push(card("setless", "", None));

    let criteria = FilterCriteria { rotation_only: true, ..FilterCriteria::default() };
    let out = compute_visible_cards(&cards, &criteria, &sets, now);
    let mut names: Vec<_> = out.iter().map(|c| c.name.as_str()).collect();
    names.sort();
    assert_eq!(names, vec!["core", "fresh"]);
}

#[test]
fn cost_ascending_is_sorted() {
    let sets = SetTable::standard();
    let criteria = FilterCriteria {
        sort_by: SortField::Cost,
        sort_order: SortOrder::Asc,
        page: 100,
        ..FilterCriteria::default()
    };
    let out = compute_visible_cards(&big_catalog(), &criteria, &sets, Utc::now());
    assert_eq!(out.len(), 137);
    for w in out.windows(2) {
        assert!(w[0].cost.unwrap_or(0) <= w[1].cost.unwrap_or(0));
    }
}

#[test]
fn output_is_prefix_of_sorted_filtered_and_idempotent() {
    let sets = SetTable::standard();
    let now = Utc::now();
    let cards = big_catalog();
    let criteria = FilterCriteria {
        class: "ROGUE".into(),
        sort_by: SortField::Attack,
        sort_order: SortOrder::Desc,
        page: 1,
        ..FilterCriteria::default()
    };
    let full = filter_and_sort(&cards, &criteria, &sets, now);
    let a = compute_visible_cards(&cards, &criteria, &sets, now);
    let b = compute_visible_cards(&cards, &criteria, &sets, now);
    assert_eq!(a, b);
    assert_eq!(&full[..a.len()], &a[..]);

    // every visible card comes from the input
    for c in &a {
        assert!(cards.contains(c));
    }
}

#[test]
fn pages_grow_monotonically() {
    let sets = SetTable::standard();
    let now = Utc::now();
    let cards = big_catalog();
    let mut prev: Vec<Card> = Vec::new();
    for page in 1..=9 {
        let criteria = FilterCriteria { page, ..FilterCriteria::default() };
        let p = compute_page(&cards, &criteria, &sets, now);
        assert_eq!(p.cards.len(), (page * PAGE_SIZE).min(p.total));
        assert_eq!(&p.cards[..prev.len()], &prev[..]);
        assert_eq!(p.has_more, p.total > p.cards.len());
        prev = p.cards;
    }
}

#[test]
fn search_is_conjunctive_with_other_filters() {
    let sets = SetTable::standard();
    let criteria = FilterCriteria {
        search: "o".into(),
        class: "MAGE".into(),
        ..FilterCriteria::default()
    };
    let out = compute_visible_cards(&yogg_and_frostbolt(), &criteria, &sets, Utc::now());
    let names: Vec<_> = out.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Frostbolt"]);
}
