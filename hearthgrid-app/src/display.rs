use hearthgrid_core::{images, rarity_color, Card};

/// Card text from the API carries markup (`<b>`, `[x]`, `$`/`#` damage
/// markers, `\n`). Strip it down to plain text for terminals.
pub fn plain_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_tag = false;
    for ch in raw.replace("[x]", "").chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if in_tag => {}
            '$' | '#' => {}
            '\n' => out.push(' '),
            c => out.push(c),
        }
    }
    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn stat_line(card: &Card) -> String {
    let mut parts = vec![format!("Cost: {}", card.cost_or_zero())];
    if let Some(a) = card.attack {
        parts.push(format!("Attack: {a}"));
    }
    if let Some(h) = card.health {
        parts.push(format!("Health: {h}"));
    }
    if let Some(a) = card.armor {
        parts.push(format!("Armor: {a}"));
    }
    parts.join("  ")
}

/// Labelled detail lines for one card, skipping absent fields.
pub fn detail_lines(card: &Card) -> Vec<(&'static str, String)> {
    let mut v = vec![
        ("Class", format!("{} - {}", card.class_label(), card.card_type.as_deref().unwrap_or("?"))),
        ("Stats", stat_line(card)),
    ];
    if let Some(t) = &card.text {
        v.push(("Text", plain_text(t)));
    }
    if let Some(m) = card.mechanics.as_ref().filter(|m| !m.is_empty()) {
        v.push(("Mechanics", m.join(", ")));
    }
    if let Some(s) = &card.set {
        v.push(("Set", s.clone()));
    }
    if let Some(r) = &card.rarity {
        v.push(("Rarity", format!("{r} ({})", rarity_color(Some(r)))));
    }
    if let Some(f) = &card.flavor {
        v.push(("Flavor", format!("\"{}\"", plain_text(f))));
    }
    if let Some(a) = &card.artist {
        v.push(("Artist", a.clone()));
    }
    v.push(("Image", images::render_url(&card.id)));
    v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_markup() {
        assert_eq!(plain_text("[x]Deal $3 damage and <b>Freeze</b> it."), "Deal 3 damage and Freeze it.");
        assert_eq!(plain_text("Gain #4 Armor.\nDraw a card."), "Gain 4 Armor. Draw a card.");
    }

    #[test]
    fn details_skip_absent_fields() {
        let mut c = Card::new("CS2_024", "Frostbolt");
        c.cost = Some(2);
        let labels: Vec<_> = detail_lines(&c).into_iter().map(|(l, _)| l).collect();
        assert_eq!(labels, vec!["Class", "Stats", "Image"]);
        assert_eq!(stat_line(&c), "Cost: 2");
    }
}
