use crate::display::detail_lines;
use crate::tui::theme::*;
use hearthgrid_core::{CatalogPage, Card, FilterCriteria};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

pub enum RightPane<'a> {
    Selected(&'a Card),
    Drawn(&'a Card),
    Empty(&'a str),
}

pub struct GalleryView<'a> {
    pub criteria: &'a FilterCriteria,
    pub set_label: String,
    pub page: &'a CatalogPage,
    pub sel: usize,
    pub searching: bool,
    pub status: Option<&'a str>,
    pub right: RightPane<'a>,
}

pub fn draw_ui(f: &mut Frame, area: Rect, view: &GalleryView) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(3), Constraint::Length(1)])
        .split(area);
    draw_filters(f, rows[0], view);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(rows[1]);
    draw_cards(f, cols[0], view.page, view.sel);
    draw_right(f, cols[1], &view.right);

    let foot = match view.status {
        Some(msg) => Paragraph::new(Line::from(Span::raw(msg))).style(error_style()),
        None => Paragraph::new(Line::from(vec![
            Span::raw(" ↑/k ↓/j move "),
            Span::raw(" l more "),
            Span::raw(" / search "),
            Span::raw(" c/C class "),
            Span::raw(" x/X set "),
            Span::raw(" m mana "),
            Span::raw(" t rotation "),
            Span::raw(" 1-4 sort "),
            Span::raw(" r draw "),
            Span::raw(" R reset "),
            Span::raw(" q quit "),
        ]))
        .style(footer_style()),
    };
    f.render_widget(foot, rows[2]);
}

fn draw_filters(f: &mut Frame, area: Rect, view: &GalleryView) {
    let c = view.criteria;
    let cursor = if view.searching { "_" } else { "" };
    let label = |s: &str| Span::raw(s.to_string()).style(title_style());
    let or_all = |s: &str| if s.is_empty() { "All".to_string() } else { s.to_string() };

    let lines = vec![
        Line::from(vec![
            label("Search: "),
            Span::raw(format!("{}{cursor}", c.search)),
            Span::raw("   "),
            label("Class: "),
            Span::raw(or_all(&c.class)),
            Span::raw("   "),
            label("Set: "),
            Span::raw(view.set_label.clone()),
        ]),
        Line::from(vec![
            label("Mana: "),
            Span::raw(c.mana.label()),
            Span::raw("   "),
            label("Rotation only: "),
            Span::raw(if c.rotation_only { "on" } else { "off" }),
            Span::raw("   "),
            label("Sort: "),
            Span::raw(format!("{} {}", c.sort_by, c.sort_order)),
        ]),
    ];
    let p = Paragraph::new(lines).block(Block::default().title("HearthGrid").borders(Borders::ALL));
    f.render_widget(p, area);
}

fn draw_cards(f: &mut Frame, area: Rect, page: &CatalogPage, sel: usize) {
    let items: Vec<_> = page
        .cards
        .iter()
        .map(|c| {
            ListItem::new(Line::from(vec![
                Span::raw(format!("({:>2}) ", c.cost_or_zero())).style(hint_style()),
                Span::raw(c.name.clone()).style(rarity_style(c.rarity.as_deref())),
            ]))
        })
        .collect();

    let more = if page.has_more { " (l for more)" } else { "" };
    let title = format!("Cards {} of {}{more}", page.displayed, page.total);
    let list = List::new(items)
        .block(Block::default().title(title).borders(Borders::ALL))
        .highlight_style(selected_style())
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if !page.cards.is_empty() {
        state.select(Some(sel.min(page.cards.len() - 1)));
    }
    f.render_stateful_widget(list, area, &mut state);
}

fn draw_right(f: &mut Frame, area: Rect, pane: &RightPane) {
    match pane {
        RightPane::Empty(msg) => {
            let p = Paragraph::new(*msg)
                .wrap(Wrap { trim: true })
                .block(Block::default().title("Card").borders(Borders::ALL));
            f.render_widget(p, area);
        }
        RightPane::Selected(card) => draw_card(f, area, card, "Card"),
        RightPane::Drawn(card) => draw_card(f, area, card, "Random draw (Esc to close)"),
    }
}

// Terminals cannot show the art, so the name stands in as the placeholder
// and the image URL is listed with the details.
fn draw_card(f: &mut Frame, area: Rect, card: &Card, title: &str) {
    let mut text = vec![
        Line::from(Span::raw(card.name.clone()).style(rarity_style(card.rarity.as_deref()))),
        Line::from(""),
    ];
    for (label, value) in detail_lines(card) {
        text.push(Line::from(vec![
            Span::raw(format!("{label}: ")).style(title_style()),
            Span::raw(value),
        ]));
    }
    let p = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .block(Block::default().title(title.to_string()).borders(Borders::ALL));
    f.render_widget(p, area);
}
