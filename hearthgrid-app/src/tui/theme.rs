use ratatui::style::{Color, Style};
use ratatui::style::Stylize;
use hearthgrid_core::rarity_color;

pub fn title_style() -> Style { Style::default().fg(Color::Cyan).bold() }
pub fn hint_style() -> Style { Style::default().fg(Color::DarkGray) }
pub fn selected_style() -> Style { Style::default().fg(Color::Yellow).bold() }
pub fn footer_style() -> Style { Style::default().fg(Color::Gray) }
pub fn error_style() -> Style { Style::default().fg(Color::Red) }

/// Terminal colour for a rarity, taken from the core hex palette.
pub fn rarity_style(rarity: Option<&str>) -> Style {
    Style::default().fg(hex_color(rarity_color(rarity)))
}

/// Parses `#rrggbb`; anything else falls back to white.
fn hex_color(hex: &str) -> Color {
    let rgb = hex
        .strip_prefix('#')
        .filter(|h| h.len() == 6 && h.chars().all(|c| c.is_ascii_hexdigit()))
        .and_then(|h| u32::from_str_radix(h, 16).ok());
    match rgb {
        Some(v) => Color::Rgb((v >> 16) as u8, (v >> 8) as u8, v as u8),
        None => Color::White,
    }
}
