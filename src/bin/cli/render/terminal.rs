use daily_cards_lib::cards::{Card, DayKey};

/// ANSI color codes
pub struct Color;

impl Color {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";
}

/// Render the day's cards, separated by blank lines
pub fn render_cards(day_key: &DayKey, cards: &[&Card], use_color: bool) -> String {
    let mut lines = vec![paint(&format!("Cards for {}", day_key), Color::DIM, use_color)];

    for card in cards {
        lines.push(String::new());
        lines.extend(render_card(card, use_color));
    }

    lines.join("\n")
}

/// word, situation, example, sentence, meaning - always in that order
pub fn render_card(card: &Card, use_color: bool) -> Vec<String> {
    vec![
        paint(&card.word, Color::BOLD, use_color),
        format!("상황: {}", card.situation),
        paint(&format!("예: {}", card.example), Color::GRAY, use_color),
        paint(&format!("→ {}", card.sentence), Color::CYAN, use_color),
        format!("뜻: {}", card.meaning),
    ]
}

fn paint(text: &str, color: &str, use_color: bool) -> String {
    if use_color {
        format!("{}{}{}", color, text, Color::RESET)
    } else {
        text.to_string()
    }
}
