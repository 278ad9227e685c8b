// Card widget for terminal rendering.
// Shows the title in the border, the description, and a stats line.

use ratatui::{prelude::*, widgets::*};

use crate::card::{MemoryCard, StatItem};

/// Rows a card needs: two borders, two description rows, stats.
pub const CARD_HEIGHT: u16 = 5;

/// Terminal view of a [`MemoryCard`].
pub struct CardView<'a> {
    card: &'a MemoryCard,
}

impl<'a> CardView<'a> {
    pub fn new(card: &'a MemoryCard) -> Self {
        Self { card }
    }
}

impl Widget for CardView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" {} ", self.card.title))
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            );

        let inner = block.inner(area);
        block.render(area, buf);

        // Stats keep the last row however far the description wraps.
        let [description_area, stats_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);

        Paragraph::new(self.card.description.as_str())
            .wrap(Wrap { trim: true })
            .render(description_area, buf);
        stats_line(self.card).render(stats_area, buf);
    }
}

/// Stats line, or the loading indicator while a fetch is in progress.
fn stats_line(card: &MemoryCard) -> Line<'static> {
    if card.loading {
        return Line::from(Span::styled(
            "⏳ Loading...",
            Style::default().fg(Color::Yellow),
        ));
    }

    let Some(stats) = &card.stats else {
        return Line::default();
    };

    let mut spans = Vec::with_capacity(stats.len() * 2);
    for (i, item) in stats.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        let text = match item.icon() {
            Some(icon) => format!("{} {}", icon, item.text()),
            None => item.text(),
        };
        spans.push(Span::styled(text, stat_style(item)));
    }
    Line::from(spans)
}

fn stat_style(item: &StatItem) -> Style {
    match item {
        StatItem::Stars(_) => Style::default().fg(Color::Yellow),
        StatItem::Forks(_) => Style::default().fg(Color::Green),
        StatItem::Language(_) => Style::default().fg(Color::Magenta),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(card: &MemoryCard, width: u16) -> Vec<String> {
        let area = Rect::new(0, 0, width, CARD_HEIGHT);
        let mut buf = Buffer::empty(area);
        CardView::new(card).render(area, &mut buf);
        buf.content()
            .chunks(width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect())
            .collect()
    }

    #[test]
    fn test_populated_card() {
        let mut card = MemoryCard::new("https://github.com/acme/widget", "Widget Project", "Widgets");
        card.stats = Some(vec![
            StatItem::Stars(2500),
            StatItem::Forks(7),
            StatItem::Language("Rust".to_string()),
        ]);

        let rows = rows(&card, 40);
        assert!(rows[0].contains("Widget Project"));
        assert!(rows[1].contains("Widgets"));
        assert!(rows[3].contains("2.5k"));
        assert!(rows[3].contains("7"));
        assert!(rows[3].contains("Rust"));
    }

    #[test]
    fn test_loading_card() {
        let mut card = MemoryCard::new("https://github.com/acme/widget", "widget", "");
        card.loading = true;

        let rows = rows(&card, 40);
        assert!(rows[3].contains("Loading"));
    }

    #[test]
    fn test_long_description_keeps_stats_row() {
        let mut card = MemoryCard::new(
            "https://github.com/acme/widget",
            "Widget Project",
            "A fairly long description that will certainly wrap in forty columns",
        );
        card.stats = Some(vec![StatItem::Stars(42)]);

        let rows = rows(&card, 40);
        assert!(rows[1].contains("fairly long"));
        assert!(rows[2].contains("columns"));
        assert!(rows[3].contains("★ 42"));

        card.loading = true;
        let rows = self::rows(&card, 40);
        assert!(rows[3].contains("Loading"));
    }

    #[test]
    fn test_unaugmented_card_has_no_stats() {
        let card = MemoryCard::new("https://github.com/acme/widget", "widget", "Default text");

        let rows = rows(&card, 40);
        assert!(rows[1].contains("Default text"));
        assert_eq!(rows[3].trim_matches(|c| c == '│' || c == ' '), "");
    }
}
