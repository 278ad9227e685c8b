// UI module for rendering cards in a terminal.
// Lays cards out top to bottom, one fixed-height block each.

mod card;

use ratatui::{prelude::*, widgets::*};

use crate::card::MemoryCard;

pub use card::{CARD_HEIGHT, CardView};

/// Draw cards stacked vertically; cards that do not fit are not drawn.
pub fn draw_cards(frame: &mut Frame, cards: &[MemoryCard], area: Rect) {
    if cards.is_empty() {
        render_empty(frame, area, "No project cards");
        return;
    }

    let mut y = area.y;
    for card in cards {
        if area.bottom().saturating_sub(y) < CARD_HEIGHT {
            break;
        }
        let slot = Rect::new(area.x, y, area.width, CARD_HEIGHT);
        frame.render_widget(CardView::new(card), slot);
        y += CARD_HEIGHT;
    }
}

/// Render an empty state message.
fn render_empty(frame: &mut Frame, area: Rect, message: &str) {
    let text = Paragraph::new(message)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(text, area);
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::card::StatItem;

    fn screen(cards: &[MemoryCard], width: u16, height: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| draw_cards(frame, cards, frame.area()))
            .unwrap();

        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect())
            .collect()
    }

    #[test]
    fn test_cards_stacked() {
        let mut first = MemoryCard::new("https://github.com/acme/widget", "Widget", "One");
        first.stats = Some(vec![StatItem::Stars(42)]);
        let second = MemoryCard::new("https://github.com/acme/gadget", "Gadget", "Two");

        let rows = screen(&[first, second], 30, 12);
        assert!(rows[0].contains("Widget"));
        assert!(rows[3].contains("42"));
        assert!(rows[5].contains("Gadget"));
    }

    #[test]
    fn test_cards_that_do_not_fit_are_dropped() {
        let cards = vec![
            MemoryCard::new("https://github.com/a/one", "One", ""),
            MemoryCard::new("https://github.com/a/two", "Two", ""),
        ];

        let rows = screen(&cards, 30, 7);
        assert!(rows[0].contains("One"));
        assert!(rows.iter().all(|row| !row.contains("Two")));
    }

    #[test]
    fn test_area_at_bottom_edge_draws_nothing() {
        let cards = vec![MemoryCard::new("https://github.com/a/one", "One", "")];
        let mut terminal = Terminal::new(TestBackend::new(30, 3)).unwrap();
        terminal
            .draw(|frame| {
                let area = Rect::new(0, u16::MAX - 3, 30, 3);
                draw_cards(frame, &cards, area);
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        assert!(buffer.content().iter().all(|cell| cell.symbol() == " "));
    }

    #[test]
    fn test_empty_state() {
        let rows = screen(&[], 30, 3);
        assert!(rows[0].contains("No project cards"));
    }
}
