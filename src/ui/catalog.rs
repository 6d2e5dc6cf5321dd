use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use super::{bold_style, italic_style, HORIZONTAL_MARGIN, VERTICAL_MARGIN};
use crate::{app::App, lesson::LESSON_SIZE};

pub fn render(app: &App, area: Rect, buf: &mut Buffer) {
    let store = app.nav.store();
    let lessons = app.nav.catalog().lessons();
    let highlighted = app.catalog_state.highlighted;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .vertical_margin(VERTICAL_MARGIN)
        .constraints([
            Constraint::Length(1), // title
            Constraint::Length(1), // subtitle
            Constraint::Length(1),
            Constraint::Min(1), // lessons
            Constraint::Length(1),
            Constraint::Length(1), // legend
        ])
        .split(area);

    Paragraph::new(Span::styled(
        format!("Learning A Lottle {}", store.source_language()),
        bold_style().fg(Color::Green),
    ))
    .alignment(Alignment::Center)
    .render(chunks[0], buf);

    Paragraph::new(Span::styled(
        format!(
            "The {} most common {} words, {} at a time",
            store.len(),
            store.source_language(),
            LESSON_SIZE
        ),
        italic_style().add_modifier(Modifier::DIM),
    ))
    .alignment(Alignment::Center)
    .render(chunks[1], buf);

    let title_width = lessons
        .iter()
        .map(|lesson| lesson.title().width())
        .max()
        .unwrap_or(0);

    // keep the highlighted row on screen when the terminal is short
    let visible_rows = chunks[3].height.max(1) as usize;
    let skip = (highlighted + 1).saturating_sub(visible_rows);

    let lines: Vec<Line> = lessons
        .iter()
        .enumerate()
        .skip(skip)
        .map(|(idx, lesson)| {
            let key = lesson.id() % 10;
            let padding = " ".repeat(title_width - lesson.title().width());
            let row = format!(
                "({key})  {}{padding}   Words {}",
                lesson.title(),
                lesson.display_range()
            );
            if idx == highlighted {
                Line::from(Span::styled(
                    format!("▸ {row}"),
                    bold_style().fg(Color::Yellow),
                ))
            } else {
                Line::from(Span::raw(format!("  {row}")))
            }
        })
        .collect();

    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .render(chunks[3], buf);

    Paragraph::new(Span::styled(
        "(↑/↓) move / (1-0) pick / (enter) open / (q)uit",
        italic_style(),
    ))
    .render(chunks[5], buf);
}

#[cfg(test)]
mod tests {
    use crate::ui::test_support::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_catalog_lists_all_lessons() {
        let app = italian_app();
        let text = text(&render(&app, 100, 30));

        assert!(text.contains("Learning A Lottle Italian"));
        assert!(text.contains("Most Common 100 Words"));
        assert!(text.contains("Words 1-100"));
        assert!(text.contains("Words 901-1000"));
        assert!(text.contains("10th Most Common"));
    }

    #[test]
    fn test_highlight_marker_follows_state() {
        let mut app = italian_app();
        app.handle_key(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE));

        let rows = rows(&render(&app, 100, 30));
        let marked = rows
            .iter()
            .find(|row| row.contains('▸'))
            .expect("one highlighted row");

        assert!(marked.contains("Words 101-200"));
    }

    #[test]
    fn test_short_terminal_scrolls_to_highlight() {
        let mut app = italian_app();
        for _ in 0..9 {
            app.handle_key(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE));
        }

        let text = text(&render(&app, 100, 10));

        assert!(text.contains("Words 901-1000"));
        assert!(!text.contains("Words 1-100 "));
    }
}
