use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table, Widget},
};

use super::{bold_style, italic_style, legend_entry, HORIZONTAL_MARGIN, VERTICAL_MARGIN};
use crate::{app::App, lesson::LessonDescriptor};

pub fn render(app: &App, lesson: &LessonDescriptor, area: Rect, buf: &mut Buffer) {
    let store = app.nav.store();
    let words = app.nav.lesson_words();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .vertical_margin(VERTICAL_MARGIN)
        .constraints([
            Constraint::Length(1), // lesson title
            Constraint::Length(1), // range
            Constraint::Min(3),    // table
            Constraint::Length(1), // legend
        ])
        .split(area);

    Paragraph::new(Span::styled(lesson.title(), bold_style().fg(Color::Green)))
        .alignment(Alignment::Center)
        .render(chunks[0], buf);

    Paragraph::new(Span::styled(
        format!("Words {} ({} words)", lesson.display_range(), words.len()),
        italic_style().add_modifier(Modifier::DIM),
    ))
    .alignment(Alignment::Center)
    .render(chunks[1], buf);

    if words.is_empty() {
        Paragraph::new(Span::styled("No words in this lesson", italic_style()))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL))
            .render(chunks[2], buf);
    } else {
        let header = Row::new(vec![
            "Rank".to_string(),
            store.source_language().to_string(),
            store.target_language().to_string(),
        ])
        .style(bold_style());

        let rows = words
            .iter()
            .skip(app.word_list_state.scroll_offset)
            .map(|word| {
                Row::new(vec![
                    word.rank.to_string(),
                    word.source.clone(),
                    word.target.clone(),
                ])
            });

        Table::new(
            rows,
            [
                Constraint::Length(6),
                Constraint::Percentage(47),
                Constraint::Percentage(47),
            ],
        )
        .header(header)
        .block(Block::default().borders(Borders::ALL))
        .render(chunks[2], buf);
    }

    let legend = Line::from(vec![
        legend_entry("(p)revious", app.nav.has_previous_lesson()),
        Span::styled(" / ", italic_style()),
        legend_entry("(n)ext", app.nav.has_next_lesson()),
        Span::styled(
            " / (↑/↓) scroll / (f)lashcards / (b)ack",
            Style::default().add_modifier(Modifier::ITALIC),
        ),
    ]);
    Paragraph::new(legend).render(chunks[3], buf);
}
