use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Widget},
};
use unicode_width::UnicodeWidthStr;

use super::{bold_style, italic_style, legend_entry, HORIZONTAL_MARGIN, VERTICAL_MARGIN};
use crate::{
    app::App,
    lesson::LessonDescriptor,
    study::{self, StudySession},
};

const REVEAL_HINT: &str = "press space to reveal translation";
const FLIP_BACK_HINT: &str = "press space to flip back";

const CARD_PADDING: u16 = 8;
const CARD_HEIGHT: u16 = 5;

pub fn render(app: &App, lesson: &LessonDescriptor, area: Rect, buf: &mut Buffer) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .vertical_margin(VERTICAL_MARGIN)
        .constraints([
            Constraint::Length(1), // title
            Constraint::Length(1), // direction tabs
            Constraint::Length(1), // card counter
            Constraint::Min(CARD_HEIGHT),
            Constraint::Length(1), // legend
        ])
        .split(area);

    Paragraph::new(Span::styled(
        format!("{} - Flashcards", lesson.title()),
        bold_style().fg(Color::Green),
    ))
    .alignment(Alignment::Center)
    .render(chunks[0], buf);

    let Some(session) = app.nav.session().filter(|session| !session.is_empty()) else {
        Paragraph::new(Span::styled("No words in this lesson", italic_style()))
            .alignment(Alignment::Center)
            .render(chunks[3], buf);
        return;
    };

    render_direction_tabs(app, session, chunks[1], buf);

    Paragraph::new(Span::styled(
        format!("Card {} of {}", session.cursor() + 1, session.len()),
        Style::default().add_modifier(Modifier::DIM),
    ))
    .alignment(Alignment::Center)
    .render(chunks[2], buf);

    render_card(session, chunks[3], buf);

    let legend = Line::from(vec![
        legend_entry("(←) previous", session.has_previous()),
        Span::styled(" / (space) flip / ", italic_style()),
        legend_entry("(→) next", session.has_next()),
        Span::styled(
            " / (1/2) direction / (s)huffle / (b)ack / (esc) home",
            italic_style(),
        ),
    ]);
    Paragraph::new(legend).render(chunks[4], buf);
}

fn render_direction_tabs(app: &App, session: &StudySession, area: Rect, buf: &mut Buffer) {
    let store = app.nav.store();
    let (source, target) = (store.source_language(), store.target_language());
    let selected = match session.direction() {
        study::Direction::SourceToTarget => 0,
        study::Direction::TargetToSource => 1,
    };

    Tabs::new(vec![
        study::Direction::SourceToTarget.label(source, target),
        study::Direction::TargetToSource.label(source, target),
    ])
    .select(selected)
    .style(Style::default().add_modifier(Modifier::DIM))
    .highlight_style(bold_style().fg(Color::Yellow))
    .divider("|")
    .render(area, buf);
}

fn render_card(session: &StudySession, area: Rect, buf: &mut Buffer) {
    let text = session.visible_text().unwrap_or_default();
    let hint = if session.is_flipped() {
        FLIP_BACK_HINT
    } else {
        REVEAL_HINT
    };

    let content_width = text.width().max(hint.width()) as u16;
    let card = centered(
        area,
        content_width.saturating_add(CARD_PADDING),
        CARD_HEIGHT,
    );

    let border_style = if session.is_flipped() {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    Paragraph::new(vec![
        Line::from(Span::styled(text, bold_style())),
        Line::from(""),
        Line::from(Span::styled(
            hint,
            italic_style().add_modifier(Modifier::DIM),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style),
    )
    .render(card, buf);
}

/// A `width` x `height` rect centered in `area`, shrunk to fit
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
