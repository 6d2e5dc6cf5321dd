pub mod catalog;
pub mod flashcards;
pub mod word_list;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::Widget,
};

use crate::{app::App, navigation::ViewState};

const HORIZONTAL_MARGIN: u16 = 5;
const VERTICAL_MARGIN: u16 = 2;

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self.nav.view() {
            ViewState::Catalog => catalog::render(self, area, buf),
            ViewState::WordList(lesson) => word_list::render(self, lesson, area, buf),
            ViewState::Flashcards(lesson) => flashcards::render(self, lesson, area, buf),
        }
    }
}

fn bold_style() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

fn italic_style() -> Style {
    Style::default().add_modifier(Modifier::ITALIC)
}

/// Legend entries for moves that would be ignored are drawn dim
fn legend_entry(label: &str, enabled: bool) -> Span<'_> {
    if enabled {
        Span::styled(label, italic_style())
    } else {
        Span::styled(label, italic_style().add_modifier(Modifier::DIM))
    }
}
