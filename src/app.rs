use crossterm::event::KeyEvent;

use crate::{
    keymap::{action_for, Action},
    lesson::LESSON_COUNT,
    navigation::{Intent, NavigationController, Transition, ViewState},
};

/// Which catalog row is highlighted
#[derive(Debug, Default)]
pub struct CatalogState {
    pub highlighted: usize,
}

#[derive(Debug, Default)]
pub struct WordListState {
    pub scroll_offset: usize,
}

/// Controller plus the purely presentational bits the renderer needs
#[derive(Debug)]
pub struct App {
    pub nav: NavigationController,
    pub catalog_state: CatalogState,
    pub word_list_state: WordListState,
    pub should_quit: bool,
}

impl App {
    pub fn new(nav: NavigationController) -> Self {
        Self {
            nav,
            catalog_state: CatalogState::default(),
            word_list_state: WordListState::default(),
            should_quit: false,
        }
    }

    /// Returns true when the key changed anything worth redrawing.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match action_for(self.nav.view(), key) {
            Some(action) => self.apply(action),
            None => false,
        }
    }

    pub fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::Dispatch(intent) => self.dispatch(intent) == Transition::Applied,
            Action::PickLesson(id) => self.open_lesson(id),
            Action::SelectHighlighted => {
                self.open_lesson(self.catalog_state.highlighted as u32 + 1)
            }
            Action::HighlightUp => {
                let before = self.catalog_state.highlighted;
                self.catalog_state.highlighted = before.saturating_sub(1);
                self.catalog_state.highlighted != before
            }
            Action::HighlightDown => {
                let before = self.catalog_state.highlighted;
                self.catalog_state.highlighted = (before + 1).min(LESSON_COUNT as usize - 1);
                self.catalog_state.highlighted != before
            }
            Action::ScrollUp(rows) => {
                let before = self.word_list_state.scroll_offset;
                self.word_list_state.scroll_offset = before.saturating_sub(rows);
                self.word_list_state.scroll_offset != before
            }
            Action::ScrollDown(rows) => {
                let before = self.word_list_state.scroll_offset;
                let max = self.nav.lesson_words().len().saturating_sub(1);
                self.word_list_state.scroll_offset = (before + rows).min(max);
                self.word_list_state.scroll_offset != before
            }
            Action::ScrollTop => {
                let moved = self.word_list_state.scroll_offset != 0;
                self.word_list_state.scroll_offset = 0;
                moved
            }
            Action::Quit => {
                self.should_quit = true;
                true
            }
        }
    }

    /// Selects lesson `id` from the catalog. Ignored outside the catalog or
    /// for ids that are not in it.
    pub fn open_lesson(&mut self, id: u32) -> bool {
        match self.nav.catalog().get(id).cloned() {
            Some(lesson) => self.dispatch(Intent::SelectLesson(lesson)) == Transition::Applied,
            None => false,
        }
    }

    fn dispatch(&mut self, intent: Intent) -> Transition {
        let before = self.nav.selected_lesson().map(|lesson| lesson.id());
        let transition = self.nav.dispatch(intent);
        let after = self.nav.selected_lesson().map(|lesson| lesson.id());

        if before != after {
            // A different word list always opens at the top
            self.word_list_state.scroll_offset = 0;
        }
        if let (Some(id), ViewState::Catalog) = (before, self.nav.view()) {
            self.catalog_state.highlighted = id as usize - 1;
        }

        transition
    }
}
