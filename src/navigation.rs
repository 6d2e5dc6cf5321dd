use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::{debug, trace};

use crate::{
    lesson::{LessonCatalog, LessonDescriptor},
    study::{Direction, StudySession},
    words::{WordRecord, WordStore},
};

/// The screen currently in front of the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    Catalog,
    WordList(LessonDescriptor),
    Flashcards(LessonDescriptor),
}

/// A discrete user request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    SelectLesson(LessonDescriptor),
    Back,
    StartFlashcards,
    NextLesson,
    PreviousLesson,
    Flip,
    Advance,
    Retreat,
    SetDirection(Direction),
    Reshuffle,
    Home,
}

/// Outcome of dispatching an [`Intent`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Applied,
    Ignored,
}

impl From<bool> for Transition {
    fn from(applied: bool) -> Self {
        if applied {
            Transition::Applied
        } else {
            Transition::Ignored
        }
    }
}

/// Owns the view state machine and the flashcard session.
///
/// Every intent is total: it either moves the machine or is ignored. The
/// renderer only reads from here.
#[derive(Debug)]
pub struct NavigationController<R: Rng = StdRng> {
    store: WordStore,
    catalog: LessonCatalog,
    view: ViewState,
    session: Option<StudySession>,
    default_direction: Direction,
    rng: R,
}

impl NavigationController<StdRng> {
    pub fn new(store: WordStore, default_direction: Direction) -> Self {
        Self::with_rng(store, default_direction, StdRng::from_entropy())
    }
}

impl<R: Rng> NavigationController<R> {
    pub fn with_rng(store: WordStore, default_direction: Direction, rng: R) -> Self {
        Self {
            store,
            catalog: LessonCatalog::new(),
            view: ViewState::Catalog,
            session: None,
            default_direction,
            rng,
        }
    }

    pub fn dispatch(&mut self, intent: Intent) -> Transition {
        let transition = match &intent {
            Intent::SelectLesson(lesson) => self.select_lesson(lesson.clone()),
            Intent::Back => self.back(),
            Intent::StartFlashcards => self.start_flashcards(),
            Intent::NextLesson => self.step_lesson(LessonCatalog::next),
            Intent::PreviousLesson => self.step_lesson(LessonCatalog::previous),
            Intent::Home => self.home(),
            Intent::Flip => self.with_session(|session, _| {
                session.flip();
                true
            }),
            Intent::Advance => self.with_session(|session, _| session.advance()),
            Intent::Retreat => self.with_session(|session, _| session.retreat()),
            Intent::SetDirection(direction) => {
                let direction = *direction;
                self.with_session(|session, _| {
                    session.set_direction(direction);
                    true
                })
            }
            Intent::Reshuffle => self.with_session(|session, rng| {
                session.reshuffle(rng);
                true
            }),
        };

        match transition {
            Transition::Applied => debug!(?intent, view = self.view_name(), "intent applied"),
            Transition::Ignored => trace!(?intent, view = self.view_name(), "intent ignored"),
        }

        transition
    }

    fn select_lesson(&mut self, lesson: LessonDescriptor) -> Transition {
        if self.view != ViewState::Catalog {
            return Transition::Ignored;
        }
        self.view = ViewState::WordList(lesson);
        Transition::Applied
    }

    fn back(&mut self) -> Transition {
        match &self.view {
            ViewState::Catalog => Transition::Ignored,
            ViewState::WordList(_) => {
                self.view = ViewState::Catalog;
                Transition::Applied
            }
            ViewState::Flashcards(lesson) => {
                self.view = ViewState::WordList(lesson.clone());
                self.session = None;
                Transition::Applied
            }
        }
    }

    fn home(&mut self) -> Transition {
        if !matches!(self.view, ViewState::Flashcards(_)) {
            return Transition::Ignored;
        }
        self.view = ViewState::Catalog;
        self.session = None;
        Transition::Applied
    }

    fn start_flashcards(&mut self) -> Transition {
        let ViewState::WordList(lesson) = &self.view else {
            return Transition::Ignored;
        };
        let lesson = lesson.clone();

        let words = self.store.slice(lesson.start_index(), lesson.end_index());
        self.session = Some(StudySession::new(
            words,
            self.default_direction,
            &mut self.rng,
        ));
        self.view = ViewState::Flashcards(lesson);
        Transition::Applied
    }

    fn step_lesson(
        &mut self,
        neighbor: fn(&LessonDescriptor) -> Option<LessonDescriptor>,
    ) -> Transition {
        let ViewState::WordList(lesson) = &self.view else {
            return Transition::Ignored;
        };

        match neighbor(lesson) {
            Some(next) => {
                self.view = ViewState::WordList(next);
                Transition::Applied
            }
            None => Transition::Ignored,
        }
    }

    fn with_session<F>(&mut self, op: F) -> Transition
    where
        F: FnOnce(&mut StudySession, &mut R) -> bool,
    {
        match (&self.view, self.session.as_mut()) {
            (ViewState::Flashcards(_), Some(session)) => op(session, &mut self.rng).into(),
            _ => Transition::Ignored,
        }
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    fn view_name(&self) -> &'static str {
        match self.view {
            ViewState::Catalog => "catalog",
            ViewState::WordList(_) => "word-list",
            ViewState::Flashcards(_) => "flashcards",
        }
    }

    pub fn selected_lesson(&self) -> Option<&LessonDescriptor> {
        match &self.view {
            ViewState::Catalog => None,
            ViewState::WordList(lesson) | ViewState::Flashcards(lesson) => Some(lesson),
        }
    }

    /// Words of the selected lesson in rank order; empty on the catalog.
    pub fn lesson_words(&self) -> &[WordRecord] {
        match self.selected_lesson() {
            Some(lesson) => self.store.slice(lesson.start_index(), lesson.end_index()),
            None => &[],
        }
    }

    pub fn session(&self) -> Option<&StudySession> {
        self.session.as_ref()
    }

    pub fn has_previous_lesson(&self) -> bool {
        self.selected_lesson().is_some_and(|lesson| !lesson.is_first())
    }

    pub fn has_next_lesson(&self) -> bool {
        self.selected_lesson().is_some_and(|lesson| !lesson.is_last())
    }

    pub fn catalog(&self) -> &LessonCatalog {
        &self.catalog
    }

    pub fn store(&self) -> &WordStore {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::words::synthetic_store;
    use assert_matches::assert_matches;

    fn controller() -> NavigationController {
        NavigationController::with_rng(
            synthetic_store(),
            Direction::SourceToTarget,
            StdRng::seed_from_u64(11),
        )
    }

    fn lesson(id: u32) -> LessonDescriptor {
        LessonDescriptor::for_id(id).unwrap()
    }

    #[test]
    fn test_starts_on_catalog() {
        let nav = controller();

        assert_eq!(nav.view(), &ViewState::Catalog);
        assert!(nav.selected_lesson().is_none());
        assert!(nav.session().is_none());
        assert!(nav.lesson_words().is_empty());
    }

    #[test]
    fn test_select_lesson_opens_word_list() {
        let mut nav = controller();

        assert_eq!(nav.dispatch(Intent::SelectLesson(lesson(3))), Transition::Applied);

        assert_matches!(nav.view(), ViewState::WordList(l) if l.id() == 3);
        assert_eq!(nav.selected_lesson().unwrap().display_range(), "201-300");
        assert_eq!(nav.lesson_words().len(), 100);
        assert_eq!(nav.lesson_words()[0].rank, 201);
    }

    #[test]
    fn test_select_lesson_outside_catalog_is_ignored() {
        let mut nav = controller();
        nav.dispatch(Intent::SelectLesson(lesson(2)));

        assert_eq!(nav.dispatch(Intent::SelectLesson(lesson(5))), Transition::Ignored);
        assert_eq!(nav.selected_lesson().unwrap().id(), 2);
    }

    #[test]
    fn test_back_from_word_list_clears_lesson() {
        let mut nav = controller();
        nav.dispatch(Intent::SelectLesson(lesson(4)));

        assert_eq!(nav.dispatch(Intent::Back), Transition::Applied);
        assert_eq!(nav.view(), &ViewState::Catalog);
        assert!(nav.selected_lesson().is_none());
    }

    #[test]
    fn test_back_on_catalog_is_ignored() {
        let mut nav = controller();
        assert_eq!(nav.dispatch(Intent::Back), Transition::Ignored);
        assert_eq!(nav.view(), &ViewState::Catalog);
    }

    #[test]
    fn test_start_flashcards_builds_full_session() {
        let mut nav = controller();
        nav.dispatch(Intent::SelectLesson(lesson(3)));

        assert_eq!(nav.dispatch(Intent::StartFlashcards), Transition::Applied);

        assert_matches!(nav.view(), ViewState::Flashcards(l) if l.id() == 3);
        let session = nav.session().unwrap();
        assert_eq!(session.len(), 100);
        let mut ranks: Vec<u32> = session.order().iter().map(|w| w.rank).collect();
        ranks.sort_unstable();
        assert_eq!(ranks, (201..=300).collect::<Vec<u32>>());
    }

    #[test]
    fn test_start_flashcards_uses_default_direction() {
        let mut nav = NavigationController::with_rng(
            synthetic_store(),
            Direction::TargetToSource,
            StdRng::seed_from_u64(1),
        );
        nav.dispatch(Intent::SelectLesson(lesson(1)));
        nav.dispatch(Intent::StartFlashcards);

        assert_eq!(nav.session().unwrap().direction(), Direction::TargetToSource);
    }

    #[test]
    fn test_next_and_previous_lesson_in_word_list() {
        let mut nav = controller();
        nav.dispatch(Intent::SelectLesson(lesson(3)));

        assert_eq!(nav.dispatch(Intent::NextLesson), Transition::Applied);
        assert_eq!(nav.selected_lesson().unwrap().id(), 4);
        assert_eq!(nav.selected_lesson().unwrap().display_range(), "301-400");

        assert_eq!(nav.dispatch(Intent::PreviousLesson), Transition::Applied);
        assert_eq!(nav.selected_lesson().unwrap().id(), 3);
    }

    #[test]
    fn test_lesson_stepping_stops_at_edges() {
        let mut nav = controller();
        nav.dispatch(Intent::SelectLesson(lesson(1)));
        assert!(!nav.has_previous_lesson());
        assert_eq!(nav.dispatch(Intent::PreviousLesson), Transition::Ignored);
        assert_eq!(nav.selected_lesson().unwrap().id(), 1);

        for _ in 0..20 {
            nav.dispatch(Intent::NextLesson);
        }
        assert_eq!(nav.selected_lesson().unwrap().id(), 10);
        assert!(!nav.has_next_lesson());
        assert_eq!(nav.dispatch(Intent::NextLesson), Transition::Ignored);
    }

    #[test]
    fn test_next_lesson_from_flashcards_is_ignored() {
        let mut nav = controller();
        nav.dispatch(Intent::SelectLesson(lesson(3)));
        nav.dispatch(Intent::StartFlashcards);

        assert_eq!(nav.dispatch(Intent::NextLesson), Transition::Ignored);
        assert_eq!(nav.dispatch(Intent::PreviousLesson), Transition::Ignored);
        assert_matches!(nav.view(), ViewState::Flashcards(l) if l.id() == 3);
    }

    #[test]
    fn test_back_from_flashcards_returns_to_word_list() {
        let mut nav = controller();
        nav.dispatch(Intent::SelectLesson(lesson(6)));
        nav.dispatch(Intent::StartFlashcards);

        assert_eq!(nav.dispatch(Intent::Back), Transition::Applied);

        assert_matches!(nav.view(), ViewState::WordList(l) if l.id() == 6);
        assert!(nav.session().is_none());
    }

    #[test]
    fn test_home_from_flashcards() {
        let mut nav = controller();
        nav.dispatch(Intent::SelectLesson(lesson(6)));
        nav.dispatch(Intent::StartFlashcards);

        assert_eq!(nav.dispatch(Intent::Home), Transition::Applied);

        assert_eq!(nav.view(), &ViewState::Catalog);
        assert!(nav.selected_lesson().is_none());
        assert!(nav.session().is_none());
    }

    #[test]
    fn test_home_outside_flashcards_is_ignored() {
        let mut nav = controller();
        assert_eq!(nav.dispatch(Intent::Home), Transition::Ignored);

        nav.dispatch(Intent::SelectLesson(lesson(2)));
        assert_eq!(nav.dispatch(Intent::Home), Transition::Ignored);
        assert_matches!(nav.view(), ViewState::WordList(_));
    }

    #[test]
    fn test_card_intents_only_apply_in_flashcards() {
        let mut nav = controller();
        nav.dispatch(Intent::SelectLesson(lesson(1)));

        for intent in [
            Intent::Flip,
            Intent::Advance,
            Intent::Retreat,
            Intent::Reshuffle,
            Intent::SetDirection(Direction::TargetToSource),
        ] {
            assert_eq!(nav.dispatch(intent), Transition::Ignored);
        }
    }

    #[test]
    fn test_card_intents_drive_session() {
        let mut nav = controller();
        nav.dispatch(Intent::SelectLesson(lesson(1)));
        nav.dispatch(Intent::StartFlashcards);

        assert_eq!(nav.dispatch(Intent::Retreat), Transition::Ignored);
        assert_eq!(nav.dispatch(Intent::Flip), Transition::Applied);
        assert!(nav.session().unwrap().is_flipped());

        assert_eq!(nav.dispatch(Intent::Advance), Transition::Applied);
        assert_eq!(nav.session().unwrap().cursor(), 1);
        assert!(!nav.session().unwrap().is_flipped());

        nav.dispatch(Intent::SetDirection(Direction::TargetToSource));
        assert_eq!(nav.session().unwrap().direction(), Direction::TargetToSource);

        nav.dispatch(Intent::Flip);
        assert_eq!(nav.dispatch(Intent::Reshuffle), Transition::Applied);
        assert_eq!(nav.session().unwrap().cursor(), 0);
        assert!(!nav.session().unwrap().is_flipped());
        assert_eq!(nav.session().unwrap().len(), 100);
    }

    #[test]
    fn test_reentering_flashcards_builds_fresh_session() {
        let mut nav = controller();
        nav.dispatch(Intent::SelectLesson(lesson(1)));
        nav.dispatch(Intent::StartFlashcards);
        nav.dispatch(Intent::Advance);
        nav.dispatch(Intent::SetDirection(Direction::TargetToSource));

        nav.dispatch(Intent::Back);
        nav.dispatch(Intent::NextLesson);
        nav.dispatch(Intent::StartFlashcards);

        let session = nav.session().unwrap();
        assert_eq!(session.cursor(), 0);
        assert_eq!(session.direction(), Direction::SourceToTarget);
        assert!(session.order().iter().all(|w| (101..=200).contains(&w.rank)));
    }
}
