/// Words per lesson
pub const LESSON_SIZE: usize = 100;
/// Lessons in the catalog; ids run `1..=LESSON_COUNT`
pub const LESSON_COUNT: u32 = 10;

/// A fixed block of 100 consecutively ranked words.
///
/// Every field is a function of `id`, so descriptors can only be built
/// through [`LessonDescriptor::for_id`] and always partition the word list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonDescriptor {
    id: u32,
    title: String,
    display_range: String,
    start_index: usize,
    end_index: usize,
}

impl LessonDescriptor {
    /// Returns `None` for ids outside `1..=LESSON_COUNT`.
    pub fn for_id(id: u32) -> Option<Self> {
        (1..=LESSON_COUNT).contains(&id).then(|| Self::build(id))
    }

    fn build(id: u32) -> Self {
        let start_index = (id as usize - 1) * LESSON_SIZE;
        let end_index = id as usize * LESSON_SIZE;

        Self {
            id,
            title: lesson_title(id),
            display_range: format!("{}-{}", start_index + 1, end_index),
            start_index,
            end_index,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// One-based inclusive rank range, e.g. `"201-300"`
    pub fn display_range(&self) -> &str {
        &self.display_range
    }

    pub fn start_index(&self) -> usize {
        self.start_index
    }

    pub fn end_index(&self) -> usize {
        self.end_index
    }

    pub fn is_first(&self) -> bool {
        self.id == 1
    }

    pub fn is_last(&self) -> bool {
        self.id == LESSON_COUNT
    }
}

/// Ordinal suffix for a lesson number.
///
/// Only 1, 2 and 3 are special-cased; everything else is "th". There is no
/// mod-10 handling, so 21 gives "21th". Lesson ids never exceed 10.
pub fn ordinal_suffix(n: u32) -> &'static str {
    match n {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

pub fn lesson_title(id: u32) -> String {
    match id {
        1 => "Most Common 100 Words".to_string(),
        n => format!("{n}{} Most Common", ordinal_suffix(n)),
    }
}

/// The ten lessons shown on the home screen
#[derive(Debug, Clone)]
pub struct LessonCatalog {
    lessons: Vec<LessonDescriptor>,
}

impl LessonCatalog {
    pub fn new() -> Self {
        Self {
            lessons: (1..=LESSON_COUNT)
                .filter_map(LessonDescriptor::for_id)
                .collect(),
        }
    }

    pub fn lessons(&self) -> &[LessonDescriptor] {
        &self.lessons
    }

    pub fn get(&self, id: u32) -> Option<&LessonDescriptor> {
        self.lessons.iter().find(|lesson| lesson.id == id)
    }

    pub fn initial() -> LessonDescriptor {
        LessonDescriptor::build(1)
    }

    /// The following lesson, or `None` when `current` is the last one.
    pub fn next(current: &LessonDescriptor) -> Option<LessonDescriptor> {
        LessonDescriptor::for_id(current.id + 1)
    }

    /// The preceding lesson, or `None` when `current` is the first one.
    pub fn previous(current: &LessonDescriptor) -> Option<LessonDescriptor> {
        current.id.checked_sub(1).and_then(LessonDescriptor::for_id)
    }
}

impl Default for LessonCatalog {
    fn default() -> Self {
        Self::new()
    }
}
