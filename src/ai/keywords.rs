//! Keyword groups tested against normalized user input

const GREETING_KEYWORDS: &[&str] = &["hello", "hi", "hey", "greetings"];
const MATH_KEYWORDS: &[&str] = &["math", "mathematics", "algebra", "calculus", "geometry"];
const SCIENCE_KEYWORDS: &[&str] = &["science", "physics", "chemistry", "biology"];
const STUDY_KEYWORDS: &[&str] = &["study", "learn", "tips", "help", "technique"];
const LITERATURE_KEYWORDS: &[&str] = &["literature", "book", "novel", "poem", "writing"];
const HISTORY_KEYWORDS: &[&str] = &["history", "historical", "past", "ancient"];
const QUIZ_KEYWORDS: &[&str] = &["quiz", "test", "question", "challenge"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Greeting,
    Math,
    Science,
    StudyHelp,
    Literature,
    History,
    Quiz,
}

impl Category {
    /// Match order; the first category with a hit wins
    pub const PRIORITY: [Category; 7] = [
        Category::Greeting,
        Category::Math,
        Category::Science,
        Category::StudyHelp,
        Category::Literature,
        Category::History,
        Category::Quiz,
    ];

    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Category::Greeting => GREETING_KEYWORDS,
            Category::Math => MATH_KEYWORDS,
            Category::Science => SCIENCE_KEYWORDS,
            Category::StudyHelp => STUDY_KEYWORDS,
            Category::Literature => LITERATURE_KEYWORDS,
            Category::History => HISTORY_KEYWORDS,
            Category::Quiz => QUIZ_KEYWORDS,
        }
    }

    /// Label recorded in session progress. Greetings and quizzes are not topics.
    pub fn topic_label(self) -> Option<&'static str> {
        match self {
            Category::Math => Some("Mathematics"),
            Category::Science => Some("Science"),
            Category::StudyHelp => Some("Study Skills"),
            Category::Literature => Some("Literature"),
            Category::History => Some("History"),
            Category::Greeting | Category::Quiz => None,
        }
    }

    pub fn matches(self, normalized: &str) -> bool {
        self.keywords().iter().any(|&word| normalized.contains(word))
    }
}

/// First category whose keywords occur in `normalized` (already lowercased)
pub fn classify(normalized: &str) -> Option<Category> {
    Category::PRIORITY
        .into_iter()
        .find(|category| category.matches(normalized))
}
