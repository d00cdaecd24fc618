use rand::Rng;
use std::sync::Arc;

use super::keywords::{classify, Category};
use crate::core::SessionProgress;
use crate::services::{KnowledgeBase, QuizItem};

/// Sub-topic of a subject with its reply framing
struct Section {
    key: &'static str,
    heading: &'static str,
    follow_up: &'static str,
}

const MATH_SECTIONS: &[Section] = &[
    Section {
        key: "algebra",
        heading: "🧮 **Algebra Help:**",
        follow_up: "Need help with a specific algebra problem?",
    },
    Section {
        key: "calculus",
        heading: "📊 **Calculus Concepts:**",
        follow_up: "What calculus topic interests you?",
    },
    Section {
        key: "geometry",
        heading: "📐 **Geometry Guide:**",
        follow_up: "Any specific geometry questions?",
    },
];

const SCIENCE_SECTIONS: &[Section] = &[
    Section {
        key: "physics",
        heading: "⚛️ **Physics Exploration:**",
        follow_up: "What physics concept can I explain?",
    },
    Section {
        key: "chemistry",
        heading: "🧪 **Chemistry Insights:**",
        follow_up: "Any chemistry questions?",
    },
    Section {
        key: "biology",
        heading: "🧬 **Biology Basics:**",
        follow_up: "What biological process interests you?",
    },
];

/// Fixed triggers that skip keyword matching
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickAction {
    StudyTips,
    Math,
    Science,
    Literature,
    History,
    Quiz,
}

impl QuickAction {
    pub const ALL: [QuickAction; 6] = [
        QuickAction::StudyTips,
        QuickAction::Math,
        QuickAction::Science,
        QuickAction::Literature,
        QuickAction::History,
        QuickAction::Quiz,
    ];

    pub fn button_label(self) -> &'static str {
        match self {
            QuickAction::StudyTips => "📚 Study Tips",
            QuickAction::Math => "🧮 Math Help",
            QuickAction::Science => "🔬 Science",
            QuickAction::Literature => "📖 Literature",
            QuickAction::History => "🌍 History",
            QuickAction::Quiz => "💡 Quiz Me",
        }
    }

    pub fn category(self) -> Category {
        match self {
            QuickAction::StudyTips => Category::StudyHelp,
            QuickAction::Math => Category::Math,
            QuickAction::Science => Category::Science,
            QuickAction::Literature => Category::Literature,
            QuickAction::History => Category::History,
            QuickAction::Quiz => Category::Quiz,
        }
    }

    /// Topic recorded by the button. These titles are separate from the
    /// keyword labels, so "Math" and "Mathematics" count as two topics.
    pub fn topic_label(self) -> Option<&'static str> {
        match self {
            QuickAction::StudyTips => Some("Study Tips"),
            QuickAction::Math => Some("Math"),
            QuickAction::Science => Some("Science"),
            QuickAction::Literature => Some("Literature"),
            QuickAction::History => Some("History"),
            QuickAction::Quiz => None,
        }
    }
}

/// Outcome of one responder call
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub text: String,
    pub category: Option<Category>,
    /// Quiz item that was asked, if any
    pub quiz: Option<QuizItem>,
}

/// Rule-based responder over the static knowledge base
#[derive(Debug, Clone)]
pub struct Responder {
    knowledge: Arc<KnowledgeBase>,
}

impl Responder {
    pub fn new(knowledge: Arc<KnowledgeBase>) -> Self {
        Self { knowledge }
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    pub fn respond(&self, user_input: &str, progress: &mut SessionProgress) -> String {
        self.reply(user_input, progress, &mut rand::thread_rng()).text
    }

    /// Matches lowercased input against the keyword groups in priority order.
    ///
    /// Every call counts as a question; a matched subject is also recorded
    /// as a covered topic.
    pub fn reply<R: Rng + ?Sized>(
        &self,
        user_input: &str,
        progress: &mut SessionProgress,
        rng: &mut R,
    ) -> Reply {
        let input_lower = user_input.to_lowercase();
        progress.record_question();

        let category = match classify(&input_lower) {
            Some(category) => category,
            None => {
                log::debug!("🤷 No keyword matched, sending suggestions");
                return Reply {
                    text: self.knowledge.text("fallback").to_string(),
                    category: None,
                    quiz: None,
                };
            }
        };

        if let Some(label) = category.topic_label() {
            progress.record_topic(label);
        }
        log::debug!("🔎 Matched category: {:?}", category);

        match category {
            Category::Greeting => self.variant("greetings", Some(category), rng),
            Category::Math => Reply {
                text: self.sectioned("math", MATH_SECTIONS, "math_overview", &input_lower),
                category: Some(category),
                quiz: None,
            },
            Category::Science => Reply {
                text: self.sectioned("science", SCIENCE_SECTIONS, "science_overview", &input_lower),
                category: Some(category),
                quiz: None,
            },
            Category::StudyHelp => self.variant("study_tips", Some(category), rng),
            Category::Literature => self.variant("literature", Some(category), rng),
            Category::History => self.variant("history", Some(category), rng),
            Category::Quiz => self.quiz_reply(rng),
        }
    }

    /// Canned content for a quick action button.
    ///
    /// Records the action's topic but does not count as a question.
    pub fn quick_reply<R: Rng + ?Sized>(
        &self,
        action: QuickAction,
        progress: &mut SessionProgress,
        rng: &mut R,
    ) -> Reply {
        let category = action.category();
        if let Some(label) = action.topic_label() {
            progress.record_topic(label);
        }

        let fixed = |key: &str| Reply {
            text: self.knowledge.text(key).to_string(),
            category: Some(category),
            quiz: None,
        };

        match action {
            QuickAction::StudyTips => self.variant("study_tips", Some(category), rng),
            QuickAction::Math => fixed("math_quick"),
            QuickAction::Science => fixed("science_quick"),
            QuickAction::Literature => self.variant("literature", Some(category), rng),
            QuickAction::History => self.variant("history", Some(category), rng),
            QuickAction::Quiz => self.quiz_reply(rng),
        }
    }

    fn variant<R: Rng + ?Sized>(&self, key: &str, category: Option<Category>, rng: &mut R) -> Reply {
        Reply {
            text: self.knowledge.pick(key, rng).unwrap_or_default().to_string(),
            category,
            quiz: None,
        }
    }

    fn sectioned(&self, key: &str, sections: &[Section], overview: &str, input_lower: &str) -> String {
        sections
            .iter()
            .filter(|section| input_lower.contains(section.key))
            .find_map(|section| {
                self.knowledge.section(key, section.key).map(|summary| {
                    format!("{}\n\n{}\n\n{}", section.heading, summary, section.follow_up)
                })
            })
            .unwrap_or_else(|| self.knowledge.text(overview).to_string())
    }

    fn quiz_reply<R: Rng + ?Sized>(&self, rng: &mut R) -> Reply {
        let item = self.knowledge.quiz().pick(rng).clone();
        log::debug!("🎯 Quiz question: {} ({})", item.question, item.subject);
        Reply {
            text: item.prompt(),
            category: Some(Category::Quiz),
            quiz: Some(item),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn responder() -> Responder {
        Responder::new(Arc::new(KnowledgeBase::embedded().unwrap()))
    }

    #[test]
    fn greetings_return_a_greeting_variant() {
        let responder = responder();
        let greetings = responder.knowledge().variants("greetings").to_vec();
        let mut progress = SessionProgress::new();

        for input in ["Hello there", "HI", "hey you", "Greetings!", "oh HeY"] {
            let text = responder.respond(input, &mut progress);
            assert!(greetings.contains(&text), "{input:?} -> {text:?}");
        }
        assert_eq!(progress.topics_count(), 0);
    }

    #[test]
    fn algebra_reply_contains_only_the_algebra_summary() {
        let responder = responder();
        let kb = responder.knowledge();
        let mut progress = SessionProgress::new();

        let text = responder.respond("Can you explain ALGEBRA", &mut progress);

        assert!(text.contains(kb.section("math", "algebra").unwrap()));
        assert!(text.starts_with("🧮 **Algebra Help:**"));
        for (key, section) in [
            ("math", "calculus"),
            ("math", "geometry"),
            ("science", "physics"),
            ("science", "chemistry"),
            ("science", "biology"),
        ] {
            assert!(!text.contains(kb.section(key, section).unwrap()));
        }
    }

    #[test]
    fn math_wins_over_quiz() {
        let responder = responder();
        let mut progress = SessionProgress::new();
        let reply = responder.reply("math quiz", &mut progress, &mut StdRng::seed_from_u64(1));

        assert_eq!(reply.category, Some(Category::Math));
        assert_eq!(reply.text, responder.knowledge().text("math_overview"));
        assert!(reply.quiz.is_none());
    }

    #[test]
    fn science_sections_follow_input() {
        let responder = responder();
        let mut progress = SessionProgress::new();

        let text = responder.respond("tell me about biology", &mut progress);
        assert!(text.starts_with("🧬 **Biology Basics:**"));
        assert!(text.ends_with("What biological process interests you?"));

        let text = responder.respond("science", &mut progress);
        assert_eq!(text, responder.knowledge().text("science_overview"));
    }

    #[test]
    fn unmatched_input_gets_the_fallback() {
        let responder = responder();
        let mut progress = SessionProgress::new();

        let text = responder.respond("purple elephant", &mut progress);

        assert_eq!(
            text,
            "🤔 I'd love to help! Try asking about:\n\
             📚 **Subjects:** Math, Science, Literature, History\n\
             💡 **Study Help:** Study tips, learning techniques\n\
             🎯 **Interactive:** Quiz questions, practice problems\n\
             🔍 **Specific Topics:** Algebra, Physics, Chemistry, etc.\n\
             \n\
             Example: 'Help me with calculus' or 'Give me study tips'"
        );
        assert_eq!(progress.questions_asked(), 1);
        assert_eq!(progress.topics_count(), 0);
    }

    #[test]
    fn greeting_does_not_count_as_topic() {
        let responder = responder();
        let mut progress = SessionProgress::new();

        responder.respond("hello", &mut progress);
        responder.respond("help with algebra", &mut progress);
        responder.respond("physics please", &mut progress);

        assert_eq!(progress.topics_count(), 2);
        assert_eq!(progress.questions_asked(), 3);
        assert_eq!(progress.topics().collect::<Vec<_>>(), vec!["Mathematics", "Science"]);
    }

    #[test]
    fn quiz_request_reports_the_asked_item() {
        let responder = responder();
        let mut progress = SessionProgress::new();
        let reply = responder.reply("quiz me", &mut progress, &mut StdRng::seed_from_u64(3));

        let item = reply.quiz.expect("quiz item");
        assert!(responder.knowledge().quiz().items().contains(&item));
        assert_eq!(reply.text, item.prompt());
        assert_eq!(progress.topics_count(), 0);
    }

    #[test]
    fn quick_actions_record_topics_without_questions() {
        let responder = responder();
        let mut progress = SessionProgress::new();
        let mut rng = StdRng::seed_from_u64(5);

        let math = responder.quick_reply(QuickAction::Math, &mut progress, &mut rng);
        assert_eq!(math.text, responder.knowledge().text("math_quick"));

        let tips = responder.quick_reply(QuickAction::StudyTips, &mut progress, &mut rng);
        assert!(tips.text.contains("Pomodoro Technique"));

        let quiz = responder.quick_reply(QuickAction::Quiz, &mut progress, &mut rng);
        assert!(quiz.quiz.is_some());

        assert_eq!(progress.questions_asked(), 0);
        assert_eq!(progress.topics().collect::<Vec<_>>(), vec!["Math", "Study Tips"]);
    }

    #[test]
    fn button_topics_are_counted_apart_from_keyword_topics() {
        let responder = responder();
        let mut progress = SessionProgress::new();
        let mut rng = StdRng::seed_from_u64(7);

        responder.quick_reply(QuickAction::Math, &mut progress, &mut rng);
        responder.quick_reply(QuickAction::StudyTips, &mut progress, &mut rng);
        responder.reply("algebra", &mut progress, &mut rng);
        responder.reply("study", &mut progress, &mut rng);

        assert_eq!(progress.questions_asked(), 2);
        assert_eq!(progress.topics_count(), 4);
        assert_eq!(
            progress.topics().collect::<Vec<_>>(),
            vec!["Math", "Mathematics", "Study Skills", "Study Tips"]
        );
    }

    #[test]
    fn quiz_button_records_no_topic() {
        assert_eq!(QuickAction::Quiz.topic_label(), None);
        let labels: Vec<_> = QuickAction::ALL
            .iter()
            .filter_map(|action| action.topic_label())
            .collect();
        assert_eq!(labels, vec!["Study Tips", "Math", "Science", "Literature", "History"]);
    }

    #[test]
    fn every_quick_action_has_content() {
        let responder = responder();
        let mut progress = SessionProgress::new();
        let mut rng = StdRng::seed_from_u64(11);

        for action in QuickAction::ALL {
            let reply = responder.quick_reply(action, &mut progress, &mut rng);
            assert!(!reply.text.is_empty(), "{action:?}");
        }
        assert_eq!(progress.topics_count(), 5);
    }
}
