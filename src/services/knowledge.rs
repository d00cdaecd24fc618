use anyhow::{bail, Context, Result};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};

use super::quiz::{QuizDeck, QuizItem};

/// Knowledge document compiled into the binary
const EMBEDDED_KNOWLEDGE: &str = include_str!("../../assets/knowledge.json");

/// One value of the knowledge store
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum KnowledgeEntry {
    Text(String),
    Variants(Vec<String>),
    Sections(BTreeMap<String, String>),
}

impl KnowledgeEntry {
    fn shape(&self) -> &'static str {
        match self {
            KnowledgeEntry::Text(_) => "text",
            KnowledgeEntry::Variants(_) => "variants",
            KnowledgeEntry::Sections(_) => "sections",
        }
    }
}

#[derive(Debug, Deserialize)]
struct KnowledgeDocument {
    topics: HashMap<String, KnowledgeEntry>,
    quiz_questions: Vec<QuizItem>,
}

/// Keys every document must provide, with the shape each one needs
const REQUIRED_KEYS: &[(&str, &str)] = &[
    ("welcome", "text"),
    ("greetings", "variants"),
    ("study_tips", "variants"),
    ("math", "sections"),
    ("math_overview", "text"),
    ("math_quick", "text"),
    ("science", "sections"),
    ("science_overview", "text"),
    ("science_quick", "text"),
    ("literature", "variants"),
    ("history", "variants"),
    ("fallback", "text"),
];

/// Static topic → content mapping plus the quiz deck
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    topics: HashMap<String, KnowledgeEntry>,
    quiz: QuizDeck,
}

impl KnowledgeBase {
    /// Loads the document shipped with the application
    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_KNOWLEDGE).context("embedded knowledge document is invalid")
    }

    /// Parses and validates a knowledge document
    pub fn from_json(raw: &str) -> Result<Self> {
        let document: KnowledgeDocument =
            serde_json::from_str(raw).context("failed to parse knowledge document")?;

        for (key, shape) in REQUIRED_KEYS {
            let entry = match document.topics.get(*key) {
                Some(entry) => entry,
                None => bail!("knowledge key `{}` is missing", key),
            };
            if entry.shape() != *shape {
                bail!(
                    "knowledge key `{}` must be {}, found {}",
                    key,
                    shape,
                    entry.shape()
                );
            }
            if let KnowledgeEntry::Variants(variants) = entry {
                if variants.is_empty() {
                    bail!("knowledge key `{}` has no variants", key);
                }
            }
        }

        let quiz = QuizDeck::new(document.quiz_questions)?;

        log::info!(
            "📚 Knowledge base loaded: {} topics, {} quiz questions",
            document.topics.len(),
            quiz.len()
        );

        Ok(Self {
            topics: document.topics,
            quiz,
        })
    }

    pub fn entry(&self, key: &str) -> Option<&KnowledgeEntry> {
        self.topics.get(key)
    }

    /// Text for `key`, picking one variant at random when there are several.
    /// Section maps have no single text and yield `None`.
    pub fn pick<R: Rng + ?Sized>(&self, key: &str, rng: &mut R) -> Option<&str> {
        match self.topics.get(key)? {
            KnowledgeEntry::Text(text) => Some(text.as_str()),
            KnowledgeEntry::Variants(variants) => variants.choose(rng).map(String::as_str),
            KnowledgeEntry::Sections(_) => None,
        }
    }

    /// Plain text entry; required text keys always resolve after validation
    pub fn text(&self, key: &str) -> &str {
        match self.topics.get(key) {
            Some(KnowledgeEntry::Text(text)) => text.as_str(),
            _ => "",
        }
    }

    pub fn section(&self, key: &str, section: &str) -> Option<&str> {
        match self.topics.get(key)? {
            KnowledgeEntry::Sections(sections) => sections.get(section).map(String::as_str),
            _ => None,
        }
    }

    pub fn variants(&self, key: &str) -> &[String] {
        match self.topics.get(key) {
            Some(KnowledgeEntry::Variants(variants)) => variants.as_slice(),
            _ => &[],
        }
    }

    pub fn quiz(&self) -> &QuizDeck {
        &self.quiz
    }
}
