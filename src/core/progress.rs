use std::collections::BTreeSet;

/// Per-session engagement counters. Both only ever grow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionProgress {
    questions_asked: u32,
    topics_covered: BTreeSet<String>,
}

impl SessionProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_question(&mut self) {
        self.questions_asked = self.questions_asked.saturating_add(1);
    }

    /// Returns false when the topic was already covered
    pub fn record_topic(&mut self, label: &str) -> bool {
        self.topics_covered.insert(label.to_string())
    }

    pub fn questions_asked(&self) -> u32 {
        self.questions_asked
    }

    pub fn topics_count(&self) -> usize {
        self.topics_covered.len()
    }

    pub fn topics(&self) -> impl Iterator<Item = &str> {
        self.topics_covered.iter().map(String::as_str)
    }

    /// Status bar text
    pub fn summary(&self) -> String {
        format!(
            "Questions: {} | Topics: {}",
            self.questions_asked,
            self.topics_count()
        )
    }
}
