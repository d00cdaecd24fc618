use anyhow::{bail, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Single quiz question with its expected answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizItem {
    pub question: String,
    pub answer: String,
    pub subject: String,
}

impl QuizItem {
    /// Prompt shown to the user; the answer stays hidden
    pub fn prompt(&self) -> String {
        format!(
            "🎯 **Quiz Time!**\n\n**Subject:** {}\n**Question:** {}\n\nType your answer below!",
            self.subject, self.question
        )
    }
}

/// Fixed, non-empty list of quiz items
#[derive(Debug, Clone)]
pub struct QuizDeck {
    items: Vec<QuizItem>,
}

impl QuizDeck {
    pub fn new(items: Vec<QuizItem>) -> Result<Self> {
        if items.is_empty() {
            bail!("quiz deck needs at least one question");
        }
        Ok(Self { items })
    }

    /// Uniformly random item
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &QuizItem {
        &self.items[rng.gen_range(0..self.items.len())]
    }

    pub fn pick_quiz(&self) -> &QuizItem {
        self.pick(&mut rand::thread_rng())
    }

    pub fn items(&self) -> &[QuizItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}
