//! Quiz catalog, questions and scores

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use strum::{Display, EnumIter};

/// How hard a category or question is
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

/// Inclusive age bracket a category is written for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgeRange {
    pub min: u32,
    pub max: u32,
}

impl AgeRange {
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, age: u32) -> bool {
        (self.min..=self.max).contains(&age)
    }
}

/// Catalog entry for a quiz topic
///
/// Identity is the `id`: two categories with the same id compare equal and
/// hash the same even when their other fields differ.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizCategory {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Icon token resolved by the UI layer
    pub icon: String,
    /// Color token resolved by the UI layer
    pub color: String,
    pub difficulty: Difficulty,
    pub age_range: AgeRange,
}

impl PartialEq for QuizCategory {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for QuizCategory {}

impl Hash for QuizCategory {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// A single multiple-choice question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub text: String,
    pub options: Vec<String>,
    /// Zero-based index into `options`
    pub correct_answer: usize,
    pub explanation: String,
    pub difficulty: Difficulty,
}

impl Question {
    /// `correct_answer` points at an existing option
    pub fn is_well_formed(&self) -> bool {
        self.correct_answer < self.options.len()
    }

    pub fn is_correct(&self, answer: usize) -> bool {
        self.correct_answer == answer
    }
}

/// A fixed list of questions for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    pub id: String,
    pub category: QuizCategory,
    pub questions: Vec<Question>,
    /// Seconds
    pub time_limit: u32,
}

impl Quiz {
    /// Grade a finished attempt
    ///
    /// `answers[i]` is the option picked for question `i`; unanswered or
    /// missing entries count as wrong.
    pub fn grade(
        &self,
        answers: &[Option<usize>],
        time_spent: u32,
        completed_at: DateTime<Utc>,
    ) -> QuizScore {
        let correct_answers = self
            .questions
            .iter()
            .zip(answers.iter().copied().chain(std::iter::repeat(None)))
            .filter(|(question, answer)| answer.is_some_and(|a| question.is_correct(a)))
            .count();

        QuizScore {
            total_questions: self.questions.len(),
            correct_answers,
            time_spent,
            category: self.category.clone(),
            completed_at,
        }
    }
}

/// Result of a completed quiz, created once and never changed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizScore {
    pub total_questions: usize,
    pub correct_answers: usize,
    /// Seconds
    pub time_spent: u32,
    pub category: QuizCategory,
    pub completed_at: DateTime<Utc>,
}

impl QuizScore {
    /// Whole-number percentage of correct answers, 0 for an empty quiz
    pub fn percentage(&self) -> u32 {
        if self.total_questions == 0 {
            return 0;
        }
        let percent = self.correct_answers as u128 * 100 / self.total_questions as u128;
        u32::try_from(percent).unwrap_or(u32::MAX)
    }

    pub fn is_perfect(&self) -> bool {
        self.total_questions > 0 && self.correct_answers == self.total_questions
    }
}
