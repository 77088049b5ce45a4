//! In-memory question bank
//!
//! Questions generated once are kept here and served again for the same
//! category, difficulty and age range.

use chrono::{DateTime, Utc};
use kwiz_domain::{AgeRange, Difficulty, Question, QuizCategory};
use std::collections::BTreeMap;
use std::sync::{Mutex, PoisonError};
use uuid::Uuid;

/// A question filed under the catalog slot it was generated for
#[derive(Debug, Clone, PartialEq)]
pub struct StoredQuestion {
    pub id: String,
    pub category: String,
    pub difficulty: Difficulty,
    pub age_range: AgeRange,
    pub question: Question,
    pub created_at: DateTime<Utc>,
    pub usage_count: u32,
}

impl StoredQuestion {
    pub fn new(question: Question, category: &QuizCategory, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            category: category.name.clone(),
            difficulty: category.difficulty,
            age_range: category.age_range,
            question,
            created_at,
            usage_count: 0,
        }
    }
}

/// Lookup key for the bank
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionQuery {
    pub category: String,
    pub difficulty: Difficulty,
    pub age_range: AgeRange,
    pub count: usize,
}

impl QuestionQuery {
    pub fn for_category(category: &QuizCategory, count: usize) -> Self {
        Self {
            category: category.name.clone(),
            difficulty: category.difficulty,
            age_range: category.age_range,
            count,
        }
    }

    fn matches(&self, stored: &StoredQuestion) -> bool {
        stored.category == self.category
            && stored.difficulty == self.difficulty
            && stored.age_range == self.age_range
    }
}

/// Bank size, overall and per category name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BankStats {
    pub total_questions: usize,
    pub by_category: BTreeMap<String, usize>,
}

#[derive(Debug, Default)]
pub struct QuestionBank {
    questions: Mutex<Vec<StoredQuestion>>,
}

impl QuestionBank {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self, questions: Vec<StoredQuestion>) {
        let mut bank = self
            .questions
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        log::debug!("QuestionBank: storing {} questions", questions.len());
        bank.extend(questions);
    }

    /// Up to `query.count` matching questions, oldest first
    ///
    /// Every returned question has its usage count bumped.
    pub fn fetch(&self, query: &QuestionQuery) -> Vec<Question> {
        let mut bank = self
            .questions
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        bank.iter_mut()
            .filter(|stored| query.matches(stored))
            .take(query.count)
            .map(|stored| {
                stored.usage_count += 1;
                stored.question.clone()
            })
            .collect()
    }

    pub fn count(&self, query: &QuestionQuery) -> usize {
        self.questions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|stored| query.matches(stored))
            .count()
    }

    pub fn len(&self) -> usize {
        self.questions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> BankStats {
        let bank = self
            .questions
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let mut by_category = BTreeMap::new();
        for stored in bank.iter() {
            *by_category.entry(stored.category.clone()).or_insert(0) += 1;
        }
        BankStats {
            total_questions: bank.len(),
            by_category,
        }
    }

    /// Drop every stored question
    pub fn clear(&self) {
        let mut bank = self
            .questions
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        log::info!("QuestionBank: clearing {} questions", bank.len());
        bank.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::default_categories;
    use crate::generator::fallback_questions;

    #[test]
    fn test_fetch_matches_category_slot_only() {
        let categories = default_categories();
        let math = &categories[0];
        let history = &categories[3];
        let bank = QuestionBank::new();

        bank.store(
            fallback_questions(math.difficulty, 3)
                .into_iter()
                .map(|q| StoredQuestion::new(q, math, Utc::now()))
                .collect(),
        );

        assert_eq!(bank.count(&QuestionQuery::for_category(math, 5)), 3);
        assert!(bank
            .fetch(&QuestionQuery::for_category(history, 5))
            .is_empty());
        assert_eq!(bank.fetch(&QuestionQuery::for_category(math, 2)).len(), 2);
    }

    #[test]
    fn test_fetch_bumps_usage() {
        let categories = default_categories();
        let art = &categories[5];
        let bank = QuestionBank::new();
        bank.store(
            fallback_questions(art.difficulty, 1)
                .into_iter()
                .map(|q| StoredQuestion::new(q, art, Utc::now()))
                .collect(),
        );

        bank.fetch(&QuestionQuery::for_category(art, 1));
        bank.fetch(&QuestionQuery::for_category(art, 1));

        let usage = bank.questions.lock().unwrap()[0].usage_count;
        assert_eq!(usage, 2);
        assert_eq!(bank.len(), 1);
    }

    #[test]
    fn test_stats_and_clear() {
        let categories = default_categories();
        let bank = QuestionBank::new();
        for (category, count) in [(&categories[0], 3), (&categories[1], 2)] {
            bank.store(
                fallback_questions(category.difficulty, count)
                    .into_iter()
                    .map(|q| StoredQuestion::new(q, category, Utc::now()))
                    .collect(),
            );
        }

        let stats = bank.stats();
        assert_eq!(stats.total_questions, 5);
        assert_eq!(stats.by_category.get("Math Magic"), Some(&3));
        assert_eq!(stats.by_category.get("Science Fun"), Some(&2));

        bank.clear();
        assert!(bank.is_empty());
        assert_eq!(bank.stats(), BankStats::default());
    }
}
