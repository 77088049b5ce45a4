//! Quiz content collaborator
//!
//! `LocalContentService` answers from the question bank first and only
//! generates when the bank has nothing for the requested slot. Generated
//! questions pass moderation for the youngest age in the category, get age and difficulty
//! adaptation, and are stored for next time. If generation itself fails
//! the built-in fallback set is served instead.

use crate::catalog::default_categories;
use crate::generator::{fallback_questions, QuestionGenerator};
use crate::question_bank::{QuestionBank, QuestionQuery, StoredQuestion};
use crate::safety;
use async_trait::async_trait;
use chrono::Utc;
use kwiz_domain::{AppError, Question, QuizCategory};
use std::sync::Arc;

/// Supplies the category catalog and the questions for a quiz
#[async_trait]
pub trait ContentService: Send + Sync {
    async fn categories(&self) -> Result<Vec<QuizCategory>, AppError>;

    async fn generate_questions(
        &self,
        category: &QuizCategory,
        count: usize,
    ) -> Result<Vec<Question>, AppError>;
}

/// Bank-first content with generation as the fallback
pub struct LocalContentService<G: QuestionGenerator> {
    bank: Arc<QuestionBank>,
    generator: G,
    catalog: Vec<QuizCategory>,
}

impl<G: QuestionGenerator> LocalContentService<G> {
    /// Create a service over the built-in catalog
    pub fn new(bank: Arc<QuestionBank>, generator: G) -> Self {
        Self::with_catalog(bank, generator, default_categories())
    }

    pub fn with_catalog(bank: Arc<QuestionBank>, generator: G, catalog: Vec<QuizCategory>) -> Self {
        Self {
            bank,
            generator,
            catalog,
        }
    }

    async fn generate_fresh(
        &self,
        category: &QuizCategory,
        count: usize,
    ) -> Result<Vec<Question>, AppError> {
        let topic = safety::topic_for_category(category);
        let generated = match self
            .generator
            .generate(&topic, category.difficulty, category.age_range, count)
            .await
        {
            Ok(questions) => questions,
            Err(e) => {
                log::warn!(
                    "LocalContentService: generation failed for {}: {}, using fallback set",
                    category.id,
                    e
                );
                return Ok(fallback_questions(category.difficulty, count));
            }
        };

        let generated_count = generated.len();
        let prepared: Vec<Question> = generated
            .into_iter()
            .filter(|q| {
                q.is_well_formed()
                    && safety::moderate_content(&q.text, category.age_range.min).is_approved
            })
            .map(|q| safety::prepare_question(q, category))
            .collect();

        if prepared.len() < generated_count {
            log::info!(
                "LocalContentService: dropped {} unsuitable questions for {}",
                generated_count - prepared.len(),
                category.id
            );
        }

        if prepared.is_empty() {
            return Err(AppError::Content(format!(
                "No suitable questions available for {}",
                category.name
            )));
        }

        let now = Utc::now();
        self.bank.store(
            prepared
                .iter()
                .map(|q| StoredQuestion::new(q.clone(), category, now))
                .collect(),
        );

        Ok(prepared)
    }
}

#[async_trait]
impl<G: QuestionGenerator> ContentService for LocalContentService<G> {
    async fn categories(&self) -> Result<Vec<QuizCategory>, AppError> {
        Ok(self.catalog.clone())
    }

    async fn generate_questions(
        &self,
        category: &QuizCategory,
        count: usize,
    ) -> Result<Vec<Question>, AppError> {
        let query = QuestionQuery::for_category(category, count);
        let stored = self.bank.fetch(&query);
        if !stored.is_empty() {
            log::debug!(
                "LocalContentService: {} questions for {} served from bank",
                stored.len(),
                category.id
            );
            return Ok(stored);
        }

        log::debug!(
            "LocalContentService: bank empty for {}, generating",
            category.id
        );
        self.generate_fresh(category, count).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::MockQuestionGenerator;
    use kwiz_domain::{AgeRange, Difficulty};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Generator returning a fixed list and counting calls
    struct FixedGenerator {
        questions: Result<Vec<Question>, AppError>,
        calls: AtomicUsize,
    }

    impl FixedGenerator {
        fn new(questions: Result<Vec<Question>, AppError>) -> Self {
            Self {
                questions,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl QuestionGenerator for FixedGenerator {
        async fn generate(
            &self,
            _topic: &str,
            _difficulty: Difficulty,
            _age_range: AgeRange,
            count: usize,
        ) -> Result<Vec<Question>, AppError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.questions
                .clone()
                .map(|qs| qs.into_iter().take(count).collect())
        }
    }

    fn question(id: &str, text: &str) -> Question {
        Question {
            id: id.to_string(),
            text: text.to_string(),
            options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            correct_answer: 0,
            explanation: "because".to_string(),
            difficulty: Difficulty::Easy,
        }
    }

    fn science() -> QuizCategory {
        default_categories().remove(1)
    }

    #[tokio::test]
    async fn test_categories_returns_catalog() {
        let service = LocalContentService::new(Arc::new(QuestionBank::new()), MockQuestionGenerator);
        let categories = service.categories().await.unwrap();
        assert_eq!(categories.len(), 6);
    }

    #[tokio::test]
    async fn test_generated_questions_are_stored_and_reused() {
        let bank = Arc::new(QuestionBank::new());
        let generator = FixedGenerator::new(Ok(vec![
            question("1", "What do bees make?"),
            question("2", "What planet do we live on?"),
        ]));
        let service = LocalContentService::new(Arc::clone(&bank), generator);

        let first = service.generate_questions(&science(), 2).await.unwrap();
        assert_eq!(first.len(), 2);
        assert_eq!(bank.len(), 2);

        let second = service.generate_questions(&science(), 2).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(service.generator.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_unsafe_questions_are_dropped() {
        let generator = FixedGenerator::new(Ok(vec![
            question("1", "What is a scary monster?"),
            question("2", "What color is grass?"),
        ]));
        let service = LocalContentService::new(Arc::new(QuestionBank::new()), generator);

        let questions = service.generate_questions(&science(), 5).await.unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].id, "2");
    }

    #[tokio::test]
    async fn test_vocabulary_too_hard_for_youngest_is_dropped() {
        let generator = FixedGenerator::new(Ok(vec![
            question("1", "Photosynthesis converts sunlight"),
            question("2", "How many legs does a cat have?"),
        ]));
        let service = LocalContentService::new(Arc::new(QuestionBank::new()), generator);
        let math = default_categories().remove(0); // ages 5-12

        let questions = service.generate_questions(&math, 5).await.unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].id, "2");
    }

    #[tokio::test]
    async fn test_all_questions_unsafe_is_content_error() {
        let generator = FixedGenerator::new(Ok(vec![question("1", "Name a weapon")]));
        let service = LocalContentService::new(Arc::new(QuestionBank::new()), generator);

        let err = service.generate_questions(&science(), 5).await.unwrap_err();
        assert!(matches!(err, AppError::Content(_)));
    }

    #[tokio::test]
    async fn test_generator_failure_falls_back_to_local_set() {
        let bank = Arc::new(QuestionBank::new());
        let generator = FixedGenerator::new(Err(AppError::Network("offline".to_string())));
        let service = LocalContentService::new(Arc::clone(&bank), generator);

        let questions = service.generate_questions(&science(), 3).await.unwrap();
        assert_eq!(questions.len(), 3);
        assert_eq!(questions[0].id, "mock_1");
        // fallback questions are not banked
        assert!(bank.is_empty());
    }
}
