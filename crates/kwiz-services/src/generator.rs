//! Question generation
//!
//! `QuestionGenerator` is the seam where a hosted model would plug in. The
//! bundled implementation serves a canned set so the app works offline.

use async_trait::async_trait;
use kwiz_domain::{AgeRange, AppError, Difficulty, Question};
use uuid::Uuid;

/// Produces fresh questions for a topic
#[async_trait]
pub trait QuestionGenerator: Send + Sync {
    async fn generate(
        &self,
        topic: &str,
        difficulty: Difficulty,
        age_range: AgeRange,
        count: usize,
    ) -> Result<Vec<Question>, AppError>;
}

/// Offline generator returning a fixed five-question set with fresh ids
#[derive(Debug, Clone, Copy, Default)]
pub struct MockQuestionGenerator;

fn question(
    id: String,
    text: &str,
    options: [&str; 4],
    correct_answer: usize,
    explanation: &str,
    difficulty: Difficulty,
) -> Question {
    Question {
        id,
        text: text.to_string(),
        options: options.iter().map(|o| o.to_string()).collect(),
        correct_answer,
        explanation: explanation.to_string(),
        difficulty,
    }
}

#[async_trait]
impl QuestionGenerator for MockQuestionGenerator {
    async fn generate(
        &self,
        topic: &str,
        _difficulty: Difficulty,
        age_range: AgeRange,
        count: usize,
    ) -> Result<Vec<Question>, AppError> {
        log::debug!(
            "MockQuestionGenerator: {} questions about '{}' for ages {}-{}",
            count,
            topic,
            age_range.min,
            age_range.max
        );

        let id = || Uuid::new_v4().to_string();
        let questions = vec![
            question(
                id(),
                "What is 2 + 2?",
                ["3", "4", "5", "6"],
                1,
                "2 + 2 equals 4! When you add 2 and 2 together, you get 4.",
                Difficulty::Easy,
            ),
            question(
                id(),
                "Which animal lives in the ocean?",
                ["Elephant", "Fish", "Lion", "Bear"],
                1,
                "Fish live in the ocean! They have gills to breathe underwater.",
                Difficulty::Easy,
            ),
            question(
                id(),
                "What color do you get when you mix red and blue?",
                ["Green", "Purple", "Orange", "Yellow"],
                1,
                "Red and blue make purple! Mixing these two colors creates purple.",
                Difficulty::Easy,
            ),
            question(
                id(),
                "How many sides does a triangle have?",
                ["2", "3", "4", "5"],
                1,
                "A triangle has 3 sides! That's why it's called a 'tri'angle.",
                Difficulty::Easy,
            ),
            question(
                id(),
                "What do plants need to grow?",
                ["Water only", "Sunlight only", "Water and sunlight", "Nothing"],
                2,
                "Plants need both water and sunlight to grow healthy and strong!",
                Difficulty::Easy,
            ),
        ];

        Ok(questions.into_iter().take(count).collect())
    }
}

/// Last-resort local questions used when generation fails
pub fn fallback_questions(difficulty: Difficulty, count: usize) -> Vec<Question> {
    let questions = [
        (
            "What is the capital of France?",
            ["London", "Berlin", "Paris", "Madrid"],
            2,
            "Paris is the capital and largest city of France.",
        ),
        (
            "Which planet is closest to the Sun?",
            ["Venus", "Mercury", "Earth", "Mars"],
            1,
            "Mercury is the closest planet to the Sun in our solar system.",
        ),
        (
            "What is 2 + 2?",
            ["3", "4", "5", "6"],
            1,
            "2 + 2 equals 4.",
        ),
        (
            "Which animal is known as the 'King of the Jungle'?",
            ["Tiger", "Lion", "Elephant", "Giraffe"],
            1,
            "The lion is often called the 'King of the Jungle'.",
        ),
        (
            "What color do you get when you mix red and blue?",
            ["Green", "Purple", "Orange", "Yellow"],
            1,
            "Red and blue make purple when mixed together.",
        ),
    ];

    questions
        .into_iter()
        .enumerate()
        .take(count)
        .map(|(i, (text, options, correct, explanation))| {
            question(
                format!("mock_{}", i + 1),
                text,
                options,
                correct,
                explanation,
                difficulty,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_generator_respects_count() {
        let questions = MockQuestionGenerator
            .generate("science", Difficulty::Easy, AgeRange::new(6, 12), 3)
            .await
            .unwrap();
        assert_eq!(questions.len(), 3);
        assert!(questions.iter().all(Question::is_well_formed));
        assert_ne!(questions[0].id, questions[1].id);
    }

    #[tokio::test]
    async fn test_mock_generator_caps_at_available() {
        let questions = MockQuestionGenerator
            .generate("math", Difficulty::Hard, AgeRange::new(5, 12), 50)
            .await
            .unwrap();
        assert_eq!(questions.len(), 5);
    }

    #[test]
    fn test_fallback_questions_take_requested_difficulty() {
        let questions = fallback_questions(Difficulty::Medium, 2);
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].id, "mock_1");
        assert!(questions.iter().all(|q| q.difficulty == Difficulty::Medium));
        assert!(questions.iter().all(Question::is_well_formed));
    }
}
