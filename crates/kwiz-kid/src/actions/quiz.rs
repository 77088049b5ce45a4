//! Quiz flow actions
//!
//! The usual sequence is `SelectCategory` → `StartQuiz` → `QuizLoaded` →
//! answers collected by the quiz view → `SubmitQuiz` → `QuizCompleted`.

use kwiz_domain::{AppError, Quiz, QuizCategory, QuizScore};

#[derive(Debug, Clone, PartialEq)]
pub enum QuizAction {
    /// Open the quiz screen for a category
    SelectCategory(QuizCategory),
    /// Request questions for a category (handled by QuizMiddleware)
    StartQuiz(QuizCategory),
    QuizLoaded(Quiz),
    QuizLoadFailed(AppError),
    /// Selected option index; answer tracking stays in the quiz view
    AnswerQuestion(usize),
    /// Answers handed in, score being computed
    SubmitQuiz,
    QuizCompleted(QuizScore),
}
