use crate::actions::QuizAction;
use crate::state::{AppState, Screen};

/// Quiz reducer
///
/// `QuizCompleted` always lands on the results screen, clears the loaded
/// quiz and folds the score into the user's stats.
pub fn reduce_quiz(mut state: AppState, action: &QuizAction) -> AppState {
    match action {
        QuizAction::SelectCategory(category) => {
            state.current_screen = Screen::Quiz(category.clone());
        }
        QuizAction::StartQuiz(_) => {
            state.is_loading = true;
            state.error_message = None;
        }
        QuizAction::QuizLoaded(quiz) => {
            log::debug!(
                "Quiz {} loaded with {} questions",
                quiz.id,
                quiz.questions.len()
            );
            state.current_quiz = Some(quiz.clone());
            state.is_loading = false;
        }
        QuizAction::QuizLoadFailed(error) => {
            state.is_loading = false;
            state.error_message = Some(error.to_string());
        }
        // Answers are tracked by the quiz screen until submission
        QuizAction::AnswerQuestion(_) => {}
        QuizAction::SubmitQuiz => {
            state.is_loading = true;
        }
        QuizAction::QuizCompleted(score) => {
            state.user_stats.record(score);
            state.is_loading = false;
            state.current_screen = Screen::Results(score.clone());
            state.current_quiz = None;
        }
    }
    state
}
