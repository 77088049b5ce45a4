//! Quiz Middleware
//!
//! Builds a quiz for `StartQuiz` from the content service. The load is
//! screen-scoped: leaving the quiz screen before it finishes cancels it and
//! clears the loading flag `StartQuiz` raised. A signed-in child's quiz is
//! never longer than the session length suggested for their age.

use crate::actions::{Action, QuizAction, UiAction};
use crate::effect::{Effect, Effects};
use crate::middleware::Middleware;
use crate::state::AppState;
use kwiz_config::AppConfig;
use kwiz_domain::{AppError, Quiz};
use kwiz_services::{safety, ContentService};
use std::sync::Arc;

pub struct QuizMiddleware {
    content: Arc<dyn ContentService>,
    config: AppConfig,
}

impl QuizMiddleware {
    pub fn new(content: Arc<dyn ContentService>, config: &AppConfig) -> Self {
        Self {
            content,
            config: config.clone(),
        }
    }
}

impl Middleware for QuizMiddleware {
    fn handle(&mut self, action: Action, state: &AppState, effects: &mut Effects) -> Action {
        match &action {
            Action::Quiz(QuizAction::StartQuiz(category)) => {
                let content = Arc::clone(&self.content);
                let category = category.clone();
                let config = self.config.clone();
                let session_cap = state
                    .user
                    .as_ref()
                    .map(|user| safety::recommended_time_limit(user.age).saturating_mul(60));

                effects.push(
                    Effect::task(
                        "load_quiz",
                        async move {
                            let questions = content
                                .generate_questions(&category, config.questions_per_quiz)
                                .await?;
                            if questions.is_empty() {
                                return Err(AppError::Content(format!(
                                    "No questions available for {}",
                                    category.name
                                )));
                            }

                            let mut time_limit = config.quiz_time_limit(questions.len());
                            if let Some(cap) = session_cap {
                                time_limit = time_limit.min(cap);
                            }
                            let quiz = Quiz {
                                id: uuid::Uuid::new_v4().to_string(),
                                category,
                                questions,
                                time_limit,
                            };
                            Ok(QuizAction::QuizLoaded(quiz).into())
                        },
                        |e| QuizAction::QuizLoadFailed(e).into(),
                    )
                    .screen_scoped(UiAction::SetLoading(false)),
                );
            }
            Action::Quiz(QuizAction::SubmitQuiz) => {
                log::debug!("QuizMiddleware: Quiz submitted");
            }
            _ => {}
        }
        action
    }
}
