//! Content Safety Middleware
//!
//! Stops a quiz from starting when the signed-in child is younger than the
//! category's age range, or the category's own wording is unsuitable for
//! them, and their parental controls ask for filtering. The
//! `StartQuiz` action is replaced by a content error, so the quiz middleware
//! never sees it and the reducer shows the error banner instead.

use crate::actions::{Action, QuizAction, UiAction};
use crate::effect::Effects;
use crate::middleware::Middleware;
use crate::state::AppState;
use kwiz_domain::{AppError, QuizCategory, User};
use kwiz_services::safety;

pub const AGE_BLOCKED_MESSAGE: &str = "Content not appropriate for this age group";

pub struct ContentSafetyMiddleware {
    enforce_age_range: bool,
}

impl ContentSafetyMiddleware {
    pub fn new(enforce_age_range: bool) -> Self {
        Self { enforce_age_range }
    }
}

impl Default for ContentSafetyMiddleware {
    fn default() -> Self {
        Self::new(true)
    }
}

fn unsuitable_for(user: &User, category: &QuizCategory) -> bool {
    if !user.preferences.parental_controls.content_filter {
        return false;
    }
    let blurb = format!("{} {}", category.name, category.description);
    user.age < category.age_range.min
        || !safety::validate_content_for_children(&blurb)
        || !safety::is_content_appropriate_for_age(&blurb, user.age)
}

impl Middleware for ContentSafetyMiddleware {
    fn handle(&mut self, action: Action, state: &AppState, _effects: &mut Effects) -> Action {
        if !self.enforce_age_range {
            return action;
        }

        let blocked = match (&action, &state.user) {
            (Action::Quiz(QuizAction::StartQuiz(category)), Some(user)) => {
                unsuitable_for(user, category)
            }
            _ => false,
        };

        if blocked {
            log::warn!("ContentSafetyMiddleware: Blocked {:?}", action);
            return Action::Ui(UiAction::SetError(Some(AppError::Content(
                AGE_BLOCKED_MESSAGE.to_string(),
            ))));
        }
        action
    }
}
