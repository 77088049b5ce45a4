//! Analytics Middleware
//!
//! Reports product events (launch, quiz completion, purchase intent) as
//! `info` records under the `analytics` log target. A child's progress
//! report is only recorded when their age and parental controls allow it.

use crate::actions::{Action, LifecycleAction, QuizAction, SubscriptionAction};
use crate::effect::Effects;
use crate::middleware::Middleware;
use crate::state::AppState;
use kwiz_domain::QuizScore;
use kwiz_services::safety;

#[derive(Debug)]
pub struct AnalyticsMiddleware;

impl AnalyticsMiddleware {
    pub fn new() -> Self {
        Self
    }

    fn track(&self, event: &str, detail: String) {
        log::info!(target: "analytics", "{} {}", event, detail);
    }
}

/// Progress report for the signed-in child, if tracking is allowed
fn progress_for(score: &QuizScore, state: &AppState) -> Option<String> {
    let user = state.user.as_ref()?;
    let allowed = user.preferences.parental_controls.progress_tracking
        && safety::should_track_progress(user.age);
    allowed.then(|| safety::progress_report(score, user.age))
}

impl Default for AnalyticsMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for AnalyticsMiddleware {
    fn handle(&mut self, action: Action, state: &AppState, _effects: &mut Effects) -> Action {
        match &action {
            Action::Lifecycle(LifecycleAction::AppLaunched) => {
                self.track("app_launched", String::new());
            }
            Action::Quiz(QuizAction::QuizCompleted(score)) => {
                self.track(
                    "quiz_completed",
                    format!(
                        "category={} score={}% time={}s",
                        score.category.id,
                        score.percentage(),
                        score.time_spent
                    ),
                );
                if let Some(report) = progress_for(score, state) {
                    self.track("progress", report);
                }
            }
            Action::Subscription(SubscriptionAction::PurchaseSubscription) => {
                self.track(
                    "purchase_started",
                    format!("from={}", state.subscription_status),
                );
            }
            _ => {}
        }
        action
    }
}
