//! Lifecycle Middleware
//!
//! Kicks off the startup loads on launch and refreshes the subscription
//! status whenever the app returns to the foreground.

use crate::actions::{Action, CategoryAction, LifecycleAction, SubscriptionAction};
use crate::effect::{Effect, Effects};
use crate::middleware::Middleware;
use crate::state::AppState;

pub struct LifecycleMiddleware;

impl LifecycleMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LifecycleMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for LifecycleMiddleware {
    fn handle(&mut self, action: Action, _state: &AppState, effects: &mut Effects) -> Action {
        match &action {
            Action::Lifecycle(LifecycleAction::AppLaunched) => {
                log::info!("LifecycleMiddleware: App launched, loading categories");
                effects.push(Effect::dispatch(
                    "load_categories",
                    CategoryAction::LoadCategories.into(),
                ));
                effects.push(Effect::dispatch(
                    "check_subscription",
                    SubscriptionAction::CheckSubscriptionStatus.into(),
                ));
            }
            Action::Lifecycle(LifecycleAction::AppWillEnterForeground) => {
                effects.push(Effect::dispatch(
                    "check_subscription",
                    SubscriptionAction::CheckSubscriptionStatus.into(),
                ));
            }
            Action::Lifecycle(LifecycleAction::AppDidEnterBackground) => {
                log::debug!("LifecycleMiddleware: App entered background");
            }
            _ => {}
        }
        action
    }
}
