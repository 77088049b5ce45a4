//! Subscription Middleware
//!
//! Status checks and purchases against the [`SubscriptionService`]. Both
//! report failure as `SubscriptionPurchaseFailed`.

use crate::actions::{Action, SubscriptionAction};
use crate::effect::{Effect, Effects};
use crate::middleware::Middleware;
use crate::state::AppState;
use kwiz_domain::AppError;
use kwiz_services::SubscriptionService;
use std::sync::Arc;

pub struct SubscriptionMiddleware {
    subscription: Arc<dyn SubscriptionService>,
}

impl SubscriptionMiddleware {
    pub fn new(subscription: Arc<dyn SubscriptionService>) -> Self {
        Self { subscription }
    }
}

fn subscription_failed(error: AppError) -> Action {
    SubscriptionAction::SubscriptionPurchaseFailed(error).into()
}

impl Middleware for SubscriptionMiddleware {
    fn handle(&mut self, action: Action, state: &AppState, effects: &mut Effects) -> Action {
        match &action {
            Action::Subscription(SubscriptionAction::CheckSubscriptionStatus) => {
                let subscription = Arc::clone(&self.subscription);
                effects.push(Effect::task(
                    "check_subscription",
                    async move {
                        let status = subscription.check_status().await?;
                        Ok(SubscriptionAction::SubscriptionStatusUpdated(status).into())
                    },
                    subscription_failed,
                ));
            }
            Action::Subscription(SubscriptionAction::PurchaseSubscription) => {
                if state.subscription_status.has_premium_access() {
                    log::info!(
                        "SubscriptionMiddleware: Purchase requested while already {}",
                        state.subscription_status
                    );
                }
                let subscription = Arc::clone(&self.subscription);
                effects.push(Effect::task(
                    "purchase_subscription",
                    async move {
                        subscription.purchase().await?;
                        Ok(SubscriptionAction::SubscriptionPurchased.into())
                    },
                    subscription_failed,
                ));
            }
            _ => {}
        }
        action
    }
}
