use crate::actions::SubscriptionAction;
use crate::state::AppState;
use kwiz_domain::SubscriptionStatus;

pub fn reduce_subscription(mut state: AppState, action: &SubscriptionAction) -> AppState {
    match action {
        SubscriptionAction::CheckSubscriptionStatus | SubscriptionAction::PurchaseSubscription => {
            state.is_loading = true;
        }
        SubscriptionAction::SubscriptionStatusUpdated(status) => {
            state.subscription_status = *status;
            state.is_loading = false;
        }
        SubscriptionAction::SubscriptionPurchased => {
            state.subscription_status = SubscriptionStatus::Premium;
            state.is_loading = false;
        }
        SubscriptionAction::SubscriptionPurchaseFailed(error) => {
            state.is_loading = false;
            state.error_message = Some(error.to_string());
        }
    }
    state
}
