//! Subscription actions

use kwiz_domain::{AppError, SubscriptionStatus};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubscriptionAction {
    /// Request a status check (handled by SubscriptionMiddleware)
    CheckSubscriptionStatus,
    SubscriptionStatusUpdated(SubscriptionStatus),
    /// Request a purchase (handled by SubscriptionMiddleware)
    PurchaseSubscription,
    SubscriptionPurchased,
    /// Status check or purchase failed
    SubscriptionPurchaseFailed(AppError),
}
