//! Subscription collaborator

use async_trait::async_trait;
use kwiz_domain::{AppError, SubscriptionStatus};
use std::sync::{Mutex, PoisonError};

/// Checks and purchases the premium subscription
#[async_trait]
pub trait SubscriptionService: Send + Sync {
    async fn check_status(&self) -> Result<SubscriptionStatus, AppError>;

    async fn purchase(&self) -> Result<(), AppError>;
}

/// In-process store front without a payment backend
///
/// Starts at the configured status; a purchase always succeeds and
/// upgrades to premium.
#[derive(Debug, Default)]
pub struct StubSubscriptionService {
    status: Mutex<SubscriptionStatus>,
}

impl StubSubscriptionService {
    pub fn new(initial: SubscriptionStatus) -> Self {
        Self {
            status: Mutex::new(initial),
        }
    }

    fn current(&self) -> SubscriptionStatus {
        *self.status.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl SubscriptionService for StubSubscriptionService {
    async fn check_status(&self) -> Result<SubscriptionStatus, AppError> {
        Ok(self.current())
    }

    async fn purchase(&self) -> Result<(), AppError> {
        log::info!("StubSubscriptionService: purchase completed");
        *self.status.lock().unwrap_or_else(PoisonError::into_inner) = SubscriptionStatus::Premium;
        Ok(())
    }
}
