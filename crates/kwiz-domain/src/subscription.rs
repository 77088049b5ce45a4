use serde::{Deserialize, Serialize};
use strum::Display;

/// Subscription tier of the current install
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SubscriptionStatus {
    #[default]
    Free,
    Premium,
    Trial,
}

impl SubscriptionStatus {
    /// Premium content is unlocked for paying and trial users
    pub fn has_premium_access(&self) -> bool {
        matches!(self, SubscriptionStatus::Premium | SubscriptionStatus::Trial)
    }
}
