//! Application State

use super::{CurrentTab, Screen};
use kwiz_domain::{Quiz, QuizCategory, SubscriptionStatus, User, UserStats};
use serde::Serialize;

/// Application state
///
/// One snapshot is live at a time. The store replaces it wholesale after
/// every dispatch; nothing outside the reducer edits it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AppState {
    pub current_screen: Screen,
    pub selected_tab: CurrentTab,
    pub user: Option<User>,
    /// Catalog in display order
    pub categories: Vec<QuizCategory>,
    /// Loaded quiz, cleared once it completes
    pub current_quiz: Option<Quiz>,
    pub is_loading: bool,
    pub error_message: Option<String>,
    pub subscription_status: SubscriptionStatus,
    pub user_stats: UserStats,
}

impl AppState {
    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }
}
